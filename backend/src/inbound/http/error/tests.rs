//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde::Deserialize;
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(Error::invalid_request("Search query is required"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("Authentication required"), StatusCode::UNAUTHORIZED)]
#[case(Error::forbidden("Insufficient permissions"), StatusCode::FORBIDDEN)]
#[case(Error::not_found("Dish not found"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("User with this email already exists"), StatusCode::CONFLICT)]
#[case(Error::internal("store unreadable"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_follows_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

async fn render(error: &Error) -> (StatusCode, Option<String>, Error) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let payload = serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds");
    (status, header, payload)
}

#[actix_web::test]
async fn internal_errors_are_redacted_but_keep_the_trace_id() {
    let error = Error::internal("failed to parse users.json at line 3")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "path": "/srv/dishes/users.json" }));

    let (status, header, payload) = render(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(payload.code(), ErrorCode::InternalError);
    assert_eq!(payload.message(), "Internal server error");
    assert_eq!(payload.trace_id(), Some(TRACE_ID));
    assert!(payload.details().is_none());
}

#[actix_web::test]
async fn client_errors_keep_message_and_details() {
    let error = Error::invalid_request("page must be a positive integer")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "field": "page", "value": "0" }));

    let (status, header, payload) = render(&error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(payload, error);
}

#[actix_web::test]
async fn missing_trace_id_omits_the_header() {
    let error = Error::not_found("Dish not found");

    let (_, header, payload) = render(&error).await;

    assert!(header.is_none(), "Trace-Id header should not be present");
    assert_eq!(payload.trace_id(), None);
}

#[rstest]
fn actix_errors_become_redacted_internal_errors() {
    let err: Error = actix_web::error::ErrorBadRequest("boom").into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
    assert_eq!(err.details(), None);
}

#[derive(Deserialize)]
struct Paging {
    #[expect(dead_code, reason = "Only the extraction outcome is under test")]
    page: u32,
}

fn extractor_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .route(
            "/echo",
            web::post().to(|body: web::Json<Value>| async move {
                HttpResponse::Ok().json(body.into_inner())
            }),
        )
        .route(
            "/paged",
            web::get().to(|_: web::Query<Paging>| async { HttpResponse::Ok().finish() }),
        );
}

#[rstest]
#[case::malformed("application/json", "{ nope", "Malformed JSON body")]
#[case::wrong_type("text/plain", "{}", "Request body must be JSON")]
#[actix_web::test]
async fn json_extraction_failures_are_invalid_requests(
    #[case] content_type: &str,
    #[case] payload: &'static str,
    #[case] message: &str,
) {
    let app = actix_test::init_service(
        App::new()
            .configure(extractor_routes)
            .default_service(web::to(route_not_found)),
    )
    .await;
    let request = actix_test::TestRequest::post()
        .uri("/echo")
        .insert_header(("content-type", content_type))
        .set_payload(payload)
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Error = actix_test::read_body_json(response).await;
    assert_eq!(body.code(), ErrorCode::InvalidRequest);
    assert_eq!(body.message(), message);
    assert!(body.details().and_then(|d| d.get("reason")).is_some());
}

#[actix_web::test]
async fn query_extraction_failures_are_invalid_requests() {
    let app = actix_test::init_service(
        App::new()
            .configure(extractor_routes)
            .default_service(web::to(route_not_found)),
    )
    .await;
    let request = actix_test::TestRequest::get()
        .uri("/paged?page=first")
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Error = actix_test::read_body_json(response).await;
    assert_eq!(body.message(), "Malformed query string");
}

#[actix_web::test]
async fn unknown_routes_name_the_path() {
    let app = actix_test::init_service(
        App::new()
            .configure(extractor_routes)
            .default_service(web::to(route_not_found)),
    )
    .await;
    let request = actix_test::TestRequest::delete().uri("/nowhere").to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Error = actix_test::read_body_json(response).await;
    assert_eq!(body.code(), ErrorCode::NotFound);
    assert_eq!(body.message(), "Route not found: /nowhere");
}
