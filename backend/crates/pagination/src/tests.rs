//! Unit coverage for page windows and envelopes.

use super::*;
use rstest::rstest;
use serde_json::json;

fn collection(total: usize) -> Vec<usize> {
    (0..total).collect()
}

#[rstest]
#[case(0, 1)]
#[case(1, 0)]
fn zero_values_are_rejected(#[case] page: u32, #[case] limit: u32) {
    let err = PageRequest::new(page, limit).expect_err("zero must be rejected");
    let expected = if page == 0 {
        PageRequestError::InvalidPage
    } else {
        PageRequestError::InvalidLimit
    };
    assert_eq!(err, expected);
}

#[rstest]
fn default_request_is_first_page_of_ten() {
    let request = PageRequest::default();
    assert_eq!(request.page(), DEFAULT_PAGE);
    assert_eq!(request.limit(), DEFAULT_LIMIT);
}

#[rstest]
#[case(255, 1, 10)]
#[case(255, 3, 10)]
#[case(255, 26, 10)]
#[case(255, 27, 10)]
#[case(0, 1, 10)]
#[case(7, 2, 5)]
#[case(7, 1, 999)]
#[case(10, 4_000_000, 4_000)]
fn slice_length_matches_formula(#[case] total: usize, #[case] page: u32, #[case] limit: u32) {
    let request = PageRequest::new(page, limit).expect("valid request");
    let page_items = Paginated::from_collection(collection(total), request);

    let expected = if request.is_unpaginated() {
        total
    } else {
        let offset = (page as usize - 1).saturating_mul(limit as usize);
        (limit as usize).min(total.saturating_sub(offset))
    };
    assert_eq!(page_items.data.len(), expected);
    assert_eq!(page_items.pagination.total, total);
}

#[rstest]
fn unpaginated_limit_returns_everything_and_echoes_page() {
    let request = PageRequest::new(4, UNPAGINATED_LIMIT).expect("valid request");
    let page_items = Paginated::from_collection(collection(255), request);

    assert_eq!(page_items.data.len(), 255);
    assert_eq!(page_items.pagination.page, 4);
    assert_eq!(page_items.pagination.total_pages, 1);
}

#[rstest]
fn pages_preserve_collection_order() {
    let request = PageRequest::new(2, 3).expect("valid request");
    let page_items = Paginated::from_collection(collection(10), request);
    assert_eq!(page_items.data, vec![3, 4, 5]);
}

#[rstest]
fn empty_collection_has_zero_pages() {
    let page_items = Paginated::from_collection(Vec::<u8>::new(), PageRequest::default());
    assert!(page_items.data.is_empty());
    assert_eq!(page_items.pagination.total_pages, 0);
}

#[rstest]
fn map_keeps_metadata() {
    let request = PageRequest::new(1, 2).expect("valid request");
    let mapped = Paginated::from_collection(collection(5), request).map(|n| n * 10);
    assert_eq!(mapped.data, vec![0, 10]);
    assert_eq!(mapped.pagination.total, 5);
    assert_eq!(mapped.pagination.total_pages, 3);
}

#[rstest]
fn metadata_serialises_in_camel_case() {
    let request = PageRequest::new(3, 10).expect("valid request");
    let page_items = Paginated::from_collection(collection(255), request);
    let value = serde_json::to_value(page_items.pagination).expect("serialise metadata");
    assert_eq!(
        value,
        json!({ "total": 255, "page": 3, "limit": 10, "totalPages": 26 })
    );
}
