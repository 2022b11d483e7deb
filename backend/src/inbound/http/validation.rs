//! Shared validation helpers for inbound HTTP adapters.
//!
//! Query parameters arrive as raw strings so that malformed values produce a
//! field-specific `invalid_request` payload instead of a generic extractor
//! failure.

use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidNumber,
    InvalidValue,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidNumber => "invalid_number",
            ErrorCode::InvalidValue => "invalid_value",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field: field.as_str(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: &str) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value,
            "code": code.as_str(),
        }))
    }
}

/// `400` for a required field that was absent or blank.
pub(crate) fn missing_field_error(field: FieldName, message: &str) -> Error {
    ValidationError::new(field, message).with_code(ErrorCode::MissingField)
}

/// `400` for a value outside the accepted set.
pub(crate) fn invalid_value_error(field: FieldName, value: &str, expected: &str) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("{name} must be one of: {expected}"))
        .with_value(ErrorCode::InvalidValue, value)
}

fn invalid_number_error(field: FieldName, value: &str, requirement: &str) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("{name} must be {requirement}"))
        .with_value(ErrorCode::InvalidNumber, value)
}

/// Treat absent and whitespace-only parameters alike.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    })
}

/// Parse an optional integer `>= 1`, falling back to `default` when absent.
pub(crate) fn parse_positive(
    value: Option<String>,
    field: FieldName,
    default: u32,
) -> Result<u32, Error> {
    let Some(raw) = non_blank(value) else {
        return Ok(default);
    };
    match raw.parse::<u32>() {
        Ok(number) if number >= 1 => Ok(number),
        _ => Err(invalid_number_error(field, &raw, "a positive integer")),
    }
}

/// Parse an optional whole number of minutes.
pub(crate) fn parse_minutes(value: Option<String>, field: FieldName) -> Result<Option<u32>, Error> {
    non_blank(value)
        .map(|raw| {
            raw.parse::<u32>()
                .map_err(|_| invalid_number_error(field, &raw, "a non-negative integer"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainErrorCode;
    use rstest::rstest;

    const PAGE: FieldName = FieldName::new("page");

    #[rstest]
    #[case(None, 1)]
    #[case(Some(""), 1)]
    #[case(Some("  "), 1)]
    #[case(Some("3"), 3)]
    #[case(Some(" 7 "), 7)]
    fn positive_numbers_parse_or_default(#[case] raw: Option<&str>, #[case] expected: u32) {
        let parsed = parse_positive(raw.map(str::to_owned), PAGE, 1).expect("valid page");
        assert_eq!(parsed, expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-2")]
    #[case("abc")]
    #[case("1.5")]
    fn rejects_non_positive_numbers(#[case] raw: &str) {
        let err = parse_positive(Some(raw.to_owned()), PAGE, 1).expect_err("invalid page");

        assert_eq!(err.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(err.message(), "page must be a positive integer");
        let details = err.details().expect("details");
        assert_eq!(details["field"], "page");
        assert_eq!(details["value"], raw);
        assert_eq!(details["code"], "invalid_number");
    }

    #[rstest]
    fn minutes_accept_zero_and_reject_garbage() {
        let field = FieldName::new("maxPrepTime");
        assert_eq!(parse_minutes(Some("0".to_owned()), field).expect("zero"), Some(0));
        assert_eq!(parse_minutes(None, field).expect("absent"), None);
        let err = parse_minutes(Some("soon".to_owned()), field).expect_err("garbage");
        assert_eq!(err.message(), "maxPrepTime must be a non-negative integer");
    }
}
