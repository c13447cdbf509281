//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every failure here becomes an `invalid_request` domain error carrying a
//! `details` object, which the error mapping renders as a 422 response.

use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use serde_json::{Value, json};
use tracing::debug;

use crate::domain::{Error, FieldViolation, PEAK_NOT_FOUND, PeakId, ValidationErrors};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidInteger,
    InvalidBody,
    ValidationFailed,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInteger => "invalid_integer",
            Self::InvalidBody => "invalid_body",
            Self::ValidationFailed => "validation_failed",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn invalid_integer_error(field: FieldName, value: &str, expectation: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be {expectation}")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidInteger.as_str(),
    }))
}

/// Parse an optional query value as a non-negative integer.
pub(crate) fn parse_optional_u32(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<u32>, Error> {
    value
        .map(|raw| {
            raw.parse::<u32>()
                .map_err(|_| invalid_integer_error(field, &raw, "a non-negative integer"))
        })
        .transpose()
}

fn is_integer_literal(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a path segment as a peak identifier.
///
/// Integers too large for the id column cannot name a stored peak, so they
/// are reported as missing rather than malformed.
pub(crate) fn parse_peak_id(value: &str, field: FieldName) -> Result<PeakId, Error> {
    match value.parse::<i32>() {
        Ok(id) => Ok(PeakId::new(id)),
        Err(_) if is_integer_literal(value) => {
            debug!(peak_id = value, "peak id outside the stored range");
            Err(Error::not_found(PEAK_NOT_FOUND))
        }
        Err(_) => Err(invalid_integer_error(field, value, "an integer")),
    }
}

fn violation_details(violation: &FieldViolation) -> Value {
    let mut entry = json!({
        "field": violation.field(),
        "code": violation.code(),
        "message": violation.to_string(),
    });
    if let (Some(value), Some(map)) = (violation.value(), entry.as_object_mut()) {
        map.insert("value".to_owned(), json!(value));
    }
    entry
}

/// Render domain validation failures, listing every offending field.
pub(crate) fn validation_error(errors: &ValidationErrors) -> Error {
    let fields: Vec<Value> = errors.violations().iter().map(violation_details).collect();
    Error::invalid_request(errors.to_string()).with_details(json!({
        "code": ErrorCode::ValidationFailed.as_str(),
        "fields": fields,
    }))
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        validation_error(&errors)
    }
}

/// `JsonConfig` error handler turning undecodable bodies into domain errors.
pub(crate) fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "rejected request body");
    Error::invalid_request(format!("request body is invalid: {err}"))
        .with_details(json!({"code": ErrorCode::InvalidBody.as_str()}))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorCode as DomainErrorCode, PeakDraft};
    use rstest::rstest;

    #[rstest]
    #[case(None, Ok(None))]
    #[case(Some("0"), Ok(Some(0)))]
    #[case(Some("25"), Ok(Some(25)))]
    #[case(Some("-1"), Err(()))]
    #[case(Some("ten"), Err(()))]
    #[case(Some(""), Err(()))]
    fn optional_u32_parsing(#[case] raw: Option<&str>, #[case] expected: Result<Option<u32>, ()>) {
        let parsed = parse_optional_u32(raw.map(str::to_owned), FieldName::new("skip"));
        assert_eq!(parsed.map_err(|_| ()), expected);
    }

    #[rstest]
    fn integer_error_names_field_and_value() {
        let err = parse_optional_u32(Some("-3".to_owned()), FieldName::new("limit"))
            .expect_err("negative");
        assert_eq!(err.message(), "limit must be a non-negative integer");
        assert_eq!(
            err.details(),
            Some(&json!({"field": "limit", "value": "-3", "code": "invalid_integer"}))
        );
    }

    #[rstest]
    #[case("17", Ok(17))]
    #[case("-4", Ok(-4))]
    #[case("+8", Ok(8))]
    #[case("abc", Err(DomainErrorCode::InvalidRequest))]
    #[case("-", Err(DomainErrorCode::InvalidRequest))]
    #[case("1.5", Err(DomainErrorCode::InvalidRequest))]
    #[case("99999999999", Err(DomainErrorCode::NotFound))]
    #[case("-2147483649", Err(DomainErrorCode::NotFound))]
    fn peak_id_parsing(#[case] raw: &str, #[case] expected: Result<i32, DomainErrorCode>) {
        let parsed = parse_peak_id(raw, FieldName::new("peak_id"));
        assert_eq!(parsed.map(PeakId::get).map_err(|err| err.code()), expected);
    }

    #[rstest]
    fn oversized_id_reads_as_missing_peak() {
        let err = parse_peak_id("99999999999", FieldName::new("peak_id")).expect_err("too large");
        assert_eq!(err.message(), "Peak not found");
        assert!(err.details().is_none());
    }

    #[rstest]
    fn validation_error_lists_fields() {
        let errors = PeakDraft::new("", 95.0, 0.0, 0.0).expect_err("invalid");
        let err = validation_error(&errors);
        assert_eq!(err.message(), "peak failed validation");
        assert_eq!(
            err.details(),
            Some(&json!({
                "code": "validation_failed",
                "fields": [
                    {"field": "name", "code": "empty", "message": "name must not be empty"},
                    {
                        "field": "latitude",
                        "code": "out_of_range",
                        "message": "latitude must be between -90 and 90",
                        "value": 95.0
                    }
                ]
            }))
        );
    }
}
