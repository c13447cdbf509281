//! Tests for the domain error payload and its serde contract.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn base_error() -> Error {
    Error::invalid_request("bad")
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn convenience_constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn try_with_trace_id_rejects_empty_values(base_error: Error) {
    let result = base_error.try_with_trace_id("   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyTraceId)));
}

#[rstest]
fn new_has_no_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid trace id");
    let error = TraceId::scope(trace_id, async { Error::not_found("Peak not found") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields(base_error: Error) {
    let value = serde_json::to_value(base_error).expect("serialise error");
    assert_eq!(value, json!({"code": "invalid_request", "message": "bad"}));
}

#[rstest]
fn serialises_trace_id_and_details(base_error: Error) {
    let error = base_error
        .with_trace_id(TRACE_ID)
        .with_details(json!({"field": "latitude"}));
    let value = serde_json::to_value(error).expect("serialise error");
    assert_eq!(
        value,
        json!({
            "code": "invalid_request",
            "message": "bad",
            "traceId": TRACE_ID,
            "details": {"field": "latitude"}
        })
    );
}

#[rstest]
fn deserialisation_accepts_snake_case_trace_id() {
    let payload = json!({"code": "not_found", "message": "Peak not found", "trace_id": TRACE_ID});
    let error: Error = serde_json::from_value(payload).expect("deserialise error");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
#[case(json!({"code": "not_found", "message": "  "}))]
#[case(json!({"code": "not_found", "message": "missing", "traceId": ""}))]
#[case(json!({"code": "not_found", "message": "missing", "extra": 1}))]
fn deserialisation_rejects_invalid_payloads(#[case] payload: serde_json::Value) {
    let result: Result<Error, _> = serde_json::from_value(payload);
    assert!(result.is_err());
}
