//! Tests for the domain error payload and its serialised shape.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::forbidden("denied"), ErrorCode::Forbidden)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::duplicate_email("taken"), ErrorCode::DuplicateEmail)]
#[case(Error::duplicate_code("taken"), ErrorCode::DuplicateCode)]
#[case(Error::already_enrolled("twice"), ErrorCode::AlreadyEnrolled)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn try_with_trace_id_rejects_empty_values() {
    let result = Error::forbidden("denied").try_with_trace_id("   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyTraceId)));
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id
        .parse()
        .expect("fixtures provide a valid UUID");
    let error = TraceId::scope(trace_id, async move {
        Error::try_new(ErrorCode::Forbidden, "denied")
            .expect("validation accepts non-empty message")
    })
    .await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
fn message_is_serialised_as_detail(expected_trace_id: String) {
    let error = Error::already_enrolled("Student is already enrolled in this course")
        .with_trace_id(expected_trace_id.clone());

    let value = serde_json::to_value(&error).expect("error serialises");
    assert_eq!(
        value,
        json!({
            "code": "already_enrolled",
            "detail": "Student is already enrolled in this course",
            "traceId": expected_trace_id,
        })
    );
}

#[rstest]
fn details_survive_a_json_round_trip() {
    let error = Error::invalid_request("email must be a valid email address")
        .with_details(json!({ "field": "email", "code": "invalid_email" }));

    let encoded = serde_json::to_string(&error).expect("error serialises");
    let decoded: Error = serde_json::from_str(&encoded).expect("error deserialises");

    assert_eq!(decoded, error);
}
