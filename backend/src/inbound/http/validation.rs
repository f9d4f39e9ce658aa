//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every boundary failure becomes an `InvalidRequest` domain error whose
//! `details` name the offending field and a stable machine code.

use serde_json::json;

use crate::domain::{CourseValidationError, Error, UserValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    EmptyField,
    InvalidEmail,
    InvalidInteger,
    InvalidRole,
    MalformedBody,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::EmptyField => "empty_field",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidInteger => "invalid_integer",
            Self::InvalidRole => "invalid_role",
            Self::MalformedBody => "malformed_body",
        }
    }
}

/// Newtype wrapper for HTTP field and header names.
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

fn field_error(field: FieldName, code: ValidationCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn field_value_error(
    field: FieldName,
    code: ValidationCode,
    value: &str,
    message: impl Into<String>,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ValidationCode::MissingField,
        format!("missing required field: {name}"),
    )
}

pub(crate) fn invalid_integer_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    field_value_error(
        field,
        ValidationCode::InvalidInteger,
        value,
        format!("{name} must be a non-negative integer"),
    )
}

pub(crate) fn invalid_role_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    field_value_error(
        field,
        ValidationCode::InvalidRole,
        value,
        format!("{name} must be one of: student, admin"),
    )
}

/// Parse an integer id carried in a header or path segment.
pub(crate) fn parse_id(value: &str, field: FieldName) -> Result<u64, Error> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| invalid_integer_error(field, value))
}

/// Wrap a JSON or path extraction failure as an `InvalidRequest` error.
pub(crate) fn malformed_body_error(reason: impl std::fmt::Display) -> Error {
    Error::invalid_request(format!("request could not be parsed: {reason}"))
        .with_details(json!({ "code": ValidationCode::MalformedBody.as_str() }))
}

pub(crate) fn map_user_validation_error(err: UserValidationError) -> Error {
    match err {
        UserValidationError::EmptyName => field_error(
            FieldName::new("name"),
            ValidationCode::EmptyField,
            err.to_string(),
        ),
        UserValidationError::EmptyEmail => field_error(
            FieldName::new("email"),
            ValidationCode::EmptyField,
            err.to_string(),
        ),
        UserValidationError::InvalidEmail => field_error(
            FieldName::new("email"),
            ValidationCode::InvalidEmail,
            err.to_string(),
        ),
    }
}

pub(crate) fn map_course_validation_error(err: CourseValidationError) -> Error {
    let field = match err {
        CourseValidationError::EmptyTitle => FieldName::new("title"),
        CourseValidationError::EmptyCode => FieldName::new("code"),
    };
    field_error(field, ValidationCode::EmptyField, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("7", Some(7))]
    #[case(" 12 ", Some(12))]
    #[case("-1", None)]
    #[case("abc", None)]
    #[case("", None)]
    fn parse_id_accepts_only_unsigned_integers(#[case] raw: &str, #[case] expected: Option<u64>) {
        let parsed = parse_id(raw, FieldName::new("X-User-Id")).ok();
        assert_eq!(parsed, expected);
    }

    #[rstest]
    fn invalid_integer_reports_field_and_value() {
        let err = invalid_integer_error(FieldName::new("X-User-Id"), "abc");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "X-User-Id", "value": "abc", "code": "invalid_integer" }))
        );
    }

    #[rstest]
    #[case(UserValidationError::EmptyName, "name", "empty_field")]
    #[case(UserValidationError::EmptyEmail, "email", "empty_field")]
    #[case(UserValidationError::InvalidEmail, "email", "invalid_email")]
    fn user_errors_name_their_field(
        #[case] err: UserValidationError,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let mapped = map_user_validation_error(err);
        assert_eq!(mapped.details(), Some(&json!({ "field": field, "code": code })));
    }

    #[rstest]
    #[case(CourseValidationError::EmptyTitle, "title")]
    #[case(CourseValidationError::EmptyCode, "code")]
    fn course_errors_name_their_field(#[case] err: CourseValidationError, #[case] field: &str) {
        let mapped = map_course_validation_error(err);
        assert_eq!(
            mapped.details(),
            Some(&json!({ "field": field, "code": "empty_field" }))
        );
    }
}
