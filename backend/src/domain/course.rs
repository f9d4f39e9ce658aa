//! Course data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CourseId;

/// Validation errors returned by the course field constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseValidationError {
    EmptyTitle,
    EmptyCode,
}

impl fmt::Display for CourseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyCode => write!(f, "code must not be empty"),
        }
    }
}

impl std::error::Error for CourseValidationError {}

/// Non-empty course title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseTitle(String);

impl CourseTitle {
    pub fn new(title: impl Into<String>) -> Result<Self, CourseValidationError> {
        let title = title.into();
        if title.is_empty() {
            return Err(CourseValidationError::EmptyTitle);
        }
        Ok(Self(title))
    }
}

impl AsRef<str> for CourseTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<CourseTitle> for String {
    fn from(value: CourseTitle) -> Self {
        value.0
    }
}

impl TryFrom<String> for CourseTitle {
    type Error = CourseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Non-empty course code, unique across all courses.
///
/// Codes compare exactly; `CS101` and `cs101` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseCode(String);

impl CourseCode {
    pub fn new(code: impl Into<String>) -> Result<Self, CourseValidationError> {
        let code = code.into();
        if code.is_empty() {
            return Err(CourseValidationError::EmptyCode);
        }
        Ok(Self(code))
    }
}

impl AsRef<str> for CourseCode {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<CourseCode> for String {
    fn from(value: CourseCode) -> Self {
        value.0
    }
}

impl TryFrom<String> for CourseCode {
    type Error = CourseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated title and code used for both creation and full replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    pub title: CourseTitle,
    pub code: CourseCode,
}

impl CourseDraft {
    pub fn new(title: CourseTitle, code: CourseCode) -> Self {
        Self { title, code }
    }

    /// Fallible constructor from raw strings.
    ///
    /// # Examples
    /// ```
    /// use course_enrollment::domain::CourseDraft;
    ///
    /// let draft = CourseDraft::try_from_parts("Intro to CS", "CS101").unwrap();
    /// assert_eq!(draft.code.as_ref(), "CS101");
    /// assert!(CourseDraft::try_from_parts("Intro to CS", "").is_err());
    /// ```
    pub fn try_from_parts(
        title: impl Into<String>,
        code: impl Into<String>,
    ) -> Result<Self, CourseValidationError> {
        Ok(Self::new(CourseTitle::new(title)?, CourseCode::new(code)?))
    }
}

/// Course offered for enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Course {
    #[schema(value_type = u64, example = 1)]
    id: CourseId,
    #[schema(value_type = String, example = "Intro to CS")]
    title: CourseTitle,
    #[schema(value_type = String, example = "CS101")]
    code: CourseCode,
}

impl Course {
    /// Attach a store-assigned id to a validated draft.
    pub fn from_draft(id: CourseId, draft: CourseDraft) -> Self {
        Self {
            id,
            title: draft.title,
            code: draft.code,
        }
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn title(&self) -> &CourseTitle {
        &self.title
    }

    pub fn code(&self) -> &CourseCode {
        &self.code
    }

    /// Replace title and code in place. The id never changes.
    pub fn apply(&mut self, draft: CourseDraft) {
        self.title = draft.title;
        self.code = draft.code;
    }
}
