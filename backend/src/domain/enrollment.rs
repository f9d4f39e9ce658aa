//! Enrollment data model linking a student to a course.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{CourseId, EnrollmentId, UserId};

/// Requested link between a user and a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewEnrollment {
    pub user_id: UserId,
    pub course_id: CourseId,
}

impl NewEnrollment {
    pub const fn new(user_id: UserId, course_id: CourseId) -> Self {
        Self { user_id, course_id }
    }
}

/// Stored enrollment.
///
/// ## Invariants
/// - `user_id` refers to a stored user at creation time, and the caller
///   claimed the student role and that same id. The stored user's own role
///   is not consulted.
/// - `course_id` refers to a course that exists; deleting the course removes
///   the enrollment too.
/// - At most one enrollment exists per `(user_id, course_id)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Enrollment {
    #[schema(value_type = u64, example = 1)]
    id: EnrollmentId,
    #[schema(value_type = u64, example = 1)]
    user_id: UserId,
    #[schema(value_type = u64, example = 1)]
    course_id: CourseId,
}

impl Enrollment {
    pub fn from_new(id: EnrollmentId, request: NewEnrollment) -> Self {
        Self {
            id,
            user_id: request.user_id,
            course_id: request.course_id,
        }
    }

    pub fn id(&self) -> EnrollmentId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    /// Whether this enrollment links the given pair.
    pub fn links(&self, user_id: UserId, course_id: CourseId) -> bool {
        self.user_id == user_id && self.course_id == course_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_with_snake_case_keys() {
        let enrollment = Enrollment::from_new(
            EnrollmentId::new(3),
            NewEnrollment::new(UserId::new(1), CourseId::new(2)),
        );
        let value = serde_json::to_value(enrollment).expect("enrollment serialises");
        assert_eq!(
            value,
            serde_json::json!({ "id": 3, "user_id": 1, "course_id": 2 })
        );
    }

    #[test]
    fn links_matches_the_exact_pair() {
        let enrollment = Enrollment::from_new(
            EnrollmentId::new(1),
            NewEnrollment::new(UserId::new(1), CourseId::new(2)),
        );
        assert!(enrollment.links(UserId::new(1), CourseId::new(2)));
        assert!(!enrollment.links(UserId::new(2), CourseId::new(1)));
    }
}
