//! Driving ports for course management.

use async_trait::async_trait;

use crate::domain::{Course, CourseDraft, CourseId, Error, RoleClaim};

/// Outcome of deleting a course together with its enrollments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedCourse {
    pub course: Course,
    pub removed_enrollments: usize,
}

/// Admin-only course mutations.
///
/// Every method rejects callers not claiming admin with
/// [`ErrorCode::Forbidden`](crate::domain::ErrorCode::Forbidden) before
/// touching the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseCommand: Send + Sync {
    /// Create a course with a unique code.
    async fn create_course(&self, caller: RoleClaim, draft: CourseDraft) -> Result<Course, Error>;

    /// Replace the title and code of an existing course.
    ///
    /// A course may keep its own code; taking another course's code fails
    /// with [`ErrorCode::DuplicateCode`](crate::domain::ErrorCode::DuplicateCode).
    async fn update_course(
        &self,
        caller: RoleClaim,
        id: CourseId,
        draft: CourseDraft,
    ) -> Result<Course, Error>;

    /// Delete a course and every enrollment that references it.
    async fn delete_course(&self, caller: RoleClaim, id: CourseId) -> Result<DeletedCourse, Error>;
}

/// Public course reads. No role is required.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseQuery: Send + Sync {
    async fn get_course(&self, id: CourseId) -> Result<Course, Error>;

    async fn list_courses(&self) -> Result<Vec<Course>, Error>;
}
