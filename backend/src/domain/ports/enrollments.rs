//! Driving ports for enrollment operations.
//!
//! Each call receives the caller's [`IdentityContext`] (or just the role where
//! the id is irrelevant) so authorisation stays inside the domain.

use async_trait::async_trait;

use crate::domain::{
    CourseId, Enrollment, EnrollmentId, Error, IdentityContext, NewEnrollment, RoleClaim, UserId,
};

/// Enrollment mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentCommand: Send + Sync {
    /// Enroll the calling student in a course.
    ///
    /// Only students may enroll, and only themselves.
    async fn enroll(
        &self,
        caller: IdentityContext,
        request: NewEnrollment,
    ) -> Result<Enrollment, Error>;

    /// Remove an enrollment. Students may only remove their own; admins
    /// may remove any; unrecognised roles may remove none.
    async fn deregister(
        &self,
        caller: IdentityContext,
        id: EnrollmentId,
    ) -> Result<Enrollment, Error>;
}

/// Enrollment listings, each filtered by the caller's rights.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentQuery: Send + Sync {
    /// Enrollments held by `student`. Students may only list their own.
    /// Other claims are not restricted.
    async fn list_for_student(
        &self,
        caller: IdentityContext,
        student: UserId,
    ) -> Result<Vec<Enrollment>, Error>;

    /// Every enrollment. Admins only.
    async fn list_all(&self, caller: RoleClaim) -> Result<Vec<Enrollment>, Error>;

    /// Enrollments for one course. Admins only.
    async fn list_for_course(
        &self,
        caller: RoleClaim,
        course: CourseId,
    ) -> Result<Vec<Enrollment>, Error>;
}
