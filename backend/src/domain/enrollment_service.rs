//! Enrollment manager.
//!
//! Authorisation depends on both the caller's role and id, so every entry
//! point takes an [`IdentityContext`] or a [`RoleClaim`]. Checks run in a fixed
//! order: role, ownership, existence, uniqueness. Clients rely on which error
//! wins when several apply.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::course_service::COURSE_NOT_FOUND_MESSAGE;
use crate::domain::ports::{EnrollmentCommand, EnrollmentQuery, EntityStore};
use crate::domain::{
    CourseId, Enrollment, EnrollmentId, Error, IdentityContext, NewEnrollment, Role, RoleClaim,
    UserId, require_admin,
};

pub const STUDENTS_ONLY_MESSAGE: &str = "Only students can enroll in courses";
pub const ENROLL_SELF_ONLY_MESSAGE: &str = "You can only enroll yourself";
pub const STUDENT_NOT_FOUND_MESSAGE: &str = "Student not found";
pub const ALREADY_ENROLLED_MESSAGE: &str = "Student is already enrolled in this course";
pub const ENROLLMENT_NOT_FOUND_MESSAGE: &str = "Enrollment not found";
pub const DEREGISTER_OWN_ONLY_MESSAGE: &str = "You can only deregister your own enrollments";
pub const VIEW_OWN_ONLY_MESSAGE: &str = "You can only view your own enrollments";
pub const NOT_PERMITTED_MESSAGE: &str = "Operation not permitted";

/// Implements the enrollment driving ports on top of an [`EntityStore`].
#[derive(Clone)]
pub struct EnrollmentService<S> {
    store: Arc<S>,
}

impl<S> EnrollmentService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

fn forbidden(caller: IdentityContext, message: &'static str) -> Error {
    debug!(
        role = %caller.role(),
        caller_id = %caller.id(),
        reason = message,
        "rejected enrollment call"
    );
    Error::forbidden(message)
}

#[async_trait]
impl<S> EnrollmentCommand for EnrollmentService<S>
where
    S: EntityStore,
{
    async fn enroll(
        &self,
        caller: IdentityContext,
        request: NewEnrollment,
    ) -> Result<Enrollment, Error> {
        if caller.role() != Role::Student {
            return Err(forbidden(caller, STUDENTS_ONLY_MESSAGE));
        }
        if !caller.is(request.user_id) {
            return Err(forbidden(caller, ENROLL_SELF_ONLY_MESSAGE));
        }
        self.store.write(|collections| {
            if collections.user(request.user_id).is_none() {
                return Err(Error::not_found(STUDENT_NOT_FOUND_MESSAGE));
            }
            if collections.course(request.course_id).is_none() {
                return Err(Error::not_found(COURSE_NOT_FOUND_MESSAGE));
            }
            if collections.enrollment_exists(request.user_id, request.course_id) {
                debug!(
                    user_id = %request.user_id,
                    course_id = %request.course_id,
                    "rejected duplicate enrollment"
                );
                return Err(Error::already_enrolled(ALREADY_ENROLLED_MESSAGE));
            }
            let enrollment = collections.insert_enrollment(request);
            info!(
                enrollment_id = %enrollment.id(),
                user_id = %enrollment.user_id(),
                course_id = %enrollment.course_id(),
                "enrolled student"
            );
            Ok(enrollment)
        })
    }

    async fn deregister(
        &self,
        caller: IdentityContext,
        id: EnrollmentId,
    ) -> Result<Enrollment, Error> {
        self.store.write(|collections| {
            let enrollment = collections
                .enrollment(id)
                .copied()
                .ok_or_else(|| Error::not_found(ENROLLMENT_NOT_FOUND_MESSAGE))?;
            match caller.role() {
                RoleClaim::Known(Role::Admin) => {}
                RoleClaim::Known(Role::Student) if caller.is(enrollment.user_id()) => {}
                RoleClaim::Known(Role::Student) => {
                    return Err(forbidden(caller, DEREGISTER_OWN_ONLY_MESSAGE));
                }
                RoleClaim::Unrecognised => return Err(forbidden(caller, NOT_PERMITTED_MESSAGE)),
            }
            collections
                .remove_enrollment(id)
                .ok_or_else(|| Error::not_found(ENROLLMENT_NOT_FOUND_MESSAGE))?;
            info!(enrollment_id = %id, caller_id = %caller.id(), "deregistered enrollment");
            Ok(enrollment)
        })
    }
}

#[async_trait]
impl<S> EnrollmentQuery for EnrollmentService<S>
where
    S: EntityStore,
{
    async fn list_for_student(
        &self,
        caller: IdentityContext,
        student: UserId,
    ) -> Result<Vec<Enrollment>, Error> {
        if caller.role() == Role::Student && !caller.is(student) {
            return Err(forbidden(caller, VIEW_OWN_ONLY_MESSAGE));
        }
        self.store.read(|collections| {
            if collections.user(student).is_none() {
                return Err(Error::not_found(STUDENT_NOT_FOUND_MESSAGE));
            }
            Ok(collections.enrollments_for_user(student))
        })
    }

    async fn list_all(&self, caller: RoleClaim) -> Result<Vec<Enrollment>, Error> {
        require_admin(caller)?;
        self.store
            .read(|collections| Ok::<_, Error>(collections.enrollments().to_vec()))
    }

    async fn list_for_course(
        &self,
        caller: RoleClaim,
        course: CourseId,
    ) -> Result<Vec<Enrollment>, Error> {
        require_admin(caller)?;
        self.store.read(|collections| {
            if collections.course(course).is_none() {
                return Err(Error::not_found(COURSE_NOT_FOUND_MESSAGE));
            }
            Ok(collections.enrollments_for_course(course))
        })
    }
}

#[cfg(test)]
#[path = "enrollment_service_tests.rs"]
mod tests;
