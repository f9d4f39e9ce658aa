//! Course lifecycle: admin-only mutations and public reads.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{CourseCommand, CourseQuery, DeletedCourse, EntityStore};
use crate::domain::{Course, CourseDraft, CourseId, Error, RoleClaim, require_admin};

pub const DUPLICATE_CODE_MESSAGE: &str = "Course code must be unique";
pub const COURSE_NOT_FOUND_MESSAGE: &str = "Course not found";

/// Implements the course driving ports on top of an [`EntityStore`].
#[derive(Clone)]
pub struct CourseService<S> {
    store: Arc<S>,
}

impl<S> CourseService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

fn ensure_admin(caller: RoleClaim, operation: &'static str) -> Result<(), Error> {
    require_admin(caller).inspect_err(|_| debug!(%caller, operation, "rejected non-admin caller"))
}

fn duplicate_code(draft: &CourseDraft) -> Error {
    debug!(code = %draft.code, "rejected duplicate course code");
    Error::duplicate_code(DUPLICATE_CODE_MESSAGE)
}

#[async_trait]
impl<S> CourseCommand for CourseService<S>
where
    S: EntityStore,
{
    async fn create_course(&self, caller: RoleClaim, draft: CourseDraft) -> Result<Course, Error> {
        ensure_admin(caller, "create_course")?;
        self.store.write(|collections| {
            if collections.course_by_code(&draft.code).is_some() {
                return Err(duplicate_code(&draft));
            }
            let course = collections.insert_course(draft).clone();
            info!(course_id = %course.id(), code = %course.code(), "created course");
            Ok(course)
        })
    }

    async fn update_course(
        &self,
        caller: RoleClaim,
        id: CourseId,
        draft: CourseDraft,
    ) -> Result<Course, Error> {
        ensure_admin(caller, "update_course")?;
        self.store.write(|collections| {
            if collections.course(id).is_none() {
                return Err(Error::not_found(COURSE_NOT_FOUND_MESSAGE));
            }
            let taken = collections
                .course_by_code(&draft.code)
                .is_some_and(|holder| holder.id() != id);
            if taken {
                return Err(duplicate_code(&draft));
            }
            let course = collections
                .course_mut(id)
                .ok_or_else(|| Error::not_found(COURSE_NOT_FOUND_MESSAGE))?;
            course.apply(draft);
            info!(course_id = %id, code = %course.code(), "updated course");
            Ok(course.clone())
        })
    }

    async fn delete_course(&self, caller: RoleClaim, id: CourseId) -> Result<DeletedCourse, Error> {
        ensure_admin(caller, "delete_course")?;
        self.store.write(|collections| {
            let course = collections
                .remove_course(id)
                .ok_or_else(|| Error::not_found(COURSE_NOT_FOUND_MESSAGE))?;
            let removed_enrollments = collections.remove_enrollments_for_course(id);
            info!(course_id = %id, removed_enrollments, "deleted course");
            Ok(DeletedCourse {
                course,
                removed_enrollments,
            })
        })
    }
}

#[async_trait]
impl<S> CourseQuery for CourseService<S>
where
    S: EntityStore,
{
    async fn get_course(&self, id: CourseId) -> Result<Course, Error> {
        self.store.read(|collections| {
            collections
                .course(id)
                .cloned()
                .ok_or_else(|| Error::not_found(COURSE_NOT_FOUND_MESSAGE))
        })
    }

    async fn list_courses(&self) -> Result<Vec<Course>, Error> {
        self.store
            .read(|collections| Ok::<_, Error>(collections.courses().to_vec()))
    }
}
