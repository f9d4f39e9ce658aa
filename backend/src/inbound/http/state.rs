//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! ports, so tests can swap in mocks without touching the store.

use std::sync::Arc;

use crate::domain::ports::{
    CourseCommand, CourseQuery, EnrollmentCommand, EnrollmentQuery, EntityStore, UsersCommand,
    UsersQuery,
};
use crate::domain::{CourseService, EnrollmentService, UserRegistry};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub courses: Arc<dyn CourseCommand>,
    pub courses_query: Arc<dyn CourseQuery>,
    pub enrollments: Arc<dyn EnrollmentCommand>,
    pub enrollments_query: Arc<dyn EnrollmentQuery>,
}

impl HttpState {
    /// Wire the production managers around one shared store.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use course_enrollment::inbound::http::state::HttpState;
    /// use course_enrollment::outbound::InMemoryEntityStore;
    ///
    /// let state = HttpState::from_store(Arc::new(InMemoryEntityStore::new()));
    /// # let _ = state;
    /// ```
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: EntityStore + 'static,
    {
        let users = Arc::new(UserRegistry::new(Arc::clone(&store)));
        let courses = Arc::new(CourseService::new(Arc::clone(&store)));
        let enrollments = Arc::new(EnrollmentService::new(store));
        Self {
            users: users.clone(),
            users_query: users,
            courses: courses.clone(),
            courses_query: courses,
            enrollments: enrollments.clone(),
            enrollments_query: enrollments,
        }
    }
}
