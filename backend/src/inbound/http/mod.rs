//! HTTP inbound adapter exposing the REST endpoints.

pub mod courses;
pub mod enrollments;
pub mod error;
pub mod health;
pub mod identity;
pub mod root;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::web;
use tracing::debug;

pub use error::ApiResult;

use validation::malformed_body_error;

/// Convert JSON and path extraction failures into `InvalidRequest` errors so
/// every 4xx body shares the domain error shape.
pub fn extractor_configs(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "rejected malformed JSON body");
        malformed_body_error(&err).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "rejected malformed path parameter");
        malformed_body_error(&err).into()
    }));
}

/// Register every API route and the extractor configuration.
///
/// Health endpoints are left to the caller because they need a
/// [`health::HealthState`] shared with the server bootstrap.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use course_enrollment::inbound::http::{configure, state::HttpState};
/// use course_enrollment::outbound::InMemoryEntityStore;
///
/// let state = HttpState::from_store(Arc::new(InMemoryEntityStore::new()));
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    extractor_configs(cfg);
    cfg.service(root::index)
        .service(users::create_user)
        .service(users::list_users)
        .service(users::get_user)
        .service(courses::list_courses)
        .service(courses::create_course)
        .service(courses::get_course)
        .service(courses::update_course)
        .service(courses::delete_course)
        .service(enrollments::list_course_enrollments)
        .service(enrollments::enroll)
        .service(enrollments::list_enrollments)
        .service(enrollments::deregister)
        .service(enrollments::list_student_enrollments);
}
