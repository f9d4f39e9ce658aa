//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint, the domain schemas they
//! exchange, and the two identity headers as API key security schemes.
//! Swagger UI serves it in debug builds and `openapi-dump` prints it.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Course, Enrollment, Error, ErrorCode, Role, User};
use crate::inbound::http::courses::CourseRequest;
use crate::inbound::http::enrollments::EnrollmentRequest;
use crate::inbound::http::root::WelcomeResponse;
use crate::inbound::http::users::CreateUserRequest;

/// Enrich the generated document with the identity header schemes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "UserRole",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "X-User-Role",
                "Caller role claim: student or admin.",
            ))),
        );
        components.add_security_scheme(
            "UserId",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "X-User-Id",
                "Caller user identifier claim.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Course Enrollment Management API",
        description = "Users, courses, and enrollments with role-based access from trusted identity headers."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::root::index,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::courses::list_courses,
        crate::inbound::http::courses::get_course,
        crate::inbound::http::courses::create_course,
        crate::inbound::http::courses::update_course,
        crate::inbound::http::courses::delete_course,
        crate::inbound::http::enrollments::enroll,
        crate::inbound::http::enrollments::deregister,
        crate::inbound::http::enrollments::list_enrollments,
        crate::inbound::http::enrollments::list_student_enrollments,
        crate::inbound::http::enrollments::list_course_enrollments,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        Course,
        Enrollment,
        Role,
        Error,
        ErrorCode,
        CreateUserRequest,
        CourseRequest,
        EnrollmentRequest,
        WelcomeResponse
    )),
    tags(
        (name = "root", description = "Service banner"),
        (name = "users", description = "User registration and lookup"),
        (name = "courses", description = "Course catalogue, admin-managed"),
        (name = "enrollments", description = "Student enrollments"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
