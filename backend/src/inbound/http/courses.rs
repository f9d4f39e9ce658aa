//! Course API handlers.
//!
//! ```text
//! GET    /courses
//! GET    /courses/1
//! POST   /courses    {"title":"Math 101","code":"MATH101"}   (X-User-Role: admin)
//! PUT    /courses/1  {"title":"Algebra","code":"MATH101"}    (X-User-Role: admin)
//! DELETE /courses/1                                          (X-User-Role: admin)
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Course, CourseDraft, CourseId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::identity::CallerRole;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::map_course_validation_error;

/// Body for creating or replacing a course.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CourseRequest {
    #[schema(example = "Math 101")]
    pub title: String,
    #[schema(example = "MATH101")]
    pub code: String,
}

impl TryFrom<CourseRequest> for CourseDraft {
    type Error = Error;

    fn try_from(value: CourseRequest) -> Result<Self, Self::Error> {
        CourseDraft::try_from_parts(value.title, value.code).map_err(map_course_validation_error)
    }
}

#[utoipa::path(
    get,
    path = "/courses",
    responses((status = 200, description = "Courses", body = [Course])),
    tags = ["courses"],
    operation_id = "listCourses",
    security([])
)]
#[get("/courses")]
pub async fn list_courses(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Course>>> {
    Ok(web::Json(state.courses_query.list_courses().await?))
}

#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    params(("course_id" = u64, Path, description = "Course identifier")),
    responses(
        (status = 200, description = "Course", body = Course),
        (status = 404, description = "Course not found", body = Error)
    ),
    tags = ["courses"],
    operation_id = "getCourse",
    security([])
)]
#[get("/courses/{course_id}")]
pub async fn get_course(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Course>> {
    let course = state
        .courses_query
        .get_course(CourseId::new(path.into_inner()))
        .await?;
    Ok(web::Json(course))
}

/// Create a course. Admins only.
#[utoipa::path(
    post,
    path = "/courses",
    request_body = CourseRequest,
    responses(
        (status = 201, description = "Course created", body = Course),
        (status = 400, description = "Course code must be unique", body = Error),
        (status = 403, description = "Admins only", body = Error),
        (status = 422, description = "Invalid request", body = Error)
    ),
    tags = ["courses"],
    operation_id = "createCourse",
    security(("UserRole" = []))
)]
#[post("/courses")]
pub async fn create_course(
    state: web::Data<HttpState>,
    caller: CallerRole,
    payload: web::Json<CourseRequest>,
) -> ApiResult<HttpResponse> {
    let draft = CourseDraft::try_from(payload.into_inner())?;
    let course = state.courses.create_course(caller.role(), draft).await?;
    Ok(HttpResponse::Created().json(course))
}

/// Replace a course's title and code. Admins only.
#[utoipa::path(
    put,
    path = "/courses/{course_id}",
    params(("course_id" = u64, Path, description = "Course identifier")),
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Course updated", body = Course),
        (status = 400, description = "Course code must be unique", body = Error),
        (status = 403, description = "Admins only", body = Error),
        (status = 404, description = "Course not found", body = Error),
        (status = 422, description = "Invalid request", body = Error)
    ),
    tags = ["courses"],
    operation_id = "updateCourse",
    security(("UserRole" = []))
)]
#[put("/courses/{course_id}")]
pub async fn update_course(
    state: web::Data<HttpState>,
    caller: CallerRole,
    path: web::Path<u64>,
    payload: web::Json<CourseRequest>,
) -> ApiResult<web::Json<Course>> {
    let draft = CourseDraft::try_from(payload.into_inner())?;
    let course = state
        .courses
        .update_course(caller.role(), CourseId::new(path.into_inner()), draft)
        .await?;
    Ok(web::Json(course))
}

/// Delete a course and its enrollments. Admins only.
#[utoipa::path(
    delete,
    path = "/courses/{course_id}",
    params(("course_id" = u64, Path, description = "Course identifier")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 403, description = "Admins only", body = Error),
        (status = 404, description = "Course not found", body = Error)
    ),
    tags = ["courses"],
    operation_id = "deleteCourse",
    security(("UserRole" = []))
)]
#[delete("/courses/{course_id}")]
pub async fn delete_course(
    state: web::Data<HttpState>,
    caller: CallerRole,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    state
        .courses
        .delete_course(caller.role(), CourseId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
