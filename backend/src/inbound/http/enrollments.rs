//! Enrollment API handlers.
//!
//! Every route here needs both `X-User-Role` and `X-User-Id`.
//!
//! ```text
//! POST   /enrollments {"user_id":1,"course_id":1}
//! DELETE /enrollments/1
//! GET    /enrollments
//! GET    /students/1/enrollments
//! GET    /courses/1/enrollments
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{CourseId, Enrollment, EnrollmentId, Error, NewEnrollment, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::identity::Caller;
use crate::inbound::http::state::HttpState;

/// Body for `POST /enrollments`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, utoipa::ToSchema)]
pub struct EnrollmentRequest {
    #[schema(example = 1)]
    pub user_id: u64,
    #[schema(example = 1)]
    pub course_id: u64,
}

impl From<EnrollmentRequest> for NewEnrollment {
    fn from(value: EnrollmentRequest) -> Self {
        NewEnrollment::new(UserId::new(value.user_id), CourseId::new(value.course_id))
    }
}

/// Enroll the calling student in a course.
#[utoipa::path(
    post,
    path = "/enrollments",
    request_body = EnrollmentRequest,
    responses(
        (status = 201, description = "Enrolled", body = Enrollment),
        (status = 400, description = "Student is already enrolled in this course", body = Error),
        (status = 403, description = "Caller may not enroll this user", body = Error),
        (status = 404, description = "Student or course not found", body = Error),
        (status = 422, description = "Invalid request", body = Error)
    ),
    tags = ["enrollments"],
    operation_id = "enroll",
    security(("UserRole" = [], "UserId" = []))
)]
#[post("/enrollments")]
pub async fn enroll(
    state: web::Data<HttpState>,
    caller: Caller,
    payload: web::Json<EnrollmentRequest>,
) -> ApiResult<HttpResponse> {
    let enrollment = state
        .enrollments
        .enroll(caller.identity(), payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(enrollment))
}

/// Remove an enrollment.
#[utoipa::path(
    delete,
    path = "/enrollments/{enrollment_id}",
    params(("enrollment_id" = u64, Path, description = "Enrollment identifier")),
    responses(
        (status = 204, description = "Deregistered"),
        (status = 403, description = "Not the caller's enrollment", body = Error),
        (status = 404, description = "Enrollment not found", body = Error)
    ),
    tags = ["enrollments"],
    operation_id = "deregister",
    security(("UserRole" = [], "UserId" = []))
)]
#[delete("/enrollments/{enrollment_id}")]
pub async fn deregister(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    state
        .enrollments
        .deregister(caller.identity(), EnrollmentId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Every enrollment. Admins only.
#[utoipa::path(
    get,
    path = "/enrollments",
    responses(
        (status = 200, description = "Enrollments", body = [Enrollment]),
        (status = 403, description = "Admins only", body = Error)
    ),
    tags = ["enrollments"],
    operation_id = "listEnrollments",
    security(("UserRole" = [], "UserId" = []))
)]
#[get("/enrollments")]
pub async fn list_enrollments(
    state: web::Data<HttpState>,
    caller: Caller,
) -> ApiResult<web::Json<Vec<Enrollment>>> {
    let enrollments = state
        .enrollments_query
        .list_all(caller.identity().role())
        .await?;
    Ok(web::Json(enrollments))
}

/// Enrollments held by one student.
#[utoipa::path(
    get,
    path = "/students/{student_id}/enrollments",
    params(("student_id" = u64, Path, description = "Student user identifier")),
    responses(
        (status = 200, description = "Enrollments", body = [Enrollment]),
        (status = 403, description = "You can only view your own enrollments", body = Error),
        (status = 404, description = "Student not found", body = Error)
    ),
    tags = ["enrollments"],
    operation_id = "listStudentEnrollments",
    security(("UserRole" = [], "UserId" = []))
)]
#[get("/students/{student_id}/enrollments")]
pub async fn list_student_enrollments(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Vec<Enrollment>>> {
    let enrollments = state
        .enrollments_query
        .list_for_student(caller.identity(), UserId::new(path.into_inner()))
        .await?;
    Ok(web::Json(enrollments))
}

/// Enrollments for one course. Admins only.
#[utoipa::path(
    get,
    path = "/courses/{course_id}/enrollments",
    params(("course_id" = u64, Path, description = "Course identifier")),
    responses(
        (status = 200, description = "Enrollments", body = [Enrollment]),
        (status = 403, description = "Admins only", body = Error),
        (status = 404, description = "Course not found", body = Error)
    ),
    tags = ["enrollments"],
    operation_id = "listCourseEnrollments",
    security(("UserRole" = [], "UserId" = []))
)]
#[get("/courses/{course_id}/enrollments")]
pub async fn list_course_enrollments(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Vec<Enrollment>>> {
    let enrollments = state
        .enrollments_query
        .list_for_course(caller.identity().role(), CourseId::new(path.into_inner()))
        .await?;
    Ok(web::Json(enrollments))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ports::{MockEnrollmentCommand, MockEnrollmentQuery};
    use crate::domain::enrollment_service::STUDENTS_ONLY_MESSAGE;
    use crate::domain::{ADMINS_ONLY_MESSAGE, IdentityContext, Role};
    use crate::inbound::http::extractor_configs;
    use crate::inbound::http::identity::{USER_ID_HEADER, USER_ROLE_HEADER};
    use crate::inbound::http::test_utils::http_state;
    use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    fn enrollment_app(
        state: HttpState,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .configure(extractor_configs)
            .service(enroll)
            .service(deregister)
            .service(list_enrollments)
            .service(list_student_enrollments)
            .service(list_course_enrollments)
    }

    fn sample() -> Enrollment {
        Enrollment::from_new(
            EnrollmentId::new(1),
            NewEnrollment::new(UserId::new(1), CourseId::new(1)),
        )
    }

    #[rstest]
    #[actix_web::test]
    async fn enroll_passes_identity_and_answers_created() {
        let mut command = MockEnrollmentCommand::new();
        command
            .expect_enroll()
            .withf(|caller, request| {
                *caller == IdentityContext::new(Role::Student, UserId::new(1))
                    && *request == NewEnrollment::new(UserId::new(1), CourseId::new(1))
            })
            .return_once(|_, _| Ok(sample()));
        let mut state = http_state();
        state.enrollments = Arc::new(command);
        let app = test::init_service(enrollment_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/enrollments")
            .insert_header((USER_ROLE_HEADER, "student"))
            .insert_header((USER_ID_HEADER, "1"))
            .set_json(json!({ "user_id": 1, "course_id": 1 }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({ "id": 1, "user_id": 1, "course_id": 1 }));
    }

    #[rstest]
    #[case(&[(USER_ROLE_HEADER, "student")][..])]
    #[case(&[(USER_ROLE_HEADER, "student"), (USER_ID_HEADER, "x")][..])]
    #[actix_web::test]
    async fn identity_failures_never_reach_the_port(#[case] headers: &[(&str, &str)]) {
        let mut command = MockEnrollmentCommand::new();
        command.expect_enroll().never();
        let mut state = http_state();
        state.enrollments = Arc::new(command);
        let app = test::init_service(enrollment_app(state)).await;

        let req = headers
            .iter()
            .fold(test::TestRequest::post().uri("/enrollments"), |req, header| {
                req.insert_header(*header)
            })
            .set_json(json!({ "user_id": 1, "course_id": 1 }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[rstest]
    #[actix_web::test]
    async fn deregister_answers_no_content() {
        let mut command = MockEnrollmentCommand::new();
        command
            .expect_deregister()
            .withf(|_, id| *id == EnrollmentId::new(1))
            .return_once(|_, _| Ok(sample()));
        let mut state = http_state();
        state.enrollments = Arc::new(command);
        let app = test::init_service(enrollment_app(state)).await;

        let req = test::TestRequest::delete()
            .uri("/enrollments/1")
            .insert_header((USER_ROLE_HEADER, "student"))
            .insert_header((USER_ID_HEADER, "1"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }

    #[rstest]
    #[actix_web::test]
    async fn list_all_forwards_the_role() {
        let mut query = MockEnrollmentQuery::new();
        query
            .expect_list_all()
            .withf(|role| *role == Role::Admin)
            .return_once(|_| Ok(vec![sample()]));
        let mut state = http_state();
        state.enrollments_query = Arc::new(query);
        let app = test::init_service(enrollment_app(state)).await;

        let req = test::TestRequest::get()
            .uri("/enrollments")
            .insert_header((USER_ROLE_HEADER, "admin"))
            .insert_header((USER_ID_HEADER, "2"))
            .to_request();
        let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.len(), 1);
    }

    #[rstest]
    #[actix_web::test]
    async fn viewing_another_students_list_is_forbidden() {
        let mut query = MockEnrollmentQuery::new();
        query
            .expect_list_for_student()
            .withf(|caller, student| caller.id() == UserId::new(1) && *student == UserId::new(3))
            .return_once(|_, _| Err(Error::forbidden("You can only view your own enrollments")));
        let mut state = http_state();
        state.enrollments_query = Arc::new(query);
        let app = test::init_service(enrollment_app(state)).await;

        let req = test::TestRequest::get()
            .uri("/students/3/enrollments")
            .insert_header((USER_ROLE_HEADER, "student"))
            .insert_header((USER_ID_HEADER, "1"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["detail"], json!("You can only view your own enrollments"));
    }

    #[rstest]
    #[actix_web::test]
    async fn course_listing_reports_missing_course() {
        let app = test::init_service(enrollment_app(http_state())).await;
        let req = test::TestRequest::get()
            .uri("/courses/5/enrollments")
            .insert_header((USER_ROLE_HEADER, "admin"))
            .insert_header((USER_ID_HEADER, "2"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["detail"], json!("Course not found"));
    }

    #[rstest]
    #[case(
        test::TestRequest::post().uri("/enrollments"),
        StatusCode::FORBIDDEN,
        STUDENTS_ONLY_MESSAGE
    )]
    #[case(test::TestRequest::get().uri("/enrollments"), StatusCode::FORBIDDEN, ADMINS_ONLY_MESSAGE)]
    #[case(
        test::TestRequest::get().uri("/courses/1/enrollments"),
        StatusCode::FORBIDDEN,
        ADMINS_ONLY_MESSAGE
    )]
    #[case(
        test::TestRequest::delete().uri("/enrollments/1"),
        StatusCode::NOT_FOUND,
        "Enrollment not found"
    )]
    #[actix_web::test]
    async fn unrecognised_role_reaches_the_operation_checks(
        #[case] req: test::TestRequest,
        #[case] status: StatusCode,
        #[case] detail: &str,
    ) {
        let app = test::init_service(enrollment_app(http_state())).await;
        let req = req
            .insert_header((USER_ROLE_HEADER, "instructor"))
            .insert_header((USER_ID_HEADER, "1"))
            .set_json(json!({ "user_id": 1, "course_id": 1 }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), status);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["detail"], json!(detail));
    }
}
