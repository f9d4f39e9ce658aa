//! Users API handlers.
//!
//! ```text
//! POST /users {"name":"Alice","email":"alice@example.com","role":"student"}
//! GET /users
//! GET /users/1
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, NewUser, Role, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, invalid_role_error, map_user_validation_error};

/// Registration body for `POST /users`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "student")]
    pub role: String,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = Error;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        let role = value
            .role
            .parse::<Role>()
            .map_err(|err| invalid_role_error(FieldName::new("role"), err.value()))?;
        NewUser::try_from_parts(value.name, value.email, role).map_err(map_user_validation_error)
    }
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User registered", body = User),
        (status = 400, description = "Email already registered", body = Error),
        (status = 422, description = "Invalid request", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser",
    security([])
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let request = NewUser::try_from(payload.into_inner())?;
    let user = state.users.create_user(request).await?;
    Ok(HttpResponse::Created().json(user))
}

/// List every registered user.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers",
    security([])
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(("user_id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "User not found", body = Error),
        (status = 422, description = "Invalid request", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser",
    security([])
)]
#[get("/users/{user_id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<User>> {
    let user = state
        .users_query
        .get_user(UserId::new(path.into_inner()))
        .await?;
    Ok(web::Json(user))
}
