//! Service banner at `/`.

use actix_web::{HttpResponse, get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const WELCOME_MESSAGE: &str = "Welcome to the Course Enrollment Management API";

/// Body returned by `GET /`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    #[schema(example = "Welcome to the Course Enrollment Management API")]
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/",
    tags = ["root"],
    security([]),
    responses((status = 200, description = "Welcome banner", body = WelcomeResponse)),
    operation_id = "index"
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_owned(),
    })
}
