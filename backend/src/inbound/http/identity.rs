//! Extractors turning identity headers into domain caller claims.
//!
//! ```text
//! X-User-Role: student | admin
//! X-User-Id: 42
//! ```
//!
//! The claims are trusted verbatim. Missing or malformed headers are
//! `InvalidRequest`. A role outside the known set is carried through as
//! [`RoleClaim::Unrecognised`] and each operation decides what it allows.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};
use tracing::debug;

use crate::domain::{Error, IdentityContext, RoleClaim, UserId};
use crate::inbound::http::validation::{
    FieldName, invalid_integer_error, missing_field_error, parse_id,
};

pub const USER_ROLE_HEADER: &str = "X-User-Role";
pub const USER_ID_HEADER: &str = "X-User-Id";

const ROLE_FIELD: FieldName = FieldName::new(USER_ROLE_HEADER);
const ID_FIELD: FieldName = FieldName::new(USER_ID_HEADER);

fn role_from_request(req: &HttpRequest) -> Result<RoleClaim, Error> {
    let value = req
        .headers()
        .get(ROLE_FIELD.as_str())
        .ok_or_else(|| missing_field_error(ROLE_FIELD))?;
    let claim = value.to_str().map_or(RoleClaim::Unrecognised, RoleClaim::parse);
    if claim == RoleClaim::Unrecognised {
        debug!(role = ?value, "unrecognised role claim");
    }
    Ok(claim)
}

fn identity_from_request(req: &HttpRequest) -> Result<IdentityContext, Error> {
    let role = role_from_request(req)?;
    let raw_id = req
        .headers()
        .get(ID_FIELD.as_str())
        .ok_or_else(|| missing_field_error(ID_FIELD))?
        .to_str()
        .map_err(|_| invalid_integer_error(ID_FIELD, "<non-ascii>"))?;
    let id = parse_id(raw_id, ID_FIELD)?;
    Ok(IdentityContext::new(role, UserId::new(id)))
}

/// Role claim alone, for operations that ignore the caller's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerRole(pub RoleClaim);

impl CallerRole {
    pub fn role(self) -> RoleClaim {
        self.0
    }
}

impl FromRequest for CallerRole {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(role_from_request(req).map(CallerRole))
    }
}

/// Full caller identity: role and id.
///
/// # Examples
/// ```
/// use actix_web::{HttpResponse, get};
/// use course_enrollment::inbound::http::identity::Caller;
///
/// #[get("/whoami")]
/// async fn whoami(caller: Caller) -> HttpResponse {
///     HttpResponse::Ok().body(caller.identity().id().to_string())
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller(pub IdentityContext);

impl Caller {
    pub fn identity(self) -> IdentityContext {
        self.0
    }
}

impl FromRequest for Caller {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(identity_from_request(req).map(Caller))
    }
}
