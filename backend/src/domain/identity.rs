//! Caller identity derived from trusted role and id claims.
//!
//! Claims are not verified. The inbound adapter builds an [`IdentityContext`]
//! once per request and passes it explicitly into every manager call.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Error, UserId};

/// Message returned when an admin-only operation is attempted by anyone else.
pub const ADMINS_ONLY_MESSAGE: &str = "Operation not permitted. Admins only.";

/// Closed set of roles a caller or user may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Admin,
}

impl Role {
    /// Wire representation of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a role claim is not one of the known roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoleError {
    value: String,
}

impl UnknownRoleError {
    /// The rejected claim.
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

impl fmt::Display for UnknownRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role `{}`", self.value)
    }
}

impl std::error::Error for UnknownRoleError {}

impl FromStr for Role {
    type Err = UnknownRoleError;

    /// Role claims match exactly; no case folding or trimming.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "student" => Ok(Self::Student),
            "admin" => Ok(Self::Admin),
            other => Err(UnknownRoleError {
                value: other.to_owned(),
            }),
        }
    }
}

/// Role asserted by a caller.
///
/// Claims outside [`Role`] are kept as [`RoleClaim::Unrecognised`] so each
/// operation answers with its own rejection.
///
/// # Examples
/// ```
/// use course_enrollment::domain::{Role, RoleClaim};
///
/// assert_eq!(RoleClaim::parse("admin"), Role::Admin);
/// assert_eq!(RoleClaim::parse("instructor"), RoleClaim::Unrecognised);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleClaim {
    Known(Role),
    Unrecognised,
}

impl RoleClaim {
    /// Interpret a raw claim; anything but an exact role name is unrecognised.
    pub fn parse(raw: &str) -> Self {
        raw.parse::<Role>().map_or(Self::Unrecognised, Self::Known)
    }

    /// The claimed role, if it is one of the known roles.
    #[must_use]
    pub const fn role(self) -> Option<Role> {
        match self {
            Self::Known(role) => Some(role),
            Self::Unrecognised => None,
        }
    }
}

impl From<Role> for RoleClaim {
    fn from(role: Role) -> Self {
        Self::Known(role)
    }
}

impl PartialEq<Role> for RoleClaim {
    fn eq(&self, other: &Role) -> bool {
        self.role() == Some(*other)
    }
}

impl fmt::Display for RoleClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(role) => role.fmt(f),
            Self::Unrecognised => f.write_str("unrecognised"),
        }
    }
}

/// Role and id claimed by the caller of a single request.
///
/// # Examples
/// ```
/// use course_enrollment::domain::{IdentityContext, Role, UserId};
///
/// let caller = IdentityContext::new(Role::Student, UserId::new(1));
/// assert!(caller.is(UserId::new(1)));
/// assert!(!caller.is_admin());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityContext {
    role: RoleClaim,
    id: UserId,
}

impl IdentityContext {
    /// Bundle the role and id claims.
    #[must_use]
    pub fn new(role: impl Into<RoleClaim>, id: UserId) -> Self {
        Self {
            role: role.into(),
            id,
        }
    }

    /// Claimed role.
    #[must_use]
    pub const fn role(&self) -> RoleClaim {
        self.role
    }

    /// Claimed user id.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Whether the caller claims the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether the caller claims to be `user_id`.
    #[must_use]
    pub fn is(&self, user_id: UserId) -> bool {
        self.id == user_id
    }
}

/// Reject every claim except [`Role::Admin`].
pub fn require_admin(role: impl Into<RoleClaim>) -> Result<(), Error> {
    if role.into() == Role::Admin {
        Ok(())
    } else {
        Err(Error::forbidden(ADMINS_ONLY_MESSAGE))
    }
}
