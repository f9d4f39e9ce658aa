//! Domain primitives, managers and ports.
//!
//! Purpose: hold the enrollment rules independent of transport and storage.
//! Entities are validated on construction; managers enforce uniqueness,
//! referential integrity and role-based authorisation through the
//! [`ports::EntityStore`] driven port.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User, Course, Enrollment and their validated drafts.
//! - IdentityContext / Role / RoleClaim: caller claims passed into every
//!   manager call.
//! - UserRegistry, CourseService, EnrollmentService: driving port
//!   implementations.

mod collections;
mod course;
pub mod course_service;
mod enrollment;
pub mod enrollment_service;
pub mod error;
mod identity;
mod ids;
pub mod ports;
mod trace_id;
mod user;
pub mod user_registry;

pub use self::collections::Collections;
pub use self::course::{Course, CourseCode, CourseDraft, CourseTitle, CourseValidationError};
pub use self::course_service::CourseService;
pub use self::enrollment::{Enrollment, NewEnrollment};
pub use self::enrollment_service::EnrollmentService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::identity::{
    ADMINS_ONLY_MESSAGE, IdentityContext, Role, RoleClaim, UnknownRoleError, require_admin,
};
pub use self::ids::{CourseId, EnrollmentId, UserId};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{EmailAddress, NewUser, User, UserName, UserValidationError};
pub use self::user_registry::UserRegistry;
