//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`*Command`, `*Query`) are called by inbound adapters.
//! [`EntityStore`] is the single driven port; outbound adapters implement it.

mod macros;
pub(crate) use macros::define_store_error;

mod courses;
mod enrollments;
mod entity_store;
mod users;

pub use courses::{CourseCommand, CourseQuery, DeletedCourse};
#[cfg(test)]
pub use courses::{MockCourseCommand, MockCourseQuery};
#[cfg(test)]
pub use enrollments::{MockEnrollmentCommand, MockEnrollmentQuery};
pub use enrollments::{EnrollmentCommand, EnrollmentQuery};
pub use entity_store::{EntityStore, EntityStoreError};
#[cfg(test)]
pub use users::{MockUsersCommand, MockUsersQuery};
pub use users::{UsersCommand, UsersQuery};
