//! Integer identifiers for users, courses and enrollments.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw integer identifier.
            #[must_use]
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Raw integer value.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_entity_id! {
    /// Identifier of a registered user.
    UserId
}

define_entity_id! {
    /// Identifier of a course.
    CourseId
}

define_entity_id! {
    /// Identifier of an enrollment.
    EnrollmentId
}

/// Monotonic id source for one entity type.
///
/// Ids are never handed out twice, even after the entity holding one has been
/// deleted. The service this replaces derived ids from `count + 1`, which
/// reissues ids after deletions.
#[derive(Debug, Default, Clone)]
pub(crate) struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub(crate) fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_starts_at_one_and_increments() {
        let mut sequence = IdSequence::default();
        assert_eq!(sequence.next(), 1);
        assert_eq!(sequence.next(), 2);
        assert_eq!(sequence.next(), 3);
    }

    #[test]
    fn ids_serialise_as_bare_integers() {
        let value = serde_json::to_value(CourseId::new(7)).expect("id serialises");
        assert_eq!(value, serde_json::json!(7));
    }
}
