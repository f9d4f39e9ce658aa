//! `define_store_error!`: failure enums for driven storage ports.
//!
//! Each generated enum gets a `thiserror` message per variant, one
//! snake_case constructor per variant, and a conversion into the domain
//! [`Error`](crate::domain::Error). Storage failures are never the caller's
//! fault, so the conversion always yields `InternalError` and logs the cause
//! at `error` level before the HTTP adapter redacts it.

macro_rules! define_store_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),+ }) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                Self::$variant { $($field: $field.into()),+ }
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),+ $(,)? } )? => $message:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),+ } )?,
            )+
        }

        impl $name {
            $(
                define_store_error!(@ctor $variant $( { $($field : $ty),+ } )?);
            )+
        }

        impl From<$name> for $crate::domain::Error {
            fn from(value: $name) -> Self {
                ::tracing::error!(
                    error = %value,
                    kind = stringify!($name),
                    "storage failure"
                );
                $crate::domain::Error::internal(value.to_string())
            }
        }
    };
}

pub(crate) use define_store_error;
