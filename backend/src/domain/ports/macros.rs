//! `define_port_error!` declares an adapter error enum whose variants each
//! carry one named `String` field.
//!
//! ```text
//! define_port_error! {
//!     pub enum PeakRepositoryError {
//!         Connection { message } => "peak repository connection failed: {message}",
//!     }
//! }
//! ```
//!
//! expands to a `thiserror` enum plus `PeakRepositoryError::connection(msg)`,
//! where `msg` is anything `Into<String>`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $field:ident } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant {
                    /// Adapter-supplied detail.
                    $field: String,
                },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = "Build a `" $variant "` error."]
                    pub fn [<$variant:snake>]($field: impl Into<String>) -> Self {
                        Self::$variant { $field: $field.into() }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;
