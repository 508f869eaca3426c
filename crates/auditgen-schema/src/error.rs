use derive_more::Display;
use thiserror::Error as ThisError;

///
/// ErrorClass
/// Stable classification of a failed audit generation.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorClass {
    /// The domain type could not be described.
    Extract,
    /// The artifact could not be written.
    Write,
}

///
/// ExtractError
///
/// Raised while turning a domain type into an audit type descriptor. Any of
/// these aborts generation for that domain type only.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum ExtractError {
    #[error("domain type name '{type_name}' is not a usable identifier")]
    InvalidTypeName { type_name: String },

    #[error(
        "method '{method}' on '{type_name}' is marked as a column but is not a getter named '{prefix}<Field>'",
        prefix = crate::GETTER_PREFIX
    )]
    MalformedAccessorName { type_name: String, method: String },

    #[error("method '{method}' on '{type_name}' returns unresolved type '{type_ref}'")]
    UnresolvedFieldType {
        type_name: String,
        method: String,
        type_ref: String,
    },
}

impl ExtractError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        ErrorClass::Extract
    }

    /// Simple name of the domain type that failed.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::InvalidTypeName { type_name }
            | Self::MalformedAccessorName { type_name, .. }
            | Self::UnresolvedFieldType { type_name, .. } => type_name,
        }
    }
}
