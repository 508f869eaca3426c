use auditgen_schema::error::{ErrorClass, ExtractError};
use thiserror::Error as ThisError;

///
/// GenerateError
///
/// Failure to produce one audit artifact. Always scoped to a single domain
/// type; the pass records it and moves on.
///

#[derive(Debug, ThisError)]
pub enum GenerateError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("failed to write '{qualified_name}' for '{type_name}': {source}")]
    ArtifactWrite {
        type_name: String,
        qualified_name: String,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Extract(_) => ErrorClass::Extract,
            Self::ArtifactWrite { .. } => ErrorClass::Write,
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Extract(err) => err.type_name(),
            Self::ArtifactWrite { type_name, .. } => type_name,
        }
    }

    /// Message reported to the host for this failure.
    #[must_use]
    pub fn diagnostic_message(&self, suffix: &str) -> String {
        let name = self.type_name();

        match self {
            Self::ArtifactWrite { qualified_name, .. } => {
                let simple = qualified_name.rsplit('.').next().unwrap_or(qualified_name);
                format!("Problem opening file to write the {simple} class file")
            }
            Self::Extract(ExtractError::UnresolvedFieldType { .. }) => format!(
                "Problem finding the given return type of a method to write the {name}{suffix} class file"
            ),
            Self::Extract(err) => {
                format!("Problem describing {name} to write the {name}{suffix} class file: {err}")
            }
        }
    }
}
