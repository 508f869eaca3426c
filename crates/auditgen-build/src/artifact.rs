use auditgen_utils::hash::Fingerprint;
use std::path::PathBuf;

/// File extension of emitted source artifacts.
pub const SOURCE_EXTENSION: &str = "java";

///
/// Artifact
/// One finished source file, addressed by its fully qualified type name.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Artifact {
    qualified_name: String,
    contents: String,
}

impl Artifact {
    pub fn new(qualified_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            contents: contents.into(),
        }
    }

    #[must_use]
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    #[must_use]
    pub fn into_contents(self) -> String {
        self.contents
    }

    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(self.contents.as_bytes())
    }

    /// Package-relative path, e.g. `com/lsq/CarAudit.java`.
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        source_path(&self.qualified_name)
    }
}

// source_path
// dotted package segments become directories
pub(crate) fn source_path(qualified_name: &str) -> PathBuf {
    let mut path: PathBuf = qualified_name.split('.').collect();
    path.set_extension(SOURCE_EXTENSION);

    path
}
