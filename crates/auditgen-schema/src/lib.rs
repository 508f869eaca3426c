pub mod error;
pub mod extract;
pub mod introspect;
pub mod node;
pub mod types;

/// Suffix appended to a domain type name to form its audit type name.
pub const SUFFIX: &str = "Audit";

/// Package every generated audit type is placed in.
pub const PACKAGE: &str = "com.lsq.systems.metagen58";

/// Simple name of the contract every audit type implements.
pub const AUDIT_INTERFACE: &str = "AuditInterface";

/// Getter prefix stripped from column accessors to derive the field name.
pub const GETTER_PREFIX: &str = "get";

use serde::{Deserialize, Serialize};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        error::{ErrorClass, ExtractError},
        node::*,
        types::{TypeRef, ValueType},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// AuditNaming
/// Where generated types live and how they are named.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditNaming {
    pub package: String,
    pub suffix: String,
}

impl AuditNaming {
    pub fn new(package: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            suffix: suffix.into(),
        }
    }

    #[must_use]
    /// Audit type name for a domain type name.
    pub fn generated_name(&self, original_name: &str) -> String {
        format!("{original_name}{}", self.suffix)
    }
}

impl Default for AuditNaming {
    fn default() -> Self {
        Self::new(PACKAGE, SUFFIX)
    }
}
