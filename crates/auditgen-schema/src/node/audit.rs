use crate::{AUDIT_INTERFACE, AuditNaming, prelude::*};

/// Raw name of the audit timestamp field.
pub const AUDIT_DATE_FIELD: &str = "audit_date";

///
/// AuditTypeDescriptor
///
/// The audit type to generate for one domain type. Built fresh for every
/// domain type in a pass and dropped once its artifact is emitted.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AuditTypeDescriptor {
    pub original_name: String,
    pub generated_name: String,
    pub package_name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl AuditTypeDescriptor {
    pub fn new(
        naming: &AuditNaming,
        original_name: impl Into<String>,
        fields: Vec<FieldDescriptor>,
    ) -> Self {
        let original_name = original_name.into();

        Self {
            generated_name: naming.generated_name(&original_name),
            package_name: naming.package.clone(),
            original_name,
            fields,
        }
    }

    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.package_name, self.generated_name)
    }

    #[must_use]
    pub const fn interface_name(&self) -> &'static str {
        AUDIT_INTERFACE
    }

    /// Surrogate identifier, `<original lowercased>_audit_id`.
    #[must_use]
    pub fn audit_id_field(&self) -> FieldDescriptor {
        FieldDescriptor::new(
            format!("{}_audit_id", self.original_name.to_lowercase()),
            ValueType::Integer,
            true,
        )
    }

    /// Audit timestamp; never optional.
    #[must_use]
    pub fn audit_date_field() -> FieldDescriptor {
        FieldDescriptor::new(AUDIT_DATE_FIELD, ValueType::Date, false)
    }
}

///
/// TESTS
///
