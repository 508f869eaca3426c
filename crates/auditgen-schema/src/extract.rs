//! Domain type → audit type descriptor.

use crate::{AuditNaming, GETTER_PREFIX, prelude::*};
use auditgen_utils::case::{is_pascal_case, to_delimited_form};

/// Build the audit descriptor for one domain type.
///
/// Only column-marked methods are mirrored, in declaration order. Each must
/// be a `get`-prefixed getter whose return type resolves through
/// [`ValueType::from_type_ref`]; the first violation aborts the whole type.
pub fn extract(
    domain: &DomainType,
    naming: &AuditNaming,
) -> Result<AuditTypeDescriptor, ExtractError> {
    validate_type_name(&domain.name)?;

    let mut fields = Vec::new();
    for method in domain.columns() {
        let field = extract_field(&domain.name, method)?;

        tracing::debug!(
            domain = %domain.name,
            method = %method.name,
            field = %field.raw_name,
            value_type = %field.value_type,
            "mirroring column"
        );

        fields.push(field);
    }

    Ok(AuditTypeDescriptor::new(naming, domain.name.clone(), fields))
}

// extract_field
fn extract_field(type_name: &str, method: &Method) -> Result<FieldDescriptor, ExtractError> {
    let raw_name = getter_field_name(&method.name).ok_or_else(|| {
        ExtractError::MalformedAccessorName {
            type_name: type_name.to_string(),
            method: method.name.clone(),
        }
    })?;

    let value_type = ValueType::from_type_ref(&method.returns).ok_or_else(|| {
        ExtractError::UnresolvedFieldType {
            type_name: type_name.to_string(),
            method: method.name.clone(),
            type_ref: method.returns.to_string(),
        }
    })?;

    Ok(FieldDescriptor::mirrored(raw_name, value_type))
}

/// Field name behind a getter: `getCarMake` → `CarMake`.
///
/// Returns `None` unless the name starts with the getter prefix followed by
/// an ASCII uppercase letter, and the remainder holds at least one word
/// (`getURL` and `getX` have none).
#[must_use]
pub fn getter_field_name(method: &str) -> Option<&str> {
    method
        .strip_prefix(GETTER_PREFIX)
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()))
        .filter(|rest| !to_delimited_form(rest).is_empty())
}

// validate_type_name
// the name ends up in a class header, table name and field identifiers
fn validate_type_name(name: &str) -> Result<(), ExtractError> {
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if !valid {
        return Err(ExtractError::InvalidTypeName {
            type_name: name.to_string(),
        });
    }

    if !is_pascal_case(name) {
        tracing::warn!(domain = %name, "domain type name is not PascalCase");
    }

    Ok(())
}

///
/// TESTS
///
