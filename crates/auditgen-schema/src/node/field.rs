use crate::prelude::*;

///
/// FieldDescriptor
/// One persisted field of a domain type, as mirrored onto its audit type.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldDescriptor {
    /// Accessor-derived identifier, e.g. `CarMake` for `getCarMake`.
    pub raw_name: String,
    pub value_type: ValueType,
    pub optional: bool,
}

impl FieldDescriptor {
    pub fn new(raw_name: impl Into<String>, value_type: ValueType, optional: bool) -> Self {
        Self {
            raw_name: raw_name.into(),
            value_type,
            optional,
        }
    }

    /// A mirrored column; these are always optional.
    pub fn mirrored(raw_name: impl Into<String>, value_type: ValueType) -> Self {
        Self::new(raw_name, value_type, true)
    }
}
