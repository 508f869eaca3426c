use crate::prelude::*;
use derive_more::{Deref, Display};

///
/// ValueType
///
/// Value types a column getter may return. This is the static resolution
/// table: a return type reference that does not name one of these is
/// unresolved.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum ValueType {
    Boolean,
    Byte,
    Character,
    Date,
    Double,
    Float,
    Integer,
    Long,
    Short,
    String,
}

impl ValueType {
    pub const ALL: [Self; 10] = [
        Self::Boolean,
        Self::Byte,
        Self::Character,
        Self::Date,
        Self::Double,
        Self::Float,
        Self::Integer,
        Self::Long,
        Self::Short,
        Self::String,
    ];

    /// Fully qualified type reference this value type is resolved from.
    #[must_use]
    pub const fn qualified_name(self) -> &'static str {
        match self {
            Self::Boolean => "java.lang.Boolean",
            Self::Byte => "java.lang.Byte",
            Self::Character => "java.lang.Character",
            Self::Date => "java.util.Date",
            Self::Double => "java.lang.Double",
            Self::Float => "java.lang.Float",
            Self::Integer => "java.lang.Integer",
            Self::Long => "java.lang.Long",
            Self::Short => "java.lang.Short",
            Self::String => "java.lang.String",
        }
    }

    /// Simple name used in emitted declarations.
    #[must_use]
    pub const fn simple_name(self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Character => "Character",
            Self::Date => "Date",
            Self::Double => "Double",
            Self::Float => "Float",
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Short => "Short",
            Self::String => "String",
        }
    }

    // date/time columns carry a temporal marker
    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Date)
    }

    #[must_use]
    pub fn from_type_ref(type_ref: &TypeRef) -> Option<Self> {
        let name = type_ref.normalized();

        Self::ALL
            .into_iter()
            .find(|ty| ty.qualified_name() == name)
    }
}

///
/// TypeRef
///
/// Declared return type of a method as reported by introspection, either a
/// plain qualified name (`java.lang.String`) or the method-type form
/// (`()java.lang.String`).
///

#[derive(Clone, Debug, Deref, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The type name with any empty parameter list prefix removed.
    #[must_use]
    pub fn normalized(&self) -> &str {
        let s = self.0.trim();

        s.strip_prefix("()").unwrap_or(s)
    }
}

impl From<&str> for TypeRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TypeRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<ValueType> for TypeRef {
    fn from(ty: ValueType) -> Self {
        Self::new(ty.qualified_name())
    }
}

///
/// TESTS
///
