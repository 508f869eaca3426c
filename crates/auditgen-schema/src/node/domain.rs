use crate::prelude::*;

///
/// Marker
/// Annotation-like signals attached to domain types and their methods.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum Marker {
    Auditable,
    Column,
    Entity,
    GeneratedValue,
    Id,
    Table,
}

///
/// Method
/// One declared method of a domain type.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Method {
    pub name: String,
    pub returns: TypeRef,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<Marker>,
}

impl Method {
    pub fn new(name: impl Into<String>, returns: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            returns: returns.into(),
            markers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Shorthand for a getter carrying the column marker.
    pub fn column(name: impl Into<String>, returns: impl Into<TypeRef>) -> Self {
        Self::new(name, returns).with_marker(Marker::Column)
    }

    #[must_use]
    pub fn has_marker(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }

    #[must_use]
    pub fn is_column(&self) -> bool {
        self.has_marker(Marker::Column)
    }
}

///
/// DomainType
///
/// A type handle as reported by introspection. `methods` is in declaration
/// order; extraction relies on that order for reproducible output.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DomainType {
    pub name: String,

    #[serde(default)]
    pub package: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<Marker>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<Method>,
}

impl DomainType {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            markers: Vec::new(),
            methods: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    #[must_use]
    pub fn has_marker(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }

    #[must_use]
    pub fn is_auditable(&self) -> bool {
        self.has_marker(Marker::Auditable)
    }

    /// Column-marked methods, in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = &Method> {
        self.methods.iter().filter(|m| m.is_column())
    }

    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }
}
