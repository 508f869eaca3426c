//! Type introspection boundary.
//!
//! Generation never inspects source itself; it asks a `TypeIntrospector` for
//! the root types of the current round and reads their declared methods and
//! markers.

mod manifest;

pub use manifest::{Manifest, ManifestError};

use crate::node::DomainType;

///
/// TypeIntrospector
///

pub trait TypeIntrospector {
    /// Every root type visible in the current round, in declaration order.
    fn root_types(&self) -> &[DomainType];

    /// Root types carrying the `Auditable` marker.
    fn auditable_types(&self) -> Vec<&DomainType> {
        self.root_types()
            .iter()
            .filter(|ty| ty.is_auditable())
            .collect()
    }
}

impl TypeIntrospector for [DomainType] {
    fn root_types(&self) -> &[DomainType] {
        self
    }
}

impl TypeIntrospector for Vec<DomainType> {
    fn root_types(&self) -> &[DomainType] {
        self
    }
}

///
/// TESTS
///
