use crate::{introspect::TypeIntrospector, node::DomainType};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error as ThisError;

///
/// ManifestError
///

#[derive(Debug, ThisError)]
pub enum ManifestError {
    #[error("failed to read manifest '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML manifest: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("manifest '{path}' must have a .toml or .json extension")]
    UnsupportedFormat { path: String },
}

///
/// Manifest
///
/// Domain types described as data, for hosts that have no live type model to
/// hand over. Types and methods keep the order they are written in.
///
/// ```toml
/// [[types]]
/// name = "Car"
/// package = "com.example"
/// markers = ["Entity", "Auditable"]
///
/// [[types.methods]]
/// name = "getCarMake"
/// returns = "java.lang.String"
/// markers = ["Column"]
/// ```
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub types: Vec<DomainType>,
}

impl Manifest {
    #[must_use]
    pub const fn new(types: Vec<DomainType>) -> Self {
        Self { types }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ManifestError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a manifest, choosing the format from the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let parse: fn(&str) -> Result<Self, ManifestError> =
            match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => Self::from_toml_str,
                Some("json") => Self::from_json_str,
                _ => return Err(ManifestError::UnsupportedFormat { path: shown }),
            };

        let text = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: shown.clone(),
            source,
        })?;
        let manifest = parse(&text)?;

        tracing::debug!(path = %shown, types = manifest.types.len(), "loaded manifest");

        Ok(manifest)
    }
}

impl TypeIntrospector for Manifest {
    fn root_types(&self) -> &[DomainType] {
        &self.types
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Marker, Method};
    use std::io::Write;

    const CAR_TOML: &str = r#"
        [[types]]
        name = "Car"
        package = "com.lsq.systems.metagen58"
        markers = ["Entity", "Table", "Auditable"]

        [[types.methods]]
        name = "getCarId"
        returns = "java.lang.Integer"
        markers = ["Id", "GeneratedValue", "Column"]

        [[types.methods]]
        name = "setCarId"
        returns = "void"

        [[types.methods]]
        name = "getCarMake"
        returns = "()java.lang.String"
        markers = ["Column"]
    "#;

    #[test]
    fn parses_toml_in_declaration_order() {
        let manifest = Manifest::from_toml_str(CAR_TOML).unwrap();
        let car = &manifest.root_types()[0];

        assert!(car.is_auditable());
        assert_eq!(car.qualified_name(), "com.lsq.systems.metagen58.Car");

        let names: Vec<_> = car.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["getCarId", "setCarId", "getCarMake"]);

        let columns: Vec<_> = car.columns().map(|m| m.name.as_str()).collect();
        assert_eq!(columns, vec!["getCarId", "getCarMake"]);
    }

    #[test]
    fn parses_json() {
        let json = r#"{
            "types": [{
                "name": "Boat",
                "markers": ["Auditable"],
                "methods": [{ "name": "getHull", "returns": "java.lang.String", "markers": ["Column"] }]
            }]
        }"#;

        let manifest = Manifest::from_json_str(json).unwrap();
        let expected = DomainType::new("", "Boat")
            .with_marker(Marker::Auditable)
            .with_method(Method::column("getHull", "java.lang.String"));

        assert_eq!(manifest.types, vec![expected]);
    }

    #[test]
    fn rejects_unknown_marker_and_keys() {
        let bad_marker = r#"
            [[types]]
            name = "Car"
            markers = ["Persisted"]
        "#;
        assert!(matches!(
            Manifest::from_toml_str(bad_marker),
            Err(ManifestError::Toml(_))
        ));

        let bad_key = r#"
            [[types]]
            name = "Car"
            colour = "red"
        "#;
        assert!(Manifest::from_toml_str(bad_key).is_err());
    }

    #[test]
    fn load_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("types.toml");
        std::fs::File::create(&toml_path)
            .unwrap()
            .write_all(CAR_TOML.as_bytes())
            .unwrap();
        assert_eq!(Manifest::load(&toml_path).unwrap().types.len(), 1);

        let yaml_path = dir.path().join("types.yaml");
        assert!(matches!(
            Manifest::load(&yaml_path),
            Err(ManifestError::UnsupportedFormat { .. })
        ));

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            Manifest::load(&missing),
            Err(ManifestError::Io { .. })
        ));
    }
}
