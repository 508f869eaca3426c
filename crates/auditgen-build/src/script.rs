//! Build-script entry point.
//!
//! Loads the manifest and config, then runs a single generation round into a
//! directory filer.

use crate::{Diagnostic, DirFiler, Generator, PassReport, Round};
use auditgen_config_build::{Config, ConfigError};
use auditgen_schema::introspect::{Manifest, ManifestError};
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;

///
/// BuildError
/// Setup failures; per-type failures are reported in `BuildOutcome` instead.
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

///
/// BuildOutcome
///

#[derive(Debug)]
pub struct BuildOutcome {
    pub out_dir: PathBuf,
    pub report: PassReport,
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildOutcome {
    /// Error diagnostics, in the order they were raised.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }
}

/// Generate audit types for every auditable type in `manifest_path`.
///
/// Artifacts go to `generator.out_dir` from the config when set, otherwise
/// to `default_out_dir`.
pub fn run_build(
    manifest_path: impl AsRef<Path>,
    config_path: impl AsRef<Path>,
    default_out_dir: impl AsRef<Path>,
) -> Result<BuildOutcome, BuildError> {
    let config = Config::load(config_path)?;
    let manifest = Manifest::load(manifest_path)?;

    let out_dir = config
        .generator
        .out_dir
        .clone()
        .unwrap_or_else(|| default_out_dir.as_ref().to_path_buf());

    let generator = Generator::from_config(&config.generator);
    let mut filer = DirFiler::new(&out_dir);
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    generator.init(&mut diagnostics);
    let report = generator.process(Round::new(), &manifest, &mut filer, &mut diagnostics);

    Ok(BuildOutcome {
        out_dir,
        report,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const MANIFEST: &str = r#"
[[types]]
name = "Car"
package = "com.example"
markers = ["Entity", "Auditable"]

[[types.methods]]
name = "getCarMake"
returns = "java.lang.String"
markers = ["Column"]

[[types]]
name = "Garage"
package = "com.example"
markers = ["Entity"]
"#;

    #[test]
    fn writes_into_default_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("types.toml");
        fs::write(&manifest, MANIFEST).unwrap();

        let out = dir.path().join("out");
        let outcome = run_build(&manifest, dir.path().join("missing.toml"), &out).unwrap();

        assert!(outcome.report.is_clean());
        assert_eq!(outcome.out_dir, out);
        assert_eq!(outcome.errors().count(), 0);
        assert!(
            out.join("com/lsq/systems/metagen58/CarAudit.java")
                .is_file()
        );
        assert!(
            !out.join("com/lsq/systems/metagen58/GarageAudit.java")
                .exists()
        );
    }

    #[test]
    fn config_overrides_package_and_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("types.toml");
        fs::write(&manifest, MANIFEST).unwrap();

        let custom = dir.path().join("custom");
        let config = dir.path().join("auditgen.toml");
        fs::write(
            &config,
            format!(
                "[generator]\npackage = \"org.acme.audit\"\nsuffix = \"History\"\nout_dir = {:?}\nemit_interface = true\n",
                custom.display().to_string()
            ),
        )
        .unwrap();

        let outcome = run_build(&manifest, &config, dir.path().join("unused")).unwrap();

        assert_eq!(outcome.out_dir, custom);
        assert!(custom.join("org/acme/audit/CarHistory.java").is_file());
        assert!(custom.join("org/acme/audit/AuditInterface.java").is_file());
    }

    #[test]
    fn bad_manifest_extension_is_a_setup_error() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("types.yaml");
        fs::write(&manifest, "").unwrap();

        let err = run_build(&manifest, dir.path().join("none.toml"), dir.path()).unwrap_err();

        assert!(matches!(err, BuildError::Manifest(_)));
    }
}
