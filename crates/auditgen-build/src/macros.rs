//! Build-script helper that generates audit types from a domain manifest.
//!
//! Per-type failures become cargo warnings; only setup failures (unreadable
//! config or manifest) abort the build script.
#[macro_export]
macro_rules! build {
    ($manifest:expr) => {
        use std::{env::var, path::PathBuf};

        //
        // CARGO
        //

        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed={}", $manifest);
        println!(
            "cargo:rerun-if-changed={}",
            ::auditgen::config::CONFIG_FILE
        );

        let out_dir = PathBuf::from(var("OUT_DIR")?).join("auditgen");

        //
        // AUDIT TYPES
        //

        let outcome = ::auditgen::build::run_build(
            $manifest,
            ::auditgen::config::CONFIG_FILE,
            &out_dir,
        )?;

        for diagnostic in outcome.errors() {
            println!("cargo:warning={}", diagnostic.message);
        }
    };
}
