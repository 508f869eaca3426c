//! ## Crate layout
//! - `build`: descriptor emission, artifact sinks, and the generation pass.
//! - `config`: `auditgen.toml` loading for build scripts.
//! - `schema`: domain type nodes, introspection, and descriptor extraction.
//! - `utils`: naming conversion and content fingerprints.
//!
//! Most hosts only need the `prelude` and [`generate`].

pub use auditgen_build as build;
pub use auditgen_config_build as config;
pub use auditgen_schema as schema;
pub use auditgen_utils as utils;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use auditgen_build::build;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        build::{
            Artifact, Diagnostic, DiagnosticKind, DiagnosticSink, DirFiler, Filer, Generator,
            MemoryFiler, PassReport, Round, TracingSink,
        },
        schema::{
            AuditNaming,
            introspect::{Manifest, TypeIntrospector},
            prelude::*,
        },
    };
}

use prelude::*;

/// Run one active round with the default naming.
pub fn generate<I, F, S>(introspector: &I, filer: &mut F, sink: &mut S) -> PassReport
where
    I: TypeIntrospector + ?Sized,
    F: Filer + ?Sized,
    S: DiagnosticSink + ?Sized,
{
    let generator = Generator::new();
    generator.init(sink);

    generator.process(Round::new(), introspector, filer, sink)
}
