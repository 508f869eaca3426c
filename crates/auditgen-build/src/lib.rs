//! Audit type codegen: descriptor emission, artifact sinks, and the
//! per-round generation pass.

mod artifact;
mod diagnostic;
mod emit;
mod error;
mod filer;
mod interface;
mod macros;
mod pass;
mod script;

pub use artifact::Artifact;
pub use diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink, TracingSink};
pub use emit::{IMPORTS, emit};
pub use error::GenerateError;
pub use filer::{DirFiler, Filer, MemoryFiler, write_artifact};
pub use interface::emit_interface;
pub use pass::{Generator, PassReport, Round, Written};
pub use script::{BuildError, BuildOutcome, run_build};
