//! The generation pass.
//!
//! Each round the host hands over its root types; every auditable one is
//! extracted, emitted and written on its own. A failure is reported against
//! its domain type and the pass carries on with the rest.

use crate::{
    Artifact, Diagnostic, DiagnosticSink, Filer, GenerateError, emit, emit_interface,
    write_artifact,
};
use auditgen_config_build::GeneratorConfig;
use auditgen_schema::{
    AUDIT_INTERFACE, AuditNaming, PACKAGE, extract::extract, introspect::TypeIntrospector,
    node::DomainType,
};
use auditgen_utils::hash::Fingerprint;

/// Note emitted when a generator starts.
pub const GENERATOR_BANNER: &str = "Entity Audit Generator";

///
/// Round
/// What the host knows about the current processing round.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Round {
    /// The host has finished all rounds.
    pub processing_over: bool,
    /// The auditable marker was requested in this round.
    pub annotations_present: bool,
}

impl Round {
    /// A regular round with auditable types requested.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            processing_over: false,
            annotations_present: true,
        }
    }

    /// The closing round issued after processing is over.
    #[must_use]
    pub const fn last() -> Self {
        Self {
            processing_over: true,
            annotations_present: false,
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.processing_over && self.annotations_present
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

///
/// Written
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Written {
    pub qualified_name: String,
    pub fingerprint: Fingerprint,
}

///
/// PassReport
///

#[derive(Debug, Default)]
pub struct PassReport {
    /// Artifacts written, in processing order.
    pub written: Vec<Written>,
    /// One entry per domain type that produced no artifact.
    pub failures: Vec<GenerateError>,
    /// The round was inactive and nothing was attempted.
    pub skipped: bool,
}

impl PassReport {
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    #[must_use]
    pub fn fingerprint_of(&self, qualified_name: &str) -> Option<Fingerprint> {
        self.written
            .iter()
            .find(|w| w.qualified_name == qualified_name)
            .map(|w| w.fingerprint)
    }
}

///
/// Generator
///
/// Holds only the immutable naming settings; nothing carries over between
/// passes.
///

#[derive(Clone, Debug, Default)]
pub struct Generator {
    naming: AuditNaming,
    emit_interface: bool,
}

impl Generator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            naming: config.naming(),
            emit_interface: config.emit_interface,
        }
    }

    #[must_use]
    pub fn with_naming(mut self, naming: AuditNaming) -> Self {
        self.naming = naming;
        self
    }

    #[must_use]
    pub const fn with_interface(mut self, emit_interface: bool) -> Self {
        self.emit_interface = emit_interface;
        self
    }

    #[must_use]
    pub const fn naming(&self) -> &AuditNaming {
        &self.naming
    }

    /// Whether a pass writes `AuditInterface` into the audit package.
    ///
    /// Always true outside the default package, where no shared interface
    /// exists for generated types to implement.
    #[must_use]
    pub fn writes_interface(&self) -> bool {
        self.emit_interface || self.naming.package != PACKAGE
    }

    /// Announce the generator to the host.
    pub fn init<S: DiagnosticSink + ?Sized>(&self, sink: &mut S) {
        tracing::info!(
            package = %self.naming.package,
            suffix = %self.naming.suffix,
            "audit generator initialised"
        );
        sink.on_diagnostic(Diagnostic::note(GENERATOR_BANNER));
    }

    /// Run one pass over the root types of `round`.
    pub fn process<I, F, S>(
        &self,
        round: Round,
        introspector: &I,
        filer: &mut F,
        sink: &mut S,
    ) -> PassReport
    where
        I: TypeIntrospector + ?Sized,
        F: Filer + ?Sized,
        S: DiagnosticSink + ?Sized,
    {
        let mut report = PassReport::default();
        if !round.is_active() {
            tracing::debug!(?round, "inactive round, skipping");
            report.skipped = true;
            return report;
        }

        let candidates = introspector.auditable_types();
        tracing::info!(candidates = candidates.len(), "starting audit generation pass");

        if self.writes_interface() {
            let artifact = emit_interface(&self.naming.package);
            self.commit(AUDIT_INTERFACE, artifact, filer, sink, &mut report);
        }

        for domain in candidates {
            sink.on_diagnostic(
                Diagnostic::other(format!(
                    "Processing annotated class {}",
                    domain.qualified_name()
                ))
                .with_subject(domain.qualified_name()),
            );

            match self.render(domain) {
                Ok(artifact) => self.commit(&domain.name, artifact, filer, sink, &mut report),
                Err(err) => self.fail(domain, err, sink, &mut report),
            }
        }

        tracing::info!(
            written = report.written.len(),
            failed = report.failures.len(),
            "audit generation pass finished"
        );

        report
    }

    /// Extract and emit one domain type without writing it.
    pub fn render(&self, domain: &DomainType) -> Result<Artifact, GenerateError> {
        let desc = extract(domain, &self.naming)?;

        Ok(emit(&desc))
    }

    // commit
    // hand a finished artifact to the filer and record the outcome
    fn commit<F, S>(
        &self,
        type_name: &str,
        artifact: Artifact,
        filer: &mut F,
        sink: &mut S,
        report: &mut PassReport,
    ) where
        F: Filer + ?Sized,
        S: DiagnosticSink + ?Sized,
    {
        match write_artifact(filer, &artifact) {
            Ok(()) => {
                let fingerprint = artifact.fingerprint();
                tracing::info!(
                    artifact = artifact.qualified_name(),
                    %fingerprint,
                    "wrote audit artifact"
                );
                report.written.push(Written {
                    qualified_name: artifact.qualified_name().to_string(),
                    fingerprint,
                });
            }
            Err(source) => {
                let err = GenerateError::ArtifactWrite {
                    type_name: type_name.to_string(),
                    qualified_name: artifact.qualified_name().to_string(),
                    source,
                };
                let message = err.diagnostic_message(&self.naming.suffix);
                tracing::error!(
                    artifact = artifact.qualified_name(),
                    error = %err,
                    "artifact write failed"
                );
                sink.on_diagnostic(
                    Diagnostic::error(message).with_subject(artifact.qualified_name()),
                );
                report.failures.push(err);
            }
        }
    }

    fn fail<S: DiagnosticSink + ?Sized>(
        &self,
        domain: &DomainType,
        err: GenerateError,
        sink: &mut S,
        report: &mut PassReport,
    ) {
        let subject = domain.qualified_name();
        tracing::error!(domain = %subject, error = %err, "audit generation aborted");
        sink.on_diagnostic(
            Diagnostic::error(err.diagnostic_message(&self.naming.suffix)).with_subject(subject),
        );
        report.failures.push(err);
    }
}

///
/// TESTS
///
