//! Diagnostics boundary.
//!
//! The host decides where messages go; the pass only reports them. Sinks are
//! injected by the caller and must not influence generation.

use std::fmt;

///
/// DiagnosticKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DiagnosticKind {
    Error,
    Note,
    Other,
    Warning,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Error => "error",
            Self::Note => "note",
            Self::Other => "other",
            Self::Warning => "warning",
        };

        f.write_str(label)
    }
}

///
/// Diagnostic
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,

    /// Qualified name of the domain type the message is about, if any.
    pub subject: Option<String>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            subject: None,
        }
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn note(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Note, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Other, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Error, message)
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, DiagnosticKind::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

///
/// DiagnosticSink
///

pub trait DiagnosticSink {
    fn on_diagnostic(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn on_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

///
/// TracingSink
/// Forwards diagnostics to `tracing` at a matching level.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn on_diagnostic(&mut self, diagnostic: Diagnostic) {
        let subject = diagnostic.subject.as_deref().unwrap_or("-");

        match diagnostic.kind {
            DiagnosticKind::Error => {
                tracing::error!(subject, "{}", diagnostic.message);
            }
            DiagnosticKind::Warning => {
                tracing::warn!(subject, "{}", diagnostic.message);
            }
            DiagnosticKind::Note => {
                tracing::info!(subject, "{}", diagnostic.message);
            }
            DiagnosticKind::Other => {
                tracing::debug!(subject, "{}", diagnostic.message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.on_diagnostic(Diagnostic::note("first"));
        sink.on_diagnostic(Diagnostic::error("second").with_subject("a.Car"));

        assert_eq!(sink.len(), 2);
        assert!(!sink[0].is_error());
        assert!(sink[1].is_error());
        assert_eq!(sink[1].subject.as_deref(), Some("a.Car"));
        assert_eq!(sink[1].to_string(), "error: second");
    }
}
