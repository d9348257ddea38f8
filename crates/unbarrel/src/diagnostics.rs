//! Non-fatal findings collected during resolution and rewriting.
//!
//! Every diagnostic is also logged through `tracing`, but callers get them
//! as values so tests and hosts can assert on them.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Category of a non-fatal finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// An exported declaration whose name could not be extracted
    MalformedDeclaration,
    /// `export * as NS from '...'`, which is not resolved
    UnsupportedReExport,
    /// `import { A } from 'x'; export { A }`, which is not resolved
    ImportedBindingReExport,
    /// A wildcard chain that re-enters a file already on the chain
    CyclicReExport,
    /// A later declaration replaced an earlier record with the same name
    ShadowedExport,
    /// A requested import name has no export record
    UnresolvedName,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::MalformedDeclaration => "malformed-declaration",
            DiagnosticKind::UnsupportedReExport => "unsupported-re-export",
            DiagnosticKind::ImportedBindingReExport => "imported-binding-re-export",
            DiagnosticKind::CyclicReExport => "cyclic-re-export",
            DiagnosticKind::ShadowedExport => "shadowed-export",
            DiagnosticKind::UnresolvedName => "unresolved-name",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single non-fatal finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// File the finding refers to
    pub path: PathBuf,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.path.display(), self.message)
    }
}

/// Collector that logs each diagnostic as it is pushed.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.kind {
            DiagnosticKind::ShadowedExport | DiagnosticKind::UnresolvedName => {
                tracing::debug!(kind = %diagnostic.kind, path = %diagnostic.path.display(), "{}", diagnostic.message);
            }
            _ => {
                tracing::warn!(kind = %diagnostic.kind, path = %diagnostic.path.display(), "{}", diagnostic.message);
            }
        }
        self.items.push(diagnostic);
    }

    pub fn report(&mut self, kind: DiagnosticKind, path: impl AsRef<Path>, message: impl Into<String>) {
        self.push(Diagnostic::new(kind, path, message));
    }

    /// Append diagnostics that were already logged where they were raised.
    pub fn extend(&mut self, other: impl IntoIterator<Item = Diagnostic>) {
        self.items.extend(other);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
