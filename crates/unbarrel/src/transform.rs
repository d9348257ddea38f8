//! Source-to-source transform over whole files.
//!
//! Parses a consumer module with OXC, hands each top-level import to the
//! [`ImportRewriter`] and splices the replacement text in by span. Text
//! outside rewritten imports is preserved byte-for-byte.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::{ImportDeclaration, ImportDeclarationSpecifier, Statement};
use oxc_parser::Parser;
use tracing::debug;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::TransformError;
use crate::parser::{module_export_name, source_type_for};
use crate::rewrite::{ImportRewriter, ImportSpecifier, ImportStatement, RewriteOutcome};
use crate::runtime::{FileSystem, NativeFileSystem};

/// Result of transforming one file.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub code: String,
    /// Whether `code` differs from the input
    pub modified: bool,
    /// Number of import statements that were replaced
    pub replaced_imports: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Rewrites barrel imports in JavaScript/TypeScript sources.
#[derive(Debug)]
pub struct BarrelTransform<F: FileSystem = NativeFileSystem> {
    rewriter: ImportRewriter<F>,
}

/// A span of the input and the text that replaces it.
struct Edit {
    start: usize,
    end: usize,
    text: String,
}

impl<F: FileSystem> BarrelTransform<F> {
    pub fn new(rewriter: ImportRewriter<F>) -> Self {
        Self { rewriter }
    }

    pub fn rewriter(&self) -> &ImportRewriter<F> {
        &self.rewriter
    }

    /// Read `path` through the filesystem and transform it.
    pub fn transform_file(&self, path: &Path) -> Result<TransformOutput, TransformError> {
        let source = self
            .rewriter
            .resolver()
            .fs()
            .read_to_string(path)
            .map_err(|source| TransformError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        self.transform_source(path, &source)
    }

    /// Transform `source`, the contents of `path`.
    ///
    /// # Errors
    ///
    /// Fails on syntax errors in `source` and on any fatal rewrite error
    /// (unsupported import shape, unresolvable barrel).
    pub fn transform_source(&self, path: &Path, source: &str) -> Result<TransformOutput, TransformError> {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, source_type_for(path)).parse();

        if ret.panicked || !ret.errors.is_empty() {
            let messages: Vec<String> = ret.errors.iter().map(|e| e.to_string()).collect();
            return Err(TransformError::Parse {
                path: path.to_path_buf(),
                message: messages.join("; "),
            });
        }

        let mut edits = Vec::new();
        let mut diagnostics = Diagnostics::new();

        for statement in ret.program.body.iter() {
            let Statement::ImportDeclaration(decl) = statement else {
                continue;
            };
            let Some(import) = to_import_statement(decl) else {
                continue;
            };

            let rewrite = self.rewriter.rewrite(path, &import)?;
            diagnostics.extend(rewrite.diagnostics);

            if let RewriteOutcome::Replaced(statements) = rewrite.outcome {
                let quote = quote_of(source, decl);
                let text = statements
                    .iter()
                    .map(|statement| statement.to_source(quote))
                    .collect::<Vec<_>>()
                    .join("\n");
                edits.push(Edit {
                    start: decl.span.start as usize,
                    end: decl.span.end as usize,
                    text,
                });
            }
        }

        let replaced_imports = edits.len();
        if replaced_imports > 0 {
            debug!(file = %path.display(), replaced_imports, "rewrote barrel imports");
        }

        let code = apply_edits(source, &edits);
        Ok(TransformOutput {
            modified: code != source,
            code,
            replaced_imports,
            diagnostics: diagnostics.into_vec(),
        })
    }
}

/// Convert an OXC import declaration, or `None` for shapes left alone:
/// side-effect imports, imports with attributes and phase imports.
fn to_import_statement(decl: &ImportDeclaration<'_>) -> Option<ImportStatement> {
    if decl.with_clause.is_some() || decl.phase.is_some() {
        return None;
    }
    let specifiers = decl.specifiers.as_ref()?;

    let specifiers = specifiers
        .iter()
        .map(|specifier| match specifier {
            ImportDeclarationSpecifier::ImportSpecifier(named) => ImportSpecifier::Named {
                imported: module_export_name(&named.imported),
                local: named.local.name.to_string(),
                is_type: named.import_kind.is_type(),
            },
            ImportDeclarationSpecifier::ImportDefaultSpecifier(default) => ImportSpecifier::Default {
                local: default.local.name.to_string(),
            },
            ImportDeclarationSpecifier::ImportNamespaceSpecifier(ns) => ImportSpecifier::Namespace {
                local: ns.local.name.to_string(),
            },
        })
        .collect();

    Some(ImportStatement {
        source: decl.source.value.to_string(),
        specifiers,
        is_type_only: decl.import_kind.is_type(),
    })
}

/// Quote character used by the declaration's module specifier.
fn quote_of(source: &str, decl: &ImportDeclaration<'_>) -> char {
    source
        .get(decl.source.span.start as usize..)
        .and_then(|rest| rest.chars().next())
        .filter(|c| *c == '"' || *c == '\'')
        .unwrap_or('\'')
}

/// Apply non-overlapping edits sorted by start offset.
fn apply_edits(source: &str, edits: &[Edit]) -> String {
    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    for edit in edits {
        out.push_str(&source[cursor..edit.start]);
        out.push_str(&edit.text);
        cursor = edit.end;
    }
    out.push_str(&source[cursor..]);
    out
}
