//! Import rewriter.
//!
//! Turns one `import { A, B as C } from './barrel'` that targets a configured
//! barrel directory into one import per name, each pointing at the module
//! that really defines it:
//!
//! ```text
//! import { A } from './barrel/a';
//! import { Real as C } from './barrel/impl';
//! ```
//!
//! The statement types here are host-neutral; [`crate::transform`] converts
//! OXC import declarations into them and prints the result back.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::error::RewriteError;
use crate::exports::{ExportRecord, ResolvedBarrel};
use crate::paths::{is_path_specifier, join_dir, relative_specifier, to_slash};
use crate::resolver::ExportGraphResolver;
use crate::runtime::{FileSystem, NativeFileSystem};

/// One specifier of an import statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSpecifier {
    /// `{ imported as local }`, optionally marked `type`
    Named {
        imported: String,
        local: String,
        is_type: bool,
    },
    /// `local` in `import local from '...'`
    Default { local: String },
    /// `* as local`
    Namespace { local: String },
}

impl ImportSpecifier {
    pub fn named(imported: impl Into<String>, local: impl Into<String>) -> Self {
        Self::Named {
            imported: imported.into(),
            local: local.into(),
            is_type: false,
        }
    }

    /// Local binding introduced by this specifier.
    pub fn local(&self) -> &str {
        match self {
            Self::Named { local, .. } | Self::Default { local } | Self::Namespace { local } => {
                local
            }
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Self::Named { .. } => "named",
            Self::Default { .. } => "default",
            Self::Namespace { .. } => "namespace",
        }
    }
}

/// Host-neutral import statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    /// Module specifier as written (`./barrel`)
    pub source: String,
    pub specifiers: Vec<ImportSpecifier>,
    /// `import type { ... }`
    pub is_type_only: bool,
}

impl ImportStatement {
    pub fn new(source: impl Into<String>, specifiers: Vec<ImportSpecifier>) -> Self {
        Self {
            source: source.into(),
            specifiers,
            is_type_only: false,
        }
    }

    /// Print the statement as source text using `quote` around the specifier.
    ///
    /// ```
    /// use unbarrel::{ImportSpecifier, ImportStatement};
    ///
    /// let stmt = ImportStatement::new("./barrel/impl", vec![ImportSpecifier::named("Bar", "Baz")]);
    /// assert_eq!(stmt.to_source('\''), "import { Bar as Baz } from './barrel/impl';");
    /// ```
    pub fn to_source(&self, quote: char) -> String {
        let mut out = String::from("import ");
        if self.is_type_only {
            out.push_str("type ");
        }

        let mut leading = Vec::new();
        let mut named = Vec::new();
        for specifier in &self.specifiers {
            match specifier {
                ImportSpecifier::Default { local } => leading.push(local.clone()),
                ImportSpecifier::Namespace { local } => leading.push(format!("* as {}", local)),
                ImportSpecifier::Named {
                    imported,
                    local,
                    is_type,
                } => {
                    let mut text = String::new();
                    if *is_type && !self.is_type_only {
                        text.push_str("type ");
                    }
                    if imported == local {
                        text.push_str(local);
                    } else {
                        let _ = write!(text, "{} as {}", export_name(imported, quote), local);
                    }
                    named.push(text);
                }
            }
        }

        let mut clauses = leading;
        if !named.is_empty() {
            clauses.push(format!("{{ {} }}", named.join(", ")));
        }
        if clauses.is_empty() {
            clauses.push("{}".to_string());
        }

        let _ = write!(
            out,
            "{} from {}{}{};",
            clauses.join(", "),
            quote,
            escape(&self.source, quote),
            quote
        );
        out
    }
}

/// Import names that are not identifiers print as string literals.
fn export_name(name: &str, quote: char) -> String {
    let mut chars = name.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$');

    if is_identifier {
        name.to_string()
    } else {
        format!("{}{}{}", quote, escape(name, quote), quote)
    }
}

fn escape(text: &str, quote: char) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '\\' || c == quote {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// How rewritten import sources are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecifierStyle {
    /// `./barrel/impl`, relative to the importing file
    #[default]
    Relative,
    /// `/app/src/barrel/impl`
    Absolute,
}

#[derive(Debug, Clone, Default)]
pub struct RewriteOptions {
    pub specifier_style: SpecifierStyle,
}

/// What to do with one import statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// Leave the statement as it is
    Untouched,
    /// Replace the statement with these, in order
    Replaced(Vec<ImportStatement>),
}

#[derive(Debug, Clone)]
pub struct Rewrite {
    pub outcome: RewriteOutcome,
    pub diagnostics: Vec<Diagnostic>,
}

impl Rewrite {
    fn untouched() -> Self {
        Self {
            outcome: RewriteOutcome::Untouched,
            diagnostics: Vec::new(),
        }
    }

    pub fn is_replaced(&self) -> bool {
        matches!(self.outcome, RewriteOutcome::Replaced(_))
    }
}

/// Rewrites imports of configured barrel directories.
#[derive(Debug)]
pub struct ImportRewriter<F: FileSystem = NativeFileSystem> {
    resolver: ExportGraphResolver<F>,
    barrels: Vec<PathBuf>,
    options: RewriteOptions,
}

impl<F: FileSystem> ImportRewriter<F> {
    /// `barrels` are absolute barrel directories; they are normalized here.
    pub fn new(resolver: ExportGraphResolver<F>, barrels: Vec<PathBuf>, options: RewriteOptions) -> Self {
        let mut normalized: Vec<PathBuf> = Vec::with_capacity(barrels.len());
        for barrel in barrels {
            // Relative entries that cannot be anchored are kept as given and never match
            let barrel = resolver.absolute(&barrel).unwrap_or(barrel);
            if !normalized.contains(&barrel) {
                normalized.push(barrel);
            }
        }

        Self {
            resolver,
            barrels: normalized,
            options,
        }
    }

    pub fn resolver(&self) -> &ExportGraphResolver<F> {
        &self.resolver
    }

    pub fn barrels(&self) -> &[PathBuf] {
        &self.barrels
    }

    pub fn options(&self) -> &RewriteOptions {
        &self.options
    }

    /// Barrel directory `source` targets when imported from `importer`.
    pub fn target_barrel(&self, importer: &Path, source: &str) -> Option<PathBuf> {
        if !is_path_specifier(source) {
            return None;
        }
        let importer = self.resolver.absolute(importer).ok()?;
        let target = join_dir(importer.parent()?, source);
        self.barrels.contains(&target).then_some(target)
    }

    /// Rewrite one import statement found in `importer`.
    ///
    /// # Errors
    ///
    /// - [`RewriteError::UnsupportedImportShape`] for a default or namespace
    ///   import of a barrel
    /// - [`RewriteError::Resolution`] if the barrel cannot be resolved
    pub fn rewrite(&self, importer: &Path, statement: &ImportStatement) -> Result<Rewrite, RewriteError> {
        let Some(target) = self.target_barrel(importer, &statement.source) else {
            return Ok(Rewrite::untouched());
        };

        let full_imports: Vec<&str> = statement
            .specifiers
            .iter()
            .filter(|specifier| !matches!(specifier, ImportSpecifier::Named { .. }))
            .map(ImportSpecifier::kind_name)
            .collect();
        if !full_imports.is_empty() {
            return Err(RewriteError::UnsupportedImportShape {
                source_specifier: statement.source.clone(),
                importer: importer.to_path_buf(),
                kinds: full_imports.join(", "),
            });
        }

        let barrel = self.resolver.resolve(&target)?;
        let importer_dir = self
            .resolver
            .absolute(importer)?
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let mut diagnostics = Diagnostics::new();
        let mut replacements = Vec::new();

        for specifier in &statement.specifiers {
            let ImportSpecifier::Named {
                imported,
                local,
                is_type,
            } = specifier
            else {
                continue;
            };

            let Some(record) = barrel.get(imported) else {
                diagnostics.report(
                    DiagnosticKind::UnresolvedName,
                    importer,
                    format!(
                        "'{}' is not exported by barrel '{}'; dropped from the import",
                        imported, statement.source
                    ),
                );
                continue;
            };

            let source = self.import_source(&barrel, record, &importer_dir);
            debug!(name = %imported, from = %source, "rewriting barrel import");

            replacements.push(ImportStatement {
                source,
                specifiers: vec![ImportSpecifier::Named {
                    imported: record.import_name(imported).to_string(),
                    local: local.clone(),
                    is_type: *is_type,
                }],
                is_type_only: statement.is_type_only,
            });
        }

        let outcome = if replacements.is_empty() {
            RewriteOutcome::Untouched
        } else {
            RewriteOutcome::Replaced(replacements)
        };

        Ok(Rewrite {
            outcome,
            diagnostics: diagnostics.into_vec(),
        })
    }

    /// Specifier text for the module defining `record`.
    fn import_source(&self, barrel: &ResolvedBarrel, record: &ExportRecord, importer_dir: &Path) -> String {
        let segment = record.defining_path_segment.as_str();
        if !segment.is_empty() && !is_path_specifier(segment) {
            return segment.to_string();
        }

        // An empty segment is the root file, not the directory itself
        let target = if segment.is_empty() {
            match barrel.root_file_stem() {
                Some(stem) => barrel.directory.join(stem),
                None => barrel.directory.clone(),
            }
        } else {
            join_dir(&barrel.directory, segment)
        };

        match self.options.specifier_style {
            SpecifierStyle::Relative => relative_specifier(importer_dir, &target),
            SpecifierStyle::Absolute => to_slash(&target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_project;
    use tempfile::TempDir;

    fn rewriter(root: &Path, barrels: &[&str], style: SpecifierStyle) -> ImportRewriter {
        ImportRewriter::new(
            ExportGraphResolver::new(NativeFileSystem),
            barrels.iter().map(|b| root.join(b)).collect(),
            RewriteOptions {
                specifier_style: style,
            },
        )
    }

    fn replaced(rewrite: Rewrite) -> Vec<String> {
        match rewrite.outcome {
            RewriteOutcome::Replaced(statements) => {
                statements.iter().map(|s| s.to_source('\'')).collect()
            }
            RewriteOutcome::Untouched => panic!("expected a replacement"),
        }
    }

    #[test]
    fn test_direct_export_points_at_index() {
        let temp = TempDir::new().unwrap();
        let root = create_test_project(&temp, &[("src/barrel/index.ts", "export const Foo = 1;")]);
        let rewriter = rewriter(&root, &["src/barrel"], SpecifierStyle::Relative);

        let stmt = ImportStatement::new("./barrel", vec![ImportSpecifier::named("Foo", "Foo")]);
        let rewrite = rewriter.rewrite(&root.join("src/app.ts"), &stmt).unwrap();

        assert_eq!(replaced(rewrite), vec!["import { Foo } from './barrel/index';"]);
    }

    #[test]
    fn test_alias_imports_original_name() {
        let temp = TempDir::new().unwrap();
        let root = create_test_project(
            &temp,
            &[
                ("src/barrel/index.ts", "export { Bar as Baz } from './impl';"),
                ("src/barrel/impl.ts", "export const Bar = 1;"),
            ],
        );
        let rewriter = rewriter(&root, &["src/barrel"], SpecifierStyle::Relative);

        let stmt = ImportStatement::new("../barrel", vec![ImportSpecifier::named("Baz", "Baz")]);
        let rewrite = rewriter.rewrite(&root.join("src/pages/home.ts"), &stmt).unwrap();

        assert_eq!(replaced(rewrite), vec!["import { Bar as Baz } from '../barrel/impl';"]);
    }

    #[test]
    fn test_absolute_style_prints_absolute_paths() {
        let temp = TempDir::new().unwrap();
        let root = create_test_project(
            &temp,
            &[
                ("src/barrel/index.ts", "export * from './sub';"),
                ("src/barrel/sub/index.ts", "export const Qux = 2;"),
            ],
        );
        let rewriter = rewriter(&root, &["src/barrel"], SpecifierStyle::Absolute);

        let stmt = ImportStatement::new("./barrel", vec![ImportSpecifier::named("Qux", "Q")]);
        let rewrite = rewriter.rewrite(&root.join("src/app.ts"), &stmt).unwrap();

        let expected = format!(
            "import {{ Qux as Q }} from '{}';",
            to_slash(&root.join("src/barrel/sub"))
        );
        assert_eq!(replaced(rewrite), vec![expected]);
    }

    #[test]
    fn test_unknown_names_are_dropped() {
        let temp = TempDir::new().unwrap();
        let root = create_test_project(&temp, &[("src/barrel/index.ts", "export const Foo = 1;")]);
        let rewriter = rewriter(&root, &["src/barrel"], SpecifierStyle::Relative);

        let stmt = ImportStatement::new(
            "./barrel",
            vec![
                ImportSpecifier::named("Missing", "Missing"),
                ImportSpecifier::named("Foo", "Foo"),
            ],
        );
        let rewrite = rewriter.rewrite(&root.join("src/app.ts"), &stmt).unwrap();

        assert_eq!(rewrite.diagnostics.len(), 1);
        assert_eq!(rewrite.diagnostics[0].kind, DiagnosticKind::UnresolvedName);
        assert_eq!(replaced(rewrite), vec!["import { Foo } from './barrel/index';"]);
    }

    #[test]
    fn test_nothing_resolved_leaves_statement() {
        let temp = TempDir::new().unwrap();
        let root = create_test_project(&temp, &[("src/barrel/index.ts", "export const Foo = 1;")]);
        let rewriter = rewriter(&root, &["src/barrel"], SpecifierStyle::Relative);

        let stmt = ImportStatement::new("./barrel", vec![ImportSpecifier::named("Nope", "Nope")]);
        let rewrite = rewriter.rewrite(&root.join("src/app.ts"), &stmt).unwrap();

        assert_eq!(rewrite.outcome, RewriteOutcome::Untouched);
    }

    #[test]
    fn test_non_barrel_import_passes_through() {
        let temp = TempDir::new().unwrap();
        let root = create_test_project(
            &temp,
            &[
                ("src/barrel/index.ts", "export const Foo = 1;"),
                ("src/barrel/inner/index.ts", "export const Bar = 1;"),
            ],
        );
        let rewriter = rewriter(&root, &["src/barrel"], SpecifierStyle::Relative);
        let importer = root.join("src/app.ts");

        for source in ["./barrel/inner", "react", "./other"] {
            let stmt = ImportStatement::new(source, vec![ImportSpecifier::named("Foo", "Foo")]);
            let rewrite = rewriter.rewrite(&importer, &stmt).unwrap();
            assert_eq!(rewrite.outcome, RewriteOutcome::Untouched, "{}", source);
        }
        assert!(rewriter.resolver().cache().is_empty());
    }

    #[test]
    fn test_namespace_import_is_rejected() {
        let temp = TempDir::new().unwrap();
        let root = create_test_project(&temp, &[("src/barrel/index.ts", "export const Foo = 1;")]);
        let rewriter = rewriter(&root, &["src/barrel"], SpecifierStyle::Relative);

        let stmt = ImportStatement::new(
            "./barrel",
            vec![ImportSpecifier::Namespace {
                local: "All".to_string(),
            }],
        );
        let err = rewriter.rewrite(&root.join("src/app.ts"), &stmt).unwrap_err();

        match err {
            RewriteError::UnsupportedImportShape { kinds, .. } => assert_eq!(kinds, "namespace"),
            other => panic!("expected unsupported shape, got {:?}", other),
        }
    }

    #[test]
    fn test_type_markers_survive() {
        let temp = TempDir::new().unwrap();
        let root = create_test_project(
            &temp,
            &[
                ("src/barrel/index.ts", "export * from './types';"),
                ("src/barrel/types.ts", "export type Id = string;\nexport interface User {}"),
            ],
        );
        let rewriter = rewriter(&root, &["src/barrel"], SpecifierStyle::Relative);
        let importer = root.join("src/app.ts");

        let mut type_only = ImportStatement::new("./barrel", vec![ImportSpecifier::named("Id", "Id")]);
        type_only.is_type_only = true;
        let inline = ImportStatement::new(
            "./barrel",
            vec![ImportSpecifier::Named {
                imported: "User".to_string(),
                local: "User".to_string(),
                is_type: true,
            }],
        );

        assert_eq!(
            replaced(rewriter.rewrite(&importer, &type_only).unwrap()),
            vec!["import type { Id } from './barrel/types';"]
        );
        assert_eq!(
            replaced(rewriter.rewrite(&importer, &inline).unwrap()),
            vec!["import { type User } from './barrel/types';"]
        );
    }

    #[test]
    fn test_print_non_identifier_names_and_quotes() {
        let stmt = ImportStatement::new(
            "./it's",
            vec![ImportSpecifier::named("kebab-name", "kebabName")],
        );

        assert_eq!(
            stmt.to_source('"'),
            "import { \"kebab-name\" as kebabName } from \"./it's\";"
        );
        assert_eq!(
            stmt.to_source('\''),
            "import { 'kebab-name' as kebabName } from './it\\'s';"
        );
    }
}
