//! Export graph resolver.
//!
//! Walks the re-export statements of a barrel directory's index file,
//! following `export *` chains into nested files and directories, and
//! flattens them into one [`ExportMap`]: public name → where that name is
//! really defined, relative to the barrel root.
//!
//! Each top-level resolution owns its accumulator, so two barrels never share
//! a map. Only top-level results are memoized; nested modules reached through
//! a chain are re-walked per barrel because their segments depend on the
//! prefix they were reached with.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use path_clean::PathClean;
use tracing::debug;

use crate::cache::ExportGraphCache;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::error::ResolveError;
use crate::exports::{ExportMap, ExportRecord, ResolvedBarrel};
use crate::parser::{parse_declarations, DeclarationNode, ReExportSpecifier};
use crate::paths::{is_path_specifier, join_dir, join_specifier, resolve_module_file};
use crate::runtime::{FileSystem, NativeFileSystem};

/// Name ESM never forwards through `export *`.
const DEFAULT_EXPORT: &str = "default";

/// Resolves barrel directories into flattened export maps.
///
/// ```no_run
/// use std::path::Path;
/// use unbarrel::{ExportGraphResolver, NativeFileSystem};
///
/// let resolver = ExportGraphResolver::new(NativeFileSystem);
/// let barrel = resolver.resolve(Path::new("/app/src/components"))?;
/// for (name, record) in &barrel.exports {
///     println!("{name} -> {}", record.defining_path_segment);
/// }
/// # Ok::<(), unbarrel::ResolveError>(())
/// ```
#[derive(Debug)]
pub struct ExportGraphResolver<F: FileSystem = NativeFileSystem> {
    fs: F,
    cache: ExportGraphCache,
}

impl<F: FileSystem> ExportGraphResolver<F> {
    pub fn new(fs: F) -> Self {
        Self::with_cache(fs, ExportGraphCache::new())
    }

    /// Create a resolver around an existing cache.
    pub fn with_cache(fs: F, cache: ExportGraphCache) -> Self {
        Self { fs, cache }
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn cache(&self) -> &ExportGraphCache {
        &self.cache
    }

    /// Resolve a barrel directory, memoized by its absolute path.
    ///
    /// Relative paths are taken relative to the filesystem's working
    /// directory.
    ///
    /// # Errors
    ///
    /// Fails if any module on the re-export graph cannot be located, read or
    /// parsed. Failures are not cached.
    pub fn resolve(&self, barrel_dir: &Path) -> Result<Arc<ResolvedBarrel>, ResolveError> {
        let dir = self.absolute(barrel_dir)?;
        self.cache
            .get_or_try_insert(&dir, || self.resolve_uncached(&dir))
    }

    /// Resolve a barrel directory without consulting or filling the cache.
    pub fn resolve_uncached(&self, barrel_dir: &Path) -> Result<ResolvedBarrel, ResolveError> {
        let dir = self.absolute(barrel_dir)?;
        debug!(dir = %dir.display(), "resolving barrel");

        let mut walk = Walk::new(&self.fs);
        let root_file = walk.visit(&dir, "", false)?;

        debug!(
            dir = %dir.display(),
            exports = walk.exports.len(),
            diagnostics = walk.diagnostics.len(),
            "resolved barrel"
        );

        Ok(ResolvedBarrel {
            directory: dir,
            root_file,
            exports: walk.exports,
            diagnostics: walk.diagnostics.into_vec(),
        })
    }

    /// Make `path` absolute against the working directory and normalize it.
    pub fn absolute(&self, path: &Path) -> Result<PathBuf, ResolveError> {
        if path.is_absolute() {
            return Ok(path.clean());
        }
        let cwd = self.fs.get_cwd().map_err(|source| ResolveError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(cwd.join(path).clean())
    }
}

/// Accumulator for one top-level resolution.
struct Walk<'a> {
    fs: &'a dyn FileSystem,
    exports: ExportMap,
    diagnostics: Diagnostics,
    /// Files on the current re-export chain
    stack: Vec<PathBuf>,
}

impl<'a> Walk<'a> {
    fn new(fs: &'a dyn FileSystem) -> Self {
        Self {
            fs,
            exports: ExportMap::new(),
            diagnostics: Diagnostics::new(),
            stack: Vec::new(),
        }
    }

    /// Walk the module `path` refers to, whose own segment is `segment`.
    ///
    /// Returns the concrete file that was walked.
    fn visit(
        &mut self,
        path: &Path,
        segment: &str,
        via_wildcard: bool,
    ) -> Result<PathBuf, ResolveError> {
        let file = resolve_module_file(self.fs, path)?;

        if self.stack.contains(&file) {
            self.diagnostics.report(
                DiagnosticKind::CyclicReExport,
                &file,
                format!("'{}' re-enters its own wildcard chain; skipped", file.display()),
            );
            return Ok(file);
        }

        let source = self
            .fs
            .read_to_string(&file)
            .map_err(|source| ResolveError::Read {
                path: file.clone(),
                source,
            })?;
        let tree = parse_declarations(&file, &source)?;

        // Specifiers inside the file are relative to its directory, which is
        // the referenced path itself only when that path was a directory.
        let base_dir = file.parent().map(Path::to_path_buf).unwrap_or_default();
        let base_segment = if base_dir == path {
            segment.to_string()
        } else {
            join_specifier(segment, "..")
        };

        debug!(file = %file.display(), segment, "walking barrel module");
        self.stack.push(file.clone());

        for node in tree.nodes {
            match node {
                DeclarationNode::WildcardReExport { source } => {
                    if !is_path_specifier(&source) {
                        self.diagnostics.report(
                            DiagnosticKind::UnsupportedReExport,
                            &file,
                            format!("export * from package '{}' cannot be enumerated; skipped", source),
                        );
                        continue;
                    }
                    let target = join_dir(&base_dir, &source);
                    let target_segment = join_specifier(&base_segment, &source);
                    self.visit(&target, &target_segment, true)?;
                }
                DeclarationNode::NamespaceReExport { source, exported } => {
                    self.diagnostics.report(
                        DiagnosticKind::UnsupportedReExport,
                        &file,
                        format!("export * as {} from '{}' is not resolved; skipped", exported, source),
                    );
                }
                DeclarationNode::NamedReExport {
                    source: None,
                    specifiers,
                } => {
                    for ReExportSpecifier { local, exported } in specifiers {
                        if tree.imported_bindings.contains(&local) {
                            self.diagnostics.report(
                                DiagnosticKind::ImportedBindingReExport,
                                &file,
                                format!("'{}' re-exports an imported binding; skipped", exported),
                            );
                            continue;
                        }
                        self.record(&file, exported, ExportRecord::new(segment), via_wildcard);
                    }
                }
                DeclarationNode::NamedReExport {
                    source: Some(source),
                    specifiers,
                } => {
                    // Package re-exports keep their specifier verbatim
                    let target_segment = if is_path_specifier(&source) {
                        join_specifier(&base_segment, &source)
                    } else {
                        source.clone()
                    };
                    for specifier in specifiers {
                        let record = if specifier.is_aliased() {
                            ExportRecord::aliased(target_segment.clone(), specifier.local)
                        } else {
                            ExportRecord::new(target_segment.clone())
                        };
                        self.record(&file, specifier.exported, record, via_wildcard);
                    }
                }
                DeclarationNode::Declaration { names, malformed } => {
                    for description in malformed {
                        self.diagnostics
                            .report(DiagnosticKind::MalformedDeclaration, &file, description);
                    }
                    for name in names {
                        self.record(&file, name, ExportRecord::new(segment), via_wildcard);
                    }
                }
                DeclarationNode::DefaultExport => {
                    self.record(
                        &file,
                        DEFAULT_EXPORT.to_string(),
                        ExportRecord::new(segment),
                        via_wildcard,
                    );
                }
                DeclarationNode::Other => {}
            }
        }

        self.stack.pop();
        Ok(file)
    }

    /// Insert a record; later records win.
    fn record(&mut self, file: &Path, name: String, record: ExportRecord, via_wildcard: bool) {
        if via_wildcard && name == DEFAULT_EXPORT {
            return;
        }

        if let Some(previous) = self.exports.get(&name) {
            if *previous != record {
                let message = format!(
                    "'{}' from '{}' replaces the earlier export from '{}'",
                    name, record.defining_path_segment, previous.defining_path_segment
                );
                self.diagnostics
                    .report(DiagnosticKind::ShadowedExport, file, message);
            }
        }

        self.exports.insert(name, record);
    }
}
