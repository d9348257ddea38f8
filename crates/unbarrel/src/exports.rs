//! Flattened export map of a barrel directory.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

use crate::diagnostics::Diagnostic;

/// Where a publicly exported name is really defined.
///
/// The exported name itself is the key of the [`ExportMap`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    /// Specifier segment relative to the barrel root (`""`, `"./impl"`,
    /// `"./sub"`). Empty means the root file itself.
    ///
    /// A directory segment names the directory, not the file picked for it.
    /// When that file is not `index.<ext>` (e.g. `sub/index.generated.ts`,
    /// chosen by the substring fallback), a bundler resolving `./sub` will not
    /// find it.
    pub defining_path_segment: String,
    /// Name at the defining module when it differs from the exported name
    /// (`export { original as exported } from ...`).
    pub original_name: Option<String>,
}

impl ExportRecord {
    pub fn new(defining_path_segment: impl Into<String>) -> Self {
        Self {
            defining_path_segment: defining_path_segment.into(),
            original_name: None,
        }
    }

    pub fn aliased(defining_path_segment: impl Into<String>, original_name: impl Into<String>) -> Self {
        Self {
            defining_path_segment: defining_path_segment.into(),
            original_name: Some(original_name.into()),
        }
    }

    /// Name to import from the defining module.
    pub fn import_name<'a>(&'a self, exported_name: &'a str) -> &'a str {
        self.original_name.as_deref().unwrap_or(exported_name)
    }
}

/// Exported name → record, in discovery order.
pub type ExportMap = IndexMap<String, ExportRecord>;

/// Fully resolved barrel directory.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBarrel {
    /// Absolute barrel directory this map was resolved for
    pub directory: PathBuf,
    /// Concrete file the directory resolved to (its index file)
    pub root_file: PathBuf,
    pub exports: ExportMap,
    /// Non-fatal findings from the walk
    pub diagnostics: Vec<Diagnostic>,
}

impl ResolvedBarrel {
    pub fn get(&self, name: &str) -> Option<&ExportRecord> {
        self.exports.get(name)
    }

    pub fn len(&self) -> usize {
        self.exports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }

    /// Root file name without its extension (`index` for `index.ts`).
    pub fn root_file_stem(&self) -> Option<&str> {
        self.root_file.file_stem().and_then(|stem| stem.to_str())
    }
}
