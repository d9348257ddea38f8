//! Filesystem-path algebra for barrel resolution.
//!
//! Two kinds of paths flow through the resolver:
//!
//! - **Absolute filesystem paths** for the files and directories being read.
//! - **Specifier segments**: `/`-separated, `./`-prefixed paths relative to
//!   the barrel root (`./impl`, `./sub/deep`), recorded in export records and
//!   later joined onto the barrel directory by the rewriter.
//!
//! Module references in barrels are often extension-less (`./impl`) or point
//! at directories (`./sub`). [`resolve_module_file`] turns such a reference
//! into the concrete file to parse.

use std::cmp::Ordering;
use std::path::{Component, Path, PathBuf};

use path_clean::PathClean;

use crate::error::ResolveError;
use crate::runtime::FileSystem;

/// Source extensions in resolution priority order.
///
/// Used both for `index.<ext>` selection and for extension-less references.
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "mts", "cts", "js", "jsx", "mjs", "cjs"];

/// Substring that marks a directory's index file.
const INDEX_MARKER: &str = "index";

/// Whether `specifier` points into the filesystem (`./x`, `../x`, `/x`)
/// rather than at a package (`react`, `@scope/pkg`).
pub fn is_path_specifier(specifier: &str) -> bool {
    specifier.starts_with('.') || specifier.starts_with('/')
}

/// Join a specifier onto a segment prefix and normalize the result.
///
/// ```
/// use unbarrel::paths::join_specifier;
///
/// assert_eq!(join_specifier("", "./impl"), "./impl");
/// assert_eq!(join_specifier("./sub", "./deep"), "./sub/deep");
/// assert_eq!(join_specifier("./sub", "../other"), "./other");
/// assert_eq!(join_specifier("", "."), "");
/// ```
pub fn join_specifier(prefix: &str, specifier: &str) -> String {
    let joined = Path::new(prefix).join(specifier).clean();
    to_specifier(&joined)
}

/// Format a cleaned relative path as a specifier segment.
fn to_specifier(path: &Path) -> String {
    if path.is_absolute() {
        return to_slash(path);
    }

    let text = to_slash(path);
    if text.is_empty() || text == "." {
        String::new()
    } else if text == ".." || text.starts_with("../") {
        text
    } else {
        format!("./{}", text)
    }
}

/// Render a path with `/` separators regardless of platform.
pub fn to_slash(path: &Path) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut absolute = false;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => parts.push(prefix.as_os_str().to_string_lossy().into()),
            Component::RootDir => absolute = parts.is_empty(),
            Component::CurDir => parts.push(".".to_string()),
            Component::ParentDir => parts.push("..".to_string()),
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
        }
    }

    let joined = parts.join("/");
    if absolute {
        format!("/{}", joined.trim_start_matches('/'))
    } else {
        joined
    }
}

/// Join a module specifier onto an absolute directory, lexically normalized.
pub fn join_dir(dir: &Path, specifier: &str) -> PathBuf {
    dir.join(specifier).clean()
}

/// Express `target` as an import specifier relative to `from_dir`.
///
/// Both paths must be absolute and normalized.
///
/// ```
/// use unbarrel::paths::relative_specifier;
/// use std::path::Path;
///
/// let specifier = relative_specifier(Path::new("/app/src"), Path::new("/app/src/barrel/impl"));
/// assert_eq!(specifier, "./barrel/impl");
///
/// let specifier = relative_specifier(Path::new("/app/src/pages"), Path::new("/app/src/barrel/impl"));
/// assert_eq!(specifier, "../barrel/impl");
/// ```
pub fn relative_specifier(from_dir: &Path, target: &Path) -> String {
    let from: Vec<Component<'_>> = from_dir.components().collect();
    let to: Vec<Component<'_>> = target.components().collect();

    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..from.len() {
        relative.push("..");
    }
    for component in &to[common..] {
        relative.push(component.as_os_str());
    }

    let text = to_slash(&relative);
    if text.is_empty() {
        ".".to_string()
    } else if text.starts_with("..") {
        text
    } else {
        format!("./{}", text)
    }
}

/// Resolve a barrel reference to the concrete file to parse.
///
/// - A directory resolves to its index file (see [`find_index_file`]).
/// - An existing file resolves to itself.
/// - A missing path is treated as an extension-less file reference and
///   resolves to a sibling named `<base>.<ext>`.
pub fn resolve_module_file(fs: &dyn FileSystem, path: &Path) -> Result<PathBuf, ResolveError> {
    match fs.metadata(path) {
        Ok(metadata) if metadata.is_dir => {
            let entries = read_dir(fs, path)?;
            let index = find_index_file(fs, path, &entries).ok_or_else(|| {
                ResolveError::NoIndexFile {
                    dir: path.to_path_buf(),
                }
            })?;
            Ok(path.join(index))
        }
        Ok(_) => Ok(path.to_path_buf()),
        Err(err) if err.is_not_found() => resolve_extensionless(fs, path),
        Err(source) => Err(ResolveError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn read_dir(fs: &dyn FileSystem, dir: &Path) -> Result<Vec<String>, ResolveError> {
    fs.read_dir(dir).map_err(|source| ResolveError::Read {
        path: dir.to_path_buf(),
        source,
    })
}

fn resolve_extensionless(fs: &dyn FileSystem, path: &Path) -> Result<PathBuf, ResolveError> {
    let not_found = || ResolveError::NotFound {
        path: path.to_path_buf(),
    };

    let base = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(not_found)?;
    let parent = path.parent().ok_or_else(not_found)?;

    let entries = match fs.read_dir(parent) {
        Ok(entries) => entries,
        Err(err) if err.is_not_found() => return Err(not_found()),
        Err(source) => {
            return Err(ResolveError::Read {
                path: parent.to_path_buf(),
                source,
            });
        }
    };

    let mut candidates: Vec<&str> = entries
        .iter()
        .map(String::as_str)
        .filter(|entry| extension_of_sibling(entry, base).is_some())
        .filter(|entry| is_file(fs, &parent.join(entry)))
        .collect();
    candidates.sort_by(|a, b| by_extension_priority(a, b));

    candidates
        .first()
        .map(|entry| parent.join(entry))
        .ok_or_else(not_found)
}

/// Pick the index file among a directory's entries.
///
/// Deterministic regardless of directory listing order:
///
/// 1. `index.<ext>` for the first extension of [`SOURCE_EXTENSIONS`] present
/// 2. otherwise the lexicographically first file whose name contains `index`
///
/// Records reached through a directory keep the directory as their segment,
/// so a fallback pick is not reflected in rewritten imports.
pub fn find_index_file<'e>(
    fs: &dyn FileSystem,
    dir: &Path,
    entries: &'e [String],
) -> Option<&'e str> {
    let mut candidates: Vec<&'e str> = entries
        .iter()
        .map(String::as_str)
        .filter(|entry| entry.contains(INDEX_MARKER))
        .filter(|entry| is_file(fs, &dir.join(entry)))
        .collect();

    candidates.sort_by(|a, b| {
        let a_exact = extension_of_sibling(a, INDEX_MARKER).and_then(extension_rank);
        let b_exact = extension_of_sibling(b, INDEX_MARKER).and_then(extension_rank);
        match (a_exact, b_exact) {
            (Some(a_rank), Some(b_rank)) => a_rank.cmp(&b_rank),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    });

    candidates.first().copied()
}

fn is_file(fs: &dyn FileSystem, path: &Path) -> bool {
    fs.metadata(path).map(|m| m.is_file).unwrap_or(false)
}

/// The extension when `entry` is exactly `<base>.<ext>` with a word-character
/// extension, so `impl.d.ts` is never taken for `impl`.
fn extension_of_sibling<'e>(entry: &'e str, base: &str) -> Option<&'e str> {
    let ext = entry.strip_prefix(base)?.strip_prefix('.')?;
    let is_word = !ext.is_empty() && ext.chars().all(|c| c.is_alphanumeric() || c == '_');
    is_word.then_some(ext)
}

fn extension_rank(ext: &str) -> Option<usize> {
    SOURCE_EXTENSIONS.iter().position(|known| *known == ext)
}

fn by_extension_priority(a: &str, b: &str) -> Ordering {
    let rank = |name: &str| {
        name.rsplit_once('.')
            .and_then(|(_, ext)| extension_rank(ext))
            .unwrap_or(SOURCE_EXTENSIONS.len())
    };
    rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
}
