//! Directory mirroring: one directory per (category, year).

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::url_model::sanitize_component;

/// Filesystem failure creating a mirror directory. Aborts the enclosing
/// year (nothing can be written without a destination) but not the run.
#[derive(Debug, Error)]
#[error("failed to create mirror directory {}: {}", path.display(), source)]
pub struct MirrorError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Builds `<output_root>/<category>/<year>` and ensures every intermediate
/// directory exists. Idempotent: an existing directory is success.
///
/// Category and year come from link text and are sanitized into single path
/// components first, so stray separators in page text cannot escape the
/// mirror root.
pub fn ensure_dir(output_root: &Path, category: &str, year: &str) -> Result<PathBuf, MirrorError> {
    let dir = output_root.join(component(category)).join(component(year));
    std::fs::create_dir_all(&dir).map_err(|source| MirrorError {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

fn component(name: &str) -> String {
    let sanitized = sanitize_component(name);
    if sanitized.is_empty() {
        // Empty link text must not collapse a level of the hierarchy.
        "_".to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_nested_directories() {
        let root = tempdir().unwrap();
        let dir = ensure_dir(root.path(), "Pennies", "2020").unwrap();
        assert_eq!(dir, root.path().join("Pennies").join("2020"));
        assert!(dir.is_dir());
    }

    #[test]
    fn idempotent_on_repeat() {
        let root = tempdir().unwrap();
        let first = ensure_dir(root.path(), "Pennies", "2020").unwrap();
        let second = ensure_dir(root.path(), "Pennies", "2020").unwrap();
        assert_eq!(first, second);
        assert!(second.is_dir());
    }

    #[test]
    fn sanitizes_separators_in_link_text() {
        let root = tempdir().unwrap();
        let dir = ensure_dir(root.path(), "Half/Dollars", "2020").unwrap();
        assert_eq!(dir, root.path().join("Half_Dollars").join("2020"));
        assert!(dir.is_dir());
    }

    #[test]
    fn empty_link_text_keeps_hierarchy_depth() {
        let root = tempdir().unwrap();
        let dir = ensure_dir(root.path(), "", "2020").unwrap();
        assert_eq!(dir, root.path().join("_").join("2020"));
    }
}
