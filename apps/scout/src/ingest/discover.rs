use std::path::{Path, PathBuf};

use crate::errors::AppError;

/// Recursively collects `*.pdf` paths under `root`, comparing extensions
/// case-insensitively and skipping dot-entries (`.DS_Store` and friends,
/// whether files or directories). Paths come back sorted so batch output
/// order is stable across runs. Finding nothing is an error: the caller has
/// nothing to do.
pub fn discover_documents(root: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut found = Vec::new();
    walk(root, &mut found)?;
    found.sort();
    if found.is_empty() {
        return Err(AppError::EmptyBatch(root.display().to_string()));
    }
    Ok(found)
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) -> Result<(), AppError> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if is_dot_entry(&path) {
            continue;
        }
        if path.is_dir() {
            walk(&path, found)?;
        } else if is_pdf(&path) {
            found.push(path);
        }
    }
    Ok(())
}

fn is_dot_entry(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, b"stub").unwrap();
    }

    #[test]
    fn test_finds_pdfs_recursively_and_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("batch2");
        fs::create_dir(&sub).unwrap();
        touch(&dir.path().join("b.pdf"));
        touch(&dir.path().join("a.pdf"));
        touch(&sub.join("c.pdf"));

        let found = discover_documents(dir.path()).unwrap();
        assert_eq!(
            found,
            vec![
                dir.path().join("a.pdf"),
                dir.path().join("b.pdf"),
                sub.join("c.pdf"),
            ]
        );
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("upper.PDF"));
        let found = discover_documents(dir.path()).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_skips_non_pdfs_and_dot_entries() {
        let dir = tempfile::tempdir().unwrap();
        let hidden_dir = dir.path().join(".cache");
        fs::create_dir(&hidden_dir).unwrap();
        touch(&hidden_dir.join("inside.pdf"));
        touch(&dir.path().join(".DS_Store"));
        touch(&dir.path().join(".hidden.pdf"));
        touch(&dir.path().join("notes.txt"));
        touch(&dir.path().join("real.pdf"));

        let found = discover_documents(dir.path()).unwrap();
        assert_eq!(found, vec![dir.path().join("real.pdf")]);
    }

    #[test]
    fn test_empty_tree_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = discover_documents(dir.path());
        assert!(matches!(result, Err(AppError::EmptyBatch(_))));
    }

    #[test]
    fn test_missing_root_is_an_io_error() {
        let result = discover_documents(Path::new("/definitely/not/here"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
