//! Source file collection for `sift lint`.

use std::path::{Path, PathBuf};

/// Extensions of files the linter understands.
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "mjs", "cjs", "mts", "cts"];

/// Directory names never descended into.
const SKIPPED_DIRS: &[&str] = &["node_modules", "dist"];

/// Collect all source files from the given paths (files or directories).
///
/// Explicitly named files are kept only if their extension is supported.
/// Results are sorted and deduplicated.
pub fn collect_source_files(paths: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path_str in paths {
        let path = Path::new(path_str);
        if path.is_file() {
            if is_source_file(path) {
                files.push(path.to_path_buf());
            }
        } else if path.is_dir() {
            collect_in_dir(path, &mut files)?;
        } else {
            anyhow::bail!("path not found: {}", path_str);
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

fn collect_in_dir(dir: &Path, files: &mut Vec<PathBuf>) -> anyhow::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            let name = entry.file_name();
            let name_str = name.to_string_lossy();
            if name_str.starts_with('.') || SKIPPED_DIRS.contains(&name_str.as_ref()) {
                continue;
            }
            collect_in_dir(&path, files)?;
        } else if is_source_file(&path) {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_source_file() {
        assert!(is_source_file(Path::new("a.ts")));
        assert!(is_source_file(Path::new("dir/b.mjs")));
        assert!(is_source_file(Path::new("c.cts")));
        assert!(!is_source_file(Path::new("d.rs")));
        assert!(!is_source_file(Path::new("Makefile")));
    }

    #[test]
    fn test_collect_skips_hidden_and_vendor_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("src/nested")).unwrap();
        std::fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::create_dir_all(root.join("dist")).unwrap();
        std::fs::write(root.join("src/a.ts"), "").unwrap();
        std::fs::write(root.join("src/nested/b.jsx"), "").unwrap();
        std::fs::write(root.join("src/readme.md"), "").unwrap();
        std::fs::write(root.join("node_modules/pkg/index.js"), "").unwrap();
        std::fs::write(root.join(".git/hook.js"), "").unwrap();
        std::fs::write(root.join("dist/out.js"), "").unwrap();

        let files = collect_source_files(&[root.display().to_string()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.ts", "b.jsx"]);
    }

    #[test]
    fn test_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.ts").display().to_string();
        assert!(collect_source_files(&[missing]).is_err());
    }
}
