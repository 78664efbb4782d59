use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Schema files under `input`, sorted by path.
///
/// A file is returned as is. For a directory, every `.rs` file directly
/// inside it is returned, or every one below it when `recursive` is set.
pub(crate) fn collect(input: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(input)
        .with_context(|| format!("input path does not exist: {}", input.display()))?;

    if !metadata.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = vec![];

    for entry in WalkDir::new(input)
        .max_depth(max_depth)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("failed to walk directory {}", input.display()))?;

        if entry.file_type().is_file() && entry.path().extension().is_some_and(|ext| ext == "rs")
        {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Reads and extracts every schema file, skipping files that fail.
pub(crate) fn extract(files: &[PathBuf]) -> Vec<(PathBuf, Vec<tabula_core::Entity>)> {
    let mut extracted = vec![];

    for path in files {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                tracing::warn!("failed to read {}: {err}", path.display());
                continue;
            }
        };

        let entities = match tabula_codegen::extract(&source) {
            Ok(entities) => entities,
            Err(err) => {
                tracing::warn!("failed to process file {}: {err}", path.display());
                continue;
            }
        };

        tracing::debug!("{}: {} table(s)", path.display(), entities.len());

        for entity in &entities {
            for diagnostic in &entity.diagnostics {
                tracing::warn!(
                    "{}:{}: {} ({})",
                    path.display(),
                    diagnostic.line,
                    diagnostic.message,
                    entity.name
                );
            }
        }

        extracted.push((path.clone(), entities));
    }

    extracted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("schema.txt");
        fs::write(&file, "").unwrap();

        assert_eq!(collect(&file, false).unwrap(), vec![file]);
    }

    #[test]
    fn directory_depth_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("nested")).unwrap();
        fs::write(root.join("b.rs"), "").unwrap();
        fs::write(root.join("a.rs"), "").unwrap();
        fs::write(root.join("notes.md"), "").unwrap();
        fs::write(root.join("nested/c.rs"), "").unwrap();

        assert_eq!(
            collect(root, false).unwrap(),
            vec![root.join("a.rs"), root.join("b.rs")]
        );
        assert_eq!(
            collect(root, true).unwrap(),
            vec![root.join("a.rs"), root.join("b.rs"), root.join("nested/c.rs")]
        );
    }

    #[test]
    fn missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = collect(&dir.path().join("missing"), false).unwrap_err();
        assert!(err.to_string().starts_with("input path does not exist"));
    }
}
