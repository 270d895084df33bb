use crate::infrastructure::error::InfrastructureError;
use std::io::Write;
use std::path::Path;

/// Writes `content` to `path` through a temporary file in the same directory,
/// so readers never observe a half-written export.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_ref())?;
    temp_file.flush()?;

    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

/// Creates `dir` (and parents) if it does not exist yet.
pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> Result<(), InfrastructureError> {
    std::fs::create_dir_all(dir.as_ref())?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_replaces_previous_export() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("dataset.json");

        atomic_write(&file_path, "{\"customers\":[]}")?;
        atomic_write(&file_path, "{\"customers\":[1]}")?;

        assert_eq!(fs::read_to_string(&file_path)?, "{\"customers\":[1]}");
        // No stray temp files left next to the export.
        assert_eq!(fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }

    #[test]
    fn test_atomic_write_fails_for_missing_directory() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("missing").join("report.md");

        let res = atomic_write(&file_path, "# Report");
        assert!(matches!(res, Err(InfrastructureError::Io(_))));
        Ok(())
    }

    #[test]
    fn test_ensure_dir_is_repeatable() -> Result<()> {
        let dir = tempdir()?;
        let nested = dir.path().join("out").join("csv");
        ensure_dir(&nested)?;
        ensure_dir(&nested)?;
        assert!(nested.is_dir());
        Ok(())
    }
}
