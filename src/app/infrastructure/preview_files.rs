use std::fs;
use std::path::{Path, PathBuf};

use super::error::{AppError, Result};

const PREVIEW_FILE_NAME: &str = "preview.html";

/// Get the default directory for preview files.
pub fn default_preview_dir() -> PathBuf {
    std::env::temp_dir().join("formforge-preview")
}

/// Write the composed page to `dir/preview.html` and return its path.
pub fn write_preview_file(dir: &Path, html: &str) -> Result<PathBuf> {
    if dir.as_os_str().is_empty() {
        return Err(AppError::Preview("preview directory is empty".to_string()));
    }
    fs::create_dir_all(dir)?;
    let path = dir.join(PREVIEW_FILE_NAME);
    fs::write(&path, html)?;
    Ok(path)
}

/// Remove the preview file if it exists.
pub fn cleanup_preview_file(dir: &Path) {
    let _ = fs::remove_file(dir.join(PREVIEW_FILE_NAME));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_cleanup() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("previews");

        let path = write_preview_file(&target, "<p>hi</p>").unwrap();
        assert_eq!(path, target.join("preview.html"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>hi</p>");

        cleanup_preview_file(&target);
        assert!(!path.exists());
    }

    #[test]
    fn test_empty_dir_is_rejected() {
        let err = write_preview_file(Path::new(""), "x").unwrap_err();
        assert!(matches!(err, AppError::Preview(_)));
    }

    #[test]
    fn test_cleanup_missing_file_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        cleanup_preview_file(dir.path());
    }
}
