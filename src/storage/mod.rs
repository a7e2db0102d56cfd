//! Upload storage
//!
//! Archives each original uploaded PDF on the local disk, one directory
//! per history entry, so a stored summary can always be traced back to its
//! source document.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

/// Local upload archive
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the archive directory if it does not exist yet
    pub async fn ensure_root(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root).await
    }

    /// Store an uploaded file under `{root}/{entry_id}/{file_name}`
    pub async fn save(&self, entry_id: &str, file_name: &str, data: &[u8]) -> io::Result<PathBuf> {
        let dir = self.root.join(entry_id);
        fs::create_dir_all(&dir).await?;

        let path = dir.join(sanitize_file_name(file_name));
        fs::write(&path, data).await?;

        Ok(path)
    }
}

/// Reduce a client-supplied filename to a safe single path component
fn sanitize_file_name(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name)
        .replace(['\0', ':'], "_");

    let trimmed = base.trim().trim_matches('.');
    if trimmed.is_empty() {
        "upload.pdf".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_path_components() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\docs\\report.pdf"), "report.pdf");
        assert_eq!(sanitize_file_name("report.pdf"), "report.pdf");
    }

    #[test]
    fn empty_names_get_a_fallback() {
        assert_eq!(sanitize_file_name(""), "upload.pdf");
        assert_eq!(sanitize_file_name("..."), "upload.pdf");
    }

    #[tokio::test]
    async fn saves_under_entry_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());
        store.ensure_root().await.unwrap();

        let path = store.save("entry-1", "doc.pdf", b"%PDF-1.4").await.unwrap();
        assert_eq!(path, dir.path().join("entry-1").join("doc.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4");
    }
}
