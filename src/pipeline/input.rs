//! Input validation: make sure the user-supplied path is a readable PDF.
//!
//! pdfium reports a missing file, an unreadable file and a non-PDF file with
//! the same opaque load error. Checking existence, permissions and the `%PDF`
//! magic bytes up front turns those into distinct, actionable errors, and it
//! does so before the pdfium library is even bound.

use crate::error::ReportError;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Magic bytes every PDF file starts with.
const PDF_MAGIC: &[u8; 4] = b"%PDF";

/// Validate a local file path, checking existence, read permission and PDF
/// magic bytes.
pub fn resolve_local(path: impl AsRef<Path>) -> Result<PathBuf, ReportError> {
    let path = path.as_ref().to_path_buf();

    if !path.is_file() {
        return Err(ReportError::FileNotFound { path });
    }

    match std::fs::File::open(&path) {
        Ok(mut f) => {
            let mut magic = [0u8; 4];
            if f.read_exact(&mut magic).is_ok() && &magic != PDF_MAGIC {
                return Err(ReportError::NotAPdf { path, magic });
            }
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Err(ReportError::PermissionDenied { path });
        }
        Err(_) => {
            return Err(ReportError::FileNotFound { path });
        }
    }

    debug!("Resolved local PDF: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_not_found() {
        let err = resolve_local("/definitely/not/a/real/report.pdf").unwrap_err();
        assert!(matches!(err, ReportError::FileNotFound { .. }));
    }

    #[test]
    fn directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_local(dir.path()).unwrap_err();
        assert!(matches!(err, ReportError::FileNotFound { .. }));
    }

    #[test]
    fn wrong_magic_is_rejected() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all("Namn,Sålt\n".as_bytes()).unwrap();

        match resolve_local(f.path()).unwrap_err() {
            ReportError::NotAPdf { magic, .. } => assert_eq!(&magic, b"Namn"),
            other => panic!("expected NotAPdf, got {other:?}"),
        }
    }

    #[test]
    fn pdf_magic_is_accepted() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n").unwrap();

        let path = resolve_local(f.path()).unwrap();
        assert_eq!(path, f.path());
    }
}
