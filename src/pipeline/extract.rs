//! PDF text extraction: read the text layer of every page via pdfium.
//!
//! The sales report is generated, not scanned, so its text layer is reliable
//! enough to parse directly. Each page's text comes back as one string with
//! the engine's `\r\n` line breaks normalised to `\n`; everything downstream
//! splits on `\n` and counts lines positionally.
//!
//! ## Binding pdfium
//!
//! pdfium is a shared library loaded at runtime. [`bind_pdfium`] looks for it
//! in this order and uses the first copy that loads:
//!
//! 1. `PDFIUM_LIB_PATH`: an explicit library file; failure here is fatal
//! 2. the directory holding the running executable
//! 3. the current working directory
//! 4. the system library search path

use crate::error::ReportError;
use crate::pipeline::input;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming an explicit pdfium library file.
pub const PDFIUM_LIB_PATH_ENV: &str = "PDFIUM_LIB_PATH";

/// The extracted text of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// Zero-based page index in document order.
    pub index: usize,
    /// Plain text with `\n` line breaks.
    pub text: String,
}

impl PageText {
    /// Page identifier in the `"Page N"` form (zero-based `N`).
    pub fn label(&self) -> String {
        format!("Page {}", self.index)
    }
}

/// Every page of a document, ordered by page number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportPages {
    pages: Vec<PageText>,
}

impl ReportPages {
    /// Build from page texts in document order.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pages = texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| PageText {
                index,
                text: text.into(),
            })
            .collect();
        Self { pages }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageText> {
        self.pages.iter()
    }

    /// Text of the page at `index`, or [`ReportError::PageOutOfRange`].
    pub fn page(&self, index: usize) -> Result<&str, ReportError> {
        self.pages
            .get(index)
            .map(|p| p.text.as_str())
            .ok_or(ReportError::PageOutOfRange {
                page: index,
                total: self.pages.len(),
            })
    }

    /// Text of the page whose label is `label` (e.g. `"Page 1"`).
    pub fn by_label(&self, label: &str) -> Option<&str> {
        self.pages
            .iter()
            .find(|p| p.label() == label)
            .map(|p| p.text.as_str())
    }
}

/// Extract the text of every page of the PDF at `path`.
///
/// The document (and with it the file handle) is dropped before this
/// function returns.
pub fn extract_pages(path: &Path, password: Option<&str>) -> Result<ReportPages, ReportError> {
    let path = input::resolve_local(path)?;
    let pdfium = bind_pdfium()?;

    let document = pdfium
        .load_pdf_from_file(&path, password)
        .map_err(|e| classify_load_error(&path, password, &e))?;

    let pages = document.pages();
    let total_pages = pages.len() as usize;
    info!("PDF loaded: {} pages", total_pages);

    if total_pages == 0 {
        return Err(ReportError::EmptyDocument { path });
    }

    let mut texts = Vec::with_capacity(total_pages);
    for (idx, page) in pages.iter().enumerate() {
        let text = page
            .text()
            .map_err(|e| ReportError::TextExtractionFailed {
                page: idx,
                detail: format!("{:?}", e),
            })?
            .all();
        let text = normalise_line_endings(&text);
        debug!("Extracted page {} → {} chars", idx, text.chars().count());
        texts.push(text);
    }

    Ok(ReportPages::from_texts(texts))
}

/// Map a pdfium load failure to the matching [`ReportError`].
fn classify_load_error(path: &Path, password: Option<&str>, e: &PdfiumError) -> ReportError {
    let err_str = format!("{:?}", e);
    if err_str.contains("Password") || err_str.contains("password") {
        if password.is_some() {
            ReportError::WrongPassword {
                path: path.to_path_buf(),
            }
        } else {
            ReportError::PasswordRequired {
                path: path.to_path_buf(),
            }
        }
    } else {
        ReportError::CorruptPdf {
            path: path.to_path_buf(),
            detail: err_str,
        }
    }
}

/// Bind to the first pdfium library that loads.
pub fn bind_pdfium() -> Result<Pdfium, ReportError> {
    if let Ok(path) = std::env::var(PDFIUM_LIB_PATH_ENV) {
        let bindings = Pdfium::bind_to_library(&path).map_err(|e| {
            ReportError::PdfiumBindingFailed(format!("{PDFIUM_LIB_PATH_ENV}={path}: {e:?}"))
        })?;
        debug!("Bound pdfium from {PDFIUM_LIB_PATH_ENV}={path}");
        return Ok(Pdfium::new(bindings));
    }

    for candidate in library_candidates() {
        if let Ok(bindings) = Pdfium::bind_to_library(&candidate) {
            debug!("Bound pdfium from {}", candidate.display());
            return Ok(Pdfium::new(bindings));
        }
    }

    let bindings = Pdfium::bind_to_system_library().map_err(|e| {
        ReportError::PdfiumBindingFailed(format!(
            "{} not found ({:?})",
            Pdfium::pdfium_platform_library_name().to_string_lossy(),
            e
        ))
    })?;
    debug!("Bound pdfium from the system library path");
    Ok(Pdfium::new(bindings))
}

fn library_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(Pdfium::pdfium_platform_library_name_at_path(&dir));
    }
    candidates.push(Pdfium::pdfium_platform_library_name_at_path("./"));
    candidates
}

/// Convert CRLF and lone CR line breaks to LF.
pub fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_zero_based() {
        let pages = ReportPages::from_texts(["cover", "sales"]);
        let labels: Vec<String> = pages.iter().map(PageText::label).collect();
        assert_eq!(labels, vec!["Page 0", "Page 1"]);
    }

    #[test]
    fn lookup_by_label_and_index_agree() {
        let pages = ReportPages::from_texts(["cover", "sales"]);
        assert_eq!(pages.by_label("Page 1"), Some("sales"));
        assert_eq!(pages.page(1).unwrap(), "sales");
        assert_eq!(pages.by_label("Page 2"), None);
    }

    #[test]
    fn missing_page_is_out_of_range() {
        let pages = ReportPages::from_texts(["cover"]);
        match pages.page(1).unwrap_err() {
            ReportError::PageOutOfRange { page, total } => {
                assert_eq!(page, 1);
                assert_eq!(total, 1);
            }
            other => panic!("expected PageOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn line_endings_are_normalised() {
        assert_eq!(normalise_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
    }

    #[test]
    fn extract_rejects_missing_file_before_binding() {
        let err = extract_pages(Path::new("/definitely/not/here.pdf"), None).unwrap_err();
        assert!(matches!(err, ReportError::FileNotFound { .. }));
    }
}
