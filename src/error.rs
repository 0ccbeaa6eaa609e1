//! Error type for the prego-report library.
//!
//! Every failure in this pipeline is fatal: a report either converts in full
//! or not at all, so there is a single error enum and no partial-result type.
//! Variants are grouped by the stage that raises them so the CLI can print a
//! message that points at the actual cause (bad path, unreadable PDF, or a
//! report whose layout drifted from the expected one).

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the prego-report library.
#[derive(Debug, Error)]
pub enum ReportError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
You can:\n\
  • Set PDFIUM_LIB_PATH=/path/to/libpdfium to use an existing copy.\n\
  • Place the pdfium library next to the executable or in the working directory.\n\
  • Install pdfium system-wide.\n"
    )]
    PdfiumBindingFailed(String),

    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF '{path}' is corrupt: {detail}")]
    CorruptPdf { path: PathBuf, detail: String },

    /// PDF requires a password but none was provided.
    #[error("PDF '{path}' is encrypted and requires a password.\nProvide it with --password <PASSWORD>.")]
    PasswordRequired { path: PathBuf },

    /// A password was provided but it is wrong.
    #[error("Wrong password for PDF '{path}'")]
    WrongPassword { path: PathBuf },

    /// The document opened but has no pages.
    #[error("PDF '{path}' contains no pages")]
    EmptyDocument { path: PathBuf },

    /// A page the report layout relies on does not exist.
    #[error("Page {page} is out of range (document has {total} pages)")]
    PageOutOfRange { page: usize, total: usize },

    /// pdfium could not produce the text layer of a page.
    #[error("Text extraction failed for page {page}: {detail}")]
    TextExtractionFailed { page: usize, detail: String },

    // ── Report layout errors ──────────────────────────────────────────────
    /// The first page has too few lines to hold the date range.
    #[error("Date line {index} not found: first page has only {lines} lines")]
    DateLineMissing { index: usize, lines: usize },

    /// The date line carries no dash separating the two dates.
    #[error("No date range separator in line '{line}'")]
    DateSeparatorMissing { line: String },

    /// The month token is not one of "01".."12".
    #[error("Unrecognised month '{token}'")]
    UnknownMonth { token: String },

    /// The sales page produced no text at all.
    #[error("Sales page is empty")]
    EmptySalesPage,

    /// A column the header row must carry is absent.
    #[error("Header row has no '{column}' column: {header:?}")]
    MissingHeaderColumn { column: String, header: Vec<String> },

    /// Fewer rows than the footer trim needs (plus the header row).
    #[error("Sales table has {rows} rows, need more than {footer_rows} to drop the footer")]
    TooFewRows { rows: usize, footer_rows: usize },

    /// A data row does not line up with the header after name merging.
    #[error("Row {row} has {found} fields, header has {expected}: {fields:?}")]
    FieldCountMismatch {
        row: usize,
        expected: usize,
        found: usize,
        fields: Vec<String>,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or write the output CSV file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialisation failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
