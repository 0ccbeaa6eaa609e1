//! # prego-report
//!
//! Extract the sales-by-product table from a monthly Prego sales report PDF
//! and turn it into CSV.
//!
//! The report is a generated two-page PDF. Page 1 states the reporting period
//! as a date range; page 2 holds the "Försäljning efter produkt" table with
//! Swedish column headers. Its text layer is almost, but not quite, a
//! whitespace-separated table: product names are split over several tokens
//! and a few layout artefacts need undoing. This crate reads the text,
//! repairs it, and emits one record per product with a `Month` column added.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input    validate path and %PDF magic
//!  ├─ 2. Extract  per-page text via pdfium
//!  ├─ 3. Month    date range on page 1 → "March"
//!  ├─ 4. Clean    ordered literal fixes on page 2
//!  ├─ 5. Reshape  token-rows, name merge, footer trim
//!  └─ 6. Table    header + records + Month → CSV / text / JSON
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use prego_report::{extract_report, ReportConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = extract_report("report_march.pdf", &ReportConfig::default())?;
//!     println!("{table}");
//!     table.save_csv(std::path::Path::new("march.csv"))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `prego2csv` binary (clap + anyhow + tracing-subscriber) |
//!
//! ## PDFium
//!
//! Text extraction goes through the pdfium shared library. Point
//! `PDFIUM_LIB_PATH` at a copy, place it next to the executable or in the
//! working directory, or install it system-wide.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod pipeline;
pub mod table;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ReportConfig, ReportConfigBuilder};
pub use convert::{extract_report, extract_report_to_file, inspect, parse_report_pages};
pub use error::ReportError;
pub use pipeline::extract::{PageText, ReportPages};
pub use table::SalesTable;
