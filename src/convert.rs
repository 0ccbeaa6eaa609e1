//! Conversion entry points.
//!
//! [`extract_report`] runs the whole pipeline on a PDF file.
//! [`parse_report_pages`] is the same pipeline minus the PDF step, for
//! callers (and tests) that already have the page text.

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::pipeline::extract::{self, ReportPages};
use crate::pipeline::{clean, month, reshape};
use crate::table::SalesTable;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Convert a sales report PDF into a [`SalesTable`].
///
/// # Errors
/// Any failure aborts the conversion: unreadable input, a PDF pdfium cannot
/// open, or a report whose layout does not match the expected one.
pub fn extract_report(
    input: impl AsRef<Path>,
    config: &ReportConfig,
) -> Result<SalesTable, ReportError> {
    let total_start = Instant::now();
    let input = input.as_ref();
    info!("Starting extraction: {}", input.display());

    let pages = extract::extract_pages(input, config.password.as_deref())?;
    let table = parse_report_pages(&pages, config)?;

    info!(
        "Extraction complete: {} records in {}ms",
        table.len(),
        total_start.elapsed().as_millis()
    );
    Ok(table)
}

/// Convert a report and write the CSV to `output_path`.
///
/// The file is written atomically (temp file + rename), so a failed run never
/// leaves a half-written CSV behind.
pub fn extract_report_to_file(
    input: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &ReportConfig,
) -> Result<SalesTable, ReportError> {
    let table = extract_report(input, config)?;
    table.save_csv(output_path.as_ref())?;
    Ok(table)
}

/// Extract the page text of a PDF without parsing it.
///
/// Useful to see what pdfium produced when a report fails to parse.
pub fn inspect(
    input: impl AsRef<Path>,
    password: Option<&str>,
) -> Result<ReportPages, ReportError> {
    extract::extract_pages(input.as_ref(), password)
}

/// Run the text stages of the pipeline on already-extracted pages.
pub fn parse_report_pages(
    pages: &ReportPages,
    config: &ReportConfig,
) -> Result<SalesTable, ReportError> {
    let month = month::resolve_month(pages.page(config.date_page)?, config.date_line)?;
    info!("Report month: {}", month);

    let cleaned = clean::clean_sales_text(pages.page(config.sales_page)?);
    let rows = reshape::reshape_sales_text(&cleaned, config.footer_rows)?;
    debug!("Reshaped {} rows (header included)", rows.len());

    SalesTable::from_rows(rows, month, &config.month_column)
}
