//! Pipeline stages for report-to-CSV conversion.
//!
//! Each submodule implements exactly one transformation step, and only
//! [`extract`] touches the PDF. Everything after it works on plain strings,
//! so the layout rules can be tested without a PDF engine.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ extract ──▶ month ─────────────────┐
//! (path)    (pdfium)    (page 0, line 2)       ▼
//!                   └─▶ clean ──▶ reshape ──▶ SalesTable
//!                       (page 1)  (rows)      (+ Month)
//! ```
//!
//! 1. [`input`]  : validate the user-supplied path is a readable PDF
//! 2. [`extract`]: read the text layer of every page
//! 3. [`month`]  : resolve the report month from the date range
//! 4. [`clean`]  : ordered literal substitutions on the sales page
//! 5. [`reshape`]: token-rows, header fix, name merge, footer trim

pub mod clean;
pub mod extract;
pub mod input;
pub mod month;
pub mod reshape;
