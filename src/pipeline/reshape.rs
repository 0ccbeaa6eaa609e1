//! Reshaping: turn cleaned sales text into header + data rows.
//!
//! ```text
//! cleaned text ──▶ token-rows ──▶ header fix ──▶ name merge ──▶ footer trim
//! ```
//!
//! Product names are free text and arrive split into several whitespace
//! tokens, while every numeric column is a single token. By report
//! convention a name always ends before the first purely numeric token, so a
//! left-to-right scan that stops at that token recovers the name.

use crate::error::ReportError;
use tracing::{debug, warn};

/// One row of string fields.
pub type Row = Vec<String>;

/// Header label with no matching value in the data rows.
pub const OMITTED_HEADER_COLUMN: &str = "Returnerat";

/// First header label of a well-formed sales page.
const EXPECTED_FIRST_COLUMN: &str = "Namn";

/// Split text into token-rows: one row per `\n`-separated line, one token per
/// whitespace-delimited word. Empty lines become empty rows.
pub fn tokenize(text: &str) -> Vec<Row> {
    text.split('\n')
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect()
}

/// `true` when `token` is non-empty and made only of ASCII digits.
pub fn is_numeric_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Split a token-row at its first numeric token.
///
/// Returns `(name_tokens, rest)`; `rest` starts with the numeric token, or is
/// empty when the row has none.
pub fn split_name_tokens(tokens: &[String]) -> (&[String], &[String]) {
    let mut i = 0;
    while i < tokens.len() {
        if is_numeric_token(&tokens[i]) {
            break;
        }
        i += 1;
    }
    tokens.split_at(i)
}

/// Join the leading name tokens of a row into one field, keeping the
/// remaining tokens unchanged.
///
/// A row that has no name tokens (it is empty, or starts with a numeric
/// token) is returned as is.
pub fn merge_name_tokens(tokens: &[String]) -> Row {
    let (name, rest) = split_name_tokens(tokens);
    if name.is_empty() {
        return tokens.to_vec();
    }
    let mut merged = Vec::with_capacity(rest.len() + 1);
    merged.push(name.join(" ").trim().to_string());
    merged.extend(rest.iter().cloned());
    merged
}

/// Remove the first occurrence of `column` from `header`.
pub fn drop_header_column(header: &mut Row, column: &str) -> Result<(), ReportError> {
    let pos = header
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| ReportError::MissingHeaderColumn {
            column: column.to_string(),
            header: header.clone(),
        })?;
    header.remove(pos);
    Ok(())
}

/// Reshape cleaned sales text into rows; the first row is the header.
///
/// The last `footer_rows` rows of the reshaped table are dropped. The count
/// includes the header row, so at least `footer_rows + 1` rows are needed.
pub fn reshape_sales_text(cleaned: &str, footer_rows: usize) -> Result<Vec<Row>, ReportError> {
    if cleaned.trim().is_empty() {
        return Err(ReportError::EmptySalesPage);
    }

    let mut token_rows = tokenize(cleaned).into_iter();
    let mut header = token_rows.next().unwrap_or_default();

    if header.first().map(String::as_str) != Some(EXPECTED_FIRST_COLUMN) {
        warn!(
            "Sales header does not start with '{}': {:?}",
            EXPECTED_FIRST_COLUMN, header
        );
    }
    drop_header_column(&mut header, OMITTED_HEADER_COLUMN)?;

    let mut rows = Vec::with_capacity(token_rows.len() + 1);
    rows.push(header);
    rows.extend(token_rows.map(|tokens| merge_name_tokens(&tokens)));

    if rows.len() <= footer_rows {
        return Err(ReportError::TooFewRows {
            rows: rows.len(),
            footer_rows,
        });
    }
    let kept = rows.len() - footer_rows;
    for dropped in &rows[kept..] {
        debug!("Dropping footer row {:?}", dropped);
    }
    rows.truncate(kept);

    Ok(rows)
}
