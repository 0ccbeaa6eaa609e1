//! Configuration for report extraction.
//!
//! The report layout is fixed, so every field has a default that matches the
//! monthly sales report as it is produced today. The knobs exist for the
//! places where that layout is positional (which page, which line, how many
//! footer rows) so a small shift in the report can be absorbed without a code
//! change.

use crate::error::ReportError;
use std::fmt;

/// Configuration for extracting one sales report.
///
/// Built via [`ReportConfig::builder()`] or using [`ReportConfig::default()`].
///
/// # Example
/// ```rust
/// use prego_report::ReportConfig;
///
/// let config = ReportConfig::builder()
///     .footer_rows(3)
///     .month_column("Month")
///     .build()
///     .unwrap();
/// assert_eq!(config.date_line, 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Zero-based page holding the reporting period. Default: 0.
    pub date_page: usize,

    /// Zero-based page holding the "Försäljning efter produkt" table. Default: 1.
    pub sales_page: usize,

    /// Zero-based line of `date_page` carrying the `DD.MM-DD.MM` range. Default: 2.
    pub date_line: usize,

    /// Rows dropped from the end of the reshaped table. Default: 3.
    ///
    /// The report closes the product table with summary lines that are not
    /// sales records. They are removed by position, not by content.
    pub footer_rows: usize,

    /// Name of the constant column appended to every row. Default: `"Month"`.
    pub month_column: String,

    /// PDF user password for encrypted documents.
    pub password: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            date_page: 0,
            sales_page: 1,
            date_line: 2,
            footer_rows: 3,
            month_column: "Month".to_string(),
            password: None,
        }
    }
}

impl fmt::Debug for ReportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportConfig")
            .field("date_page", &self.date_page)
            .field("sales_page", &self.sales_page)
            .field("date_line", &self.date_line)
            .field("footer_rows", &self.footer_rows)
            .field("month_column", &self.month_column)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ReportConfig {
    /// Create a new builder for `ReportConfig`.
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ReportConfig`].
#[derive(Debug)]
pub struct ReportConfigBuilder {
    config: ReportConfig,
}

impl ReportConfigBuilder {
    pub fn date_page(mut self, page: usize) -> Self {
        self.config.date_page = page;
        self
    }

    pub fn sales_page(mut self, page: usize) -> Self {
        self.config.sales_page = page;
        self
    }

    pub fn date_line(mut self, line: usize) -> Self {
        self.config.date_line = line;
        self
    }

    pub fn footer_rows(mut self, n: usize) -> Self {
        self.config.footer_rows = n;
        self
    }

    pub fn month_column(mut self, name: impl Into<String>) -> Self {
        self.config.month_column = name.into();
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ReportConfig, ReportError> {
        let c = &self.config;
        if c.month_column.trim().is_empty() {
            return Err(ReportError::InvalidConfig(
                "Month column name must not be empty".into(),
            ));
        }
        if c.date_page == c.sales_page {
            return Err(ReportError::InvalidConfig(format!(
                "Date page and sales page must differ (both are {})",
                c.date_page
            )));
        }
        Ok(self.config)
    }
}
