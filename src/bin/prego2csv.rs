//! CLI binary for prego-report.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `ReportConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use prego_report::{extract_report, inspect, ReportConfig, SalesTable};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Print the sales table
  prego2csv report_march.pdf

  # Save as CSV
  prego2csv report_march.pdf -o march.csv

  # Records as JSON
  prego2csv --json report_march.pdf > march.json

  # Show the raw page text when a report fails to parse
  prego2csv --inspect-only report_march.pdf

REPORT LAYOUT:
  Page 1, line 3   date range, e.g. 01.03-31.03 → Month = March
  Page 2           "Försäljning efter produkt" table:
                   Namn Sålt Returnerat Exklusive moms Inklusive moms
  Last 3 rows      summary lines, dropped (see --footer-rows)

ENVIRONMENT VARIABLES:
  PDFIUM_LIB_PATH   Path to an existing libpdfium
  RUST_LOG          Override the log filter (e.g. prego_report=debug)
"#;

/// Extract the sales-by-product table from a monthly sales report PDF.
#[derive(Parser, Debug)]
#[command(
    name = "prego2csv",
    version,
    about = "Extract the sales-by-product table from a monthly sales report PDF into CSV",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the report PDF.
    input_file: PathBuf,

    /// Write CSV to this file instead of printing the table.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// PDF user password for encrypted reports.
    #[arg(long, env = "PREGO_PASSWORD")]
    password: Option<String>,

    /// Print records as JSON instead of the text table.
    #[arg(long, env = "PREGO_JSON", conflicts_with = "output")]
    json: bool,

    /// Trailing summary rows to drop from the sales table.
    #[arg(long, env = "PREGO_FOOTER_ROWS", default_value_t = 3)]
    footer_rows: usize,

    /// Zero-based line of the first page holding the date range.
    #[arg(long, env = "PREGO_DATE_LINE", default_value_t = 2)]
    date_line: usize,

    /// Print the extracted text of each page, no conversion.
    #[arg(long)]
    inspect_only: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PREGO_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors and the table itself.
    #[arg(short, long, env = "PREGO_QUIET", conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Logs go to stderr; stdout carries only the table.
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    if !cli.quiet {
        eprintln!("Input file: {}", cli.input_file.display());
        match cli.output {
            Some(ref path) => eprintln!("Output file: {}", path.display()),
            None => eprintln!("Output file not specified"),
        }
    }

    // ── Inspect-only mode ────────────────────────────────────────────────
    if cli.inspect_only {
        let pages = inspect(&cli.input_file, cli.password.as_deref())
            .context("Failed to inspect PDF")?;

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        for page in pages.iter() {
            writeln!(handle, "{}", bold(&format!("── {} ──", page.label())))
                .context("Failed to write to stdout")?;
            writeln!(handle, "{}", page.text).context("Failed to write to stdout")?;
        }
        return Ok(());
    }

    // ── Build config ─────────────────────────────────────────────────────
    let config = build_config(&cli)?;

    // ── Run conversion ───────────────────────────────────────────────────
    let table = extract_report(&cli.input_file, &config).context("Conversion failed")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    emit(&table, cli.output.as_deref(), cli.json, &mut handle)?;

    if cli.output.is_some() && !cli.quiet {
        eprintln!(
            "{}  {} records  {}",
            green("✔"),
            table.len(),
            dim(&summary(&table)),
        );
    }

    Ok(())
}

/// Write the table where the flags say: CSV to `output` (and a confirmation
/// line to `out`), otherwise JSON or the text table to `out`. Nothing touches
/// the disk when `output` is `None`.
fn emit<W: Write>(table: &SalesTable, output: Option<&Path>, json: bool, out: &mut W) -> Result<()> {
    match output {
        Some(path) => {
            table
                .save_csv(path)
                .with_context(|| format!("Failed to save CSV to {}", path.display()))?;
            writeln!(out, "Data saved to {}", path.display()).context("Failed to write to stdout")?;
        }
        None if json => {
            let json = serde_json::to_string_pretty(table).context("Failed to serialise output")?;
            writeln!(out, "{json}").context("Failed to write to stdout")?;
        }
        None => {
            writeln!(out, "{table}").context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

/// Map CLI args to `ReportConfig`.
fn build_config(cli: &Cli) -> Result<ReportConfig> {
    let mut builder = ReportConfig::builder()
        .footer_rows(cli.footer_rows)
        .date_line(cli.date_line);

    if let Some(ref password) = cli.password {
        builder = builder.password(password.clone());
    }

    builder.build().context("Invalid configuration")
}

/// One-line description of the table's shape for the completion message.
fn summary(table: &SalesTable) -> String {
    let month = table
        .records()
        .first()
        .and_then(|r| r.last())
        .map_or("-", String::as_str);
    format!("{} columns, month {}", table.columns().len(), month)
}
