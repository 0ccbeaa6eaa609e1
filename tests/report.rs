//! Integration tests for the text stages of the pipeline.
//!
//! These run the public API on synthetic page text shaped like a real
//! monthly report, so they need neither a PDF file nor the pdfium library.

use prego_report::pipeline::{clean, reshape};
use prego_report::{parse_report_pages, ReportConfig, ReportError, ReportPages};

const COVER_PAGE: &str = "Prego Café\nMånadsrapport\n01.03-31.03\nKassa 1\n";

const SALES_PAGE: &str = "Försäljning efter produkt\n\
Namn Sålt Returnerat Exklusive moms Inklusive moms\n\
PANINI, SKINKA OST 12 1\u{a0}071 1\u{a0}200\n\
KAFFE, BRYGG STOR 40 714 800\n\
TRIUMF, GLASS PIGGELIN 9 120 135\n\
SÖTA, KANELBULLE 25 558 625\n\
SMOOTHIE MANGO 6 268 300\n\
Totalt 92 2\u{a0}731 3\u{a0}060\n\
Varav moms 329\n";

fn pages() -> ReportPages {
    ReportPages::from_texts([COVER_PAGE, SALES_PAGE])
}

#[test]
fn full_report_to_table() {
    let table = parse_report_pages(&pages(), &ReportConfig::default()).unwrap();

    assert_eq!(
        table.columns(),
        &["Namn", "Sålt", "Exklusive-moms", "Inklusive-moms", "Month"]
    );
    assert_eq!(
        table.column("Namn").unwrap(),
        vec![
            "PANINI,SKINKA OST",
            "KAFFE,BRYGG STOR",
            "TRIUMF,GLASS PIGGELIN",
            "SÖTA,KANELBULLE",
            "SMOOTHIE MANGO",
        ]
    );
    assert_eq!(table.records()[0], vec!["PANINI,SKINKA OST", "12", "1071", "1200", "March"]);
    assert!(table.column("Month").unwrap().iter().all(|m| *m == "March"));
}

#[test]
fn footer_rows_are_excluded() {
    let cleaned = clean::clean_sales_text(SALES_PAGE);
    let reshaped_len = reshape::tokenize(&cleaned).len();
    let table = parse_report_pages(&pages(), &ReportConfig::default()).unwrap();

    // header row + records == reshaped rows - footer
    assert_eq!(table.len() + 1, reshaped_len - 3);
    let names = table.column("Namn").unwrap();
    assert!(!names.iter().any(|n| n.starts_with("Totalt") || n.starts_with("Varav")));
}

#[test]
fn every_record_matches_header_width() {
    let table = parse_report_pages(&pages(), &ReportConfig::default()).unwrap();
    for record in table.records() {
        assert_eq!(record.len(), table.columns().len(), "{record:?}");
    }
}

#[test]
fn csv_output_of_full_report() {
    let table = parse_report_pages(&pages(), &ReportConfig::default()).unwrap();
    let csv = table.to_csv_string().unwrap();
    let mut lines = csv.lines();

    assert_eq!(lines.next(), Some("Namn,Sålt,Exklusive-moms,Inklusive-moms,Month"));
    assert_eq!(lines.next(), Some("\"PANINI,SKINKA OST\",12,1071,1200,March"));
    assert_eq!(lines.last(), Some("SMOOTHIE MANGO,6,268,300,March"));
}

#[test]
fn saved_csv_round_trips_through_csv_reader() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("march.csv");
    let table = parse_report_pages(&pages(), &ReportConfig::default()).unwrap();
    table.save_csv(&path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.len(), 5);
    assert_eq!(&headers[4], "Month");
    assert_eq!(reader.records().count(), table.len());
}

#[test]
fn custom_month_column_name() {
    let config = ReportConfig::builder().month_column("Månad").build().unwrap();
    let table = parse_report_pages(&pages(), &config).unwrap();
    assert_eq!(table.columns().last().map(String::as_str), Some("Månad"));
}

#[test]
fn missing_sales_page() {
    let pages = ReportPages::from_texts([COVER_PAGE]);
    let err = parse_report_pages(&pages, &ReportConfig::default()).unwrap_err();
    assert!(matches!(err, ReportError::PageOutOfRange { page: 1, total: 1 }));
}

#[test]
fn cover_page_without_date_line() {
    let pages = ReportPages::from_texts(["Prego Café\nMånadsrapport", SALES_PAGE]);
    let err = parse_report_pages(&pages, &ReportConfig::default()).unwrap_err();
    assert!(matches!(err, ReportError::DateLineMissing { index: 2, .. }));
}

#[test]
fn unknown_month_in_cover_page() {
    let pages = ReportPages::from_texts(["a\nb\n01.00-31.00\n", SALES_PAGE]);
    let err = parse_report_pages(&pages, &ReportConfig::default()).unwrap_err();
    assert!(matches!(err, ReportError::UnknownMonth { .. }));
}

#[test]
fn row_without_numbers_before_footer_is_rejected() {
    let sales = "Försäljning efter produkt\n\
Namn Sålt Returnerat Exklusive moms Inklusive moms\n\
PANINI, SKINKA 12 1071 1200\n\
Kampanj utan försäljning\n\
KAFFE, BRYGG 40 714 800\n\
Totalt 52 1785 2000\n\
Varav moms 215\n";
    let pages = ReportPages::from_texts([COVER_PAGE, sales]);
    let err = parse_report_pages(&pages, &ReportConfig::default()).unwrap_err();
    match err {
        ReportError::FieldCountMismatch { row, found, .. } => {
            assert_eq!(row, 2);
            assert_eq!(found, 1);
        }
        other => panic!("expected FieldCountMismatch, got {other:?}"),
    }
}

#[test]
fn header_without_returnerat_is_rejected() {
    let sales = "Namn Sålt Exklusive-moms Inklusive-moms\nA 1 2 3\nf\nf\nf\n";
    let pages = ReportPages::from_texts([COVER_PAGE, sales]);
    let err = parse_report_pages(&pages, &ReportConfig::default()).unwrap_err();
    assert!(matches!(err, ReportError::MissingHeaderColumn { .. }));
}

#[test]
fn missing_pdf_is_reported_before_pdfium_is_needed() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.csv");
    let err = prego_report::extract_report_to_file(
        dir.path().join("missing.pdf"),
        &out,
        &ReportConfig::default(),
    )
    .unwrap_err();

    assert!(matches!(err, ReportError::FileNotFound { .. }));
    assert!(!out.exists(), "no output should be written on failure");
}
