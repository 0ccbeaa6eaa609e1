//! Cleaning: undo the layout artefacts pdfium leaves in the sales page text.
//!
//! The text layer of the "Försäljning efter produkt" page is close to
//! whitespace-separated columns, but not quite:
//!
//! - the section title sits on its own line above the header row
//! - the two VAT columns have two-word headers ("Exklusive moms")
//! - product names of a few brands are printed as `BRAND, VARIANT`, and the
//!   space after the comma would split the brand from the variant
//! - thousands in the amounts are separated by a non-breaking space
//!
//! Each artefact is fixed by one literal substitution. The list is ordered:
//! the header-row rule matches the whole original header phrase, so it has to
//! see the text before any other rule touches whitespace.

/// `(pattern, replacement)` pairs, applied top to bottom.
pub const SUBSTITUTIONS: &[(&str, &str)] = &[
    // Section title above the table.
    ("Försäljning efter produkt\n", ""),
    // Two-word column headers become one token each.
    (
        "Namn Sålt Returnerat Exklusive moms Inklusive moms",
        "Namn Sålt Returnerat Exklusive-moms Inklusive-moms",
    ),
    // Brand prefixes stay glued to the variant.
    ("PANINI, ", "PANINI,"),
    ("KAFFE, ", "KAFFE,"),
    ("TRIUMF, ", "TRIUMF,"),
    ("SÖTA, ", "SÖTA,"),
    // Thousands separator.
    ("\u{a0}", ""),
];

/// Apply every substitution in [`SUBSTITUTIONS`] in declared order.
pub fn clean_sales_text(input: &str) -> String {
    SUBSTITUTIONS
        .iter()
        .fold(input.to_string(), |text, (pattern, replacement)| {
            text.replace(pattern, replacement)
        })
}
