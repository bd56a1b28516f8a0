use scraper::{ElementRef, Html, Selector};

use crate::{error::FetchError, models::RateValue};

fn selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::Markup(format!("invalid selector '{}': {}", css, e)))
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Cells that belong to `row` itself, skipping those of tables nested inside it.
fn row_cells(row: ElementRef<'_>) -> Vec<String> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| matches!(cell.value().name(), "td" | "th"))
        .map(cell_text)
        .collect()
}

/// Scans every table row for one whose first cell contains `bank`
/// (case-insensitive) and returns its third cell, trimmed.
///
/// Every matching row overwrites the previous candidate, so when several rows
/// mention the bank the last one wins.
pub fn extract_rate(html: &str, bank: &str) -> Result<RateValue, FetchError> {
    let document = Html::parse_document(html);
    let rows = selector("tr")?;
    let needle = bank.to_lowercase();

    let mut rate: Option<String> = None;
    for row in document.select(&rows) {
        let texts = row_cells(row);
        let (Some(name), Some(value)) = (texts.first(), texts.get(2)) else {
            continue;
        };

        if name.to_lowercase().contains(&needle) {
            rate = Some(value.trim().to_string());
        }
    }

    match rate {
        None => Err(FetchError::BankNotFound(bank.to_string())),
        Some(value) if value.is_empty() => Err(FetchError::EmptyRate(bank.to_string())),
        Some(value) => Ok(RateValue::new(value)),
    }
}
