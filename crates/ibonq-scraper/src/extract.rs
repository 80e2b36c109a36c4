//! HTML extraction for inquiry responses.
//!
//! Both extractors are single-pass and side-effect free. A document that
//! lacks the expected markup yields `Ok(vec![])`; only an unusable selector
//! is an error.

use scraper::{ElementRef, Html, Selector};

use crate::error::ScraperError;
use crate::types::{City, Store};

/// Cells read from each store row: id, name, address.
const STORE_COLUMNS: usize = 3;

/// Extract the option texts of `<select id="{select_id}">`, in document order.
///
/// Options are trimmed but not deduplicated.
///
/// # Errors
///
/// Returns [`ScraperError::Selector`] if `select_id` cannot form a valid
/// CSS selector.
pub fn extract_cities(html: &str, select_id: &str) -> Result<Vec<City>, ScraperError> {
    let option_sel = parse_selector(&format!("#{select_id} option"), "city options")?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&option_sel)
        .map(|option| City {
            name: element_text(option),
        })
        .collect())
}

/// Extract store rows from the results table.
///
/// The first `<tr>` in the document is the column header and is always
/// dropped. Remaining rows map cell 0/1/2 to id/name/address; a missing
/// cell reads as an empty string. Rows with no `<td>` at all carry no data
/// and are skipped.
///
/// # Errors
///
/// Returns [`ScraperError::Selector`] only if the built-in selectors fail to
/// parse.
pub fn extract_stores(html: &str) -> Result<Vec<Store>, ScraperError> {
    let row_sel = parse_selector("tr", "store rows")?;
    let cell_sel = parse_selector("td", "store cells")?;
    let document = Html::parse_document(html);

    let stores = document
        .select(&row_sel)
        .skip(1)
        .enumerate()
        .filter_map(|(index, row)| {
            let mut cells = row.select(&cell_sel).take(STORE_COLUMNS).map(element_text);
            let Some(id) = cells.next() else {
                tracing::debug!(row = index + 1, "skipping store row without data cells");
                return None;
            };
            Some(Store {
                id,
                name: cells.next().unwrap_or_default(),
                address: cells.next().unwrap_or_default(),
            })
        })
        .collect();

    Ok(stores)
}

fn parse_selector(css: &str, context: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::Selector {
        context: context.to_string(),
        reason: e.to_string(),
    })
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
