//! Structural extraction of the primary Statsguru data table.
//!
//! This module only turns markup into labeled rows. Semantic filtering
//! (dropping Career/Overall summary rows) belongs to the aggregator.

use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;

/// One table row as a column-label → raw-cell-text mapping.
///
/// A cell that is missing from the row (merged or short rows) is an absent
/// key; [`get`](RawRow::get) returning `None` is the "missing" arm the
/// normalizer handles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: BTreeMap<String, String>,
}

impl RawRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            cells: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

fn cell_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Extract the first statistics table in the document as labeled rows.
///
/// Statsguru marks its data tables with the `engineTable` class; documents
/// without one fall back to the first plain `<table>` carrying a header
/// row. Header labels come from `thead th` and body cells are zipped to
/// them positionally, so short rows simply lack the trailing columns.
///
/// A document with no usable table yields an empty Vec. Absence of data is
/// a normal state here, not an error.
pub fn parse_rows(html: &str) -> Vec<RawRow> {
    let document = Html::parse_document(html);
    let engine_table = Selector::parse("table.engineTable").unwrap();
    let any_table = Selector::parse("table").unwrap();
    let header_cell = Selector::parse("thead th").unwrap();
    let body_row = Selector::parse("tbody tr").unwrap();
    let cell = Selector::parse("td").unwrap();

    let table = document
        .select(&engine_table)
        .find(|t| t.select(&header_cell).next().is_some())
        .or_else(|| {
            document
                .select(&any_table)
                .find(|t| t.select(&header_cell).next().is_some())
        });
    let Some(table) = table else {
        return Vec::new();
    };

    let headers: Vec<String> = table.select(&header_cell).map(cell_text).collect();

    let mut rows = Vec::new();
    for tr in table.select(&body_row) {
        let values: Vec<String> = tr.select(&cell).map(cell_text).collect();
        if values.is_empty() {
            continue;
        }
        rows.push(RawRow::from_pairs(
            headers.iter().cloned().zip(values.into_iter()),
        ));
    }
    rows
}
