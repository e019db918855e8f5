// src/specs/country_codes.rs
//! The ISO 3166 table on the country-codes page.
//!
//! Shape: one `<table>`, a `<thead>` row of `<th>` labels, then one `<tr>` per
//! country in `<tbody>`. Today the labels are `Country`, `Alpha-2 code`,
//! `Alpha-3 code`, `Numeric`; nothing here depends on their wording, only on
//! every row having as many cells as the header.

use std::error::Error;
use std::fmt;
use std::fs;

use scraper::{ElementRef, Html, Selector};

use crate::config::options::FetchOptions;
use crate::core::net::Http;
use crate::core::sanitize::normalize_ws;
use crate::store::{CountryDataset, CountryRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Selector(String),
    MissingTable,
    MissingHeader,
    /// `row` is the 0-based index among data rows.
    RowWidth { row: usize, expected: usize, found: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Selector(msg) => write!(f, "invalid selector: {msg}"),
            ParseError::MissingTable => f.write_str("no <table> found in page"),
            ParseError::MissingHeader => f.write_str("table has no header cells"),
            ParseError::RowWidth { row, expected, found } => write!(
                f,
                "row {row} has {found} cells, header has {expected}. Site format may have changed; aborting"
            ),
        }
    }
}

impl Error for ParseError {}

/// Load the page (saved file or live URL) and parse it.
pub fn fetch(opts: &FetchOptions, http: &Http) -> Result<CountryDataset, Box<dyn Error>> {
    let html = match &opts.from_file {
        Some(path) => {
            logf!("reading {}", path.display());
            fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => {
            logf!("fetching {}", opts.table_url);
            http.get_text(&opts.table_url)?
        }
    };
    Ok(parse_table(&html)?)
}

fn sel(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::Selector(format!("{css}: {e}")))
}

fn cell_text(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Parse the first table in `html` into header labels and one record per row.
/// A row whose width differs from the header aborts the whole parse.
pub fn parse_table(html: &str) -> Result<CountryDataset, ParseError> {
    let doc = Html::parse_document(html);
    let table = doc.select(&sel("table")?).next().ok_or(ParseError::MissingTable)?;

    let headers = read_headers(table)?;
    logf!("keys: {headers:?}");

    let tr = sel("tr")?;
    let td = sel("td")?;
    let cell = sel("th, td")?;

    let mut records = Vec::new();
    for row in table.select(&tr) {
        // Header rows carry no <td>
        if row.select(&td).next().is_none() {
            continue;
        }

        let cells: Vec<String> = row.select(&cell).map(cell_text).collect();
        if cells.len() != headers.len() {
            return Err(ParseError::RowWidth {
                row: records.len(),
                expected: headers.len(),
                found: cells.len(),
            });
        }
        for c in &cells {
            logd!("{c} written to the record");
        }
        records.push(CountryRecord::new(&headers, cells));
    }

    logf!("parsed {} records", records.len());
    Ok(CountryDataset { headers, records })
}

/// `<thead>` labels; without a `<thead>`, the first row made of `<th>` only.
fn read_headers(table: ElementRef<'_>) -> Result<Vec<String>, ParseError> {
    let thead_th = sel("thead th")?;
    let mut headers: Vec<String> = table.select(&thead_th).map(cell_text).collect();

    if headers.is_empty() {
        let tr = sel("tr")?;
        let th = sel("th")?;
        let td = sel("td")?;
        if let Some(row) = table
            .select(&tr)
            .find(|r| r.select(&th).next().is_some() && r.select(&td).next().is_none())
        {
            headers = row.select(&th).map(cell_text).collect();
        }
    }

    if headers.is_empty() {
        return Err(ParseError::MissingHeader);
    }
    Ok(headers)
}
