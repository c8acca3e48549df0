use std::io::{Read, Write};

use crate::{
    catalog::{DescriptionRow, HtmlRecord},
    covers::CoverRow,
};

/// Header of the identifier column in the export.
pub const SKU_HEADER: &str = "sku";
/// Header of the HTML column in the export.
pub const HTML_HEADER: &str = "description-B2B";
/// Identifier column picked when none is named.
pub const DEFAULT_SKU_COLUMN: &str = "EAN";
/// Cover link column picked when none is named.
pub const DEFAULT_LINK_COLUMN: &str = "Link do okładki";

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Column not found: {0}")]
    MissingColumn(String),
    #[error("Input has no header row")]
    NoHeader,
}

/// Read description rows from a CSV with a header row.
///
/// Named columns must exist. Unnamed ones are guessed: the identifier column
/// is `EAN` if present, else the first; the description column is the first
/// whose header mentions `opis` or `desc`, else the second (or the only one).
pub fn read_description_rows<R: Read>(
    reader: R,
    sku_column: Option<&str>,
    description_column: Option<&str>,
) -> Result<Vec<DescriptionRow>, TableError> {
    let pairs = read_column_pairs(
        reader,
        (sku_column, guess_sku_column),
        (description_column, |h| guess_by_keywords(h, &["opis", "desc"])),
    )?;
    Ok(pairs
        .into_iter()
        .map(|(sku, description)| DescriptionRow { sku, description })
        .collect())
}

/// Read (EAN, cover link) rows from a CSV with a header row.
///
/// Column guessing: the EAN column is `EAN` if present, else the first; the
/// link column is `Link do okładki` if present, else the first header
/// mentioning `link` or `url`, else the second (or the only one).
pub fn read_cover_rows<R: Read>(
    reader: R,
    ean_column: Option<&str>,
    link_column: Option<&str>,
) -> Result<Vec<CoverRow>, TableError> {
    let pairs = read_column_pairs(
        reader,
        (ean_column, guess_sku_column),
        (link_column, |h| {
            h.iter()
                .position(|name| name == DEFAULT_LINK_COLUMN)
                .unwrap_or_else(|| guess_by_keywords(h, &["link", "url"]))
        }),
    )?;
    Ok(pairs
        .into_iter()
        .map(|(ean, link)| CoverRow { ean, link })
        .collect())
}

type ColumnChoice<'a> = (Option<&'a str>, fn(&[String]) -> usize);

fn read_column_pairs<R: Read>(
    reader: R,
    first: ColumnChoice<'_>,
    second: ColumnChoice<'_>,
) -> Result<Vec<(Option<String>, Option<String>)>, TableError> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(TableError::NoHeader);
    }

    let resolve = |(name, guess): ColumnChoice<'_>| match name {
        Some(name) => find_column(&headers, name),
        None => Ok(guess(&headers)),
    };
    let first_idx = resolve(first)?;
    let second_idx = resolve(second)?;
    log::debug!(
        "reading columns '{}' and '{}'",
        headers[first_idx],
        headers[second_idx]
    );

    let mut rows = Vec::new();
    for record in csv.records() {
        let record = record?;
        rows.push((cell(&record, first_idx), cell(&record, second_idx)));
    }
    Ok(rows)
}

/// Write the two-column export (`sku`, `description-B2B`).
pub fn write_html_records<W: Write>(writer: W, records: &[HtmlRecord]) -> Result<(), TableError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([SKU_HEADER, HTML_HEADER])?;
    for r in records {
        csv.write_record([r.sku.as_str(), r.html.as_str()])?;
    }
    csv.flush()?;
    Ok(())
}

fn find_column(headers: &[String], name: &str) -> Result<usize, TableError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| TableError::MissingColumn(name.to_string()))
}

fn guess_sku_column(headers: &[String]) -> usize {
    headers
        .iter()
        .position(|h| h == DEFAULT_SKU_COLUMN)
        .unwrap_or(0)
}

/// First header containing any keyword (case-insensitive), else the second
/// column, or the first when there is only one.
fn guess_by_keywords(headers: &[String], keywords: &[&str]) -> usize {
    headers
        .iter()
        .position(|h| {
            let lower = h.to_lowercase();
            keywords.iter().any(|k| lower.contains(k))
        })
        .unwrap_or(if headers.len() > 1 { 1 } else { 0 })
}

fn cell(record: &csv::StringRecord, idx: usize) -> Option<String> {
    record
        .get(idx)
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}
