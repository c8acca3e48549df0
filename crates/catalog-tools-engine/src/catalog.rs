use std::collections::BTreeSet;

use crate::{
    convert::text_to_html,
    ean::{EanFilter, normalize_identifier},
    options::ConversionOptions,
};

/// One input row: an identifier and its raw description, either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionRow {
    pub sku: Option<String>,
    pub description: Option<String>,
}

impl DescriptionRow {
    pub fn new(sku: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            sku: Some(sku.into()),
            description: Some(description.into()),
        }
    }
}

/// One output row of the two-column export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlRecord {
    pub sku: String,
    pub html: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DescriptionStats {
    /// Rows in the input, before filtering.
    pub total_rows: usize,
    /// Rows that passed the filter and were converted.
    pub converted: usize,
    /// Converted rows whose HTML is non-empty.
    pub with_html: usize,
    /// Converted rows with no description.
    pub empty: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionReport {
    pub records: Vec<HtmlRecord>,
    pub stats: DescriptionStats,
    /// Filter codes that no row matched. Empty when no filter was given.
    pub missing: BTreeSet<String>,
}

/// Converts every admitted row's description to HTML.
///
/// Rows are kept in input order. A row without an identifier exports with an
/// empty `sku` and is only admitted when the filter is empty.
pub fn convert_descriptions<I>(
    rows: I,
    filter: &EanFilter,
    options: &ConversionOptions,
) -> DescriptionReport
where
    I: IntoIterator<Item = DescriptionRow>,
{
    let mut report = DescriptionReport::default();
    let mut found = BTreeSet::new();

    for row in rows {
        report.stats.total_rows += 1;

        let sku = row
            .sku
            .as_deref()
            .and_then(normalize_identifier)
            .unwrap_or_default();

        if !filter.admits(&sku) {
            continue;
        }
        if !filter.is_empty() {
            found.insert(sku.clone());
        }

        let html = text_to_html(row.description.as_deref(), options);
        report.stats.converted += 1;
        if html.is_empty() {
            report.stats.empty += 1;
        } else {
            report.stats.with_html += 1;
        }
        report.records.push(HtmlRecord { sku, html });
    }

    report.missing = filter.missing_from(&found);
    log::info!(
        "converted {} of {} rows ({} with HTML, {} empty, {} filter codes missing)",
        report.stats.converted,
        report.stats.total_rows,
        report.stats.with_html,
        report.stats.empty,
        report.missing.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ean::parse_ean_list;
    use pretty_assertions::assert_eq;

    fn rows() -> Vec<DescriptionRow> {
        vec![
            DescriptionRow::new("5901234567890", "# Tytuł\nOpis **produktu**"),
            DescriptionRow::new("5907654321098.0", "- a\n- b"),
            DescriptionRow {
                sku: Some("9788374959216".into()),
                description: None,
            },
            DescriptionRow {
                sku: None,
                description: Some("orphan".into()),
            },
        ]
    }

    #[test]
    fn converts_all_rows_without_filter() {
        let report =
            convert_descriptions(rows(), &EanFilter::default(), &ConversionOptions::default());

        assert_eq!(
            report.stats,
            DescriptionStats {
                total_rows: 4,
                converted: 4,
                with_html: 3,
                empty: 1,
            }
        );
        assert_eq!(
            report.records[0],
            HtmlRecord {
                sku: "5901234567890".into(),
                html: "<h1>Tytuł</h1>\n\n<p>Opis <strong>produktu</strong></p>".into(),
            }
        );
        assert_eq!(report.records[1].sku, "5907654321098");
        assert_eq!(report.records[3].sku, "");
        assert!(report.missing.is_empty());
    }

    #[test]
    fn filter_restricts_rows_and_reports_missing() {
        let filter = parse_ean_list("5907654321098\n9788374959216\n1111111111111");
        let report = convert_descriptions(rows(), &filter, &ConversionOptions::default());

        let skus: Vec<&str> = report.records.iter().map(|r| r.sku.as_str()).collect();
        assert_eq!(skus, vec!["5907654321098", "9788374959216"]);
        assert_eq!(report.stats.total_rows, 4);
        assert_eq!(report.stats.converted, 2);
        assert_eq!(report.stats.empty, 1);
        assert_eq!(
            report.missing.into_iter().collect::<Vec<_>>(),
            vec!["1111111111111".to_string()]
        );
    }
}
