use std::{
    collections::{BTreeMap, BTreeSet},
    thread,
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::ean::{EanFilter, normalize_identifier};

use super::link::{LinkTarget, WEBP_EXTENSION, cover_file_name};

/// Tuning for a cover-download batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoverSettings {
    /// Re-encode WebP downloads as PNG.
    pub convert_webp: bool,
    /// Fetch again when a file with the same name was already produced.
    pub overwrite: bool,
    /// Per-request timeout handed to the fetcher.
    pub timeout_secs: u64,
    /// Pause after each successful download.
    pub delay_ms: u64,
    /// `User-Agent` header handed to the fetcher.
    pub user_agent: String,
}

impl Default for CoverSettings {
    fn default() -> Self {
        Self {
            convert_webp: true,
            overwrite: false,
            timeout_secs: 30,
            delay_ms: 1000,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
        }
    }
}

/// One input row: identifier and link to its cover image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverRow {
    pub ean: Option<String>,
    pub link: Option<String>,
}

impl CoverRow {
    pub fn new(ean: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            ean: Some(ean.into()),
            link: Some(link.into()),
        }
    }
}

/// What the fetcher is asked to download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest<'a> {
    pub url: &'a str,
    pub user_agent: &'a str,
    pub timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
}

#[derive(Debug, thiserror::Error)]
#[error("image conversion failed: {0}")]
pub struct TranscodeError(pub String);

/// Downloads raw bytes for a link. Retry policy, if any, lives in the implementation.
pub trait CoverFetcher {
    fn fetch(&self, request: &FetchRequest<'_>) -> Result<Vec<u8>, FetchError>;
}

/// Re-encodes WebP bytes as PNG, flattening transparency onto white.
pub trait ImageTranscoder {
    fn webp_to_png(&self, bytes: &[u8]) -> Result<Vec<u8>, TranscodeError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoverStats {
    pub downloaded: usize,
    pub failed: usize,
    pub already_present: usize,
    pub conversions: usize,
    pub outside_filter: usize,
    pub pdf_skipped: usize,
    pub empty_rows: usize,
}

/// A per-item failure. The batch carries on after recording it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverFailure {
    pub ean: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct CoverReport {
    /// File name → bytes, ready to be packed.
    pub files: BTreeMap<String, Vec<u8>>,
    pub stats: CoverStats,
    pub failures: Vec<CoverFailure>,
    /// Identifiers whose link pointed at a PDF, in input order.
    pub pdf_eans: Vec<String>,
    /// Filter codes that no row matched.
    pub missing: BTreeSet<String>,
}

#[derive(Debug, thiserror::Error)]
enum CoverError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Transcode(#[from] TranscodeError),
}

/// Downloads the cover for every admitted row.
///
/// Network and decode failures are recorded per item and never abort the
/// batch; files already produced stay in the report.
pub fn download_covers<I, F, T>(
    rows: I,
    filter: &EanFilter,
    settings: &CoverSettings,
    fetcher: &F,
    transcoder: &T,
) -> CoverReport
where
    I: IntoIterator<Item = CoverRow>,
    F: CoverFetcher + ?Sized,
    T: ImageTranscoder + ?Sized,
{
    let mut report = CoverReport::default();
    let mut found = BTreeSet::new();

    for row in rows {
        let (Some(ean), Some(link)) = (
            row.ean.as_deref().and_then(normalize_identifier),
            row.link.as_deref().map(str::trim).filter(|l| !l.is_empty()),
        ) else {
            report.stats.empty_rows += 1;
            continue;
        };

        if !filter.is_empty() {
            if !filter.contains(&ean) {
                report.stats.outside_filter += 1;
                continue;
            }
            found.insert(ean.clone());
        }

        let extension = match LinkTarget::classify(link) {
            LinkTarget::Pdf => {
                log::warn!("EAN {ean}: skipped, link points to a PDF file");
                report.stats.pdf_skipped += 1;
                report.pdf_eans.push(ean);
                continue;
            }
            LinkTarget::Image { extension } => extension,
        };

        let file_name = cover_file_name(&ean, &extension, settings.convert_webp);
        if report.files.contains_key(&file_name) && !settings.overwrite {
            report.stats.already_present += 1;
            continue;
        }

        let transcode = settings.convert_webp && extension == WEBP_EXTENSION;
        match fetch_one(link, transcode, settings, fetcher, transcoder) {
            Ok(bytes) => {
                if transcode {
                    report.stats.conversions += 1;
                }
                report.files.insert(file_name, bytes);
                report.stats.downloaded += 1;
                if settings.delay_ms > 0 {
                    thread::sleep(Duration::from_millis(settings.delay_ms));
                }
            }
            Err(e) => {
                log::warn!("EAN: {ean} | Error: {e}");
                report.stats.failed += 1;
                report.failures.push(CoverFailure {
                    ean,
                    message: e.to_string(),
                });
            }
        }
    }

    report.missing = filter.missing_from(&found);
    log::info!(
        "covers: {} downloaded, {} failed, {} PDF links skipped, {} empty rows",
        report.stats.downloaded,
        report.stats.failed,
        report.stats.pdf_skipped,
        report.stats.empty_rows
    );
    report
}

fn fetch_one<F, T>(
    link: &str,
    transcode: bool,
    settings: &CoverSettings,
    fetcher: &F,
    transcoder: &T,
) -> Result<Vec<u8>, CoverError>
where
    F: CoverFetcher + ?Sized,
    T: ImageTranscoder + ?Sized,
{
    let request = FetchRequest {
        url: link,
        user_agent: &settings.user_agent,
        timeout: Duration::from_secs(settings.timeout_secs),
    };
    let bytes = fetcher.fetch(&request)?;
    if transcode {
        Ok(transcoder.webp_to_png(&bytes)?)
    } else {
        Ok(bytes)
    }
}
