//! # Cover Downloads
//!
//! Turns spreadsheet rows of (EAN, image link) into a set of named image
//! files. HTTP fetching and image re-encoding are collaborators behind the
//! [`CoverFetcher`] and [`ImageTranscoder`] traits, implemented by
//! [`HttpFetcher`] and [`crate::images::PngTranscoder`]. This module owns the
//! per-row policy:
//!
//! - rows missing either value are counted as empty and skipped
//! - PDF links are skipped and reported, never fetched
//! - file names are `<normalized EAN><extension>`, WebP → PNG when converting
//! - each failure is recorded and the batch continues

pub mod http;
pub mod link;
pub mod runner;

pub use http::HttpFetcher;
pub use link::{LinkTarget, cover_file_name};
pub use runner::{
    CoverFailure, CoverFetcher, CoverReport, CoverRow, CoverSettings, CoverStats, FetchError,
    FetchRequest, ImageTranscoder, TranscodeError, download_covers,
};
