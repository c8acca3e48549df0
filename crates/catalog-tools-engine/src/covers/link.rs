use url::Url;

/// Extensions kept as-is in output file names.
pub const ALLOWED_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".webp", ".bmp"];
/// Extension used when the link has none or an unrecognised one.
pub const DEFAULT_EXTENSION: &str = ".jpg";
pub const PDF_EXTENSION: &str = ".pdf";
pub const WEBP_EXTENSION: &str = ".webp";
pub const PNG_EXTENSION: &str = ".png";

/// What a cover link points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// A PDF document. Skipped, not an error.
    Pdf,
    /// An image, with the lowercased extension its file will get.
    Image { extension: String },
}

impl LinkTarget {
    pub fn classify(link: &str) -> Self {
        if link.to_lowercase().contains(PDF_EXTENSION) {
            return LinkTarget::Pdf;
        }

        let extension = path_extension(&link_path(link)).to_lowercase();
        if extension == PDF_EXTENSION {
            return LinkTarget::Pdf;
        }
        if ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            LinkTarget::Image { extension }
        } else {
            LinkTarget::Image {
                extension: DEFAULT_EXTENSION.to_string(),
            }
        }
    }
}

/// Path component of a link. Links that are not absolute URLs are taken
/// verbatim up to the first `?` or `#`.
fn link_path(link: &str) -> String {
    match Url::parse(link) {
        Ok(url) => url.path().to_string(),
        Err(_) => link
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}

/// Extension of the last path segment including its dot, or `""`.
///
/// Leading dots of the segment do not start an extension (`/.hidden` has none).
fn path_extension(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or_default();
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(dot) => &name[stem_start + dot..],
        None => "",
    }
}

/// Output file name for a cover: identifier plus extension, with WebP
/// rewritten to PNG when conversion is enabled.
pub fn cover_file_name(ean: &str, extension: &str, convert_webp: bool) -> String {
    if convert_webp && extension == WEBP_EXTENSION {
        format!("{ean}{PNG_EXTENSION}")
    } else {
        format!("{ean}{extension}")
    }
}
