use std::{
    collections::BTreeSet,
    fs::{self, File},
    io::{self, BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use catalog_tools_config::Config;
use catalog_tools_engine::{
    ConversionOptions, EanFilter,
    archive::write_zip,
    convert_descriptions,
    covers::{
        CoverFetcher, CoverReport, CoverSettings, HttpFetcher, ImageTranscoder, download_covers,
    },
    images::{
        ImageBatchReport, ImageConvertSettings, PngTranscoder, TargetFormat, convert_images,
        is_convertible,
    },
    io::{read_cover_rows, read_description_rows, write_html_records},
    parse_ean_list, text_to_html,
};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "catalog-tools", version)]
#[command(after_help = "Examples:\n\n\
    To convert one description:\n\
    $ catalog-tools convert opis.txt\n\n\
    To convert a product sheet, keeping only listed EANs:\n\
    $ catalog-tools describe produkty.csv -o opisy.csv --ean-file eany.txt\n\n\
    To download covers into a ZIP:\n\
    $ catalog-tools covers produkty.csv -o okladki.zip\n\n\
    To turn WebP images into JPEGs:\n\
    $ catalog-tools convert-images *.webp -o obrazy.zip --format jpg --quality 85")]
#[command(
    about = "Product catalogue tools: description text to HTML, cover downloads, image conversion.",
    long_about = None
)]
pub struct Cli {
    /// Config file to read instead of ~/.config/catalog-tools/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert one description from FILE (or stdin) and print the HTML
    Convert {
        file: Option<PathBuf>,

        #[command(flatten)]
        flags: ConversionFlags,
    },
    /// Convert every description in a CSV sheet into a `sku,description-B2B` export
    Describe {
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Identifier column (default: `EAN`, else the first column)
        #[arg(long, value_name = "NAME")]
        sku_column: Option<String>,

        /// Description column (default: first header mentioning `opis`/`desc`, else the second)
        #[arg(long, value_name = "NAME")]
        description_column: Option<String>,

        /// Only convert rows whose EAN is listed in FILE, one per line
        #[arg(long, value_name = "FILE")]
        ean_file: Option<PathBuf>,

        #[command(flatten)]
        flags: ConversionFlags,
    },
    /// Download the cover image linked from each CSV row into a ZIP archive
    Covers(CoverArgs),
    /// Convert image files to one format and pack them into a ZIP archive
    ConvertImages(ImageArgs),
    /// Write a config file with every default spelled out
    InitConfig {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Per-run overrides on top of the configured conversion options.
#[derive(Clone, Debug, Default, clap::Args)]
struct ConversionFlags {
    /// Leave paragraph text without `<p>` tags
    #[arg(long)]
    no_paragraphs: bool,

    /// Keep `-`/`1.` lines as plain text
    #[arg(long)]
    no_lists: bool,

    /// Keep `#` and `Label:` lines as plain text
    #[arg(long)]
    no_headings: bool,

    /// Keep `**`/`*`/`__`/`_` markers as typed
    #[arg(long)]
    no_formatting: bool,

    /// Wrap the output in `<div class="product-description">`
    #[arg(long)]
    wrap_in_div: bool,
}

impl ConversionFlags {
    fn apply(&self, mut options: ConversionOptions) -> ConversionOptions {
        if self.no_paragraphs {
            options.add_paragraphs = false;
        }
        if self.no_lists {
            options.convert_lists = false;
        }
        if self.no_headings {
            options.convert_headings = false;
        }
        if self.no_formatting {
            options.convert_formatting = false;
        }
        if self.wrap_in_div {
            options.wrap_in_div = true;
        }
        options
    }
}

#[derive(Clone, Debug, clap::Args)]
struct CoverArgs {
    input: PathBuf,

    /// ZIP archive to write
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// EAN column (default: `EAN`, else the first column)
    #[arg(long, value_name = "NAME")]
    ean_column: Option<String>,

    /// Link column (default: `Link do okładki`, else the first header mentioning `link`/`url`)
    #[arg(long, value_name = "NAME")]
    link_column: Option<String>,

    /// Only download rows whose EAN is listed in FILE, one per line
    #[arg(long, value_name = "FILE")]
    ean_file: Option<PathBuf>,

    /// Keep WebP covers instead of converting them to PNG
    #[arg(long)]
    keep_webp: bool,

    /// Download again when two rows give the same file name
    #[arg(long)]
    overwrite: bool,

    /// Pause after each download
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Per-request timeout
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,
}

impl CoverArgs {
    fn apply(&self, mut settings: CoverSettings) -> CoverSettings {
        if self.keep_webp {
            settings.convert_webp = false;
        }
        if self.overwrite {
            settings.overwrite = true;
        }
        if let Some(delay_ms) = self.delay_ms {
            settings.delay_ms = delay_ms;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            settings.timeout_secs = timeout_secs;
        }
        settings
    }
}

#[derive(Clone, Debug, clap::Args)]
struct ImageArgs {
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// ZIP archive to write
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Target format: png, jpg, bmp or tiff
    #[arg(short, long)]
    format: Option<TargetFormat>,

    /// JPEG quality
    #[arg(long, value_parser = clap::value_parser!(u8).range(10..=100))]
    quality: Option<u8>,

    /// Prepended to every output file name
    #[arg(long)]
    prefix: Option<String>,
}

impl ImageArgs {
    fn apply(&self, mut settings: ImageConvertSettings) -> ImageConvertSettings {
        if let Some(format) = self.format {
            settings.format = format;
        }
        if let Some(quality) = self.quality {
            settings.quality = quality;
        }
        if let Some(prefix) = &self.prefix {
            settings.prefix = prefix.clone();
        }
        settings
    }
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Convert { file, flags } => {
                let options = flags.apply(self.load_config()?.conversion);
                let text = read_text(file.as_deref())?;
                let html = text_to_html(Some(&text), &options);

                let mut stdout = io::stdout().lock();
                if !html.is_empty() {
                    writeln!(stdout, "{html}")?;
                }
                stdout.flush()?;
            }
            Commands::Describe {
                input,
                output,
                sku_column,
                description_column,
                ean_file,
                flags,
            } => {
                let options = flags.apply(self.load_config()?.conversion);
                describe(
                    input,
                    output,
                    sku_column.as_deref(),
                    description_column.as_deref(),
                    ean_file.as_deref(),
                    &options,
                )?;
            }
            Commands::Covers(args) => {
                let settings = args.apply(self.load_config()?.covers);
                let fetcher = HttpFetcher::new().context("Failed to set up the HTTP client")?;
                covers(args, &settings, &fetcher, &PngTranscoder)?;
            }
            Commands::ConvertImages(args) => {
                let settings = args.apply(self.load_config()?.images);
                images(args, &settings)?;
            }
            Commands::InitConfig { force } => self.init_config(*force)?,
        }

        Ok(())
    }

    fn load_config(&self) -> Result<Config> {
        let loaded = match &self.config {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                Config::load_from_path(path)?
            }
            None => Config::load()?,
        };
        Ok(loaded.unwrap_or_default())
    }

    fn init_config(&self, force: bool) -> Result<()> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        if path.exists() && !force {
            bail!(
                "Config file already exists: {} (use --force to replace it)",
                path.display()
            );
        }

        let config = Config::default();
        match &self.config {
            Some(path) => config.save_to_path(path),
            None => config.save(),
        }
        .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("Wrote {}", path.display());
        Ok(())
    }
}

fn read_text(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn read_filter(ean_file: Option<&Path>) -> Result<EanFilter> {
    let filter = match ean_file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read EAN list {}", path.display()))?;
            parse_ean_list(&text)
        }
        None => EanFilter::default(),
    };
    if !filter.is_empty() {
        log::info!("filtering on {} EAN codes", filter.len());
    }
    Ok(filter)
}

fn open_csv(input: &Path) -> Result<BufReader<File>> {
    let file = File::open(input).with_context(|| format!("Failed to open {}", input.display()))?;
    Ok(BufReader::new(file))
}

fn print_missing(missing: &BTreeSet<String>) {
    if !missing.is_empty() {
        eprintln!("EANs not found in the sheet ({}):", missing.len());
        for ean in missing {
            eprintln!("  {ean}");
        }
    }
}

fn describe(
    input: &Path,
    output: &Path,
    sku_column: Option<&str>,
    description_column: Option<&str>,
    ean_file: Option<&Path>,
    options: &ConversionOptions,
) -> Result<()> {
    let rows = read_description_rows(open_csv(input)?, sku_column, description_column)
        .with_context(|| format!("Failed to read rows from {}", input.display()))?;
    let filter = read_filter(ean_file)?;

    let report = convert_descriptions(rows, &filter, options);

    let writer =
        File::create(output).with_context(|| format!("Failed to create {}", output.display()))?;
    write_html_records(BufWriter::new(writer), &report.records)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    eprintln!(
        "Rows: {} | Converted: {} | With HTML: {} | Empty: {}",
        report.stats.total_rows, report.stats.converted, report.stats.with_html, report.stats.empty
    );
    print_missing(&report.missing);
    Ok(())
}

fn covers(
    args: &CoverArgs,
    settings: &CoverSettings,
    fetcher: &dyn CoverFetcher,
    transcoder: &dyn ImageTranscoder,
) -> Result<CoverReport> {
    let rows = read_cover_rows(
        open_csv(&args.input)?,
        args.ean_column.as_deref(),
        args.link_column.as_deref(),
    )
    .with_context(|| format!("Failed to read rows from {}", args.input.display()))?;
    let filter = read_filter(args.ean_file.as_deref())?;

    let report = download_covers(rows, &filter, settings, fetcher, transcoder);

    let writer = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_zip(writer, &report.files)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    let stats = &report.stats;
    eprintln!(
        "Downloaded: {} | Failed: {} | Already present: {} | WebP converted: {} | PDF skipped: {} | Empty rows: {}",
        stats.downloaded,
        stats.failed,
        stats.already_present,
        stats.conversions,
        stats.pdf_skipped,
        stats.empty_rows
    );
    if !filter.is_empty() {
        eprintln!("Outside filter: {}", stats.outside_filter);
    }
    for failure in &report.failures {
        eprintln!("  EAN: {} | Error: {}", failure.ean, failure.message);
    }
    if !report.pdf_eans.is_empty() {
        eprintln!("EANs linking to PDF files ({}):", report.pdf_eans.len());
        for ean in &report.pdf_eans {
            eprintln!("  {ean}");
        }
    }
    print_missing(&report.missing);
    Ok(report)
}

fn images(args: &ImageArgs, settings: &ImageConvertSettings) -> Result<ImageBatchReport> {
    let mut inputs = Vec::new();
    for path in &args.files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !is_convertible(&name) {
            log::warn!("skipping {}: not a supported image type", path.display());
            continue;
        }
        let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        inputs.push((name, bytes));
    }

    let report = convert_images(inputs, settings);

    let writer = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_zip(writer, &report.files)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    eprintln!(
        "Converted: {} | Failed: {} | Format: {}",
        report.files.len(),
        report.failures.len(),
        settings.format
    );
    for failure in &report.failures {
        eprintln!("  {}: {}", failure.name, failure.message);
    }
    Ok(report)
}
