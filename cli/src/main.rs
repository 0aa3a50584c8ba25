//! pecas CLI - split PDF court records into classified page ranges

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use pecas::{
    extract_outline, render, resolve_bookmark_ranges, scan_content_ranges, ClassifiedPiece,
    DocumentSource, JsonFormat, LopdfSource, PageRange, SegmentOptions, Segmenter, Taxonomy,
    TaxonomyConfig,
};

/// Custom taxonomy file, also accepted as `--taxonomy`.
const TAXONOMY_ENV: &str = "PECAS_TAXONOMY";

#[derive(Parser)]
#[command(name = "pecas")]
#[command(version)]
#[command(about = "Split PDF court records into classified page ranges", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the outline into bookmark ranges
    Ranges {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Detect ranges from page headers, ignoring the outline
    Scan {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        segment: SegmentArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List classified pieces only
    Classify {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        segment: SegmentArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Full segmentation report (ranges and pieces)
    Segment {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        segment: SegmentArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the built-in taxonomy as JSON
    Taxonomy {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show document information
    Info {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Args, Default)]
struct SegmentArgs {
    /// Custom taxonomy JSON file
    #[arg(long, value_name = "JSON", env = "PECAS_TAXONOMY")]
    taxonomy: Option<PathBuf>,

    /// Skip the outline and scan page headers
    #[arg(long)]
    force_scan: bool,

    /// Minimum bookmark ranges before falling back to content scan
    #[arg(long, value_name = "N")]
    min_ranges: Option<usize>,

    /// Fail on the first unreadable page
    #[arg(long)]
    strict: bool,
}

impl SegmentArgs {
    /// Defaults for the bare `pecas <FILE>` form, which bypasses the
    /// subcommand parser and so reads the taxonomy variable itself.
    fn with_taxonomy(taxonomy: Option<OsString>) -> Self {
        Self {
            taxonomy: taxonomy.filter(|t| !t.is_empty()).map(PathBuf::from),
            ..Self::default()
        }
    }

    fn segmenter(&self) -> Result<Segmenter, Box<dyn std::error::Error>> {
        let taxonomy = match self.taxonomy {
            Some(ref path) => {
                let taxonomy = Taxonomy::from_json_file(path)?;
                log::debug!(
                    "Loaded {} categories from {}",
                    taxonomy.len(),
                    path.display()
                );
                taxonomy
            }
            None => Taxonomy::legal_default(),
        };

        let mut options = SegmentOptions::new();
        if let Some(min) = self.min_ranges {
            options = options.with_min_bookmark_ranges(min);
        }
        if self.force_scan {
            options = options.force_content_scan();
        }
        if self.strict {
            options = options.strict();
        }

        Ok(Segmenter::new(taxonomy).with_options(options))
    }
}

#[derive(Args, Default)]
struct OutputArgs {
    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output JSON instead of a listing
    #[arg(long)]
    json: bool,

    /// Output compact JSON (implies --json)
    #[arg(long)]
    compact: bool,
}

impl OutputArgs {
    fn json_format(&self) -> Option<JsonFormat> {
        if self.compact {
            Some(JsonFormat::Compact)
        } else if self.json {
            Some(JsonFormat::Pretty)
        } else {
            None
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Ranges { input, output }) => cmd_ranges(&input, &output),
        Some(Commands::Scan {
            input,
            segment,
            output,
        }) => cmd_scan(&input, &segment, &output),
        Some(Commands::Classify {
            input,
            segment,
            output,
        }) => cmd_classify(&input, &segment, &output),
        Some(Commands::Segment {
            input,
            segment,
            output,
        }) => cmd_segment(&input, &segment, &output),
        Some(Commands::Taxonomy { output }) => cmd_taxonomy(output.as_deref()),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: segment if input is provided
            if let Some(input) = cli.input {
                let segment = SegmentArgs::with_taxonomy(env::var_os(TAXONOMY_ENV));
                cmd_segment(&input, &segment, &OutputArgs::default())
            } else {
                println!("{}", "Usage: pecas <FILE>".yellow());
                println!("       pecas --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Write to the output file, or print to stdout.
fn emit(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn list_ranges(ranges: &[PageRange]) -> String {
    if ranges.is_empty() {
        return "No ranges found.".to_string();
    }
    ranges
        .iter()
        .map(|r| r.display_label.clone())
        .collect::<Vec<_>>()
        .join("\n")
}

fn list_pieces(pieces: &[ClassifiedPiece]) -> String {
    if pieces.is_empty() {
        return "No pieces classified.".to_string();
    }
    pieces
        .iter()
        .map(|p| {
            let mark = if p.preselected { "[x]" } else { "[ ]" };
            format!("{} {}: {}", mark, p.category, p.range.display_label.trim_start())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Bookmark ranges, or none when the outline cannot be read.
fn bookmark_ranges<S: DocumentSource>(source: &S) -> pecas::Result<Vec<PageRange>> {
    let total_pages = source.page_count()?;
    match extract_outline(source) {
        Ok(outline) => Ok(resolve_bookmark_ranges(&outline, total_pages)),
        Err(e) if e.is_structure_unavailable() => {
            log::warn!("{}; no bookmarks available", e);
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

fn cmd_ranges(input: &Path, output: &OutputArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = LopdfSource::open(input)?;
    let ranges = bookmark_ranges(&source)?;

    let content = match output.json_format() {
        Some(format) => render::json_string(&ranges, format)?,
        None => list_ranges(&ranges),
    };
    emit(&content, output.output.as_deref())
}

fn cmd_scan(
    input: &Path,
    segment: &SegmentArgs,
    output: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let segmenter = segment.segmenter()?;
    let source = LopdfSource::open(input)?;
    let ranges = scan_content_ranges(&source, segmenter.taxonomy(), segmenter.options())?;

    let content = match output.json_format() {
        Some(format) => render::json_string(&ranges, format)?,
        None => list_ranges(&ranges),
    };
    emit(&content, output.output.as_deref())
}

fn cmd_classify(
    input: &Path,
    segment: &SegmentArgs,
    output: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let segmenter = segment.segmenter()?;
    let source = LopdfSource::open(input)?;
    let segmentation = segmenter.segment(&source)?;
    log::info!("Ranges from {}", segmentation.strategy);

    let content = match output.json_format() {
        Some(format) => render::json_string(&segmentation.pieces, format)?,
        None => list_pieces(&segmentation.pieces),
    };
    emit(&content, output.output.as_deref())
}

fn cmd_segment(
    input: &Path,
    segment: &SegmentArgs,
    output: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let segmenter = segment.segmenter()?;
    let segmentation = pecas::segment_file_with(input, &segmenter)?;

    let content = match output.json_format() {
        Some(format) => render::to_json(&segmentation, format)?,
        None => render::to_text(&segmentation),
    };
    emit(&content, output.output.as_deref())
}

fn cmd_taxonomy(output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let json = TaxonomyConfig::legal_default().to_json_pretty()?;
    emit(&json, output)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let source = LopdfSource::open(input)?;
    let page_count = source.page_count()?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: PDF {}", "Format".bold(), source.version());
    println!("{}: {}", "Pages".bold(), page_count);
    println!(
        "{}: {}",
        "Encrypted".bold(),
        if source.is_encrypted() { "Yes" } else { "No" }
    );

    println!();
    println!("{}", "Structure".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    match extract_outline(&source) {
        Ok(outline) => {
            let ranges = resolve_bookmark_ranges(&outline, page_count);
            let depth = outline.iter().map(|e| e.level).max().unwrap_or(0);
            println!("{}: {}", "Bookmarks".bold(), outline.len());
            println!("{}: {}", "Outline depth".bold(), depth);
            println!("{}: {}", "Bookmark ranges".bold(), ranges.len());
        }
        Err(e) if e.is_structure_unavailable() => {
            println!("{}: {}", "Bookmarks".bold(), "unreadable".yellow());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pecas".cyan().bold(), env!("CARGO_PKG_VERSION"));
}
