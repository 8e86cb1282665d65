//! CLI binary for md2pdf.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig`, runs the batch, and prints per-file results.

use anyhow::{Context, Result};
use clap::Parser;
use md2pdf::{convert_batch, ConversionConfig, FileOutcome, PdfEngine};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Basic conversion (writes README.pdf next to the input)
  md2pdf README.md

  # Explicit output path (single input only)
  md2pdf README.md -o manual.pdf

  # Whole directory of notes
  md2pdf notes/*.md

  # Force the native renderer (no weasyprint/wkhtmltopdf needed)
  md2pdf --engine flow README.md

  # Machine-readable batch summary
  md2pdf --json docs/*.md

ENGINES:
  auto   Use an HTML engine from PATH when available, else the flow renderer. (default)
  html   weasyprint or wkhtmltopdf subprocess; full stylesheet, 2cm page margins.
  flow   Native genpdf layout; A4 pages, needs only a TrueType font family.

ENVIRONMENT VARIABLES:
  MD2PDF_ENGINE          Override the engine (auto, html, flow)
  MD2PDF_FONT_DIR        Directory searched first for flow-renderer fonts
  MD2PDF_FONT_NAME       Body font family name (default: LiberationSans)
  MD2PDF_CODE_FONT_NAME  Code font family name (default: LiberationMono)

EXIT STATUS:
  0  at least one file converted successfully
  1  no file converted, or --output was combined with multiple inputs
"#;

/// Convert Markdown files to PDF.
#[derive(Parser, Debug)]
#[command(
    name = "md2pdf",
    version,
    about = "Convert Markdown files to PDF",
    long_about = "Convert Markdown documents to PDF using an external HTML-to-PDF engine \
(weasyprint, wkhtmltopdf) or a built-in flow-layout renderer for systems where \
those engines' dependencies are unavailable.",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Markdown file(s) to convert.
    #[arg(required = true)]
    input_files: Vec<PathBuf>,

    /// Output PDF file (only for a single input file).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// PDF backend: auto, html, flow.
    #[arg(long, env = "MD2PDF_ENGINE", value_enum, default_value = "auto")]
    engine: EngineArg,

    /// Document title (default: the input filename stem).
    #[arg(long)]
    title: Option<String>,

    /// Print the batch summary as JSON instead of per-file messages.
    #[arg(long, env = "MD2PDF_JSON")]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "MD2PDF_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "MD2PDF_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum EngineArg {
    Auto,
    Html,
    Flow,
}

impl From<EngineArg> for PdfEngine {
    fn from(v: EngineArg) -> Self {
        match v {
            EngineArg::Auto => PdfEngine::Auto,
            EngineArg::Html => PdfEngine::Html,
            EngineArg::Flow => PdfEngine::Flow,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        // The per-file stdout messages are the user-facing feedback; keep
        // library logs out of the way unless asked for.
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    // ── Flag validation ──────────────────────────────────────────────────
    if cli.input_files.len() > 1 && cli.output.is_some() {
        println!("Error: Cannot specify output filename with multiple input files.");
        return Ok(ExitCode::FAILURE);
    }

    // ── Build config ─────────────────────────────────────────────────────
    let mut builder = ConversionConfig::builder().engine(cli.engine.into());
    if let Some(ref title) = cli.title {
        builder = builder.title(title.clone());
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Run batch ────────────────────────────────────────────────────────
    let summary = convert_batch(&cli.input_files, cli.output.as_deref(), &config);

    // ── Report ───────────────────────────────────────────────────────────
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to serialise summary")?
        );
    } else if !cli.quiet {
        for outcome in &summary.outcomes {
            match outcome {
                FileOutcome::Converted(stats) => println!(
                    "Successfully converted '{}' to '{}'",
                    stats.input.display(),
                    stats.output.display()
                ),
                FileOutcome::Skipped { reason, .. } => {
                    println!("Warning: {reason} Skipping.")
                }
                FileOutcome::Failed { path, error } => {
                    println!("Error converting '{}' to PDF: {error}", path.display())
                }
            }
        }
        println!("\n{}", summary.summary_line());
    }

    Ok(if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
