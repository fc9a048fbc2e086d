//! docingest CLI — normalise a document from the command line.
//!
//! Text-shaped results print to stdout (or `--output`); image-shaped results
//! require `--json`, which emits the full canonical document as JSON with
//! base64 page data.

use anyhow::{bail, Context, Result};
use clap::Parser;
use docingest::{extract_file, CanonicalDocument, ExtractionConfig};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "docingest",
    version,
    about = "Normalise documents (TXT/MD, PDF, DOCX, XLSX) into text or page images",
    long_about = None
)]
struct Cli {
    /// Input document path; the extension decides the extractor
    input: PathBuf,

    /// Write the result to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit the canonical document as JSON (required for image results)
    #[arg(long)]
    json: bool,

    /// Minimum trimmed character count for a PDF text layer to count as text
    #[arg(long, value_name = "CHARS")]
    threshold: Option<usize>,

    /// Page upscaling factor for rasterisation (0.5 - 8.0)
    #[arg(long, value_name = "FACTOR")]
    scale: Option<f32>,

    /// Password for encrypted PDFs
    #[arg(long, value_name = "PASSWORD", env = "DOCINGEST_PDF_PASSWORD")]
    password: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all logs except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_filter(&self) -> EnvFilter {
        let level = if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    }

    fn config(&self) -> Result<ExtractionConfig> {
        let mut builder = ExtractionConfig::builder();
        if let Some(threshold) = self.threshold {
            builder = builder.sufficiency_threshold(threshold);
        }
        if let Some(scale) = self.scale {
            builder = builder.raster_scale(scale);
        }
        if let Some(password) = &self.password {
            builder = builder.password(password.clone());
        }
        builder.build().context("invalid configuration")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config()?;
    let document = extract_file(&cli.input, &config)
        .await
        .with_context(|| format!("failed to extract '{}'", cli.input.display()))?;

    let rendered = match &document {
        _ if cli.json => serde_json::to_string_pretty(&document)
            .context("failed to serialise canonical document")?,
        CanonicalDocument::Text { content } => content.clone(),
        CanonicalDocument::ImagePages { pages } => {
            bail!(
                "document rasterised to {} page images; re-run with --json to emit them",
                pages.len()
            );
        }
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered.as_bytes())
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            eprintln!("Wrote {} bytes to {}", rendered.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}
