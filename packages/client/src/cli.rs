//! Command-line interface for the client.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::client::GrobidClient;
use crate::config::DEFAULT_BASE_URL;
use crate::error::{GrobidError, Result};
use crate::form::{File, Form};
use crate::json::save_json;
use crate::tei::parse_article;
use crate::types::Article;

/// GROBID client - Submit documents for analysis and parse TEI results.
#[derive(Parser)]
#[command(name = "grobid-client")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a document to a GROBID service and write the parsed result as JSON.
    Process {
        /// Path to the document to analyse (PDF)
        input: PathBuf,

        /// Base URL of the GROBID service
        #[arg(short, long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Output JSON file (default: print to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Run sentence segmentation
        #[arg(long)]
        segment_sentences: bool,

        /// Header consolidation level (0, 1 or 2)
        #[arg(long)]
        consolidate_header: Option<u8>,

        /// Citation consolidation level (0, 1 or 2)
        #[arg(long)]
        consolidate_citations: Option<u8>,

        /// Include raw citation strings in the result
        #[arg(long)]
        include_raw_citations: bool,

        /// Include raw affiliation strings in the result
        #[arg(long)]
        include_raw_affiliations: bool,

        /// Elements to annotate with PDF coordinates (e.g. "persName,figure")
        #[arg(long)]
        coordinates: Option<String>,
    },

    /// Parse a TEI XML file already on disk and write the result as JSON.
    Parse {
        /// Path to the TEI XML file
        input: PathBuf,

        /// Output JSON file (default: print to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            base_url,
            output,
            segment_sentences,
            consolidate_header,
            consolidate_citations,
            include_raw_citations,
            include_raw_affiliations,
            coordinates,
        } => {
            let mut form = Form::new(file_payload(&input)?);
            if segment_sentences {
                form = form.with_segment_sentences(true);
            }
            if let Some(level) = consolidate_header {
                form = form.with_consolidate_header(level);
            }
            if let Some(level) = consolidate_citations {
                form = form.with_consolidate_citations(level);
            }
            if include_raw_citations {
                form = form.with_include_raw_citations(true);
            }
            if include_raw_affiliations {
                form = form.with_include_raw_affiliations(true);
            }
            if let Some(elements) = coordinates {
                form = form.with_tei_coordinates(elements);
            }
            process_command(&base_url, form, output.as_deref())
        }
        Commands::Parse { input, output } => parse_command(&input, output.as_deref()),
    }
}

/// Build the file payload for a document on disk.
fn file_payload(input: &Path) -> Result<File> {
    let payload = fs::read(input)?;
    let mut file = File::new(payload);

    if let Some(name) = input.file_name().and_then(|n| n.to_str()) {
        file = file.with_file_name(name);
    }
    if input.extension().is_some_and(|ext| ext == "pdf") {
        file = file.with_mime_type("application/pdf");
    }

    Ok(file)
}

/// Execute the process command.
fn process_command(base_url: &str, form: Form, output: Option<&Path>) -> Result<()> {
    validate_output(output)?;

    let client = GrobidClient::new(base_url)?;

    println!(
        "{} document via {}",
        style("Processing").bold(),
        style(base_url).cyan()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Waiting for the GROBID service...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let article = match client.fetch_article(form) {
        Ok(article) => article,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    report(&article, output)
}

/// Execute the parse command on a local TEI file.
fn parse_command(input: &Path, output: Option<&Path>) -> Result<()> {
    validate_output(output)?;

    let xml = fs::read_to_string(input)?;
    let article = parse_article(&xml)?;

    report(&article, output)
}

/// Print a summary and write or print the JSON result.
fn report(article: &Article, output: Option<&Path>) -> Result<()> {
    println!(
        "  Title: {}",
        style(article.title.as_deref().unwrap_or("(untitled)")).green()
    );
    println!("  Authors: {}", article.authors.len());
    println!("  Sections: {}", article.sections.len());
    println!("  References: {}", article.bibliography.len());
    println!("  Figures: {}", article.figures.len());
    println!();

    match output {
        Some(path) => {
            save_json(article, path)?;
            println!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => {
            println!("{}", crate::json::to_json_pretty(article)?);
        }
    }

    Ok(())
}

/// Validate the output location before doing any network or parse work.
fn validate_output(output: Option<&Path>) -> Result<()> {
    if let Some(path) = output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                return Err(GrobidError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Output directory does not exist: {}", parent.display()),
                )));
            }
        }
    }
    Ok(())
}
