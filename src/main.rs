// src/main.rs
mod extractors;
mod source;
mod storage;
mod utils;

use clap::Parser;
use extractors::window::{Markers, DEFAULT_END_MARKER, DEFAULT_START_MARKER};
use extractors::StatementExtractor;
use std::path::{Path, PathBuf};
use storage::{RunSummary, StorageManager};
use utils::AppError;

const DEFAULT_RAW_FILE: &str = "src/data/raw/eresumen_visa_202211.pdf";
const DEFAULT_OUTPUT_DIR: &str = "src/data/processed";

/// Extracts the transaction table from a card statement PDF into CSV and XLSX
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Statement PDF to read (only the first page is used)
    #[arg(default_value = DEFAULT_RAW_FILE)]
    raw_file_path: PathBuf,

    /// Output directory for the processed files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Phrase on the first line of the transaction table
    #[arg(long, default_value = DEFAULT_START_MARKER)]
    start_marker: String,

    /// Phrase on the line just after the transaction table
    #[arg(long, default_value = DEFAULT_END_MARKER)]
    end_marker: String,

    /// Debug mode - save the numbered page text and a run summary
    #[arg(short, long)]
    debug: bool,
}

/// `statements/eresumen_visa_202211.pdf` -> `eresumen_visa_202211`
fn output_name(raw_file_path: &Path) -> Result<String, AppError> {
    raw_file_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| AppError::Config(format!("Cannot derive an output name from {}", raw_file_path.display())))
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    let name = output_name(&args.raw_file_path)?;

    // 3. Read the first page (fatal on failure)
    let lines = source::read_first_page_lines(&args.raw_file_path)?;

    // 4. Initialize storage; the output directory is created if missing
    let storage = StorageManager::new(&args.output_dir)?;

    // 5. Extract transactions (fatal on any malformed date)
    let extractor = StatementExtractor::new(Markers {
        start: args.start_marker.clone(),
        end: args.end_marker.clone(),
    });
    let statement = extractor.extract(&lines)?;
    tracing::info!("Extracted {} transaction(s)", statement.transactions.len());

    if args.debug {
        let dumped = storage.debug_dir().and_then(|dir| {
            let path = dir.join(format!("{}_page1.txt", name));
            utils::text_debug::save_debug_lines(
                &lines,
                extractor.markers(),
                statement.window_start,
                statement.window_end,
                &path,
            )
        });
        if let Err(e) = dumped {
            tracing::warn!("Failed to save annotated page text: {}", e);
        }
    }

    // 6. Export; failures here are logged and do not abort the run
    let report = storage.export_all(&name, &statement.transactions);

    if args.debug {
        let summary = RunSummary {
            input: args.raw_file_path.display().to_string(),
            window_start: statement.window_start,
            window_end: statement.window_end,
            window_lines: statement.window_len,
            record_count: statement.transactions.len(),
            files_written: report.written().iter().map(|p| p.display().to_string()).collect(),
            extraction_timestamp: chrono::Utc::now().to_rfc3339(),
            transactions: &statement.transactions,
        };
        if let Err(e) = storage.save_run_summary(&name, &summary) {
            tracing::warn!("Failed to save run summary: {}", e);
        }
    }

    tracing::info!(
        "Processing finished. {} of 2 export(s) written to {}",
        report.written().len(),
        storage.base_dir().display()
    );

    Ok(())
}
