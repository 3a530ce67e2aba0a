// src/storage/mod.rs
use crate::extractors::records::Transaction;
use crate::utils::error::StorageError;
use chrono::Datelike;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Column headers shared by both export formats.
pub const COLUMNS: [&str; 3] = ["Fecha", "Descripcion", "Valores"];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const SHEET_NAME: &str = "Sheet1";

/// Which of the two exports made it to disk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub csv: Option<PathBuf>,
    pub xlsx: Option<PathBuf>,
}

impl ExportReport {
    pub fn written(&self) -> Vec<&Path> {
        self.csv.iter().chain(self.xlsx.iter()).map(PathBuf::as_path).collect()
    }
}

/// Run details dumped next to the debug page text.
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub input: String,
    pub window_start: usize,
    pub window_end: usize,
    pub window_lines: usize,
    pub record_count: usize,
    pub files_written: Vec<String>,
    pub extraction_timestamp: String,
    pub transactions: &'a [Transaction],
}

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager, creating the output directory if it doesn't exist
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
            tracing::debug!("Created output directory {}", base_path.display());
        }

        Ok(Self { base_dir: base_path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// `processed_<name>.csv`
    pub fn csv_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("processed_{}.csv", name))
    }

    /// `processed_<name>.xlsx`
    pub fn xlsx_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("processed_{}.xlsx", name))
    }

    /// Directory for `--debug` artifacts, created on demand.
    pub fn debug_dir(&self) -> Result<PathBuf, StorageError> {
        let dir = self.base_dir.join("debug");
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(StorageError::IoError)?;
        }
        Ok(dir)
    }

    /// Writes the dataset as UTF-8 (with BOM), `;`-separated CSV using `,` as decimal point.
    pub fn save_csv(&self, name: &str, transactions: &[Transaction]) -> Result<PathBuf, StorageError> {
        let file_path = self.csv_path(name);

        let mut file = fs::File::create(&file_path).map_err(StorageError::IoError)?;
        file.write_all(UTF8_BOM).map_err(StorageError::IoError)?;

        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file);

        writer.write_record(COLUMNS)?;
        for txn in transactions {
            writer.write_record([
                txn.date.format("%Y-%m-%d").to_string(),
                txn.description.clone(),
                format_decimal_comma(txn.amount),
            ])?;
        }
        writer.flush()?;

        tracing::info!("Saved {} row(s) to {}", transactions.len(), file_path.display());
        Ok(file_path)
    }

    /// Writes the dataset to a single-sheet workbook with native date and number cells.
    pub fn save_xlsx(&self, name: &str, transactions: &[Transaction]) -> Result<PathBuf, StorageError> {
        let file_path = self.xlsx_path(name);

        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let date_format = Format::new().set_num_format("yyyy-mm-dd");

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, title) in COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }

        for (idx, txn) in transactions.iter().enumerate() {
            let row = (idx + 1) as u32;
            let date = ExcelDateTime::from_ymd(txn.date.year() as u16, txn.date.month() as u8, txn.date.day() as u8)?;
            worksheet.write_datetime_with_format(row, 0, &date, &date_format)?;
            worksheet.write_string(row, 1, &txn.description)?;
            worksheet.write_number(row, 2, txn.amount)?;
        }

        workbook.save(&file_path)?;

        tracing::info!("Saved {} row(s) to {}", transactions.len(), file_path.display());
        Ok(file_path)
    }

    /// Runs both exports. A failure is logged and does not stop the other export.
    pub fn export_all(&self, name: &str, transactions: &[Transaction]) -> ExportReport {
        let mut report = ExportReport::default();

        match self.save_csv(name, transactions) {
            Ok(path) => report.csv = Some(path),
            Err(e) => tracing::error!("Failed to export CSV: {}", e),
        }

        match self.save_xlsx(name, transactions) {
            Ok(path) => report.xlsx = Some(path),
            Err(e) => tracing::error!("Failed to export spreadsheet: {}", e),
        }

        report
    }

    /// Saves the run summary as pretty JSON in the debug directory.
    pub fn save_run_summary(&self, name: &str, summary: &RunSummary<'_>) -> Result<PathBuf, StorageError> {
        let file_path = self.debug_dir()?.join(format!("{}_run.json", name));

        let summary_str = serde_json::to_string_pretty(summary)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, summary_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved run summary to {}", file_path.display());
        Ok(file_path)
    }
}

/// `-1500.0` -> `-1500,00`
fn format_decimal_comma(value: f64) -> String {
    format!("{:.2}", value).replace('.', ",")
}
