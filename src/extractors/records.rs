// src/extractors/records.rs

// --- Imports ---
use crate::extractors::patterns::{choose_amount, find_amounts, find_date};
use crate::utils::error::ExtractError;
use chrono::NaiveDate;
use serde::Serialize;

// --- Data Structures ---

/// Tokens pulled from one statement line, before any normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub date_token: String,   // e.g., "15.03.23"
    pub description: String,  // Text between the date and the chosen amount
    pub amount_token: String, // e.g., "1.500,00"
}

/// One row of the exported dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
}

/// Parses one line into its raw tokens.
///
/// Returns `None` when the line has no date token or no amount token.
pub fn parse_line(line: &str) -> Option<RawRecord> {
    let date = find_date(line)?;
    let amounts = find_amounts(line);
    let amount = choose_amount(&amounts)?;

    // Anchored on the rightmost occurrence of the amount text, even if the
    // same text also appears earlier in the line.
    let amount_start = line.rfind(amount)?;
    let description = line
        .get(date.end()..amount_start)
        .unwrap_or("")
        .trim();

    Some(RawRecord {
        date_token: date.as_str().to_string(),
        description: description.to_string(),
        amount_token: amount.to_string(),
    })
}

/// Parses every line, silently dropping those without a date and an amount.
pub fn extract_raw_records(lines: &[String]) -> Vec<RawRecord> {
    lines
        .iter()
        .filter_map(|line| {
            let record = parse_line(line);
            if record.is_none() {
                tracing::trace!("Skipping line without date/amount: '{}'", line);
            }
            record
        })
        .collect()
}

/// `15.03.23` -> 2023-03-15. Two-digit years follow the strptime pivot.
pub fn parse_statement_date(token: &str) -> Result<NaiveDate, ExtractError> {
    let normalized = token.replace(['.', '-'], "/");
    NaiveDate::parse_from_str(&normalized, "%d/%m/%y").map_err(|source| ExtractError::InvalidDate {
        token: token.to_string(),
        source,
    })
}

/// `1.234,56` -> 1234.56
pub fn parse_statement_amount(token: &str) -> Result<f64, ExtractError> {
    token
        .replace('.', "")
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| ExtractError::InvalidAmount(token.to_string()))
}

/// Credit lines keep their sign; everything else is a debit and is negated.
pub fn apply_sign(amount: f64, description: &str, credit_marker: &str) -> f64 {
    if description.to_lowercase().contains(&credit_marker.to_lowercase()) {
        amount
    } else {
        -amount
    }
}

/// Normalizes raw records into transactions.
///
/// Any date token that does not parse fails the whole batch.
pub fn normalize_records(raw: Vec<RawRecord>, credit_marker: &str) -> Result<Vec<Transaction>, ExtractError> {
    raw.into_iter()
        .map(|record| {
            let date = parse_statement_date(&record.date_token)?;
            let amount = parse_statement_amount(&record.amount_token)?;
            let amount = apply_sign(amount, &record.description, credit_marker);
            Ok(Transaction {
                date,
                description: record.description,
                amount,
            })
        })
        .collect()
}
