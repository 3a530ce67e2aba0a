// src/extractors/statement.rs
use crate::extractors::dedup::collapse_doubled_lines;
use crate::extractors::records::{extract_raw_records, normalize_records, Transaction};
use crate::extractors::window::{select_window, Markers};
use crate::utils::error::ExtractError;

/// Result of running the extractor over one page.
#[derive(Debug, Clone)]
pub struct ExtractedStatement {
    pub window_start: usize,
    pub window_end: usize,
    pub window_len: usize,
    pub transactions: Vec<Transaction>,
}

/// Turns the text lines of a statement page into transactions.
pub struct StatementExtractor {
    markers: Markers,
}

impl StatementExtractor {
    pub fn new(markers: Markers) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Window selection, line deduplication, record parsing and normalization, in that order.
    pub fn extract(&self, lines: &[String]) -> Result<ExtractedStatement, ExtractError> {
        let window = select_window(lines, &self.markers);
        tracing::info!("Transaction window spans lines [{}, {})", window.start, window.end);

        let deduplicated = collapse_doubled_lines(window.lines);
        let raw = extract_raw_records(&deduplicated);
        tracing::info!("Parsed {} record(s) from {} window line(s)", raw.len(), deduplicated.len());

        // The start marker doubles as the credit category
        let transactions = normalize_records(raw, &self.markers.start)?;

        Ok(ExtractedStatement {
            window_start: window.start,
            window_end: window.end,
            window_len: window.lines.len(),
            transactions,
        })
    }
}

impl Default for StatementExtractor {
    fn default() -> Self {
        Self::new(Markers::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_end_to_end_window() {
        let page = lines(&[
            "RESUMEN DE CUENTA VISA",
            "BONIFICACION ACUERDOS GLOBALES 01.01.23 ENERO 200,00",
            "no date here",
            "02.01.23 COMPRA TIENDA 1.000,00 50,00",
            "...",
            "TOTAL PAGO MINIMO 1.234,00",
        ]);

        let statement = StatementExtractor::default().extract(&page).unwrap();
        assert_eq!((statement.window_start, statement.window_end), (1, 5));
        assert_eq!(statement.window_len, 4);
        assert_eq!(statement.transactions.len(), 2);

        // the marker precedes the date, so it is not part of the description
        let first = &statement.transactions[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(first.description, "ENERO");
        assert_eq!(first.amount, -200.0);

        let second = &statement.transactions[1];
        assert_eq!(second.description, "COMPRA TIENDA 1.000,00");
        assert_eq!(second.amount, -50.0);
    }

    #[test]
    fn test_credit_line_keeps_sign() {
        let page = lines(&[
            "BONIFICACION ACUERDOS GLOBALES",
            "05.01.23 BONIFICACION ACUERDOS GLOBALES X 100,00",
            "06.01.23 SUPERMERCADO 50,00",
            "PAGO MINIMO",
        ]);

        // the last start marker is the credit line itself, so the window opens there
        let statement = StatementExtractor::default().extract(&page).unwrap();
        assert_eq!(statement.window_start, 1);
        let amounts: Vec<f64> = statement.transactions.iter().map(|t| t.amount).collect();
        assert_eq!(amounts, vec![100.0, -50.0]);
    }

    #[test]
    fn test_doubled_lines_are_collapsed_before_parsing() {
        let page = lines(&[
            "BONIFICACION ACUERDOS GLOBALES",
            "07.01.23 FARMACIA 30,0007.01.23 FARMACIA 30,00",
            "PAGO MINIMO",
        ]);

        let statement = StatementExtractor::default().extract(&page).unwrap();
        assert_eq!(statement.transactions.len(), 1);
        assert_eq!(statement.transactions[0].description, "FARMACIA");
        assert_eq!(statement.transactions[0].amount, -30.0);
    }

    #[test]
    fn test_invalid_date_aborts_extraction() {
        let page = lines(&["BONIFICACION ACUERDOS GLOBALES", "99.99.23 ROTO 10,00", "PAGO MINIMO"]);
        assert!(StatementExtractor::default().extract(&page).is_err());
    }

    #[test]
    fn test_missing_markers_yield_no_records() {
        let page = lines(&["01.01.23 COMPRA 10,00", "02.01.23 COMPRA 20,00"]);
        let statement = StatementExtractor::default().extract(&page).unwrap();
        assert!(statement.transactions.is_empty());
    }
}
