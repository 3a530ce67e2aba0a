// src/extractors/window.rs

/// Marks the first line of the transaction table; the same phrase identifies
/// the one line item that is booked as a credit.
pub const DEFAULT_START_MARKER: &str = "BONIFICACION ACUERDOS GLOBALES";
/// Marks the line just past the transaction table.
pub const DEFAULT_END_MARKER: &str = "PAGO MINIMO";

/// The pair of phrases bounding the transaction table on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_MARKER.to_string(),
            end: DEFAULT_END_MARKER.to_string(),
        }
    }
}

/// Lines of the page between the start marker (inclusive) and the end marker (exclusive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window<'a> {
    pub start: usize,
    pub end: usize,
    pub start_found: bool,
    pub end_found: bool,
    pub lines: &'a [String],
}

/// Selects the transaction table out of the page lines.
///
/// Every line is scanned and the *last* match of each marker wins. A marker
/// that never matches leaves its bound at 0. When `start >= end` the window
/// is empty. Neither case is corrected here, only reported.
pub fn select_window<'a>(lines: &'a [String], markers: &Markers) -> Window<'a> {
    let mut start = 0;
    let mut end = 0;
    let mut start_found = false;
    let mut end_found = false;

    for (line_nb, line) in lines.iter().enumerate() {
        if line.contains(&markers.start) {
            start = line_nb;
            start_found = true;
        }
        if line.contains(&markers.end) {
            end = line_nb;
            end_found = true;
        }
    }

    if !start_found {
        tracing::warn!("Start marker '{}' not found, window starts at line 0", markers.start);
    }
    if !end_found {
        tracing::warn!("End marker '{}' not found, window ends at line 0", markers.end);
    }
    if start >= end {
        tracing::warn!("Degenerate window: start line {} is not before end line {}", start, end);
    }

    let window = lines.get(start..end).unwrap_or(&[]);
    tracing::debug!("Selected window [{}, {}) with {} line(s)", start, end, window.len());

    Window {
        start,
        end,
        start_found,
        end_found,
        lines: window,
    }
}
