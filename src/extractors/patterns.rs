// src/extractors/patterns.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::{Match, Regex};

/// Literal amount printed when the running balance column reads zero.
pub const ZERO_AMOUNT: &str = "0,00";

// --- Regex Patterns (Lazy Static) ---
// DD.MM.YY, also tolerating '/' and '-' as separators
static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{2}[./-]\d{2}[./-]\d{2}").expect("Failed to compile DATE_RE")
});

// 1.234,56 | 56,00 | 1234,56
// Unsigned; amounts glued to surrounding text still match whole.
static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\d{1,3}(?:\.\d{3})+|\d+),\d{2}").expect("Failed to compile AMOUNT_RE")
});

/// First date token on the line, if any.
pub fn find_date(line: &str) -> Option<Match<'_>> {
    DATE_RE.find(line)
}

/// Every amount token on the line, left to right.
pub fn find_amounts(line: &str) -> Vec<&str> {
    AMOUNT_RE.find_iter(line).map(|m| m.as_str()).collect()
}

/// Picks the transaction amount out of the line's amount tokens.
///
/// The last token is normally the amount. When it is the zero balance the
/// amount is the token before it. A lone `0,00` is returned as is.
pub fn choose_amount<'a>(amounts: &[&'a str]) -> Option<&'a str> {
    match amounts {
        [] => None,
        [.., previous, last] if *last == ZERO_AMOUNT => Some(*previous),
        [.., last] => Some(*last),
    }
}
