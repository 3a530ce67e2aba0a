// src/extractors/dedup.rs

/// Collapses a line the PDF text layer emitted twice back-to-back.
///
/// The line is split at its character midpoint and both halves are trimmed.
/// Equal halves yield the (trimmed) first half; anything else is returned
/// untouched, surrounding whitespace included.
pub fn collapse_doubled_line(line: &str) -> String {
    let midpoint = line.chars().count() / 2;
    let split_at = line
        .char_indices()
        .nth(midpoint)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len());

    let (left, right) = line.split_at(split_at);
    let (left, right) = (left.trim(), right.trim());

    if left == right {
        left.to_string()
    } else {
        line.to_string()
    }
}

/// Applies [`collapse_doubled_line`] to every line, preserving order.
pub fn collapse_doubled_lines(lines: &[String]) -> Vec<String> {
    lines.iter().map(|line| collapse_doubled_line(line)).collect()
}
