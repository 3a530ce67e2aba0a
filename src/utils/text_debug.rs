// src/utils/text_debug.rs
use crate::extractors::window::Markers;
use crate::utils::error::StorageError;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Renders the page lines numbered, flagging marker hits and the selected window.
///
/// Gutter legend: `S` start marker, `E` end marker, `>` inside the window.
pub fn annotate_lines(lines: &[String], markers: &Markers, window_start: usize, window_end: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# window [{}, {})", window_start, window_end);

    for (line_nb, line) in lines.iter().enumerate() {
        let start_flag = if line.contains(&markers.start) { 'S' } else { ' ' };
        let end_flag = if line.contains(&markers.end) { 'E' } else { ' ' };
        let in_window = if (window_start..window_end).contains(&line_nb) { '>' } else { ' ' };
        let _ = writeln!(out, "{:>4} {}{}{} | {}", line_nb, start_flag, end_flag, in_window, line);
    }

    out
}

/// Writes the annotated page dump to `path`.
pub fn save_debug_lines(
    lines: &[String],
    markers: &Markers,
    window_start: usize,
    window_end: usize,
    path: &Path,
) -> Result<(), StorageError> {
    fs::write(path, annotate_lines(lines, markers, window_start, window_end))?;
    tracing::info!("Saved annotated page text to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotate_lines() {
        let lines: Vec<String> = ["HEADER", "BONIFICACION ACUERDOS GLOBALES", "01.01.23 X 10,00", "PAGO MINIMO"]
            .iter()
            .map(|l| l.to_string())
            .collect();

        let dump = annotate_lines(&lines, &Markers::default(), 1, 3);
        let rows: Vec<&str> = dump.lines().collect();
        assert_eq!(rows[0], "# window [1, 3)");
        assert_eq!(rows[1], "   0     | HEADER");
        assert_eq!(rows[2], "   1 S > | BONIFICACION ACUERDOS GLOBALES");
        assert_eq!(rows[3], "   2   > | 01.01.23 X 10,00");
        assert_eq!(rows[4], "   3  E  | PAGO MINIMO");
    }

    #[test]
    fn test_save_debug_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page1.txt");
        let lines = vec!["PAGO MINIMO".to_string()];

        save_debug_lines(&lines, &Markers::default(), 0, 0, &path).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("PAGO MINIMO"));
    }
}
