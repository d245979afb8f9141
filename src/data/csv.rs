/// CSV loading for 2-D labelled point data.
///
/// Supported format:
/// - UTF-8, comma-separated, one `x1,x2,label` row per sample
/// - Optional header row (auto-detected: first row is a header if it contains
///   any non-numeric, non-empty cell)
/// - Double-quoted fields with embedded commas are handled correctly
/// - Labels may be written as integers or floats (`1`, `1.0`) but must be 0 or 1

use crate::data::dataset::{Dataset, Point};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parses CSV text into a `Dataset`.  Row numbers in errors are 1-based and
/// count data rows only.
pub fn parse_points_csv(text: &str) -> Result<Dataset> {
    let mut lines = text.lines().peekable();

    if let Some(first) = lines.peek() {
        if is_header(first) {
            lines.next();
        }
    }

    let mut points = Vec::new();
    let mut labels = Vec::new();
    let mut row = 0;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        row += 1;
        let cells = parse_csv_row(line);
        if cells.len() != 3 {
            return Err(Error::Csv {
                row,
                message: format!("expected 3 columns (x1, x2, label), got {}", cells.len()),
            });
        }

        let x1 = parse_float(&cells[0], row)?;
        let x2 = parse_float(&cells[1], row)?;
        let label = match parse_float(&cells[2], row)? {
            y if y == 0.0 => 0,
            y if y == 1.0 => 1,
            y => {
                return Err(Error::Csv {
                    row,
                    message: format!("label {} is not 0 or 1", y),
                })
            }
        };

        points.push(Point::new(x1, x2));
        labels.push(label);
    }

    Dataset::new(points, labels)
}

/// Reads and parses a CSV file from disk.
pub fn load_points_csv(path: &str) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)?;
    parse_points_csv(&text)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Returns `true` if the row looks like a header (any cell non-numeric).
fn is_header(line: &str) -> bool {
    let cells = parse_csv_row(line);
    cells.iter().any(|c| {
        let t = c.trim();
        !t.is_empty() && t.parse::<f64>().is_err()
    })
}

/// Parses a single CSV row, handling double-quoted fields.
fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // Escaped quote inside quoted field.
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Parses one cell as a finite `f64`; `NaN` and `inf` are rejected.
fn parse_float(cell: &str, row: usize) -> Result<f64> {
    match cell.trim().parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(x),
        _ => Err(Error::Csv {
            row,
            message: format!("'{}' is not a valid finite number", cell),
        }),
    }
}
