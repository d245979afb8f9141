use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};

/// A 2-D sample `(x1, x2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x1: f64,
    pub x2: f64,
}

impl Point {
    pub fn new(x1: f64, x2: f64) -> Point {
        Point { x1, x2 }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x1, x2): (f64, f64)) -> Point {
        Point { x1, x2 }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x1, x2]: [f64; 2]) -> Point {
        Point { x1, x2 }
    }
}

/// Points with parallel binary labels.
///
/// Construction validates that both sequences have the same length, that
/// every coordinate is finite and that every label is 0 or 1; the fields stay
/// private so the invariant holds for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Dataset {
    points: Vec<Point>,
    labels: Vec<u8>,
}

impl Dataset {
    pub fn new(points: Vec<Point>, labels: Vec<u8>) -> Result<Dataset> {
        if points.len() != labels.len() {
            return Err(Error::InvalidInput(format!(
                "{} points but {} labels",
                points.len(),
                labels.len()
            )));
        }
        if let Some(idx) = points.iter().position(|p| !(p.x1.is_finite() && p.x2.is_finite())) {
            return Err(Error::InvalidInput(format!(
                "point ({}, {}) at index {} is not finite",
                points[idx].x1, points[idx].x2, idx
            )));
        }
        if let Some(idx) = labels.iter().position(|&y| y > 1) {
            return Err(Error::InvalidInput(format!(
                "label {} at index {} is not 0 or 1",
                labels[idx], idx
            )));
        }
        Ok(Dataset { points, labels })
    }

    /// Builds a dataset from raw coordinate rows, each of which must hold
    /// exactly two values.
    pub fn from_rows(rows: &[Vec<f64>], labels: Vec<u8>) -> Result<Dataset> {
        let points = rows.iter()
            .enumerate()
            .map(|(idx, row)| match row.as_slice() {
                [x1, x2] => Ok(Point::new(*x1, *x2)),
                _ => Err(Error::InvalidInput(format!(
                    "row {} has {} coordinates, expected 2",
                    idx,
                    row.len()
                ))),
            })
            .collect::<Result<Vec<Point>>>()?;
        Dataset::new(points, labels)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(point, label)` pairs in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (&Point, u8)> + '_ {
        self.points.iter().zip(self.labels.iter().copied())
    }

    /// Largest x1 coordinate, or `None` for an empty dataset.
    pub fn max_x1(&self) -> Option<f64> {
        self.points.iter().map(|p| p.x1).reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_length_mismatch() {
        let points = vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(3.0, 3.0)];
        let err = Dataset::new(points, vec![0, 1]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn rejects_non_binary_label() {
        let err = Dataset::new(vec![Point::new(0.0, 0.0)], vec![2]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        for bad in [Point::new(f64::NAN, 1.0), Point::new(1.0, f64::INFINITY), Point::new(f64::NEG_INFINITY, 0.0)] {
            let err = Dataset::new(vec![Point::new(0.0, 0.0), bad], vec![0, 1]).unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)));
        }
    }

    #[test]
    fn from_rows_checks_width() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]];
        assert!(Dataset::from_rows(&rows, vec![0, 1]).is_err());

        let ok = Dataset::from_rows(&rows[..1], vec![1]).unwrap();
        assert_eq!(ok.points(), &[Point::new(1.0, 2.0)]);
    }

    #[test]
    fn max_x1_over_points() {
        let data = Dataset::new(
            vec![Point::new(0.5, 9.0), Point::new(-2.0, 1.0), Point::new(0.75, 0.0)],
            vec![0, 1, 1],
        ).unwrap();
        assert_eq!(data.max_x1(), Some(0.75));
        assert_eq!(Dataset::default().max_x1(), None);
    }
}
