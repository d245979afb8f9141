use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::activation::step_function;
use crate::data::dataset::{Dataset, Point};
use crate::perceptron::boundary::BoundaryLine;

/// Classifies `point` as 1 when `w1*x1 + w2*x2 + b >= 0`, otherwise 0.
pub fn predict(point: &Point, weights: &[f64; 2], bias: f64) -> u8 {
    step_function(weights[0] * point.x1 + weights[1] * point.x2 + bias)
}

/// A linear binary classifier over 2-D points, trained with the perceptron
/// rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Perceptron {
    pub weights: [f64; 2],
    pub bias: f64,
}

impl Perceptron {
    pub fn new(weights: [f64; 2], bias: f64) -> Perceptron {
        Perceptron { weights, bias }
    }

    /// Random starting point for training.
    ///
    /// Draws `w1`, `w2` and then the bias from U[0, 1), in that order, and
    /// shifts the bias by the dataset's largest x1 so the first boundary sits
    /// near the right edge of the data.  An empty dataset applies no shift.
    pub fn initialize<R: Rng + ?Sized>(dataset: &Dataset, rng: &mut R) -> Perceptron {
        let w1: f64 = rng.gen();
        let w2: f64 = rng.gen();
        let bias = rng.gen::<f64>() + dataset.max_x1().unwrap_or(0.0);
        Perceptron::new([w1, w2], bias)
    }

    pub fn predict(&self, point: &Point) -> u8 {
        predict(point, &self.weights, self.bias)
    }

    /// One pass of the perceptron rule over `dataset`, in order.
    ///
    /// A positive point predicted 0 pulls the boundary toward it
    /// (`w += lr * p`, `b += lr`); a negative point predicted 1 pushes it away.
    /// Each correction is visible to the samples after it in the same pass.
    /// Returns the number of corrections made.
    pub fn step(&mut self, dataset: &Dataset, learn_rate: f64) -> usize {
        let mut corrections = 0;

        for (point, label) in dataset.iter() {
            let y_hat = self.predict(point);
            if y_hat == label {
                continue;
            }

            let sign = if y_hat == 0 { 1.0 } else { -1.0 };
            self.weights[0] += sign * learn_rate * point.x1;
            self.weights[1] += sign * learn_rate * point.x2;
            self.bias += sign * learn_rate;
            corrections += 1;
        }

        corrections
    }

    pub fn boundary_line(&self) -> BoundaryLine {
        BoundaryLine::from_params(self.weights, self.bias)
    }

    /// Fraction of `dataset` classified correctly; 0.0 for an empty dataset.
    pub fn accuracy(&self, dataset: &Dataset) -> f64 {
        if dataset.is_empty() {
            return 0.0;
        }
        let correct = dataset.iter()
            .filter(|(point, label)| self.predict(point) == *label)
            .count();
        correct as f64 / dataset.len() as f64
    }
}
