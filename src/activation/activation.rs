use serde::{Serialize, Deserialize};
use std::f64::consts::E;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActivationFunction {
    Sigmoid,
    ReLU,
    Identity,
    /// Softmax is vector-valued; `Layer::feed_from()` applies it to the whole
    /// pre-activation row, so the element-wise `function()` is never used.
    Softmax,
    /// Log of the softmax, applied at layer level like `Softmax`.
    LogSoftmax,
}

impl ActivationFunction {
    /// Element-wise activation.  Vector-valued variants return `x` unchanged;
    /// call `apply()` to activate a whole row.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Identity => x,
            ActivationFunction::Softmax | ActivationFunction::LogSoftmax => x,
        }
    }

    /// Element-wise derivative of the activation.
    ///
    /// `Softmax` and `LogSoftmax` are always paired with a loss whose gradient
    /// is already taken w.r.t. the logits (`predicted - expected`), so they
    /// pass the delta through unchanged.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            },
            ActivationFunction::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Identity => 1.0,
            ActivationFunction::Softmax | ActivationFunction::LogSoftmax => 1.0,
        }
    }

    /// Activates a full pre-activation row.
    pub fn apply(&self, z: &[f64]) -> Vec<f64> {
        match self {
            ActivationFunction::Softmax => softmax(z),
            ActivationFunction::LogSoftmax => log_softmax(z),
            _ => z.iter().map(|&x| self.function(x)).collect(),
        }
    }
}

/// Perceptron threshold: 1 when `t >= 0`, otherwise 0.
pub fn step_function(t: f64) -> u8 {
    if t >= 0.0 { 1 } else { 0 }
}

/// Turns a list of scores into probabilities: `exp(x_i) / sum_j exp(x_j)`.
///
/// The maximum is subtracted before exponentiating; the ratio is unchanged
/// but large scores no longer overflow.
pub fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|&x| (x - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// `ln(softmax(x))`, computed as `x_i - max - ln(sum_j exp(x_j - max))`.
pub fn log_softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let log_sum = scores.iter().map(|&x| (x - max).exp()).sum::<f64>().ln();
    scores.iter().map(|&x| x - max - log_sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn softmax_matches_exponential_ratio() {
        let p = softmax(&[5.0, 6.0, 7.0]);
        let sum: f64 = [5.0f64, 6.0, 7.0].iter().map(|x| x.exp()).sum();
        assert_relative_eq!(p[0], 5.0f64.exp() / sum, epsilon = 1e-12);
        assert_relative_eq!(p[1], 6.0f64.exp() / sum, epsilon = 1e-12);
        assert_relative_eq!(p[2], 7.0f64.exp() / sum, epsilon = 1e-12);
        assert_relative_eq!(p.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn softmax_handles_negative_and_large_scores() {
        let p = softmax(&[-1000.0, 1000.0]);
        assert_relative_eq!(p[0], 0.0);
        assert_relative_eq!(p[1], 1.0);
        assert!(softmax(&[]).is_empty());
    }

    #[test]
    fn log_softmax_is_log_of_softmax() {
        let z = [0.3, -1.2, 2.5, 0.0];
        let p = softmax(&z);
        for (lp, p) in log_softmax(&z).iter().zip(p.iter()) {
            assert_relative_eq!(*lp, p.ln(), epsilon = 1e-12);
        }
    }

    #[test]
    fn step_function_closes_on_zero() {
        assert_eq!(step_function(0.0), 1);
        assert_eq!(step_function(-0.0), 1);
        assert_eq!(step_function(-1e-12), 0);
        assert_eq!(step_function(3.0), 1);
    }

    #[test]
    fn relu_and_derivative() {
        let relu = ActivationFunction::ReLU;
        assert_eq!(relu.apply(&[-2.0, 0.0, 1.5]), vec![0.0, 0.0, 1.5]);
        assert_eq!(relu.derivative(-0.5), 0.0);
        assert_eq!(relu.derivative(0.5), 1.0);
    }
}
