/// Cross-entropy losses: the binary form over independent event
/// probabilities and the categorical form for a Softmax output layer.
pub struct CrossEntropyLoss;

/// Small epsilon added inside log() to prevent log(0) = -inf.
const EPS: f64 = 1e-12;

impl CrossEntropyLoss {
    /// Binary cross-entropy summed over events:
    ///   CE = -sum(y[i] * ln(p[i]) + (1 - y[i]) * ln(1 - p[i]))
    ///
    /// `labels` — 1.0 if the event happened, 0.0 otherwise
    /// `probs`  — the model's probability of each event
    ///
    /// A better-fitting model has lower cross-entropy.  No epsilon is applied:
    /// a certain prediction (`p = 0` or `p = 1`) that turns out wrong yields
    /// `+inf`.
    ///
    /// # Panics
    /// Panics if `labels` and `probs` differ in length.
    pub fn binary(labels: &[f64], probs: &[f64]) -> f64 {
        assert_eq!(labels.len(), probs.len(), "labels and probs must have equal length");
        -labels.iter().zip(probs.iter())
            .map(|(y, p)| {
                // Skip a zero-weighted term so that 0 * ln(0) does not poison the sum.
                let pos = if *y == 0.0 { 0.0 } else { y * p.ln() };
                let neg = if *y == 1.0 { 0.0 } else { (1.0 - y) * (1.0 - p).ln() };
                pos + neg
            })
            .sum::<f64>()
    }

    /// Computes the scalar categorical cross-entropy loss:
    ///   L = -sum(expected[i] * log(predicted[i] + eps))
    ///
    /// `predicted` — softmax probabilities, shape [n_classes]
    /// `expected`  — one-hot (or soft) target distribution, shape [n_classes]
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(p, e)| -e * (p + EPS).ln())
            .sum()
    }

    /// Gradient of the combined Softmax + cross-entropy w.r.t. the pre-softmax
    /// logits:
    ///   ∂L/∂z_i = predicted[i] - expected[i]
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(p, e)| p - e)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn binary_matches_formula() {
        let y = [1.0, 0.0, 1.0, 1.0];
        let p = [0.4, 0.6, 0.1, 0.5];
        let expected = -(0.4f64.ln() + 0.4f64.ln() + 0.1f64.ln() + 0.5f64.ln());
        assert_relative_eq!(CrossEntropyLoss::binary(&y, &p), expected, epsilon = 1e-12);
        assert_relative_eq!(CrossEntropyLoss::binary(&y, &p), 4.8283137373, epsilon = 1e-9);
    }

    #[test]
    fn binary_prefers_better_fit() {
        let y = [1.0, 1.0, 0.0];
        let good = CrossEntropyLoss::binary(&y, &[0.8, 0.7, 0.1]);
        let bad = CrossEntropyLoss::binary(&y, &[0.2, 0.4, 0.5]);
        assert!(good < bad);
    }

    #[test]
    fn binary_certain_predictions() {
        assert_eq!(CrossEntropyLoss::binary(&[1.0, 0.0], &[1.0, 0.0]), 0.0);
        assert!(CrossEntropyLoss::binary(&[1.0], &[0.0]).is_infinite());
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn binary_rejects_length_mismatch() {
        CrossEntropyLoss::binary(&[1.0, 0.0, 1.0], &[0.4, 0.6]);
    }

    #[test]
    fn categorical_loss_and_gradient() {
        let p = [0.7, 0.2, 0.1];
        let y = [1.0, 0.0, 0.0];
        assert_relative_eq!(CrossEntropyLoss::loss(&p, &y), -(0.7f64 + EPS).ln(), epsilon = 1e-12);
        let grad = CrossEntropyLoss::derivative(&p, &y);
        assert_relative_eq!(grad[0], -0.3, epsilon = 1e-12);
        assert_relative_eq!(grad[1], 0.2, epsilon = 1e-12);
    }
}
