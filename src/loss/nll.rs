/// Negative log-likelihood over log-probabilities, for a LogSoftmax output.
pub struct NllLoss;

impl NllLoss {
    /// L = -sum(expected[i] * log_probs[i])
    pub fn loss(log_probs: &[f64], expected: &[f64]) -> f64 {
        -log_probs.iter().zip(expected.iter())
            .map(|(lp, e)| e * lp)
            .sum::<f64>()
    }

    /// Gradient w.r.t. the logits feeding the LogSoftmax:
    ///   ∂L/∂z_i = exp(log_probs[i]) - expected[i]
    pub fn derivative(log_probs: &[f64], expected: &[f64]) -> Vec<f64> {
        log_probs.iter().zip(expected.iter())
            .map(|(lp, e)| lp.exp() - e)
            .collect()
    }
}
