use rand::Rng;

use crate::{
    math::matrix::Matrix,
    network::network::{argmax, Network},
    loss::nll::NllLoss,
    optim::sgd::Sgd,
};

/// One epoch of per-sample SGD for a log-softmax classifier.
///
/// Each sample runs a training-mode forward pass (dropout drawn from `rng`),
/// then backpropagates the NLL gradient and updates every layer immediately.
/// `expected_outputs` are one-hot class vectors.  Returns the mean loss.
pub fn train_network<R: Rng + ?Sized>(
    network: &mut Network,
    inputs: &[Vec<f64>],
    expected_outputs: &[Vec<f64>],
    optimizer: &Sgd,
    rng: &mut R,
) -> f64 {
    assert_eq!(
        inputs.len(),
        expected_outputs.len(),
        "inputs and expected_outputs must have equal length"
    );
    if inputs.is_empty() {
        return 0.0;
    }

    let mut total_loss = 0.0;

    for (input, expected) in inputs.iter().zip(expected_outputs.iter()) {
        let output = network.forward_train(input.clone(), rng);

        total_loss += NllLoss::loss(&output, expected);

        // Initial delta: ∂L/∂z at the output logits
        let error = NllLoss::derivative(&output, expected);
        let mut delta = Matrix::row(error);

        // Backward pass
        for i in (0..network.layers.len()).rev() {
            let input_for_layer = if i == 0 {
                Matrix::row(input.clone())
            } else {
                network.layers[i - 1].neurons.clone()
            };

            // Borrow-checker ordering: compute gradients → compute next delta → apply step
            let (w_grad, b_grad) = network.layers[i].compute_gradients(delta.clone(), &input_for_layer);

            if i > 0 {
                // Propagate δ_i through weights to get ∂L/∂a_{i-1}
                delta = b_grad.clone() * network.layers[i].weights.transpose();
            }

            optimizer.step(&mut network.layers[i], w_grad, b_grad);
        }
    }

    total_loss / inputs.len() as f64
}

/// Fraction of samples whose most probable class matches the one-hot label;
/// 0.0 for no samples.  Runs in eval mode (no dropout).
pub fn accuracy(network: &mut Network, inputs: &[Vec<f64>], labels: &[Vec<f64>]) -> f64 {
    let n = inputs.len();
    if n == 0 {
        return 0.0;
    }
    let correct = inputs.iter().zip(labels.iter())
        .filter(|(input, label)| network.predict_class((*input).clone()) == argmax(label))
        .count();
    correct as f64 / n as f64
}
