use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer{
    pub size: usize,
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: ActivationFunction,
    /// Probability of zeroing each output during training.  0.0 disables dropout.
    #[serde(default)]
    pub dropout: f64,
    #[serde(skip)]
    pub neurons: Matrix,
    #[serde(skip)]
    pre_neurons: Matrix,  // pre-activation values (z = Wx + b) needed for correct derivative
    #[serde(skip)]
    mask: Option<Matrix>, // inverted-dropout scale per output; None in eval mode
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        dropout: f64,
        rng: &mut R,
    ) -> Layer {
        let weights = Matrix::fan_in_uniform(input_size, size, input_size, rng);
        let biases = Matrix::fan_in_uniform(1, size, input_size, rng);

        Layer {
            size,
            weights,
            biases,
            activator: activation,
            dropout,
            neurons: Matrix::zeros(1, size),
            pre_neurons: Matrix::zeros(1, size),
            mask: None,
        }
    }

    /// Eval-mode forward pass: no dropout.
    pub fn feed_from(&mut self, input: Vec<f64>) -> Vec<f64> {
        self.mask = None;
        self.activate(input)
    }

    /// Training-mode forward pass.  Each output survives with probability
    /// `1 - dropout` and survivors are scaled by `1 / (1 - dropout)`.
    pub fn feed_from_train<R: Rng + ?Sized>(&mut self, input: Vec<f64>, rng: &mut R) -> Vec<f64> {
        if self.dropout <= 0.0 {
            return self.feed_from(input);
        }

        let keep = 1.0 - self.dropout;
        let scale: Vec<f64> = (0..self.size)
            .map(|_| if rng.gen::<f64>() < keep { 1.0 / keep } else { 0.0 })
            .collect();
        let mask = Matrix::row(scale);

        let a = Matrix::row(self.activate(input)).hadamard(&mask);
        self.neurons = a.clone();
        self.mask = Some(mask);
        a.data[0].clone()
    }

    fn activate(&mut self, input: Vec<f64>) -> Vec<f64> {
        let z = Matrix::row(input) * self.weights.clone() + self.biases.clone();
        let a = Matrix::row(self.activator.apply(&z.data[0]));
        self.pre_neurons = z;
        self.neurons = a.clone();
        a.data[0].clone()
    }

    /// Computes gradient adjustments. Returns (weights_grad, biases_grad).
    /// `next_layer_delta` is ∂L/∂a for this layer (error in activation space).
    pub fn compute_gradients(
        &self,
        next_layer_delta: Matrix,
        inputs: &Matrix,
    ) -> (Matrix, Matrix) {
        // Dropped outputs contributed nothing, so they receive no gradient.
        let delta = match &self.mask {
            Some(mask) => next_layer_delta.hadamard(mask),
            None => next_layer_delta,
        };
        // Use pre-activation z so that derivative(z) = σ'(z) is computed correctly
        let act_derivative = self.pre_neurons.map(|x| self.activator.derivative(x));
        let layer_delta = delta.hadamard(&act_derivative);

        let weights_adjustment = inputs.transpose() * layer_delta.clone();
        let biases_adjustment = layer_delta;

        (weights_adjustment, biases_adjustment)
    }

    /// Applies pre-computed gradients scaled by lr.
    pub fn apply_gradients(&mut self, weights_grad: Matrix, biases_grad: Matrix, lr: f64) {
        self.weights = self.weights.clone() - weights_grad.map(|x| x * lr);
        self.biases = self.biases.clone() - biases_grad.map(|x| x * lr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn fixed_layer(dropout: f64) -> Layer {
        let mut rng = StdRng::seed_from_u64(0);
        let mut layer = Layer::new(2, 2, ActivationFunction::ReLU, dropout, &mut rng);
        layer.weights = Matrix::from_data(vec![vec![1.0, -1.0], vec![0.5, 2.0]]);
        layer.biases = Matrix::row(vec![0.0, 0.5]);
        layer
    }

    #[test]
    fn eval_forward_is_affine_then_relu() {
        let mut layer = fixed_layer(0.5);
        // z = [1*1 + 2*0.5, 1*-1 + 2*2 + 0.5] = [2.0, 3.5]
        assert_eq!(layer.feed_from(vec![1.0, 2.0]), vec![2.0, 3.5]);
        assert_eq!(layer.feed_from(vec![-4.0, 0.0]), vec![0.0, 4.5]);
    }

    #[test]
    fn train_forward_zeroes_or_rescales() {
        let mut layer = fixed_layer(0.5);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let out = layer.feed_from_train(vec![1.0, 2.0], &mut rng);
            assert!(out[0] == 0.0 || out[0] == 4.0);
            assert!(out[1] == 0.0 || out[1] == 7.0);
        }
    }

    #[test]
    fn dropped_units_get_no_gradient() {
        let mut layer = fixed_layer(0.999_999);
        let mut rng = StdRng::seed_from_u64(3);
        let input = vec![1.0, 2.0];
        let out = layer.feed_from_train(input.clone(), &mut rng);
        assert_eq!(out, vec![0.0, 0.0]);
        let (w_grad, b_grad) = layer.compute_gradients(Matrix::row(vec![1.0, 1.0]), &Matrix::row(input));
        assert!(w_grad.data.iter().flatten().all(|g| *g == 0.0));
        assert!(b_grad.data.iter().flatten().all(|g| *g == 0.0));
    }
}
