use crate::{math::matrix::Matrix, layers::dense::Layer};

/// Plain stochastic gradient descent: `w -= learning_rate * grad`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one SGD weight update to a layer given its pre-computed gradients.
    pub fn step(&self, layer: &mut Layer, weights_grad: Matrix, biases_grad: Matrix) {
        layer.apply_gradients(weights_grad, biases_grad, self.learning_rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn step_moves_against_gradient() {
        let mut layer = Layer::new(1, 2, ActivationFunction::Identity, 0.0, &mut StdRng::seed_from_u64(2));
        let before = layer.weights.clone();
        let bias_before = layer.biases.data[0][0];

        let w_grad = Matrix::from_data(vec![vec![1.0], vec![-2.0]]);
        Sgd::new(0.5).step(&mut layer, w_grad, Matrix::row(vec![4.0]));

        assert_relative_eq!(layer.weights.data[0][0], before.data[0][0] - 0.5);
        assert_relative_eq!(layer.weights.data[1][0], before.data[1][0] + 1.0);
        assert_relative_eq!(layer.biases.data[0][0], bias_before - 2.0);
    }
}
