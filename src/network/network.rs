use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::{activation::activation::ActivationFunction, layers::dense::Layer};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds a network from (size, input_size, activation, dropout) tuples.
    pub fn new<R: Rng + ?Sized>(
        layer_specs: Vec<(usize, usize, ActivationFunction, f64)>,
        rng: &mut R,
    ) -> Network {
        let layers = layer_specs.into_iter()
            .map(|(size, input_size, activation, dropout)| {
                Layer::new(size, input_size, activation, dropout, rng)
            })
            .collect();
        Network { layers }
    }

    /// Feed-forward classifier: every hidden layer is ReLU followed by
    /// dropout with probability `drop_p`, and the output layer produces
    /// log-probabilities via LogSoftmax.
    pub fn classifier<R: Rng + ?Sized>(
        input_size: usize,
        output_size: usize,
        hidden_layers: &[usize],
        drop_p: f64,
        rng: &mut R,
    ) -> Result<Network> {
        if input_size == 0 || output_size == 0 {
            return Err(Error::InvalidInput("input and output sizes must be positive".into()));
        }
        if hidden_layers.is_empty() || hidden_layers.contains(&0) {
            return Err(Error::InvalidInput(
                "hidden_layers must list at least one positive layer size".into(),
            ));
        }
        if !(0.0..1.0).contains(&drop_p) {
            return Err(Error::InvalidInput(format!("drop_p must be in [0, 1), got {}", drop_p)));
        }

        let mut specs = Vec::with_capacity(hidden_layers.len() + 1);
        let mut fan_in = input_size;
        for &size in hidden_layers {
            specs.push((size, fan_in, ActivationFunction::ReLU, drop_p));
            fan_in = size;
        }
        specs.push((output_size, fan_in, ActivationFunction::LogSoftmax, 0.0));

        Ok(Network::new(specs, rng))
    }

    /// Eval-mode forward pass; stores activations in each layer for backprop.
    pub fn forward(&mut self, input: Vec<f64>) -> Vec<f64> {
        let mut current = input;
        for layer in &mut self.layers {
            current = layer.feed_from(current);
        }
        current
    }

    /// Training-mode forward pass with dropout drawn from `rng`.
    pub fn forward_train<R: Rng + ?Sized>(&mut self, input: Vec<f64>, rng: &mut R) -> Vec<f64> {
        let mut current = input;
        for layer in &mut self.layers {
            current = layer.feed_from_train(current, rng);
        }
        current
    }

    /// Index of the most probable class for one sample.
    pub fn predict_class(&mut self, input: Vec<f64>) -> usize {
        argmax(&self.forward(input))
    }

    /// Serializes the network weights to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Index of the maximum element in a slice.
pub fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}
