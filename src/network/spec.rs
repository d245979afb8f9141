use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::network::network::Network;

fn default_drop_p() -> f64 {
    0.25
}

/// A serializable description of a feed-forward classifier.
///
/// Fields:
/// - `input_size`    — length of a flattened input sample
/// - `output_size`   — number of classes
/// - `hidden_layers` — hidden layer widths, input side first
/// - `drop_p`        — dropout probability after every hidden layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierSpec {
    pub input_size: usize,
    pub output_size: usize,
    pub hidden_layers: Vec<usize>,
    #[serde(default = "default_drop_p")]
    pub drop_p: f64,
}

impl ClassifierSpec {
    pub fn new(input_size: usize, output_size: usize, hidden_layers: Vec<usize>) -> Self {
        ClassifierSpec {
            input_size,
            output_size,
            hidden_layers,
            drop_p: default_drop_p(),
        }
    }

    /// Initializes a fresh network with weights drawn from `rng`.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Network> {
        Network::classifier(self.input_size, self.output_size, &self.hidden_layers, self.drop_p, rng)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `ClassifierSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<ClassifierSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
