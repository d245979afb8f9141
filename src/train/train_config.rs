use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};

use rand::{rngs::StdRng, SeedableRng};
use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::train::epoch_stats::EpochStats;

/// Configuration for a perceptron `train_loop` run.
///
/// # Fields
/// - `learn_rate`  — scale of each per-sample correction
/// - `num_epochs`  — number of full passes over the dataset (must be > 0)
/// - `seed`        — seed for `rng()`; fixes the initial weights and bias
/// - `early_stop`  — stop after the first epoch with no corrections; off by
///                   default, so every epoch runs
/// - `progress_tx` — optional channel sender; one `EpochStats` is sent per
///                   completed epoch.  If the receiver is dropped the loop
///                   terminates early (clean shutdown).
/// - `stop_flag`   — optional atomic flag; when set to `true` from another
///                   thread the loop terminates after the current epoch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub learn_rate: f64,
    pub num_epochs: usize,
    pub seed: u64,
    pub early_stop: bool,
    #[serde(skip)]
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
    #[serde(skip)]
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learn_rate: 0.01,
            num_epochs: 25,
            seed: 42,
            early_stop: false,
            progress_tx: None,
            stop_flag: None,
        }
    }
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no progress channel and no stop flag.
    pub fn new(learn_rate: f64, num_epochs: usize) -> Self {
        TrainConfig {
            learn_rate,
            num_epochs,
            ..TrainConfig::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_epochs == 0 {
            return Err(Error::InvalidInput("num_epochs must be at least 1".into()));
        }
        if !self.learn_rate.is_finite() || self.learn_rate <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "learn_rate must be a positive finite number, got {}",
                self.learn_rate
            )));
        }
        Ok(())
    }

    /// A generator seeded from `seed`.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    /// Serializes the hyperparameters to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Loads hyperparameters from JSON; missing fields take their defaults.
    pub fn load_json(path: &str) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: TrainConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TrainConfig::default();
        assert_eq!(config.learn_rate, 0.01);
        assert_eq!(config.num_epochs, 25);
        assert!(!config.early_stop);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: TrainConfig = serde_json::from_str(r#"{"learn_rate": 0.1}"#).unwrap();
        assert_eq!(config.learn_rate, 0.1);
        assert_eq!(config.num_epochs, 25);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn rejects_bad_hyperparameters() {
        assert!(matches!(TrainConfig::new(0.01, 0).validate(), Err(Error::InvalidInput(_))));
        assert!(TrainConfig::new(-0.1, 5).validate().is_err());
        assert!(TrainConfig::new(f64::NAN, 5).validate().is_err());
    }
}
