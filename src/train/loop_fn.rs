use std::sync::atomic::Ordering;
use std::time::Instant;

use rand::Rng;

use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::perceptron::boundary::BoundaryLine;
use crate::perceptron::perceptron::Perceptron;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Runs the perceptron algorithm on `dataset` and returns the decision
/// boundary after every epoch, for plotting.
///
/// The weights and bias are initialized from `rng` (see
/// `Perceptron::initialize`); the same dataset, config and seed always give
/// the same sequence.
///
/// # Errors
/// `Error::InvalidInput` if `config` is invalid.  Nothing is drawn from `rng`
/// in that case.
pub fn train_loop<R: Rng + ?Sized>(
    dataset: &Dataset,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<Vec<BoundaryLine>> {
    config.validate()?;
    let mut model = Perceptron::initialize(dataset, rng);
    Ok(run_epochs(&mut model, dataset, config))
}

/// Continues training an existing `model` for `config.num_epochs` more
/// epochs.  Running N epochs and then M more equals running N + M at once.
pub fn train_from(
    model: &mut Perceptron,
    dataset: &Dataset,
    config: &TrainConfig,
) -> Result<Vec<BoundaryLine>> {
    config.validate()?;
    Ok(run_epochs(model, dataset, config))
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// The epoch loop.  Always runs `num_epochs` passes unless `early_stop` is
/// set, the stop flag is raised, or the progress receiver is gone.
fn run_epochs(model: &mut Perceptron, dataset: &Dataset, config: &TrainConfig) -> Vec<BoundaryLine> {
    let mut boundary_lines = Vec::with_capacity(config.num_epochs);

    for epoch in 1..=config.num_epochs {
        if stop_requested(config) {
            break;
        }

        let t_start = Instant::now();
        let corrections = model.step(dataset, config.learn_rate);
        let boundary = model.boundary_line();
        boundary_lines.push(boundary);

        let stats = EpochStats {
            epoch,
            total_epochs: config.num_epochs,
            corrections,
            boundary,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };

        if let Some(ref tx) = config.progress_tx {
            // If the receiver has been dropped, stop training.
            if tx.send(stats).is_err() {
                break;
            }
        }

        if config.early_stop && corrections == 0 {
            break;
        }
    }

    boundary_lines
}

fn stop_requested(config: &TrainConfig) -> bool {
    config.stop_flag
        .as_ref()
        .map_or(false, |flag| flag.load(Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::Point;
    use crate::error::Error;
    use std::sync::{mpsc, Arc, atomic::AtomicBool};
    use rand::{rngs::StdRng, SeedableRng};

    fn blobs() -> Dataset {
        Dataset::new(
            vec![
                Point::new(0.1, 0.2), Point::new(0.9, 0.8), Point::new(0.2, 0.1),
                Point::new(0.8, 0.9), Point::new(0.3, 0.3), Point::new(0.7, 0.6),
            ],
            vec![0, 1, 0, 1, 0, 1],
        ).unwrap()
    }

    #[test]
    fn one_line_per_epoch() {
        let config = TrainConfig::new(0.1, 7);
        let lines = train_loop(&blobs(), &config, &mut config.rng()).unwrap();
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn invalid_config_fails_before_training() {
        let err = train_loop(&blobs(), &TrainConfig::new(0.1, 0), &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn reports_progress_per_epoch() {
        let (tx, rx) = mpsc::channel();
        let config = TrainConfig { progress_tx: Some(tx), ..TrainConfig::new(0.1, 4) };
        let lines = train_loop(&blobs(), &config, &mut config.rng()).unwrap();
        drop(config);

        let stats: Vec<EpochStats> = rx.iter().collect();
        assert_eq!(stats.len(), 4);
        assert_eq!(stats.iter().map(|s| s.epoch).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert!(stats.iter().all(|s| s.total_epochs == 4));
        let reported: Vec<BoundaryLine> = stats.iter().map(|s| s.boundary).collect();
        assert_eq!(reported, lines);
    }

    #[test]
    fn dropped_receiver_stops_training() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let config = TrainConfig { progress_tx: Some(tx), ..TrainConfig::new(0.1, 10) };
        let lines = train_loop(&blobs(), &config, &mut config.rng()).unwrap();
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn raised_stop_flag_runs_nothing() {
        let config = TrainConfig {
            stop_flag: Some(Arc::new(AtomicBool::new(true))),
            ..TrainConfig::new(0.1, 10)
        };
        assert!(train_loop(&blobs(), &config, &mut config.rng()).unwrap().is_empty());
    }

    #[test]
    fn early_stop_ends_after_clean_pass() {
        let data = blobs();
        let mut model = Perceptron::new([1.0, 1.0], -1.0);
        let config = TrainConfig { early_stop: true, ..TrainConfig::new(0.1, 25) };
        let lines = train_from(&mut model, &data, &config).unwrap();
        assert_eq!(lines.len(), 1);

        // Without the flag every epoch runs even though nothing changes.
        let lines = train_from(&mut model, &data, &TrainConfig::new(0.1, 25)).unwrap();
        assert_eq!(lines.len(), 25);
        assert!(lines.iter().all(|l| *l == lines[0]));
    }
}
