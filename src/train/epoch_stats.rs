use serde::{Serialize, Deserialize};

use crate::perceptron::boundary::BoundaryLine;

/// Per-epoch statistics emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the training
/// loop sends one `EpochStats` value at the end of every completed epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Misclassified samples corrected during this epoch.
    pub corrections: usize,
    /// Decision boundary at the end of this epoch.
    pub boundary: BoundaryLine,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
