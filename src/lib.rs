pub mod error;
pub mod math;
pub mod activation;
pub mod data;
pub mod perceptron;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use activation::activation::{log_softmax, softmax, step_function, ActivationFunction};
pub use data::{Dataset, Point};
pub use perceptron::{predict, BoundaryLine, Perceptron};
pub use layers::dense::Layer;
pub use network::{ClassifierSpec, Network};
pub use loss::{CrossEntropyLoss, NllLoss};
pub use optim::sgd::Sgd;
pub use train::{train_from, train_loop, train_network, EpochStats, TrainConfig};
