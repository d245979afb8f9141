pub mod boundary;
pub mod perceptron;

pub use boundary::BoundaryLine;
pub use perceptron::{predict, Perceptron};
