pub mod cross_entropy;
pub mod nll;

pub use cross_entropy::CrossEntropyLoss;
pub use nll::NllLoss;
