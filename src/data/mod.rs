pub mod dataset;
pub mod csv;

pub use dataset::{Dataset, Point};
pub use csv::{load_points_csv, parse_points_csv};
