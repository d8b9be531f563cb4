pub mod dataset;

pub use dataset::{load_records, parse_records, DatasetError};
