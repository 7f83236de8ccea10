pub mod analysis;
pub mod config;
pub mod datasets;
pub mod error;
pub mod report;
pub mod ui;

pub use config::Config;
pub use datasets::Datasets;
pub use error::{InsightError, Result};
