//! Pure transforms over loaded datasets.

pub mod activity;
pub mod extract;
pub mod frequency;
pub mod retweets;
pub mod trends;

pub use activity::ActivityWindow;
pub use frequency::FrequencyTable;
pub use retweets::{aggregate_retweets, RetweetAggregate, RetweetRow};
pub use trends::{common_trends, trend_names};
