use super::{parse_json, read_body, DatasetSource, Tweet};
use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Tweets returned by a hashtag search, saved to disk.
pub struct SearchResultsFile {
    path: PathBuf,
}

/// The full search/tweets response; saved searches may also be just the
/// bare statuses array.
#[derive(Deserialize)]
struct SearchEnvelope {
    statuses: Vec<Tweet>,
}

impl SearchResultsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for SearchResultsFile {
    type Output = Vec<Tweet>;

    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Tweet>> {
        let body = read_body(&self.path)?;
        let tweets = if body.trim_start().starts_with('{') {
            parse_json::<SearchEnvelope>(&self.path, &body)?.statuses
        } else {
            parse_json::<Vec<Tweet>>(&self.path, &body)?
        };

        let retweets = tweets.iter().filter(|t| t.is_retweet()).count();
        tracing::info!(
            path = %self.path.display(),
            tweets = tweets.len(),
            retweets,
            "loaded search results"
        );
        Ok(tweets)
    }
}
