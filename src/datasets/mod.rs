pub mod trends;
pub mod tweets;

use crate::config::DatasetPaths;
use crate::error::{InsightError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

pub use trends::TrendSnapshotFile;
pub use tweets::SearchResultsFile;

/// One entry of a trends/place response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSnapshot {
    pub trends: Vec<Trend>,
    #[serde(default)]
    pub as_of: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub locations: Vec<TrendLocation>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendLocation {
    pub name: String,
    #[serde(default)]
    pub woeid: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Tweets in the last 24h, null when Twitter doesn't report it
    #[serde(default)]
    pub tweet_volume: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A tweet object as returned by the search API.
///
/// Only the fields the analyses read are typed; everything else is kept in
/// `extra` so a record pretty-prints in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    pub text: String,
    pub lang: String,
    pub entities: TweetEntities,
    pub retweet_count: u64,
    pub favorite_count: u64,
    pub user: TweetUser,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Present only when this tweet is a retweet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retweeted_status: Option<Box<Tweet>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TweetEntities {
    #[serde(default)]
    pub hashtags: Vec<Hashtag>,
    #[serde(default)]
    pub user_mentions: Vec<UserMention>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hashtag {
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMention {
    pub screen_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweetUser {
    pub screen_name: String,
    pub followers_count: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Tweet {
    pub fn is_retweet(&self) -> bool {
        self.retweeted_status.is_some()
    }
}

/// A local JSON file that yields one kind of record.
pub trait DatasetSource {
    type Output;

    fn path(&self) -> &Path;
    fn load(&self) -> Result<Self::Output>;
}

/// Everything the walkthrough reads, loaded up front.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub worldwide: TrendSnapshot,
    pub regional: TrendSnapshot,
    pub tweets: Vec<Tweet>,
}

impl Datasets {
    pub fn load(paths: &DatasetPaths) -> Result<Self> {
        Ok(Self {
            worldwide: TrendSnapshotFile::new(&paths.worldwide_trends).load()?,
            regional: TrendSnapshotFile::new(&paths.regional_trends).load()?,
            tweets: SearchResultsFile::new(&paths.tweets).load()?,
        })
    }
}

/// Read a whole file and parse it as `T`.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    parse_json(path, &read_body(path)?)
}

pub(crate) fn read_body(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| InsightError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn parse_json<T: DeserializeOwned>(path: &Path, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| InsightError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use serde_json::json;

    pub fn trend(name: &str, volume: Option<u64>) -> Trend {
        serde_json::from_value(json!({
            "name": name,
            "url": format!("http://twitter.com/search?q={}", name),
            "promoted_content": null,
            "query": name,
            "tweet_volume": volume,
        }))
        .unwrap()
    }

    pub fn snapshot(names: &[&str]) -> TrendSnapshot {
        TrendSnapshot {
            trends: names.iter().map(|n| trend(n, None)).collect(),
            as_of: None,
            created_at: None,
            locations: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn tweet(text: &str, lang: &str, mentions: &[&str], hashtags: &[&str]) -> Tweet {
        serde_json::from_value(json!({
            "text": text,
            "lang": lang,
            "entities": {
                "hashtags": hashtags.iter().map(|h| json!({"text": h, "indices": [0, 1]})).collect::<Vec<_>>(),
                "user_mentions": mentions.iter().map(|m| json!({"screen_name": m})).collect::<Vec<_>>(),
                "urls": [],
            },
            "retweet_count": 0,
            "favorite_count": 0,
            "user": {"screen_name": "someone", "followers_count": 10},
        }))
        .unwrap()
    }

    pub fn retweet(
        text: &str,
        retweet_count: u64,
        author: &str,
        followers: u64,
        favorites: u64,
    ) -> Tweet {
        let mut outer = tweet(text, "en", &[author], &[]);
        outer.retweet_count = retweet_count;
        let mut original = tweet("original text", "en", &[], &[]);
        original.favorite_count = favorites;
        original.retweet_count = retweet_count;
        original.user.screen_name = author.to_string();
        original.user.followers_count = followers;
        outer.retweeted_status = Some(Box::new(original));
        outer
    }
}
