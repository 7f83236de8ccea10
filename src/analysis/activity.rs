use crate::datasets::Tweet;
use chrono::{DateTime, FixedOffset, NaiveDate};
use std::collections::BTreeMap;

/// `created_at` as the v1.1 API writes it: `Fri Apr 19 15:09:45 +0000 2019`
const TWITTER_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Time span covered by a collection of tweets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityWindow {
    pub earliest: DateTime<FixedOffset>,
    pub latest: DateTime<FixedOffset>,
}

impl ActivityWindow {
    /// `None` when no tweet has a parsable timestamp.
    pub fn from_tweets(tweets: &[Tweet]) -> Option<Self> {
        let mut stamps = tweets.iter().filter_map(created_at);
        let first = stamps.next()?;
        let (earliest, latest) =
            stamps.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t)));
        Some(Self { earliest, latest })
    }

    pub fn duration(&self) -> chrono::Duration {
        self.latest - self.earliest
    }
}

pub fn parse_twitter_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(raw, TWITTER_DATE_FORMAT).ok()
}

fn created_at(tweet: &Tweet) -> Option<DateTime<FixedOffset>> {
    let raw = tweet.created_at.as_deref()?;
    let parsed = parse_twitter_date(raw);
    if parsed.is_none() {
        tracing::debug!(created_at = raw, "skipping unparsable timestamp");
    }
    parsed
}

/// Tweet counts per calendar day, oldest first.
pub fn tweets_per_day(tweets: &[Tweet]) -> Vec<(NaiveDate, usize)> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for stamp in tweets.iter().filter_map(created_at) {
        *days.entry(stamp.date_naive()).or_insert(0) += 1;
    }
    days.into_iter().collect()
}
