use crate::datasets::Tweet;
use serde::Serialize;
use std::collections::BTreeMap;

/// One retweet event, projected down to the fields the table needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetweetRow {
    pub retweets: u64,
    pub favorites: u64,
    pub followers: u64,
    pub screen_name: String,
    pub text: String,
}

/// All retweet events that point at the same original tweet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetweetAggregate {
    pub screen_name: String,
    pub text: String,
    pub followers: u64,
    pub retweets: u64,
    pub favorites: u64,
}

impl RetweetRow {
    /// `None` for tweets that are not retweets; those never reach the table.
    pub fn from_tweet(tweet: &Tweet) -> Option<Self> {
        let original = tweet.retweeted_status.as_deref()?;
        Some(Self {
            retweets: tweet.retweet_count,
            favorites: original.favorite_count,
            followers: original.user.followers_count,
            screen_name: original.user.screen_name.clone(),
            text: tweet.text.clone(),
        })
    }
}

impl RetweetAggregate {
    /// Favorites as a percentage of the author's followers.
    pub fn favorite_rate(&self) -> f64 {
        if self.followers == 0 {
            0.0
        } else {
            self.favorites as f64 / self.followers as f64 * 100.0
        }
    }
}

pub fn retweet_rows(tweets: &[Tweet]) -> Vec<RetweetRow> {
    tweets.iter().filter_map(RetweetRow::from_tweet).collect()
}

/// Collapse retweet events by (author, text, followers), summing retweet and
/// favorite counts, ordered by follower count descending.
pub fn aggregate_retweets(tweets: &[Tweet]) -> Vec<RetweetAggregate> {
    let mut groups: BTreeMap<(String, String, u64), (u64, u64)> = BTreeMap::new();

    for row in retweet_rows(tweets) {
        let sums = groups
            .entry((row.screen_name, row.text, row.followers))
            .or_insert((0, 0));
        sums.0 += row.retweets;
        sums.1 += row.favorites;
    }

    let mut table: Vec<RetweetAggregate> = groups
        .into_iter()
        .map(
            |((screen_name, text, followers), (retweets, favorites))| RetweetAggregate {
                screen_name,
                text,
                followers,
                retweets,
                favorites,
            },
        )
        .collect();

    // Stable sort: equal follower counts stay in (author, text) order
    table.sort_by(|a, b| b.followers.cmp(&a.followers));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::fixtures::{retweet, tweet};
    use std::collections::HashSet;

    #[test]
    fn test_from_tweet_projection() {
        let rt = retweet("RT @LilDicky: EARTH", 7, "LilDicky", 1000, 400);
        let row = RetweetRow::from_tweet(&rt).unwrap();
        assert_eq!(row.retweets, 7);
        assert_eq!(row.favorites, 400);
        assert_eq!(row.followers, 1000);
        assert_eq!(row.screen_name, "LilDicky");
        assert_eq!(row.text, "RT @LilDicky: EARTH");
    }

    #[test]
    fn test_non_retweets_are_excluded() {
        let tweets = vec![
            tweet("plain", "en", &["LilDicky"], &["WeLoveTheEarth"]),
            tweet("another", "pl", &[], &[]),
        ];
        assert!(retweet_rows(&tweets).is_empty());
        assert!(aggregate_retweets(&tweets).is_empty());
    }

    #[test]
    fn test_groups_sum_and_sort() {
        let tweets = vec![
            retweet("RT @katyperry: earth", 2, "katyperry", 100_000, 10),
            tweet("plain", "en", &[], &[]),
            retweet("RT @LilDicky: EARTH", 5, "LilDicky", 1_000, 400),
            retweet("RT @LilDicky: EARTH", 6, "LilDicky", 1_000, 401),
            retweet("RT @LeoDiCaprio: earth", 9, "LeoDiCaprio", 50_000, 1_100),
            retweet("RT @katyperry: earth", 3, "katyperry", 100_000, 11),
        ];

        let table = aggregate_retweets(&tweets);
        assert_eq!(table.len(), 3);

        assert_eq!(table[0].screen_name, "katyperry");
        assert_eq!(table[0].retweets, 5);
        assert_eq!(table[0].favorites, 21);

        assert_eq!(table[1].screen_name, "LeoDiCaprio");
        assert_eq!(table[1].retweets, 9);

        assert_eq!(table[2].screen_name, "LilDicky");
        assert_eq!(table[2].retweets, 11);
        assert_eq!(table[2].favorites, 801);
    }

    #[test]
    fn test_row_count_matches_distinct_keys_and_sums_match() {
        let tweets = vec![
            retweet("a", 1, "x", 10, 1),
            retweet("a", 2, "x", 10, 2),
            retweet("a", 3, "x", 11, 3),
            retweet("b", 4, "x", 10, 4),
            retweet("a", 5, "y", 10, 5),
            tweet("plain", "en", &[], &[]),
        ];

        let rows = retweet_rows(&tweets);
        let distinct: HashSet<(String, String, u64)> = rows
            .iter()
            .map(|r| (r.screen_name.clone(), r.text.clone(), r.followers))
            .collect();

        let table = aggregate_retweets(&tweets);
        assert_eq!(table.len(), distinct.len());

        let raw_retweets: u64 = rows.iter().map(|r| r.retweets).sum();
        let raw_favorites: u64 = rows.iter().map(|r| r.favorites).sum();
        assert_eq!(table.iter().map(|g| g.retweets).sum::<u64>(), raw_retweets);
        assert_eq!(table.iter().map(|g| g.favorites).sum::<u64>(), raw_favorites);
    }

    #[test]
    fn test_equal_followers_ordered_by_author_then_text() {
        let tweets = vec![
            retweet("z", 1, "b", 10, 1),
            retweet("y", 1, "a", 10, 1),
            retweet("x", 1, "b", 10, 1),
        ];
        let table = aggregate_retweets(&tweets);
        let order: Vec<(&str, &str)> = table
            .iter()
            .map(|g| (g.screen_name.as_str(), g.text.as_str()))
            .collect();
        assert_eq!(order, vec![("a", "y"), ("b", "x"), ("b", "z")]);
    }

    #[test]
    fn test_favorite_rate() {
        let group = RetweetAggregate {
            screen_name: "LilDicky".into(),
            text: "EARTH".into(),
            followers: 1_000,
            retweets: 0,
            favorites: 424,
        };
        assert!((group.favorite_rate() - 42.4).abs() < 1e-9);

        let nobody = RetweetAggregate {
            followers: 0,
            ..group
        };
        assert_eq!(nobody.favorite_rate(), 0.0);
    }
}
