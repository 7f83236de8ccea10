use crate::datasets::{Trend, TrendSnapshot};
use std::collections::BTreeSet;

pub fn trend_names(snapshot: &TrendSnapshot) -> BTreeSet<String> {
    snapshot.trends.iter().map(|t| t.name.clone()).collect()
}

pub fn common_trends(a: &BTreeSet<String>, b: &BTreeSet<String>) -> BTreeSet<String> {
    a.intersection(b).cloned().collect()
}

/// Trends that report a 24h volume, busiest first. The API returns them in
/// its own order, not by volume.
pub fn ranked_by_volume(snapshot: &TrendSnapshot) -> Vec<&Trend> {
    let mut ranked: Vec<&Trend> = snapshot
        .trends
        .iter()
        .filter(|t| t.tweet_volume.is_some())
        .collect();
    ranked.sort_by(|a, b| b.tweet_volume.cmp(&a.tweet_volume));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::fixtures::{snapshot, trend};

    fn names(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_common_trends_example() {
        let a = names(&["A", "B", "C"]);
        let b = names(&["B", "C", "D"]);
        let common = common_trends(&a, &b);
        assert_eq!(common, names(&["B", "C"]));
        assert_eq!(common.len(), 2);
    }

    #[test]
    fn test_common_trends_symmetric_and_bounded() {
        let ww: Vec<String> = (0..50).map(|i| format!("trend{}", i)).collect();
        let us: Vec<String> = (39..89).map(|i| format!("trend{}", i)).collect();
        let ww = trend_names(&snapshot(&ww.iter().map(String::as_str).collect::<Vec<_>>()));
        let us = trend_names(&snapshot(&us.iter().map(String::as_str).collect::<Vec<_>>()));

        let forward = common_trends(&ww, &us);
        let backward = common_trends(&us, &ww);
        assert_eq!(forward, backward);
        assert_eq!(forward.len(), 11);
        assert!(forward.len() <= 50);
    }

    #[test]
    fn test_common_trends_disjoint() {
        let common = common_trends(&names(&["A"]), &names(&["B"]));
        assert!(common.is_empty());
    }

    #[test]
    fn test_trend_names_dedupes() {
        let set = trend_names(&snapshot(&["#GoodFriday", "#GoodFriday", "Notre Dame"]));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_ranked_by_volume_skips_missing() {
        let mut snap = snapshot(&[]);
        snap.trends = vec![
            trend("#BeratKandili", Some(50_000)),
            trend("#GoodFriday", None),
            trend("#WeLoveTheEarth", Some(125_000)),
        ];

        let ranked: Vec<&str> = ranked_by_volume(&snap)
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(ranked, vec!["#WeLoveTheEarth", "#BeratKandili"]);
    }
}
