use crate::datasets::Tweet;

pub fn texts(tweets: &[Tweet]) -> Vec<&str> {
    tweets.iter().map(|t| t.text.as_str()).collect()
}

/// Screen names of every user mentioned, one entry per mention.
pub fn mentioned_screen_names(tweets: &[Tweet]) -> Vec<&str> {
    tweets
        .iter()
        .flat_map(|t| t.entities.user_mentions.iter())
        .map(|m| m.screen_name.as_str())
        .collect()
}

pub fn hashtags(tweets: &[Tweet]) -> Vec<&str> {
    tweets
        .iter()
        .flat_map(|t| t.entities.hashtags.iter())
        .map(|h| h.text.as_str())
        .collect()
}

pub fn languages(tweets: &[Tweet]) -> Vec<&str> {
    tweets.iter().map(|t| t.lang.as_str()).collect()
}

/// Client names ("Twitter for iPhone", ...) of tweets that carry a source.
pub fn sources(tweets: &[Tweet]) -> Vec<String> {
    tweets
        .iter()
        .filter_map(|t| t.source.as_deref())
        .filter_map(client_name)
        .collect()
}

/// Strip the anchor markup from a `source` field:
/// `<a href="..." rel="nofollow">Twitter for iPhone</a>` -> `Twitter for iPhone`
fn client_name(source: &str) -> Option<String> {
    let inner = match (source.find('>'), source.rfind("</a>")) {
        (Some(open), Some(close)) if open < close => &source[open + 1..close],
        _ => source,
    };
    let name = inner.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
