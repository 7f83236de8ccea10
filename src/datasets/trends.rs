use super::{read_json, DatasetSource, TrendSnapshot};
use crate::error::{InsightError, Result};
use std::path::{Path, PathBuf};

/// A saved response of the trends/place endpoint.
pub struct TrendSnapshotFile {
    path: PathBuf,
}

impl TrendSnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for TrendSnapshotFile {
    type Output = TrendSnapshot;

    fn path(&self) -> &Path {
        &self.path
    }

    /// The response is an array with one entry per requested place; we only
    /// ever query one place, so the first entry is the snapshot.
    fn load(&self) -> Result<TrendSnapshot> {
        let entries: Vec<TrendSnapshot> = read_json(&self.path)?;
        let snapshot = entries
            .into_iter()
            .next()
            .ok_or_else(|| InsightError::EmptySnapshot {
                path: self.path.clone(),
            })?;

        tracing::info!(
            path = %self.path.display(),
            trends = snapshot.trends.len(),
            "loaded trend snapshot"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_first_entry() {
        let file = write_temp(
            r##"[
                {"trends": [{"name": "#WeLoveTheEarth", "url": "u", "query": "q", "tweet_volume": 1234}],
                 "as_of": "2019-04-19T13:37:00Z",
                 "locations": [{"name": "Worldwide", "woeid": 1}]},
                {"trends": [{"name": "ignored"}]}
            ]"##,
        );

        let snapshot = TrendSnapshotFile::new(file.path()).load().unwrap();
        assert_eq!(snapshot.trends.len(), 1);
        assert_eq!(snapshot.trends[0].name, "#WeLoveTheEarth");
        assert_eq!(snapshot.trends[0].tweet_volume, Some(1234));
        assert_eq!(snapshot.as_of.as_deref(), Some("2019-04-19T13:37:00Z"));
        assert_eq!(snapshot.locations[0].name, "Worldwide");
    }

    #[test]
    fn test_empty_array_is_error() {
        let file = write_temp("[]");
        let err = TrendSnapshotFile::new(file.path()).load().unwrap_err();
        assert!(matches!(err, InsightError::EmptySnapshot { .. }));
    }

    #[test]
    fn test_malformed_json_is_error() {
        let file = write_temp(r#"[{"trends": [{"name": }]}]"#);
        let err = TrendSnapshotFile::new(file.path()).load().unwrap_err();
        assert!(matches!(err, InsightError::Json { .. }));
    }

    #[test]
    fn test_path() {
        let source = TrendSnapshotFile::new("datasets/WWTrends.json");
        assert_eq!(source.path(), Path::new("datasets/WWTrends.json"));
    }
}
