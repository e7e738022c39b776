//! Page data loading.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use audit_landing::types::LandingData;

use crate::error::{Result, SiteError};

/// Load page data from a JSON file, or the demo dataset when `path` is `None`.
pub fn load_landing_data(path: Option<&Path>) -> Result<LandingData> {
    let Some(path) = path else {
        debug!("no data file given, using demo data");
        return Ok(LandingData::demo());
    };

    let json = std::fs::read_to_string(path).map_err(|source| SiteError::ReadData {
        path: path.to_path_buf(),
        source,
    })?;
    let data = LandingData::from_json(&json).map_err(|source| SiteError::ParseData {
        path: path.to_path_buf(),
        source,
    })?;

    for label in duplicate_labels(&data) {
        warn!(%label, "metric label used more than once, cards share a key");
    }
    debug!(
        results = data.results.len(),
        reviews = data.reviews.len(),
        path = %path.display(),
        "loaded page data"
    );
    Ok(data)
}

/// Metric labels that appear more than once, in first-repeat order.
pub fn duplicate_labels(data: &LandingData) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dups = Vec::new();
    for metric in &data.results {
        if !seen.insert(metric.label.as_str()) && !dups.contains(&metric.label) {
            dups.push(metric.label.clone());
        }
    }
    dups
}

#[cfg(test)]
mod tests {
    use super::*;
    use audit_landing::types::MetricResult;
    use tempfile::TempDir;

    #[test]
    fn no_path_means_demo_data() {
        assert_eq!(load_landing_data(None).unwrap(), LandingData::demo());
    }

    #[test]
    fn loads_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.json");
        std::fs::write(
            &path,
            r#"{"results": [{"label": "ROAS", "before": 2, "after": 5, "suffix": "x"}]}"#,
        )
        .unwrap();

        let data = load_landing_data(Some(&path)).unwrap();
        assert_eq!(data.results, vec![MetricResult::new("ROAS", 2.0, 5.0).with_suffix("x")]);
        assert!(data.reviews.is_empty());
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = load_landing_data(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(matches!(err, SiteError::ReadData { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ results: ").unwrap();
        let err = load_landing_data(Some(&path)).unwrap_err();
        assert!(matches!(err, SiteError::ParseData { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn finds_duplicate_labels() {
        let data = LandingData {
            results: vec![
                MetricResult::new("Clicks", 1.0, 2.0),
                MetricResult::new("CTR", 1.0, 2.0),
                MetricResult::new("Clicks", 3.0, 4.0),
                MetricResult::new("Clicks", 5.0, 6.0),
            ],
            reviews: vec![],
        };
        assert_eq!(duplicate_labels(&data), vec!["Clicks".to_string()]);
        assert!(duplicate_labels(&LandingData::demo()).is_empty());
    }
}
