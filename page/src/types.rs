//! Landing page data types.
//!
//! These types define the content model of the page. They're designed to be:
//!
//! - **Serializable** - Load real metrics and testimonials from JSON via serde
//! - **Clone-friendly** - Components take owned props without borrowing issues
//! - **Default-able** - An empty [`LandingData`] renders both placeholders
//!
//! # Example
//!
//! ```rust
//! use audit_landing::types::{LandingData, MetricResult, Review};
//!
//! let data = LandingData {
//!     results: vec![MetricResult::new("Clicks", 3200.0, 6800.0)],
//!     reviews: vec![Review {
//!         name: "Alex P.".into(),
//!         rating: 5.0,
//!         text: "CPA down 42% in 6 weeks.".into(),
//!     }],
//! };
//!
//! assert!(data.has_results());
//! assert!(data.has_reviews());
//! ```

use serde::{Deserialize, Serialize};

/// A labeled before/after comparison shown as a metric card.
///
/// `before` and `after` are expected to be non-negative. `label` doubles as
/// the card key, so labels should be unique within one page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    /// Metric name (e.g. "Impressions")
    pub label: String,
    /// Value before the audit
    pub before: f64,
    /// Value after the audit
    pub after: f64,
    /// Display-only unit appended to both values (e.g. "$")
    #[serde(default)]
    pub suffix: String,
}

impl MetricResult {
    /// Metric without a unit suffix.
    pub fn new(label: impl Into<String>, before: f64, after: f64) -> Self {
        Self {
            label: label.into(),
            before,
            after,
            suffix: String::new(),
        }
    }

    /// Attach a display unit.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

/// A client testimonial.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Reviewer display name
    pub name: String,
    /// Star rating, expected 0-5 (not validated, see [`crate::format::filled_count`])
    pub rating: f64,
    /// Testimonial body, rendered verbatim
    pub text: String,
}

/// Everything the page renders that is not fixed marketing copy.
///
/// Visibility of the results and reviews grids is derived from these
/// collections on every call, so swapping in live data can never leave a
/// stale placeholder behind.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LandingData {
    /// Metric comparisons for the results grid
    #[serde(default)]
    pub results: Vec<MetricResult>,
    /// Testimonials for the reviews grid
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl LandingData {
    /// Demo dataset shown until real account data is connected.
    pub fn demo() -> Self {
        Self {
            results: vec![
                MetricResult::new("Impressions", 120_000.0, 250_000.0),
                MetricResult::new("Clicks", 3_200.0, 6_800.0),
                MetricResult::new("Conversions", 110.0, 240.0),
                MetricResult::new("Cost / Conversion", 38.0, 22.0).with_suffix("$"),
            ],
            reviews: vec![
                Review {
                    name: "Alex P.".into(),
                    rating: 5.0,
                    text: "They found wasted spend and rebuilt our structure. CPA down 42% in 6 weeks."
                        .into(),
                },
                Review {
                    name: "Morgan S.".into(),
                    rating: 5.0,
                    text: "Clear insights and fast execution. Our ROAS finally crossed 5x.".into(),
                },
                Review {
                    name: "Jamie L.".into(),
                    rating: 4.0,
                    text: "Great audit with actionable next steps. Not fluff—real fixes.".into(),
                },
            ],
        }
    }

    /// Parse page data from JSON. Missing keys become empty collections.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether the results grid renders (otherwise its placeholder does).
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    /// Whether the reviews grid renders (otherwise its placeholder does).
    pub fn has_reviews(&self) -> bool {
        !self.reviews.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_data_has_both_collections() {
        let data = LandingData::demo();
        assert_eq!(data.results.len(), 4);
        assert_eq!(data.reviews.len(), 3);
        assert!(data.has_results());
        assert!(data.has_reviews());
        assert_eq!(data.results[3].suffix, "$");
    }

    #[test]
    fn visibility_follows_collection_changes() {
        let mut data = LandingData::demo();
        data.results.clear();
        assert!(!data.has_results());
        assert!(data.has_reviews());

        data.reviews.clear();
        assert!(!data.has_reviews());

        data.results.push(MetricResult::new("Clicks", 1.0, 2.0));
        assert!(data.has_results());
    }

    #[test]
    fn json_with_missing_keys_is_empty() {
        let data = LandingData::from_json("{}").unwrap();
        assert_eq!(data, LandingData::default());

        let data = LandingData::from_json(
            r#"{"results": [{"label": "CTR", "before": 1.5, "after": 3}]}"#,
        )
        .unwrap();
        assert_eq!(data.results[0].suffix, "");
        assert_eq!(data.results[0].after, 3.0);
        assert!(!data.has_reviews());
    }

    #[test]
    fn json_rejects_missing_required_fields() {
        assert!(LandingData::from_json(r#"{"reviews": [{"name": "A"}]}"#).is_err());
    }
}
