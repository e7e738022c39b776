//! `adsaudit inspect` - show the numbers the page will render.
//!
//! Uses the same formatting as the metric cards and star ratings, so what
//! prints here is what the page shows.

use console::style;

use audit_landing::components::{RESULTS_PLACEHOLDER, REVIEWS_PLACEHOLDER};
use audit_landing::format::{css_percent, format_number, star_string, MetricSummary};
use audit_landing::types::{LandingData, MetricResult, Review};

/// Human-readable report of metrics and reviews.
pub fn render_summary(data: &LandingData) -> String {
    let mut out = Vec::new();

    out.push(style("Results").bold().to_string());
    if data.has_results() {
        out.extend(data.results.iter().map(metric_line));
    } else {
        out.push(format!("  {}", style(RESULTS_PLACEHOLDER).dim()));
    }

    out.push(String::new());
    out.push(style("Reviews").bold().to_string());
    if data.has_reviews() {
        out.extend(data.reviews.iter().map(review_line));
    } else {
        out.push(format!("  {}", style(REVIEWS_PLACEHOLDER).dim()));
    }

    out.join("\n")
}

fn metric_line(metric: &MetricResult) -> String {
    let summary = MetricSummary::new(metric.before, metric.after);
    let change = summary.change_label();
    let change = if summary.improved {
        style(change).green()
    } else {
        style(change).yellow()
    };

    format!(
        "  {:<20} {:>12} -> {:<12} {:>6}  bar {}",
        metric.label,
        format!("{}{}", format_number(metric.before), metric.suffix),
        format!("{}{}", format_number(metric.after), metric.suffix),
        change,
        css_percent(summary.bar_width),
    )
}

fn review_line(review: &Review) -> String {
    format!(
        "  {} {}  {}",
        style(star_string(review.rating)).yellow(),
        style(&review.name).bold(),
        review.text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_metrics_and_reviews() {
        console::set_colors_enabled(false);
        let summary = render_summary(&LandingData::demo());

        assert!(summary.contains("Impressions"));
        assert!(summary.contains("120,000 -> 250,000"));
        assert!(summary.contains("+108%"));
        assert!(summary.contains("38$"));
        assert!(summary.contains("-42%"));
        assert!(summary.contains("★★★★☆ Jamie L."));
        assert!(!summary.contains(RESULTS_PLACEHOLDER));
    }

    #[test]
    fn summary_shows_placeholders_for_empty_data() {
        console::set_colors_enabled(false);
        let summary = render_summary(&LandingData::default());

        assert!(summary.contains(RESULTS_PLACEHOLDER));
        assert!(summary.contains(REVIEWS_PLACEHOLDER));
    }

    #[test]
    fn zero_baseline_prints_na() {
        console::set_colors_enabled(false);
        let line = metric_line(&MetricResult::new("Leads", 0.0, 0.0));
        assert!(line.contains("n/a"));
        assert!(line.contains("bar 50%"));
    }
}
