//! Pure presentation math behind the star rating and metric cards.
//!
//! Nothing here touches Leptos, so the CLI's `inspect` command and the
//! components share one implementation of every number shown on the page.

/// Number of slots in a star rating.
pub const STAR_SLOTS: usize = 5;

/// Filled/outline flags for the five rating slots.
///
/// `flags[i]` is `i < round(rating)`, with the rounded rating saturated to
/// the displayable range (see [`filled_count`]).
///
/// ```rust
/// use audit_landing::format::star_flags;
///
/// assert_eq!(star_flags(3.6), [true, true, true, true, false]);
/// assert_eq!(star_flags(9.0), [true; 5]);
/// ```
pub fn star_flags(rating: f64) -> [bool; STAR_SLOTS] {
    let filled = filled_count(rating);
    std::array::from_fn(|i| i < filled)
}

/// How many stars render filled for `rating`.
///
/// Ratings are rounded half away from zero, then clamped to `0..=5`:
/// negative ratings show no stars, anything above five shows all five.
/// NaN shows no stars.
pub fn filled_count(rating: f64) -> usize {
    let rounded = rating.round();
    if rounded.is_nan() || rounded <= 0.0 {
        0
    } else {
        rounded.min(STAR_SLOTS as f64) as usize
    }
}

/// Star glyph string for terminal output, e.g. `★★★★☆`.
pub fn star_string(rating: f64) -> String {
    star_flags(rating)
        .iter()
        .map(|&filled| if filled { '★' } else { '☆' })
        .collect()
}

/// Display-ready numbers for one metric card.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricSummary {
    /// `after > before`. Says nothing about whether the increase is good
    /// for this metric (a rising cost also counts as improved).
    pub improved: bool,
    /// Rounded percent change, `None` when `before` is zero
    pub percent_change: Option<i64>,
    /// Width of the proportion bar in percent, always within `[10, 100]`
    pub bar_width: f64,
}

impl MetricSummary {
    /// Compute the card numbers for a before/after pair.
    pub fn new(before: f64, after: f64) -> Self {
        Self {
            improved: after > before,
            percent_change: percent_change(before, after),
            bar_width: bar_width(before, after),
        }
    }

    /// Badge text: `+108%`, `-42%`, or `n/a` when there is no baseline.
    pub fn change_label(&self) -> String {
        match self.percent_change {
            None => "n/a".to_string(),
            Some(change) if self.improved => format!("+{change}%"),
            Some(change) => format!("{change}%"),
        }
    }

    /// CSS modifier selecting the badge and bar palette.
    pub fn tone(&self) -> &'static str {
        if self.improved { "improved" } else { "regressed" }
    }
}

/// `round((after - before) / before * 100)`, or `None` without a baseline.
pub fn percent_change(before: f64, after: f64) -> Option<i64> {
    if before == 0.0 || before.is_nan() {
        return None;
    }
    Some((((after - before) / before) * 100.0).round() as i64)
}

/// Share of `after` in `after + before`, as a percentage clamped to
/// `[10, 100]`. Falls back to 50 when the share is undefined (both zero).
///
/// A zero `after` against a positive `before` is a real share of 0 and
/// renders at the 10% floor, not at the 50% fallback.
pub fn bar_width(before: f64, after: f64) -> f64 {
    let share = after / (after + before) * 100.0;
    let share = if share.is_finite() { share } else { 50.0 };
    share.clamp(10.0, 100.0)
}

/// Percentage for an inline `width:` style, at most two decimals.
pub fn css_percent(value: f64) -> String {
    format!("{}%", (value * 100.0).round() / 100.0)
}

/// Format a number the way an en-US locale would: thousands grouped with
/// commas, at most three fraction digits, trailing zeros dropped.
///
/// ```rust
/// use audit_landing::format::format_number;
///
/// assert_eq!(format_number(120000.0), "120,000");
/// assert_eq!(format_number(1234.5), "1,234.5");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, digit) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_count_matches_rounding_inside_range() {
        for (rating, expected) in [
            (0.0, 0),
            (0.4, 0),
            (0.5, 1),
            (2.49, 2),
            (2.5, 3),
            (4.0, 4),
            (5.0, 5),
        ] {
            assert_eq!(filled_count(rating), expected, "rating {rating}");
        }
    }

    #[test]
    fn filled_count_saturates_outside_range() {
        assert_eq!(filled_count(7.0), 5);
        assert_eq!(filled_count(-2.0), 0);
        assert_eq!(filled_count(f64::NAN), 0);
        assert_eq!(filled_count(f64::INFINITY), 5);
    }

    #[test]
    fn star_flags_fill_from_the_left() {
        assert_eq!(star_flags(4.0), [true, true, true, true, false]);
        assert_eq!(star_flags(0.0), [false; 5]);
        assert_eq!(star_string(4.0), "★★★★☆");
        assert_eq!(star_string(7.0), "★★★★★");
    }

    #[test]
    fn percent_change_rounds_and_signs() {
        let impressions = MetricSummary::new(120_000.0, 250_000.0);
        assert!(impressions.improved);
        assert_eq!(impressions.percent_change, Some(108));
        assert_eq!(impressions.change_label(), "+108%");

        let cost = MetricSummary::new(38.0, 22.0);
        assert!(!cost.improved);
        assert_eq!(cost.percent_change, Some(-42));
        assert_eq!(cost.change_label(), "-42%");
        assert_eq!(cost.tone(), "regressed");
    }

    #[test]
    fn unchanged_metric_is_not_improved() {
        let flat = MetricSummary::new(50.0, 50.0);
        assert!(!flat.improved);
        assert_eq!(flat.change_label(), "0%");
        assert_eq!(flat.bar_width, 50.0);
    }

    #[test]
    fn zero_baseline_has_no_percent_change() {
        for after in [0.0, 1.0, 999.0] {
            let summary = MetricSummary::new(0.0, after);
            assert_eq!(summary.percent_change, None);
            assert_eq!(summary.change_label(), "n/a");
        }
    }

    #[test]
    fn bar_width_is_clamped() {
        assert_eq!(bar_width(0.0, 0.0), 50.0);
        assert_eq!(bar_width(0.0, 10.0), 100.0);
        assert_eq!(bar_width(10.0, 0.0), 10.0);
        assert_ne!(bar_width(10.0, 0.0), bar_width(0.0, 0.0));
        assert_eq!(bar_width(99.0, 1.0), 10.0);
        assert_eq!(bar_width(100.0, 300.0), 75.0);
    }

    #[test]
    fn css_percent_trims_precision() {
        assert_eq!(css_percent(50.0), "50%");
        assert_eq!(css_percent(bar_width(110.0, 240.0)), "68.57%");
    }

    #[test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(38.0), "38");
        assert_eq!(format_number(3200.0), "3,200");
        assert_eq!(format_number(250_000.0), "250,000");
        assert_eq!(format_number(1_234_567.891), "1,234,567.891");
        assert_eq!(format_number(2.50), "2.5");
        assert_eq!(format_number(0.0004), "0");
        assert_eq!(format_number(-1500.0), "-1,500");
    }
}
