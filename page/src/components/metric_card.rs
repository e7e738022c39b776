//! Before/after metric card with change badge and proportion bar

use crate::format::{css_percent, format_number, MetricSummary};
use crate::types::MetricResult;
use leptos::prelude::*;

/// One labeled before/after comparison.
///
/// The badge and bar turn emerald when `after > before` and amber
/// otherwise. The card does not know whether a metric is better when it
/// falls (cost per conversion), so a cost drop reads as amber.
#[component]
pub fn MetricCard(metric: MetricResult) -> impl IntoView {
    let summary = MetricSummary::new(metric.before, metric.after);
    let tone = summary.tone();
    let before = format!("{}{}", format_number(metric.before), metric.suffix);
    let after = format!("{}{}", format_number(metric.after), metric.suffix);
    let key = metric.label.clone();

    view! {
        <div class="metric-card" data-key=key>
            <div class="metric-label">{metric.label}</div>
            <div class="metric-values">
                <div>
                    <div class="metric-caption">"Before"</div>
                    <div class="metric-value before">{before}</div>
                </div>
                <div>
                    <div class="metric-caption">"After"</div>
                    <div class="metric-value after">{after}</div>
                </div>
                <div class=format!("metric-badge {}", tone)>{summary.change_label()}</div>
            </div>
            <div class="metric-track">
                <div
                    class=format!("metric-bar {}", tone)
                    style=format!("width: {}", css_percent(summary.bar_width))
                ></div>
            </div>
        </div>
    }
}
