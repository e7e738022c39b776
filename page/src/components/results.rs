//! Results section - metric cards and the before/after comparison

use super::MetricCard;
use crate::booking::RESULTS_ANCHOR;
use crate::types::MetricResult;
use leptos::prelude::*;

/// Placeholder shown when there are no metrics to display.
pub const RESULTS_PLACEHOLDER: &str =
    "No results available yet. Placeholder will render here until data is connected.";

const BEFORE_ITEMS: [&str; 3] = [
    "Broad match cannibalization",
    "Inaccurate conversion tracking",
    "Generic ad copy and low CTR",
];

const AFTER_ITEMS: [&str; 3] = [
    "Tight SKAG/Theme structure",
    "Server-side conversion tracking",
    "Message-market fit ad testing",
];

/// The `#results` section: one card per metric, or a placeholder when empty.
#[component]
pub fn ResultsSection(results: Vec<MetricResult>) -> impl IntoView {
    let has_results = !results.is_empty();

    view! {
        <section id=RESULTS_ANCHOR class="section">
            <div class="container">
                <h2 class="section-title">"Proven Google Ads Results"</h2>
                <p class="section-lead">
                    "We focus on what moves the needle: structure, match types, negatives, audience layering, and conversion accuracy."
                </p>

                {if has_results {
                    view! {
                        <div class="card-grid metrics-grid">
                            {results.into_iter().map(|metric| view! {
                                <MetricCard metric=metric />
                            }).collect::<Vec<_>>()}
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="placeholder" data-placeholder="results">{RESULTS_PLACEHOLDER}</div>
                    }.into_any()
                }}

                <div class="comparison">
                    <ComparisonPanel title="Before" tone="before" items=BEFORE_ITEMS />
                    <ComparisonPanel title="After" tone="after" items=AFTER_ITEMS />
                </div>

                <div class="validation-note">
                    "Validation: Results section displays impressions, clicks, conversions, and a comparison with visuals; "
                    "placeholder message appears if unavailable. Next step: connect real metrics via API when ready."
                </div>
            </div>
        </section>
    }
}

#[component]
fn ComparisonPanel(
    title: &'static str,
    tone: &'static str,
    items: [&'static str; 3],
) -> impl IntoView {
    view! {
        <div class=format!("comparison-panel {}", tone)>
            <h3>{title}</h3>
            <ul>
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
