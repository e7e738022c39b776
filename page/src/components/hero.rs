//! Hero banner

use super::{BookButton, Icon, ICON_CARET_DOWN};
use crate::booking::RESULTS_ANCHOR;
use leptos::prelude::*;

/// Top banner with the headline, primary CTA and a link to the results.
#[component]
pub fn Hero() -> impl IntoView {
    let results_href = format!("#{}", RESULTS_ANCHOR);

    view! {
        <header class="hero">
            <div class="hero-glow"></div>
            <div class="container hero-inner">
                <span class="hero-badge">"US Market • Google Ads Growth • Free Audit"</span>
                <h1 class="hero-title">"Free Google Ads Audit to Maximize ROI"</h1>
                <p class="hero-description">
                    "Get a 30‑minute expert analysis from a Google Ads specialist with 5+ years of experience. "
                    "We’ll reveal the exact optimizations to reduce wasted spend, scale winners, and lift your conversion rate."
                </p>
                <div class="hero-actions">
                    <BookButton />
                    <a href=results_href class="btn btn-outline">
                        <Icon path=ICON_CARET_DOWN />
                        "See Results"
                    </a>
                </div>
                <div class="validation-note">
                    "Validation: Headline states free audit; description mentions 30‑minute analysis and 5+ years experience; "
                    "clear primary CTA provided. Next step: scroll to results or book."
                </div>
            </div>
        </header>
    }
}
