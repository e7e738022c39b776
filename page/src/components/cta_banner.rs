//! Secondary call-to-action banner above the booking section

use super::BookButton;
use leptos::prelude::*;

/// Full-width gradient banner with the second booking CTA.
#[component]
pub fn CtaBanner() -> impl IntoView {
    view! {
        <section class="cta-banner">
            <div class="container cta-inner">
                <div>
                    <h3 class="cta-title">"Ready to unlock more conversions from Google Ads?"</h3>
                    <p class="cta-lead">"Claim your free 30‑minute audit. Limited availability each week."</p>
                </div>
                <BookButton variant="btn-light" />
            </div>
        </section>
    }
}
