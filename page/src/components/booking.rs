//! Booking section - info panel plus the embedded scheduling frame
//!
//! Every "Book" control on the page is a [`BookButton`]. The page script
//! (or the optional WASM module) smooth-scrolls to the element named by
//! `data-scroll-target` and does nothing if that element is missing.

use super::{Icon, ICON_CALENDAR};
use crate::booking::{BOOKING_ANCHOR, CALENDAR_URL_ENV};
use leptos::prelude::*;
use leptos::tachys::html::attribute::custom::CustomAttribute;

/// Button that scrolls the viewport to the booking section.
#[component]
pub fn BookButton(
    /// Button styling: "btn-primary" on light backgrounds, "btn-light" on the banner
    #[prop(default = "btn-primary")]
    variant: &'static str,
    /// Button caption
    #[prop(default = "Book Free Audit")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!("btn {}", variant)
            data-scroll-target=BOOKING_ANCHOR
        >
            <Icon path=ICON_CALENDAR />
            {label}
        </button>
    }
}

/// The `#booking` section with the third-party calendar iframe.
#[component]
pub fn BookingSection(
    /// Resolved embed URL (see [`crate::booking::resolve_calendar_url`])
    calendar_url: String,
) -> impl IntoView {
    let integration_note = format!(
        "Integration details: This calendar is embedded via a secure iframe. Set your booking URL with {}. \
         The page passes no PII until you submit the form on the provider side.",
        CALENDAR_URL_ENV
    );

    // `loading` has no typed setter on <iframe>.
    let frame = view! {
        <iframe
            title="Book your audit"
            src=calendar_url
            referrerpolicy="no-referrer-when-downgrade"
        ></iframe>
    }
    .attr("loading", "lazy");

    view! {
        <section id=BOOKING_ANCHOR class="booking">
            <div class="container">
                <div class="booking-grid">
                    <div class="booking-panel">
                        <h3>"Book Your Free 30‑Minute Google Ads Audit"</h3>
                        <p>
                            "Choose a time that works for you. You'll meet 1:1 with a certified strategist "
                            "(5+ years hands‑on experience) to review your account and identify quick wins to maximize ROI."
                        </p>
                        <div class="integration-note">{integration_note}</div>
                        <div class="validation-note">
                            "Validation: Booking CTA present and integrated via iframe; user can select a slot. "
                            "Next step: connect your actual scheduling link via environment variable."
                        </div>
                        <BookButton label="Pick a Time" />
                    </div>
                    <div class="booking-frame">
                        {frame}
                    </div>
                </div>
            </div>
        </section>
    }
}
