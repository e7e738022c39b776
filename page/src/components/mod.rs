//! Leptos UI components for the landing page.
//!
//! Each component is a Leptos `#[component]` function rendered once on
//! the server. Props are owned, immutable data; nothing flows back up.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument
//! ├── Hero
//! │   └── BookButton
//! ├── ResultsSection
//! │   ├── MetricCard (per metric, keyed by label) | placeholder
//! │   └── ComparisonPanel x2
//! ├── ReviewsSection
//! │   └── ReviewCard (per review) | placeholder
//! │       └── StarRating
//! ├── CtaBanner
//! │   └── BookButton
//! ├── BookingSection
//! │   └── BookButton
//! └── Footer
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_landing`], but can be
//! rendered on their own:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use audit_landing::components::StarRating;
//!
//! view! { <StarRating rating=4.0 /> }
//! ```

mod booking;
mod cta_banner;
mod document;
mod footer;
mod hero;
mod icons;
mod metric_card;
mod results;
mod reviews;
mod star_rating;

pub use booking::{BookButton, BookingSection};
pub use cta_banner::CtaBanner;
pub use document::LandingDocument;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use metric_card::MetricCard;
pub use results::{ResultsSection, RESULTS_PLACEHOLDER};
pub use reviews::{ReviewsSection, REVIEWS_PLACEHOLDER};
pub use star_rating::StarRating;
