//! # audit-landing
//!
//! Leptos SSR renderer for the free Google Ads audit landing page.
//!
//! The page is one self-contained HTML document: inline CSS, an inline
//! scroll script, and an iframe pointing at a third-party scheduling
//! provider. No hydration and no reactive runtime are involved.
//!
//! ## Quick Start
//!
//! ```rust
//! use audit_landing::{render_landing, PageOptions, types::LandingData};
//! use audit_landing::booking::resolve_calendar_url;
//!
//! let options = PageOptions::new(resolve_calendar_url(None), 2025);
//! let html = render_landing(&LandingData::demo(), &options);
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Proven Google Ads Results"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Page data (metrics, reviews) and derived visibility
//! - [`format`] - Star, percent-change and bar-width math
//! - [`booking`] - Embed URL resolution and anchor ids
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS and Content Security Policy
//!
//! ## Rendering the document component directly
//!
//! [`render_landing`] wraps [`components::LandingDocument`]. Render the
//! component yourself to embed it elsewhere; the DOCTYPE is then yours to add.
//!
//! ```rust
//! use audit_landing::components::LandingDocument;
//! use audit_landing::{types::LandingData, PageOptions};
//! use leptos::prelude::*;
//! use leptos::tachys::view::RenderHtml;
//!
//! let options = PageOptions::new("https://cal.example.com/audit", 2025);
//! let html = view! { <LandingDocument data=LandingData::demo() options=options /> }.to_html();
//!
//! assert!(!html.contains("<!DOCTYPE"));
//! assert!(html.contains("<html lang=\"en\""));
//! assert!(html.contains("id=\"booking\""));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod booking;
pub mod components;
pub mod format;
pub mod styles;
pub mod types;

use components::LandingDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::LandingData;

/// Render the complete landing page.
///
/// Returns a full HTML document, including `<!DOCTYPE html>`. Empty
/// collections in `data` render their placeholder messages instead of the
/// card grids.
///
/// # Example
///
/// ```rust
/// use audit_landing::{render_landing, PageOptions, types::LandingData};
///
/// let options = PageOptions::new("https://cal.example.com/audit", 2025);
/// let html = render_landing(&LandingData::default(), &options);
/// assert!(html.contains("No results available yet."));
/// assert!(html.contains("No reviews available yet."));
/// ```
pub fn render_landing(data: &LandingData, options: &PageOptions) -> String {
    let doc = view! {
        <LandingDocument data=data.clone() options=options.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render-time settings that are not page content.
#[derive(Clone, Debug, PartialEq)]
pub struct PageOptions {
    /// Embed URL of the scheduling widget
    pub calendar_url: String,
    /// Year printed in the footer
    pub year: i32,
    /// How the scroll-to-booking behavior is delivered
    pub scripts: ScriptAssets,
}

impl PageOptions {
    /// Options with the inline scroll script.
    pub fn new(calendar_url: impl Into<String>, year: i32) -> Self {
        Self {
            calendar_url: calendar_url.into(),
            year,
            scripts: ScriptAssets::default(),
        }
    }

    /// Replace the script delivery.
    pub fn with_scripts(mut self, scripts: ScriptAssets) -> Self {
        self.scripts = scripts;
        self
    }
}

/// Script delivery for the page.
///
/// By default a small inline script binds the booking buttons. When
/// `wasm_glue_path` points at the `wasm-bindgen` glue of the
/// `audit-landing-wasm` crate (built with `--target web`), the page imports
/// that module instead and the Rust implementation binds the buttons.
///
/// ```rust
/// use audit_landing::ScriptAssets;
///
/// let inline = ScriptAssets::default();
/// assert!(!inline.uses_wasm());
///
/// let wasm = ScriptAssets { wasm_glue_path: Some("./pkg/audit_landing_wasm.js".into()) };
/// assert!(wasm.uses_wasm());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptAssets {
    /// URL of the wasm-bindgen JS glue, relative to the page
    pub wasm_glue_path: Option<String>,
}

impl ScriptAssets {
    /// Whether the page loads the WASM module.
    pub fn uses_wasm(&self) -> bool {
        self.wasm_glue_path.is_some()
    }
}
