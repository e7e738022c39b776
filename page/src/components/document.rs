//! Root document component - the complete HTML page
//!
//! Sections always render in the same order: hero, results, reviews,
//! CTA banner, booking, footer.

use super::{BookingSection, CtaBanner, Footer, Hero, ResultsSection, ReviewsSection};
use crate::styles::{content_security_policy, LANDING_CSS};
use crate::types::LandingData;
use crate::{PageOptions, ScriptAssets};
use leptos::prelude::*;

/// The complete HTML document for the landing page
#[component]
pub fn LandingDocument(data: LandingData, options: PageOptions) -> impl IntoView {
    let csp = content_security_policy(&options.calendar_url, options.scripts.uses_wasm());

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=csp />
                <title>"Free Google Ads Audit to Maximize ROI"</title>
                <meta
                    name="description"
                    content="Book a free 30-minute Google Ads audit with a specialist and find the optimizations that cut wasted spend."
                />
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <div class="page">
                    <Hero />
                    <ResultsSection results=data.results />
                    <ReviewsSection reviews=data.reviews />
                    <CtaBanner />
                    <BookingSection calendar_url=options.calendar_url />
                    <Footer year=options.year />
                </div>

                <PageScripts scripts=options.scripts />
            </body>
        </html>
    }
}

/// Scroll-to-booking wiring: inline script, or the WASM module when configured
#[component]
fn PageScripts(scripts: ScriptAssets) -> impl IntoView {
    match scripts.wasm_glue_path {
        Some(path) => {
            // JSON string literal doubles as a safely quoted JS string.
            let specifier = serde_json::to_string(&path).unwrap_or_else(|_| "\"\"".to_string());
            let loader = format!("import init from {};\ninit();\n", specifier);
            view! { <script type="module">{loader}</script> }.into_any()
        }
        None => view! { <script>{SCROLL_SCRIPT}</script> }.into_any(),
    }
}

/// Smooth-scroll for every `[data-scroll-target]` control. Missing anchors are a no-op.
const SCROLL_SCRIPT: &str = r#"
(() => {
  document.querySelectorAll('[data-scroll-target]').forEach(btn => {
      btn.addEventListener('click', () => {
          const target = document.getElementById(btn.dataset.scrollTarget);
          if (target) {
              target.scrollIntoView({ behavior: 'smooth' });
          }
      });
  });
})();
"#;
