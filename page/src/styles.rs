//! CSS styles and Content Security Policy for the landing page.
//!
//! The page ships as one file, so the whole stylesheet is inlined from
//! [`LANDING_CSS`].
//!
//! # Customization
//!
//! ```rust
//! use audit_landing::styles::LANDING_CSS;
//!
//! let brand = ":root { --brand: #0f766e; }";
//! let combined = format!("{}\n{}", LANDING_CSS, brand);
//! assert!(combined.ends_with("}"));
//! ```

use crate::booking::frame_origin;

/// Complete CSS for the page - light theme with blue/indigo accents.
pub const LANDING_CSS: &str = r#"
:root {
    --brand: #2563eb;
    --brand-dark: #1d4ed8;
    --indigo: #4f46e5;
    --ink-900: #111827;
    --ink-700: #374151;
    --ink-600: #4b5563;
    --ink-500: #6b7280;
    --ink-400: #9ca3af;
    --line: #e5e7eb;
    --line-soft: #f3f4f6;
    --surface: #ffffff;
    --blue-50: #eff6ff;
    --blue-100: #dbeafe;
    --emerald-50: #ecfdf5;
    --emerald-500: #10b981;
    --emerald-700: #047857;
    --amber-50: #fffbeb;
    --amber-500: #f59e0b;
    --amber-700: #b45309;
    --radius: 12px;
    --container-max: 72rem;
    --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--ink-900);
    line-height: 1.5;
}

.page {
    min-height: 100vh;
    background: linear-gradient(to bottom, var(--blue-50), var(--surface) 40%, var(--surface));
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 16px;
}

/* Buttons */
.btn {
    display: inline-block;
    padding: 12px 24px;
    border-radius: 8px;
    font: inherit;
    font-weight: 600;
    text-decoration: none;
    cursor: pointer;
    border: 1px solid transparent;
}

.btn-primary {
    background: var(--brand);
    color: #fff;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.15);
}

.btn-primary:hover {
    background: var(--brand-dark);
}

.btn-outline {
    background: transparent;
    color: var(--ink-700);
    border-color: #d1d5db;
}

.btn-outline:hover {
    background: #f9fafb;
}

.btn-light {
    background: #fff;
    color: var(--brand-dark);
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.15);
    transition: transform 0.15s;
}

.btn-light:hover {
    transform: translateY(-1px);
}

/* Hero */
.hero {
    position: relative;
    overflow: hidden;
}

.hero-glow {
    position: absolute;
    inset: 0;
    background: radial-gradient(ellipse at top right, #e0e7ff, transparent 60%);
    pointer-events: none;
}

.hero-inner {
    position: relative;
    display: flex;
    flex-direction: column;
    align-items: flex-start;
    gap: 24px;
    padding: 80px 16px 64px;
}

.hero-badge {
    display: inline-flex;
    gap: 8px;
    font-size: 12px;
    font-weight: 500;
    color: var(--brand-dark);
    background: var(--blue-50);
    border: 1px solid var(--blue-100);
    padding: 4px 12px;
    border-radius: 999px;
}

.hero-title {
    margin: 0;
    font-size: clamp(2.25rem, 5vw, 3rem);
    font-weight: 800;
    line-height: 1.15;
}

.hero-description {
    margin: 0;
    max-width: 42rem;
    font-size: 1.125rem;
    color: var(--ink-600);
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 12px;
}

.validation-note {
    margin-top: 12px;
    font-size: 12px;
    color: var(--ink-500);
}

/* Sections */
.section {
    padding: 56px 0;
    background: var(--surface);
}

.section-title {
    margin: 0;
    font-size: clamp(1.5rem, 3vw, 1.875rem);
    font-weight: 700;
}

.section-lead {
    margin: 8px 0 0;
    color: var(--ink-600);
}

.placeholder {
    margin-top: 24px;
    padding: 24px;
    border: 1px dashed #d1d5db;
    border-radius: var(--radius);
    color: var(--ink-600);
    background: #f9fafb;
}

.card-grid {
    display: grid;
    gap: 16px;
    margin-top: 32px;
}

.metrics-grid {
    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
}

.reviews-grid {
    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
    gap: 24px;
}

/* Metric card */
.metric-card {
    padding: 16px;
    background: var(--surface);
    border: 1px solid var(--line-soft);
    border-radius: var(--radius);
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
}

.metric-label {
    font-size: 14px;
    color: var(--ink-500);
}

.metric-values {
    display: flex;
    align-items: flex-end;
    gap: 12px;
    margin-top: 8px;
}

.metric-caption {
    font-size: 12px;
    color: var(--ink-400);
}

.metric-value {
    font-size: 18px;
    font-weight: 600;
    color: var(--ink-700);
}

.metric-value.after {
    color: var(--ink-900);
}

.metric-badge {
    margin-left: auto;
    font-size: 12px;
    padding: 4px 8px;
    border-radius: 999px;
}

.metric-badge.improved {
    background: var(--emerald-50);
    color: var(--emerald-700);
}

.metric-badge.regressed {
    background: var(--amber-50);
    color: var(--amber-700);
}

.metric-track {
    margin-top: 12px;
    height: 8px;
    width: 100%;
    background: var(--line-soft);
    border-radius: 4px;
}

.metric-bar {
    height: 8px;
    border-radius: 4px;
}

.metric-bar.improved {
    background: var(--emerald-500);
}

.metric-bar.regressed {
    background: var(--amber-500);
}

/* Before/after comparison */
.comparison {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
    gap: 24px;
    margin-top: 40px;
}

.comparison-panel {
    padding: 24px;
    border: 1px solid var(--line);
    border-radius: var(--radius);
}

.comparison-panel.before {
    background: linear-gradient(to bottom right, #f0fdf4, #fff);
}

.comparison-panel.after {
    background: linear-gradient(to bottom right, var(--blue-50), #fff);
}

.comparison-panel h3 {
    margin: 0;
    font-size: 1rem;
}

.comparison-panel ul {
    margin: 12px 0 0;
    padding-left: 20px;
    font-size: 14px;
    color: var(--ink-700);
}

.comparison-panel li + li {
    margin-top: 8px;
}

/* Reviews */
.review-card {
    padding: 24px;
    border: 1px solid var(--line);
    border-radius: var(--radius);
    background: var(--surface);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.review-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.review-name {
    font-weight: 600;
}

.review-text {
    margin: 12px 0 0;
    font-size: 14px;
    color: var(--ink-700);
}

.star-rating {
    display: flex;
    align-items: center;
    gap: 2px;
}

.star {
    width: 16px;
    height: 16px;
}

/* CTA banner */
.cta-banner {
    padding: 40px 0;
    background: linear-gradient(to right, var(--brand), var(--indigo));
}

.cta-inner {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 16px;
}

.cta-title {
    margin: 0;
    color: #fff;
    font-size: 1.25rem;
    font-weight: 700;
}

.cta-lead {
    margin: 4px 0 0;
    color: var(--blue-100);
    font-size: 14px;
}

/* Booking */
.booking {
    padding: 64px 0;
}

.booking-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
    gap: 32px;
    align-items: start;
}

.booking-panel {
    padding: 24px;
    border: 1px solid var(--line-soft);
    border-radius: 16px;
    background: rgba(255, 255, 255, 0.7);
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
}

.booking-panel h3 {
    margin: 0;
    font-size: 1.5rem;
    font-weight: 700;
}

.booking-panel p {
    margin: 8px 0 0;
    color: var(--ink-600);
}

.integration-note {
    margin-top: 16px;
    padding: 12px;
    font-size: 12px;
    color: var(--brand-dark);
    background: var(--blue-50);
    border-radius: 6px;
}

.booking-panel .btn {
    margin-top: 16px;
}

.booking-frame {
    width: 100%;
    height: 560px;
    border: 1px solid var(--line);
    border-radius: var(--radius);
    overflow: hidden;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
}

.booking-frame iframe {
    width: 100%;
    height: 100%;
    border: 0;
}

/* Footer */
.site-footer {
    padding: 32px 0;
    text-align: center;
    font-size: 12px;
    color: var(--ink-500);
}
"#;

/// Content Security Policy for the rendered page.
///
/// `frame-src` admits only the origin of the booking embed. With the WASM
/// module enabled the policy also allows compiling it and fetching the
/// `.wasm` binary from the page's own origin.
///
/// ```rust
/// use audit_landing::styles::content_security_policy;
///
/// let csp = content_security_policy("https://calendly.com/acme", false);
/// assert!(csp.contains("frame-src https://calendly.com;"));
/// ```
pub fn content_security_policy(calendar_url: &str, wasm: bool) -> String {
    let frame_src = frame_origin(calendar_url).unwrap_or_else(|| "'none'".to_string());
    let (script_src, connect_src) = if wasm {
        ("'self' 'unsafe-inline' 'wasm-unsafe-eval'", "'self'")
    } else {
        ("'self' 'unsafe-inline'", "'none'")
    };

    format!(
        "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; \
         script-src {script_src}; connect-src {connect_src}; frame-src {frame_src};"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csp_without_wasm_blocks_connections() {
        let csp = content_security_policy("https://cal.example.com:8443/book", false);
        assert!(csp.contains("frame-src https://cal.example.com:8443;"));
        assert!(csp.contains("connect-src 'none';"));
        assert!(!csp.contains("wasm-unsafe-eval"));
    }

    #[test]
    fn csp_with_wasm_allows_module_fetch() {
        let csp = content_security_policy("https://cal.example.com", true);
        assert!(csp.contains("'wasm-unsafe-eval'"));
        assert!(csp.contains("connect-src 'self';"));
    }

    #[test]
    fn csp_for_malformed_url_blocks_frames() {
        let csp = content_security_policy("not a url", false);
        assert!(csp.contains("frame-src 'none';"));
    }
}
