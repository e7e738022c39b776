//! Render the demo landing page to `landing_demo.html`.
//!
//! Run with: `cargo run --example render_demo`

use audit_landing::booking::{resolve_calendar_url, CALENDAR_URL_ENV};
use audit_landing::{render_landing, types::LandingData, PageOptions};

fn main() {
    let calendar_url = resolve_calendar_url(std::env::var(CALENDAR_URL_ENV).ok().as_deref());
    let options = PageOptions::new(calendar_url, 2025);

    let html = render_landing(&LandingData::demo(), &options);

    let output_path = "landing_demo.html";
    std::fs::write(output_path, &html).expect("Failed to write landing page");

    println!("Landing page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
