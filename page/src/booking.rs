//! Booking widget configuration and in-page anchors.
//!
//! The scheduling provider is an opaque iframe: the page only knows its URL.

use url::Url;

/// Environment variable holding the scheduling embed URL.
pub const CALENDAR_URL_ENV: &str = "CALENDAR_URL";

/// Embed URL used when nothing is configured.
pub const DEFAULT_CALENDAR_URL: &str = "https://calendly.com/sample-agency/google-ads-audit?hide_event_type_details=1&hide_gdpr_banner=1";

/// Anchor id of the booking section, target of every "Book" control.
pub const BOOKING_ANCHOR: &str = "booking";

/// Anchor id of the results section.
pub const RESULTS_ANCHOR: &str = "results";

/// Anchor id of the reviews section.
pub const REVIEWS_ANCHOR: &str = "reviews";

/// Pick the configured embed URL, or the default when unset or blank.
///
/// ```rust
/// use audit_landing::booking::{resolve_calendar_url, DEFAULT_CALENDAR_URL};
///
/// assert_eq!(resolve_calendar_url(None), DEFAULT_CALENDAR_URL);
/// assert_eq!(resolve_calendar_url(Some("  ")), DEFAULT_CALENDAR_URL);
/// assert_eq!(
///     resolve_calendar_url(Some("https://cal.example.com/x")),
///     "https://cal.example.com/x"
/// );
/// ```
pub fn resolve_calendar_url(configured: Option<&str>) -> String {
    match configured.map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => DEFAULT_CALENDAR_URL.to_string(),
    }
}

/// `scheme://host[:port]` of an embed URL, used for the CSP `frame-src`.
///
/// Parsed the way a browser parses the iframe `src`, so the origin allowed
/// here is the origin the frame actually loads. Returns `None` when the URL
/// does not parse or has an opaque origin. The URL itself is never
/// rejected; a malformed one just yields a blank frame.
pub fn frame_origin(url: &str) -> Option<String> {
    let origin = Url::parse(url).ok()?.origin();
    origin
        .is_tuple()
        .then(|| origin.ascii_serialization())
}
