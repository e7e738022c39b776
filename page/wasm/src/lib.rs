//! WASM module for the landing page's scroll-to-booking controls.
//!
//! Rust replacement for the page's inline script: every element carrying a
//! `data-scroll-target` attribute smooth-scrolls the viewport to the element
//! with that id when clicked. A missing target is a silent no-op.
//!
//! Build with `wasm-pack build --target web` and pass the generated glue
//! path to `audit_landing::ScriptAssets::wasm_glue_path`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

pub use audit_landing::booking::{BOOKING_ANCHOR, RESULTS_ANCHOR};

/// Attribute naming the anchor a control scrolls to.
pub const SCROLL_TARGET_ATTR: &str = "data-scroll-target";

/// Install the panic hook and bind every scroll control on the page.
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let bound = bind_scroll_targets()?;
    web_sys::console::debug_1(&format!("audit-landing-wasm: bound {} scroll controls", bound).into());
    Ok(())
}

/// Smooth-scroll the viewport to the element with `id`.
///
/// Returns `false` (and does nothing) when there is no window, no document,
/// or no such element. The animation is fire-and-forget; a second call
/// before it finishes simply retargets it.
#[wasm_bindgen]
pub fn scroll_to_anchor(id: &str) -> bool {
    let Some(target) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Scroll to the booking section.
#[wasm_bindgen]
pub fn scroll_to_booking() -> bool {
    scroll_to_anchor(BOOKING_ANCHOR)
}

/// Attach click handlers to all `[data-scroll-target]` elements.
///
/// Returns how many controls were bound. Controls with an empty target are
/// skipped.
#[wasm_bindgen]
pub fn bind_scroll_targets() -> Result<u32, JsValue> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Ok(0);
    };

    let controls = document.query_selector_all(&format!("[{}]", SCROLL_TARGET_ATTR))?;
    let mut bound = 0;
    for idx in 0..controls.length() {
        let Some(control) = controls
            .item(idx)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let Some(target) = target_id(control.get_attribute(SCROLL_TARGET_ATTR)) else {
            continue;
        };

        let handler = Closure::<dyn FnMut()>::new(move || {
            scroll_to_anchor(&target);
        });
        control.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        // Controls live as long as the page.
        handler.forget();
        bound += 1;
    }

    Ok(bound)
}

/// Normalize a `data-scroll-target` value into an element id.
fn target_id(raw: Option<String>) -> Option<String> {
    let raw = raw?;
    let id = raw.trim().trim_start_matches('#');
    (!id.is_empty()).then(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_id_accepts_plain_and_hash_ids() {
        assert_eq!(target_id(Some("booking".into())).as_deref(), Some("booking"));
        assert_eq!(target_id(Some(" #results ".into())).as_deref(), Some("results"));
    }

    #[test]
    fn target_id_skips_empty_values() {
        assert_eq!(target_id(None), None);
        assert_eq!(target_id(Some(String::new())), None);
        assert_eq!(target_id(Some(" # ".into())), None);
    }

    #[test]
    fn anchors_match_renderer() {
        assert_eq!(BOOKING_ANCHOR, "booking");
        assert_eq!(RESULTS_ANCHOR, "results");
    }
}
