//! Smooth scrolling helpers. Every function here is best-effort: a missing
//! window, document or target element simply means nothing happens.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config::SCROLL_MARGIN_PX;

/// Height of the fixed site header, so scrolled-to sections don't end up
/// hidden underneath it.
fn header_offset(document: &web_sys::Document) -> f64 {
    document
        .query_selector(".site-header")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0)
}

fn smooth_scroll_to(window: &web_sys::Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smooth-scrolls to the section with the given id, offset by the header
/// height, and records the hash in the history without jumping.
pub fn scroll_to_section(id: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(target) = document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                let top = target.offset_top() as f64 - header_offset(&document) - SCROLL_MARGIN_PX;
                smooth_scroll_to(&window, top.max(0.0));
                if let Ok(history) = window.history() {
                    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", id)));
                }
            }
        }
    }
}

/// Scrolls to the waitlist section and focuses its email field once the
/// scroll has had time to settle.
pub fn scroll_to_waitlist_and_focus() {
    scroll_to_section("waitlist");
    wasm_bindgen_futures::spawn_local(async {
        TimeoutFuture::new(800).await;
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(input) = document
                .query_selector("#waitlist input[type='email']")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                let _ = input.focus();
            }
        }
    });
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        smooth_scroll_to(&window, 0.0);
    }
}
