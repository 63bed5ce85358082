use web_sys::HtmlElement;

/// True once the element's top edge has entered the viewport, where
/// `fraction` scales the viewport height (0.85 triggers slightly before the
/// element reaches the bottom of the screen).
pub fn in_lower_viewport(el: &HtmlElement, fraction: f64) -> bool {
    if let Some(window) = web_sys::window() {
        let viewport = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        el.get_bounding_client_rect().top() < viewport * fraction
    } else {
        false
    }
}
