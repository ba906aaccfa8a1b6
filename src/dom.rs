//! Thin wrappers over `web_sys::window()` lookups. Every helper degrades to a
//! no-op (or a fallback value) when the element it needs is missing.

use web_sys::{window, Element, HtmlElement, ScrollBehavior, ScrollToOptions};
use wasm_bindgen::JsCast;

use crate::config::FALLBACK_HEADER_HEIGHT;

pub fn inner_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

pub fn inner_height() -> Option<f64> {
    window()?.inner_height().ok()?.as_f64()
}

pub fn page_y_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn element_by_id(id: &str) -> Option<Element> {
    window()?.document()?.get_element_by_id(id)
}

pub fn query(selector: &str) -> Option<Element> {
    window()?.document()?.query_selector(selector).ok().flatten()
}

/// Height of the site header, used so scroll targets don't end up under it.
pub fn header_height() -> f64 {
    query(".site-header")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .filter(|height| *height > 0.0)
        .unwrap_or(FALLBACK_HEADER_HEIGHT)
}

/// Document-relative y position to scroll to so `element` lands just below
/// the header.
pub fn scroll_target(element_top: f64, page_y: f64, header_height: f64) -> f64 {
    element_top + page_y - header_height
}

pub fn smooth_scroll_to_y(top: f64) {
    if let Some(window) = window() {
        let mut options = ScrollToOptions::new();
        options.top(top);
        options.behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn smooth_scroll_to(element: &Element) {
    let top = element.get_bounding_client_rect().top();
    smooth_scroll_to_y(scroll_target(top, page_y_offset(), header_height()));
}

pub fn smooth_scroll_to_id(id: &str) {
    match element_by_id(id) {
        Some(element) => smooth_scroll_to(&element),
        None => log::debug!("No scroll target with id '{}'", id),
    }
}

pub fn set_body_class(class: &str, enabled: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    let _ = if enabled { classes.add_1(class) } else { classes.remove_1(class) };
}

pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// Target id of an in-page anchor (`#id`). A bare `#` is not a target.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_targets() {
        assert_eq!(anchor_target("#kontakt"), Some("kontakt"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/om-mig"), None);
        assert_eq!(anchor_target("https://example.com/#top"), None);
    }

    #[test]
    fn scroll_target_subtracts_header() {
        assert_eq!(scroll_target(400.0, 1200.0, 80.0), 1520.0);
        assert_eq!(scroll_target(-200.0, 1200.0, 80.0), 920.0);
    }
}
