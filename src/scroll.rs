use crate::config::{
    BACK_TO_TOP_THRESHOLD, BOOK_BUTTON_HIDE_MARGIN, BOOK_BUTTON_SHOW_THRESHOLD,
    REVEAL_STAGGER_MS, REVEAL_VIEWPORT_RATIO, STICKY_HEADER_THRESHOLD,
};

pub fn header_is_sticky(scroll_top: f64) -> bool {
    scroll_top > STICKY_HEADER_THRESHOLD
}

pub fn back_to_top_visible(scroll_top: f64) -> bool {
    scroll_top > BACK_TO_TOP_THRESHOLD
}

/// Inline style for floating buttons that slide in from slightly below.
pub fn floating_style(visible: bool) -> &'static str {
    if visible {
        "opacity: 1; visibility: visible; transform: translateY(0);"
    } else {
        "opacity: 0; visibility: hidden; transform: translateY(10px);"
    }
}

/// Scroll offset past which the book button gets out of the way of the
/// contact section.
pub fn book_button_hide_threshold(contact_top: f64, page_y: f64, inner_height: f64) -> f64 {
    contact_top + page_y - inner_height + BOOK_BUTTON_HIDE_MARGIN
}

/// `Some(visible)` when a scroll should change the book button, `None` to
/// leave it as it is.
pub fn book_button_visibility(scroll_top: f64, hide_threshold: f64) -> Option<bool> {
    if scroll_top > hide_threshold {
        Some(false)
    } else if scroll_top > BOOK_BUTTON_SHOW_THRESHOLD {
        Some(true)
    } else {
        None
    }
}

pub fn should_reveal(element_top: f64, inner_height: f64) -> bool {
    element_top < inner_height * REVEAL_VIEWPORT_RATIO
}

pub fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * REVEAL_STAGGER_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sticky_header_after_threshold() {
        assert!(!header_is_sticky(0.0));
        assert!(!header_is_sticky(50.0));
        assert!(header_is_sticky(51.0));
    }

    #[test]
    fn back_to_top_after_threshold() {
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(301.0));
        assert_eq!(floating_style(false), "opacity: 0; visibility: hidden; transform: translateY(10px);");
    }

    #[test]
    fn book_button_hides_near_contact() {
        let threshold = book_button_hide_threshold(3000.0, 500.0, 800.0);
        assert_eq!(threshold, 2850.0);
        assert_eq!(book_button_visibility(2900.0, threshold), Some(false));
        assert_eq!(book_button_visibility(1200.0, threshold), Some(true));
        assert_eq!(book_button_visibility(40.0, threshold), None);
    }

    #[test]
    fn book_button_without_contact_section_never_hides() {
        assert_eq!(book_button_visibility(1.0e9, f64::INFINITY), Some(true));
    }

    #[test]
    fn reveal_below_fold_ratio() {
        assert!(should_reveal(600.0, 800.0));
        assert!(!should_reveal(680.0, 800.0));
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(3), 450);
    }
}
