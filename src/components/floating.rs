use yew::prelude::*;
use yew_hooks::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config::{BOOK_BUTTON_SHOW_DELAY_MS, CONTACT_SECTION_ID};
use crate::dom;
use crate::scroll::{back_to_top_visible, book_button_hide_threshold, book_button_visibility, floating_style};

const BACK_TO_TOP_STYLE: &str = "position: fixed; bottom: 20px; right: 20px; background-color: #E7C27B; \
    color: #2F4E52; width: 45px; height: 45px; border-radius: 50%; border: none; \
    box-shadow: 0 2px 10px rgba(0,0,0,0.15); cursor: pointer; display: flex; \
    justify-content: center; align-items: center; font-size: 20px; font-weight: bold; \
    transition: opacity 0.3s ease, visibility 0.3s ease, transform 0.3s ease; z-index: 98;";

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let visible = back_to_top_visible(scroll_y);

    let onclick = Callback::from(|_: MouseEvent| dom::smooth_scroll_to_y(0.0));

    html! {
        <button class="back-to-top" aria-label="Tilbage til toppen" onclick={onclick}
            style={format!("{} {}", BACK_TO_TOP_STYLE, floating_style(visible))}>
            {"↑"}
        </button>
    }
}

fn contact_hide_threshold() -> f64 {
    match (dom::element_by_id(CONTACT_SECTION_ID).or_else(|| dom::query(".contact-section")), dom::inner_height()) {
        (Some(contact), Some(height)) => book_button_hide_threshold(
            contact.get_bounding_client_rect().top(),
            dom::page_y_offset(),
            height,
        ),
        _ => f64::INFINITY,
    }
}

/// Floating "Book tid" shortcut to the contact section. Appears after a
/// short delay and steps aside once the contact section is close.
#[function_component(StickyBookButton)]
pub fn sticky_book_button() -> Html {
    let visible = use_state(|| false);
    let hide_threshold = use_mut_ref(|| f64::INFINITY);
    let (_, scroll_y) = use_window_scroll();

    {
        let visible = visible.clone();
        let hide_threshold = hide_threshold.clone();
        use_effect_with_deps(
            move |_| {
                *hide_threshold.borrow_mut() = contact_hide_threshold();
                let timeout = Timeout::new(BOOK_BUTTON_SHOW_DELAY_MS, move || visible.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    {
        let hide_threshold = hide_threshold.clone();
        use_event_with_window("resize", move |_: Event| {
            *hide_threshold.borrow_mut() = contact_hide_threshold();
        });
    }

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |scroll_y| {
                let threshold = *hide_threshold.borrow();
                if let Some(show) = book_button_visibility(*scroll_y as f64, threshold) {
                    if show != *visible {
                        visible.set(show);
                    }
                }
                || ()
            },
            scroll_y as i64,
        );
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        e.stop_propagation();
        match dom::element_by_id(CONTACT_SECTION_ID).or_else(|| dom::query(".contact-section")) {
            Some(contact) => dom::smooth_scroll_to(&contact),
            None => log::debug!("Contact section missing, book button inert"),
        }
    });

    html! {
        <a href={format!("#{}", CONTACT_SECTION_ID)} class="sticky-book-button"
            style={floating_style(*visible)} onclick={onclick}>
            {"Book tid"}
        </a>
    }
}
