use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::Element;
use gloo_timers::callback::Timeout;

use crate::config::REVEAL_INITIAL_DELAY_MS;
use crate::dom;
use crate::scroll::{should_reveal, stagger_delay_ms};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(AttrValue::Static("fade-in"))]
    pub class: AttrValue,
    /// Position in a staggered group (control points); `None` activates
    /// immediately.
    #[prop_or_default]
    pub stagger: Option<usize>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that gains the `active` class once it scrolls into view and
/// keeps it.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let active = use_state(|| false);
    let pending = use_mut_ref(|| false);
    let checks = use_state(|| 0u32);
    let (_, scroll_y) = use_window_scroll();

    // First check shortly after mount, before any scrolling.
    {
        let checks = checks.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(REVEAL_INITIAL_DELAY_MS, move || checks.set(1));
                move || drop(timeout)
            },
            (),
        );
    }

    {
        let node = node.clone();
        let active = active.clone();
        let stagger = props.stagger;
        use_effect_with_deps(
            move |(_, checks)| {
                if *checks > 0 && !*active && !*pending.borrow() {
                    let in_view = match (node.cast::<Element>(), dom::inner_height()) {
                        (Some(element), Some(height)) => {
                            should_reveal(element.get_bounding_client_rect().top(), height)
                        }
                        _ => false,
                    };
                    if in_view {
                        match stagger {
                            Some(index) => {
                                *pending.borrow_mut() = true;
                                Timeout::new(stagger_delay_ms(index), move || active.set(true)).forget();
                            }
                            None => active.set(true),
                        }
                    }
                }
                || ()
            },
            (scroll_y as i64, *checks),
        );
    }

    html! {
        <div ref={node} id={props.id.clone()} class={classes!(props.class.to_string(), (*active).then(|| "active"))}>
            { for props.children.iter() }
        </div>
    }
}
