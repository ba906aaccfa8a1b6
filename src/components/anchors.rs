use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::Element;
use wasm_bindgen::JsCast;

use crate::dom;

/// Turns every in-page `<a href="#id">` click into a smooth scroll that
/// stops just below the header.
#[hook]
pub fn use_smooth_anchor_scroll() {
    use_event_with_window("click", move |e: MouseEvent| {
        if e.default_prevented() {
            return;
        }
        let Some(link) = e
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|element| element.closest("a").ok().flatten())
        else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        if let Some(id) = dom::anchor_target(&href) {
            e.prevent_default();
            dom::smooth_scroll_to_id(id);
        }
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaBehavior {
    /// `#id`, handled by the smooth scroll listener.
    Scroll,
    /// Real link, let the browser navigate.
    Navigate,
    /// `#` or nothing: booking flow is not built yet.
    Placeholder,
}

pub fn cta_behavior(href: Option<&str>) -> CtaBehavior {
    match href {
        Some(href) if dom::anchor_target(href).is_some() => CtaBehavior::Scroll,
        Some(href) if !href.is_empty() && href != "#" => CtaBehavior::Navigate,
        _ => CtaBehavior::Placeholder,
    }
}

pub const BOOKING_PLACEHOLDER: &str = "Booking formular/modal åbner her.";
pub const APPROACH_PLACEHOLDER: &str = "Mere information om coaching tilgangen vil vises her (modal/sektion).";

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or(AttrValue::Static("cta-button"))]
    pub class: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let behavior = cta_behavior(props.href.as_deref());
    let outline = props.class.split_whitespace().any(|c| c == "outline-button");

    let onclick = Callback::from(move |e: MouseEvent| {
        if behavior == CtaBehavior::Placeholder {
            e.prevent_default();
            dom::alert(if outline { APPROACH_PLACEHOLDER } else { BOOKING_PLACEHOLDER });
        }
    });

    html! {
        <a href={props.href.clone().unwrap_or_else(|| AttrValue::from("#"))}
            class={props.class.to_string()} onclick={onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cta_behaviors() {
        assert_eq!(cta_behavior(Some("#kontakt")), CtaBehavior::Scroll);
        assert_eq!(cta_behavior(Some("https://booking.example.dk")), CtaBehavior::Navigate);
        assert_eq!(cta_behavior(Some("#")), CtaBehavior::Placeholder);
        assert_eq!(cta_behavior(Some("")), CtaBehavior::Placeholder);
        assert_eq!(cta_behavior(None), CtaBehavior::Placeholder);
    }
}
