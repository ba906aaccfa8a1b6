use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::{HtmlElement, Node};
use wasm_bindgen::JsCast;
use gloo_timers::callback::Timeout;

use crate::config::{DRAWER_SCROLL_DELAY_MS, MOBILE_MAX_WIDTH};
use crate::dom;
use crate::scroll::header_is_sticky;

#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Forside", href: "#top" },
    NavLink { label: "Om mig", href: "#om-mig" },
    NavLink { label: "Udtalelser", href: "#udtalelser" },
    NavLink { label: "Kontakt", href: "#kontakt" },
];

pub const COURSE_LINKS: &[NavLink] = &[
    NavLink { label: "Individuel coaching", href: "#forloeb" },
    NavLink { label: "Stresshåndtering", href: "#forloeb" },
    NavLink { label: "Parterapi", href: "#forloeb" },
];

#[function_component(CoursesDropdown)]
fn courses_dropdown() -> Html {
    let expanded = use_state(|| false);
    let item_ref = use_node_ref();

    let open = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(true))
    };
    let close = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(false))
    };
    let on_focus = {
        let expanded = expanded.clone();
        Callback::from(move |_: FocusEvent| expanded.set(true))
    };
    // Only collapse once focus has left the whole dropdown.
    let on_focus_out = {
        let expanded = expanded.clone();
        let item_ref = item_ref.clone();
        Callback::from(move |e: FocusEvent| {
            let still_inside = match (item_ref.cast::<HtmlElement>(), e.related_target()) {
                (Some(item), Some(next)) => next
                    .dyn_into::<Node>()
                    .map(|node| item.contains(Some(&node)))
                    .unwrap_or(false),
                _ => false,
            };
            if !still_inside {
                expanded.set(false);
            }
        })
    };

    html! {
        <li class="nav-item has-dropdown" ref={item_ref}
            onmouseenter={open} onmouseleave={close} onfocusout={on_focus_out}>
            <a href="#forloeb" class="nav-link"
                aria-expanded={if *expanded { "true" } else { "false" }}
                onfocus={on_focus}>
                {"Forløb"}
            </a>
            <ul class="dropdown-menu">
                { for COURSE_LINKS.iter().map(|link| html! {
                    <li><a href={link.href} class="dropdown-item">{link.label}</a></li>
                }) }
            </ul>
        </li>
    }
}

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let drawer_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let sticky = header_is_sticky(scroll_y);

    {
        let drawer_open = *drawer_open;
        use_effect_with_deps(
            move |open| {
                dom::set_body_class("drawer-open", *open);
                || ()
            },
            drawer_open,
        );
    }

    {
        let drawer_open = drawer_open.clone();
        use_event_with_window("resize", move |_: Event| {
            if dom::inner_width().map_or(false, |width| width > MOBILE_MAX_WIDTH) {
                drawer_open.set(false);
            }
        });
    }

    let open_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: MouseEvent| drawer_open.set(true))
    };
    let close_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_: MouseEvent| drawer_open.set(false))
    };

    // Close first, scroll once the drawer transition is done.
    let drawer_link = |href: &'static str| {
        let drawer_open = drawer_open.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(target) = dom::anchor_target(href) else {
                return;
            };
            e.prevent_default();
            e.stop_propagation();
            drawer_open.set(false);
            let target = target.to_string();
            Timeout::new(DRAWER_SCROLL_DELAY_MS, move || dom::smooth_scroll_to_id(&target)).forget();
        })
    };

    let active = (*drawer_open).then(|| "active");

    html! {
        <>
            <header class={classes!("site-header", sticky.then(|| "sticky-header"))}>
                <div class="header-inner">
                    <a href="#top" class="logo">{"Inger Coaching"}</a>
                    <nav class="main-nav">
                        <ul class="nav-list">
                            { for NAV_LINKS.iter().take(2).map(|link| html! {
                                <li class="nav-item"><a href={link.href} class="nav-link">{link.label}</a></li>
                            }) }
                            <CoursesDropdown />
                            { for NAV_LINKS.iter().skip(2).map(|link| html! {
                                <li class="nav-item"><a href={link.href} class="nav-link">{link.label}</a></li>
                            }) }
                        </ul>
                    </nav>
                    <button class={classes!("mobile-menu-toggle", (*drawer_open).then(|| "open"))}
                        aria-label="Åbn menu" onclick={open_drawer}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>
            <div class={classes!("mobile-drawer-overlay", active)} onclick={close_drawer.clone()}></div>
            <aside class={classes!("mobile-drawer", active)}>
                <button class="drawer-close" aria-label="Luk menu" onclick={close_drawer}>{"×"}</button>
                <ul class="drawer-list">
                    { for NAV_LINKS.iter().chain(COURSE_LINKS.iter().take(1)).map(|link| html! {
                        <li><a href={link.href} class="drawer-link" onclick={drawer_link(link.href)}>{link.label}</a></li>
                    }) }
                </ul>
                <a href="#kontakt" class="drawer-button" onclick={drawer_link("#kontakt")}>{"Book tid"}</a>
            </aside>
        </>
    }
}
