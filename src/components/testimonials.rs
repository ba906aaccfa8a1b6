use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::HtmlElement;
use wasm_bindgen::JsCast;
use log::{debug, warn};

use crate::carousel::expand::{ExpandableText, Testimonial, TestimonialData};
use crate::carousel::state::{
    compute_visible_count, parse_gap, CarouselEvent, CarouselState, Direction, TrackLayout,
};
use crate::dom;

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: Testimonial,
    pub full_text: Option<String>,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let text = use_state(|| {
        ExpandableText::new(props.testimonial.excerpt.clone(), props.full_text.clone())
    });

    let toggle = {
        let text = text.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = (*text).clone();
            next.toggle();
            text.set(next);
        })
    };

    html! {
        <div class={classes!("testimonial-card", text.is_expanded().then(|| "expanded"))}>
            <p class="testimonial-text">{text.text().to_string()}</p>
            <button class="testimonial-read-more" onclick={toggle}>
                {text.label()}
            </button>
            <div class="testimonial-author">
                <h3>{&props.testimonial.author}</h3>
                <span>{&props.testimonial.role}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialSliderProps {
    pub data: Rc<TestimonialData>,
}

/// Reads card width and track gap from the rendered track.
fn measure(track: &HtmlElement) -> Option<TrackLayout> {
    let first_card = track
        .first_element_child()
        .and_then(|card| card.dyn_into::<HtmlElement>().ok())?;
    let gap = web_sys::window()
        .and_then(|w| w.get_computed_style(track).ok().flatten())
        .and_then(|style| style.get_property_value("gap").ok())
        .map(|raw| parse_gap(&raw))
        .unwrap_or_else(|| parse_gap(""));
    Some(TrackLayout {
        card_width: first_card.offset_width() as f64,
        gap,
    })
}

#[function_component(TestimonialSlider)]
pub fn testimonial_slider(props: &TestimonialSliderProps) -> Html {
    let total = props.data.cards.len();
    let carousel = use_reducer(|| CarouselState::new(total, dom::inner_width().unwrap_or(0.0)));
    let layout = use_state(TrackLayout::default);
    let track_ref = use_node_ref();

    {
        let dispatcher = carousel.dispatcher();
        use_event_with_window("resize", move |_: Event| {
            if let Some(width) = dom::inner_width() {
                debug!("Carousel resize to {}px, {} visible", width, compute_visible_count(width));
                dispatcher.dispatch(CarouselEvent::Resize(width));
            }
        });
    }

    {
        use_effect_with_deps(
            move |total| {
                if *total == 0 {
                    warn!("Testimonial slider has no cards");
                }
                || ()
            },
            total,
        );
    }

    // Card width is a share of the track, so measure after every resize.
    {
        let track_ref = track_ref.clone();
        let layout = layout.clone();
        let warned = use_mut_ref(|| false);
        use_effect_with_deps(
            move |_| {
                match track_ref.cast::<HtmlElement>().and_then(|track| measure(&track)) {
                    Some(measured) => {
                        if measured != *layout {
                            debug!("Carousel track measured: {:?}", measured);
                            layout.set(measured);
                        }
                    }
                    None if total > 0 && !*warned.borrow() => {
                        *warned.borrow_mut() = true;
                        warn!("Testimonial slider elements not found or incomplete.");
                    }
                    None => {}
                }
                || ()
            },
            carousel.measure_key(),
        );
    }

    if total == 0 {
        return html! {
            <div class="testimonials-container"></div>
        };
    }

    let plan = carousel.render(*layout);

    let on_prev = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselEvent::Advance(Direction::Previous)))
    };
    let on_next = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselEvent::Advance(Direction::Next)))
    };

    html! {
        <div class="testimonials-container"
            data-index={carousel.current_index().to_string()}
            data-total={carousel.total_cards().to_string()}>
            <style>
                {r#"
                .testimonials-viewport {
                    overflow: hidden;
                    width: 100%;
                }
                .testimonials-slider {
                    display: flex;
                    gap: 20px;
                    transition: transform 0.5s ease;
                }
                .testimonial-card {
                    flex: 0 0 calc((100% - 40px) / 3);
                    background: white;
                    border-radius: 12px;
                    padding: 2rem;
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
                }
                .testimonial-read-more {
                    background: none;
                    border: none;
                    color: #2F4E52;
                    font-weight: 600;
                    cursor: pointer;
                    padding: 0;
                }
                .testimonial-nav {
                    align-items: center;
                    justify-content: center;
                    width: 44px;
                    height: 44px;
                    border-radius: 50%;
                    border: none;
                    background: #E7C27B;
                    color: #2F4E52;
                }
                @media (max-width: 1024px) {
                    .testimonial-card {
                        flex: 0 0 calc((100% - 20px) / 2);
                    }
                }
                @media (max-width: 768px) {
                    .testimonials-slider {
                        flex-direction: column;
                    }
                    .testimonial-card {
                        flex: 1 1 auto;
                    }
                }
                "#}
            </style>
            <button class="testimonial-nav prev-button"
                aria-label="Forrige"
                disabled={plan.prev_disabled()}
                style={plan.control_style(plan.prev_disabled())}
                onclick={on_prev}>
                {"‹"}
            </button>
            <div class="testimonials-viewport">
                <div class="testimonials-slider" ref={track_ref} style={plan.track_style()}>
                    { for props.data.cards.iter().map(|card| html! {
                        <TestimonialCard
                            key={card.author.clone()}
                            testimonial={card.clone()}
                            full_text={props.data.full_text_for(&card.author).map(str::to_string)}
                        />
                    }) }
                </div>
            </div>
            <button class="testimonial-nav next-button"
                aria-label="Næste"
                disabled={plan.next_disabled()}
                style={plan.control_style(plan.next_disabled())}
                onclick={on_next}>
                {"›"}
            </button>
        </div>
    }
}
