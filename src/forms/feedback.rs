use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{FEEDBACK_FADE_MS, FEEDBACK_VISIBLE_MS};

#[derive(Clone, Debug, PartialEq)]
pub struct Feedback {
    pub message: String,
    pub success: bool,
    pub fading: bool,
}

/// (text color, background) for a feedback box. Footer forms sit on a dark
/// background and get lighter tones.
pub fn feedback_palette(success: bool, in_footer: bool) -> (&'static str, &'static str) {
    match (success, in_footer) {
        (true, true) => ("white", "rgba(255, 255, 255, 0.1)"),
        (true, false) => ("#27ae60", "rgba(39, 174, 96, 0.1)"),
        (false, true) => ("#ffcccc", "rgba(255, 0, 0, 0.1)"),
        (false, false) => ("#e74c3c", "rgba(231, 76, 60, 0.1)"),
    }
}

pub fn feedback_style(feedback: &Feedback, in_footer: bool) -> String {
    let (color, background) = feedback_palette(feedback.success, in_footer);
    let opacity = if feedback.fading { "0" } else { "1" };
    format!(
        "margin-top: 15px; padding: 10px; border-radius: 8px; color: {}; background-color: {}; opacity: {}; transition: opacity 0.5s ease;",
        color, background, opacity
    )
}

#[derive(Clone)]
pub struct FeedbackHandle {
    current: UseStateHandle<Option<Feedback>>,
    generation: Rc<RefCell<u32>>,
}

impl FeedbackHandle {
    pub fn feedback(&self) -> Option<Feedback> {
        (*self.current).clone()
    }

    /// Replaces whatever feedback is showing. The box fades after a while
    /// and is then removed, unless a newer message took its place.
    pub fn show(&self, message: impl Into<String>, success: bool) {
        let generation = {
            let mut counter = self.generation.borrow_mut();
            *counter += 1;
            *counter
        };
        let feedback = Feedback {
            message: message.into(),
            success,
            fading: false,
        };
        self.current.set(Some(feedback.clone()));

        let current = self.current.clone();
        let counter = self.generation.clone();
        Timeout::new(FEEDBACK_VISIBLE_MS, move || {
            if *counter.borrow() != generation {
                return;
            }
            current.set(Some(Feedback { fading: true, ..feedback }));
            Timeout::new(FEEDBACK_FADE_MS, move || {
                if *counter.borrow() == generation {
                    current.set(None);
                }
            })
            .forget();
        })
        .forget();
    }
}

#[hook]
pub fn use_form_feedback() -> FeedbackHandle {
    let current = use_state(|| None::<Feedback>);
    let generation = use_mut_ref(|| 0u32);
    FeedbackHandle { current, generation }
}

#[derive(Properties, PartialEq)]
pub struct FormFeedbackProps {
    pub feedback: Option<Feedback>,
    #[prop_or_default]
    pub in_footer: bool,
}

#[function_component(FormFeedback)]
pub fn form_feedback(props: &FormFeedbackProps) -> Html {
    match &props.feedback {
        Some(feedback) => html! {
            <div class="form-feedback" role="status" style={feedback_style(feedback, props.in_footer)}>
                {&feedback.message}
            </div>
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_depends_on_placement() {
        assert_eq!(feedback_palette(true, false).0, "#27ae60");
        assert_eq!(feedback_palette(true, true).0, "white");
        assert_eq!(feedback_palette(false, true).0, "#ffcccc");
        assert_eq!(feedback_palette(false, false).1, "rgba(231, 76, 60, 0.1)");
    }

    #[test]
    fn fading_feedback_is_transparent() {
        let mut feedback = Feedback {
            message: "Tak".to_string(),
            success: true,
            fading: false,
        };
        assert!(feedback_style(&feedback, false).contains("opacity: 1;"));
        feedback.fading = true;
        assert!(feedback_style(&feedback, false).contains("opacity: 0;"));
    }
}
