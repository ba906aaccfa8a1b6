use yew::prelude::*;
use web_sys::HtmlInputElement;
use gloo_console::log;

use crate::forms::feedback::{use_form_feedback, FormFeedback};
use crate::forms::validation::{field_style, validate_newsletter, NEWSLETTER_SUCCESS};

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let email = use_state(String::new);
    let consent = use_state(|| false);
    let email_invalid = use_state(|| None::<bool>);
    let feedback = use_form_feedback();

    let onsubmit = {
        let email = email.clone();
        let consent = consent.clone();
        let email_invalid = email_invalid.clone();
        let feedback = feedback.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate_newsletter(&email, *consent) {
                Ok(address) => {
                    log!("Newsletter signup valid:", address);
                    feedback.show(NEWSLETTER_SUCCESS, true);
                    email.set(String::new());
                    consent.set(false);
                    email_invalid.set(Some(false));
                }
                Err(err) => {
                    email_invalid.set(Some(err.email_invalid()));
                    feedback.show(err.to_string(), false);
                }
            }
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_consent = {
        let consent = consent.clone();
        Callback::from(move |e: Event| {
            consent.set(e.target_unchecked_into::<HtmlInputElement>().checked());
        })
    };

    html! {
        <form class="newsletter-form" onsubmit={onsubmit} novalidate=true>
            <div class="newsletter-input">
                <input type="email" placeholder="Din email"
                    value={(*email).clone()}
                    style={field_style(*email_invalid)}
                    oninput={on_email} />
                <button type="submit" class="newsletter-button">{"Tilmeld"}</button>
            </div>
            <label class="checkbox-container">
                <input type="checkbox" checked={*consent} onchange={on_consent} />
                <span>{"Jeg accepterer at modtage nyhedsbreve og betingelserne."}</span>
            </label>
            <FormFeedback feedback={feedback.feedback()} in_footer=true />
        </form>
    }
}
