use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use gloo_timers::callback::Timeout;
use gloo_console::log;

use crate::config::{SUBMIT_SENDING_MS, SUBMIT_SENT_HOLD_MS};
use crate::forms::feedback::{use_form_feedback, FormFeedback};
use crate::forms::validation::{
    field_style, validate_contact, ContactError, ContactFieldErrors, ContactInput, CONTACT_SUCCESS,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Sent,
}

impl SubmitStatus {
    pub fn label(self) -> &'static str {
        match self {
            SubmitStatus::Idle => "Send besked",
            SubmitStatus::Sending => "Sender...",
            SubmitStatus::Sent => "Besked sendt!",
        }
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let input = use_state(ContactInput::default);
    let errors = use_state(|| None::<ContactFieldErrors>);
    let status = use_state(|| SubmitStatus::Idle);
    let feedback = use_form_feedback();

    let onsubmit = {
        let input = input.clone();
        let errors = errors.clone();
        let status = status.clone();
        let feedback = feedback.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status != SubmitStatus::Idle {
                return;
            }
            match validate_contact(&input) {
                Ok(submission) => {
                    errors.set(Some(ContactFieldErrors::default()));
                    status.set(SubmitStatus::Sending);

                    let input = input.clone();
                    let errors = errors.clone();
                    let status = status.clone();
                    let feedback = feedback.clone();
                    Timeout::new(SUBMIT_SENDING_MS, move || {
                        let payload = serde_json::to_string(&submission).unwrap_or_default();
                        log!("Contact form valid, simulated submit:", payload);

                        feedback.show(CONTACT_SUCCESS, true);
                        input.set(ContactInput::default());
                        errors.set(Some(ContactFieldErrors::default()));
                        status.set(SubmitStatus::Sent);

                        Timeout::new(SUBMIT_SENT_HOLD_MS, move || {
                            status.set(SubmitStatus::Idle);
                        })
                        .forget();
                    })
                    .forget();
                }
                Err(err) => {
                    let ContactError::Incomplete(fields) = &err;
                    errors.set(Some(*fields));
                    feedback.show(err.to_string(), false);
                }
            }
        })
    };

    let field_invalid = |pick: fn(&ContactFieldErrors) -> bool| (*errors).as_ref().map(pick);

    let on_name = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let name = e.target_unchecked_into::<HtmlInputElement>().value();
            input.set(ContactInput { name, ..(*input).clone() });
        })
    };
    let on_email = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let email = e.target_unchecked_into::<HtmlInputElement>().value();
            input.set(ContactInput { email, ..(*input).clone() });
        })
    };
    let on_subject = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let subject = e.target_unchecked_into::<HtmlInputElement>().value();
            input.set(ContactInput { subject, ..(*input).clone() });
        })
    };
    let on_message = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let message = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            input.set(ContactInput { message, ..(*input).clone() });
        })
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit} novalidate=true>
            <div class="form-group">
                <label for="name">{"Navn"}</label>
                <input id="name" type="text" required=true
                    value={input.name.clone()}
                    style={field_style(field_invalid(|f| f.name))}
                    oninput={on_name} />
            </div>
            <div class="form-group">
                <label for="email">{"Email"}</label>
                <input id="email" type="email" required=true
                    value={input.email.clone()}
                    style={field_style(field_invalid(|f| f.email))}
                    oninput={on_email} />
            </div>
            <div class="form-group">
                <label for="subject">{"Emne"}</label>
                <input id="subject" type="text" required=true
                    value={input.subject.clone()}
                    style={field_style(field_invalid(|f| f.subject))}
                    oninput={on_subject} />
            </div>
            <div class="form-group">
                <label for="message">{"Besked"}</label>
                <textarea id="message" rows="5" required=true
                    value={input.message.clone()}
                    style={field_style(field_invalid(|f| f.message))}
                    oninput={on_message} />
            </div>
            <button type="submit"
                class={classes!("submit-button", (*status == SubmitStatus::Sent).then(|| "success"))}
                disabled={*status != SubmitStatus::Idle}>
                {status.label()}
            </button>
            <FormFeedback feedback={feedback.feedback()} />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_labels() {
        assert_eq!(SubmitStatus::Idle.label(), "Send besked");
        assert_eq!(SubmitStatus::Sending.label(), "Sender...");
        assert_eq!(SubmitStatus::Sent.label(), "Besked sendt!");
    }
}
