use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub const INVALID_BORDER: &str = "border-color: #e74c3c; background-color: rgba(231, 76, 60, 0.05);";
pub const VALID_BORDER: &str = "border-color: #e1e8e9; background-color: white;";

/// Inline style for a field after a submit attempt. `None` means the field
/// was never checked and keeps its stylesheet look.
pub fn field_style(invalid: Option<bool>) -> &'static str {
    match invalid {
        Some(true) => INVALID_BORDER,
        Some(false) => VALID_BORDER,
        None => "",
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContactFieldErrors {
    pub name: bool,
    pub email: bool,
    pub subject: bool,
    pub message: bool,
}

impl ContactFieldErrors {
    pub fn any(&self) -> bool {
        self.name || self.email || self.subject || self.message
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContactError {
    #[error("Udfyld venligst alle påkrævede felter korrekt.")]
    Incomplete(ContactFieldErrors),
}

pub const CONTACT_SUCCESS: &str = "Tak for din besked! Jeg vender tilbage til dig hurtigst muligt.";

pub fn validate_contact(input: &ContactInput) -> Result<ContactSubmission, ContactError> {
    let email = input.email.trim();
    let fields = ContactFieldErrors {
        name: input.name.trim().is_empty(),
        email: email.is_empty() || !is_valid_email(email),
        subject: input.subject.trim().is_empty(),
        message: input.message.trim().is_empty(),
    };
    if fields.any() {
        return Err(ContactError::Incomplete(fields));
    }
    Ok(ContactSubmission {
        name: input.name.trim().to_string(),
        email: email.to_string(),
        subject: input.subject.trim().to_string(),
        message: input.message.trim().to_string(),
    })
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum NewsletterError {
    #[error("Indtast venligst en gyldig emailadresse.")]
    InvalidEmail,
    #[error("Du skal acceptere betingelserne.")]
    MissingConsent,
    #[error("Indtast venligst en gyldig emailadresse. Du skal også acceptere betingelserne.")]
    InvalidEmailAndConsent,
}

impl NewsletterError {
    pub fn email_invalid(&self) -> bool {
        !matches!(self, NewsletterError::MissingConsent)
    }
}

pub const NEWSLETTER_SUCCESS: &str = "Tak for din tilmelding! Du vil snart modtage en bekræftelsesmail.";

pub fn validate_newsletter(email: &str, consent: bool) -> Result<String, NewsletterError> {
    let email = email.trim();
    let email_ok = !email.is_empty() && is_valid_email(email);
    match (email_ok, consent) {
        (true, true) => Ok(email.to_string()),
        (false, true) => Err(NewsletterError::InvalidEmail),
        (true, false) => Err(NewsletterError::MissingConsent),
        (false, false) => Err(NewsletterError::InvalidEmailAndConsent),
    }
}
