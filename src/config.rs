use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Viewport breakpoints (inclusive upper bounds, px)
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

// Fallback when the track has no usable `gap` style
pub const DEFAULT_TRACK_GAP: f64 = 20.0;

pub const STICKY_HEADER_THRESHOLD: f64 = 50.0;
pub const FALLBACK_HEADER_HEIGHT: f64 = 80.0;
pub const DRAWER_SCROLL_DELAY_MS: u32 = 350;

pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

pub const BOOK_BUTTON_SHOW_DELAY_MS: u32 = 1_500;
pub const BOOK_BUTTON_SHOW_THRESHOLD: f64 = 100.0;
pub const BOOK_BUTTON_HIDE_MARGIN: f64 = 150.0;

pub const REVEAL_VIEWPORT_RATIO: f64 = 0.85;
pub const REVEAL_INITIAL_DELAY_MS: u32 = 100;
pub const REVEAL_STAGGER_MS: u32 = 150;

pub const FEEDBACK_VISIBLE_MS: u32 = 5_000;
pub const FEEDBACK_FADE_MS: u32 = 500;

pub const SUBMIT_SENDING_MS: u32 = 1_500;
pub const SUBMIT_SENT_HOLD_MS: u32 = 3_000;

pub const CONTACT_SECTION_ID: &str = "kontakt";
