//! Paging state for the testimonial carousel.
//!
//! All transitions go through [`reduce`], and [`CarouselState::render`] turns
//! a state plus the measured track layout into a [`RenderPlan`]. Neither
//! touches the document, so the component only has to measure and apply.

use std::rc::Rc;

use yew::Reducible;

use crate::config::{DEFAULT_TRACK_GAP, MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};

/// Coarse bucket of window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Tablet,
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width: f64) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            ViewportClass::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            ViewportClass::Tablet
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn visible_count(self) -> usize {
        match self {
            ViewportClass::Mobile => 1,
            ViewportClass::Tablet => 2,
            ViewportClass::Desktop => 3,
        }
    }

    /// Mobile stacks cards in normal flow instead of paging.
    pub fn pages(self) -> bool {
        self != ViewportClass::Mobile
    }
}

pub fn compute_visible_count(width: f64) -> usize {
    ViewportClass::from_width(width).visible_count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    Advance(Direction),
    Resize(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    total_cards: usize,
    current_index: usize,
    viewport: ViewportClass,
    width: f64,
}

impl CarouselState {
    pub fn new(total_cards: usize, width: f64) -> Self {
        Self {
            total_cards,
            current_index: 0,
            viewport: ViewportClass::from_width(width),
            width,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn visible_count(&self) -> usize {
        self.viewport.visible_count()
    }

    /// Window width of the last resize (or of mount).
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Changes whenever the rendered card width may have changed, so the
    /// track has to be measured again.
    pub fn measure_key(&self) -> (usize, u64) {
        (self.total_cards, self.width.to_bits())
    }

    /// Highest index that still fills the visible window.
    pub fn max_index(&self) -> usize {
        self.total_cards.saturating_sub(self.visible_count())
    }

    pub fn advance(&self, direction: Direction) -> Self {
        if self.total_cards == 0 || !self.viewport.pages() {
            return self.clone();
        }
        let next_index = match direction {
            Direction::Previous => match self.current_index.checked_sub(1) {
                Some(index) => index,
                None => return self.clone(),
            },
            Direction::Next => self.current_index + 1,
        };
        if next_index > self.max_index() {
            return self.clone();
        }
        Self {
            current_index: next_index,
            ..self.clone()
        }
    }

    /// Every resize starts over at the first page, even when the class is
    /// unchanged, so the offset never points past the new window.
    pub fn resize(&self, width: f64) -> Self {
        Self {
            total_cards: self.total_cards,
            current_index: 0,
            viewport: ViewportClass::from_width(width),
            width,
        }
    }

    pub fn render(&self, layout: TrackLayout) -> RenderPlan {
        if self.total_cards == 0 {
            return RenderPlan::Inert;
        }
        if !self.viewport.pages() {
            return RenderPlan::Stacked;
        }
        RenderPlan::Paged {
            offset_px: self.current_index as f64 * layout.step(),
            prev_disabled: self.current_index == 0,
            next_disabled: self.current_index >= self.max_index(),
        }
    }
}

pub fn reduce(state: &CarouselState, event: CarouselEvent) -> CarouselState {
    match event {
        CarouselEvent::Advance(direction) => state.advance(direction),
        CarouselEvent::Resize(width) => state.resize(width),
    }
}

impl Reducible for CarouselState {
    type Action = CarouselEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = reduce(&self, action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Layout values read back from the rendered track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackLayout {
    pub card_width: f64,
    pub gap: f64,
}

impl TrackLayout {
    pub fn step(&self) -> f64 {
        self.card_width + self.gap
    }
}

impl Default for TrackLayout {
    fn default() -> Self {
        Self {
            card_width: 0.0,
            gap: DEFAULT_TRACK_GAP,
        }
    }
}

/// Reads a computed `gap` value the way `parseInt` would: optional sign,
/// then leading digits. A missing or zero result falls back to the default
/// gap; a negative one is kept.
pub fn parse_gap(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    match rest[..digits_end].parse::<f64>() {
        Ok(gap) if gap != 0.0 => sign * gap,
        _ => DEFAULT_TRACK_GAP,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderPlan {
    /// No cards: nothing to measure or move.
    Inert,
    /// Controls hidden, track transform cleared.
    Stacked,
    Paged {
        offset_px: f64,
        prev_disabled: bool,
        next_disabled: bool,
    },
}

impl RenderPlan {
    pub fn track_style(&self) -> String {
        match self {
            RenderPlan::Paged { offset_px, .. } => {
                format!("transform: translateX({}px);", 0.0 - offset_px)
            }
            _ => String::new(),
        }
    }

    pub fn controls_visible(&self) -> bool {
        matches!(self, RenderPlan::Paged { .. })
    }

    pub fn control_style(&self, disabled: bool) -> String {
        if !self.controls_visible() {
            return "display: none;".to_string();
        }
        let (opacity, cursor) = if disabled { ("0.5", "default") } else { ("1", "pointer") };
        format!("display: flex; opacity: {}; cursor: {};", opacity, cursor)
    }

    pub fn prev_disabled(&self) -> bool {
        match self {
            RenderPlan::Paged { prev_disabled, .. } => *prev_disabled,
            _ => true,
        }
    }

    pub fn next_disabled(&self) -> bool {
        match self {
            RenderPlan::Paged { next_disabled, .. } => *next_disabled,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: f64 = 1280.0;
    const TABLET: f64 = 900.0;
    const MOBILE: f64 = 375.0;

    fn layout() -> TrackLayout {
        TrackLayout { card_width: 300.0, gap: 20.0 }
    }

    #[test]
    fn visible_count_follows_breakpoints() {
        for width in [0.0, 320.0, 767.9, 768.0] {
            assert_eq!(compute_visible_count(width), 1, "width {}", width);
        }
        for width in [768.5, 900.0, 1024.0] {
            assert_eq!(compute_visible_count(width), 2, "width {}", width);
        }
        for width in [1024.5, 1440.0, 2560.0] {
            assert_eq!(compute_visible_count(width), 3, "width {}", width);
        }
    }

    #[test]
    fn four_cards_on_desktop() {
        let state = CarouselState::new(4, DESKTOP);
        assert_eq!(
            state.render(layout()),
            RenderPlan::Paged { offset_px: 0.0, prev_disabled: true, next_disabled: false }
        );

        let state = reduce(&state, CarouselEvent::Advance(Direction::Next));
        assert_eq!(state.current_index(), 1);
        assert_eq!(
            state.render(layout()),
            RenderPlan::Paged { offset_px: 320.0, prev_disabled: false, next_disabled: true }
        );
    }

    #[test]
    fn advancing_past_upper_bound_is_noop() {
        let mut state = CarouselState::new(5, TABLET);
        for _ in 0..10 {
            state = reduce(&state, CarouselEvent::Advance(Direction::Next));
        }
        assert_eq!(state.current_index(), 3);
        let after = reduce(&state, CarouselEvent::Advance(Direction::Next));
        assert_eq!(after, state);
    }

    #[test]
    fn retreating_below_zero_is_noop() {
        let state = CarouselState::new(6, DESKTOP);
        let state = reduce(&state, CarouselEvent::Advance(Direction::Next));
        let state = reduce(&state, CarouselEvent::Advance(Direction::Previous));
        assert_eq!(state.current_index(), 0);
        let again = reduce(&state, CarouselEvent::Advance(Direction::Previous));
        assert_eq!(again.current_index(), 0);
    }

    #[test]
    fn resize_to_mobile_stacks_and_resets() {
        let state = CarouselState::new(6, DESKTOP);
        let state = reduce(&state, CarouselEvent::Advance(Direction::Next));
        let state = reduce(&state, CarouselEvent::Advance(Direction::Next));
        assert_eq!(state.current_index(), 2);

        let state = reduce(&state, CarouselEvent::Resize(MOBILE));
        assert_eq!(state.current_index(), 0);
        let plan = state.render(layout());
        assert_eq!(plan, RenderPlan::Stacked);
        assert!(!plan.controls_visible());
        assert_eq!(plan.track_style(), "");
        assert_eq!(plan.control_style(false), "display: none;");
    }

    #[test]
    fn mobile_ignores_navigation() {
        let state = CarouselState::new(4, MOBILE);
        let next = reduce(&state, CarouselEvent::Advance(Direction::Next));
        assert_eq!(next.current_index(), 0);
    }

    #[test]
    fn resize_within_same_class_still_resets() {
        let state = CarouselState::new(6, DESKTOP);
        let state = reduce(&state, CarouselEvent::Advance(Direction::Next));
        let state = reduce(&state, CarouselEvent::Resize(DESKTOP + 10.0));
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.viewport(), ViewportClass::Desktop);
    }

    #[test]
    fn repeated_resize_is_idempotent() {
        let state = CarouselState::new(4, DESKTOP);
        let once = reduce(&state, CarouselEvent::Resize(TABLET));
        let twice = reduce(&once, CarouselEvent::Resize(TABLET));
        assert_eq!(once, twice);
        assert_eq!(once.measure_key(), twice.measure_key());
    }

    #[test]
    fn same_class_resize_requests_new_measurement() {
        let state = CarouselState::new(6, DESKTOP);
        let wider = reduce(&state, CarouselEvent::Resize(1920.0));
        assert_eq!(wider.viewport(), state.viewport());
        assert_ne!(wider.measure_key(), state.measure_key());

        let advanced = reduce(&wider, CarouselEvent::Advance(Direction::Next));
        assert_eq!(advanced.measure_key(), wider.measure_key());

        // Stale 400px cards would stop the track at 420 instead of 633.
        let remeasured = TrackLayout { card_width: 613.0, gap: 20.0 };
        assert_eq!(
            advanced.render(remeasured),
            RenderPlan::Paged { offset_px: 633.0, prev_disabled: false, next_disabled: false }
        );
    }

    #[test]
    fn exactly_visible_count_disables_both_controls() {
        let state = CarouselState::new(3, DESKTOP);
        let plan = state.render(layout());
        assert!(plan.prev_disabled());
        assert!(plan.next_disabled());
        let state = reduce(&state, CarouselEvent::Advance(Direction::Next));
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn fewer_cards_than_visible_never_pages() {
        let state = CarouselState::new(2, DESKTOP);
        assert_eq!(state.max_index(), 0);
        let state = reduce(&state, CarouselEvent::Advance(Direction::Next));
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn zero_cards_render_inert() {
        let state = CarouselState::new(0, DESKTOP);
        assert_eq!(state.render(layout()), RenderPlan::Inert);
        let state = reduce(&state, CarouselEvent::Advance(Direction::Next));
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn first_page_has_no_negative_zero() {
        let plan = CarouselState::new(4, DESKTOP).render(layout());
        assert_eq!(plan.track_style(), "transform: translateX(0px);");
    }

    #[test]
    fn paged_plan_styles() {
        let plan = RenderPlan::Paged { offset_px: 640.0, prev_disabled: false, next_disabled: true };
        assert_eq!(plan.track_style(), "transform: translateX(-640px);");
        assert_eq!(plan.control_style(false), "display: flex; opacity: 1; cursor: pointer;");
        assert_eq!(plan.control_style(true), "display: flex; opacity: 0.5; cursor: default;");
    }

    #[test]
    fn gap_parsing_matches_parse_int() {
        assert_eq!(parse_gap("24px"), 24.0);
        assert_eq!(parse_gap("32.5px"), 32.0);
        assert_eq!(parse_gap("normal"), DEFAULT_TRACK_GAP);
        assert_eq!(parse_gap(""), DEFAULT_TRACK_GAP);
        assert_eq!(parse_gap("0px"), DEFAULT_TRACK_GAP);
        assert_eq!(parse_gap("-0px"), DEFAULT_TRACK_GAP);
        assert_eq!(parse_gap("-5px"), -5.0);
        assert_eq!(parse_gap(" +12px"), 12.0);
        assert_eq!(parse_gap("-px"), DEFAULT_TRACK_GAP);
        assert_eq!(parse_gap("99999999999px"), 99_999_999_999.0);
    }
}
