//! Transport state for the hero video: what the controls show, kept apart
//! from the `<video>` element so it can be checked without a browser.

use std::rc::Rc;

use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    Muted,
    Low,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub playing: bool,
    pub muted: bool,
    pub volume: f64,
    pub current_time: f64,
    pub duration: f64,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            playing: false,
            muted: false,
            volume: 1.0,
            current_time: 0.0,
            duration: 0.0,
        }
    }
}

impl PlayerState {
    pub fn has_duration(&self) -> bool {
        self.duration.is_finite() && self.duration > 0.0
    }

    pub fn progress_percent(&self) -> f64 {
        if !self.has_duration() {
            return 0.0;
        }
        (self.current_time / self.duration * 100.0).clamp(0.0, 100.0)
    }

    pub fn volume_icon(&self) -> VolumeIcon {
        if self.muted || self.volume == 0.0 {
            VolumeIcon::Muted
        } else if self.volume > 0.5 {
            VolumeIcon::High
        } else {
            VolumeIcon::Low
        }
    }

    /// Position the slider should show: zero while muted.
    pub fn slider_value(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Slider input. Volume zero counts as muted, anything else unmutes.
    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
        self.muted = self.volume == 0.0;
    }

    pub fn ended(&mut self) {
        self.playing = false;
        self.current_time = 0.0;
    }

    pub fn apply(&self, action: PlayerAction) -> Self {
        let mut next = *self;
        match action {
            PlayerAction::Played => next.playing = true,
            PlayerAction::Paused => next.playing = false,
            PlayerAction::Ended => next.ended(),
            PlayerAction::Progress { current_time, duration } => {
                next.current_time = current_time;
                next.duration = duration;
            }
            PlayerAction::Metadata { duration } => next.duration = duration,
            PlayerAction::ToggleMute => next.toggle_mute(),
            PlayerAction::SetVolume(volume) => next.set_volume(volume),
        }
        next
    }
}

/// Media element events and control inputs the player reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerAction {
    Played,
    Paused,
    Ended,
    Progress { current_time: f64, duration: f64 },
    Metadata { duration: f64 },
    ToggleMute,
    SetVolume(f64),
}

impl Reducible for PlayerState {
    type Action = PlayerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Seek position for a click `offset_x` pixels into a bar `width` wide.
pub fn seek_time(offset_x: f64, width: f64, duration: f64) -> Option<f64> {
    if width <= 0.0 || !duration.is_finite() || duration <= 0.0 {
        return None;
    }
    Some((offset_x / width).clamp(0.0, 1.0) * duration)
}

/// `m:ss`, minutes unpadded.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() { seconds.max(0.0) as u64 } else { 0 };
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_pads_seconds_only() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(9.7), "0:09");
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(754.0), "12:34");
        assert_eq!(format_time(-3.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
    }

    #[test]
    fn progress_needs_duration() {
        let mut state = PlayerState::default();
        state.current_time = 10.0;
        assert_eq!(state.progress_percent(), 0.0);
        state.duration = 40.0;
        assert_eq!(state.progress_percent(), 25.0);
        state.duration = f64::NAN;
        assert_eq!(state.progress_percent(), 0.0);
    }

    #[test]
    fn mute_toggle_restores_slider() {
        let mut state = PlayerState::default();
        state.set_volume(0.4);
        state.toggle_mute();
        assert_eq!(state.volume_icon(), VolumeIcon::Muted);
        assert_eq!(state.slider_value(), 0.0);
        state.toggle_mute();
        assert_eq!(state.volume_icon(), VolumeIcon::Low);
        assert_eq!(state.slider_value(), 0.4);
    }

    #[test]
    fn volume_icon_thresholds() {
        let mut state = PlayerState::default();
        assert_eq!(state.volume_icon(), VolumeIcon::High);
        state.set_volume(0.5);
        assert_eq!(state.volume_icon(), VolumeIcon::Low);
        state.set_volume(0.0);
        assert!(state.muted);
        assert_eq!(state.volume_icon(), VolumeIcon::Muted);
        state.set_volume(0.8);
        assert!(!state.muted);
        assert_eq!(state.volume_icon(), VolumeIcon::High);
    }

    #[test]
    fn seek_from_click() {
        assert_eq!(seek_time(50.0, 200.0, 120.0), Some(30.0));
        assert_eq!(seek_time(250.0, 200.0, 120.0), Some(120.0));
        assert_eq!(seek_time(50.0, 0.0, 120.0), None);
        assert_eq!(seek_time(50.0, 200.0, f64::NAN), None);
    }

    #[test]
    fn actions_track_element_events() {
        let state = PlayerState::default()
            .apply(PlayerAction::Metadata { duration: 90.0 })
            .apply(PlayerAction::Played)
            .apply(PlayerAction::Progress { current_time: 45.0, duration: 90.0 });
        assert!(state.playing);
        assert_eq!(state.progress_percent(), 50.0);
        assert_eq!(format_time(state.duration), "1:30");

        let paused = state.apply(PlayerAction::Paused);
        assert!(!paused.playing);
        assert_eq!(paused.current_time, 45.0);

        let ended = state.apply(PlayerAction::Ended);
        assert!(!ended.playing);
        assert_eq!(ended.current_time, 0.0);
    }

    #[test]
    fn ended_rewinds() {
        let mut state = PlayerState { playing: true, current_time: 33.0, duration: 33.0, ..Default::default() };
        state.ended();
        assert!(!state.playing);
        assert_eq!(state.progress_percent(), 0.0);
    }
}
