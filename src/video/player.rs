use yew::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement, HtmlVideoElement};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use log::{debug, info};

use crate::video::controls::{format_time, seek_time, PlayerAction, PlayerState, VolumeIcon};

#[derive(Properties, PartialEq)]
pub struct HeroVideoProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub poster: Option<AttrValue>,
}

/// Starts playback and reports a refused `play()` (autoplay policy, missing
/// source) as a pause so the play icon comes back.
fn start_playback(video: &HtmlVideoElement, dispatcher: UseReducerDispatcher<PlayerState>) {
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                info!("Autoplay prevented: {:?}", err);
                dispatcher.dispatch(PlayerAction::Paused);
            }
        }),
        Err(err) => {
            info!("Video play failed: {:?}", err);
            dispatcher.dispatch(PlayerAction::Paused);
        }
    }
}

#[function_component(HeroVideo)]
pub fn hero_video(props: &HeroVideoProps) -> Html {
    let video_ref = use_node_ref();
    let progress_ref = use_node_ref();
    let player = use_reducer(PlayerState::default);

    // Autoplay once on mount
    {
        let video_ref = video_ref.clone();
        let dispatcher = player.dispatcher();
        use_effect_with_deps(
            move |_| {
                match video_ref.cast::<HtmlVideoElement>() {
                    Some(video) => start_playback(&video, dispatcher),
                    None => debug!("Hero video element not mounted"),
                }
                || ()
            },
            (),
        );
    }

    let toggle_play = {
        let video_ref = video_ref.clone();
        let dispatcher = player.dispatcher();
        Callback::from(move |_: MouseEvent| {
            let Some(video) = video_ref.cast::<HtmlVideoElement>() else {
                return;
            };
            if video.paused() || video.ended() {
                start_playback(&video, dispatcher.clone());
            } else {
                let _ = video.pause();
            }
        })
    };

    let on_play = {
        let dispatcher = player.dispatcher();
        Callback::from(move |_: Event| dispatcher.dispatch(PlayerAction::Played))
    };

    let on_pause = {
        let dispatcher = player.dispatcher();
        Callback::from(move |_: Event| dispatcher.dispatch(PlayerAction::Paused))
    };

    let on_ended = {
        let video_ref = video_ref.clone();
        let dispatcher = player.dispatcher();
        Callback::from(move |_: Event| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                video.set_current_time(0.0);
            }
            dispatcher.dispatch(PlayerAction::Ended);
        })
    };

    let on_time_update = {
        let video_ref = video_ref.clone();
        let dispatcher = player.dispatcher();
        Callback::from(move |_: Event| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                dispatcher.dispatch(PlayerAction::Progress {
                    current_time: video.current_time(),
                    duration: video.duration(),
                });
            }
        })
    };

    let on_metadata = {
        let video_ref = video_ref.clone();
        let dispatcher = player.dispatcher();
        Callback::from(move |_: Event| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                dispatcher.dispatch(PlayerAction::Metadata { duration: video.duration() });
            }
        })
    };

    let on_seek = {
        let video_ref = video_ref.clone();
        let progress_ref = progress_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let (Some(video), Some(bar)) = (
                video_ref.cast::<HtmlVideoElement>(),
                progress_ref.cast::<HtmlElement>(),
            ) else {
                return;
            };
            if let Some(time) = seek_time(e.offset_x() as f64, bar.client_width() as f64, video.duration()) {
                video.set_current_time(time);
            }
        })
    };

    let toggle_mute = {
        let video_ref = video_ref.clone();
        let dispatcher = player.dispatcher();
        Callback::from(move |_: MouseEvent| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                video.set_muted(!video.muted());
            }
            dispatcher.dispatch(PlayerAction::ToggleMute);
        })
    };

    let on_volume = {
        let video_ref = video_ref.clone();
        let dispatcher = player.dispatcher();
        Callback::from(move |e: InputEvent| {
            let Ok(volume) = e.target_unchecked_into::<HtmlInputElement>().value().parse::<f64>() else {
                return;
            };
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                video.set_volume(volume);
                video.set_muted(volume == 0.0);
            }
            dispatcher.dispatch(PlayerAction::SetVolume(volume));
        })
    };

    let volume_icon = match player.volume_icon() {
        VolumeIcon::Muted => "🔇",
        VolumeIcon::Low => "🔉",
        VolumeIcon::High => "🔊",
    };

    html! {
        <div class="video-container">
            <video id="hero-video"
                ref={video_ref}
                src={props.src.clone()}
                poster={props.poster.clone()}
                playsinline=true
                onclick={toggle_play.clone()}
                onplay={on_play}
                onpause={on_pause}
                onended={on_ended}
                ontimeupdate={on_time_update}
                onloadedmetadata={on_metadata}
            />
            <div class="video-controls">
                <button id="playPauseBtn" class="control-button" onclick={toggle_play}
                    aria-label={if player.playing { "Pause" } else { "Afspil" }}>
                    { if player.playing { "❚❚" } else { "►" } }
                </button>
                <div id="progressContainer" class="progress-container" ref={progress_ref} onclick={on_seek}>
                    <div id="progressBar" class="progress-bar"
                        style={format!("width: {}%;", player.progress_percent())}></div>
                </div>
                <span class="time-display">
                    <span id="currentTime">{format_time(player.current_time)}</span>
                    {" / "}
                    <span id="duration">{format_time(player.duration)}</span>
                </span>
                <button id="muteBtn" class="control-button" onclick={toggle_mute} aria-label="Lyd">
                    {volume_icon}
                </button>
                <input id="volumeSlider" type="range" min="0" max="1" step="0.05"
                    value={player.slider_value().to_string()}
                    oninput={on_volume} />
            </div>
        </div>
    }
}
