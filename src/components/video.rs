//! Demo video placeholders. There's no video yet, so activating one shows a
//! toast pointing at the waitlist, with a brief press animation.

use gloo_timers::callback::Timeout;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::components::toast::ToastHandle;

#[derive(Properties, PartialEq)]
pub struct VideoPlaceholderProps {
    pub title: String,
}

#[function_component(VideoPlaceholder)]
pub fn video_placeholder(props: &VideoPlaceholderProps) -> Html {
    let toasts = use_context::<ToastHandle>().unwrap_or_else(ToastHandle::noop);
    let pressed = use_state(|| false);

    let activate = {
        let toasts = toasts.clone();
        let pressed = pressed.clone();
        let title = props.title.clone();
        Callback::from(move |_: ()| {
            toasts.info(format!(
                "{} - Coming soon! Join the waitlist for early access.",
                title
            ));
            pressed.set(true);
            let pressed = pressed.clone();
            Timeout::new(150, move || pressed.set(false)).forget();
        })
    };

    let onclick = {
        let activate = activate.clone();
        Callback::from(move |_: MouseEvent| activate.emit(()))
    };
    // Keyboard activation behaves exactly like a click.
    let onkeydown = {
        let activate = activate.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                activate.emit(());
            }
        })
    };

    html! {
        <div
            class={classes!("video-placeholder", (*pressed).then_some("pressed"))}
            tabindex="0"
            {onclick}
            {onkeydown}
        >
            <div class="video-overlay">
                <span class="play-icon">{"▶"}</span>
                <h3>{ &props.title }</h3>
                <p>{"Watch how it works"}</p>
            </div>
            <style>{ VIDEO_CSS }</style>
        </div>
    }
}

const VIDEO_CSS: &str = r#"
    .video-placeholder {
        position: relative;
        aspect-ratio: 16 / 9;
        border-radius: 12px;
        background: linear-gradient(135deg, rgba(126, 178, 255, 0.15), rgba(0, 0, 0, 0.5));
        border: 1px solid rgba(126, 178, 255, 0.2);
        cursor: pointer;
        display: flex;
        align-items: center;
        justify-content: center;
        transition: transform 0.15s ease;
    }
    .video-placeholder.pressed {
        transform: scale(0.98);
    }
    .video-placeholder:focus-visible {
        outline: 2px solid #7EB2FF;
        outline-offset: 2px;
    }
    .video-overlay {
        text-align: center;
        color: #fff;
    }
    .video-overlay .play-icon {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        width: 64px;
        height: 64px;
        border-radius: 50%;
        background: rgba(126, 178, 255, 0.25);
        font-size: 1.5rem;
        margin-bottom: 1rem;
    }
    .video-overlay h3 {
        margin: 0 0 0.25rem;
        font-size: 1.3rem;
    }
    .video-overlay p {
        margin: 0;
        color: #bbb;
    }
"#;
