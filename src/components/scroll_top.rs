//! Scroll-to-top button that appears after the page has been scrolled a bit.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::utils::scroll::scroll_to_top;

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let visible = visible.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(y) = win.scroll_y() {
                                    visible.set(y > 500.0);
                                }
                            }
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let onclick = Callback::from(move |_: MouseEvent| scroll_to_top());

    html! {
        <button
            class={classes!("scroll-top", (*visible).then_some("visible"))}
            onclick={onclick}
            aria-label="Back to top"
        >
            {"↑"}
            <style>{ SCROLL_TOP_CSS }</style>
        </button>
    }
}

const SCROLL_TOP_CSS: &str = r#"
    .scroll-top {
        position: fixed;
        bottom: 30px;
        right: 30px;
        width: 50px;
        height: 50px;
        border-radius: 50%;
        border: none;
        background: linear-gradient(45deg, #7EB2FF, #4169E1);
        color: #fff;
        font-size: 20px;
        cursor: pointer;
        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4);
        z-index: 1000;
        opacity: 0;
        transform: translateY(100px);
        transition: opacity 0.3s ease, transform 0.3s ease;
        pointer-events: none;
    }
    .scroll-top.visible {
        opacity: 1;
        transform: translateY(0);
        pointer-events: auto;
    }
"#;
