//! Wrapper that fades its children in the first time they scroll into view.
//! Users who prefer reduced motion see the content immediately.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::utils::viewport::in_lower_viewport;

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let reduced = window
                        .match_media("(prefers-reduced-motion: reduce)")
                        .ok()
                        .flatten()
                        .map(|mql| mql.matches())
                        .unwrap_or(false);
                    if reduced {
                        revealed.set(true);
                        Box::new(|| ())
                    } else {
                        let done = Rc::new(Cell::new(false));
                        let check = {
                            let node = node.clone();
                            let revealed = revealed.clone();
                            let done = done.clone();
                            move || {
                                if done.get() {
                                    return;
                                }
                                if let Some(el) = node.cast::<HtmlElement>() {
                                    if in_lower_viewport(&el, 0.9) {
                                        done.set(true);
                                        revealed.set(true);
                                    }
                                }
                            }
                        };
                        check();
                        let callback = Closure::<dyn Fn()>::new(check);
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
                    }
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), (*revealed).then_some("animate"))}
        >
            { for props.children.iter() }
            <style>{ REVEAL_CSS }</style>
        </div>
    }
}

const REVEAL_CSS: &str = r#"
    .reveal {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    }
    .reveal.animate {
        opacity: 1;
        transform: translateY(0);
    }
"#;
