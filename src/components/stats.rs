//! Animated stat counters. Each counter sits at zero until it first scrolls
//! into view, then counts up to its target value.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::{COUNTER_DURATION_MS, COUNTER_STEPS};
use crate::utils::viewport::in_lower_viewport;

/// Thousands separators, the way the page renders stat values.
pub(crate) fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn animate_to(target: u32, shown: UseStateHandle<u32>) {
    let step = target as f64 / COUNTER_STEPS as f64;
    let step_ms = (COUNTER_DURATION_MS / COUNTER_STEPS).max(1);
    wasm_bindgen_futures::spawn_local(async move {
        let mut progress = 0.0;
        loop {
            TimeoutFuture::new(step_ms).await;
            progress += step;
            if progress >= target as f64 {
                shown.set(target);
                break;
            }
            shown.set(progress as u32);
        }
    });
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub value: u32,
    #[prop_or_default]
    pub suffix: String,
    pub label: String,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let shown = use_state(|| 0u32);

    {
        let node = node.clone();
        let shown = shown.clone();
        use_effect_with_deps(
            move |target: &u32| {
                let target = *target;
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let started = Rc::new(Cell::new(false));
                    let check = {
                        let node = node.clone();
                        let shown = shown.clone();
                        let started = started.clone();
                        move || {
                            if started.get() {
                                return;
                            }
                            let visible = node
                                .cast::<HtmlElement>()
                                .map(|el| in_lower_viewport(&el, 0.85))
                                .unwrap_or(false);
                            if visible {
                                started.set(true);
                                animate_to(target, shown.clone());
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
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            props.value,
        );
    }

    html! {
        <div class="stat" ref={node}>
            <span class="stat-number">{ format_count(*shown) }{ &props.suffix }</span>
            <span class="stat-label">{ &props.label }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separates_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(950), "950");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(12_500), "12,500");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
