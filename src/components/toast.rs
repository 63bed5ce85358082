//! Transient notification toasts. At most one toast is visible at a time:
//! presenting a new one drops the current one outright, and every pending
//! timer is tagged with the sequence number of the toast it belongs to, so a
//! superseded timer can never remove the toast that replaced its target.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::{TOAST_EXIT_MS, TOAST_HOLD_MS};

/// Visual style of a toast. `Info` is the fallback for anything unnamed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast-info",
            ToastKind::Success => "toast-success",
            ToastKind::Warning => "toast-warning",
            ToastKind::Error => "toast-error",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub seq: u64,
    pub leaving: bool,
}

/// Single-slot toast state machine, kept free of any DOM dependency so it
/// can be exercised directly in tests.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ToastController {
    current: Option<Toast>,
    seq: u64,
}

pub enum ToastAction {
    Show { message: String, kind: ToastKind },
    BeginExit { seq: u64 },
    Remove { seq: u64 },
}

impl ToastController {
    pub fn visible(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    fn show(&mut self, message: String, kind: ToastKind) {
        self.seq += 1;
        self.current = Some(Toast {
            message,
            kind,
            seq: self.seq,
            leaving: false,
        });
    }

    /// Starts the exit transition. Stale sequence numbers are ignored.
    fn begin_exit(&mut self, seq: u64) {
        if let Some(toast) = self.current.as_mut() {
            if toast.seq == seq {
                toast.leaving = true;
            }
        }
    }

    /// Removes the toast once its exit transition has run. Stale sequence
    /// numbers are ignored.
    fn remove(&mut self, seq: u64) {
        if self.current.as_ref().map(|t| t.seq) == Some(seq) {
            self.current = None;
        }
    }
}

impl Reducible for ToastController {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Show { message, kind } => next.show(message, kind),
            ToastAction::BeginExit { seq } => next.begin_exit(seq),
            ToastAction::Remove { seq } => next.remove(seq),
        }
        Rc::new(next)
    }
}

/// Cloneable handle components use to present a toast. Obtained through
/// `use_context`; `noop()` keeps callers working (silently) when no provider
/// is mounted above them.
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    show: Callback<(String, ToastKind)>,
}

impl ToastHandle {
    pub fn noop() -> Self {
        Self {
            show: Callback::noop(),
        }
    }

    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        self.show.emit((message.into(), kind));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Info);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let controller = use_reducer(ToastController::default);

    // One pending timer at a time. When (seq, leaving) changes the previous
    // Timeout is dropped, which cancels it, before the next one is armed.
    {
        let dispatch = controller.clone();
        use_effect_with_deps(
            move |phase: &Option<(u64, bool)>| {
                let pending = (*phase).map(|(seq, leaving)| {
                    if leaving {
                        Timeout::new(TOAST_EXIT_MS, move || {
                            dispatch.dispatch(ToastAction::Remove { seq })
                        })
                    } else {
                        Timeout::new(TOAST_HOLD_MS, move || {
                            dispatch.dispatch(ToastAction::BeginExit { seq })
                        })
                    }
                });
                move || drop(pending)
            },
            controller.visible().map(|t| (t.seq, t.leaving)),
        );
    }

    let handle = {
        let dispatch = controller.clone();
        (*use_memo(
            move |_| ToastHandle {
                show: Callback::from(move |(message, kind): (String, ToastKind)| {
                    dispatch.dispatch(ToastAction::Show { message, kind })
                }),
            },
            (),
        ))
        .clone()
    };

    let toast_view = controller
        .visible()
        .map(|toast| {
            let onclick = {
                let dispatch = controller.clone();
                let seq = toast.seq;
                Callback::from(move |_: MouseEvent| {
                    dispatch.dispatch(ToastAction::BeginExit { seq })
                })
            };
            html! {
                <div
                    class={classes!("toast", toast.kind.class(), toast.leaving.then_some("leaving"))}
                    onclick={onclick}
                >
                    { &toast.message }
                </div>
            }
        })
        .unwrap_or_default();

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            { for props.children.iter() }
            { toast_view }
            <style>{ TOAST_CSS }</style>
        </ContextProvider<ToastHandle>>
    }
}

// The 0.3s transition below matches TOAST_EXIT_MS.
const TOAST_CSS: &str = r#"
    .toast {
        position: fixed;
        top: 100px;
        right: 20px;
        max-width: 350px;
        padding: 16px 20px;
        border-radius: 8px;
        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4);
        color: #fff;
        font-weight: 500;
        word-wrap: break-word;
        cursor: pointer;
        z-index: 1001;
        transform: translateX(0);
        transition: transform 0.3s ease-out;
        animation: toast-in 0.3s ease-out;
    }
    .toast.leaving {
        transform: translateX(calc(100% + 20px));
    }
    @keyframes toast-in {
        from { transform: translateX(calc(100% + 20px)); }
        to { transform: translateX(0); }
    }
    .toast-info { background: linear-gradient(45deg, #2E86DE, #4169E1); }
    .toast-success { background: linear-gradient(45deg, #1B9E77, #27AE60); }
    .toast-warning { background: linear-gradient(45deg, #E67E22, #D35400); }
    .toast-error { background: linear-gradient(45deg, #E74C3C, #C0392B); }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn current_seq(controller: &ToastController) -> u64 {
        controller.visible().expect("a toast should be visible").seq
    }

    #[test]
    fn show_replaces_the_visible_toast() {
        let mut controller = ToastController::default();
        controller.show("first".into(), ToastKind::Info);
        controller.show("second".into(), ToastKind::Success);

        let toast = controller.visible().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.kind, ToastKind::Success);
        assert!(!toast.leaving);
    }

    #[test]
    fn stale_timers_cannot_touch_a_replacement_toast() {
        let mut controller = ToastController::default();
        controller.show("first".into(), ToastKind::Info);
        let first = current_seq(&controller);
        controller.show("second".into(), ToastKind::Info);

        controller.begin_exit(first);
        assert!(!controller.visible().unwrap().leaving);

        controller.remove(first);
        assert_eq!(controller.visible().unwrap().message, "second");
    }

    #[test]
    fn click_starts_exit_and_removal_clears_the_slot() {
        let mut controller = ToastController::default();
        controller.show("hello".into(), ToastKind::Warning);
        let seq = current_seq(&controller);

        controller.begin_exit(seq);
        assert!(controller.visible().unwrap().leaving);

        controller.remove(seq);
        assert!(controller.visible().is_none());
    }

    #[test]
    fn removing_from_empty_is_a_no_op() {
        let mut controller = ToastController::default();
        controller.begin_exit(7);
        controller.remove(7);
        assert!(controller.visible().is_none());
    }

    #[test]
    fn unnamed_kind_falls_back_to_the_info_style() {
        assert_eq!(ToastKind::default().class(), "toast-info");
    }
}
