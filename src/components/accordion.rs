//! FAQ accordion. The group tracks at most one expanded panel; the item
//! component animates its answer by growing max-height to the content's
//! scroll height and releasing the constraint once the transition finishes,
//! so answers with dynamic content aren't clipped later.

use gloo_timers::callback::Timeout;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::config::ACCORDION_TRANSITION_MS;

/// Which panel of a fixed group is expanded, if any. The panel set is
/// established at construction and never changes afterwards.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AccordionState {
    panels: Vec<String>,
    expanded: Option<String>,
}

impl AccordionState {
    pub fn new<I, S>(panels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            panels: panels.into_iter().map(Into::into).collect(),
            expanded: None,
        }
    }

    /// Collapses the panel if it is the expanded one, otherwise expands it,
    /// implicitly collapsing whichever sibling was open. Unknown ids are
    /// ignored.
    pub fn toggle(&mut self, id: &str) {
        if !self.panels.iter().any(|p| p == id) {
            return;
        }
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionItemProps {
    pub id: String,
    pub question: String,
    pub expanded: bool,
    pub on_toggle: Callback<String>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AccordionItem)]
pub fn accordion_item(props: &AccordionItemProps) -> Html {
    let answer_ref = use_node_ref();
    let max_height = use_state(|| "0px".to_string());

    // Expanding measures the answer and animates max-height up to it; once
    // the transition completes the constraint is released. Collapsing before
    // the release fires drops the timeout, cancelling it.
    {
        let answer_ref = answer_ref.clone();
        let max_height = max_height.clone();
        use_effect_with_deps(
            move |expanded: &bool| {
                let release = if *expanded {
                    if let Some(el) = answer_ref.cast::<HtmlElement>() {
                        max_height.set(format!("{}px", el.scroll_height()));
                    }
                    Some(Timeout::new(ACCORDION_TRANSITION_MS, move || {
                        max_height.set("none".to_string());
                    }))
                } else {
                    max_height.set("0px".to_string());
                    None
                };
                move || drop(release)
            },
            props.expanded,
        );
    }

    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = props.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id.clone());
        })
    };

    // Enter and Space activate a focused question exactly like a click.
    let keydown = {
        let on_toggle = props.on_toggle.clone();
        let id = props.id.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                on_toggle.emit(id.clone());
            }
        })
    };

    html! {
        <div id={props.id.clone()} class={classes!("faq-item", props.expanded.then_some("open"))}>
            <div
                class="faq-question"
                tabindex="0"
                onclick={toggle}
                onkeydown={keydown}
            >
                <span class="question-text">{ &props.question }</span>
                <span class="toggle-icon">{ if props.expanded { "−" } else { "+" } }</span>
            </div>
            <div
                class="faq-answer"
                ref={answer_ref}
                style={format!(
                    "max-height: {}; overflow: hidden; transition: max-height {}ms ease-out;",
                    *max_height, ACCORDION_TRANSITION_MS
                )}
            >
                { for props.children.iter() }
            </div>
            <style>{ ACCORDION_CSS }</style>
        </div>
    }
}

const ACCORDION_CSS: &str = r#"
    .faq-item {
        margin-bottom: 1rem;
        border: 1px solid rgba(126, 178, 255, 0.15);
        border-radius: 12px;
        background: rgba(0, 0, 0, 0.2);
    }
    .faq-question {
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
        padding: 1.25rem 1.5rem;
        cursor: pointer;
        color: #fff;
        font-size: 1.15rem;
        font-weight: 600;
    }
    .faq-question:focus-visible {
        outline: 2px solid #7EB2FF;
        outline-offset: 2px;
        border-radius: 12px;
    }
    .faq-item .toggle-icon {
        color: #7EB2FF;
        font-size: 1.4rem;
        flex-shrink: 0;
    }
    .faq-answer {
        padding: 0 1.5rem;
        color: #bbb;
        line-height: 1.6;
    }
    .faq-item.open .faq-answer {
        padding-bottom: 1rem;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn group() -> AccordionState {
        AccordionState::new(["a", "b", "c"])
    }

    #[test]
    fn toggling_twice_returns_to_the_original_state() {
        let mut state = group();
        state.toggle("a");
        state.toggle("a");
        assert_eq!(state.expanded(), None);

        state.toggle("b");
        state.toggle("c");
        state.toggle("c");
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn expanding_one_panel_collapses_the_other() {
        let mut state = group();
        state.toggle("a");
        assert!(state.is_expanded("a"));

        state.toggle("b");
        assert!(state.is_expanded("b"));
        assert!(!state.is_expanded("a"));

        state.toggle("b");
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn unknown_panel_ids_are_ignored() {
        let mut state = group();
        state.toggle("a");
        state.toggle("nope");
        assert!(state.is_expanded("a"));

        let mut empty = group();
        empty.toggle("nope");
        assert_eq!(empty.expanded(), None);
    }

    #[test]
    fn at_most_one_panel_is_expanded_across_any_sequence() {
        let mut state = group();
        for id in ["a", "b", "a", "c", "c", "b", "nope", "a"] {
            state.toggle(id);
            let open: Vec<_> = ["a", "b", "c"]
                .iter()
                .filter(|p| state.is_expanded(p))
                .collect();
            assert!(open.len() <= 1);
        }
    }
}
