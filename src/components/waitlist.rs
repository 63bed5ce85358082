//! Waitlist signup form. The actual submission goes straight to the external
//! form service via the form's own action; this component only layers visual
//! feedback on top and never prevents or rewrites the submission.

use gloo_console::log;
use gloo_timers::callback::Timeout;
use web_sys::{FocusEvent, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::toast::ToastHandle;
use crate::config;

/// Loose shape check, enough to catch obvious typos before the form service
/// does the real validation. Mirrors "local@host.tld, no whitespace".
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.contains('@') => {
            match domain.rsplit_once('.') {
                Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
                None => false,
            }
        }
        _ => false,
    }
}

fn experience_message(value: &str) -> Option<&'static str> {
    match value {
        "beginner" => {
            Some("Perfect! QuantLens is designed to help beginners learn trading effectively.")
        }
        "intermediate" => {
            Some("Great! QuantLens will help you refine your strategies and improve performance.")
        }
        "advanced" => Some("Excellent! You'll love our advanced analytics and backtesting features."),
        "professional" => {
            Some("Welcome! Our enterprise features are perfect for professional traders.")
        }
        _ => None,
    }
}

#[function_component(WaitlistForm)]
pub fn waitlist_form() -> Html {
    let toasts = use_context::<ToastHandle>().unwrap_or_else(ToastHandle::noop);
    let submitting = use_state(|| false);
    let email_class = use_state(|| None::<&'static str>);
    let name_class = use_state(|| None::<&'static str>);
    let select_class = use_state(|| None::<&'static str>);

    let onsubmit = {
        let submitting = submitting.clone();
        let toasts = toasts.clone();
        Callback::from(move |_: SubmitEvent| {
            // Default is not prevented: the form service receives the post.
            log!("waitlist submission handed off to the form service");
            submitting.set(true);
            let toasts = toasts.clone();
            Timeout::new(1_000, move || {
                toasts.success(
                    "Thank you for joining our waitlist! Check your email for confirmation.",
                );
            })
            .forget();
        })
    };

    let on_email_blur = {
        let email_class = email_class.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: FocusEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            if !value.is_empty() && !is_valid_email(&value) {
                email_class.set(Some("field-error"));
                toasts.error("Please enter a valid email address");
            } else {
                email_class.set(None);
            }
        })
    };

    let on_name_blur = {
        let name_class = name_class.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: FocusEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value().trim().to_string();
            if !value.is_empty() && value.chars().count() < 2 {
                name_class.set(Some("field-error"));
                toasts.error("Please enter your full name");
            } else {
                name_class.set(None);
            }
        })
    };

    let on_experience_change = {
        let select_class = select_class.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            if value.is_empty() {
                select_class.set(None);
                return;
            }
            select_class.set(Some("field-valid"));
            if let Some(message) = experience_message(&value) {
                let toasts = toasts.clone();
                Timeout::new(500, move || toasts.success(message)).forget();
            }
        })
    };

    html! {
        <form
            class="waitlist-form"
            action={config::form_endpoint()}
            method="post"
            onsubmit={onsubmit}
        >
            <input
                class={classes!("form-control", *name_class)}
                type="text"
                name="name"
                placeholder="Your name"
                onblur={on_name_blur}
            />
            <input
                class={classes!("form-control", *email_class)}
                type="email"
                name="email"
                placeholder="you@example.com"
                required=true
                onblur={on_email_blur}
            />
            <select
                class={classes!("form-control", *select_class)}
                name="trading_experience"
                onchange={on_experience_change}
            >
                <option value="" selected=true>{"Trading experience"}</option>
                <option value="beginner">{"Beginner"}</option>
                <option value="intermediate">{"Intermediate"}</option>
                <option value="advanced">{"Advanced"}</option>
                <option value="professional">{"Professional"}</option>
            </select>
            <button class="submit-button" type="submit" disabled={*submitting}>
                { if *submitting { "Joining..." } else { "Join the Waitlist" } }
            </button>
            <style>{ FORM_CSS }</style>
        </form>
    }
}

const FORM_CSS: &str = r#"
    .waitlist-form {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        max-width: 420px;
        margin: 0 auto;
    }
    .waitlist-form .form-control {
        padding: 0.9rem 1.1rem;
        border-radius: 8px;
        border: 1px solid rgba(126, 178, 255, 0.25);
        background: rgba(0, 0, 0, 0.3);
        color: #fff;
        font-size: 1rem;
        transition: border-color 0.3s ease;
    }
    .waitlist-form .form-control:focus {
        outline: none;
        border-color: #7EB2FF;
    }
    .waitlist-form .field-error {
        border-color: #E74C3C;
    }
    .waitlist-form .field-valid {
        border-color: #27AE60;
    }
    .waitlist-form .submit-button {
        padding: 1rem 2rem;
        border: none;
        border-radius: 8px;
        background: linear-gradient(45deg, #7EB2FF, #4169E1);
        color: #fff;
        font-size: 1.05rem;
        font-weight: 600;
        cursor: pointer;
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .waitlist-form .submit-button:hover:not(:disabled) {
        transform: translateY(-2px);
        box-shadow: 0 4px 20px rgba(126, 178, 255, 0.4);
    }
    .waitlist-form .submit-button:disabled {
        opacity: 0.7;
        cursor: default;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("trader@example.com"));
        assert!(is_valid_email("a.b+tag@sub.domain.io"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@domain."));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn every_experience_level_has_a_message() {
        for level in ["beginner", "intermediate", "advanced", "professional"] {
            assert!(experience_message(level).is_some());
        }
        assert!(experience_message("").is_none());
        assert!(experience_message("other").is_none());
    }
}
