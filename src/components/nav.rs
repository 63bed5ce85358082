//! Fixed site header with section links and a mobile menu. The menu closes
//! when a link is followed and when the user clicks anywhere outside the
//! header.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};
use yew::prelude::*;

use crate::utils::scroll::scroll_to_section;

const SECTIONS: [(&str, &str); 4] = [
    ("features", "Features"),
    ("demo", "Demo"),
    ("faq", "FAQ"),
    ("waitlist", "Waitlist"),
];

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state(|| false);
    let header_ref = use_node_ref();

    // The header picks up a solid background once the page scrolls.
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(y) = win.scroll_y() {
                                    scrolled.set(y > 50.0);
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

    // Clicks outside the header close the mobile menu.
    {
        let menu_open = menu_open.clone();
        let header_ref = header_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> =
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let callback = Closure::<dyn Fn(web_sys::Event)>::new({
                            let menu_open = menu_open.clone();
                            let header_ref = header_ref.clone();
                            move |e: web_sys::Event| {
                                let inside = e
                                    .target()
                                    .and_then(|t| t.dyn_into::<Node>().ok())
                                    .map(|node| {
                                        header_ref
                                            .get()
                                            .map(|header| header.contains(Some(&node)))
                                            .unwrap_or(false)
                                    })
                                    .unwrap_or(false);
                                if !inside {
                                    menu_open.set(false);
                                }
                            }
                        });
                        let _ = document.add_event_listener_with_callback(
                            "click",
                            callback.as_ref().unchecked_ref(),
                        );
                        Box::new(move || {
                            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                                let _ = doc.remove_event_listener_with_callback(
                                    "click",
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

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    html! {
        <header
            ref={header_ref}
            class={classes!("site-header", (*scrolled).then_some("scrolled"))}
        >
            <a class="nav-logo" href="/">{"QuantLens"}</a>
            <nav class={classes!("nav", (*menu_open).then_some("active"))}>
                { for SECTIONS.iter().map(|(id, label)| {
                    let menu_open = menu_open.clone();
                    let id = *id;
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        menu_open.set(false);
                        scroll_to_section(id);
                    });
                    html! {
                        <a class="nav-link" href={format!("#{}", id)} onclick={onclick}>
                            { *label }
                        </a>
                    }
                }) }
            </nav>
            <button
                class={classes!("menu-toggle", (*menu_open).then_some("active"))}
                onclick={toggle_menu}
                aria-label="Toggle menu"
            >
                <span></span><span></span><span></span>
            </button>
            <style>{ NAV_CSS }</style>
        </header>
    }
}

const NAV_CSS: &str = r#"
    .site-header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 1rem 2rem;
        background: rgba(10, 12, 20, 0.85);
        backdrop-filter: blur(10px);
        z-index: 1000;
        transition: background 0.3s ease, backdrop-filter 0.3s ease;
    }
    .site-header.scrolled {
        background: rgba(10, 12, 20, 0.98);
        backdrop-filter: blur(20px);
    }
    .nav-logo {
        font-size: 1.4rem;
        font-weight: 700;
        text-decoration: none;
        background: linear-gradient(45deg, #fff, #7EB2FF);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .nav {
        display: flex;
        gap: 2rem;
    }
    .nav-link {
        color: #ddd;
        text-decoration: none;
        font-size: 1rem;
        transition: color 0.3s ease;
    }
    .nav-link:hover {
        color: #7EB2FF;
    }
    .menu-toggle {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
        padding: 6px;
    }
    .menu-toggle span {
        width: 24px;
        height: 2px;
        background: #fff;
        transition: transform 0.3s ease, opacity 0.3s ease;
    }
    .menu-toggle.active span:nth-child(1) {
        transform: translateY(7px) rotate(45deg);
    }
    .menu-toggle.active span:nth-child(2) {
        opacity: 0;
    }
    .menu-toggle.active span:nth-child(3) {
        transform: translateY(-7px) rotate(-45deg);
    }
    @media (max-width: 768px) {
        .menu-toggle {
            display: flex;
        }
        .nav {
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            flex-direction: column;
            gap: 0;
            background: rgba(10, 12, 20, 0.98);
            max-height: 0;
            overflow: hidden;
            transition: max-height 0.3s ease-out;
        }
        .nav.active {
            max-height: 300px;
        }
        .nav-link {
            padding: 1rem 2rem;
        }
    }
"#;
