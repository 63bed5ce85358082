use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::components::accordion::{AccordionItem, AccordionState};
use crate::components::nav::NavBar;
use crate::components::reveal::ScrollReveal;
use crate::components::scroll_top::ScrollTopButton;
use crate::components::stats::StatCounter;
use crate::components::toast::ToastHandle;
use crate::components::video::VideoPlaceholder;
use crate::components::waitlist::WaitlistForm;
use crate::config;
use crate::utils::scroll::{scroll_to_section, scroll_to_waitlist_and_focus};

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "strategy-builder",
        "AI Strategy Builder",
        "Describe a trading idea in plain language and watch it turn into a fully parameterized strategy, ready to test.",
    ),
    (
        "backtesting",
        "Instant Backtesting",
        "Replay a decade of market data in seconds and see how your strategy would have performed, drawdowns included.",
    ),
    (
        "risk-analytics",
        "Risk Analytics",
        "Position sizing, exposure limits and volatility-aware stops computed for you before a single order goes out.",
    ),
    (
        "signal-alerts",
        "Live Signal Alerts",
        "Get notified the moment one of your strategies fires, on any device, without staring at charts all day.",
    ),
];

const FAQ_ITEMS: [(&str, &str, &str); 5] = [
    (
        "faq-what-is-quantlens",
        "What is QuantLens?",
        "QuantLens is an AI-powered workbench for designing, backtesting and refining trading strategies. You describe what you want in plain language; QuantLens handles the quantitative heavy lifting.",
    ),
    (
        "faq-experience-needed",
        "Do I need trading or coding experience?",
        "No. Beginners can start from curated strategy templates and learn as they go, while experienced traders can drop straight into the advanced analytics. No code is required at any point.",
    ),
    (
        "faq-markets",
        "Which markets are supported?",
        "US equities and major crypto pairs at launch, with forex and European markets on the roadmap. Waitlist members vote on what ships next.",
    ),
    (
        "faq-pricing",
        "How much will it cost?",
        "There will be a free tier for strategy design and limited backtests. Early waitlist members lock in a permanent discount on the full plan.",
    ),
    (
        "faq-advice",
        "Is this financial advice?",
        "No. QuantLens is an analysis tool. It never places trades on your behalf and nothing it produces is a recommendation to buy or sell anything.",
    ),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let toasts = use_context::<ToastHandle>().unwrap_or_else(ToastHandle::noop);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Global shortcuts: J joins the waitlist, D opens the demo, F jumps to
    // the features section. Suppressed while a form field has focus.
    {
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> =
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let callback =
                            Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                                let in_field = e
                                    .target()
                                    .and_then(|t| t.dyn_into::<HtmlElement>().ok())
                                    .map(|el| {
                                        matches!(
                                            el.tag_name().as_str(),
                                            "INPUT" | "TEXTAREA" | "SELECT"
                                        )
                                    })
                                    .unwrap_or(false);
                                if in_field {
                                    return;
                                }
                                match e.key().as_str() {
                                    "j" | "J" => {
                                        e.prevent_default();
                                        scroll_to_waitlist_and_focus();
                                    }
                                    "d" | "D" => {
                                        e.prevent_default();
                                        if let Some(window) = web_sys::window() {
                                            let _ = window.open_with_url_and_target(
                                                config::demo_url(),
                                                "_blank",
                                            );
                                        }
                                    }
                                    "f" | "F" => {
                                        e.prevent_default();
                                        scroll_to_section("features");
                                    }
                                    _ => {}
                                }
                            });
                        let _ = document.add_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                        Box::new(move || {
                            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                                let _ = doc.remove_event_listener_with_callback(
                                    "keydown",
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

    let faq = use_state(|| AccordionState::new(FAQ_ITEMS.iter().map(|(id, _, _)| *id)));
    let on_faq_toggle = {
        let faq = faq.clone();
        Callback::from(move |id: String| {
            let mut next = (*faq).clone();
            next.toggle(&id);
            faq.set(next);
        })
    };

    let join_waitlist = Callback::from(move |_: MouseEvent| scroll_to_waitlist_and_focus());

    html! {
        <div class="landing-page">
            <NavBar />
            <header class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">{"Trade Smarter with AI-Powered Strategy Design"}</h1>
                    <p class="hero-subtitle">
                        {"Turn plain-language trading ideas into backtested strategies. "}
                        {"No code, no spreadsheets, no guesswork."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={join_waitlist}>
                            {"Join Waitlist"}
                        </button>
                        <a
                            class="demo-link"
                            href={config::demo_url()}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"View Demo"}
                        </a>
                    </div>
                    <p class="shortcut-hint">{"Shortcuts: J join · D demo · F features"}</p>
                </div>
            </header>

            <section class="stats-section">
                <StatCounter value={12500} suffix="+" label="Strategies backtested" />
                <StatCounter value={94} suffix="%" label="Beta testers who'd recommend us" />
                <StatCounter value={2800} suffix="+" label="Traders on the waitlist" />
            </section>

            <section id="features" class="features-section">
                <h2>{"Everything a strategy needs"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().map(|(id, title, blurb)| {
                        let toasts = toasts.clone();
                        let title_owned = title.to_string();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            toasts.info(format!(
                                "{} - Full demo available after launch! Join the waitlist for early access.",
                                title_owned
                            ));
                        });
                        html! {
                            <ScrollReveal>
                                <div class="feature-card" data-feature={*id} onclick={onclick}>
                                    <h3 class="feature-title">{ *title }</h3>
                                    <p>{ *blurb }</p>
                                </div>
                            </ScrollReveal>
                        }
                    }) }
                </div>
            </section>

            <section id="demo" class="demo-section">
                <h2>{"See it in action"}</h2>
                <div class="demo-grid">
                    <VideoPlaceholder title="Building a strategy" />
                    <VideoPlaceholder title="Reading a backtest" />
                </div>
            </section>

            <section class="testimonials-section">
                <h2>{"What early testers say"}</h2>
                <ScrollReveal>
                    <div class="testimonial-card">
                        <blockquote>
                            {"I sketched a mean-reversion idea over coffee and had a backtest before the cup was empty. That loop used to take me a weekend."}
                        </blockquote>
                        <p class="testimonial-author">{"— Priya, swing trader"}</p>
                    </div>
                </ScrollReveal>
                <ScrollReveal>
                    <div class="testimonial-card">
                        <blockquote>
                            {"The risk analytics alone are worth it. It flagged an exposure problem in a strategy I'd been running live for months."}
                        </blockquote>
                        <p class="testimonial-author">{"— Marcus, prop desk"}</p>
                    </div>
                </ScrollReveal>
            </section>

            <section id="faq" class="faq-section">
                <h2>{"Frequently Asked Questions"}</h2>
                { for FAQ_ITEMS.iter().map(|(id, question, answer)| {
                    html! {
                        <AccordionItem
                            id={*id}
                            question={*question}
                            expanded={faq.is_expanded(id)}
                            on_toggle={on_faq_toggle.clone()}
                        >
                            <p>{ *answer }</p>
                        </AccordionItem>
                    }
                }) }
            </section>

            <section id="waitlist" class="waitlist-section">
                <h2>{"Get early access"}</h2>
                <p class="subtitle">
                    {"Join the waitlist and help steer what we build. Early members keep their launch pricing forever."}
                </p>
                <WaitlistForm />
            </section>

            <footer class="site-footer">
                <p>{"© 2026 QuantLens. Markets involve risk; QuantLens is an analysis tool, not financial advice."}</p>
            </footer>

            <ScrollTopButton />
            <style>{ LANDING_CSS }</style>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    .landing-page {
        min-height: 100vh;
        background-color: #0a0c14;
        color: #fff;
        font-family: system-ui, -apple-system, sans-serif;
        overflow-x: hidden;
    }
    .landing-page section {
        position: relative;
        z-index: 1;
    }
    .landing-page h2 {
        font-size: 2.5rem;
        margin-bottom: 1.5rem;
        text-align: center;
        background: linear-gradient(45deg, #fff, #7EB2FF);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
        padding: 6rem 2rem 4rem;
        background: radial-gradient(ellipse at top, rgba(65, 105, 225, 0.2), transparent 60%);
    }
    .hero-content {
        max-width: 720px;
    }
    .hero-title {
        font-size: 3rem;
        font-weight: 700;
        margin: 0 auto 1rem;
        background: linear-gradient(45deg, #fff, #7EB2FF);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
        text-shadow: 0 0 20px rgba(30, 144, 255, 0.2);
    }
    .hero-subtitle {
        font-size: 1.3rem;
        font-weight: 300;
        color: #bbb;
        line-height: 1.8;
        margin: 0 auto 3rem;
    }
    .hero-cta-group {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 1rem;
    }
    .hero-cta {
        background: linear-gradient(45deg, #7EB2FF, #4169E1);
        color: white;
        border: 1px solid rgba(255, 255, 255, 0.2);
        padding: 1rem 2.5rem;
        border-radius: 8px;
        font-size: 1.1rem;
        cursor: pointer;
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .hero-cta:hover {
        transform: translateY(-2px);
        box-shadow: 0 4px 20px rgba(126, 178, 255, 0.4);
    }
    .demo-link {
        color: #7EB2FF;
        text-decoration: none;
        font-size: 1rem;
        padding: 0.5rem 1rem;
        transition: color 0.3s ease;
    }
    .demo-link:hover {
        color: #90c2ff;
        text-shadow: 0 0 8px rgba(30, 144, 255, 0.3);
    }
    .shortcut-hint {
        margin-top: 2rem;
        font-size: 0.85rem;
        color: #555;
    }
    .stats-section {
        display: flex;
        justify-content: center;
        gap: 4rem;
        padding: 4rem 2rem;
        flex-wrap: wrap;
    }
    .stat {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
    }
    .stat-number {
        font-size: 2.5rem;
        font-weight: 700;
        color: #7EB2FF;
    }
    .stat-label {
        color: #999;
        font-size: 1rem;
    }
    .features-section {
        padding: 4rem 2rem;
        max-width: 1100px;
        margin: 0 auto;
    }
    .features-grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 2rem;
        margin-top: 2rem;
    }
    .feature-card {
        background: rgba(0, 0, 0, 0.25);
        border: 1px solid rgba(126, 178, 255, 0.15);
        border-radius: 16px;
        padding: 2rem;
        cursor: pointer;
        transition: transform 0.3s ease, box-shadow 0.3s ease;
        height: 100%;
    }
    .feature-card:hover {
        transform: translateY(-5px);
        box-shadow: 0 8px 32px rgba(30, 144, 255, 0.15);
    }
    .feature-title {
        color: #7EB2FF;
        font-size: 1.4rem;
        margin: 0 0 1rem;
    }
    .feature-card p {
        color: #bbb;
        line-height: 1.6;
        margin: 0;
    }
    .demo-section {
        padding: 4rem 2rem;
        max-width: 1100px;
        margin: 0 auto;
    }
    .demo-grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 2rem;
        margin-top: 2rem;
    }
    .testimonials-section {
        padding: 4rem 2rem;
        max-width: 800px;
        margin: 0 auto;
    }
    .testimonial-card {
        background: rgba(0, 0, 0, 0.25);
        border-radius: 12px;
        padding: 2rem;
        margin: 1rem 0;
    }
    .testimonial-card blockquote {
        font-size: 1.2rem;
        color: #ddd;
        line-height: 1.6;
        margin: 0;
        font-style: italic;
    }
    .testimonial-author {
        text-align: right;
        color: #bbb;
        margin: 1rem 0 0;
    }
    .faq-section {
        padding: 4rem 2rem;
        max-width: 800px;
        margin: 0 auto;
    }
    .waitlist-section {
        padding: 4rem 2rem 6rem;
        max-width: 800px;
        margin: 0 auto;
        text-align: center;
    }
    .waitlist-section .subtitle {
        color: #999;
        margin-bottom: 2.5rem;
        line-height: 1.6;
    }
    .site-footer {
        border-top: 1px solid rgba(30, 144, 255, 0.1);
        padding: 2rem;
        text-align: center;
        color: #666;
        font-size: 0.9rem;
    }
    .not-found {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1rem;
    }
    @media (max-width: 768px) {
        .hero {
            padding: 2rem 1rem;
            padding-top: 100px;
        }
        .hero-title {
            font-size: 2rem;
        }
        .hero-subtitle {
            font-size: 1.1rem;
            line-height: 1.6;
            margin-bottom: 2rem;
        }
        .landing-page h2 {
            font-size: 2rem;
        }
        .stats-section {
            gap: 2rem;
        }
        .features-grid,
        .demo-grid {
            grid-template-columns: 1fr;
            gap: 1.5rem;
        }
    }
"#;
