//! External endpoints and the presentation timing shared across components.

/// Form service endpoint the waitlist form posts to. Submission itself is
/// handled entirely by the service; the app only shows feedback around it.
pub fn form_endpoint() -> &'static str {
    "https://formspree.io/f/quantlens-waitlist"
}

/// Hosted demo opened by the "View Demo" link and the D shortcut.
pub fn demo_url() -> &'static str {
    "https://quantlens.netlify.app/"
}

/// How long a toast stays on screen before its exit transition starts.
pub const TOAST_HOLD_MS: u32 = 5_000;

/// Length of the toast slide-out transition.
pub const TOAST_EXIT_MS: u32 = 300;

/// Length of the accordion max-height transition. The height constraint is
/// released once it completes.
pub const ACCORDION_TRANSITION_MS: u32 = 300;

/// Stat counter animation length and number of steps.
pub const COUNTER_DURATION_MS: u32 = 2_000;
pub const COUNTER_STEPS: u32 = 50;

/// Extra margin between the fixed header and a scrolled-to section.
pub const SCROLL_MARGIN_PX: f64 = 20.0;
