pub mod accordion;
pub mod nav;
pub mod reveal;
pub mod scroll_top;
pub mod stats;
pub mod toast;
pub mod video;
pub mod waitlist;
