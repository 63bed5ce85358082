pub mod scroll;
pub mod viewport;
