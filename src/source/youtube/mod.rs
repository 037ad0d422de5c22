pub mod common;
pub mod mix;

pub const WATCH_URL_BASE: &str = "https://www.youtube.com/watch";
pub const ARTWORK_URL_BASE: &str = "https://img.youtube.com/vi";
