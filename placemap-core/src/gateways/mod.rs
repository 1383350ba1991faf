pub mod geocode;
pub mod popup;
pub mod source;
pub mod viewport;
