pub mod geocode_cache;
pub mod html_source;
pub mod mapbox;
pub mod popup_html;
