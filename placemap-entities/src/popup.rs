use crate::location::LocationRecord;

pub const DEFAULT_NAME: &str = "Untitled";
pub const DEFAULT_ADDRESS: &str = "Address not available";
pub const DEFAULT_IMAGE_URL: &str = "https://via.placeholder.com/640x360?text=No+Image";
// A no-op anchor target.
pub const DEFAULT_LINK_URL: &str = "#";

/// Content of a marker popup with display defaults applied to all
/// empty fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupContent {
    pub name: String,
    pub address: String,
    pub image_url: String,
    pub link_url: String,
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_owned()
    } else {
        value.to_owned()
    }
}

impl From<&LocationRecord> for PopupContent {
    fn from(from: &LocationRecord) -> Self {
        Self {
            name: or_default(&from.name, DEFAULT_NAME),
            address: or_default(&from.address, DEFAULT_ADDRESS),
            image_url: or_default(&from.image_url, DEFAULT_IMAGE_URL),
            link_url: or_default(&from.link_url, DEFAULT_LINK_URL),
        }
    }
}
