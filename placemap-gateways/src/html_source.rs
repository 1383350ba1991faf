use placemap_core::{
    entities::{Id, LocationRecord},
    gateways::source::{LocationSource, LocationSourceError},
    util::parse::parse_coord,
};
use scraper::{ElementRef, Html, Selector};
use std::{fs, io, path::Path};

/// Reads location records from markup following the `data-map-*` schema:
/// a `[data-map-list]` container with `[data-map-item]` children, each
/// carrying optional name/address/image/link sub-elements as well as
/// optional literal coordinate and id attributes. The marked elements
/// are the data-entry surface.
#[derive(Debug)]
pub struct HtmlLocationSource {
    html: String,
}

impl HtmlLocationSource {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn try_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(fs::read_to_string(path)?))
    }
}

// All selectors are literals, parsing cannot fail.
fn sel(selectors: &str) -> Selector {
    Selector::parse(selectors).expect("valid selector literal")
}

fn select_text(item: ElementRef, selectors: &str) -> String {
    item.select(&sel(selectors))
        .next()
        .map(|el| el.text().collect::<String>().trim().to_owned())
        .unwrap_or_default()
}

fn select_attr(item: ElementRef, selectors: &str, attr: &str) -> String {
    item.select(&sel(selectors))
        .next()
        .and_then(|el| el.value().attr(attr))
        .unwrap_or_default()
        .trim()
        .to_owned()
}

fn read_item(index: usize, item: ElementRef) -> LocationRecord {
    let id = item
        .value()
        .attr("data-map-id")
        .filter(|id| !id.is_empty())
        .map(Id::from)
        // Zero-based position as fallback id.
        .unwrap_or_else(|| Id::from(index));
    LocationRecord {
        id,
        name: select_text(item, "[data-map-name]"),
        address: select_text(item, "[data-map-address]"),
        image_url: select_attr(item, "[data-map-img]", "src"),
        link_url: select_attr(item, "[data-map-link]", "href"),
        lat: item.value().attr("data-map-lat").and_then(parse_coord),
        lng: item.value().attr("data-map-lng").and_then(parse_coord),
    }
}

impl LocationSource for HtmlLocationSource {
    fn list(&self) -> Result<Vec<LocationRecord>, LocationSourceError> {
        let doc = Html::parse_document(&self.html);
        let Some(list) = doc.select(&sel("[data-map-list]")).next() else {
            return Ok(Vec::new());
        };
        let records = list
            .select(&sel("[data-map-item]"))
            .enumerate()
            .map(|(index, item)| read_item(index, item))
            .filter(LocationRecord::is_mappable)
            .collect();
        Ok(records)
    }
}
