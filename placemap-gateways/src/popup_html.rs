use askama::Template;
use placemap_core::{entities::PopupContent, gateways::popup::PopupFormatter};

/// Renders the popup card markup that viewport implementations mount
/// into their popup layer. Record-sourced text is HTML-escaped.
#[derive(Debug, Default)]
pub struct HtmlPopupFormatter;

impl PopupFormatter for HtmlPopupFormatter {
    fn render(&self, content: &PopupContent) -> String {
        let tpl = PopupCardTemplate {
            name: &content.name,
            address: &content.address,
            image_url: &content.image_url,
            link_url: &content.link_url,
        };
        tpl.render().unwrap()
    }
}

#[derive(Template)]
#[template(path = "popup_card.html")]
struct PopupCardTemplate<'a> {
    name: &'a str,
    address: &'a str,
    image_url: &'a str,
    link_url: &'a str,
}
