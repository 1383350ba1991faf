use crate::entities::PopupContent;

pub trait PopupFormatter {
    fn render(&self, content: &PopupContent) -> String;
}
