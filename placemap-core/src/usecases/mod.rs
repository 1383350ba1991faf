mod error;
mod render_map;
mod resolve_address;

#[cfg(test)]
pub mod tests;

pub use self::{error::Error, render_map::*, resolve_address::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        gateways::{geocode::*, source::*, viewport::*},
        repositories::*,
    };
}
