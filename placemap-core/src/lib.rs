#![deny(missing_debug_implementations)]

pub mod entities {
    pub use placemap_entities::{geo::*, id::*, location::*, popup::*, time::*};
}

pub mod gateways;
pub mod marker;
pub mod repositories;
pub mod usecases;
pub mod util;
