#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # placemap-entities
//!
//! Reusable, agnostic domain entities for PlaceMap.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod geo;
pub mod id;
pub mod location;
pub mod popup;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
