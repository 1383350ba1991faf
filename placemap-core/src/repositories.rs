// Low-level storage access traits.

use crate::entities::MapPoint;
use std::{collections::HashMap, io};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The stored data could not be decoded")]
    InvalidData,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// The persisted address-to-position mapping. Keys are exact-match
/// address strings; entries live until the underlying store is cleared
/// externally.
pub type GeocodeCache = HashMap<String, MapPoint>;

/// A single named slot of persistent storage holding the geocode cache.
///
/// Single-threaded use only: loads and saves are issued strictly
/// between resolver invocations.
pub trait GeocodeCacheRepo {
    fn load_cache(&self) -> Result<GeocodeCache>;
    fn save_cache(&self, cache: &GeocodeCache) -> Result<()>;
}
