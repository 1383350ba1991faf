use jfs::Store;
use placemap_core::repositories::{Error, GeocodeCache, GeocodeCacheRepo};
use std::{io, path::Path};

pub const DEFAULT_SLOT: &str = "mapbox_geocode_cache_v1";

/// Persists the geocode cache as a single JSON document in a directory
/// of the local file system. No eviction, no TTL; the document lives
/// until the directory is cleared externally.
pub struct JsonFileCache {
    json_store: Store,
    slot: String,
}

impl JsonFileCache {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        Self::try_with_slot(directory, DEFAULT_SLOT)
    }

    pub fn try_with_slot<P: AsRef<Path>>(directory: P, slot: impl Into<String>) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self {
            json_store,
            slot: slot.into(),
        })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

impl GeocodeCacheRepo for JsonFileCache {
    fn load_cache(&self) -> Result<GeocodeCache, Error> {
        match self.json_store.get::<GeocodeCache>(&self.slot) {
            Ok(cache) => Ok(cache),
            // An absent document is a first run, not an error.
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(GeocodeCache::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn save_cache(&self, cache: &GeocodeCache) -> Result<(), Error> {
        self.json_store.save_with_id(cache, &self.slot)?;
        Ok(())
    }
}
