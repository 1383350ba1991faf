use crate::config::{Cache, Config, GeocodingGateway};
use placemap_core::{entities::MapPoint, gateways::geocode::GeoCodingGateway};
use placemap_gateways::{geocode_cache::JsonFileCache, mapbox::Mapbox};
use std::io;

// Never a valid token; ships in embed snippets as a reminder.
const PLACEHOLDER_API_KEY: &str = "YOUR_MAPBOX_TOKEN_HERE";

pub fn geocoding_gateway(cfg: &Config) -> GeoGw {
    match &cfg.geocoding.gateway {
        Some(GeocodingGateway::Mapbox { api_key, endpoint }) => {
            if api_key.is_empty() || api_key == PLACEHOLDER_API_KEY {
                warn!("Mapbox access token missing: geocoding lookups will fail");
            }
            let gw = match endpoint {
                Some(endpoint) => Mapbox::with_endpoint(api_key.clone(), endpoint.clone()),
                None => Mapbox::new(api_key.clone()),
            };
            GeoGw::new(gw)
        }
        None => {
            warn!("No geocoding gateway was configured");
            GeoGw::new(DummyGeoGw)
        }
    }
}

pub fn geocode_cache(cfg: &Config) -> io::Result<JsonFileCache> {
    let Cache { dir, slot } = &cfg.cache;
    match slot {
        Some(slot) => JsonFileCache::try_with_slot(dir, slot.clone()),
        None => JsonFileCache::try_new(dir),
    }
}

struct DummyGeoGw;

impl GeoCodingGateway for DummyGeoGw {
    fn resolve_address_lng_lat(&self, address: &str) -> Option<MapPoint> {
        debug!("Cannot resolve '{address}' because no geocoding gateway was configured");
        None
    }
}

pub struct GeoGw(Box<dyn GeoCodingGateway + Send + Sync + 'static>);

impl GeoGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: GeoCodingGateway + Send + Sync + 'static,
    {
        Self(Box::new(gw))
    }
}

impl GeoCodingGateway for GeoGw {
    fn resolve_address_lng_lat(&self, address: &str) -> Option<MapPoint> {
        self.0.resolve_address_lng_lat(address)
    }
}
