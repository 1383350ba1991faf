use super::prelude::*;

/// Resolves an address to a position, consulting the geocode cache
/// before the network.
///
/// A cache hit is returned without any network call. On a miss, a single
/// gateway lookup is issued; on success the result is stored under the
/// exact address key and the cache persisted. Failed lookups never
/// mutate the cache and there are no retries.
///
/// Storage problems must never cost the caller a resolution: a failed
/// load behaves like an empty cache and a failed save is ignored.
pub fn resolve_address<G, R>(geo: &G, cache_repo: &R, address: &str) -> Option<MapPoint>
where
    G: GeoCodingGateway,
    R: GeocodeCacheRepo,
{
    if address.is_empty() {
        return None;
    }
    let mut cache = cache_repo.load_cache().unwrap_or_else(|err| {
        log::warn!("Unable to load the geocode cache: {err}");
        GeocodeCache::default()
    });
    if let Some(pos) = cache.get(address) {
        return Some(*pos);
    }
    let pos = geo.resolve_address_lng_lat(address)?;
    cache.insert(address.to_owned(), pos);
    if let Err(err) = cache_repo.save_cache(&cache) {
        log::warn!("Unable to save the geocode cache: {err}");
    }
    Some(pos)
}

#[cfg(test)]
mod tests {
    use super::super::tests::{MemCacheRepo, MockGeoGateway};
    use super::*;

    fn pt(lng: f64, lat: f64) -> MapPoint {
        MapPoint::try_from_lng_lat_deg(lng, lat).unwrap()
    }

    #[test]
    fn empty_address_yields_none_without_any_lookup() {
        let geo = MockGeoGateway::default();
        let cache = MemCacheRepo::default();
        assert_eq!(resolve_address(&geo, &cache, ""), None);
        assert_eq!(geo.lookups(), 0);
    }

    #[test]
    fn cache_hit_is_idempotent_and_skips_the_network() {
        let geo = MockGeoGateway::with_response("100 Main St", pt(-80.8, 35.2));
        let cache = MemCacheRepo::default();
        let first = resolve_address(&geo, &cache, "100 Main St").unwrap();
        let second = resolve_address(&geo, &cache, "100 Main St").unwrap();
        assert_eq!(first, second);
        assert_eq!(geo.lookups(), 1);
    }

    #[test]
    fn successful_resolution_persists_the_cache() {
        let geo = MockGeoGateway::with_response("100 Main St", pt(-80.8, 35.2));
        let cache = MemCacheRepo::default();
        let pos = resolve_address(&geo, &cache, "100 Main St").unwrap();
        assert_eq!((pos.lng(), pos.lat()), (-80.8, 35.2));
        assert_eq!(cache.stored().get("100 Main St"), Some(&pos));
    }

    #[test]
    fn failed_lookup_leaves_the_cache_untouched() {
        let geo = MockGeoGateway::default();
        let cache = MemCacheRepo::default();
        assert_eq!(resolve_address(&geo, &cache, "Nowhere 1"), None);
        assert!(cache.stored().is_empty());
        assert_eq!(cache.saves(), 0);
    }

    #[test]
    fn unreadable_cache_behaves_like_an_empty_one() {
        let geo = MockGeoGateway::with_response("100 Main St", pt(-80.8, 35.2));
        let cache = MemCacheRepo::failing_load();
        let pos = resolve_address(&geo, &cache, "100 Main St");
        assert_eq!(pos, Some(pt(-80.8, 35.2)));
    }

    #[test]
    fn unwritable_cache_does_not_cost_the_resolution() {
        let geo = MockGeoGateway::with_response("100 Main St", pt(-80.8, 35.2));
        let cache = MemCacheRepo::failing_save();
        let pos = resolve_address(&geo, &cache, "100 Main St");
        assert_eq!(pos, Some(pt(-80.8, 35.2)));
    }
}
