use crate::{config::Config, Result};
use placemap_core::{
    gateways::{geocode::GeoCodingGateway, source::LocationSource, viewport::MapViewport},
    marker::{HoverOptions, MarkerMap},
    repositories::GeocodeCacheRepo,
    usecases::{self, RenderOptions},
};

/// Runs one full render pass with the configured hover parameters.
///
/// The embedder initializes its map widget at `cfg.map.center` /
/// `cfg.map.zoom` beforehand and keeps feeding pointer events and clock
/// ticks into the returned [`MarkerMap`] afterwards.
pub fn render_map<S, G, R, V>(
    source: &S,
    geo: &G,
    cache_repo: &R,
    viewport: &mut V,
    cfg: &Config,
) -> Result<MarkerMap>
where
    S: LocationSource,
    G: GeoCodingGateway,
    R: GeocodeCacheRepo,
    V: MapViewport,
{
    let opts = RenderOptions {
        hover: HoverOptions {
            hide_delay: cfg.hover.hide_delay,
            fly_to_zoom: cfg.hover.fly_to_zoom,
        },
        fit_bounds_padding: cfg.map.fit_bounds_padding,
    };
    Ok(usecases::render_map(source, geo, cache_repo, viewport, opts)?)
}
