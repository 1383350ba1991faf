use super::{prelude::*, resolve_address::resolve_address};
use crate::marker::{HoverOptions, MarkerMap};

/// Parameters of one render pass.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub hover: HoverOptions,
    /// Padding margin applied on all four sides when framing the
    /// accumulated bounds.
    pub fit_bounds_padding: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            hover: HoverOptions::default(),
            fit_bounds_padding: 40.0,
        }
    }
}

/// One full render pass: list the records, resolve them to positions,
/// bind markers and finally frame the camera.
///
/// Records are resolved strictly in source order, one at a time, so
/// cache reads and writes never interleave within a pass. A record that
/// yields no position is skipped silently and never aborts the pass.
/// The camera is only touched if at least one position was accumulated.
pub fn render_map<S, G, R, V>(
    source: &S,
    geo: &G,
    cache_repo: &R,
    viewport: &mut V,
    opts: RenderOptions,
) -> Result<MarkerMap>
where
    S: LocationSource,
    G: GeoCodingGateway,
    R: GeocodeCacheRepo,
    V: MapViewport,
{
    let records = source.list()?;
    let mut markers = MarkerMap::new(opts.hover);
    for record in records {
        let pos = record
            .literal_pos()
            .or_else(|| resolve_address(geo, cache_repo, &record.address));
        let Some(pos) = pos else {
            log::debug!("No position for location record {}: skipped", record.id);
            continue;
        };
        markers.bind(viewport, record, pos);
    }
    if !markers.bounds().is_empty() {
        viewport.fit_bounds(markers.bounds(), opts.fit_bounds_padding);
    }
    Ok(markers)
}
