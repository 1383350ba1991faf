use anyhow::{anyhow, Result};
use placemap_core::entities::MapPoint;
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "placemap.toml";

pub struct Config {
    pub map: Map,
    pub geocoding: Geocoding,
    pub hover: Hover,
    pub cache: Cache,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        Self::try_from(raw_config)
    }
}

pub struct Map {
    /// Initial camera center.
    pub center: MapPoint,
    /// Initial camera zoom.
    pub zoom: f64,
    /// Padding in pixels around the fitted marker bounds.
    pub fit_bounds_padding: f64,
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
}

pub enum GeocodingGateway {
    Mapbox {
        api_key: String,
        endpoint: Option<String>,
    },
}

pub struct Hover {
    pub hide_delay: Duration,
    pub fly_to_zoom: f64,
}

pub struct Cache {
    /// File system directory for the geocode cache store.
    pub dir: PathBuf,
    /// Name of the cache slot within the store.
    pub slot: Option<String>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            map,
            geocoding,
            hover,
            cache,
        } = from;

        let map = {
            let raw::Map {
                center_lng,
                center_lat,
                zoom,
                fit_bounds_padding,
            } = map.unwrap_or_default();
            let center = MapPoint::try_from_lng_lat_deg(center_lng, center_lat)
                .map_err(|err| anyhow!("Invalid default map center: {err}"))?;
            if !zoom.is_finite() {
                return Err(anyhow!("Invalid default map zoom"));
            }
            if !fit_bounds_padding.is_finite() {
                return Err(anyhow!("Invalid fit-bounds padding"));
            }
            Map {
                center,
                zoom,
                fit_bounds_padding,
            }
        };

        let geocoding = Geocoding {
            gateway: geocoding.and_then(|g| g.mapbox).map(|mapbox| {
                let raw::Mapbox { api_key, endpoint } = mapbox;
                GeocodingGateway::Mapbox { api_key, endpoint }
            }),
        };

        let hover = {
            let raw::Hover {
                hide_delay,
                fly_to_zoom,
            } = hover.unwrap_or_default();
            if !fly_to_zoom.is_finite() {
                return Err(anyhow!("Invalid fly-to zoom"));
            }
            Hover {
                hide_delay,
                fly_to_zoom,
            }
        };

        let cache = {
            let raw::Cache { dir, slot } = cache.unwrap_or_default();
            Cache { dir, slot }
        };

        Ok(Self {
            map,
            geocoding,
            hover,
            cache,
        })
    }
}
