use anyhow::anyhow;
use placemap_core::{entities::MapPoint, gateways::geocode::GeoCodingGateway};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://api.mapbox.com/geocoding/v5/mapbox.places";

/// Forward geocoding backed by the Mapbox places API.
///
/// One blocking GET per lookup, no retries. Every failure mode
/// (transport, status, decoding, empty result) is logged and absorbed
/// into `None` so that a bad address can never abort a render pass.
#[derive(Debug)]
pub struct Mapbox {
    api_key: String,
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl Mapbox {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT.to_owned())
    }

    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        Self {
            api_key,
            endpoint,
            client: reqwest::blocking::Client::new(),
        }
    }

    fn request_url(&self, address: &str) -> anyhow::Result<Url> {
        let mut url = Url::parse(&self.endpoint)?;
        url.path_segments_mut()
            .map_err(|()| anyhow!("Invalid geocoding endpoint: {}", self.endpoint))?
            .pop_if_empty()
            .push(&format!("{address}.json"));
        url.query_pairs_mut()
            .append_pair("access_token", &self.api_key);
        Ok(url)
    }

    fn lookup(&self, address: &str) -> anyhow::Result<Option<MapPoint>> {
        let url = self.request_url(address)?;
        let res = self.client.get(url).send()?;
        if !res.status().is_success() {
            log::warn!("Geocoding request failed: response status {}", res.status());
            return Ok(None);
        }
        let body: GeocodingResponse = res.json()?;
        let Some(feature) = body.features.into_iter().next() else {
            return Ok(None);
        };
        let [lng, lat] = feature.center;
        Ok(MapPoint::try_from_lng_lat_deg(lng, lat).ok())
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    // [lng, lat]
    center: [f64; 2],
}

impl GeoCodingGateway for Mapbox {
    fn resolve_address_lng_lat(&self, address: &str) -> Option<MapPoint> {
        match self.lookup(address) {
            Ok(res) => res,
            Err(err) => {
                log::warn!("Unable to resolve address '{address}': {err}");
                None
            }
        }
    }
}
