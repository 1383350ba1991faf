use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A geographical position: longitude and latitude in degrees.
///
/// Both components are guaranteed to be finite. The serialized
/// representation is `{ "lng": …, "lat": … }` and deserialization
/// re-validates the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMapPoint", into = "RawMapPoint")]
pub struct MapPoint {
    lng: f64,
    lat: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawMapPoint {
    lng: f64,
    lat: f64,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Non-finite coordinate component")]
pub struct MapPointInvalidity;

impl MapPoint {
    pub fn try_from_lng_lat_deg(lng: f64, lat: f64) -> Result<Self, MapPointInvalidity> {
        if lng.is_finite() && lat.is_finite() {
            Ok(Self { lng, lat })
        } else {
            Err(MapPointInvalidity)
        }
    }

    pub fn lng(self) -> f64 {
        self.lng
    }

    pub fn lat(self) -> f64 {
        self.lat
    }
}

impl TryFrom<RawMapPoint> for MapPoint {
    type Error = MapPointInvalidity;
    fn try_from(from: RawMapPoint) -> Result<Self, Self::Error> {
        let RawMapPoint { lng, lat } = from;
        Self::try_from_lng_lat_deg(lng, lat)
    }
}

impl From<MapPoint> for RawMapPoint {
    fn from(from: MapPoint) -> Self {
        let MapPoint { lng, lat } = from;
        Self { lng, lat }
    }
}

/// A growable, axis-aligned bounding box tracking the minimal region
/// that contains all extended points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapBbox {
    // (southwest, northeast)
    bounds: Option<(MapPoint, MapPoint)>,
}

impl MapBbox {
    pub fn extend(&mut self, pt: MapPoint) {
        self.bounds = Some(match self.bounds {
            None => (pt, pt),
            Some((sw, ne)) => (
                // min/max of finite values stay finite
                MapPoint {
                    lng: sw.lng.min(pt.lng),
                    lat: sw.lat.min(pt.lat),
                },
                MapPoint {
                    lng: ne.lng.max(pt.lng),
                    lat: ne.lat.max(pt.lat),
                },
            ),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    pub fn southwest(&self) -> Option<MapPoint> {
        self.bounds.map(|(sw, _)| sw)
    }

    pub fn northeast(&self) -> Option<MapPoint> {
        self.bounds.map(|(_, ne)| ne)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_non_finite_components() {
        assert!(MapPoint::try_from_lng_lat_deg(f64::NAN, 0.0).is_err());
        assert!(MapPoint::try_from_lng_lat_deg(0.0, f64::INFINITY).is_err());
        assert!(MapPoint::try_from_lng_lat_deg(-80.8, 35.2).is_ok());
    }

    #[test]
    fn serde_round_trip() {
        let pt = MapPoint::try_from_lng_lat_deg(-80.8431, 35.2271).unwrap();
        let json = serde_json::to_string(&pt).unwrap();
        let back: MapPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(pt, back);
    }

    #[test]
    fn reject_non_finite_components_on_deserialization() {
        assert!(serde_json::from_str::<MapPoint>(r#"{"lng":null,"lat":35.2}"#).is_err());
    }

    #[test]
    fn accumulate_bounds() {
        let mut bbox = MapBbox::default();
        assert!(bbox.is_empty());
        bbox.extend(MapPoint::try_from_lng_lat_deg(-80.8, 35.2).unwrap());
        bbox.extend(MapPoint::try_from_lng_lat_deg(-81.0, 36.0).unwrap());
        bbox.extend(MapPoint::try_from_lng_lat_deg(-80.5, 35.0).unwrap());
        let sw = bbox.southwest().unwrap();
        let ne = bbox.northeast().unwrap();
        assert_eq!((sw.lng(), sw.lat()), (-81.0, 35.0));
        assert_eq!((ne.lng(), ne.lat()), (-80.5, 36.0));
    }
}
