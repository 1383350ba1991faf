use crate::{geo::MapPoint, id::Id};

/// A single entry of the location list, as read from the data-entry
/// surface. Constructed once per listing pass and immutable thereafter.
///
/// `lat`/`lng` carry literal coordinates; a component is only present if
/// it parsed to a finite number.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LocationRecord {
    pub id: Id,
    pub name: String,
    pub address: String,
    pub image_url: String,
    pub link_url: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl LocationRecord {
    /// Literal coordinates, if both components are present and finite.
    /// They take precedence over the address.
    pub fn literal_pos(&self) -> Option<MapPoint> {
        match (self.lng, self.lat) {
            (Some(lng), Some(lat)) => MapPoint::try_from_lng_lat_deg(lng, lat).ok(),
            _ => None,
        }
    }

    /// A record is retained only if it carries a name, an address or
    /// both literal coordinates.
    pub fn is_mappable(&self) -> bool {
        !self.name.is_empty()
            || !self.address.is_empty()
            || (self.lat.is_some() && self.lng.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_pos_requires_both_components() {
        let mut record = LocationRecord {
            lat: Some(35.2),
            ..Default::default()
        };
        assert_eq!(record.literal_pos(), None);
        record.lng = Some(-80.8);
        let pos = record.literal_pos().unwrap();
        assert_eq!((pos.lng(), pos.lat()), (-80.8, 35.2));
    }

    #[test]
    fn retention() {
        assert!(!LocationRecord::default().is_mappable());
        assert!(LocationRecord {
            name: "Cafe".into(),
            ..Default::default()
        }
        .is_mappable());
        assert!(LocationRecord {
            address: "100 Main St".into(),
            ..Default::default()
        }
        .is_mappable());
        assert!(LocationRecord {
            lat: Some(35.2),
            lng: Some(-80.8),
            ..Default::default()
        }
        .is_mappable());
    }
}
