use crate::entities::MapPoint;

pub trait GeoCodingGateway {
    /// Resolves an address string to a position.
    ///
    /// Network and decoding failures are absorbed into `None`;
    /// implementations log and never propagate them.
    fn resolve_address_lng_lat(&self, address: &str) -> Option<MapPoint>;
}
