use crate::entities::{Id, MapBbox, MapPoint, PopupContent};

/// Commands issued towards the rendering widget.
///
/// The widget owns the canvas, the camera and all marker/popup visuals;
/// the core never reaches into its rendering internals. Markers and
/// popups are addressed by the id of their location record.
pub trait MapViewport {
    /// Places a marker visual at the given position.
    fn add_marker(&mut self, id: &Id, at: MapPoint);

    /// Registers the popup content for a marker. Called once per marker
    /// before any mount command.
    fn create_popup(&mut self, id: &Id, content: PopupContent);

    fn mount_popup(&mut self, id: &Id, at: MapPoint);

    fn unmount_popup(&mut self, id: &Id);

    /// Marks the sidebar item of a record as visually active.
    fn set_item_active(&mut self, id: &Id, active: bool);

    /// Animates the camera to center on the given position at the
    /// given zoom.
    fn fly_to(&mut self, center: MapPoint, zoom: f64);

    fn zoom(&self) -> f64;

    /// Fits the camera to the given bounds with a padding margin on all
    /// four sides.
    fn fit_bounds(&mut self, bbox: &MapBbox, padding: f64);
}
