use std::{collections::HashMap, time::Duration};

use crate::{
    entities::{Id, LocationRecord, MapBbox, MapPoint, PopupContent, TimestampMs},
    gateways::viewport::MapViewport,
};

/// Tunable parameters of the hover interaction.
#[derive(Debug, Clone)]
pub struct HoverOptions {
    /// Grace period between the pointer leaving a marker and its popup
    /// being hidden.
    pub hide_delay: Duration,
    /// Zoom floor used when the camera flies to a hovered sidebar item.
    /// If the camera is already more zoomed in, the zoom is kept.
    pub fly_to_zoom: f64,
}

impl Default for HoverOptions {
    fn default() -> Self {
        Self {
            hide_delay: Duration::from_millis(100),
            fly_to_zoom: 12.0,
        }
    }
}

/// Where a pointer event originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Marker,
    SidebarItem,
    Popup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
}

/// Visibility of a single popup.
///
/// The deadline inside `PendingHide` is the single-slot hide timer:
/// writing a new deadline supersedes the previous one and switching to
/// `Shown` cancels it. At most one hide can be pending per marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverState {
    Hidden,
    Shown,
    PendingHide { hide_at: TimestampMs },
}

/// Associates a location record with its marker position and hover state
/// for the duration of one render pass. There is no teardown path; the
/// binding lives until the pass is dropped.
#[derive(Debug, Clone)]
pub struct MarkerBinding {
    pub record: LocationRecord,
    pub pos: MapPoint,
    pub hover: HoverState,
}

/// All marker bindings of one render pass, keyed by record id, together
/// with the accumulated bounds of their positions.
#[derive(Debug, Default)]
pub struct MarkerMap {
    bindings: HashMap<Id, MarkerBinding>,
    bounds: MapBbox,
    opts: HoverOptions,
}

impl MarkerMap {
    pub fn new(opts: HoverOptions) -> Self {
        Self {
            opts,
            ..Default::default()
        }
    }

    pub fn bounds(&self) -> &MapBbox {
        &self.bounds
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn get(&self, id: &Id) -> Option<&MarkerBinding> {
        self.bindings.get(id)
    }

    /// Binds a resolved record: commands the viewport to place the marker
    /// visual and register the popup content, extends the bounds and
    /// registers the binding under the record id.
    pub fn bind<V: MapViewport>(&mut self, viewport: &mut V, record: LocationRecord, pos: MapPoint) {
        let id = record.id.clone();
        viewport.add_marker(&id, pos);
        viewport.create_popup(&id, PopupContent::from(&record));
        self.bounds.extend(pos);
        self.bindings.insert(
            id,
            MarkerBinding {
                record,
                pos,
                hover: HoverState::Hidden,
            },
        );
    }

    /// Feeds one pointer event into the hover state machine of the
    /// addressed binding. Events for unknown ids are ignored.
    pub fn on_pointer<V: MapViewport>(
        &mut self,
        viewport: &mut V,
        id: &Id,
        target: PointerTarget,
        event: PointerEvent,
        now: TimestampMs,
    ) {
        let Some(binding) = self.bindings.get_mut(id) else {
            log::debug!("Pointer event for unknown marker {id}: ignored");
            return;
        };
        match (event, target) {
            (PointerEvent::Enter, PointerTarget::Popup) => {
                // The popup is already mounted, only the pending hide
                // is cancelled.
                if let HoverState::PendingHide { .. } = binding.hover {
                    binding.hover = HoverState::Shown;
                }
            }
            (PointerEvent::Enter, target) => {
                binding.hover = HoverState::Shown;
                viewport.mount_popup(id, binding.pos);
                viewport.set_item_active(id, true);
                if target == PointerTarget::SidebarItem {
                    let zoom = viewport.zoom().max(self.opts.fly_to_zoom);
                    viewport.fly_to(binding.pos, zoom);
                }
            }
            (PointerEvent::Leave, _) => match binding.hover {
                HoverState::Hidden => (),
                // Last writer wins: a previously pending deadline is
                // superseded.
                HoverState::Shown | HoverState::PendingHide { .. } => {
                    binding.hover = HoverState::PendingHide {
                        hide_at: now + self.opts.hide_delay,
                    };
                }
            },
        }
    }

    /// Fires all hide deadlines that elapsed up to `now`: the popup is
    /// unmounted and the sidebar item deactivated exactly once.
    pub fn tick<V: MapViewport>(&mut self, viewport: &mut V, now: TimestampMs) {
        for (id, binding) in &mut self.bindings {
            if let HoverState::PendingHide { hide_at } = binding.hover {
                if hide_at <= now {
                    binding.hover = HoverState::Hidden;
                    viewport.unmount_popup(id);
                    viewport.set_item_active(id, false);
                }
            }
        }
    }
}
