// Shared test doubles for the usecase and marker lifecycle tests.

use std::{
    cell::RefCell,
    collections::HashMap,
};

use anyhow::anyhow;

use crate::{
    entities::*,
    gateways::{geocode::*, source::*, viewport::*},
    repositories::*,
};

#[derive(Debug, Default)]
pub struct MockGeoGateway {
    responses: HashMap<String, MapPoint>,
    lookups: RefCell<usize>,
}

impl MockGeoGateway {
    pub fn with_response(address: &str, pos: MapPoint) -> Self {
        let mut responses = HashMap::new();
        responses.insert(address.to_owned(), pos);
        Self {
            responses,
            ..Default::default()
        }
    }

    pub fn lookups(&self) -> usize {
        *self.lookups.borrow()
    }
}

impl GeoCodingGateway for MockGeoGateway {
    fn resolve_address_lng_lat(&self, address: &str) -> Option<MapPoint> {
        *self.lookups.borrow_mut() += 1;
        self.responses.get(address).copied()
    }
}

#[derive(Debug, Default)]
pub struct MemCacheRepo {
    cache: RefCell<GeocodeCache>,
    saves: RefCell<usize>,
    fail_load: bool,
    fail_save: bool,
}

impl MemCacheRepo {
    pub fn failing_load() -> Self {
        Self {
            fail_load: true,
            ..Default::default()
        }
    }

    pub fn failing_save() -> Self {
        Self {
            fail_save: true,
            ..Default::default()
        }
    }

    pub fn stored(&self) -> GeocodeCache {
        self.cache.borrow().clone()
    }

    pub fn saves(&self) -> usize {
        *self.saves.borrow()
    }
}

impl GeocodeCacheRepo for MemCacheRepo {
    fn load_cache(&self) -> Result<GeocodeCache, Error> {
        if self.fail_load {
            return Err(Error::Other(anyhow!("broken store")));
        }
        Ok(self.cache.borrow().clone())
    }

    fn save_cache(&self, cache: &GeocodeCache) -> Result<(), Error> {
        if self.fail_save {
            return Err(Error::Other(anyhow!("broken store")));
        }
        *self.cache.borrow_mut() = cache.clone();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct VecSource(pub Vec<LocationRecord>);

impl LocationSource for VecSource {
    fn list(&self) -> Result<Vec<LocationRecord>, LocationSourceError> {
        Ok(self.0.clone())
    }
}

/// Viewport double that records every issued command.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    AddMarker(Id, MapPoint),
    CreatePopup(Id, PopupContent),
    MountPopup(Id, MapPoint),
    UnmountPopup(Id),
    SetItemActive(Id, bool),
    FlyTo(MapPoint, f64),
    FitBounds(MapPoint, MapPoint, f64),
}

#[derive(Debug)]
pub struct RecordingViewport {
    pub commands: Vec<Cmd>,
    pub zoom: f64,
}

impl Default for RecordingViewport {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            zoom: 9.0,
        }
    }
}

impl MapViewport for RecordingViewport {
    fn add_marker(&mut self, id: &Id, at: MapPoint) {
        self.commands.push(Cmd::AddMarker(id.clone(), at));
    }
    fn create_popup(&mut self, id: &Id, content: PopupContent) {
        self.commands.push(Cmd::CreatePopup(id.clone(), content));
    }
    fn mount_popup(&mut self, id: &Id, at: MapPoint) {
        self.commands.push(Cmd::MountPopup(id.clone(), at));
    }
    fn unmount_popup(&mut self, id: &Id) {
        self.commands.push(Cmd::UnmountPopup(id.clone()));
    }
    fn set_item_active(&mut self, id: &Id, active: bool) {
        self.commands.push(Cmd::SetItemActive(id.clone(), active));
    }
    fn fly_to(&mut self, center: MapPoint, zoom: f64) {
        self.commands.push(Cmd::FlyTo(center, zoom));
    }
    fn zoom(&self) -> f64 {
        self.zoom
    }
    fn fit_bounds(&mut self, bbox: &MapBbox, padding: f64) {
        let (Some(sw), Some(ne)) = (bbox.southwest(), bbox.northeast()) else {
            panic!("fit_bounds commanded with empty bounds");
        };
        self.commands.push(Cmd::FitBounds(sw, ne, padding));
    }
}
