pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::location_builder::*;

pub mod location_builder {

    use super::*;
    use crate::location::*;

    #[derive(Debug)]
    pub struct LocationRecordBuild {
        record: LocationRecord,
    }

    impl LocationRecordBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.record.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.record.name = name.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.record.address = address.into();
            self
        }
        pub fn image_url(mut self, image_url: &str) -> Self {
            self.record.image_url = image_url.into();
            self
        }
        pub fn link_url(mut self, link_url: &str) -> Self {
            self.record.link_url = link_url.into();
            self
        }
        pub fn lat(mut self, lat: f64) -> Self {
            self.record.lat = Some(lat);
            self
        }
        pub fn lng(mut self, lng: f64) -> Self {
            self.record.lng = Some(lng);
            self
        }
        pub fn finish(self) -> LocationRecord {
            self.record
        }
    }

    impl Builder for LocationRecord {
        type Build = LocationRecordBuild;
        fn build() -> Self::Build {
            LocationRecordBuild {
                record: LocationRecord::default(),
            }
        }
    }
}
