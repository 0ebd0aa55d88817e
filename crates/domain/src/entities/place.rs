use crate::entities::{Entity, RecordMeta};
use serde::{Deserialize, Serialize};

/// A rentable place hosted by a user in a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    pub description: String,
    pub address: String,
    pub city_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub host_id: String,
    pub num_rooms: u32,
    pub num_bathrooms: u32,
    pub price_per_night: f64,
    pub max_guests: u32,
}

impl Place {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        description: String,
        address: String,
        city_id: String,
        latitude: f64,
        longitude: f64,
        host_id: String,
        num_rooms: u32,
        num_bathrooms: u32,
        price_per_night: f64,
        max_guests: u32,
    ) -> Self {
        Self {
            meta: RecordMeta::new(),
            name,
            description,
            address,
            city_id,
            latitude,
            longitude,
            host_id,
            num_rooms,
            num_bathrooms,
            price_per_night,
            max_guests,
        }
    }
}

impl Entity for Place {
    const KIND: &'static str = "Place";

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }
}
