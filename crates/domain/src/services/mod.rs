pub mod entity_service;

pub use entity_service::EntityService;

use crate::entities::{Amenity, City, Country, Place, Review, User};

pub type UserService = EntityService<User>;
pub type CountryService = EntityService<Country>;
pub type CityService = EntityService<City>;
pub type PlaceService = EntityService<Place>;
pub type AmenityService = EntityService<Amenity>;
pub type ReviewService = EntityService<Review>;
