use crate::dto::{
    AmenityRequest, CityRequest, CountryRequest, PlaceRequest, ReviewRequest, UserRequest,
};
use application::DirectoryApp;
use domain::{Amenity, City, Country, Entity, EntityService, Place, Review, User};
use serde::de::DeserializeOwned;

/// An entity kind exposed as a REST collection.
pub trait Resource: Entity {
    /// Path segment of the collection, e.g. `users`.
    const COLLECTION: &'static str;

    /// Body accepted when creating or replacing a record.
    type Request: DeserializeOwned + Send + 'static;

    fn service(app: &DirectoryApp) -> &EntityService<Self>;

    fn create(request: Self::Request) -> Self;

    /// Overwrite every kind-specific field; identity and `created_at` stay.
    fn apply(&mut self, request: Self::Request);
}

impl Resource for User {
    const COLLECTION: &'static str = "users";
    type Request = UserRequest;

    fn service(app: &DirectoryApp) -> &EntityService<Self> {
        &app.user_service
    }

    fn create(request: UserRequest) -> Self {
        User::new(
            request.email,
            request.first_name,
            request.last_name,
            request.password,
        )
    }

    fn apply(&mut self, request: UserRequest) {
        self.email = request.email;
        self.first_name = request.first_name;
        self.last_name = request.last_name;
        self.password = request.password;
    }
}

impl Resource for Country {
    const COLLECTION: &'static str = "countries";
    type Request = CountryRequest;

    fn service(app: &DirectoryApp) -> &EntityService<Self> {
        &app.country_service
    }

    fn create(request: CountryRequest) -> Self {
        Country::new(request.name, request.code)
    }

    fn apply(&mut self, request: CountryRequest) {
        self.name = request.name;
        self.code = request.code;
    }
}

impl Resource for City {
    const COLLECTION: &'static str = "cities";
    type Request = CityRequest;

    fn service(app: &DirectoryApp) -> &EntityService<Self> {
        &app.city_service
    }

    fn create(request: CityRequest) -> Self {
        City::new(request.name, request.country_code, request.description)
    }

    fn apply(&mut self, request: CityRequest) {
        self.name = request.name;
        self.country_code = request.country_code;
        self.description = request.description;
    }
}

impl Resource for Place {
    const COLLECTION: &'static str = "places";
    type Request = PlaceRequest;

    fn service(app: &DirectoryApp) -> &EntityService<Self> {
        &app.place_service
    }

    fn create(request: PlaceRequest) -> Self {
        Place::new(
            request.name,
            request.description,
            request.address,
            request.city_id,
            request.latitude,
            request.longitude,
            request.host_id,
            request.num_rooms,
            request.num_bathrooms,
            request.price_per_night,
            request.max_guests,
        )
    }

    fn apply(&mut self, request: PlaceRequest) {
        self.name = request.name;
        self.description = request.description;
        self.address = request.address;
        self.city_id = request.city_id;
        self.latitude = request.latitude;
        self.longitude = request.longitude;
        self.host_id = request.host_id;
        self.num_rooms = request.num_rooms;
        self.num_bathrooms = request.num_bathrooms;
        self.price_per_night = request.price_per_night;
        self.max_guests = request.max_guests;
    }
}

impl Resource for Amenity {
    const COLLECTION: &'static str = "amenities";
    type Request = AmenityRequest;

    fn service(app: &DirectoryApp) -> &EntityService<Self> {
        &app.amenity_service
    }

    fn create(request: AmenityRequest) -> Self {
        Amenity::new(request.name)
    }

    fn apply(&mut self, request: AmenityRequest) {
        self.name = request.name;
    }
}

impl Resource for Review {
    const COLLECTION: &'static str = "reviews";
    type Request = ReviewRequest;

    fn service(app: &DirectoryApp) -> &EntityService<Self> {
        &app.review_service
    }

    fn create(request: ReviewRequest) -> Self {
        Review::new(
            request.user_id,
            request.place_id,
            request.rating,
            request.comment,
        )
    }

    fn apply(&mut self, request: ReviewRequest) {
        self.user_id = request.user_id;
        self.place_id = request.place_id;
        self.rating = request.rating;
        self.comment = request.comment;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_keeps_identity() {
        let mut city = City::create(CityRequest {
            name: "Nice".into(),
            country_code: "FR".into(),
            description: Some("Seaside".into()),
        });
        let id = city.id().to_string();
        let created_at = city.created_at();

        city.apply(CityRequest {
            name: "Nizza".into(),
            country_code: "IT".into(),
            description: None,
        });

        assert_eq!(city.id(), id);
        assert_eq!(city.created_at(), created_at);
        assert_eq!(city.name, "Nizza");
        assert_eq!(city.description, None);
    }
}
