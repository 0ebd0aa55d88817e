//! Request bodies accepted by `POST` and `PUT`. Unknown keys (including a
//! client-supplied `id`) are ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryRequest {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityRequest {
    pub name: String,
    pub country_code: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceRequest {
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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmenityRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub user_id: String,
    pub place_id: String,
    pub rating: i32,
    pub comment: String,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
