pub mod amenity;
pub mod city;
pub mod country;
pub mod place;
pub mod record;
pub mod review;
pub mod user;

pub use amenity::*;
pub use city::*;
pub use country::*;
pub use place::*;
pub use record::*;
pub use review::*;
pub use user::*;
