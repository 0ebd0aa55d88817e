use domain::*;
use infrastructure::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Directory application - one store shared by a service per entity kind
pub struct DirectoryApp {
    pub user_service: UserService,
    pub country_service: CountryService,
    pub city_service: CityService,
    pub place_service: PlaceService,
    pub amenity_service: AmenityService,
    pub review_service: ReviewService,
}

impl DirectoryApp {
    /// Open the application on a JSON data file, creating it if needed.
    pub fn new(data_file: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let store = JsonFileStore::new(data_file)?;
        Ok(Self::with_store(Arc::new(store)))
    }

    /// Application backed by a store that is never written to disk.
    pub fn in_memory() -> Self {
        info!("using in-memory store, records will not be persisted");
        Self::with_store(Arc::new(InMemoryStore::new()))
    }

    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            user_service: UserService::new(store.clone()),
            country_service: CountryService::new(store.clone()),
            city_service: CityService::new(store.clone()),
            place_service: PlaceService::new(store.clone()),
            amenity_service: AmenityService::new(store.clone()),
            review_service: ReviewService::new(store),
        }
    }
}
