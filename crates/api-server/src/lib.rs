pub mod dto;
pub mod error;
pub mod handlers;
pub mod resources;

use application::DirectoryApp;
use axum::{routing::get, Router};
use config::{Config, StoreBackend};
use domain::{Amenity, City, Country, Place, Review, User};
use handlers::{create, health_check, list, remove, show, update};
use resources::Resource;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<DirectoryApp>,
}

/// All resource routes plus `/health`.
pub fn build_router(app: Arc<DirectoryApp>) -> Router {
    Router::new()
        .merge(resource_routes::<User>())
        .merge(resource_routes::<Country>())
        .merge(resource_routes::<City>())
        .merge(resource_routes::<Place>())
        .merge(resource_routes::<Amenity>())
        .merge(resource_routes::<Review>())
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { app })
}

fn resource_routes<R: Resource>() -> Router<AppState> {
    let collection = format!("/{}", R::COLLECTION);

    Router::new()
        .route(&collection, get(list::<R>).post(create::<R>))
        .route(&format!("{collection}/"), get(list::<R>).post(create::<R>))
        .route(
            &format!("{collection}/:id"),
            get(show::<R>).put(update::<R>).delete(remove::<R>),
        )
}

/// Open the configured store and serve the API until Ctrl+C.
pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let app = match config.store_backend {
        StoreBackend::File => {
            info!("💾 Using data file: {}", config.data_file);
            DirectoryApp::new(&config.data_file)?
        }
        StoreBackend::Memory => DirectoryApp::in_memory(),
    };
    let router = build_router(Arc::new(app));

    let bind_address = config.api_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("🌐 API Server listening on http://{}", bind_address);
    for collection in [
        User::COLLECTION,
        Country::COLLECTION,
        City::COLLECTION,
        Place::COLLECTION,
        Amenity::COLLECTION,
        Review::COLLECTION,
    ] {
        info!("   GET|POST /{0}/   GET|PUT|DELETE /{0}/:id", collection);
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
