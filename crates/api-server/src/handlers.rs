use crate::error::ApiError;
use crate::resources::Resource;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

/// `GET /{kind}/`
pub async fn list<R: Resource>(State(state): State<AppState>) -> Result<Json<Vec<R>>, ApiError> {
    let records = R::service(&state.app).get_all().await?;
    Ok(Json(records))
}

/// `POST /{kind}/`
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    Json(request): Json<R::Request>,
) -> Result<(StatusCode, Json<R>), ApiError> {
    let mut record = R::create(request);
    R::service(&state.app).save(&mut record).await?;

    info!("✅ Created {} {}", R::KIND, record.id());
    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /{kind}/{id}`
pub async fn show<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<R>, ApiError> {
    let record = R::service(&state.app).require(&id).await?;
    Ok(Json(record))
}

/// `PUT /{kind}/{id}`: the id in the path wins over anything in the body.
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<R::Request>,
) -> Result<Json<R>, ApiError> {
    let service = R::service(&state.app);
    let mut record = service.require(&id).await?;
    record.apply(request);
    service.save(&mut record).await?;

    info!("✏️  Updated {} {}", R::KIND, id);
    Ok(Json(record))
}

/// `DELETE /{kind}/{id}`
pub async fn remove<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let service = R::service(&state.app);
    let record = service.require(&id).await?;
    service.delete(&record).await?;

    info!("🗑️  Deleted {} {}", R::KIND, id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
