use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;

use crate::controllers::DiaTrabalhoController;
use crate::dto::DiaTrabalhoRequest;
use crate::models::DiaTrabalho;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dia_trabalho_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_dias_trabalho))
        .route("/", post(create_dia_trabalho))
        .route("/:id", put(update_dia_trabalho))
        .route("/:id", delete(delete_dia_trabalho))
}

async fn list_dias_trabalho(
    State(state): State<AppState>,
) -> Result<Json<Vec<DiaTrabalho>>, AppError> {
    let controller = DiaTrabalhoController::new(state.pool.clone());
    let dias = controller.list().await?;
    Ok(Json(dias))
}

async fn create_dia_trabalho(
    State(state): State<AppState>,
    Json(request): Json<DiaTrabalhoRequest>,
) -> Result<(StatusCode, Json<DiaTrabalho>), AppError> {
    let controller = DiaTrabalhoController::new(state.pool.clone());
    let dia = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(dia)))
}

async fn update_dia_trabalho(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<DiaTrabalhoRequest>,
) -> Result<Json<DiaTrabalho>, AppError> {
    let controller = DiaTrabalhoController::new(state.pool.clone());
    let dia = controller.update(id, request).await?;
    Ok(Json(dia))
}

async fn delete_dia_trabalho(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = DiaTrabalhoController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({ "ok": true })))
}
