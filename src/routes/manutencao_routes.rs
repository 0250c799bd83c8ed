use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::ManutencaoController;
use crate::dto::ManutencaoRequest;
use crate::models::Manutencao;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_manutencao_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_manutencoes))
        .route("/", post(create_manutencao))
}

async fn list_manutencoes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Manutencao>>, AppError> {
    let controller = ManutencaoController::new(state.pool.clone());
    let manutencoes = controller.list().await?;
    Ok(Json(manutencoes))
}

async fn create_manutencao(
    State(state): State<AppState>,
    Json(request): Json<ManutencaoRequest>,
) -> Result<(StatusCode, Json<Manutencao>), AppError> {
    let controller = ManutencaoController::new(state.pool.clone());
    let manutencao = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(manutencao)))
}
