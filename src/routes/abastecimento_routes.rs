use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::AbastecimentoController;
use crate::dto::AbastecimentoRequest;
use crate::models::Abastecimento;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_abastecimento_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_abastecimentos))
        .route("/", post(create_abastecimento))
}

async fn list_abastecimentos(
    State(state): State<AppState>,
) -> Result<Json<Vec<Abastecimento>>, AppError> {
    let controller = AbastecimentoController::new(state.pool.clone());
    let abastecimentos = controller.list().await?;
    Ok(Json(abastecimentos))
}

async fn create_abastecimento(
    State(state): State<AppState>,
    Json(request): Json<AbastecimentoRequest>,
) -> Result<(StatusCode, Json<Abastecimento>), AppError> {
    let controller = AbastecimentoController::new(state.pool.clone());
    let abastecimento = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(abastecimento)))
}
