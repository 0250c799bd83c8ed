pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{middleware::from_fn_with_state, Router};

use middleware::auth::require_api_token;
use middleware::cors::cors_middleware;
use state::AppState;

/// Arma el router completo de la aplicación. El health check queda fuera
/// del middleware de auth; todo lo demás exige el token compartido.
pub fn build_app(state: AppState) -> Router {
    let protected = Router::new()
        .nest("/dia-trabalho", routes::dia_trabalho_routes::create_dia_trabalho_router())
        .nest("/abastecimentos", routes::abastecimento_routes::create_abastecimento_router())
        .nest("/manutencoes", routes::manutencao_routes::create_manutencao_router())
        .layer(from_fn_with_state(state.clone(), require_api_token));

    Router::new()
        .merge(routes::health_routes::create_health_router())
        .merge(protected)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state)
}
