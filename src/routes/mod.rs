pub mod abastecimento_routes;
pub mod dia_trabalho_routes;
pub mod health_routes;
pub mod manutencao_routes;
