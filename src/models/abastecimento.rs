//! Modelo de abastecimiento
//!
//! Una fila por evento de carga de combustible.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Abastecimento {
    pub id: i64,
    pub data: Option<NaiveDate>,
    pub hora: Option<String>,
    pub valor_abastecido: Option<f64>,
    pub litros: Option<f64>,
    pub preco_por_litro: Option<f64>,
    pub observacoes: Option<String>,
}
