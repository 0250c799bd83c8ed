use chrono::NaiveDate;
use serde::Deserialize;

/// Cuerpo de POST /abastecimentos
#[derive(Debug, Deserialize)]
pub struct AbastecimentoRequest {
    pub data: Option<NaiveDate>,
    pub hora: Option<String>,
    pub valor_abastecido: Option<f64>,
    pub litros: Option<f64>,
    pub preco_por_litro: Option<f64>,
    pub observacoes: Option<String>,
}
