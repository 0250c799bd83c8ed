use chrono::NaiveDate;
use serde::Deserialize;

/// Cuerpo de POST /manutencoes
#[derive(Debug, Deserialize)]
pub struct ManutencaoRequest {
    pub data: Option<NaiveDate>,
    pub hora: Option<String>,
    pub tipo_manutencao: Option<String>,
    pub descricao: Option<String>,
    pub custo: Option<f64>,
    pub quilometragem_km: Option<f64>,
    pub local_oficina: Option<String>,
}
