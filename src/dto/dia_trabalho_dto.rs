use chrono::NaiveDate;
use serde::Deserialize;

/// Cuerpo de POST /dia-trabalho y PUT /dia-trabalho/:id.
/// El PUT sobreescribe la fila completa, no hay patch parcial.
#[derive(Debug, Deserialize)]
pub struct DiaTrabalhoRequest {
    pub data: Option<NaiveDate>,
    pub turno: Option<String>,
    pub km_rodado: Option<f64>,
    pub ganho_bruto: Option<f64>,
    pub combustivel_informado: Option<f64>,
    pub hora_inicio: Option<String>,
    pub hora_fim: Option<String>,
    pub observacoes: Option<String>,
}
