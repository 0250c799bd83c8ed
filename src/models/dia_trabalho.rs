//! Modelo de día de trabajo
//!
//! Una fila por sesión de trabajo del conductor. Todos los campos salvo el
//! id son opcionales: la API no valida el cuerpo, es la base la que rechaza
//! lo que no puede almacenar.

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct DiaTrabalho {
    pub id: i64,
    pub data: Option<NaiveDate>,
    pub turno: Option<String>,
    pub km_rodado: Option<f64>,
    pub ganho_bruto: Option<f64>,
    pub combustivel_informado: Option<f64>,
    pub hora_inicio: Option<String>,
    pub hora_fim: Option<String>,
    pub observacoes: Option<String>,
}
