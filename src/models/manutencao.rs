//! Modelos de mantenimiento
//!
//! `Manutencao` es una fila por evento de servicio del vehículo.
//! `ControleOleo` es la fila singleton que registra la última troca de óleo;
//! se identifica por convención como la fila de menor id y solo se actualiza
//! como efecto secundario de crear un mantenimiento de tipo óleo.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Manutencao {
    pub id: i64,
    pub data: Option<NaiveDate>,
    pub hora: Option<String>,
    pub tipo_manutencao: Option<String>,
    pub descricao: Option<String>,
    pub custo: Option<f64>,
    pub quilometragem_km: Option<f64>,
    pub local_oficina: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ControleOleo {
    pub id: i64,
    pub data_ultima_troca: Option<NaiveDate>,
    pub atualizado_em: Option<DateTime<Utc>>,
}
