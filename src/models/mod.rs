//! Modelos de datos
//!
//! Structs `sqlx::FromRow` que mapean las filas de PostgreSQL y se
//! serializan directamente en las respuestas JSON.

pub mod abastecimento;
pub mod dia_trabalho;
pub mod manutencao;

pub use abastecimento::Abastecimento;
pub use dia_trabalho::DiaTrabalho;
pub use manutencao::{ControleOleo, Manutencao};
