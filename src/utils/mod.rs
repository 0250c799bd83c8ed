//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores y
//! normalización de texto.

pub mod errors;
pub mod texto;
