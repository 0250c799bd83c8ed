//! Controllers de la API
//!
//! Capa fina entre las rutas y los repositorios: mapea resultados de
//! persistencia a los outcomes de la API (not found, etc.) y contiene
//! la regla de efecto secundario de la troca de óleo.

pub mod abastecimento_controller;
pub mod dia_trabalho_controller;
pub mod manutencao_controller;

pub use abastecimento_controller::AbastecimentoController;
pub use dia_trabalho_controller::DiaTrabalhoController;
pub use manutencao_controller::ManutencaoController;
