//! Repositorios de acceso a datos
//!
//! Cada repositorio envuelve el pool y ejecuta consultas parametrizadas
//! con SQLx. Todos los valores van como parámetros bind, nunca
//! interpolados en el SQL.

pub mod abastecimento_repository;
pub mod dia_trabalho_repository;
pub mod manutencao_repository;

pub use abastecimento_repository::AbastecimentoRepository;
pub use dia_trabalho_repository::DiaTrabalhoRepository;
pub use manutencao_repository::ManutencaoRepository;
