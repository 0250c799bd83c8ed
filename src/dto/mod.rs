//! DTOs de la API
//!
//! Cuerpos de request deserializados con serde. No hay validación de
//! rangos ni de formato más allá de los tipos: el diseño original confía
//! en el caller y deja que la base rechace lo inválido.

pub mod abastecimento_dto;
pub mod dia_trabalho_dto;
pub mod manutencao_dto;

pub use abastecimento_dto::AbastecimentoRequest;
pub use dia_trabalho_dto::DiaTrabalhoRequest;
pub use manutencao_dto::ManutencaoRequest;
