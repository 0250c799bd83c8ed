use sqlx::PgPool;

use crate::dto::AbastecimentoRequest;
use crate::models::Abastecimento;
use crate::repositories::AbastecimentoRepository;
use crate::utils::errors::AppResult;

pub struct AbastecimentoController {
    repository: AbastecimentoRepository,
}

impl AbastecimentoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AbastecimentoRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Abastecimento>> {
        self.repository.list().await
    }

    pub async fn create(&self, request: AbastecimentoRequest) -> AppResult<Abastecimento> {
        self.repository.create(&request).await
    }
}
