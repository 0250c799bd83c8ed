use sqlx::PgPool;

use crate::dto::DiaTrabalhoRequest;
use crate::models::DiaTrabalho;
use crate::repositories::DiaTrabalhoRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct DiaTrabalhoController {
    repository: DiaTrabalhoRepository,
}

impl DiaTrabalhoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DiaTrabalhoRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<DiaTrabalho>> {
        self.repository.list().await
    }

    pub async fn create(&self, request: DiaTrabalhoRequest) -> AppResult<DiaTrabalho> {
        self.repository.create(&request).await
    }

    pub async fn update(
        &self,
        id: i64,
        request: DiaTrabalhoRequest,
    ) -> AppResult<DiaTrabalho> {
        self.repository
            .update(id, &request)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}
