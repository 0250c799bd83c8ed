use sqlx::PgPool;

use crate::dto::AbastecimentoRequest;
use crate::models::Abastecimento;
use crate::utils::errors::AppResult;

pub struct AbastecimentoRepository {
    pool: PgPool,
}

impl AbastecimentoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Abastecimento>> {
        let abastecimentos = sqlx::query_as::<_, Abastecimento>(
            "SELECT * FROM abastecimentos ORDER BY data DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(abastecimentos)
    }

    pub async fn create(&self, request: &AbastecimentoRequest) -> AppResult<Abastecimento> {
        let abastecimento = sqlx::query_as::<_, Abastecimento>(
            r#"
            INSERT INTO abastecimentos
                (data, hora, valor_abastecido, litros, preco_por_litro, observacoes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(request.data)
        .bind(&request.hora)
        .bind(request.valor_abastecido)
        .bind(request.litros)
        .bind(request.preco_por_litro)
        .bind(&request.observacoes)
        .fetch_one(&self.pool)
        .await?;

        Ok(abastecimento)
    }
}
