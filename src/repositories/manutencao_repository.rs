use chrono::NaiveDate;
use sqlx::PgPool;

use crate::dto::ManutencaoRequest;
use crate::models::{ControleOleo, Manutencao};
use crate::utils::errors::AppResult;

pub struct ManutencaoRepository {
    pool: PgPool,
}

impl ManutencaoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Manutencao>> {
        let manutencoes = sqlx::query_as::<_, Manutencao>(
            "SELECT * FROM manutencoes ORDER BY data DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(manutencoes)
    }

    pub async fn create(&self, request: &ManutencaoRequest) -> AppResult<Manutencao> {
        let manutencao = sqlx::query_as::<_, Manutencao>(
            r#"
            INSERT INTO manutencoes
                (data, hora, tipo_manutencao, descricao, custo,
                 quilometragem_km, local_oficina)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(request.data)
        .bind(&request.hora)
        .bind(&request.tipo_manutencao)
        .bind(&request.descricao)
        .bind(request.custo)
        .bind(request.quilometragem_km)
        .bind(&request.local_oficina)
        .fetch_one(&self.pool)
        .await?;

        Ok(manutencao)
    }

    /// Actualiza la fila singleton de controle_oleo con la fecha de la
    /// última troca. La fila singleton es, por convención, la de menor id.
    /// Devuelve `None` si la tabla está vacía (no es un error).
    pub async fn registrar_troca_oleo(
        &self,
        data: Option<NaiveDate>,
    ) -> AppResult<Option<ControleOleo>> {
        let controle = sqlx::query_as::<_, ControleOleo>(
            r#"
            UPDATE controle_oleo
            SET data_ultima_troca = $1, atualizado_em = now()
            WHERE id = (SELECT id FROM controle_oleo ORDER BY id LIMIT 1)
            RETURNING *
            "#,
        )
        .bind(data)
        .fetch_optional(&self.pool)
        .await?;

        Ok(controle)
    }
}
