use sqlx::PgPool;

use crate::dto::DiaTrabalhoRequest;
use crate::models::DiaTrabalho;
use crate::utils::errors::AppResult;

pub struct DiaTrabalhoRepository {
    pool: PgPool,
}

impl DiaTrabalhoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<DiaTrabalho>> {
        let dias = sqlx::query_as::<_, DiaTrabalho>(
            "SELECT * FROM dia_trabalho ORDER BY data DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(dias)
    }

    pub async fn create(&self, request: &DiaTrabalhoRequest) -> AppResult<DiaTrabalho> {
        let dia = sqlx::query_as::<_, DiaTrabalho>(
            r#"
            INSERT INTO dia_trabalho
                (data, turno, km_rodado, ganho_bruto, combustivel_informado,
                 hora_inicio, hora_fim, observacoes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(request.data)
        .bind(&request.turno)
        .bind(request.km_rodado)
        .bind(request.ganho_bruto)
        .bind(request.combustivel_informado)
        .bind(&request.hora_inicio)
        .bind(&request.hora_fim)
        .bind(&request.observacoes)
        .fetch_one(&self.pool)
        .await?;

        Ok(dia)
    }

    /// Sobreescribe la fila completa. Devuelve `None` si el id no existe.
    pub async fn update(
        &self,
        id: i64,
        request: &DiaTrabalhoRequest,
    ) -> AppResult<Option<DiaTrabalho>> {
        let dia = sqlx::query_as::<_, DiaTrabalho>(
            r#"
            UPDATE dia_trabalho
            SET data = $1, turno = $2, km_rodado = $3, ganho_bruto = $4,
                combustivel_informado = $5, hora_inicio = $6, hora_fim = $7,
                observacoes = $8
            WHERE id = $9
            RETURNING *
            "#,
        )
        .bind(request.data)
        .bind(&request.turno)
        .bind(request.km_rodado)
        .bind(request.ganho_bruto)
        .bind(request.combustivel_informado)
        .bind(&request.hora_inicio)
        .bind(&request.hora_fim)
        .bind(&request.observacoes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(dia)
    }

    /// Devuelve `true` si se eliminó una fila, `false` si el id no existe.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM dia_trabalho WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
