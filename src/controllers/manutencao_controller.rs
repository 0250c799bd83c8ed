use sqlx::PgPool;
use tracing::{error, info};

use crate::dto::ManutencaoRequest;
use crate::models::Manutencao;
use crate::repositories::ManutencaoRepository;
use crate::utils::errors::AppResult;
use crate::utils::texto::es_troca_de_oleo;

pub struct ManutencaoController {
    repository: ManutencaoRepository,
}

impl ManutencaoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ManutencaoRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Manutencao>> {
        self.repository.list().await
    }

    /// Crea el mantenimiento y, si el tipo corresponde a una troca de óleo,
    /// actualiza la fila singleton de controle_oleo con la fecha del request.
    /// El efecto secundario es best-effort: si falla después de que el
    /// insert principal ya se confirmó, la respuesta sigue siendo el
    /// mantenimiento creado. No hay transacción que agrupe las dos
    /// escrituras; ventana de inconsistencia aceptada.
    pub async fn create(&self, request: ManutencaoRequest) -> AppResult<Manutencao> {
        let manutencao = self.repository.create(&request).await?;

        let es_oleo = request
            .tipo_manutencao
            .as_deref()
            .map(es_troca_de_oleo)
            .unwrap_or(false);

        if es_oleo {
            match self.repository.registrar_troca_oleo(request.data).await {
                Ok(Some(controle)) => {
                    info!(
                        "🛢️ Controle de óleo actualizado: última troca {:?}",
                        controle.data_ultima_troca
                    );
                }
                Ok(None) => {
                    // Tabla controle_oleo vacía: no-op, no es un error
                    info!("🛢️ Sin fila de controle_oleo para actualizar");
                }
                Err(e) => {
                    error!("❌ Error actualizando controle_oleo: {}", e);
                }
            }
        }

        Ok(manutencao)
    }
}
