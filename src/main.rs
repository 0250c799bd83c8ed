use std::net::SocketAddr;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use diario_motorista::config::database::DatabaseConfig;
use diario_motorista::config::environment::EnvironmentConfig;
use diario_motorista::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 Diário do Motorista - API");
    info!("============================");

    let config = EnvironmentConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    // Inicializar base de datos
    let pool = match db_config.create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let addr: SocketAddr = config.server_addr().parse()?;
    let app = diario_motorista::build_app(AppState::new(pool, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check (sin auth)");
    info!("📅 Dia de trabalho:");
    info!("   GET    /dia-trabalho - Listar días de trabajo");
    info!("   POST   /dia-trabalho - Registrar día de trabajo");
    info!("   PUT    /dia-trabalho/:id - Actualizar día de trabajo");
    info!("   DELETE /dia-trabalho/:id - Eliminar día de trabajo");
    info!("⛽ Abastecimentos:");
    info!("   GET  /abastecimentos - Listar abastecimientos");
    info!("   POST /abastecimentos - Registrar abastecimiento");
    info!("🔧 Manutenções:");
    info!("   GET  /manutencoes - Listar mantenimientos");
    info!("   POST /manutencoes - Registrar mantenimiento (+ controle de óleo)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
