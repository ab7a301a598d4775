use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use zonas_rutas::config::{EnvironmentConfig, StoreBackend};
use zonas_rutas::database::{DocumentStore, MemoryDocumentStore, PgDocumentStore};
use zonas_rutas::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env().context("Configuración inválida")?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🗺️ API de Zonas y Rutas");
    info!("========================");
    info!("🌎 Entorno: {}", config.environment);

    // Inicializar almacén de documentos
    let store: Arc<dyn DocumentStore> = match (config.store_backend, &config.database) {
        (StoreBackend::Postgres, Some(db_config)) => match PgDocumentStore::connect(db_config).await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                error!("❌ Error conectando a la base de datos: {}", e);
                return Err(anyhow::anyhow!("Error de base de datos: {}", e));
            }
        },
        (StoreBackend::Postgres, None) => {
            return Err(anyhow::anyhow!("DATABASE_URL must be set"));
        }
        (StoreBackend::Memory, _) => {
            if config.is_production() {
                warn!("⚠️ Almacén en memoria en producción: los datos se perderán al reiniciar");
            }
            info!("🧪 Usando almacén en memoria (los datos no persisten)");
            Arc::new(MemoryDocumentStore::new())
        }
    };

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("Dirección inválida: {}", config.server_url()))?;

    let app = create_app(AppState::new(store, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("📍 Zonas:");
    info!("   GET    /zonas - Listar zonas");
    info!("   GET    /zona/:id_zona - Obtener zona");
    info!("   POST   /nueva-zona - Crear zona");
    info!("   PUT    /actualizar-zona/:id_zona - Actualizar zona");
    info!("   DELETE /eliminar-zona/:id_zona - Eliminar zona");
    info!("🛣️ Rutas:");
    info!("   GET    /rutas - Listar rutas");
    info!("   GET    /ruta/:id_ruta - Obtener ruta");
    info!("   POST   /nueva-ruta - Crear ruta");
    info!("   PUT    /actualizar-ruta/:id_ruta - Actualizar ruta");
    info!("   DELETE /eliminar-ruta/:id_ruta - Eliminar ruta");
    info!("   GET    /rutas-por-zona/:id_zona - Rutas de una zona");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("No se pudo instalar el manejador de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("No se pudo instalar el manejador de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
