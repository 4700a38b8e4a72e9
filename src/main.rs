use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;

use vehicle_fleet::config::environment::EnvironmentConfig;
use vehicle_fleet::database::load_vehicles;
use vehicle_fleet::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 Vehicle Fleet API - store en memoria");
    info!("================================================");
    info!("🌍 Entorno: {}", config.environment);

    // Cargar vehículos iniciales
    let seed = match &config.seed_path {
        Some(path) => match load_vehicles(path) {
            Ok(vehicles) => Some(vehicles),
            Err(e) => {
                error!("❌ Error cargando vehículos iniciales: {}", e);
                return Err(anyhow::anyhow!("Error de datos iniciales: {}", e));
            }
        },
        None => {
            info!("📭 VEHICLES_SEED_PATH no definido, sin datos iniciales");
            None
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let development = config.is_development();
    let app = create_router(AppState::in_memory(config, seed));

    info!("🌐 Servidor iniciando en http://{}", addr);
    if development {
        info!("🔍 Endpoints disponibles:");
        info!("   GET    /health - Health check");
        info!("   GET    /vehicles - Listar vehículos");
        info!("   POST   /vehicles - Crear vehículo");
        info!("   POST   /vehicles/batch - Crear varios vehículos");
        info!("   GET    /vehicles/color/:color/year/:year - Por color y año");
        info!("   GET    /vehicles/brand/:brand/between/:start_year/:end_year - Por marca y años");
        info!("   GET    /vehicles/average_speed/brand/:brand - Velocidad promedio por marca");
        info!("   GET    /vehicles/average_capacity/brand/:brand - Capacidad promedio por marca");
        info!("   GET    /vehicles/weight?weight_min=&weight_max= - Por rango de peso");
        info!("   GET    /vehicles/dimensions?length=a-b&width=c-d - Por dimensiones");
        info!("   PUT    /vehicles/:id - Actualizar vehículo");
        info!("   DELETE /vehicles/:id - Eliminar vehículo");
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
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
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
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
