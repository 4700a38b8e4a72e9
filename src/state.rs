//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El servicio de vehículos (y con él el store)
//! vive detrás de un único `RwLock`: es la frontera de exclusión mutua que
//! protege al store, que no tiene sincronización propia.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::config::environment::EnvironmentConfig;
use crate::models::vehicle::{Vehicle, VehicleId};
use crate::repositories::vehicle_map::VehicleMap;
use crate::services::vehicle_default::VehicleDefault;
use crate::services::vehicle_service::VehicleService;

pub type DynVehicleService = Box<dyn VehicleService + Send + Sync>;
pub type SharedVehicleService = Arc<RwLock<DynVehicleService>>;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub vehicles: SharedVehicleService,
}

impl AppState {
    pub fn new<S>(config: EnvironmentConfig, service: S) -> Self
    where
        S: VehicleService + Send + Sync + 'static,
    {
        let service: DynVehicleService = Box::new(service);
        Self {
            config,
            vehicles: Arc::new(RwLock::new(service)),
        }
    }

    /// Estado con el store en memoria, opcionalmente con datos iniciales
    pub fn in_memory(
        config: EnvironmentConfig,
        seed: Option<HashMap<VehicleId, Vehicle>>,
    ) -> Self {
        let store = VehicleMap::new(seed);
        if store.is_empty() {
            info!("📭 Store de vehículos vacío");
        } else {
            info!("📦 Store de vehículos con {} registros iniciales", store.len());
        }
        Self::new(config, VehicleDefault::new(store))
    }
}
