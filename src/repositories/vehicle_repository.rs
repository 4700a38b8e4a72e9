//! Contrato del repositorio de vehículos
//!
//! Define las operaciones que cualquier store de vehículos debe ofrecer y el
//! vocabulario de errores a nivel de almacenamiento. El store es la única
//! fuente de las señales "no encontrado" y "duplicado".

use std::collections::HashMap;

use thiserror::Error;

use crate::models::vehicle::{Vehicle, VehicleId};

/// Errores a nivel de almacenamiento
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    #[error("Vehicle ID already present: {0}")]
    AlreadyExists(VehicleId),

    #[error("Vehicle with the provided ID not found: {0}")]
    NotFound(VehicleId),

    #[error("No vehicles found with the given color and year")]
    NoVehiclesByColorYear,

    #[error("No vehicles found with the given brand and years")]
    NoVehiclesByBrandYears,

    #[error("No vehicles found with the given brand")]
    NoVehiclesByBrand,

    #[error("No vehicles found with the given weight range")]
    NoVehiclesByWeightRange,

    #[error("No vehicles found with the given dimensions")]
    NoVehiclesByDimensions,
}

impl RepositoryError {
    /// Una consulta por criterios no devolvió ningún registro
    pub fn is_criteria_miss(&self) -> bool {
        matches!(
            self,
            RepositoryError::NoVehiclesByColorYear
                | RepositoryError::NoVehiclesByBrandYears
                | RepositoryError::NoVehiclesByBrand
                | RepositoryError::NoVehiclesByWeightRange
                | RepositoryError::NoVehiclesByDimensions
        )
    }
}

/// Resultado tipado para operaciones del repositorio
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repositorio de vehículos
///
/// Todas las operaciones son síncronas y recorren el estado actual completo.
/// Las consultas por criterios nunca devuelven un resultado vacío: la ausencia
/// de coincidencias siempre se reporta como error.
pub trait VehicleRepository {
    /// Copia de todos los vehículos (nunca la colección interna)
    fn find_all(&self) -> RepositoryResult<HashMap<VehicleId, Vehicle>>;

    fn create(&mut self, vehicle: Vehicle) -> RepositoryResult<()>;

    /// Inserta en orden; se detiene en el primer duplicado sin deshacer
    /// los registros ya insertados.
    fn create_multiple(&mut self, vehicles: Vec<Vehicle>) -> RepositoryResult<()>;

    fn get_by_color_and_year(
        &self,
        color: &str,
        year: i32,
    ) -> RepositoryResult<HashMap<VehicleId, Vehicle>>;

    fn get_by_brand_between_years(
        &self,
        brand: &str,
        year_start: i32,
        year_end: i32,
    ) -> RepositoryResult<HashMap<VehicleId, Vehicle>>;

    fn get_speed_avg_by_brand(&self, brand: &str) -> RepositoryResult<f64>;

    fn get_average_capacity_by_brand(&self, brand: &str) -> RepositoryResult<f64>;

    /// `weight_max == 0.0` se interpreta como sin límite superior
    fn list_by_weight_range(
        &self,
        weight_min: f64,
        weight_max: f64,
    ) -> RepositoryResult<HashMap<VehicleId, Vehicle>>;

    fn list_by_dimensions(
        &self,
        min_length: f64,
        max_length: f64,
        min_width: f64,
        max_width: f64,
    ) -> RepositoryResult<HashMap<VehicleId, Vehicle>>;

    fn update(&mut self, vehicle: Vehicle) -> RepositoryResult<()>;

    fn delete(&mut self, id: VehicleId) -> RepositoryResult<()>;
}
