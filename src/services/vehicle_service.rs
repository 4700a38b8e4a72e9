//! Contrato del servicio de vehículos
//!
//! Vocabulario de errores a nivel de dominio y el filtro de dimensiones que
//! acepta el servicio. Las capas superiores dependen solo de estos tipos,
//! nunca de `RepositoryError` directamente.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::vehicle::{Vehicle, VehicleId};
use crate::repositories::vehicle_repository::RepositoryError;

/// Errores a nivel de dominio; cada variante conserva el error del store como causa
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("Vehicle already exists: {0}")]
    AlreadyExists(#[source] RepositoryError),

    #[error("Vehicle with the provided ID not found: {0}")]
    NotFound(#[source] RepositoryError),

    #[error("No vehicles found with the given criteria: {0}")]
    NotFoundByCriteria(#[source] RepositoryError),

    #[error("No vehicles found with the given brand: {0}")]
    NoMatchForBrand(#[source] RepositoryError),
}

impl ServiceError {
    /// Error del store que originó este error
    pub fn repository_error(&self) -> &RepositoryError {
        match self {
            ServiceError::AlreadyExists(e)
            | ServiceError::NotFound(e)
            | ServiceError::NotFoundByCriteria(e)
            | ServiceError::NoMatchForBrand(e) => e,
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AlreadyExists(_) => ServiceError::AlreadyExists(err),
            RepositoryError::NoVehiclesByBrand => ServiceError::NoMatchForBrand(err),
            _ if err.is_criteria_miss() => ServiceError::NotFoundByCriteria(err),
            _ => ServiceError::NotFound(err),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

pub const MIN_LENGTH_KEY: &str = "min_length";
pub const MAX_LENGTH_KEY: &str = "max_length";
pub const MIN_WIDTH_KEY: &str = "min_width";
pub const MAX_WIDTH_KEY: &str = "max_width";

/// Filtro de dimensiones disperso: cualquier límite ausente toma su valor por defecto
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DimensionFilter {
    pub min_length: Option<f64>,
    pub max_length: Option<f64>,
    pub min_width: Option<f64>,
    pub max_width: Option<f64>,
}

/// Límites de dimensiones ya resueltos, listos para el store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionBounds {
    pub min_length: f64,
    pub max_length: f64,
    pub min_width: f64,
    pub max_width: f64,
}

impl DimensionFilter {
    /// Construir el filtro desde un mapa `clave -> valor`; las claves desconocidas se ignoran
    pub fn from_map(values: &HashMap<String, f64>) -> Self {
        Self {
            min_length: values.get(MIN_LENGTH_KEY).copied(),
            max_length: values.get(MAX_LENGTH_KEY).copied(),
            min_width: values.get(MIN_WIDTH_KEY).copied(),
            max_width: values.get(MAX_WIDTH_KEY).copied(),
        }
    }

    /// Mínimos ausentes -> 0, máximos ausentes -> `f64::MAX`
    pub fn resolve(&self) -> DimensionBounds {
        DimensionBounds {
            min_length: self.min_length.unwrap_or(0.0),
            max_length: self.max_length.unwrap_or(f64::MAX),
            min_width: self.min_width.unwrap_or(0.0),
            max_width: self.max_width.unwrap_or(f64::MAX),
        }
    }
}

/// Servicio de vehículos
///
/// Capa fina de normalización y traducción de errores sobre el repositorio.
pub trait VehicleService {
    fn find_all(&self) -> ServiceResult<HashMap<VehicleId, Vehicle>>;

    fn create(&mut self, vehicle: Vehicle) -> ServiceResult<()>;

    fn create_multiple(&mut self, vehicles: Vec<Vehicle>) -> ServiceResult<()>;

    fn get_by_color_and_year(
        &self,
        color: &str,
        year: i32,
    ) -> ServiceResult<HashMap<VehicleId, Vehicle>>;

    fn get_by_brand_between_years(
        &self,
        brand: &str,
        year_start: i32,
        year_end: i32,
    ) -> ServiceResult<HashMap<VehicleId, Vehicle>>;

    fn get_speed_avg_by_brand(&self, brand: &str) -> ServiceResult<f64>;

    fn get_average_capacity_by_brand(&self, brand: &str) -> ServiceResult<f64>;

    fn list_by_weight_range(
        &self,
        weight_min: f64,
        weight_max: f64,
    ) -> ServiceResult<HashMap<VehicleId, Vehicle>>;

    fn list_by_dimensions(
        &self,
        filter: &DimensionFilter,
    ) -> ServiceResult<HashMap<VehicleId, Vehicle>>;

    fn update(&mut self, vehicle: Vehicle) -> ServiceResult<()>;

    fn delete(&mut self, id: VehicleId) -> ServiceResult<()>;
}
