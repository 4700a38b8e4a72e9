//! Servicios del sistema
//!
//! Capa de dominio sobre los repositorios: normalización de entradas y
//! traducción de errores.

pub mod vehicle_default;
pub mod vehicle_service;

pub use vehicle_default::VehicleDefault;
pub use vehicle_service::{DimensionFilter, ServiceError, ServiceResult, VehicleService};
