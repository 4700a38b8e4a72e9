//! Repositorios del sistema
//!
//! Capa de almacenamiento: el contrato `VehicleRepository` y su implementación
//! en memoria.

pub mod vehicle_map;
pub mod vehicle_repository;

pub use vehicle_map::VehicleMap;
pub use vehicle_repository::{RepositoryError, RepositoryResult, VehicleRepository};
