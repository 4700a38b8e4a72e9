//! Módulo de datos iniciales
//!
//! El store vive solo en memoria; este módulo carga su estado inicial desde
//! un archivo JSON opcional.

pub mod seed;

pub use seed::{load_vehicles, SeedError};
