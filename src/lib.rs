//! Vehicle fleet API
//!
//! Servicio CRUD de vehículos sobre un store en memoria, con consultas por
//! color y año, marca y rango de años, promedios por marca, rango de peso y
//! rango de dimensiones.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use models::vehicle::{Dimensions, Vehicle, VehicleId};
pub use repositories::{RepositoryError, VehicleMap, VehicleRepository};
pub use routes::create_router;
pub use services::{DimensionFilter, ServiceError, VehicleDefault, VehicleService};
pub use state::AppState;
