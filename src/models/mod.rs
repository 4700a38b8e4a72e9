//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que maneja el store en memoria.

pub mod vehicle;

pub use vehicle::{Dimensions, Vehicle, VehicleId};
