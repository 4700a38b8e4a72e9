//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle tal como lo guarda el store en memoria.
//! No conoce el formato de transporte: la conversión desde/hacia JSON vive en
//! `dto::vehicle_dto`.

use serde::{Deserialize, Serialize};

/// Identidad del vehículo, asignada por quien lo crea (nunca por el store)
pub type VehicleId = i32;

/// Dimensiones físicas del vehículo
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

/// Vehicle principal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    pub fabrication_year: i32,
    pub capacity: i32,
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub weight: f64,
    pub dimensions: Dimensions,
}

impl Vehicle {
    pub fn length(&self) -> f64 {
        self.dimensions.length
    }

    pub fn width(&self) -> f64 {
        self.dimensions.width
    }

    /// Verificar si el vehículo cae dentro de un rango de peso (inclusivo)
    pub fn weight_between(&self, min: f64, max: f64) -> bool {
        self.weight >= min && self.weight <= max
    }

    /// Verificar si el año de fabricación cae dentro de un rango (inclusivo)
    pub fn built_between(&self, year_start: i32, year_end: i32) -> bool {
        self.fabrication_year >= year_start && self.fabrication_year <= year_end
    }
}
