use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::{Dimensions, Vehicle, VehicleId};

// Vehículo tal como viaja en el JSON (nombres de campo del API público)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct VehicleJson {
    pub id: VehicleId,
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    #[serde(rename = "year")]
    pub fabrication_year: i32,
    #[serde(rename = "passengers")]
    pub capacity: i32,
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    #[validate(range(min = 0.0))]
    pub weight: f64,
    #[validate(range(min = 0.0))]
    pub height: f64,
    #[validate(range(min = 0.0))]
    pub length: f64,
    #[validate(range(min = 0.0))]
    pub width: f64,
}

// Request para crear varios vehículos de una vez
#[derive(Debug, Deserialize)]
pub struct VehicleBatchRequest {
    pub vehicles: Vec<VehicleJson>,
}

// Query string de /vehicles/weight
#[derive(Debug, Default, Deserialize)]
pub struct WeightRangeQuery {
    pub weight_min: Option<String>,
    pub weight_max: Option<String>,
}

// Query string de /vehicles/dimensions, cada rango con formato "low-high"
#[derive(Debug, Default, Deserialize)]
pub struct DimensionsQuery {
    pub length: Option<String>,
    pub width: Option<String>,
}

// Response de promedios por marca
#[derive(Debug, Serialize)]
pub struct BrandAverageResponse {
    pub brand: String,
    pub average: f64,
}

// Colección de vehículos indexada por id, ordenada para respuestas estables
pub type VehicleCollection = BTreeMap<VehicleId, VehicleJson>;

pub fn to_collection(vehicles: HashMap<VehicleId, Vehicle>) -> VehicleCollection {
    vehicles
        .into_iter()
        .map(|(id, vehicle)| (id, VehicleJson::from(vehicle)))
        .collect()
}

impl From<VehicleJson> for Vehicle {
    fn from(body: VehicleJson) -> Self {
        Self {
            id: body.id,
            brand: body.brand,
            model: body.model,
            registration: body.registration,
            color: body.color,
            fabrication_year: body.fabrication_year,
            capacity: body.capacity,
            max_speed: body.max_speed,
            fuel_type: body.fuel_type,
            transmission: body.transmission,
            weight: body.weight,
            dimensions: Dimensions {
                height: body.height,
                length: body.length,
                width: body.width,
            },
        }
    }
}

impl From<Vehicle> for VehicleJson {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            brand: vehicle.brand,
            model: vehicle.model,
            registration: vehicle.registration,
            color: vehicle.color,
            fabrication_year: vehicle.fabrication_year,
            capacity: vehicle.capacity,
            max_speed: vehicle.max_speed,
            fuel_type: vehicle.fuel_type,
            transmission: vehicle.transmission,
            weight: vehicle.weight,
            height: vehicle.dimensions.height,
            length: vehicle.dimensions.length,
            width: vehicle.dimensions.width,
        }
    }
}
