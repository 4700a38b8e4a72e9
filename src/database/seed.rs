//! Carga de vehículos iniciales
//!
//! Lee un arreglo JSON de vehículos (mismo formato que el body de
//! `POST /vehicles`) y lo convierte en el mapa inicial del store.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::dto::vehicle_dto::VehicleJson;
use crate::models::vehicle::{Vehicle, VehicleId};

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Could not read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate vehicle id in seed file: {0}")]
    DuplicateId(VehicleId),
}

/// Cargar el archivo de vehículos iniciales
pub fn load_vehicles(path: &Path) -> Result<HashMap<VehicleId, Vehicle>, SeedError> {
    let content = fs::read_to_string(path)?;
    let records = parse_vehicles(&content)?;

    info!(
        "📂 {} vehículos cargados desde {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

fn parse_vehicles(content: &str) -> Result<HashMap<VehicleId, Vehicle>, SeedError> {
    let records: Vec<VehicleJson> = serde_json::from_str(content)?;

    let mut vehicles = HashMap::with_capacity(records.len());
    for record in records {
        let id = record.id;
        if vehicles.insert(id, Vehicle::from(record)).is_some() {
            return Err(SeedError::DuplicateId(id));
        }
    }

    Ok(vehicles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SEED: &str = r#"[
        {"id": 1, "brand": "Chevrolet", "model": "Camaro", "registration": "DA-56",
         "color": "red", "year": 2019, "passengers": 4, "max_speed": 250.0,
         "fuel_type": "gasoline", "transmission": "automatic", "weight": 1600.0,
         "height": 1.3, "length": 4.8, "width": 1.9},
        {"id": 2, "brand": "Fiat", "model": "Uno", "registration": "FI-01",
         "color": "white", "year": 1995, "passengers": 5, "max_speed": 150.0,
         "fuel_type": "gasoline", "transmission": "manual", "weight": 800.0,
         "height": 1.4, "length": 3.6, "width": 1.5}
    ]"#;

    #[test]
    fn test_load_vehicles_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SEED.as_bytes()).unwrap();

        let vehicles = load_vehicles(file.path()).unwrap();
        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[&1].brand, "Chevrolet");
        assert_eq!(vehicles[&1].fabrication_year, 2019);
        assert_eq!(vehicles[&2].capacity, 5);
        assert_eq!(vehicles[&2].dimensions.length, 3.6);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let duplicated = SEED.replace("\"id\": 2", "\"id\": 1");
        assert!(matches!(
            parse_vehicles(&duplicated),
            Err(SeedError::DuplicateId(1))
        ));
    }

    #[test]
    fn test_missing_file_and_bad_json() {
        assert!(matches!(
            load_vehicles(Path::new("/nonexistent/vehicles.json")),
            Err(SeedError::Io(_))
        ));
        assert!(matches!(parse_vehicles("{not json"), Err(SeedError::Json(_))));
    }
}
