//! Store de vehículos en memoria
//!
//! Implementación de `VehicleRepository` sobre un `HashMap`. Todas las
//! consultas por criterios son recorridos lineales sin índices secundarios.
//! No tiene sincronización interna: quien lo comparta entre tareas debe
//! envolverlo en un único lock (ver `state::AppState`).

use std::collections::HashMap;

use crate::models::vehicle::{Vehicle, VehicleId};
use crate::repositories::vehicle_repository::{
    RepositoryError, RepositoryResult, VehicleRepository,
};

#[derive(Debug, Default)]
pub struct VehicleMap {
    db: HashMap<VehicleId, Vehicle>,
}

impl VehicleMap {
    /// Crear el store, opcionalmente con datos iniciales
    pub fn new(db: Option<HashMap<VehicleId, Vehicle>>) -> Self {
        Self {
            db: db.unwrap_or_default(),
        }
    }

    pub fn len(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    fn filter_by<F>(&self, predicate: F) -> HashMap<VehicleId, Vehicle>
    where
        F: Fn(&Vehicle) -> bool,
    {
        self.db
            .iter()
            .filter(|(_, vehicle)| predicate(vehicle))
            .map(|(id, vehicle)| (*id, vehicle.clone()))
            .collect()
    }

    fn average_by_brand<F>(&self, brand: &str, value: F) -> RepositoryResult<f64>
    where
        F: Fn(&Vehicle) -> f64,
    {
        let (total, count) = self
            .db
            .values()
            .filter(|vehicle| vehicle.brand == brand)
            .fold((0.0, 0usize), |(total, count), vehicle| {
                (total + value(vehicle), count + 1)
            });

        if count == 0 {
            return Err(RepositoryError::NoVehiclesByBrand);
        }

        Ok(total / count as f64)
    }
}

fn non_empty(
    found: HashMap<VehicleId, Vehicle>,
    miss: RepositoryError,
) -> RepositoryResult<HashMap<VehicleId, Vehicle>> {
    if found.is_empty() {
        Err(miss)
    } else {
        Ok(found)
    }
}

impl VehicleRepository for VehicleMap {
    fn find_all(&self) -> RepositoryResult<HashMap<VehicleId, Vehicle>> {
        Ok(self.db.clone())
    }

    fn create(&mut self, vehicle: Vehicle) -> RepositoryResult<()> {
        if self.db.contains_key(&vehicle.id) {
            return Err(RepositoryError::AlreadyExists(vehicle.id));
        }

        self.db.insert(vehicle.id, vehicle);
        Ok(())
    }

    fn create_multiple(&mut self, vehicles: Vec<Vehicle>) -> RepositoryResult<()> {
        // Sin rollback: lo insertado antes del duplicado se queda
        for vehicle in vehicles {
            self.create(vehicle)?;
        }

        Ok(())
    }

    fn get_by_color_and_year(
        &self,
        color: &str,
        year: i32,
    ) -> RepositoryResult<HashMap<VehicleId, Vehicle>> {
        let found = self.filter_by(|v| v.color == color && v.fabrication_year == year);
        non_empty(found, RepositoryError::NoVehiclesByColorYear)
    }

    fn get_by_brand_between_years(
        &self,
        brand: &str,
        year_start: i32,
        year_end: i32,
    ) -> RepositoryResult<HashMap<VehicleId, Vehicle>> {
        let found = self.filter_by(|v| v.brand == brand && v.built_between(year_start, year_end));
        non_empty(found, RepositoryError::NoVehiclesByBrandYears)
    }

    fn get_speed_avg_by_brand(&self, brand: &str) -> RepositoryResult<f64> {
        self.average_by_brand(brand, |v| v.max_speed)
    }

    fn get_average_capacity_by_brand(&self, brand: &str) -> RepositoryResult<f64> {
        self.average_by_brand(brand, |v| f64::from(v.capacity))
    }

    fn list_by_weight_range(
        &self,
        weight_min: f64,
        weight_max: f64,
    ) -> RepositoryResult<HashMap<VehicleId, Vehicle>> {
        let weight_max = if weight_max == 0.0 { f64::MAX } else { weight_max };

        let found = self.filter_by(|v| v.weight_between(weight_min, weight_max));
        non_empty(found, RepositoryError::NoVehiclesByWeightRange)
    }

    fn list_by_dimensions(
        &self,
        min_length: f64,
        max_length: f64,
        min_width: f64,
        max_width: f64,
    ) -> RepositoryResult<HashMap<VehicleId, Vehicle>> {
        let found = self.filter_by(|v| {
            (min_length..=max_length).contains(&v.length())
                && (min_width..=max_width).contains(&v.width())
        });
        non_empty(found, RepositoryError::NoVehiclesByDimensions)
    }

    fn update(&mut self, vehicle: Vehicle) -> RepositoryResult<()> {
        match self.db.get_mut(&vehicle.id) {
            Some(current) => {
                *current = vehicle;
                Ok(())
            }
            None => Err(RepositoryError::NotFound(vehicle.id)),
        }
    }

    fn delete(&mut self, id: VehicleId) -> RepositoryResult<()> {
        self.db
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }
}
