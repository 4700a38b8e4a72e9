//! Servicio de vehículos por defecto
//!
//! Delegación directa al repositorio: rellena los límites de dimensiones que
//! falten y traduce los errores del store al vocabulario de dominio. No filtra
//! ni cachea nada por su cuenta.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::vehicle::{Vehicle, VehicleId};
use crate::repositories::vehicle_repository::{RepositoryResult, VehicleRepository};
use crate::services::vehicle_service::{
    DimensionFilter, ServiceError, ServiceResult, VehicleService,
};

pub struct VehicleDefault<R: VehicleRepository> {
    repository: R,
}

impl<R: VehicleRepository> VehicleDefault<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn translate<T>(operation: &'static str, result: RepositoryResult<T>) -> ServiceResult<T> {
    result.map_err(|e| {
        let err = ServiceError::from(e);
        warn!(
            operation,
            error = %err,
            cause = ?err.repository_error(),
            "⚠️ Operación de vehículos rechazada"
        );
        err
    })
}

impl<R: VehicleRepository> VehicleService for VehicleDefault<R> {
    fn find_all(&self) -> ServiceResult<HashMap<VehicleId, Vehicle>> {
        translate("find_all", self.repository.find_all())
    }

    fn create(&mut self, vehicle: Vehicle) -> ServiceResult<()> {
        let id = vehicle.id;
        translate("create", self.repository.create(vehicle))?;
        debug!(id, "🚗 Vehículo creado");
        Ok(())
    }

    fn create_multiple(&mut self, vehicles: Vec<Vehicle>) -> ServiceResult<()> {
        let count = vehicles.len();
        translate("create_multiple", self.repository.create_multiple(vehicles))?;
        debug!(count, "🚗 Vehículos creados en lote");
        Ok(())
    }

    fn get_by_color_and_year(
        &self,
        color: &str,
        year: i32,
    ) -> ServiceResult<HashMap<VehicleId, Vehicle>> {
        translate(
            "get_by_color_and_year",
            self.repository.get_by_color_and_year(color, year),
        )
    }

    fn get_by_brand_between_years(
        &self,
        brand: &str,
        year_start: i32,
        year_end: i32,
    ) -> ServiceResult<HashMap<VehicleId, Vehicle>> {
        translate(
            "get_by_brand_between_years",
            self.repository
                .get_by_brand_between_years(brand, year_start, year_end),
        )
    }

    fn get_speed_avg_by_brand(&self, brand: &str) -> ServiceResult<f64> {
        translate(
            "get_speed_avg_by_brand",
            self.repository.get_speed_avg_by_brand(brand),
        )
    }

    fn get_average_capacity_by_brand(&self, brand: &str) -> ServiceResult<f64> {
        translate(
            "get_average_capacity_by_brand",
            self.repository.get_average_capacity_by_brand(brand),
        )
    }

    fn list_by_weight_range(
        &self,
        weight_min: f64,
        weight_max: f64,
    ) -> ServiceResult<HashMap<VehicleId, Vehicle>> {
        translate(
            "list_by_weight_range",
            self.repository.list_by_weight_range(weight_min, weight_max),
        )
    }

    fn list_by_dimensions(
        &self,
        filter: &DimensionFilter,
    ) -> ServiceResult<HashMap<VehicleId, Vehicle>> {
        let bounds = filter.resolve();
        debug!(?bounds, "📐 Límites de dimensiones resueltos");

        translate(
            "list_by_dimensions",
            self.repository.list_by_dimensions(
                bounds.min_length,
                bounds.max_length,
                bounds.min_width,
                bounds.max_width,
            ),
        )
    }

    fn update(&mut self, vehicle: Vehicle) -> ServiceResult<()> {
        let id = vehicle.id;
        translate("update", self.repository.update(vehicle))?;
        debug!(id, "✏️ Vehículo actualizado");
        Ok(())
    }

    fn delete(&mut self, id: VehicleId) -> ServiceResult<()> {
        translate("delete", self.repository.delete(id))?;
        debug!(id, "🗑️ Vehículo eliminado");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::Dimensions;
    use crate::repositories::vehicle_repository::RepositoryError;

    /// Repositorio que registra los límites recibidos en `list_by_dimensions`
    #[derive(Default)]
    struct RecordingRepository {
        last_dimensions: std::cell::Cell<Option<(f64, f64, f64, f64)>>,
    }

    impl VehicleRepository for RecordingRepository {
        fn find_all(&self) -> RepositoryResult<HashMap<VehicleId, Vehicle>> {
            Ok(HashMap::new())
        }

        fn create(&mut self, vehicle: Vehicle) -> RepositoryResult<()> {
            Err(RepositoryError::AlreadyExists(vehicle.id))
        }

        fn create_multiple(&mut self, _vehicles: Vec<Vehicle>) -> RepositoryResult<()> {
            Err(RepositoryError::AlreadyExists(2))
        }

        fn get_by_color_and_year(
            &self,
            _color: &str,
            _year: i32,
        ) -> RepositoryResult<HashMap<VehicleId, Vehicle>> {
            Err(RepositoryError::NoVehiclesByColorYear)
        }

        fn get_by_brand_between_years(
            &self,
            _brand: &str,
            _year_start: i32,
            _year_end: i32,
        ) -> RepositoryResult<HashMap<VehicleId, Vehicle>> {
            Err(RepositoryError::NoVehiclesByBrandYears)
        }

        fn get_speed_avg_by_brand(&self, _brand: &str) -> RepositoryResult<f64> {
            Err(RepositoryError::NoVehiclesByBrand)
        }

        fn get_average_capacity_by_brand(&self, _brand: &str) -> RepositoryResult<f64> {
            Ok(4.0)
        }

        fn list_by_weight_range(
            &self,
            _weight_min: f64,
            _weight_max: f64,
        ) -> RepositoryResult<HashMap<VehicleId, Vehicle>> {
            Err(RepositoryError::NoVehiclesByWeightRange)
        }

        fn list_by_dimensions(
            &self,
            min_length: f64,
            max_length: f64,
            min_width: f64,
            max_width: f64,
        ) -> RepositoryResult<HashMap<VehicleId, Vehicle>> {
            self.last_dimensions
                .set(Some((min_length, max_length, min_width, max_width)));
            Err(RepositoryError::NoVehiclesByDimensions)
        }

        fn update(&mut self, vehicle: Vehicle) -> RepositoryResult<()> {
            Err(RepositoryError::NotFound(vehicle.id))
        }

        fn delete(&mut self, id: VehicleId) -> RepositoryResult<()> {
            Err(RepositoryError::NotFound(id))
        }
    }

    fn vehicle(id: VehicleId) -> Vehicle {
        Vehicle {
            id,
            brand: "Toyota".to_string(),
            max_speed: 150.0,
            dimensions: Dimensions::default(),
            ..Default::default()
        }
    }

    #[test]
    fn test_dimensions_are_filled_before_reaching_the_store() {
        let service = VehicleDefault::new(RecordingRepository::default());
        let filter = DimensionFilter {
            min_width: Some(1.5),
            ..Default::default()
        };

        let err = service.list_by_dimensions(&filter).unwrap_err();
        assert!(matches!(err, ServiceError::NotFoundByCriteria(_)));
        assert_eq!(
            service.repository.last_dimensions.get(),
            Some((0.0, f64::MAX, 1.5, f64::MAX))
        );
    }

    #[test]
    fn test_repository_errors_are_translated() {
        let mut service = VehicleDefault::new(RecordingRepository::default());

        assert_eq!(
            service.create(vehicle(1)).unwrap_err(),
            ServiceError::AlreadyExists(RepositoryError::AlreadyExists(1))
        );
        assert!(matches!(
            service.create_multiple(vec![vehicle(2)]).unwrap_err(),
            ServiceError::AlreadyExists(_)
        ));
        assert!(matches!(
            service.get_by_color_and_year("red", 2000).unwrap_err(),
            ServiceError::NotFoundByCriteria(_)
        ));
        assert!(matches!(
            service
                .get_by_brand_between_years("Toyota", 2000, 2001)
                .unwrap_err(),
            ServiceError::NotFoundByCriteria(_)
        ));
        assert!(matches!(
            service.list_by_weight_range(0.0, 0.0).unwrap_err(),
            ServiceError::NotFoundByCriteria(_)
        ));
        assert!(matches!(
            service.get_speed_avg_by_brand("Ghost").unwrap_err(),
            ServiceError::NoMatchForBrand(_)
        ));
        assert_eq!(
            service.update(vehicle(9)).unwrap_err(),
            ServiceError::NotFound(RepositoryError::NotFound(9))
        );
        assert_eq!(
            service.delete(9).unwrap_err(),
            ServiceError::NotFound(RepositoryError::NotFound(9))
        );
    }

    #[test]
    fn test_successful_results_pass_through() {
        let service = VehicleDefault::new(RecordingRepository::default());
        assert_eq!(service.get_average_capacity_by_brand("Toyota").unwrap(), 4.0);
        assert!(service.find_all().unwrap().is_empty());
    }
}
