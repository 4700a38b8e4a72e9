use std::collections::HashMap;

use crate::dto::api_response::ApiResponse;
use crate::dto::vehicle_dto::{
    to_collection, BrandAverageResponse, DimensionsQuery, VehicleCollection, VehicleJson,
    WeightRangeQuery,
};
use crate::models::vehicle::{Vehicle, VehicleId};
use crate::services::vehicle_service::{
    DimensionFilter, MAX_LENGTH_KEY, MAX_WIDTH_KEY, MIN_LENGTH_KEY, MIN_WIDTH_KEY,
};
use crate::state::SharedVehicleService;
use crate::utils::errors::AppError;
use crate::utils::validation::{
    parse_number, parse_optional_number, parse_range, require_not_empty, validate_batch,
    validate_vehicle,
};

pub struct VehicleController {
    service: SharedVehicleService,
}

impl VehicleController {
    pub fn new(service: SharedVehicleService) -> Self {
        Self { service }
    }

    pub async fn list_all(&self) -> Result<ApiResponse<VehicleCollection>, AppError> {
        let vehicles = self.service.read().await.find_all()?;

        Ok(ApiResponse::success_with_message(
            to_collection(vehicles),
            "success",
        ))
    }

    pub async fn create(&self, request: VehicleJson) -> Result<ApiResponse<VehicleJson>, AppError> {
        validate_vehicle(&request)?;

        self.service
            .write()
            .await
            .create(Vehicle::from(request.clone()))?;

        Ok(ApiResponse::success_with_message(
            request,
            "successful vehicle creation",
        ))
    }

    pub async fn create_multiple(
        &self,
        requests: Vec<VehicleJson>,
    ) -> Result<ApiResponse<VehicleCollection>, AppError> {
        validate_batch(&requests)?;

        let vehicles: Vec<Vehicle> = requests.into_iter().map(Vehicle::from).collect();
        let created: HashMap<VehicleId, Vehicle> =
            vehicles.iter().map(|v| (v.id, v.clone())).collect();

        self.service.write().await.create_multiple(vehicles)?;

        Ok(ApiResponse::success_with_message(
            to_collection(created),
            "successful multiple vehicle creation",
        ))
    }

    pub async fn get_by_color_and_year(
        &self,
        color: &str,
        year: &str,
    ) -> Result<ApiResponse<VehicleCollection>, AppError> {
        let color = require_not_empty(color, "Color")?;
        let year: i32 = parse_number(require_not_empty(year, "Year")?, "year")?;

        let vehicles = self
            .service
            .read()
            .await
            .get_by_color_and_year(color, year)?;

        Ok(ApiResponse::success_with_message(
            to_collection(vehicles),
            "success, returning vehicles by color and year",
        ))
    }

    pub async fn get_by_brand_between_years(
        &self,
        brand: &str,
        start_year: &str,
        end_year: &str,
    ) -> Result<ApiResponse<VehicleCollection>, AppError> {
        let brand = require_not_empty(brand, "Brand")?;
        let year_start: i32 = parse_number(require_not_empty(start_year, "Start year")?, "start year")?;
        let year_end: i32 = parse_number(require_not_empty(end_year, "End year")?, "end year")?;

        let vehicles = self
            .service
            .read()
            .await
            .get_by_brand_between_years(brand, year_start, year_end)?;

        Ok(ApiResponse::success_with_message(
            to_collection(vehicles),
            "success, returning vehicles by brand between years",
        ))
    }

    pub async fn get_speed_avg_by_brand(
        &self,
        brand: &str,
    ) -> Result<ApiResponse<BrandAverageResponse>, AppError> {
        let brand = require_not_empty(brand, "Brand")?;
        let average = self.service.read().await.get_speed_avg_by_brand(brand)?;

        Ok(ApiResponse::success_with_message(
            BrandAverageResponse {
                brand: brand.to_string(),
                average,
            },
            "success, returning vehicle's speed average by brand",
        ))
    }

    pub async fn get_average_capacity_by_brand(
        &self,
        brand: &str,
    ) -> Result<ApiResponse<BrandAverageResponse>, AppError> {
        let brand = require_not_empty(brand, "Brand")?;
        let average = self
            .service
            .read()
            .await
            .get_average_capacity_by_brand(brand)?;

        Ok(ApiResponse::success_with_message(
            BrandAverageResponse {
                brand: brand.to_string(),
                average,
            },
            "success, returning vehicle average capacity by brand",
        ))
    }

    pub async fn list_by_weight_range(
        &self,
        query: WeightRangeQuery,
    ) -> Result<ApiResponse<VehicleCollection>, AppError> {
        let weight_min = parse_optional_number(query.weight_min.as_deref(), "min weight")?;
        let weight_max = parse_optional_number(query.weight_max.as_deref(), "max weight")?;

        // Máximo ausente -> 0, que el store interpreta como sin límite
        let vehicles = self
            .service
            .read()
            .await
            .list_by_weight_range(weight_min.unwrap_or(0.0), weight_max.unwrap_or(0.0))?;

        Ok(ApiResponse::success_with_message(
            to_collection(vehicles),
            "success, returning vehicles by weight range",
        ))
    }

    pub async fn list_by_dimensions(
        &self,
        query: DimensionsQuery,
    ) -> Result<ApiResponse<VehicleCollection>, AppError> {
        let mut dimensions = HashMap::new();

        if let Some(length) = query.length.as_deref().filter(|s| !s.trim().is_empty()) {
            let (min, max) = parse_range(length, "length")?;
            insert_bound(&mut dimensions, MIN_LENGTH_KEY, min);
            insert_bound(&mut dimensions, MAX_LENGTH_KEY, max);
        }

        if let Some(width) = query.width.as_deref().filter(|s| !s.trim().is_empty()) {
            let (min, max) = parse_range(width, "width")?;
            insert_bound(&mut dimensions, MIN_WIDTH_KEY, min);
            insert_bound(&mut dimensions, MAX_WIDTH_KEY, max);
        }

        let filter = DimensionFilter::from_map(&dimensions);
        let vehicles = self.service.read().await.list_by_dimensions(&filter)?;

        Ok(ApiResponse::success_with_message(
            to_collection(vehicles),
            "success, returning vehicles by given dimensions",
        ))
    }

    pub async fn update(
        &self,
        id: &str,
        mut request: VehicleJson,
    ) -> Result<ApiResponse<VehicleJson>, AppError> {
        let id: VehicleId = parse_number(require_not_empty(id, "id")?, "id")?;
        validate_vehicle(&request)?;

        // El id del path manda sobre el del body
        request.id = id;
        self.service
            .write()
            .await
            .update(Vehicle::from(request.clone()))?;

        Ok(ApiResponse::success_with_message(
            request,
            "successful vehicle update",
        ))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id: VehicleId = parse_number(require_not_empty(id, "id")?, "id")?;
        self.service.write().await.delete(id)?;
        Ok(())
    }
}

fn insert_bound(dimensions: &mut HashMap<String, f64>, key: &str, value: Option<f64>) {
    if let Some(value) = value {
        dimensions.insert(key.to_string(), value);
    }
}
