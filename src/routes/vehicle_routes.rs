use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::debug;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::api_response::ApiResponse;
use crate::dto::vehicle_dto::{
    BrandAverageResponse, DimensionsQuery, VehicleBatchRequest, VehicleCollection, VehicleJson,
    WeightRangeQuery,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route("/batch", post(create_vehicles))
        .route("/color/:color/year/:year", get(get_by_color_and_year))
        .route(
            "/brand/:brand/between/:start_year/:end_year",
            get(get_by_brand_between_years),
        )
        .route("/average_speed/brand/:brand", get(get_speed_avg_by_brand))
        .route(
            "/average_capacity/brand/:brand",
            get(get_average_capacity_by_brand),
        )
        .route("/weight", get(list_by_weight_range))
        .route("/dimensions", get(list_by_dimensions))
        .route("/:id", put(update_vehicle).delete(delete_vehicle))
}

fn controller(state: &AppState) -> VehicleController {
    VehicleController::new(state.vehicles.clone())
}

// Body JSON inválido -> 400 con el formato de error del API
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        debug!("JSON rechazado: {}", rejection.body_text());
        AppError::BadRequest("Invalid JSON Body".to_string())
    })
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<VehicleCollection>>, AppError> {
    let response = controller(&state).list_all().await?;
    Ok(Json(response))
}

async fn create_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<VehicleJson>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleJson>>), AppError> {
    let request = json_body(payload)?;
    let response = controller(&state).create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn create_vehicles(
    State(state): State<AppState>,
    payload: Result<Json<VehicleBatchRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleCollection>>), AppError> {
    let request = json_body(payload)?;
    let response = controller(&state).create_multiple(request.vehicles).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_by_color_and_year(
    State(state): State<AppState>,
    Path((color, year)): Path<(String, String)>,
) -> Result<Json<ApiResponse<VehicleCollection>>, AppError> {
    let response = controller(&state)
        .get_by_color_and_year(&color, &year)
        .await?;
    Ok(Json(response))
}

async fn get_by_brand_between_years(
    State(state): State<AppState>,
    Path((brand, start_year, end_year)): Path<(String, String, String)>,
) -> Result<Json<ApiResponse<VehicleCollection>>, AppError> {
    let response = controller(&state)
        .get_by_brand_between_years(&brand, &start_year, &end_year)
        .await?;
    Ok(Json(response))
}

async fn get_speed_avg_by_brand(
    State(state): State<AppState>,
    Path(brand): Path<String>,
) -> Result<Json<ApiResponse<BrandAverageResponse>>, AppError> {
    let response = controller(&state).get_speed_avg_by_brand(&brand).await?;
    Ok(Json(response))
}

async fn get_average_capacity_by_brand(
    State(state): State<AppState>,
    Path(brand): Path<String>,
) -> Result<Json<ApiResponse<BrandAverageResponse>>, AppError> {
    let response = controller(&state)
        .get_average_capacity_by_brand(&brand)
        .await?;
    Ok(Json(response))
}

async fn list_by_weight_range(
    State(state): State<AppState>,
    Query(query): Query<WeightRangeQuery>,
) -> Result<Json<ApiResponse<VehicleCollection>>, AppError> {
    let response = controller(&state).list_by_weight_range(query).await?;
    Ok(Json(response))
}

async fn list_by_dimensions(
    State(state): State<AppState>,
    Query(query): Query<DimensionsQuery>,
) -> Result<Json<ApiResponse<VehicleCollection>>, AppError> {
    let response = controller(&state).list_by_dimensions(query).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<VehicleJson>, JsonRejection>,
) -> Result<Json<ApiResponse<VehicleJson>>, AppError> {
    let request = json_body(payload)?;
    let response = controller(&state).update(&id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    controller(&state).delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
