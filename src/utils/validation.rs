//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validar y convertir los
//! parámetros que llegan por path, query string y body antes de llamar al
//! servicio.

use std::str::FromStr;

use validator::Validate;

use crate::dto::vehicle_dto::VehicleJson;
use crate::utils::errors::{bad_request_error, validation_error, AppResult};

/// Velocidad máxima permitida (km/h), límite superior inclusivo
pub const MAX_SPEED: f64 = 400.0;
/// Límite inferior exclusivo de la velocidad máxima
pub const MIN_SPEED: f64 = 0.0;

/// Validar que un string no esté vacío
pub fn require_not_empty<'a>(value: &'a str, field: &str) -> AppResult<&'a str> {
    if value.trim().is_empty() {
        return Err(bad_request_error(&format!("{} cannot be empty", field)));
    }
    Ok(value)
}

/// Convertir un parámetro numérico, rechazando valores no numéricos
pub fn parse_number<T: FromStr>(value: &str, field: &str) -> AppResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| bad_request_error(&format!("Invalid {} provided", field)))
}

/// Parámetro numérico opcional: ausente o vacío equivale a `None`
pub fn parse_optional_number(value: Option<&str>, field: &str) -> AppResult<Option<f64>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_number(raw, field).map(Some),
    }
}

/// Convertir un rango con formato `low-high`
///
/// Cualquiera de las dos mitades puede quedar vacía (`-5`, `3-`), en cuyo caso
/// ese límite queda ausente. Sin guion el parámetro se rechaza.
pub fn parse_range(value: &str, field: &str) -> AppResult<(Option<f64>, Option<f64>)> {
    let (low, high) = value.split_once('-').ok_or_else(|| {
        bad_request_error(&format!("Invalid {} range provided, expected low-high", field))
    })?;

    let low = parse_optional_number(Some(low), &format!("min {}", field))?;
    let high = parse_optional_number(Some(high), &format!("max {}", field))?;
    Ok((low, high))
}

/// Validar la velocidad máxima: (0, 400]
pub fn validate_max_speed(max_speed: f64) -> AppResult<()> {
    if max_speed <= MIN_SPEED || max_speed > MAX_SPEED {
        return Err(validation_error(
            "max_speed",
            "max_speed must be greater than 0 and at most 400",
        ));
    }
    Ok(())
}

/// Validar un vehículo recibido en el body
pub fn validate_vehicle(body: &VehicleJson) -> AppResult<()> {
    body.validate()?;
    validate_max_speed(body.max_speed)
}

/// Validar todos los vehículos de un lote; un lote vacío es válido
pub fn validate_batch(vehicles: &[VehicleJson]) -> AppResult<()> {
    vehicles.iter().try_for_each(validate_vehicle)
}
