//! Middleware de CORS
//!
//! Este módulo maneja la configuración de CORS para permitir
//! requests desde diferentes orígenes.

use http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::config::environment::EnvironmentConfig;

/// Origen comodín de `CORS_ORIGINS`
pub const WILDCARD_ORIGIN: &str = "*";

/// Elegir la capa de CORS según la configuración
///
/// Sin orígenes configurados, o con `*` entre ellos, se permite cualquiera.
pub fn cors_layer(config: &EnvironmentConfig) -> CorsLayer {
    if config.cors_origins.is_empty() || config.allows_any_origin() {
        if config.is_production() {
            warn!("⚠️ CORS abierto en producción, se permiten todos los orígenes");
        }
        cors_middleware()
    } else {
        cors_middleware_with_origins(&config.cors_origins)
    }
}

/// Crear middleware de CORS permisivo
/// NOTA: Permite cualquier origen - solo para desarrollo
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Crear middleware de CORS con orígenes específicos
///
/// `tower-http` no acepta `*` dentro de una lista, así que el comodín se
/// traduce a la capa permisiva.
pub fn cors_middleware_with_origins(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == WILDCARD_ORIGIN) {
        return cors_middleware();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("⚠️ Origen CORS inválido ignorado: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
        ])
        .max_age(std::time::Duration::from_secs(3600))
}
