//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores y validación de
//! entradas HTTP.

pub mod errors;
pub mod validation;
