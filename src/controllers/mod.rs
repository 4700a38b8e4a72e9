//! Controladores
//!
//! Traducen los parámetros HTTP ya extraídos a llamadas al servicio y arman
//! las respuestas.

pub mod vehicle_controller;
