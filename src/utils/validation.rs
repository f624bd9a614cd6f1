//! Utilidades de validación
//!
//! Este módulo contiene las funciones de validación que usan los requests
//! de creación. La validación ocurre solo en el alta: los parches de update
//! se aplican tal cual (política del núcleo, ver errors.rs).

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

use crate::models::route::CreateRouteRequest;

lazy_static! {
    /// Teléfono internacional: `+` opcional seguido de 1 a 16 dígitos
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9]{1,16}$").unwrap();
}

fn min_trimmed_length(value: &str, min: usize, code: &'static str) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len < min {
        let mut error = ValidationError::new(code);
        error.add_param("min".into(), &min);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

/// Validar nombre de persona (mínimo 2 caracteres sin espacios de borde)
pub fn validate_person_name(value: &str) -> Result<(), ValidationError> {
    min_trimmed_length(value, 2, "person_name")
}

/// Validar identificador de licencia (mínimo 3 caracteres)
pub fn validate_license_id(value: &str) -> Result<(), ValidationError> {
    min_trimmed_length(value, 3, "license_id")
}

/// Validar código de ruta (mínimo 3 caracteres, sin unicidad global)
pub fn validate_route_code(value: &str) -> Result<(), ValidationError> {
    min_trimmed_length(value, 3, "route_code")
}

/// Validar origen o destino (mínimo 2 caracteres)
pub fn validate_location(value: &str) -> Result<(), ValidationError> {
    min_trimmed_length(value, 2, "location")
}

/// Validar la ventana horaria de una ruta: fin estrictamente posterior al inicio
pub fn validate_route_window(request: &CreateRouteRequest) -> Result<(), ValidationError> {
    if request.end_time <= request.start_time {
        let mut error = ValidationError::new("route_window");
        error.add_param("start_time".into(), &request.start_time.to_rfc3339());
        error.add_param("end_time".into(), &request.end_time.to_rfc3339());
        return Err(error);
    }
    Ok(())
}
