//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de error del núcleo. No hay errores fatales:
//! las validaciones fallan en el alta, y un id inexistente en update/delete
//! se señala como `NotFound` en lugar del no-op silencioso del panel
//! original (el estado no cambia en ningún caso; quien llama puede ignorar
//! el resultado si prefiere la semántica leniente).

use thiserror::Error;

/// Errores principales del núcleo
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de conflicto de asignación
pub fn assignment_conflict_error(resource: &str, field: &str, value: &str) -> AppError {
    AppError::Conflict(format!("{} with {} '{}' cannot accept a new assignment", resource, field, value))
}
