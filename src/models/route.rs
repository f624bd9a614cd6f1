//! Modelo de Route
//!
//! Este módulo contiene el struct Route y sus variantes para CRUD operations.
//! `assigned_driver_id` es una referencia débil: el store no comprueba que el
//! conductor exista ni limpia la referencia si luego se borra. Una referencia
//! colgante se resuelve como "Unknown Driver" en lectura (ver projections).

use serde::{Deserialize, Serialize};
use validator::Validate;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::utils::validation::{validate_location, validate_route_code, validate_route_window};

/// Route principal - la entidad autoritativa que guarda el store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: Uuid,
    pub route_code: String,
    pub origin: String,
    pub destination: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub assigned_driver_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request para crear una nueva ruta
///
/// La ventana horaria (`end_time` estrictamente posterior a `start_time`)
/// solo se valida aquí, en el alta; los updates no la re-comprueban.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_route_window", skip_on_field_errors = true))]
pub struct CreateRouteRequest {
    #[validate(custom = "validate_route_code")]
    pub route_code: String,

    #[validate(custom = "validate_location")]
    pub origin: String,

    #[validate(custom = "validate_location")]
    pub destination: String,

    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,

    pub assigned_driver_id: Option<Uuid>,
}

/// Request para actualizar una ruta existente
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRouteRequest {
    pub route_code: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    /// Doble `Option`: `None` = no tocar, `Some(None)` = desasignar,
    /// `Some(Some(id))` = reasignar
    pub assigned_driver_id: Option<Option<Uuid>>,
}

/// Filtros para proyecciones de rutas
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteFilters {
    /// `Some(true)` = solo asignadas, `Some(false)` = solo sin asignar
    pub assigned: Option<bool>,
    pub driver_id: Option<Uuid>,
    pub query: Option<String>,
}
