//! Modelo de Driver
//!
//! Este módulo contiene el struct Driver y sus variantes para CRUD operations.
//! El id y los timestamps los asigna el store al crear la entidad.

use serde::{Deserialize, Serialize};
use validator::Validate;
use chrono::{DateTime, Utc};
use uuid::Uuid;
use std::str::FromStr;

use crate::utils::validation::{validate_license_id, validate_person_name, PHONE_REGEX};

/// Estado del conductor dentro de su ciclo de vida
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    Available,
    Assigned,
    OnLeave,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Available => "available",
            DriverStatus::Assigned => "assigned",
            DriverStatus::OnLeave => "on_leave",
        }
    }
}

impl FromStr for DriverStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "available" => Ok(DriverStatus::Available),
            "assigned" => Ok(DriverStatus::Assigned),
            "on_leave" => Ok(DriverStatus::OnLeave),
            other => Err(format!("Invalid driver status: '{}'", other)),
        }
    }
}

/// Driver principal - la entidad autoritativa que guarda el store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub license_id: String,
    pub status: DriverStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request para crear un nuevo conductor
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(custom = "validate_person_name")]
    pub name: String,

    #[validate(regex = "PHONE_REGEX")]
    pub phone: String,

    #[validate(custom = "validate_license_id")]
    pub license_id: String,

    pub status: DriverStatus,
}

/// Request para actualizar un conductor existente
///
/// Parche parcial: solo los campos `Some` se aplican. El store no
/// re-valida en update (la validación vive en el alta).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDriverRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub license_id: Option<String>,
    pub status: Option<DriverStatus>,
}

/// Filtros para proyecciones de conductores
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DriverFilters {
    pub status: Option<DriverStatus>,
    pub query: Option<String>,
}
