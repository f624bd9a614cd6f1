//! Store de conductores
//!
//! Colección autoritativa de conductores en memoria. Se construye
//! explícitamente y se inyecta donde haga falta; nunca es un singleton
//! global. El orden de inserción se conserva en todas las lecturas.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::models::driver::{CreateDriverRequest, Driver, DriverStatus, UpdateDriverRequest};
use crate::utils::errors::{not_found_error, AppResult};

#[derive(Debug, Default)]
pub struct DriverStore {
    drivers: Vec<Driver>,
}

impl DriverStore {
    pub fn new() -> Self {
        Self { drivers: Vec::new() }
    }

    /// Crear un conductor: valida el request, asigna id y timestamps
    /// (`created_at == updated_at` al nacer) y lo añade al final.
    /// No hay detección de duplicados.
    pub fn add_driver(&mut self, request: CreateDriverRequest) -> AppResult<Driver> {
        request.validate()?;

        let now = Utc::now();
        let driver = Driver {
            id: Uuid::new_v4(),
            name: request.name,
            phone: request.phone,
            license_id: request.license_id,
            status: request.status,
            created_at: now,
            updated_at: now,
        };

        info!("🚚 Conductor creado: {} ({})", driver.name, driver.id);
        self.drivers.push(driver.clone());
        Ok(driver)
    }

    /// Aplicar un parche parcial: solo los campos `Some` se fusionan y
    /// `updated_at` se refresca. No se re-valida en update.
    pub fn update_driver(&mut self, id: Uuid, patch: UpdateDriverRequest) -> AppResult<Driver> {
        let driver = self
            .drivers
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| not_found_error("Driver", &id.to_string()))?;

        if let Some(name) = patch.name {
            driver.name = name;
        }
        if let Some(phone) = patch.phone {
            driver.phone = phone;
        }
        if let Some(license_id) = patch.license_id {
            driver.license_id = license_id;
        }
        if let Some(status) = patch.status {
            driver.status = status;
        }
        driver.updated_at = Utc::now();

        debug!("Conductor actualizado: {}", driver.id);
        Ok(driver.clone())
    }

    /// Eliminar por id. Sin efectos en cascada sobre las rutas que lo
    /// referencien (la referencia queda colgante a propósito).
    pub fn delete_driver(&mut self, id: Uuid) -> AppResult<()> {
        let before = self.drivers.len();
        self.drivers.retain(|d| d.id != id);
        if self.drivers.len() == before {
            return Err(not_found_error("Driver", &id.to_string()));
        }
        debug!("Conductor eliminado: {}", id);
        Ok(())
    }

    pub fn get_driver(&self, id: Uuid) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    /// Conductores con el estado dado, en orden de inserción
    pub fn drivers_by_status(&self, status: DriverStatus) -> Vec<&Driver> {
        self.drivers.iter().filter(|d| d.status == status).collect()
    }

    /// Snapshot completo para las proyecciones
    pub fn all(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}
