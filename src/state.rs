//! Shared application state
//!
//! Este módulo define el contenedor de estado que la capa de presentación
//! construye en su punto de inicialización y pasa a quien lo necesite.
//! Los dos stores son campos públicos: las operaciones crudas de cada uno
//! siguen disponibles tal cual, y aquí solo vive la operación compuesta
//! de asignación.

use tracing::info;
use uuid::Uuid;

use crate::models::driver::{DriverStatus, UpdateDriverRequest};
use crate::models::route::{CreateRouteRequest, Route};
use crate::store::{DriverStore, RouteStore};
use crate::utils::errors::{assignment_conflict_error, not_found_error, AppResult};

#[derive(Debug, Default)]
pub struct AppState {
    pub drivers: DriverStore,
    pub routes: RouteStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            drivers: DriverStore::new(),
            routes: RouteStore::new(),
        }
    }

    /// Crear una ruta y marcar a su conductor como asignado, en una sola
    /// llamada síncrona.
    ///
    /// A diferencia de los stores crudos, la operación compuesta es
    /// estricta: el conductor referenciado tiene que existir y estar
    /// disponible. Un conductor ya asignado o de permiso se rechaza con
    /// `Conflict`, lo que fija como máximo una ruta activa por conductor
    /// cuando las asignaciones pasan por aquí. La ruta solo se crea si
    /// ambas mutaciones pueden aplicarse.
    pub fn assign_route(&mut self, request: CreateRouteRequest) -> AppResult<Route> {
        let driver_id = match request.assigned_driver_id {
            Some(id) => id,
            None => return self.routes.add_route(request),
        };

        let driver = self
            .drivers
            .get_driver(driver_id)
            .ok_or_else(|| not_found_error("Driver", &driver_id.to_string()))?;

        if driver.status != DriverStatus::Available {
            return Err(assignment_conflict_error("Driver", "status", driver.status.as_str()));
        }

        let route = self.routes.add_route(request)?;
        self.drivers.update_driver(
            driver_id,
            UpdateDriverRequest {
                status: Some(DriverStatus::Assigned),
                ..Default::default()
            },
        )?;

        info!("✅ Ruta {} asignada al conductor {}", route.route_code, driver_id);
        Ok(route)
    }

    /// Retirar una ruta del plan y liberar a su conductor.
    ///
    /// Con la referencia es leniente: si el conductor ya no existe, la
    /// ruta se elimina igualmente y no pasa nada más.
    pub fn complete_route(&mut self, route_id: Uuid) -> AppResult<Route> {
        let route = self
            .routes
            .get_route(route_id)
            .cloned()
            .ok_or_else(|| not_found_error("Route", &route_id.to_string()))?;

        self.routes.delete_route(route_id)?;

        if let Some(driver_id) = route.assigned_driver_id {
            let patch = UpdateDriverRequest {
                status: Some(DriverStatus::Available),
                ..Default::default()
            };
            // Referencia colgante: no hay conductor que liberar
            let _ = self.drivers.update_driver(driver_id, patch);
        }

        info!("🏁 Ruta {} completada", route.route_code);
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::driver::CreateDriverRequest;
    use crate::utils::errors::AppError;
    use chrono::{Duration, TimeZone, Utc};

    fn jane() -> CreateDriverRequest {
        CreateDriverRequest {
            name: "Jane Doe".to_string(),
            phone: "+15551234567".to_string(),
            license_id: "LIC123".to_string(),
            status: DriverStatus::Available,
        }
    }

    fn rt001(driver: Option<Uuid>) -> CreateRouteRequest {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        CreateRouteRequest {
            route_code: "RT001".to_string(),
            origin: "Madrid".to_string(),
            destination: "Valencia".to_string(),
            start_time: start,
            end_time: start + Duration::hours(2),
            assigned_driver_id: driver,
        }
    }

    #[test]
    fn test_assign_route_flips_driver_status() {
        let mut state = AppState::new();
        let driver = state.drivers.add_driver(jane()).unwrap();

        let route = state.assign_route(rt001(Some(driver.id))).unwrap();

        assert_eq!(route.assigned_driver_id, Some(driver.id));
        assert_eq!(state.drivers.get_driver(driver.id).unwrap().status, DriverStatus::Assigned);
        assert!(state.routes.unassigned_routes().is_empty());
    }

    #[test]
    fn test_assign_route_rejects_missing_driver() {
        let mut state = AppState::new();
        let result = state.assign_route(rt001(Some(Uuid::new_v4())));
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(state.routes.is_empty());
    }

    #[test]
    fn test_assign_route_rejects_busy_driver() {
        let mut state = AppState::new();
        let driver = state.drivers.add_driver(jane()).unwrap();
        state.assign_route(rt001(Some(driver.id))).unwrap();

        let second = state.assign_route(rt001(Some(driver.id)));
        assert!(matches!(second, Err(AppError::Conflict(_))));
        assert_eq!(state.routes.len(), 1);
    }

    #[test]
    fn test_assign_route_without_driver_stays_unassigned() {
        let mut state = AppState::new();
        let route = state.assign_route(rt001(None)).unwrap();
        assert_eq!(route.assigned_driver_id, None);
        assert_eq!(state.routes.unassigned_routes().len(), 1);
    }

    #[test]
    fn test_complete_route_releases_driver() {
        let mut state = AppState::new();
        let driver = state.drivers.add_driver(jane()).unwrap();
        let route = state.assign_route(rt001(Some(driver.id))).unwrap();

        state.complete_route(route.id).unwrap();

        assert!(state.routes.is_empty());
        assert_eq!(state.drivers.get_driver(driver.id).unwrap().status, DriverStatus::Available);
    }

    #[test]
    fn test_complete_route_tolerates_dangling_driver() {
        let mut state = AppState::new();
        let driver = state.drivers.add_driver(jane()).unwrap();
        let route = state.assign_route(rt001(Some(driver.id))).unwrap();

        state.drivers.delete_driver(driver.id).unwrap();
        assert!(state.complete_route(route.id).is_ok());
        assert!(state.routes.is_empty());
    }
}
