//! Store de rutas
//!
//! Colección autoritativa de rutas en memoria, con las mismas formas de
//! operación que el store de conductores. `assigned_driver_id` se guarda
//! tal cual llega: sin comprobar existencia, sin back-pointer y sin
//! limpieza si el conductor desaparece después.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::models::route::{CreateRouteRequest, Route, UpdateRouteRequest};
use crate::utils::errors::{not_found_error, AppResult};

#[derive(Debug, Default)]
pub struct RouteStore {
    routes: Vec<Route>,
}

impl RouteStore {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Crear una ruta: valida el request (incluida la ventana horaria,
    /// que solo se comprueba aquí), asigna id y timestamps y la añade
    /// al final. El código de ruta no tiene por qué ser único.
    pub fn add_route(&mut self, request: CreateRouteRequest) -> AppResult<Route> {
        request.validate()?;

        let now = Utc::now();
        let route = Route {
            id: Uuid::new_v4(),
            route_code: request.route_code,
            origin: request.origin,
            destination: request.destination,
            start_time: request.start_time,
            end_time: request.end_time,
            assigned_driver_id: request.assigned_driver_id,
            created_at: now,
            updated_at: now,
        };

        info!("🗺️ Ruta creada: {} ({})", route.route_code, route.id);
        self.routes.push(route.clone());
        Ok(route)
    }

    /// Parche parcial sin re-validación: la ventana horaria no se vuelve
    /// a comprobar en update.
    pub fn update_route(&mut self, id: Uuid, patch: UpdateRouteRequest) -> AppResult<Route> {
        let route = self
            .routes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found_error("Route", &id.to_string()))?;

        if let Some(route_code) = patch.route_code {
            route.route_code = route_code;
        }
        if let Some(origin) = patch.origin {
            route.origin = origin;
        }
        if let Some(destination) = patch.destination {
            route.destination = destination;
        }
        if let Some(start_time) = patch.start_time {
            route.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            route.end_time = end_time;
        }
        if let Some(assignment) = patch.assigned_driver_id {
            route.assigned_driver_id = assignment;
        }
        route.updated_at = Utc::now();

        debug!("Ruta actualizada: {}", route.id);
        Ok(route.clone())
    }

    pub fn delete_route(&mut self, id: Uuid) -> AppResult<()> {
        let before = self.routes.len();
        self.routes.retain(|r| r.id != id);
        if self.routes.len() == before {
            return Err(not_found_error("Route", &id.to_string()));
        }
        debug!("Ruta eliminada: {}", id);
        Ok(())
    }

    pub fn get_route(&self, id: Uuid) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }

    /// Rutas cuyo `assigned_driver_id` coincide con el argumento
    pub fn routes_by_driver(&self, driver_id: Uuid) -> Vec<&Route> {
        self.routes
            .iter()
            .filter(|r| r.assigned_driver_id == Some(driver_id))
            .collect()
    }

    /// Rutas sin conductor asignado
    pub fn unassigned_routes(&self) -> Vec<&Route> {
        self.routes
            .iter()
            .filter(|r| r.assigned_driver_id.is_none())
            .collect()
    }

    /// Snapshot completo para las proyecciones
    pub fn all(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use chrono::{Duration, TimeZone};

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
    fn test_add_rejects_empty_window() {
        let mut store = RouteStore::new();
        let mut req = rt001(None);
        req.end_time = req.start_time;
        assert!(matches!(store.add_route(req), Err(AppError::Validation(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_duplicate_route_codes_are_allowed() {
        let mut store = RouteStore::new();
        store.add_route(rt001(None)).unwrap();
        store.add_route(rt001(None)).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_unassigned_is_complement_of_by_driver() {
        let mut store = RouteStore::new();
        let driver_id = Uuid::new_v4();
        store.add_route(rt001(Some(driver_id))).unwrap();
        store.add_route(rt001(None)).unwrap();

        assert_eq!(store.routes_by_driver(driver_id).len(), 1);
        assert_eq!(store.unassigned_routes().len(), 1);
        assert_eq!(
            store.routes_by_driver(driver_id).len() + store.unassigned_routes().len(),
            store.len()
        );
    }

    #[test]
    fn test_update_does_not_recheck_window() {
        // Política del panel original: la ventana solo se valida al crear.
        let mut store = RouteStore::new();
        let route = store.add_route(rt001(None)).unwrap();

        let patch = UpdateRouteRequest {
            end_time: Some(route.start_time - Duration::hours(1)),
            ..Default::default()
        };
        let updated = store.update_route(route.id, patch).unwrap();
        assert!(updated.end_time < updated.start_time);
    }

    #[test]
    fn test_update_can_reassign_and_unassign() {
        let mut store = RouteStore::new();
        let first = Uuid::new_v4();
        let route = store.add_route(rt001(Some(first))).unwrap();

        // Reasignar a otro conductor
        let second = Uuid::new_v4();
        let patch = UpdateRouteRequest {
            assigned_driver_id: Some(Some(second)),
            ..Default::default()
        };
        let updated = store.update_route(route.id, patch).unwrap();
        assert_eq!(updated.assigned_driver_id, Some(second));

        // Desasignar: la ruta vuelve al conjunto sin asignar
        let patch = UpdateRouteRequest {
            assigned_driver_id: Some(None),
            ..Default::default()
        };
        let updated = store.update_route(route.id, patch).unwrap();
        assert_eq!(updated.assigned_driver_id, None);
        assert_eq!(store.unassigned_routes().len(), 1);
        assert!(store.routes_by_driver(second).is_empty());

        // Sin el campo, la asignación no se toca
        let untouched = store.update_route(route.id, UpdateRouteRequest::default()).unwrap();
        assert_eq!(untouched.assigned_driver_id, None);
    }

    #[test]
    fn test_dangling_reference_is_kept() {
        // La referencia débil sobrevive aunque el conductor nunca exista.
        let mut store = RouteStore::new();
        let ghost = Uuid::new_v4();
        let route = store.add_route(rt001(Some(ghost))).unwrap();
        assert_eq!(store.get_route(route.id).unwrap().assigned_driver_id, Some(ghost));
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let mut store = RouteStore::new();
        assert!(matches!(
            store.delete_route(Uuid::new_v4()),
            Err(AppError::NotFound(_))
        ));
    }
}
