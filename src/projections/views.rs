//! Vistas de solo lectura
//!
//! Este módulo contiene las filas serializables que consume el listado de
//! rutas. La referencia débil al conductor se resuelve aquí, en lectura:
//! un id colgante se muestra como "Unknown Driver" en vez de fallar.

use serde::Serialize;
use uuid::Uuid;

use crate::models::driver::Driver;
use crate::models::route::Route;

const UNKNOWN_DRIVER: &str = "Unknown Driver";
const UNASSIGNED: &str = "Unassigned";

/// Fila de ruta para listados, con el nombre del conductor ya resuelto
#[derive(Debug, Clone, Serialize)]
pub struct RouteOverview {
    pub id: Uuid,
    pub route_code: String,
    pub origin: String,
    pub destination: String,
    pub start_time: String,
    pub end_time: String,
    pub driver_name: String,
}

/// Resolver el nombre del conductor asignado, si la referencia sigue viva
pub fn assigned_driver_name(route: &Route, drivers: &[Driver]) -> Option<String> {
    let driver_id = route.assigned_driver_id?;
    drivers.iter().find(|d| d.id == driver_id).map(|d| d.name.clone())
}

/// Construir la fila de listado de una ruta
pub fn route_overview(route: &Route, drivers: &[Driver]) -> RouteOverview {
    let driver_name = match route.assigned_driver_id {
        None => UNASSIGNED.to_string(),
        Some(_) => assigned_driver_name(route, drivers)
            .unwrap_or_else(|| UNKNOWN_DRIVER.to_string()),
    };

    RouteOverview {
        id: route.id,
        route_code: route.route_code.clone(),
        origin: route.origin.clone(),
        destination: route.destination.clone(),
        start_time: route.start_time.to_rfc3339(),
        end_time: route.end_time.to_rfc3339(),
        driver_name,
    }
}

/// Construir todas las filas del listado, en orden de inserción
pub fn route_overviews(routes: &[Route], drivers: &[Driver]) -> Vec<RouteOverview> {
    routes.iter().map(|r| route_overview(r, drivers)).collect()
}
