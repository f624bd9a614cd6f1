//! Búsqueda y filtros
//!
//! Funciones puras sobre snapshots de los stores. La búsqueda es por
//! substring sin distinguir mayúsculas, sobre un conjunto fijo de campos
//! por entidad. Búsqueda y filtro de estado componen por intersección:
//! el orden de aplicación no cambia el resultado.

use crate::models::driver::{Driver, DriverFilters};
use crate::models::route::{Route, RouteFilters};

fn matches_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn driver_matches(driver: &Driver, query: &str) -> bool {
    matches_ci(&driver.name, query)
        || matches_ci(&driver.license_id, query)
        || matches_ci(&driver.phone, query)
}

fn route_matches(route: &Route, query: &str) -> bool {
    matches_ci(&route.route_code, query)
        || matches_ci(&route.origin, query)
        || matches_ci(&route.destination, query)
}

/// Buscar conductores por nombre, licencia o teléfono
pub fn search_drivers<'a>(drivers: &'a [Driver], query: &str) -> Vec<&'a Driver> {
    let needle = query.to_lowercase();
    drivers.iter().filter(|d| driver_matches(d, &needle)).collect()
}

/// Buscar rutas por código, origen o destino
pub fn search_routes<'a>(routes: &'a [Route], query: &str) -> Vec<&'a Route> {
    let needle = query.to_lowercase();
    routes.iter().filter(|r| route_matches(r, &needle)).collect()
}

/// Aplicar estado y búsqueda a la vez, en orden de inserción
pub fn filter_drivers<'a>(drivers: &'a [Driver], filters: &DriverFilters) -> Vec<&'a Driver> {
    let needle = filters.query.as_deref().map(str::to_lowercase);
    drivers
        .iter()
        .filter(|d| filters.status.map_or(true, |s| d.status == s))
        .filter(|d| needle.as_deref().map_or(true, |q| driver_matches(d, q)))
        .collect()
}

/// Aplicar asignación, conductor y búsqueda a la vez
pub fn filter_routes<'a>(routes: &'a [Route], filters: &RouteFilters) -> Vec<&'a Route> {
    let needle = filters.query.as_deref().map(str::to_lowercase);
    routes
        .iter()
        .filter(|r| {
            filters
                .assigned
                .map_or(true, |wants| r.assigned_driver_id.is_some() == wants)
        })
        .filter(|r| {
            filters
                .driver_id
                .map_or(true, |id| r.assigned_driver_id == Some(id))
        })
        .filter(|r| needle.as_deref().map_or(true, |q| route_matches(r, q)))
        .collect()
}
