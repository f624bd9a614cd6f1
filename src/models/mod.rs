//! Modelos del sistema
//!
//! Este módulo contiene las entidades del panel (Driver, Route), los
//! requests de creación/actualización y los filtros de proyección.

pub mod driver;
pub mod route;

pub use driver::{CreateDriverRequest, Driver, DriverFilters, DriverStatus, UpdateDriverRequest};
pub use route::{CreateRouteRequest, Route, RouteFilters, UpdateRouteRequest};
