//! Proyecciones de solo lectura
//!
//! Este módulo contiene las derivaciones puras sobre los snapshots de los
//! stores: búsqueda y filtros, calendario semanal de disponibilidad y
//! vistas de listado. Ninguna función muta estado.

pub mod calendar;
pub mod search;
pub mod views;

pub use calendar::{classify_slot, current_week, daily_slots, shift_week, week_containing, SlotStatus};
pub use search::{filter_drivers, filter_routes, search_drivers, search_routes};
pub use views::{assigned_driver_name, route_overview, route_overviews, RouteOverview};
