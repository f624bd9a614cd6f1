//! Núcleo del panel de despacho
//!
//! Este crate contiene el estado en memoria del panel: las colecciones de
//! conductores y rutas, sus operaciones CRUD y las proyecciones de solo
//! lectura (búsqueda, filtros, disponibilidad de calendario) que consume
//! la capa de presentación.
//!
//! No hay persistencia ni red: el estado vive mientras vive el proceso.
//! La capa de presentación construye un [`state::AppState`] y le pasa
//! comandos de forma síncrona.

pub mod models;
pub mod projections;
pub mod state;
pub mod store;
pub mod utils;

pub use state::AppState;
pub use store::{DriverStore, RouteStore};
pub use utils::errors::{AppError, AppResult};
