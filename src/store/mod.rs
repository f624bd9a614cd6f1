//! Stores en memoria
//!
//! Este módulo contiene los dos stores autoritativos del panel. Cada store
//! es dueño exclusivo de su colección; la consistencia entre entidades la
//! orquesta quien llama (ver state.rs para la operación compuesta).

pub mod driver_store;
pub mod route_store;

pub use driver_store::DriverStore;
pub use route_store::RouteStore;
