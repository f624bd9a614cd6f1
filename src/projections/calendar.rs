//! Calendario semanal de disponibilidad
//!
//! Clasificación por celda (conductor × día × hora) y generación de la
//! ventana semanal que empieza en lunes. Todo son funciones puras sobre
//! snapshots; el coste O(horas × rutas) por fila es aceptable a la escala
//! del panel (decenas de conductores y rutas).

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::Serialize;
use std::ops::RangeInclusive;

use crate::models::driver::{Driver, DriverStatus};
use crate::models::route::Route;

/// Clasificación de una celda del calendario
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Available,
    Assigned,
    OnLeave,
}

/// Test de solape entre la franja horaria y la ruta.
///
/// Es el test asimétrico del panel original, reproducido tal cual:
/// el inicio de la franja cae dentro de [inicio, fin] de la ruta (ambos
/// inclusive), O el inicio de la ruta cae dentro de [inicio, fin) de la
/// franja (fin exclusivo). No es un test general de solape de intervalos;
/// una ruta que empieza antes de la franja y termina dentro de ella sin
/// cubrir su inicio no cuenta.
fn slot_overlaps_route(slot_start: DateTime<Utc>, slot_end: DateTime<Utc>, route: &Route) -> bool {
    (slot_start >= route.start_time && slot_start <= route.end_time)
        || (route.start_time >= slot_start && route.start_time < slot_end)
}

/// Clasificar la celda (conductor, día, hora).
///
/// `on_leave` gana siempre, sin mirar las rutas. Si no, se busca una ruta
/// asignada al conductor cuya fecha de inicio sea el día consultado y cuyo
/// tramo solape la franja de una hora. En otro caso, disponible.
pub fn classify_slot(driver: &Driver, routes: &[Route], day: NaiveDate, hour: u32) -> SlotStatus {
    if driver.status == DriverStatus::OnLeave {
        return SlotStatus::OnLeave;
    }

    let Some(slot_start) = day.and_hms_opt(hour, 0, 0) else {
        return SlotStatus::Available;
    };
    let slot_start = slot_start.and_utc();
    let slot_end = slot_start + Duration::hours(1);

    let assigned = routes.iter().any(|route| {
        route.assigned_driver_id == Some(driver.id)
            && route.start_time.date_naive() == day
            && slot_overlaps_route(slot_start, slot_end, route)
    });

    if assigned {
        SlotStatus::Assigned
    } else {
        SlotStatus::Available
    }
}

/// Fila del calendario: una celda por hora del rango pedido
pub fn daily_slots(
    driver: &Driver,
    routes: &[Route],
    day: NaiveDate,
    hours: RangeInclusive<u32>,
) -> Vec<SlotStatus> {
    hours.map(|hour| classify_slot(driver, routes, day, hour)).collect()
}

/// Semana de 7 días que contiene al ancla, empezando en lunes
pub fn week_containing(anchor: NaiveDate) -> [NaiveDate; 7] {
    let monday = anchor - Duration::days(anchor.weekday().num_days_from_monday() as i64);
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// Desplazar el ancla n semanas (negativo = hacia atrás)
pub fn shift_week(anchor: NaiveDate, weeks: i64) -> NaiveDate {
    anchor + Duration::weeks(weeks)
}

/// Volver a la semana actual
pub fn current_week() -> [NaiveDate; 7] {
    week_containing(Utc::now().date_naive())
}
