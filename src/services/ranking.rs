//! Display ordering for clearances with mixed stock units.

use crate::domain::clearance::Clearance;

/// Kilogram stock is scaled so one kilogram weighs like a thousand pieces.
const KILOGRAM_WEIGHT: f64 = 1000.0;

/// Sort key putting the largest remaining stock first.
///
/// This is an ordering heuristic, not a unit conversion.
pub fn rank_key(clearance: &Clearance) -> f64 {
    let stock = clearance.offer.stock.get();
    if clearance.offer.stock_unit.is_kilograms() {
        stock * KILOGRAM_WEIGHT
    } else {
        stock
    }
}

/// Sorts by descending [`rank_key`]; equal keys keep their input order.
pub fn rank_clearances(clearances: &mut [Clearance]) {
    clearances.sort_by(|a, b| rank_key(b).total_cmp(&rank_key(a)));
}
