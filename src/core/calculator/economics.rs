//! Derived work-shift economics.
//!
//! Computed once when a simulation is created; the result is stored frozen
//! on the record and never recomputed from edited inputs.

use crate::models::ShiftEconomics;

/// `consumption` is km per liter, `fuel_price` per liter.
/// Zero denominators never propagate: zero consumption means no measurable
/// fuel cost, and zero hours/distance leave the rate undefined (`None`).
pub fn shift_economics(
    hours: f64,
    distance: f64,
    fuel_price: f64,
    gross: f64,
    consumption: f64,
) -> ShiftEconomics {
    let fuel_cost = if consumption > 0.0 {
        distance / consumption * fuel_price
    } else {
        0.0
    };

    let net = gross - fuel_cost;

    let per_hour = if hours > 0.0 { Some(net / hours) } else { None };
    let per_km = if distance > 0.0 {
        Some(net / distance)
    } else {
        None
    };

    ShiftEconomics {
        fuel_cost,
        net,
        per_hour,
        per_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_shift() {
        // 100 km at 10 km/l and 6.00/l burns 60.00 of fuel
        let e = shift_economics(8.0, 100.0, 6.0, 200.0, 10.0);
        assert_eq!(e.fuel_cost, 60.0);
        assert_eq!(e.net, 140.0);
        assert_eq!(e.per_hour, Some(17.5));
        assert_eq!(e.per_km, Some(1.4));
    }

    #[test]
    fn zero_hours_leaves_hourly_rate_undefined() {
        let e = shift_economics(0.0, 100.0, 6.0, 200.0, 10.0);
        assert_eq!(e.per_hour, None);
        assert_eq!(e.per_km, Some(1.4));
    }

    #[test]
    fn zero_distance_leaves_km_rate_undefined_and_costs_nothing() {
        let e = shift_economics(8.0, 0.0, 6.0, 200.0, 10.0);
        assert_eq!(e.fuel_cost, 0.0);
        assert_eq!(e.net, 200.0);
        assert_eq!(e.per_km, None);
        assert_eq!(e.per_hour, Some(25.0));
    }

    #[test]
    fn zero_consumption_is_treated_as_no_fuel_cost() {
        let e = shift_economics(8.0, 100.0, 6.0, 200.0, 0.0);
        assert_eq!(e.fuel_cost, 0.0);
        assert_eq!(e.net, 200.0);
    }
}
