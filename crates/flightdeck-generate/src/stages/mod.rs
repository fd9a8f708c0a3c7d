//! Stage generators for the four dataset tables.
//!
//! Stages run in order: flights, gates (with the assignment merge),
//! passengers, routes. Each takes the run configuration and its own
//! seeded RNG so tables stay independently reproducible.

pub mod flights;
pub mod gates;
pub mod passengers;
pub mod routes;

use rand::Rng;

use flightdeck_core::catalog::{Airport, AIRPORTS, MINUTE_GRID};

/// Uniform pick from a non-empty slice.
pub(crate) fn pick<'a, T, R: Rng + ?Sized>(values: &'a [T], rng: &mut R) -> &'a T {
    &values[rng.random_range(0..values.len())]
}

/// Distinct origin/destination pair from the airport catalog.
pub(crate) fn distinct_airport_pair<R: Rng + ?Sized>(rng: &mut R) -> (Airport, Airport) {
    let origin = rng.random_range(0..AIRPORTS.len());
    let mut destination = rng.random_range(0..AIRPORTS.len() - 1);
    if destination >= origin {
        destination += 1;
    }
    (AIRPORTS[origin], AIRPORTS[destination])
}

/// Price for a distance: 0.1 per unit with ±20% noise, in cents.
pub(crate) fn price_for_distance<R: Rng + ?Sized>(distance: u32, rng: &mut R) -> f64 {
    let base = f64::from(distance) * 0.1;
    let variation = rng.random_range(0.8..=1.2);
    round_cents(base * variation)
}

pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Minute on the quarter-hour grid.
pub(crate) fn grid_minute<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    *pick(MINUTE_GRID, rng)
}
