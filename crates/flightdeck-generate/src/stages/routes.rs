use std::collections::HashSet;

use rand::Rng;
use tracing::warn;

use flightdeck_core::{DatasetConfig, Flight, Route};

use crate::errors::GenerationError;

use super::{distinct_airport_pair, pick, price_for_distance};

/// Routes from one generation run plus the count of draws dropped on
/// city-pair collisions.
#[derive(Debug, Clone)]
pub struct RouteBatch {
    pub routes: Vec<Route>,
    pub duplicates_dropped: u64,
}

/// Attempt `config.routes` draws. A draw whose (origin, destination)
/// pair was already emitted is dropped, not retried, so the final
/// count may fall short of the request; each drop is logged and
/// counted so the shortfall is visible in the run report.
pub fn generate_routes<R: Rng + ?Sized>(
    config: &DatasetConfig,
    flights: &[Flight],
    rng: &mut R,
) -> Result<RouteBatch, GenerationError> {
    if config.routes > 0 && flights.is_empty() {
        return Err(GenerationError::EmptyFlightBatch { stage: "route" });
    }

    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut routes = Vec::with_capacity(config.routes as usize);
    let mut duplicates_dropped = 0_u64;

    for _ in 0..config.routes {
        let (origin, destination) = distinct_airport_pair(rng);
        if !seen.insert((origin.code, destination.code)) {
            duplicates_dropped += 1;
            warn!(
                origin = origin.code,
                destination = destination.code,
                "duplicate route dropped"
            );
            continue;
        }

        let distance = rng.random_range(200..=15_000);
        let price = price_for_distance(distance, rng);
        let duration = distance / 800;
        let flight_id = attach_flight(origin.code, destination.code, flights, rng);

        routes.push(Route {
            origin: origin.code.to_string(),
            destination: destination.code.to_string(),
            distance,
            price,
            duration,
            flight_id,
        });
    }

    Ok(RouteBatch {
        routes,
        duplicates_dropped,
    })
}

/// Prefer a flight flying exactly this city pair; otherwise fall back
/// to an arbitrary flight from the batch.
fn attach_flight<R: Rng + ?Sized>(
    origin: &str,
    destination: &str,
    flights: &[Flight],
    rng: &mut R,
) -> String {
    let matching: Vec<&Flight> = flights
        .iter()
        .filter(|flight| flight.origin == origin && flight.destination == destination)
        .collect();
    if matching.is_empty() {
        pick(flights, rng).id.clone()
    } else {
        pick(&matching, rng).id.clone()
    }
}
