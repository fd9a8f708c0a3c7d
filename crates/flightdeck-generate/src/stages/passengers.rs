use rand::Rng;

use flightdeck_core::catalog::{FIRST_NAMES, LAST_NAMES, SEAT_LETTERS};
use flightdeck_core::{DatasetConfig, Flight, Passenger};

use crate::errors::GenerationError;

use super::pick;

/// Generate passenger bookings referencing flights from the batch.
/// Flight references are sampled uniformly and not validated further.
pub fn generate_passengers<R: Rng + ?Sized>(
    config: &DatasetConfig,
    flights: &[Flight],
    rng: &mut R,
) -> Result<Vec<Passenger>, GenerationError> {
    if config.passengers > 0 && flights.is_empty() {
        return Err(GenerationError::EmptyFlightBatch { stage: "passenger" });
    }

    let mut passengers = Vec::with_capacity(config.passengers as usize);
    for _ in 0..config.passengers {
        let pnr = format!("PNR{}", rng.random_range(100_000..=999_999));
        let first = *pick(FIRST_NAMES, rng);
        let last = *pick(LAST_NAMES, rng);
        let flight_id = pick(flights, rng).id.clone();
        let seat = format!("{}{}", rng.random_range(1..=40), pick(SEAT_LETTERS, rng));

        passengers.push(Passenger {
            pnr,
            name: format!("{first} {last}"),
            email: derive_email(first, last),
            flight_id,
            seat,
            checked_in: rng.random_bool(0.5),
        });
    }
    Ok(passengers)
}

fn derive_email(first: &str, last: &str) -> String {
    format!(
        "{}.{}@example.com",
        first.to_lowercase(),
        last.to_lowercase()
    )
}
