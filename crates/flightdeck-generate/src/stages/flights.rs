use chrono::{NaiveTime, Timelike};
use rand::Rng;

use flightdeck_core::catalog::{CARRIERS, SEAT_CAPACITIES};
use flightdeck_core::{DatasetConfig, Flight, FlightStatus};

use super::{distinct_airport_pair, grid_minute, pick, price_for_distance};

/// Generate the flight batch. Gates stay unassigned until the gate
/// stage produces its assignment list.
pub fn generate_flights<R: Rng + ?Sized>(config: &DatasetConfig, rng: &mut R) -> Vec<Flight> {
    let mut flights = Vec::with_capacity(config.flights as usize);
    for _ in 0..config.flights {
        let carrier = pick(CARRIERS, rng);
        let id = format!("{}{}", carrier.code, rng.random_range(100..=999));
        let (origin, destination) = distinct_airport_pair(rng);
        let departure = departure_time(rng);
        let arrival = arrival_time(departure, rng);
        let distance = rng.random_range(500..=12_000);
        let price = price_for_distance(distance, rng);
        let seats = *pick(SEAT_CAPACITIES, rng);
        let status = *pick(&FlightStatus::ALL, rng);

        flights.push(Flight {
            id,
            airline: carrier.name.to_string(),
            origin: origin.code.to_string(),
            destination: destination.code.to_string(),
            departure,
            arrival,
            gate: None,
            price,
            seats,
            status,
        });
    }
    flights
}

fn departure_time<R: Rng + ?Sized>(rng: &mut R) -> NaiveTime {
    let hour = rng.random_range(0..24);
    NaiveTime::from_hms_opt(hour, grid_minute(rng), 0).unwrap_or_default()
}

/// Arrival wraps at midnight; day rollover is not modeled.
fn arrival_time<R: Rng + ?Sized>(departure: NaiveTime, rng: &mut R) -> NaiveTime {
    let offset = rng.random_range(1..=12);
    let hour = (departure.hour() + offset) % 24;
    NaiveTime::from_hms_opt(hour, grid_minute(rng), 0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn batch(count: u32, seed: u64) -> Vec<Flight> {
        let config = DatasetConfig {
            flights: count,
            ..DatasetConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        generate_flights(&config, &mut rng)
    }

    #[test]
    fn origin_differs_from_destination() {
        for flight in batch(300, 1) {
            assert_ne!(flight.origin, flight.destination, "flight {}", flight.id);
        }
    }

    #[test]
    fn flight_ids_are_carrier_prefixed_codes() {
        for flight in batch(100, 2) {
            let (prefix, number) = flight.id.split_at(2);
            assert!(prefix.chars().all(|c| c.is_ascii_uppercase()));
            let number: u32 = number.parse().expect("numeric suffix");
            assert!((100..=999).contains(&number));
        }
    }

    #[test]
    fn times_sit_on_the_quarter_hour_grid() {
        for flight in batch(100, 3) {
            assert_eq!(flight.departure.minute() % 15, 0);
            assert_eq!(flight.arrival.minute() % 15, 0);
            assert_eq!(flight.departure.second(), 0);
        }
    }

    #[test]
    fn gates_start_unassigned() {
        assert!(batch(50, 4).iter().all(|flight| flight.gate.is_none()));
    }

    #[test]
    fn seats_come_from_the_capacity_set() {
        for flight in batch(100, 5) {
            assert!(SEAT_CAPACITIES.contains(&flight.seats));
        }
    }
}
