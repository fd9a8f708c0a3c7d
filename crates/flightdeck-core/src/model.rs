use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Operational status of a scheduled flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightStatus {
    Scheduled,
    #[serde(rename = "On-time")]
    OnTime,
    Delayed,
    Cancelled,
}

impl FlightStatus {
    /// All statuses, for uniform draws.
    pub const ALL: [FlightStatus; 4] = [
        FlightStatus::Scheduled,
        FlightStatus::OnTime,
        FlightStatus::Delayed,
        FlightStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlightStatus::Scheduled => "Scheduled",
            FlightStatus::OnTime => "On-time",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Cancelled => "Cancelled",
        }
    }
}

/// Availability state of an airport gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateStatus {
    Available,
    Occupied,
    Maintenance,
}

impl GateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GateStatus::Available => "Available",
            GateStatus::Occupied => "Occupied",
            GateStatus::Maintenance => "Maintenance",
        }
    }
}

/// A scheduled flight. The gate stays `None` until the allocation
/// stage pairs the flight with a gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    /// Carrier-prefixed code, e.g. `EK412`.
    pub id: String,
    pub airline: String,
    pub origin: String,
    pub destination: String,
    pub departure: NaiveTime,
    pub arrival: NaiveTime,
    pub gate: Option<String>,
    pub price: f64,
    pub seats: u32,
    pub status: FlightStatus,
}

/// An airport gate. `flight_id` is set iff the gate is Occupied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gate {
    /// Terminal letter plus zero-padded index, e.g. `B07`.
    pub code: String,
    pub terminal: char,
    pub status: GateStatus,
    pub flight_id: Option<String>,
}

/// A passenger booking. The flight reference is sampled from the
/// generated batch and is not otherwise validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    pub pnr: String,
    pub name: String,
    pub email: String,
    pub flight_id: String,
    pub seat: String,
    pub checked_in: bool,
}

/// A city-pair route, distinct from a scheduled flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
    pub distance: u32,
    pub price: f64,
    /// Approximate hours, `distance / 800` truncated.
    pub duration: u32,
    pub flight_id: String,
}
