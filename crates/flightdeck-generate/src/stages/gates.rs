use rand::seq::index;
use rand::Rng;

use flightdeck_core::catalog::TERMINALS;
use flightdeck_core::{DatasetConfig, Flight, Gate, GateStatus};

use super::pick;

/// One gate paired with a flight from the batch. Pairing is by index
/// into the batch, since flight ids are only unique by construction.
#[derive(Debug, Clone)]
pub struct GateAssignment {
    pub flight_index: usize,
    pub gate_code: String,
}

/// Output of the allocation stage: the full gate table plus the
/// assignment list the merge step applies to the flight batch.
#[derive(Debug, Clone)]
pub struct GatePlan {
    pub gates: Vec<Gate>,
    pub assignments: Vec<GateAssignment>,
}

/// Build the gate pool: terminal letter plus zero-padded 1-based index.
pub fn build_gate_codes<R: Rng + ?Sized>(
    config: &DatasetConfig,
    rng: &mut R,
) -> Vec<(char, String)> {
    (1..=config.gates)
        .map(|number| {
            let terminal = *pick(TERMINALS, rng);
            (terminal, format!("{terminal}{number:02}"))
        })
        .collect()
}

/// Pair sampled gates with sampled flights, capped at
/// `min(flight_count, floor(gate_occupancy * gates))`. Unpaired gates
/// are Available with probability 0.75, otherwise Maintenance.
pub fn allocate_gates<R: Rng + ?Sized>(
    codes: &[(char, String)],
    flights: &[Flight],
    config: &DatasetConfig,
    rng: &mut R,
) -> GatePlan {
    let occupied = flights.len().min(config.occupied_gate_cap() as usize);
    let gate_picks = index::sample(rng, codes.len(), occupied).into_vec();
    let flight_picks = index::sample(rng, flights.len(), occupied).into_vec();
    let paired: std::collections::HashMap<usize, usize> = gate_picks
        .iter()
        .copied()
        .zip(flight_picks.iter().copied())
        .collect();

    let mut gates = Vec::with_capacity(codes.len());
    let mut assignments = Vec::with_capacity(occupied);
    for (gate_index, (terminal, code)) in codes.iter().enumerate() {
        match paired.get(&gate_index) {
            Some(&flight_index) => {
                gates.push(Gate {
                    code: code.clone(),
                    terminal: *terminal,
                    status: GateStatus::Occupied,
                    flight_id: Some(flights[flight_index].id.clone()),
                });
                assignments.push(GateAssignment {
                    flight_index,
                    gate_code: code.clone(),
                });
            }
            None => {
                let status = if rng.random_bool(0.25) {
                    GateStatus::Maintenance
                } else {
                    GateStatus::Available
                };
                gates.push(Gate {
                    code: code.clone(),
                    terminal: *terminal,
                    status,
                    flight_id: None,
                });
            }
        }
    }

    GatePlan { gates, assignments }
}

/// Merge step: set the gate field on each assigned flight. The batch
/// is consumed and returned so nothing written earlier needs patching.
pub fn apply_assignments(mut flights: Vec<Flight>, assignments: &[GateAssignment]) -> Vec<Flight> {
    for assignment in assignments {
        if let Some(flight) = flights.get_mut(assignment.flight_index) {
            flight.gate = Some(assignment.gate_code.clone());
        }
    }
    flights
}
