use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Row counts and allocation knobs for one generation run.
///
/// Defaults match the fixed constants of the original demo dataset;
/// every stage generator takes this structure by reference instead of
/// reading globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Number of flights to generate.
    pub flights: u32,
    /// Number of passenger bookings to generate.
    pub passengers: u32,
    /// Size of the gate pool.
    pub gates: u32,
    /// Number of route draws to attempt. Duplicate city pairs are
    /// dropped, so the final route count may be lower.
    pub routes: u32,
    /// Maximum fraction of gates that may be marked Occupied.
    pub gate_occupancy: f64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            flights: 200,
            passengers: 1000,
            gates: 50,
            routes: 200,
            gate_occupancy: 0.7,
        }
    }
}

impl DatasetConfig {
    /// Validate the allocation knobs. Zero row counts are legal and
    /// surface as the documented downstream behavior instead.
    pub fn validate(&self) -> Result<()> {
        if !(self.gate_occupancy > 0.0 && self.gate_occupancy <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "gate_occupancy must be within (0, 1], got {}",
                self.gate_occupancy
            )));
        }
        Ok(())
    }

    /// Upper bound on Occupied gates: `floor(gate_occupancy * gates)`.
    pub fn occupied_gate_cap(&self) -> u32 {
        (self.gate_occupancy * f64::from(self.gates)).floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_constants() {
        let config = DatasetConfig::default();
        assert_eq!(config.flights, 200);
        assert_eq!(config.passengers, 1000);
        assert_eq!(config.gates, 50);
        assert_eq!(config.routes, 200);
        assert_eq!(config.gate_occupancy, 0.7);
        config.validate().expect("defaults validate");
    }

    #[test]
    fn occupancy_outside_unit_interval_is_rejected() {
        for bad in [0.0, -0.1, 1.5, f64::NAN] {
            let config = DatasetConfig {
                gate_occupancy: bad,
                ..DatasetConfig::default()
            };
            assert!(config.validate().is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn occupied_cap_floors() {
        let config = DatasetConfig {
            gates: 10,
            gate_occupancy: 0.7,
            ..DatasetConfig::default()
        };
        assert_eq!(config.occupied_gate_cap(), 7);

        let config = DatasetConfig {
            gates: 9,
            gate_occupancy: 0.7,
            ..DatasetConfig::default()
        };
        assert_eq!(config.occupied_gate_cap(), 6);
    }
}
