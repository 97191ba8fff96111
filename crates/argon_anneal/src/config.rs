//! Annealing schedule configuration.

use crate::cost::PlacementCost;
use std::time::Duration;

/// Tuning knobs for the simulated-annealing driver.
///
/// The defaults reproduce the reference schedule: `K = 20` moves per block
/// per round, geometric cooling at 0.95, freeze below temperature 1.0, and
/// a wall-clock budget of 4 minutes 50 seconds.
#[derive(Debug, Clone)]
pub struct AnnealConfig {
    /// Moves-per-block multiplier `K`: a round ends once it sees more than
    /// `K * blocks` uphill acceptances or `2 * K * blocks` generated moves.
    pub moves_per_block: usize,
    /// Geometric cooling factor applied after every round.
    pub cooling: f64,
    /// Temperature below which the schedule freezes.
    pub min_temperature: f64,
    /// Stop after this many consecutive all-reject rounds.
    pub max_reject_rounds: u32,
    /// Wall-clock budget; the driver stops at the next step boundary.
    pub time_limit: Duration,
    /// Overrides the derived initial temperature (`initial cost / 10`).
    pub initial_temperature: Option<f64>,
    /// Cost function weights.
    pub cost: PlacementCost,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            moves_per_block: 20,
            cooling: 0.95,
            min_temperature: 1.0,
            max_reject_rounds: 10,
            time_limit: Duration::from_secs(5 * 60 - 10),
            initial_temperature: None,
            cost: PlacementCost::default(),
        }
    }
}
