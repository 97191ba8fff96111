//! Simulated-annealing driver for the Argon placement engine.
//!
//! Takes a packed [`Floorplan`](argon_floorplan::Floorplan) and improves it
//! by Metropolis-accepted random perturbations under a geometric cooling
//! schedule. The cost is bounding-box area, optionally blended with a
//! half-perimeter wirelength term.
//!
//! # Usage
//!
//! ```ignore
//! use argon_anneal::{anneal, AnnealConfig};
//! use argon_common::Xorshift64Star;
//!
//! let mut rng = Xorshift64Star::new(seed);
//! let stats = anneal(&mut floorplan, &AnnealConfig::default(), &mut rng, |_| {});
//! println!("best area: {}", stats.best_area);
//! ```

#![warn(missing_docs)]

pub mod anneal;
pub mod config;
pub mod cost;

pub use anneal::{anneal, AnnealStats, RoundStats, StopReason};
pub use config::AnnealConfig;
pub use cost::{total_hpwl, CostBaseline, PlacementCost};
