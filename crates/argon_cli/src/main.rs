//! Argon CLI — the command-line interface for the Argon placement engine.
//!
//! `argon <input> <output>` reads a hard-block netlist with symmetry
//! groups, anneals a symmetry-legal placement, and writes the result.
//! Tuning knobs for the schedule and cost function are exposed as flags.

#![warn(missing_docs)]

use std::process;
use std::time::Duration;

use argon_anneal::{anneal, AnnealConfig, PlacementCost};
use argon_common::Xorshift64Star;
use argon_floorplan::Floorplan;
use clap::Parser;
use rand::SeedableRng;

/// Argon — analog placement with symmetry constraints.
#[derive(Parser, Debug)]
#[command(name = "argon", version, about = "Argon analog placement engine")]
pub struct Cli {
    /// Input netlist path.
    pub input: String,

    /// Output placement path.
    pub output: String,

    /// RNG seed; runs are reproducible for a fixed seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Weight of the bounding-box area cost term.
    #[arg(long, default_value_t = 1.0)]
    pub alpha: f64,

    /// Weight of the wirelength (HPWL) cost term.
    #[arg(long, default_value_t = 0.0)]
    pub beta: f64,

    /// Geometric cooling factor per temperature round.
    #[arg(long, default_value_t = 0.95)]
    pub cooling: f64,

    /// Moves-per-block multiplier for each temperature round.
    #[arg(long, default_value_t = 20)]
    pub moves_per_block: usize,

    /// Wall-clock budget in seconds.
    #[arg(long, default_value_t = 290)]
    pub time_limit: u64,

    /// Override the derived initial temperature.
    #[arg(long)]
    pub initial_temperature: Option<f64>,

    /// Suppress all output except errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print per-round annealing progress.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn anneal_config(&self) -> AnnealConfig {
        AnnealConfig {
            moves_per_block: self.moves_per_block,
            cooling: self.cooling,
            time_limit: Duration::from_secs(self.time_limit),
            initial_temperature: self.initial_temperature,
            cost: PlacementCost {
                weight_area: self.alpha,
                weight_wirelength: self.beta,
            },
            ..AnnealConfig::default()
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let design = argon_io::read_design(&cli.input)?;
    let mut fp = Floorplan::new(design);

    let mut rng = match cli.seed {
        Some(seed) => Xorshift64Star::new(seed),
        None => Xorshift64Star::from_entropy(),
    };

    let config = cli.anneal_config();
    let verbose = cli.verbose && !cli.quiet;
    let stats = anneal(&mut fp, &config, &mut rng, |round| {
        if verbose {
            eprintln!(
                "round {:>4}  T {:>12.2}  gen {:>6}  uphill {:>5}  reject {:>6}  best {}",
                round.round,
                round.temperature,
                round.generated,
                round.uphill,
                round.rejected,
                round.best_area
            );
        }
    });

    argon_io::write_placement(&cli.output, stats.best_area, &fp.design.blocks)?;

    if !cli.quiet {
        println!(
            "placed {} blocks in {} rounds ({} moves, {:.1}s): area {}",
            fp.design.block_count(),
            stats.rounds,
            stats.generated,
            stats.elapsed.as_secs_f64(),
            stats.best_area
        );
    }
    Ok(())
}
