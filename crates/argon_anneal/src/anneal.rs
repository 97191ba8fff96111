//! Simulated-annealing driver.
//!
//! Starting from the initial packed floorplan, repeatedly applies one of the
//! four reversible move kinds (rotate, outer swap, island-internal move,
//! leaf relocation), packs, and accepts or rejects the result by the
//! Metropolis criterion. The temperature decreases geometrically each round;
//! the best placement ever seen is memoized and restored at the end, so the
//! reported cost is never worse than any intermediate solution.

use crate::config::AnnealConfig;
use crate::cost::{total_hpwl, CostBaseline};
use argon_floorplan::Floorplan;
use rand::Rng;
use std::time::{Duration, Instant};

/// Why the annealer stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The temperature fell below the configured minimum.
    Frozen,
    /// Too many consecutive rounds rejected every move.
    RejectStreak,
    /// The wall-clock budget ran out.
    Deadline,
}

/// Statistics for one temperature round.
#[derive(Debug, Clone, Copy)]
pub struct RoundStats {
    /// Round index, starting at 0.
    pub round: u32,
    /// Temperature during the round.
    pub temperature: f64,
    /// Moves generated (applicable moves only).
    pub generated: u64,
    /// Accepted cost-increasing moves.
    pub uphill: u64,
    /// Rejected moves.
    pub rejected: u64,
    /// Best area seen so far.
    pub best_area: i64,
}

/// Aggregate statistics for a whole annealing run.
#[derive(Debug, Clone, Copy)]
pub struct AnnealStats {
    /// Number of temperature rounds completed.
    pub rounds: u32,
    /// Total moves generated.
    pub generated: u64,
    /// Total accepted cost-increasing moves.
    pub uphill: u64,
    /// Total rejected moves.
    pub rejected: u64,
    /// Area of the best (and final) placement.
    pub best_area: i64,
    /// Why the run ended.
    pub stop_reason: StopReason,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

/// Runs simulated annealing on a floorplan.
///
/// On return the floorplan holds the best placement encountered and
/// [`AnnealStats::best_area`] is its bounding-box area. `on_round` is
/// invoked once per temperature round, after the round completes.
pub fn anneal<R: Rng>(
    fp: &mut Floorplan,
    config: &AnnealConfig,
    rng: &mut R,
    mut on_round: impl FnMut(&RoundStats),
) -> AnnealStats {
    let start = Instant::now();

    let mut area = fp.pack();
    let mut hpwl = total_hpwl(&fp.design);
    let mut best_area = area;
    let mut best_hpwl = hpwl;
    let mut best_blocks = fp.snapshot_blocks();

    let mut stats = AnnealStats {
        rounds: 0,
        generated: 0,
        uphill: 0,
        rejected: 0,
        best_area,
        stop_reason: StopReason::Frozen,
        elapsed: Duration::ZERO,
    };

    if fp.block_count() == 0 {
        stats.elapsed = start.elapsed();
        return stats;
    }

    let baseline = CostBaseline::capture(area, hpwl);
    let initial_cost = config.cost.evaluate(area, hpwl, &baseline);
    let mut temperature = config
        .initial_temperature
        .unwrap_or(initial_cost / 10.0)
        .max(f64::MIN_POSITIVE);

    let uphill_budget = (config.moves_per_block * fp.block_count()) as u64;
    let generation_budget = 2 * uphill_budget;
    let mut reject_streak = 0u32;

    loop {
        // Per-round baseline: keeps the wirelength term on the area's
        // magnitude even as both evolve.
        let baseline = CostBaseline::capture(area, hpwl);
        let mut curr_cost = config.cost.evaluate(area, hpwl, &baseline);
        let mut best_cost = config.cost.evaluate(best_area, best_hpwl, &baseline);

        let mut generated = 0u64;
        let mut uphill = 0u64;
        let mut rejected = 0u64;
        let mut deadline_hit = false;

        while uphill <= uphill_budget && generated <= generation_budget {
            if start.elapsed() >= config.time_limit {
                deadline_hit = true;
                break;
            }
            // Inapplicable draws (e.g. island moves with no groups) are
            // skipped without counting toward the round.
            let Some(op) = fp.random_move(rng) else {
                continue;
            };
            let new_area = fp.pack();
            let new_hpwl = total_hpwl(&fp.design);
            let new_cost = config.cost.evaluate(new_area, new_hpwl, &baseline);
            let delta = new_cost - curr_cost;
            generated += 1;

            if delta <= 0.0 || rng.gen::<f64>() < (-delta / temperature).exp() {
                curr_cost = new_cost;
                area = new_area;
                hpwl = new_hpwl;
                if delta > 0.0 {
                    uphill += 1;
                }
                if new_cost < best_cost {
                    best_cost = new_cost;
                    best_area = new_area;
                    best_hpwl = new_hpwl;
                    best_blocks = fp.snapshot_blocks();
                }
            } else {
                fp.undo(op);
                area = fp.pack();
                hpwl = total_hpwl(&fp.design);
                rejected += 1;
            }
        }

        stats.rounds += 1;
        stats.generated += generated;
        stats.uphill += uphill;
        stats.rejected += rejected;
        stats.best_area = best_area;
        on_round(&RoundStats {
            round: stats.rounds - 1,
            temperature,
            generated,
            uphill,
            rejected,
            best_area,
        });

        if generated > 0 && generated == rejected {
            reject_streak += 1;
        } else {
            reject_streak = 0;
        }
        temperature *= config.cooling;

        if deadline_hit {
            stats.stop_reason = StopReason::Deadline;
            break;
        }
        if reject_streak >= config.max_reject_rounds {
            stats.stop_reason = StopReason::RejectStreak;
            break;
        }
        if temperature < config.min_temperature {
            stats.stop_reason = StopReason::Frozen;
            break;
        }
    }

    fp.restore_blocks(best_blocks);
    stats.best_area = best_area;
    stats.elapsed = start.elapsed();
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon_common::Xorshift64Star;
    use argon_floorplan::{Axis, Block, Design, SymGroup, SymPair, SymSelf};

    fn quick_config() -> AnnealConfig {
        AnnealConfig {
            time_limit: Duration::from_secs(10),
            ..AnnealConfig::default()
        }
    }

    /// Bounding-box area computed straight from the block coordinates.
    fn placed_area(fp: &Floorplan) -> i64 {
        let mut max_x = 0;
        let mut max_y = 0;
        for b in &fp.design.blocks {
            max_x = max_x.max(b.x + b.rotated_w());
            max_y = max_y.max(b.y + b.rotated_h());
        }
        max_x * max_y
    }

    #[test]
    fn empty_design_reports_zero_area() {
        let mut fp = Floorplan::new(Design::new());
        let mut rng = Xorshift64Star::new(1);
        let stats = anneal(&mut fp, &quick_config(), &mut rng, |_| {});
        assert_eq!(stats.best_area, 0);
        assert_eq!(stats.generated, 0);
    }

    #[test]
    fn single_block_keeps_its_area() {
        let mut d = Design::new();
        d.add_block(Block::new("m", 6, 4));
        let mut fp = Floorplan::new(d);
        let mut rng = Xorshift64Star::new(2);
        let stats = anneal(&mut fp, &quick_config(), &mut rng, |_| {});
        assert_eq!(stats.best_area, 24);
        assert_eq!(placed_area(&fp), 24);
    }

    #[test]
    fn best_area_is_monotone_over_rounds() {
        let mut d = Design::new();
        for i in 0..8 {
            d.add_block(Block::new(format!("m{i}"), 3 + (i % 4), 2 + (i % 3)));
        }
        let mut fp = Floorplan::new(d);
        let mut rng = Xorshift64Star::new(3);
        let mut history = Vec::new();
        anneal(&mut fp, &quick_config(), &mut rng, |r| {
            history.push(r.best_area)
        });
        assert!(!history.is_empty());
        for w in history.windows(2) {
            assert!(w[1] <= w[0], "best area increased");
        }
    }

    #[test]
    fn final_placement_matches_reported_best() {
        let mut d = Design::new();
        for i in 0..6 {
            d.add_block(Block::new(format!("m{i}"), 4, 6));
        }
        let mut fp = Floorplan::new(d);
        let mut rng = Xorshift64Star::new(4);
        let stats = anneal(&mut fp, &quick_config(), &mut rng, |_| {});
        assert_eq!(placed_area(&fp), stats.best_area);
    }

    #[test]
    fn zero_time_budget_stops_at_deadline_with_initial_best() {
        let mut d = Design::new();
        for i in 0..5 {
            d.add_block(Block::new(format!("m{i}"), 5, 5));
        }
        let mut fp = Floorplan::new(d);
        let initial = fp.pack();
        let mut rng = Xorshift64Star::new(5);
        let cfg = AnnealConfig {
            time_limit: Duration::ZERO,
            ..AnnealConfig::default()
        };
        let stats = anneal(&mut fp, &cfg, &mut rng, |_| {});
        assert_eq!(stats.stop_reason, StopReason::Deadline);
        assert_eq!(stats.best_area, initial);
        assert_eq!(placed_area(&fp), initial);
    }

    #[test]
    fn symmetry_survives_a_full_run() {
        let mut d = Design::new();
        let a = d.add_block(Block::new("a", 10, 6));
        let b = d.add_block(Block::new("b", 10, 6));
        let s = d.add_block(Block::new("s", 12, 4));
        d.add_block(Block::new("solo", 5, 5));
        let mut g = SymGroup::new("sg0", Axis::Vertical);
        g.pairs.push(SymPair { a, b });
        g.selfs.push(SymSelf { block: s });
        d.add_group(g);

        let mut fp = Floorplan::new(d);
        let mut rng = Xorshift64Star::new(6);
        anneal(&mut fp, &quick_config(), &mut rng, |_| {});

        // The memoized best placement came out of a pack, so the pair must
        // still mirror and the self block still straddle its axis.
        let blocks = &fp.design.blocks;
        let (a, b, s) = (&blocks[0], &blocks[1], &blocks[2]);
        assert_eq!(a.y, b.y);
        assert_eq!(a.rotated, b.rotated);
        let axis_twice = a.x + b.x + b.rotated_w();
        assert_eq!(axis_twice % 2, 0);
        assert_eq!(2 * (s.x + s.rotated_w() / 2), axis_twice);
    }

    #[test]
    fn uphill_moves_are_counted() {
        let mut d = Design::new();
        for i in 0..10 {
            d.add_block(Block::new(format!("m{i}"), 2 + (i % 5), 3));
        }
        let mut fp = Floorplan::new(d);
        let mut rng = Xorshift64Star::new(7);
        let stats = anneal(&mut fp, &quick_config(), &mut rng, |_| {});
        assert!(stats.generated > 0);
        assert!(stats.uphill + stats.rejected <= stats.generated);
    }
}
