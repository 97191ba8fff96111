//! Placement cost functions.
//!
//! Evaluates the quality of a placement as a weighted sum of bounding-box
//! area and half-perimeter wirelength (HPWL). Both terms live on the area's
//! order of magnitude: the HPWL term is rescaled by a baseline ratio that
//! the annealer re-captures at the start of every outer round, so the
//! temperature schedule behaves identically whether or not wirelength is
//! enabled.

use argon_floorplan::Design;

/// Weights for the placement cost function components.
#[derive(Debug, Clone, Copy)]
pub struct PlacementCost {
    /// Weight for the bounding-box area component.
    pub weight_area: f64,
    /// Weight for the wirelength (HPWL) component.
    pub weight_wirelength: f64,
}

impl Default for PlacementCost {
    fn default() -> Self {
        Self {
            weight_area: 1.0,
            weight_wirelength: 0.0,
        }
    }
}

/// Scaling baseline captured from a reference placement.
///
/// `hpwl_to_area` converts wirelength units into area units so the two cost
/// terms are comparable. Captured once per outer annealing round.
#[derive(Debug, Clone, Copy)]
pub struct CostBaseline {
    hpwl_to_area: f64,
}

impl CostBaseline {
    /// Captures a baseline from a reference area and wirelength.
    pub fn capture(area: i64, hpwl: f64) -> Self {
        let hpwl_to_area = if hpwl > 0.0 { area as f64 / hpwl } else { 1.0 };
        Self { hpwl_to_area }
    }
}

impl PlacementCost {
    /// Evaluates the cost of a placement with the given area and HPWL.
    ///
    /// With the default weights `(1, 0)` this is exactly the raw area.
    pub fn evaluate(&self, area: i64, hpwl: f64, baseline: &CostBaseline) -> f64 {
        self.weight_area * area as f64
            + self.weight_wirelength * hpwl * baseline.hpwl_to_area
    }

    /// Returns whether the wirelength term participates at all.
    pub fn uses_wirelength(&self) -> bool {
        self.weight_wirelength != 0.0
    }
}

/// Half-perimeter wirelength of a placement: the half-perimeter of the
/// bounding box of all block centers.
///
/// Minimizing it pulls blocks toward each other, a linear stand-in for
/// routing length when no netlist is available.
pub fn total_hpwl(design: &Design) -> f64 {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for block in &design.blocks {
        let (cx, cy) = block.center();
        min_x = min_x.min(cx);
        max_x = max_x.max(cx);
        min_y = min_y.min(cy);
        max_y = max_y.max(cy);
    }

    if design.blocks.is_empty() {
        return 0.0;
    }
    (max_x - min_x) + (max_y - min_y)
}
