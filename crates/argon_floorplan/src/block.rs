//! Hard blocks: fixed-shape rectangles with mutable placement state.

use crate::ids::GroupId;
use serde::{Deserialize, Serialize};

/// A hard block: an immutable `w × h` rectangle that the placer may
/// translate and rotate by 90°, but never resize.
///
/// `x`/`y` address the lower-left corner. `group` is `Some` when the block
/// belongs to a symmetry group and `None` for solo blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block name from the input netlist.
    pub name: String,
    /// Width of the unrotated shape.
    pub w: i64,
    /// Height of the unrotated shape.
    pub h: i64,
    /// Lower-left x coordinate of the current placement.
    pub x: i64,
    /// Lower-left y coordinate of the current placement.
    pub y: i64,
    /// Whether the block is rotated 90°.
    pub rotated: bool,
    /// Symmetry group this block belongs to, if any.
    pub group: Option<GroupId>,
}

impl Block {
    /// Creates an unplaced, unrotated solo block.
    pub fn new(name: impl Into<String>, w: i64, h: i64) -> Self {
        Self {
            name: name.into(),
            w,
            h,
            x: 0,
            y: 0,
            rotated: false,
            group: None,
        }
    }

    /// Width of the block as currently oriented.
    pub fn rotated_w(&self) -> i64 {
        if self.rotated {
            self.h
        } else {
            self.w
        }
    }

    /// Height of the block as currently oriented.
    pub fn rotated_h(&self) -> i64 {
        if self.rotated {
            self.w
        } else {
            self.h
        }
    }

    /// Flips the 90° rotation flag.
    pub fn rotate(&mut self) {
        self.rotated = !self.rotated;
    }

    /// Returns whether the block belongs to no symmetry group.
    pub fn is_solo(&self) -> bool {
        self.group.is_none()
    }

    /// Geometric center of the current placement, as `(cx, cy)`.
    pub fn center(&self) -> (f64, f64) {
        (
            self.x as f64 + self.rotated_w() as f64 / 2.0,
            self.y as f64 + self.rotated_h() as f64 / 2.0,
        )
    }

    /// Area of the block, invariant under rotation.
    pub fn area(&self) -> i64 {
        self.w * self.h
    }
}
