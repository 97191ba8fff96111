//! Reversible perturbations on the two-level floorplan.
//!
//! Every move captures the minimum state needed to invert itself exactly:
//! a rotation remembers the flipped blocks, a swap remembers both node
//! positions, a leaf move remembers the vacated and the occupied slot.
//! Rejecting a move is one [`Floorplan::undo`] plus one repack.

use crate::floorplan::Floorplan;
use crate::hbtree::HbEntry;
use crate::ids::{BlockId, GroupId, NodeId};
use crate::tree::Slot;
use rand::Rng;

/// Record of a leaf relocation: where the leaf came from and where it went.
#[derive(Debug, Clone, Copy)]
pub struct LeafMove {
    /// The relocated leaf.
    pub leaf: NodeId,
    /// Parent it was detached from.
    pub from_parent: NodeId,
    /// Slot it occupied there.
    pub from_slot: Slot,
    /// Parent it was attached to.
    pub to_parent: NodeId,
    /// Slot it occupies there now.
    pub to_slot: Slot,
}

/// Inverse record of one applied move.
#[derive(Debug, Clone, Copy)]
pub enum UndoOp {
    /// A rotation flip; flipping again restores it. Pair rotations carry
    /// the mate so both halves flip back together.
    Rotate {
        /// The rotated block.
        block: BlockId,
        /// Its pair mate, if the rotation came from a pair representative.
        mate: Option<BlockId>,
    },
    /// An island mirror; mirroring again restores it.
    MirrorIsland {
        /// The mirrored island.
        island: GroupId,
    },
    /// An outer-tree position swap; swapping again restores it.
    SwapNodes {
        /// First swapped node.
        a: NodeId,
        /// Second swapped node.
        b: NodeId,
    },
    /// A pair-representative swap inside one island.
    SwapPairReps {
        /// The island whose tree was perturbed.
        island: GroupId,
        /// First swapped representative.
        a: NodeId,
        /// Second swapped representative.
        b: NodeId,
    },
    /// An outer-tree leaf relocation.
    MoveLeaf(LeafMove),
    /// A leaf relocation inside one island.
    MoveIslandLeaf {
        /// The island whose tree was perturbed.
        island: GroupId,
        /// The relocation record.
        mv: LeafMove,
    },
}

/// Picks two distinct indices in `0..n`. Requires `n >= 2`.
fn two_distinct<R: Rng>(rng: &mut R, n: usize) -> (usize, usize) {
    let a = rng.gen_range(0..n);
    let mut b = rng.gen_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}

impl Floorplan {
    /// Applies one random perturbation, chosen uniformly over the four move
    /// kinds. Returns `None` when the chosen kind is not applicable to the
    /// current floorplan (for example an island move with no groups);
    /// callers skip such draws without counting them.
    pub fn random_move<R: Rng>(&mut self, rng: &mut R) -> Option<UndoOp> {
        match rng.gen_range(0..4u32) {
            0 => self.rotate_random(rng),
            1 => self.swap_random(rng),
            2 => self.island_move_random(rng),
            _ => self.move_leaf_random(rng),
        }
    }

    /// Rotates a random outer node: a solo block flips its rotation, an
    /// island mirrors.
    pub fn rotate_random<R: Rng>(&mut self, rng: &mut R) -> Option<UndoOp> {
        let n = self.hb.node_count();
        if n == 0 {
            return None;
        }
        let node = self.hb.node_at(rng.gen_range(0..n));
        match self.hb.rotate_node(node, &mut self.design.blocks) {
            HbEntry::Solo(block) => Some(UndoOp::Rotate { block, mate: None }),
            HbEntry::Island(island) => Some(UndoOp::MirrorIsland { island }),
        }
    }

    /// Exchanges the positions of two random outer nodes.
    pub fn swap_random<R: Rng>(&mut self, rng: &mut R) -> Option<UndoOp> {
        let n = self.hb.node_count();
        if n < 2 {
            return None;
        }
        let (i, j) = two_distinct(rng, n);
        let a = self.hb.node_at(i);
        let b = self.hb.node_at(j);
        self.hb.swap_nodes(a, b);
        Some(UndoOp::SwapNodes { a, b })
    }

    /// Relocates a random outer-tree leaf to a different free slot.
    pub fn move_leaf_random<R: Rng>(&mut self, rng: &mut R) -> Option<UndoOp> {
        if self.hb.node_count() < 2 {
            return None;
        }
        let leaves = self.hb.movable_leaves();
        if leaves.is_empty() {
            return None;
        }
        let leaf = leaves[rng.gen_range(0..leaves.len())];
        let (from_parent, from_slot) = self.hb.detach_leaf(leaf);
        let slots: Vec<(NodeId, Slot)> = self
            .hb
            .free_slots_excluding(leaf)
            .into_iter()
            .filter(|&(p, s)| !(p == from_parent && s == from_slot))
            .collect();
        if slots.is_empty() {
            self.hb.attach_leaf(leaf, from_parent, from_slot);
            return None;
        }
        let (to_parent, to_slot) = slots[rng.gen_range(0..slots.len())];
        self.hb.attach_leaf(leaf, to_parent, to_slot);
        Some(UndoOp::MoveLeaf(LeafMove {
            leaf,
            from_parent,
            from_slot,
            to_parent,
            to_slot,
        }))
    }

    /// Perturbs the interior of a random island: rotates one representative,
    /// swaps two pair representatives, or relocates a pair-representative
    /// leaf.
    pub fn island_move_random<R: Rng>(&mut self, rng: &mut R) -> Option<UndoOp> {
        let islands = self.hb.island_count();
        if islands == 0 {
            return None;
        }
        let g = GroupId::from_raw(rng.gen_range(0..islands) as u32);
        match rng.gen_range(0..3u32) {
            0 => {
                let count = self.hb.island(g).node_count();
                if count == 0 {
                    return None;
                }
                let node = self.hb.island(g).node_at(rng.gen_range(0..count));
                let (block, mate) = self.hb.island(g).rotate_node(node, &mut self.design.blocks);
                Some(UndoOp::Rotate { block, mate })
            }
            1 => {
                let pairs = self.hb.island(g).pair_rep_count();
                if pairs < 2 {
                    return None;
                }
                let (i, j) = two_distinct(rng, pairs);
                let a = self.hb.island(g).pair_rep_at(i);
                let b = self.hb.island(g).pair_rep_at(j);
                self.hb.island_mut(g).swap_pair_reps(a, b);
                Some(UndoOp::SwapPairReps { island: g, a, b })
            }
            _ => {
                let leaves = self.hb.island(g).movable_pair_leaves();
                if leaves.is_empty() {
                    return None;
                }
                let leaf = leaves[rng.gen_range(0..leaves.len())];
                let (from_parent, from_slot) = self.hb.island_mut(g).detach_leaf(leaf);
                let slots: Vec<(NodeId, Slot)> = self
                    .hb
                    .island(g)
                    .pair_free_slots(leaf)
                    .into_iter()
                    .filter(|&(p, s)| !(p == from_parent && s == from_slot))
                    .collect();
                if slots.is_empty() {
                    self.hb.island_mut(g).attach_leaf(leaf, from_parent, from_slot);
                    return None;
                }
                let (to_parent, to_slot) = slots[rng.gen_range(0..slots.len())];
                self.hb.island_mut(g).attach_leaf(leaf, to_parent, to_slot);
                Some(UndoOp::MoveIslandLeaf {
                    island: g,
                    mv: LeafMove {
                        leaf,
                        from_parent,
                        from_slot,
                        to_parent,
                        to_slot,
                    },
                })
            }
        }
    }

    /// Exactly inverts a previously applied move. A subsequent pack
    /// reproduces the pre-move coordinates bit for bit.
    pub fn undo(&mut self, op: UndoOp) {
        match op {
            UndoOp::Rotate { block, mate } => {
                self.design.block_mut(block).rotate();
                if let Some(m) = mate {
                    self.design.block_mut(m).rotate();
                }
            }
            UndoOp::MirrorIsland { island } => self.hb.island_mut(island).mirror(),
            UndoOp::SwapNodes { a, b } => self.hb.swap_nodes(a, b),
            UndoOp::SwapPairReps { island, a, b } => {
                self.hb.island_mut(island).swap_pair_reps(a, b)
            }
            UndoOp::MoveLeaf(mv) => {
                self.hb.detach_leaf(mv.leaf);
                self.hb.attach_leaf(mv.leaf, mv.from_parent, mv.from_slot);
            }
            UndoOp::MoveIslandLeaf { island, mv } => {
                let isl = self.hb.island_mut(island);
                isl.detach_leaf(mv.leaf);
                isl.attach_leaf(mv.leaf, mv.from_parent, mv.from_slot);
            }
        }
    }
}
