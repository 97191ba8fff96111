//! ASF islands: one symmetry group packed via representatives plus reflection.
//!
//! Only the representative half of a group ever enters the packer: one node
//! per mirrored pair (carrying the representative's full shape) and one node
//! per self-symmetric block (carrying the half of its shape that touches the
//! axis). After packing the half-plane, the mates are derived by a
//! closed-form reflection and the self-symmetric blocks are re-centered on
//! the axis, so the symmetry constraints hold exactly by construction.

use crate::block::Block;
use crate::ids::{BlockId, GroupId, NodeId};
use crate::symmetry::{Axis, SymGroup};
use crate::tree::{BStarTree, Slot};

/// How a representative node maps back onto the group's blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepKind {
    /// Representative of a mirrored pair; `mate` is placed by reflection.
    Pair {
        /// The reflected half of the pair.
        mate: BlockId,
    },
    /// A self-symmetric block, packed as its axis-side half.
    SelfHalf,
}

/// Payload of an island tree node.
#[derive(Debug, Clone, Copy)]
pub struct Rep {
    /// Block whose shape the node carries.
    pub block: BlockId,
    /// Role of the node within the group.
    pub kind: RepKind,
}

/// A symmetry island: the ASF-B\*-tree of one group plus its packed
/// bounding box and axis position.
///
/// After [`pack`](AsfIsland::pack) the island's interior occupies
/// `[0, bbox_w) × [0, bbox_h)` and `axis_pos` is the axis coordinate in that
/// island-local frame. The HB-tree later translates the whole island (and
/// its axis) to a global position.
#[derive(Debug, Clone)]
pub struct AsfIsland {
    group: GroupId,
    axis: Axis,
    tree: BStarTree<Rep>,
    pair_reps: Vec<NodeId>,
    self_reps: Vec<NodeId>,
    block_ids: Vec<BlockId>,
    axis_pos: i64,
    bbox_w: i64,
    bbox_h: i64,
}

impl AsfIsland {
    /// Builds the island for `group`, including its initial tree.
    ///
    /// Pair representatives form a balanced tree (descending area, median
    /// root). Self representatives are then spliced onto the spine opposite
    /// the axis (the right-child chain for a vertical axis, the left-child
    /// chain for a horizontal one), so their packed position stays flush
    /// with the axis and the post-pack re-centering cannot collide with
    /// neighbors.
    pub fn new(group_id: GroupId, group: &SymGroup, blocks: &[Block]) -> Self {
        let mut island = Self {
            group: group_id,
            axis: group.axis,
            tree: BStarTree::new(),
            pair_reps: Vec::with_capacity(group.pairs.len()),
            self_reps: Vec::with_capacity(group.selfs.len()),
            block_ids: Vec::with_capacity(group.block_count()),
            axis_pos: 0,
            bbox_w: 0,
            bbox_h: 0,
        };

        for pair in &group.pairs {
            let id = island.tree.add_node(
                Rep {
                    block: pair.b,
                    kind: RepKind::Pair { mate: pair.a },
                },
                0,
                0,
            );
            island.pair_reps.push(id);
            island.block_ids.push(pair.a);
            island.block_ids.push(pair.b);
        }
        for sym_self in &group.selfs {
            let id = island.tree.add_node(
                Rep {
                    block: sym_self.block,
                    kind: RepKind::SelfHalf,
                },
                0,
                0,
            );
            island.self_reps.push(id);
            island.block_ids.push(sym_self.block);
        }

        island.refresh_shapes(blocks);
        island.tree.build_balanced_by_area(&island.pair_reps);
        let spine = match island.axis {
            Axis::Vertical => Slot::Right,
            Axis::Horizontal => Slot::Left,
        };
        for i in 0..island.self_reps.len() {
            island.tree.splice_spine(island.self_reps[i], spine);
        }
        island
    }

    /// Reloads every node's packing shape from the blocks' current
    /// rotations. Pair representatives carry the full rotated shape; self
    /// representatives carry half of it along the axis direction.
    pub fn refresh_shapes(&mut self, blocks: &[Block]) {
        for &id in &self.pair_reps {
            let b = &blocks[self.tree.node(id).payload.block.index()];
            self.tree.set_shape(id, b.rotated_w(), b.rotated_h());
        }
        for &id in &self.self_reps {
            let b = &blocks[self.tree.node(id).payload.block.index()];
            // Halves round down; clamp so a 1-unit-wide block still yields a
            // packable node.
            let (w, h) = match self.axis {
                Axis::Vertical => ((b.rotated_w() / 2).max(1), b.rotated_h()),
                Axis::Horizontal => (b.rotated_w(), (b.rotated_h() / 2).max(1)),
            };
            self.tree.set_shape(id, w, h);
        }
    }

    /// Packs the representative half-plane, reflects the mates, re-centers
    /// the self-symmetric blocks, and normalizes the island to the origin.
    ///
    /// Afterwards every block of the group sits at non-negative
    /// island-local coordinates, the bounding box starts at `(0, 0)`, and
    /// `axis_pos` holds the axis coordinate in that frame.
    pub fn pack(&mut self, blocks: &mut [Block]) {
        if self.tree.is_empty() {
            self.bbox_w = 0;
            self.bbox_h = 0;
            self.axis_pos = 0;
            return;
        }

        self.refresh_shapes(blocks);
        self.tree.pack();

        // The axis sits at coordinate 0 of the packed half-plane; mates and
        // the outer halves of self-symmetric blocks land at negative
        // coordinates and the final shift normalizes everything.
        let mut min_x = i64::MAX;
        let mut min_y = i64::MAX;
        let mut max_x = i64::MIN;
        let mut max_y = i64::MIN;
        let mut grow = |x: i64, y: i64, w: i64, h: i64| {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x + w);
            max_y = max_y.max(y + h);
        };

        for id in self.tree.ids() {
            let node = self.tree.node(id);
            let rep = node.payload;
            {
                let b = &mut blocks[rep.block.index()];
                b.x = node.x;
                b.y = node.y;
            }
            match rep.kind {
                RepKind::Pair { mate } => {
                    let (rx, ry, rw, rh, rot) = {
                        let b = &blocks[rep.block.index()];
                        (b.x, b.y, b.rotated_w(), b.rotated_h(), b.rotated)
                    };
                    grow(rx, ry, rw, rh);
                    let m = &mut blocks[mate.index()];
                    m.rotated = rot;
                    match self.axis {
                        Axis::Vertical => {
                            m.x = -rx - rw;
                            m.y = ry;
                        }
                        Axis::Horizontal => {
                            m.x = rx;
                            m.y = -ry - rh;
                        }
                    }
                    grow(m.x, m.y, rw, rh);
                }
                RepKind::SelfHalf => {
                    let b = &mut blocks[rep.block.index()];
                    match self.axis {
                        Axis::Vertical => b.x = -(b.rotated_w() / 2),
                        Axis::Horizontal => b.y = -(b.rotated_h() / 2),
                    }
                    grow(b.x, b.y, b.rotated_w(), b.rotated_h());
                }
            }
        }

        let dx = -min_x;
        let dy = -min_y;
        for &id in &self.block_ids {
            let b = &mut blocks[id.index()];
            b.x += dx;
            b.y += dy;
        }
        self.bbox_w = max_x - min_x;
        self.bbox_h = max_y - min_y;
        self.axis_pos = match self.axis {
            Axis::Vertical => dx,
            Axis::Horizontal => dy,
        };
    }

    /// Translates the island's blocks and axis by a global offset.
    pub fn translate(&mut self, dx: i64, dy: i64, blocks: &mut [Block]) {
        for &id in &self.block_ids {
            let b = &mut blocks[id.index()];
            b.x += dx;
            b.y += dy;
        }
        self.axis_pos += match self.axis {
            Axis::Vertical => dx,
            Axis::Horizontal => dy,
        };
    }

    /// Mirrors the island's internal tree; the hierarchical equivalent of a
    /// 90°-free "rotation" for a rigid island rectangle.
    pub fn mirror(&mut self) {
        self.tree.mirror();
    }

    /// Flips the rotation of the block(s) behind a node. Pair nodes flip
    /// both halves. Returns the affected blocks for the undo record.
    pub fn rotate_node(&self, node: NodeId, blocks: &mut [Block]) -> (BlockId, Option<BlockId>) {
        let rep = self.tree.node(node).payload;
        blocks[rep.block.index()].rotate();
        match rep.kind {
            RepKind::Pair { mate } => {
                blocks[mate.index()].rotate();
                (rep.block, Some(mate))
            }
            RepKind::SelfHalf => (rep.block, None),
        }
    }

    /// Exchanges the tree positions of two pair representatives.
    ///
    /// Self representatives are excluded by construction: their place on
    /// the axis-opposing spine is a structural invariant of the island.
    pub fn swap_pair_reps(&mut self, a: NodeId, b: NodeId) {
        debug_assert!(self.pair_reps.contains(&a) && self.pair_reps.contains(&b));
        self.tree.swap_payloads(a, b);
    }

    /// Detaches a pair-representative leaf, returning its vacated slot.
    pub fn detach_leaf(&mut self, leaf: NodeId) -> (NodeId, Slot) {
        self.tree.detach_leaf(leaf)
    }

    /// Reattaches a detached node into a free slot.
    pub fn attach_leaf(&mut self, leaf: NodeId, parent: NodeId, slot: Slot) {
        self.tree.attach_leaf(leaf, parent, slot)
    }

    /// Pair-representative positions that are currently leaves and not the
    /// tree root.
    pub fn movable_pair_leaves(&self) -> Vec<NodeId> {
        self.pair_reps
            .iter()
            .copied()
            .filter(|&id| {
                let n = self.tree.node(id);
                n.left.is_none() && n.right.is_none() && n.parent.is_some()
            })
            .collect()
    }

    /// Free insertion slots on pair-representative nodes, excluding `skip`.
    pub fn pair_free_slots(&self, skip: NodeId) -> Vec<(NodeId, Slot)> {
        self.tree
            .free_slots()
            .into_iter()
            .filter(|&(id, _)| id != skip && self.pair_reps.contains(&id))
            .collect()
    }

    /// The symmetry group this island packs.
    pub fn group_id(&self) -> GroupId {
        self.group
    }

    /// The group's axis direction.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Axis coordinate, in whatever frame the island currently sits in.
    pub fn axis_pos(&self) -> i64 {
        self.axis_pos
    }

    /// Bounding box `(w, h)` of the last pack.
    pub fn bbox(&self) -> (i64, i64) {
        (self.bbox_w, self.bbox_h)
    }

    /// All blocks of the group, mates included.
    pub fn block_ids(&self) -> &[BlockId] {
        &self.block_ids
    }

    /// Total representative nodes (pairs plus selfs).
    pub fn node_count(&self) -> usize {
        self.pair_reps.len() + self.self_reps.len()
    }

    /// Number of pair representatives.
    pub fn pair_rep_count(&self) -> usize {
        self.pair_reps.len()
    }

    /// Representative node by dense index: pairs first, then selfs.
    pub fn node_at(&self, idx: usize) -> NodeId {
        if idx < self.pair_reps.len() {
            self.pair_reps[idx]
        } else {
            self.self_reps[idx - self.pair_reps.len()]
        }
    }

    /// Pair-representative node by dense index.
    pub fn pair_rep_at(&self, idx: usize) -> NodeId {
        self.pair_reps[idx]
    }
}
