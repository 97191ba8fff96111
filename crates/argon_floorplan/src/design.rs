//! The placement problem instance: blocks plus symmetry groups.

use crate::block::Block;
use crate::ids::{BlockId, GroupId};
use crate::symmetry::SymGroup;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A complete placement problem: every hard block and every symmetry group.
///
/// Blocks are stored in input order and addressed by [`BlockId`]. Adding a
/// group tags its member blocks with the group's [`GroupId`], so
/// [`Block::is_solo`] is meaningful as soon as the design is assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Design {
    /// All hard blocks, in input order.
    pub blocks: Vec<Block>,
    /// All symmetry groups, in input order.
    pub groups: Vec<SymGroup>,
    /// Auxiliary index: block name to ID (rebuilt on deserialization).
    #[serde(skip)]
    block_by_name: HashMap<String, BlockId>,
}

impl Design {
    /// Creates an empty design.
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            groups: Vec::new(),
            block_by_name: HashMap::new(),
        }
    }

    /// Adds a block and returns its ID.
    pub fn add_block(&mut self, block: Block) -> BlockId {
        let id = BlockId::from_raw(self.blocks.len() as u32);
        self.block_by_name.insert(block.name.clone(), id);
        self.blocks.push(block);
        id
    }

    /// Adds a symmetry group, tagging its member blocks, and returns its ID.
    pub fn add_group(&mut self, group: SymGroup) -> GroupId {
        let id = GroupId::from_raw(self.groups.len() as u32);
        for bid in group.block_ids() {
            self.blocks[bid.index()].group = Some(id);
        }
        self.groups.push(group);
        id
    }

    /// Returns the block with the given ID.
    pub fn block(&self, id: BlockId) -> &Block {
        &self.blocks[id.index()]
    }

    /// Returns a mutable reference to the block with the given ID.
    pub fn block_mut(&mut self, id: BlockId) -> &mut Block {
        &mut self.blocks[id.index()]
    }

    /// Returns the group with the given ID.
    pub fn group(&self, id: GroupId) -> &SymGroup {
        &self.groups[id.index()]
    }

    /// Looks a block up by name.
    pub fn block_id(&self, name: &str) -> Option<BlockId> {
        self.block_by_name.get(name).copied()
    }

    /// Number of blocks in the design.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` if the design has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// IDs of all blocks outside any symmetry group.
    pub fn solo_ids(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_solo())
            .map(|(i, _)| BlockId::from_raw(i as u32))
    }

    /// Rebuilds the name index after deserialization.
    pub fn rebuild_indices(&mut self) {
        self.block_by_name.clear();
        for (i, block) in self.blocks.iter().enumerate() {
            self.block_by_name
                .insert(block.name.clone(), BlockId::from_raw(i as u32));
        }
    }
}

impl Default for Design {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symmetry::{Axis, SymPair, SymSelf};

    fn sample_design() -> Design {
        let mut d = Design::new();
        let a = d.add_block(Block::new("a", 10, 10));
        let b = d.add_block(Block::new("b", 10, 10));
        d.add_block(Block::new("solo", 5, 5));
        let s = d.add_block(Block::new("s", 20, 10));
        let mut g = SymGroup::new("sg0", Axis::Vertical);
        g.pairs.push(SymPair { a, b });
        g.selfs.push(SymSelf { block: s });
        d.add_group(g);
        d
    }

    #[test]
    fn add_group_tags_members() {
        let d = sample_design();
        assert_eq!(d.block(BlockId::from_raw(0)).group, Some(GroupId::from_raw(0)));
        assert_eq!(d.block(BlockId::from_raw(1)).group, Some(GroupId::from_raw(0)));
        assert!(d.block(BlockId::from_raw(2)).is_solo());
        assert_eq!(d.block(BlockId::from_raw(3)).group, Some(GroupId::from_raw(0)));
    }

    #[test]
    fn solo_ids_skip_group_members() {
        let d = sample_design();
        let solos: Vec<u32> = d.solo_ids().map(BlockId::as_raw).collect();
        assert_eq!(solos, vec![2]);
    }

    #[test]
    fn block_lookup_by_name() {
        let d = sample_design();
        assert_eq!(d.block_id("solo"), Some(BlockId::from_raw(2)));
        assert_eq!(d.block_id("nope"), None);
    }

    #[test]
    fn empty_design() {
        let d = Design::new();
        assert!(d.is_empty());
        assert_eq!(d.block_count(), 0);
    }

    #[test]
    fn serde_roundtrip_rebuilds_index() {
        let d = sample_design();
        let json = serde_json::to_string(&d).unwrap();
        let mut restored: Design = serde_json::from_str(&json).unwrap();
        restored.rebuild_indices();
        assert_eq!(restored.block_count(), d.block_count());
        assert_eq!(restored.block_id("s"), Some(BlockId::from_raw(3)));
    }
}
