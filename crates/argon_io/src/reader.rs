//! Input netlist parsing.
//!
//! The input is whitespace-delimited and token-based:
//!
//! ```text
//! NumHardBlocks <N>
//! HardBlock <name> <w> <h>          (N times)
//! NumSymGroups <M>
//! SymGroup <name> <cnt> [axis]      (M times, each followed by cnt of:)
//!   SymPair <a> <b>
//!   SymSelf <a>
//! ```
//!
//! The optional axis token (`Vertical`/`V` or `Horizontal`/`H`) after the
//! constraint count fixes the group's axis; without it the group defaults
//! to a vertical axis. A file may end after the hard blocks, which is
//! treated as zero symmetry groups.

use crate::error::ParseError;
use argon_floorplan::{Axis, Block, BlockId, Design, SymGroup, SymPair, SymSelf};
use std::iter::Peekable;
use std::path::Path;
use std::str::SplitWhitespace;

/// Cursor over whitespace-separated tokens.
struct Tokens<'a> {
    iter: Peekable<SplitWhitespace<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            iter: content.split_whitespace().peekable(),
        }
    }

    fn next(&mut self, expected: &'static str) -> Result<&'a str, ParseError> {
        self.iter
            .next()
            .ok_or(ParseError::UnexpectedEof { expected })
    }

    fn peek(&mut self) -> Option<&str> {
        self.iter.peek().copied()
    }

    fn expect_keyword(&mut self, keyword: &'static str) -> Result<(), ParseError> {
        let tok = self.next(keyword)?;
        if tok == keyword {
            Ok(())
        } else {
            Err(ParseError::Malformed {
                expected: keyword,
                found: tok.to_string(),
            })
        }
    }

    fn next_usize(&mut self, expected: &'static str) -> Result<usize, ParseError> {
        let tok = self.next(expected)?;
        tok.parse().map_err(|_| ParseError::Malformed {
            expected,
            found: tok.to_string(),
        })
    }

    fn next_dimension(&mut self, expected: &'static str) -> Result<i64, ParseError> {
        let tok = self.next(expected)?;
        match tok.parse::<i64>() {
            Ok(v) if v > 0 => Ok(v),
            _ => Err(ParseError::Malformed {
                expected,
                found: tok.to_string(),
            }),
        }
    }
}

/// Reads and parses a placement input file.
pub fn read_design(path: impl AsRef<Path>) -> Result<Design, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_design(&content)
}

/// Parses a placement input from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn parse_design(content: &str) -> Result<Design, ParseError> {
    let mut toks = Tokens::new(content);
    let mut design = Design::new();

    toks.expect_keyword("NumHardBlocks")?;
    let num_blocks = toks.next_usize("hard block count")?;
    for _ in 0..num_blocks {
        toks.expect_keyword("HardBlock")?;
        let name = toks.next("block name")?;
        let w = toks.next_dimension("block width")?;
        let h = toks.next_dimension("block height")?;
        if design.block_id(name).is_some() {
            return Err(ParseError::DuplicateBlock {
                name: name.to_string(),
            });
        }
        design.add_block(Block::new(name, w, h));
    }

    if toks.peek().is_none() {
        return Ok(design);
    }

    toks.expect_keyword("NumSymGroups")?;
    let num_groups = toks.next_usize("group count")?;
    for _ in 0..num_groups {
        toks.expect_keyword("SymGroup")?;
        let group_name = toks.next("group name")?.to_string();
        let constraint_count = toks.next_usize("constraint count")?;
        let axis = match toks.peek() {
            Some("Vertical") | Some("V") => {
                toks.next("axis")?;
                Axis::Vertical
            }
            Some("Horizontal") | Some("H") => {
                toks.next("axis")?;
                Axis::Horizontal
            }
            _ => Axis::Vertical,
        };

        let mut group = SymGroup::new(group_name, axis);
        for _ in 0..constraint_count {
            let kind = toks.next("constraint kind")?;
            match kind {
                "SymPair" => {
                    let a = resolve(&design, toks.next("pair member")?)?;
                    let b = resolve(&design, toks.next("pair member")?)?;
                    group.pairs.push(SymPair { a, b });
                }
                "SymSelf" => {
                    let block = resolve(&design, toks.next("self-symmetric block")?)?;
                    group.selfs.push(SymSelf { block });
                }
                other => {
                    return Err(ParseError::Malformed {
                        expected: "SymPair or SymSelf",
                        found: other.to_string(),
                    })
                }
            }
        }
        design.add_group(group);
    }

    Ok(design)
}

fn resolve(design: &Design, name: &str) -> Result<BlockId, ParseError> {
    design.block_id(name).ok_or_else(|| ParseError::UnknownBlock {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon_floorplan::GroupId;

    #[test]
    fn parse_blocks_only() {
        let design = parse_design(
            "NumHardBlocks 2\n\
             HardBlock m1 40 60\n\
             HardBlock m2 20 10\n",
        )
        .unwrap();
        assert_eq!(design.block_count(), 2);
        assert_eq!(design.groups.len(), 0);
        let m1 = design.block(design.block_id("m1").unwrap());
        assert_eq!((m1.w, m1.h), (40, 60));
    }

    #[test]
    fn parse_blocks_without_group_section() {
        let design = parse_design("NumHardBlocks 1\nHardBlock m1 5 5").unwrap();
        assert_eq!(design.block_count(), 1);
        assert!(design.groups.is_empty());
    }

    #[test]
    fn parse_empty_design() {
        let design = parse_design("NumHardBlocks 0\nNumSymGroups 0\n").unwrap();
        assert!(design.is_empty());
    }

    #[test]
    fn parse_groups_with_pairs_and_selfs() {
        let design = parse_design(
            "NumHardBlocks 3\n\
             HardBlock a 10 10\n\
             HardBlock b 10 10\n\
             HardBlock s 20 10\n\
             NumSymGroups 1\n\
             SymGroup sg0 2\n\
             SymPair a b\n\
             SymSelf s\n",
        )
        .unwrap();
        assert_eq!(design.groups.len(), 1);
        let g = &design.groups[0];
        assert_eq!(g.axis, Axis::Vertical);
        assert_eq!(g.pairs.len(), 1);
        assert_eq!(g.selfs.len(), 1);
        // Members got tagged with the group.
        let a = design.block(design.block_id("a").unwrap());
        assert_eq!(a.group, Some(GroupId::from_raw(0)));
    }

    #[test]
    fn parse_explicit_axis_tokens() {
        let design = parse_design(
            "NumHardBlocks 4\n\
             HardBlock a 4 4\n\
             HardBlock b 4 4\n\
             HardBlock c 4 4\n\
             HardBlock d 4 4\n\
             NumSymGroups 2\n\
             SymGroup sg0 1 Horizontal\n\
             SymPair a b\n\
             SymGroup sg1 1 V\n\
             SymPair c d\n",
        )
        .unwrap();
        assert_eq!(design.groups[0].axis, Axis::Horizontal);
        assert_eq!(design.groups[1].axis, Axis::Vertical);
    }

    #[test]
    fn unknown_block_reference_is_fatal() {
        let err = parse_design(
            "NumHardBlocks 1\n\
             HardBlock a 4 4\n\
             NumSymGroups 1\n\
             SymGroup sg0 1\n\
             SymPair a ghost\n",
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::UnknownBlock { name } if name == "ghost"));
    }

    #[test]
    fn duplicate_block_is_rejected() {
        let err = parse_design(
            "NumHardBlocks 2\n\
             HardBlock a 4 4\n\
             HardBlock a 5 5\n",
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::DuplicateBlock { name } if name == "a"));
    }

    #[test]
    fn malformed_count_is_rejected() {
        let err = parse_design("NumHardBlocks lots\n").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { .. }));
    }

    #[test]
    fn wrong_keyword_is_rejected() {
        let err = parse_design("SoftBlocks 1\n").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { expected, .. } if expected == "NumHardBlocks"));
    }

    #[test]
    fn truncated_block_line_is_rejected() {
        let err = parse_design("NumHardBlocks 1\nHardBlock m1 40\n").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { .. }));
    }

    #[test]
    fn nonpositive_dimension_is_rejected() {
        let err = parse_design("NumHardBlocks 1\nHardBlock m1 0 5\n").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { .. }));
    }

    #[test]
    fn unknown_constraint_kind_is_rejected() {
        let err = parse_design(
            "NumHardBlocks 1\n\
             HardBlock a 4 4\n\
             NumSymGroups 1\n\
             SymGroup sg0 1\n\
             SymTriple a a a\n",
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::Malformed { expected, .. } if expected == "SymPair or SymSelf"));
    }
}
