//! Placement output serialization.
//!
//! ```text
//! Area <area>
//!
//! NumHardBlocks <N>
//! <name> <x> <y> <rot>              (N times, input order, rot in {0,1})
//! ```

use argon_floorplan::Block;
use std::path::Path;

/// Formats a placement result as the output text.
pub fn format_placement(area: i64, blocks: &[Block]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Area {area}\n\n"));
    out.push_str(&format!("NumHardBlocks {}\n", blocks.len()));
    for b in blocks {
        out.push_str(&format!(
            "{} {} {} {}\n",
            b.name,
            b.x,
            b.y,
            if b.rotated { 1 } else { 0 }
        ));
    }
    out
}

/// Writes a placement result to a file.
pub fn write_placement(
    path: impl AsRef<Path>,
    area: i64,
    blocks: &[Block],
) -> std::io::Result<()> {
    std::fs::write(path, format_placement(area, blocks))
}
