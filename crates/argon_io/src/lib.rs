//! Input parsing and placement output for the Argon placement engine.
//!
//! [`read_design`] parses the token-based input netlist into a
//! [`Design`](argon_floorplan::Design); [`write_placement`] serializes the
//! final placement. Both formats are plain text; see the module docs of
//! [`reader`] and [`writer`] for the grammars.

#![warn(missing_docs)]

pub mod error;
pub mod reader;
pub mod writer;

pub use error::ParseError;
pub use reader::{parse_design, read_design};
pub use writer::{format_placement, write_placement};
