//! Error types for netlist parsing.

/// Errors that can occur while reading a placement input file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// An I/O error occurred while reading the file.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The token stream ended before the grammar was satisfied.
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof {
        /// What the parser was trying to read.
        expected: &'static str,
    },

    /// A token did not match what the grammar requires at that position.
    #[error("expected {expected}, found '{found}'")]
    Malformed {
        /// What the parser was trying to read.
        expected: &'static str,
        /// The offending token.
        found: String,
    },

    /// A symmetry constraint references a block that was never declared.
    #[error("unknown block '{name}' referenced by a symmetry constraint")]
    UnknownBlock {
        /// The undeclared block name.
        name: String,
    },

    /// Two hard blocks share the same name.
    #[error("duplicate hard block '{name}'")]
    DuplicateBlock {
        /// The repeated block name.
        name: String,
    },
}
