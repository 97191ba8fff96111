//! Shared foundational utilities for the Argon placement engine.
//!
//! Currently this is the deterministic [`Xorshift64Star`] generator that
//! drives every randomized decision in the annealer, exposed through the
//! standard `rand` traits so call sites stay generator-agnostic.

#![warn(missing_docs)]

pub mod prng;

pub use prng::Xorshift64Star;
