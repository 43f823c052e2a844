//! rfplan core
//!
//! Frequency planning for cascaded mixer chains: band arithmetic, mixing
//! products, axis domains and ticks, plus the plan state, configuration and
//! derived spectrum view consumed by the front ends.

pub mod domain;

pub use domain::*;
