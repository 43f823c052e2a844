//! Cross-crate integration tests for rfplan
//!
//! Run with: cargo test -p rfplan-tests

#[cfg(test)]
mod fixtures;

#[cfg(test)]
mod chain_integration;

#[cfg(test)]
mod properties;
