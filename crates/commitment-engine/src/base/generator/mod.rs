//! Deterministic derivation of the row generators commitments sum over.
mod generator;
#[cfg(test)]
mod generator_test;
pub use generator::{derive_generator, get_generators};
