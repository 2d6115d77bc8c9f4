#![doc = include_str!("../README.md")]

/// Basic shared functionality of the engine.
pub mod base;
/// Pedersen commitment computation and backend configuration.
pub mod compute;
/// The asynchronous execution model the proof backends run on.
pub mod execution;
/// Proof primitives built on the commitments and the execution runtime.
pub mod proof_primitive;
