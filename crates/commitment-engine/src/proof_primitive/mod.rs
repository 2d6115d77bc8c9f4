//! Proof primitives built on the commitment computation and the
//! execution runtime.
pub mod inner_product;
