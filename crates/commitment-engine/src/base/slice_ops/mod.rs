//! Operations over slices of scalars.
#[cfg(any(feature = "rayon", test))]
pub const MIN_RAYON_LEN: usize = 1 << 8;

mod inner_product;
#[cfg(test)]
mod inner_product_test;
pub use inner_product::*;
