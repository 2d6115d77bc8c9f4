use super::*;
use curve25519_dalek::scalar::Scalar;

#[test]
fn test_inner_product() {
    let a = vec![1, 2, 3, 4];
    let b = vec![2, 3, 4, 5];
    assert_eq!(40, inner_product(&a, &b));
}

/// test with both lengths truncated
#[test]
fn test_inner_product_uneven() {
    let a = vec![1, 2, 3, 4, 5, 6];
    let b = vec![2, 3, 4, 5];
    assert_eq!(40, inner_product(&a, &b));
    assert_eq!(40, inner_product(&b, &a));
}

#[test]
fn test_inner_product_scalar() {
    let a = vec![Scalar::from(1u64), Scalar::from(2u64)];
    let b = vec![Scalar::from(2u64), Scalar::from(3u64)];
    assert_eq!(Scalar::from(8u64), inner_product(&a, &b));
}

#[test]
fn test_inner_product_empty() {
    let a: Vec<Scalar> = vec![];
    let b: Vec<Scalar> = vec![];
    assert_eq!(Scalar::ZERO, inner_product(&a, &b));
}
