use super::*;
use curve25519_dalek::{ristretto::RistrettoPoint, traits::Identity};

#[test]
fn test_derive_generator_is_deterministic() {
    assert_eq!(derive_generator(0), derive_generator(0));
    assert_eq!(derive_generator(1234), derive_generator(1234));
}

#[test]
fn test_derive_generator_varies_with_index() {
    assert_ne!(derive_generator(0), derive_generator(1));
    assert_ne!(derive_generator(1), derive_generator(1 << 32));
}

#[test]
fn test_get_generators_matches_derive_generator() {
    let mut generators = vec![RistrettoPoint::identity(); 5];
    get_generators(&mut generators, 0);
    for (i, generator) in generators.iter().enumerate() {
        assert_eq!(*generator, derive_generator(i as u64));
    }
}

#[test]
fn test_get_generators_applies_the_offset() {
    let mut with_offset = vec![RistrettoPoint::identity(); 3];
    get_generators(&mut with_offset, 7);
    let mut plain = vec![RistrettoPoint::identity(); 10];
    get_generators(&mut plain, 0);
    assert_eq!(with_offset, &plain[7..]);
}

#[test]
fn test_get_generators_with_empty_output_is_a_noop() {
    let mut generators: Vec<RistrettoPoint> = vec![];
    get_generators(&mut generators, 42);
}
