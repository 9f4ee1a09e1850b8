//! Shared test utilities for packed_ints tests.
//!
//! Holds a straightforward reference packer so decoders can be checked
//! against arrays built independently of the crate's own layout code.

#![allow(dead_code)] // Not all test files use all helpers

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pack `values` at `bits` per element, `64 / bits` elements per word,
/// lowest slot in the lowest bits. Uses plain division and modulo.
pub fn reference_pack(values: &[u64], bits: u8) -> Vec<u64> {
    assert!((1..=64).contains(&bits));
    let per_word = 64 / bits as usize;
    let word_count = (values.len() + per_word - 1) / per_word;
    let mut words = vec![0u64; word_count];

    for (i, &value) in values.iter().enumerate() {
        if bits < 64 {
            assert!(value < (1u64 << bits), "value {} does not fit in {} bits", value, bits);
        }
        let shift = (i % per_word) * bits as usize;
        words[i / per_word] |= value << shift;
    }
    words
}

/// Largest value of a `bits`-wide element.
pub fn max_value(bits: u8) -> u64 {
    if bits == 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// `count` seeded random values that fit in `bits`.
pub fn random_values(count: usize, bits: u8, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let max = max_value(bits);
    (0..count).map(|_| rng.gen_range(0..=max)).collect()
}

/// Width `PackedIntArrayReader::new` will derive for `count` elements packed at `bits`.
pub fn derived_bits(count: usize, bits: u8) -> usize {
    let per_word = 64 / bits as usize;
    let words = (count + per_word - 1) / per_word;
    words * 64 / count
}
