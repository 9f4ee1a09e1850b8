//! Decoding arrays built by an independent reference packer.

mod common;

use common::{derived_bits, max_value, random_values, reference_pack};
use packed_ints::{PackedIntArrayReader, SECTION_VOLUME};

#[test]
fn sequential_four_bit_word() {
    let values: Vec<u64> = (0..16).collect();
    let words = reference_pack(&values, 4);
    assert_eq!(words.len(), 1);
    assert_eq!(words[0], 0xFEDC_BA98_7654_3210);

    let reader = PackedIntArrayReader::new(words, 16).unwrap();
    assert_eq!(reader.element_bits(), 4);
    assert_eq!(reader.elements_per_word(), 16);
    let decoded: Vec<u64> = (0..16).map(|i| reader.get(i).unwrap()).collect();
    assert_eq!(decoded, values);
}

#[test]
fn every_width_with_explicit_bits() {
    for bits in 1..=64u8 {
        for &count in &[1usize, 7, 64, 1000, SECTION_VOLUME] {
            let values = random_values(count, bits, bits as u64 * 7919 + count as u64);
            let reader = PackedIntArrayReader::with_element_bits(reference_pack(&values, bits), count, bits)
                .unwrap_or_else(|e| panic!("{} bits, {} elements: {}", bits, count, e));

            for (i, &expected) in values.iter().enumerate() {
                assert_eq!(reader.get(i).unwrap(), expected, "{} bits, {} elements, index {}", bits, count, i);
            }
            assert_eq!(reader.to_vec(), values, "{} bits, {} elements", bits, count);
        }
    }
}

#[test]
fn derived_width_sections() {
    // Widths the section layout derives back unambiguously
    let mut checked = 0;
    for bits in 1..=64u8 {
        if derived_bits(SECTION_VOLUME, bits) != bits as usize {
            continue;
        }
        let values = random_values(SECTION_VOLUME, bits, 0xC0FFEE ^ bits as u64);
        let reader = PackedIntArrayReader::new_section(reference_pack(&values, bits)).unwrap();

        assert_eq!(reader.element_bits(), bits);
        for (i, &expected) in values.iter().enumerate() {
            assert_eq!(reader.get(i).unwrap(), expected, "{} bits, index {}", bits, i);
        }
        checked += 1;
    }
    // Includes every palette width up to 10 bits
    assert!(checked >= 10, "only {} widths derived exactly", checked);
    for bits in 1..=10u8 {
        assert_eq!(derived_bits(SECTION_VOLUME, bits), bits as usize);
    }
}

#[test]
fn extreme_values() {
    for bits in [1u8, 3, 5, 7, 13, 21, 31, 32, 33, 63, 64] {
        let max = max_value(bits);
        let values: Vec<u64> = (0..SECTION_VOLUME as u64)
            .map(|i| if i % 3 == 0 { max } else if i % 3 == 1 { 0 } else { max >> 1 })
            .collect();
        let reader =
            PackedIntArrayReader::with_element_bits(reference_pack(&values, bits), SECTION_VOLUME, bits).unwrap();
        assert_eq!(reader.max_value(), max);
        assert_eq!(reader.to_vec(), values, "{} bits", bits);
    }
}

#[test]
fn iter_matches_random_access() {
    let values = random_values(SECTION_VOLUME, 6, 42);
    let reader = PackedIntArrayReader::new_section(reference_pack(&values, 6)).unwrap();
    for (i, value) in reader.iter().enumerate() {
        assert_eq!(value, reader.get(i).unwrap());
    }
}
