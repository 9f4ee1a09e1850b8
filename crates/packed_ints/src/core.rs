//! Core constants and width arithmetic for 64-bit packed arrays.

/// Bits in one storage word.
pub const WORD_BITS: usize = 64;

/// Edge length of a block section (16).
pub const SECTION_EDGE: usize = 16;
/// Elements in one section (16³ = 4096).
pub const SECTION_VOLUME: usize = SECTION_EDGE * SECTION_EDGE * SECTION_EDGE;

/// Widest element a word can hold.
pub const MAX_ELEMENT_BITS: u8 = WORD_BITS as u8;

/// Mask selecting the low `bits` bits of a word.
///
/// `bits` must be in `1..=64`; a 64-bit element keeps the whole word.
///
/// # Examples
/// ```
/// # use packed_ints::core::element_mask;
/// assert_eq!(element_mask(4), 0xF);
/// assert_eq!(element_mask(64), u64::MAX);
/// ```
#[inline(always)]
pub const fn element_mask(bits: u8) -> u64 {
    debug_assert!(bits >= 1 && bits <= MAX_ELEMENT_BITS);
    if bits >= MAX_ELEMENT_BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Elements of width `bits` that fit in one word without spanning.
#[inline(always)]
pub const fn elements_per_word(bits: u8) -> usize {
    debug_assert!(bits >= 1 && bits <= MAX_ELEMENT_BITS);
    WORD_BITS / bits as usize
}

/// Minimum bits required to represent N unique palette entries.
///
/// # Examples
/// ```
/// # use packed_ints::core::bits_required;
/// assert_eq!(bits_required(1), 1);   // Minimum 1 bit
/// assert_eq!(bits_required(2), 1);
/// assert_eq!(bits_required(5), 3);
/// assert_eq!(bits_required(256), 8);
/// ```
#[inline(always)]
pub const fn bits_required(palette_len: usize) -> u8 {
    if palette_len <= 1 {
        1
    } else {
        // ceil(log2(n))
        (usize::BITS - (palette_len - 1).leading_zeros()) as u8
    }
}

/// Words needed to store `count` elements of width `bits`.
///
/// Elements never span a word, so this is `ceil(count / elements_per_word)`
/// rather than `ceil(count * bits / 64)`.
///
/// # Examples
/// ```
/// # use packed_ints::core::{required_words, SECTION_VOLUME};
/// assert_eq!(required_words(SECTION_VOLUME, 4), 256);
/// // 5 bits: 12 per word, ceil(4096 / 12) = 342
/// assert_eq!(required_words(SECTION_VOLUME, 5), 342);
/// ```
#[inline(always)]
pub const fn required_words(count: usize, bits: u8) -> usize {
    count.div_ceil(elements_per_word(bits))
}
