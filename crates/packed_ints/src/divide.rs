//! Division-free floor division by a small word-slot count.
//!
//! Every lookup in a packed array needs `index / elements_per_word`. The
//! divisor is fixed per array and always in `1..=64`, so the quotient can be
//! computed with one multiply, one add and one shift against a per-divisor
//! constant:
//!
//! ```text
//! f(n)        = floor((2^32 - 1) / n)
//! index / n   = (index * f(n) + f(n)) >> 32
//! ```
//!
//! # Validity bound
//!
//! Write `f = (2^32 - 1 - r) / n` with `r = (2^32 - 1) mod n`. Then
//! `(i + 1) * f / 2^32 = (i + 1) / n - (i + 1)(r + 1) / (n * 2^32)`, and the
//! floor equals `floor(i / n)` as long as `(i + 1)(r + 1) <= 2^32`.
//! Since `r + 1 <= 64`, every `i < 2^26` is exact for every divisor.
//! [`FAST_DIV_INDEX_LIMIT`] is that bound; past it callers divide normally.

/// Largest divisor in the table (one-bit elements, 64 per word).
pub const MAX_DIVISOR: usize = 64;

/// Indices strictly below this value divide exactly with [`fast_floor_div`].
pub const FAST_DIV_INDEX_LIMIT: usize = 1 << 26;

const fn build_division_factors() -> [u32; MAX_DIVISOR] {
    let mut factors = [0u32; MAX_DIVISOR];
    let mut n = 1;
    while n <= MAX_DIVISOR {
        factors[n - 1] = u32::MAX / n as u32;
        n += 1;
    }
    factors
}

/// `floor((2^32 - 1) / n)` for `n` in `1..=64`, stored at `n - 1`.
///
/// Evaluated at compile time, so it is initialized before any reader exists
/// and shared across threads without synchronization.
pub static DIVISION_FACTORS: [u32; MAX_DIVISOR] = build_division_factors();

/// Division factor for `divisor` in `1..=64`.
#[inline(always)]
pub fn division_factor(divisor: usize) -> u32 {
    debug_assert!((1..=MAX_DIVISOR).contains(&divisor), "divisor {} out of range", divisor);
    DIVISION_FACTORS[divisor - 1]
}

/// `floor(index / n)` without a divide instruction, where `factor = division_factor(n)`.
///
/// Exact for `index < FAST_DIV_INDEX_LIMIT`. The product is formed in 64 bits:
/// `index < 2^26` and `factor < 2^32` keep it below `2^58`.
#[inline(always)]
pub fn fast_floor_div(index: usize, factor: u32) -> usize {
    debug_assert!(index < FAST_DIV_INDEX_LIMIT);
    let factor = factor as u64;
    ((index as u64 * factor + factor) >> 32) as usize
}

/// How a layout turns an element index into a word index.
///
/// Chosen once per layout from its divisor and element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexDivider {
    /// One element per word: the word index is the element index.
    Identity,
    /// Multiply-add-shift with the stored division factor.
    Multiplicative(u32),
    /// Ordinary division, for element counts past [`FAST_DIV_INDEX_LIMIT`].
    Divide(usize),
}

impl IndexDivider {
    /// Pick the divider for `divisor` slots per word and indices below `count`.
    pub fn for_layout(divisor: usize, count: usize) -> Self {
        if divisor == 1 {
            IndexDivider::Identity
        } else if count <= FAST_DIV_INDEX_LIMIT {
            IndexDivider::Multiplicative(division_factor(divisor))
        } else {
            IndexDivider::Divide(divisor)
        }
    }

    /// `floor(index / divisor)`.
    #[inline(always)]
    pub fn div(self, index: usize) -> usize {
        match self {
            IndexDivider::Identity => index,
            IndexDivider::Multiplicative(factor) => fast_floor_div(index, factor),
            IndexDivider::Divide(divisor) => index / divisor,
        }
    }
}
