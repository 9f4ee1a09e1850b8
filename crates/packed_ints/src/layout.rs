//! Derived configuration of a packed array.
//!
//! A [`PackedLayout`] is computed once from a word count and an element count
//! and then cached by the reader. The element width is never stored in the
//! data: it is recovered as `words * 64 / stored_count`, and the buffer is
//! only accepted if that width reproduces the word count.

use crate::core::{element_mask, elements_per_word, required_words, MAX_ELEMENT_BITS, WORD_BITS};
use crate::divide::IndexDivider;
use crate::error::ConfigurationError;

/// Cached per-array decode parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedLayout {
    element_bits: u8,
    element_mask: u64,
    elements_per_word: usize,
    stored_count: usize,
    word_count: usize,
    divider: IndexDivider,
}

impl PackedLayout {
    /// Derive the layout of `word_count` words holding `stored_count` elements.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] if either count is zero, if the derived
    /// width is outside `1..=64`, or if `ceil(stored_count / elements_per_word)`
    /// differs from `word_count`.
    ///
    /// # Examples
    /// ```
    /// # use packed_ints::PackedLayout;
    /// let layout = PackedLayout::derive(342, 4096).unwrap();
    /// assert_eq!(layout.element_bits(), 5);
    /// assert_eq!(layout.elements_per_word(), 12);
    ///
    /// assert!(PackedLayout::derive(341, 4096).is_err());
    /// ```
    pub fn derive(word_count: usize, stored_count: usize) -> Result<Self, ConfigurationError> {
        if word_count == 0 {
            return Err(ConfigurationError::EmptyStorage);
        }
        if stored_count == 0 {
            return Err(ConfigurationError::ZeroStoredCount);
        }

        // Overflow only for buffers larger than the address space in bits;
        // report them as an unusable width.
        let element_bits = word_count
            .checked_mul(WORD_BITS)
            .map(|total_bits| total_bits / stored_count)
            .unwrap_or(usize::MAX);

        if element_bits == 0 || element_bits > MAX_ELEMENT_BITS as usize {
            return Err(ConfigurationError::ElementBitsOutOfRange {
                element_bits,
                words: word_count,
                stored_count,
            });
        }

        Self::with_element_bits(word_count, stored_count, element_bits as u8)
    }

    /// Build the layout for an explicitly known element width.
    ///
    /// Widths sharing an `elements_per_word` value (11 and 12 bits both pack 5
    /// per word) produce identical word counts; [`derive`](Self::derive)
    /// always resolves those to the wider one. Use this when the width is
    /// known from elsewhere, e.g. a palette length.
    ///
    /// # Errors
    /// Returns a [`ConfigurationError`] if either count is zero, if `element_bits`
    /// is outside `1..=64`, or if the word count does not match.
    pub fn with_element_bits(
        word_count: usize,
        stored_count: usize,
        element_bits: u8,
    ) -> Result<Self, ConfigurationError> {
        if word_count == 0 {
            return Err(ConfigurationError::EmptyStorage);
        }
        if stored_count == 0 {
            return Err(ConfigurationError::ZeroStoredCount);
        }
        if element_bits == 0 || element_bits > MAX_ELEMENT_BITS {
            return Err(ConfigurationError::ElementBitsOutOfRange {
                element_bits: element_bits as usize,
                words: word_count,
                stored_count,
            });
        }

        let expected = required_words(stored_count, element_bits);
        if expected != word_count {
            return Err(ConfigurationError::WordCountMismatch {
                expected,
                actual: word_count,
                element_bits,
            });
        }

        let per_word = elements_per_word(element_bits);
        Ok(Self {
            element_bits,
            element_mask: element_mask(element_bits),
            elements_per_word: per_word,
            stored_count,
            word_count,
            divider: IndexDivider::for_layout(per_word, stored_count),
        })
    }

    #[inline]
    pub fn element_bits(&self) -> u8 {
        self.element_bits
    }

    /// Largest value an element can hold (`2^element_bits - 1`).
    #[inline]
    pub fn element_mask(&self) -> u64 {
        self.element_mask
    }

    #[inline]
    pub fn elements_per_word(&self) -> usize {
        self.elements_per_word
    }

    /// Logical number of elements.
    #[inline]
    pub fn stored_count(&self) -> usize {
        self.stored_count
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    #[inline]
    pub fn divider(&self) -> IndexDivider {
        self.divider
    }

    /// Unused high bits at the top of every word.
    pub fn padding_bits(&self) -> usize {
        WORD_BITS - self.elements_per_word * self.element_bits as usize
    }

    /// Word index and bit offset of element `index`.
    ///
    /// `index` must be below `stored_count`; the word index is then always
    /// below `word_count`.
    #[inline(always)]
    pub fn locate(&self, index: usize) -> (usize, u32) {
        debug_assert!(index < self.stored_count);
        let word_index = self.divider.div(index);
        let slot = index - word_index * self.elements_per_word;
        (word_index, (slot * self.element_bits as usize) as u32)
    }
}
