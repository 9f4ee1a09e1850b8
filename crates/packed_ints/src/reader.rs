//! Random-access reader over packed palette indices.
//!
//! # Safety
//!
//! [`PackedIntArrayReader::get`] reads its word without a bounds check. This
//! relies on two properties established at construction:
//! - `words.len() == ceil(stored_count / elements_per_word)` (checked by
//!   [`PackedLayout`])
//! - the layout's divider returns exactly `index / elements_per_word` for every
//!   `index < stored_count` (multiplicative path is only selected when
//!   `stored_count <= FAST_DIV_INDEX_LIMIT`)
//!
//! Together these give `word_index <= (stored_count - 1) / elements_per_word
//! < words.len()`.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::core::SECTION_VOLUME;
use crate::error::{ConfigurationError, PackedArrayError};
use crate::layout::PackedLayout;

/// Read-only view of fixed-width unsigned integers packed into 64-bit words.
///
/// Elements are stored little-end first: element `i` of a word occupies bits
/// `[slot * bits, slot * bits + bits)` where `slot = i % elements_per_word`.
/// High bits left over in each word are padding and never read.
///
/// The reader owns its words and never mutates them, so it is `Send + Sync`
/// and can be shared across threads behind a plain reference or `Arc`.
#[derive(Clone, Debug)]
pub struct PackedIntArrayReader {
    words: Box<[u64]>,
    layout: PackedLayout,
}

impl PackedIntArrayReader {
    /// Wrap `words` holding `stored_count` elements, deriving the element width.
    ///
    /// # Errors
    /// Returns [`PackedArrayError::Configuration`] if the word count, element
    /// count and derived width are inconsistent.
    ///
    /// # Examples
    /// ```
    /// # use packed_ints::PackedIntArrayReader;
    /// // Sixteen 4-bit elements 0..=15 in one word
    /// let word = (0..16u64).fold(0, |acc, v| acc | (v << (v * 4)));
    /// let reader = PackedIntArrayReader::new(vec![word], 16).unwrap();
    ///
    /// assert_eq!(reader.element_bits(), 4);
    /// assert_eq!(reader.get(9).unwrap(), 9);
    /// assert!(reader.get(16).is_err());
    /// ```
    pub fn new(words: impl Into<Box<[u64]>>, stored_count: usize) -> Result<Self, PackedArrayError> {
        let words = words.into();
        let layout = PackedLayout::derive(words.len(), stored_count)
            .map_err(|err| reject(words.len(), stored_count, err))?;
        Ok(Self::from_parts(words, layout))
    }

    /// Wrap the words of one 16×16×16 section (4096 elements).
    ///
    /// # Errors
    /// See [`new`](Self::new).
    pub fn new_section(words: impl Into<Box<[u64]>>) -> Result<Self, PackedArrayError> {
        Self::new(words, SECTION_VOLUME)
    }

    /// Wrap `words` using a known element width instead of deriving it.
    ///
    /// # Errors
    /// Returns [`PackedArrayError::Configuration`] if `element_bits` is outside
    /// `1..=64` or the word count does not match that width.
    pub fn with_element_bits(
        words: impl Into<Box<[u64]>>,
        stored_count: usize,
        element_bits: u8,
    ) -> Result<Self, PackedArrayError> {
        let words = words.into();
        let layout = PackedLayout::with_element_bits(words.len(), stored_count, element_bits)
            .map_err(|err| reject(words.len(), stored_count, err))?;
        Ok(Self::from_parts(words, layout))
    }

    /// Wrap signed words, as persisted by tools whose only 64-bit integer is
    /// signed. The bits are reinterpreted, not converted.
    ///
    /// # Errors
    /// See [`new`](Self::new).
    pub fn from_i64_words(words: Vec<i64>, stored_count: usize) -> Result<Self, PackedArrayError> {
        Self::new(bytemuck::allocation::cast_vec::<i64, u64>(words), stored_count)
    }

    /// Wrap a native-endian byte image of the words.
    ///
    /// The bytes are copied, so `bytes` needs no particular alignment.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::ByteLength`] if `bytes.len()` is not a
    /// multiple of 8, otherwise see [`new`](Self::new).
    pub fn from_ne_bytes(bytes: &[u8], stored_count: usize) -> Result<Self, PackedArrayError> {
        let word_size = std::mem::size_of::<u64>();
        if bytes.len() % word_size != 0 {
            let err = ConfigurationError::ByteLength { len: bytes.len() };
            return Err(reject(bytes.len() / word_size, stored_count, err));
        }
        let words: Vec<u64> = bytemuck::allocation::pod_collect_to_vec(bytes);
        Self::new(words, stored_count)
    }

    fn from_parts(words: Box<[u64]>, layout: PackedLayout) -> Self {
        trace!(
            words = layout.word_count(),
            stored_count = layout.stored_count(),
            element_bits = layout.element_bits(),
            elements_per_word = layout.elements_per_word(),
            divider = ?layout.divider(),
            "packed array reader created"
        );
        Self { words, layout }
    }

    /// Element at `index`.
    ///
    /// # Errors
    /// Returns [`PackedArrayError::IndexOutOfRange`] if `index >= len()`. The
    /// reader stays usable afterwards.
    #[inline]
    pub fn get(&self, index: usize) -> Result<u64, PackedArrayError> {
        if index >= self.layout.stored_count() {
            return Err(PackedArrayError::IndexOutOfRange {
                index,
                len: self.layout.stored_count(),
            });
        }

        let (word_index, bit_offset) = self.layout.locate(index);
        debug_assert!(word_index < self.words.len());
        // SAFETY: see module docs; word_index < words.len() for index < stored_count
        let word = unsafe { *self.words.get_unchecked(word_index) };
        Ok((word >> bit_offset) & self.layout.element_mask())
    }

    /// Iterate every element in index order.
    ///
    /// Walks the words sequentially, so no per-element division is needed at all.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            words: &self.words,
            layout: self.layout,
            word_index: 0,
            slot: 0,
            remaining: self.layout.stored_count(),
        }
    }

    /// Decode every element into `out`.
    ///
    /// # Errors
    /// Returns [`PackedArrayError::IndexOutOfRange`] (with `index = out.len()`)
    /// if `out.len() != len()`.
    pub fn decode_into(&self, out: &mut [u64]) -> Result<(), PackedArrayError> {
        if out.len() != self.len() {
            return Err(PackedArrayError::IndexOutOfRange {
                index: out.len(),
                len: self.len(),
            });
        }
        for (dst, value) in out.iter_mut().zip(self.iter()) {
            *dst = value;
        }
        Ok(())
    }

    /// Decode every element into a new vector.
    pub fn to_vec(&self) -> Vec<u64> {
        self.iter().collect()
    }

    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.layout.stored_count()
    }

    /// Always false: construction rejects empty arrays.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layout.stored_count() == 0
    }

    #[inline]
    pub fn element_bits(&self) -> u8 {
        self.layout.element_bits()
    }

    /// Largest decodable value (`2^element_bits - 1`).
    #[inline]
    pub fn max_value(&self) -> u64 {
        self.layout.element_mask()
    }

    #[inline]
    pub fn elements_per_word(&self) -> usize {
        self.layout.elements_per_word()
    }

    #[inline]
    pub fn layout(&self) -> &PackedLayout {
        &self.layout
    }

    /// The backing words.
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Give the backing words back to the caller.
    pub fn into_words(self) -> Box<[u64]> {
        self.words
    }
}

fn reject(words: usize, stored_count: usize, err: ConfigurationError) -> PackedArrayError {
    debug!(words, stored_count, error = %err, "rejected packed array");
    PackedArrayError::Configuration(err)
}

impl<'a> IntoIterator for &'a PackedIntArrayReader {
    type Item = u64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sequential iterator over a [`PackedIntArrayReader`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    words: &'a [u64],
    layout: PackedLayout,
    word_index: usize,
    slot: usize,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        let word = self.words[self.word_index];
        let value = (word >> (self.slot * self.layout.element_bits() as usize)) & self.layout.element_mask();

        self.remaining -= 1;
        self.slot += 1;
        if self.slot == self.layout.elements_per_word() {
            self.slot = 0;
            self.word_index += 1;
        }
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
