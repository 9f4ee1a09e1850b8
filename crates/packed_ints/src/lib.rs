//! Division-free random access into 64-bit packed palette index arrays.
//!
//! Block volumes store one small palette index per voxel, packed into 64-bit
//! words without letting any index straddle two words. This crate decodes
//! those arrays in constant time per element, deriving the index width from
//! the buffer length and element count alone.
//!
//! # Example
//!
//! ```
//! use packed_ints::{PackedIntArrayReader, SECTION_VOLUME};
//!
//! // 5-bit indices: 12 per word, 342 words for a 16³ section
//! let words = vec![0u64; 342];
//! let section = PackedIntArrayReader::new_section(words).unwrap();
//!
//! assert_eq!(section.len(), SECTION_VOLUME);
//! assert_eq!(section.element_bits(), 5);
//! assert_eq!(section.get(4095).unwrap(), 0);
//! ```

pub mod core;
pub mod divide;
pub mod error;
pub mod layout;
pub mod reader;

// Re-export primary types
pub use crate::core::{
    bits_required, element_mask, required_words,
    // Constants
    MAX_ELEMENT_BITS, SECTION_EDGE, SECTION_VOLUME, WORD_BITS,
};
pub use crate::divide::{fast_floor_div, division_factor, IndexDivider, DIVISION_FACTORS, FAST_DIV_INDEX_LIMIT};
pub use crate::error::{ConfigurationError, PackedArrayError};
pub use crate::layout::PackedLayout;
pub use crate::reader::{Iter, PackedIntArrayReader};
