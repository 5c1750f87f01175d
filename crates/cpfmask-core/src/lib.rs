//! Core contracts for Cpfmask: text ranges, offset mappings, and the visual
//! transformation seam masks plug into.
//!
//! This crate is intentionally host-agnostic. It knows nothing about widgets,
//! rendering, or event loops; it only defines the pure types a text-field
//! host exchanges with a mask on every edit. Concrete masks (such as the CPF
//! mask in the `cpfmask` crate) implement [`VisualTransformation`] on top of
//! these contracts.

pub mod text;

// Re-export commonly used items at the crate root.
pub use text::{
    count_digits, filter_digits, IdentityOffsetMapping, NoneVisualTransformation, OffsetMapping,
    TextRange, TransformedText, VisualTransformation,
};
