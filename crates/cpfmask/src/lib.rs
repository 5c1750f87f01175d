#![deny(missing_docs)]

//! CPF input masking with cursor-stable formatting.
//!
//! A text-field host hands this crate the raw edit buffer once per edit and
//! gets back the punctuated display string (`XXX.XXX.XXX-XX`) plus an offset
//! mapping that keeps the caret in the right place as separators appear and
//! disappear around it.
//!
//! ```
//! use cpfmask::prelude::*;
//!
//! let transformed = CpfVisualTransformation.filter("12345678900");
//! assert_eq!(transformed.text, "123.456.789-00");
//! assert_eq!(transformed.offset_mapping.original_to_transformed(11), 14);
//! ```
//!
//! The transformation never fails: non-digits are stripped, over-long input
//! passes through, and out-of-range cursor offsets are clamped. A component
//! sitting on the typing path has no business panicking.

mod cpf;

pub use cpf::{format_cpf, CpfOffsetMapping, CpfVisualTransformation, CPF_DIGITS, CPF_FORMATTED_LEN};

/// Re-export the contracts crate so hosts can depend on a single crate.
pub use cpfmask_core::*;

/// Convenience imports for hosts embedding the mask.
pub mod prelude {
    pub use crate::cpf::{format_cpf, CpfVisualTransformation};
    pub use cpfmask_core::{OffsetMapping, TextRange, TransformedText, VisualTransformation};
}
