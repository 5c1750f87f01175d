//! Visual transformation contracts.
//!
//! Port of Jetpack Compose's `VisualTransformation` and `OffsetMapping` from
//! `compose/ui/ui-text/src/commonMain/kotlin/androidx/compose/ui/text/input/VisualTransformation.kt`
//! and `OffsetMapping.kt`.

use std::fmt;

use crate::text::TextRange;

/// Converts cursor offsets between the original text and its transformed
/// (displayed) form.
///
/// Implementations close over one `(original, transformed)` snapshot produced
/// by a single [`VisualTransformation::filter`] call and must never be reused
/// across edits. Both conversions are total: out-of-range offsets are clamped
/// into the valid range of the target text instead of signalling an error.
pub trait OffsetMapping {
    /// Maps a cursor offset in the original text to the corresponding offset
    /// in the transformed text.
    ///
    /// Matches Kotlin: `OffsetMapping.originalToTransformed(offset: Int)`
    fn original_to_transformed(&self, offset: usize) -> usize;

    /// Maps a cursor offset in the transformed text back to the corresponding
    /// offset in the original text.
    ///
    /// Matches Kotlin: `OffsetMapping.transformedToOriginal(offset: Int)`
    fn transformed_to_original(&self, offset: usize) -> usize;

    /// Maps a selection range endpoint-wise into the transformed text,
    /// preserving selection direction.
    fn range_to_transformed(&self, range: TextRange) -> TextRange {
        TextRange::new(
            self.original_to_transformed(range.start()),
            self.original_to_transformed(range.end()),
        )
    }

    /// Maps a selection range endpoint-wise back into the original text,
    /// preserving selection direction.
    fn range_to_original(&self, range: TextRange) -> TextRange {
        TextRange::new(
            self.transformed_to_original(range.start()),
            self.transformed_to_original(range.end()),
        )
    }
}

/// Offset mapping for text that is displayed exactly as entered.
///
/// Matches Kotlin: `OffsetMapping.Identity`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdentityOffsetMapping;

impl OffsetMapping for IdentityOffsetMapping {
    fn original_to_transformed(&self, offset: usize) -> usize {
        offset
    }

    fn transformed_to_original(&self, offset: usize) -> usize {
        offset
    }
}

/// The result of one visual transformation: the text to display in place of
/// the original, and the mapping that repositions the cursor between the two
/// representations.
///
/// A `TransformedText` is a per-edit snapshot. The host renders `text`, uses
/// `offset_mapping` to place the caret, and discards the value; the next edit
/// produces a fresh one.
///
/// Matches Kotlin: `TransformedText(text, offsetMapping)`
pub struct TransformedText {
    /// The text presented to the user.
    pub text: String,
    /// Offset mapping between the original and the presented text.
    pub offset_mapping: Box<dyn OffsetMapping>,
}

impl TransformedText {
    /// Pairs a display string with the mapping that describes it.
    pub fn new(text: String, offset_mapping: Box<dyn OffsetMapping>) -> Self {
        Self {
            text,
            offset_mapping,
        }
    }
}

impl fmt::Debug for TransformedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformedText")
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

/// A transformation the host applies to the edit buffer before displaying it.
///
/// Called once per edit with the full buffer contents; the returned
/// [`TransformedText`] corresponds to exactly that input. Implementations are
/// stateless strategies, not widgets: the same value may be called from any
/// number of fields.
///
/// Matches Kotlin: `VisualTransformation.filter(text: AnnotatedString)`
pub trait VisualTransformation {
    /// Transforms `text` for display.
    fn filter(&self, text: &str) -> TransformedText;
}

/// A transformation that displays the text unchanged.
///
/// Matches Kotlin: `VisualTransformation.None`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoneVisualTransformation;

impl VisualTransformation for NoneVisualTransformation {
    fn filter(&self, text: &str) -> TransformedText {
        TransformedText::new(text.to_owned(), Box::new(IdentityOffsetMapping))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Maps every original offset to twice its value, for exercising the
    /// provided range helpers with an asymmetric mapping.
    struct Doubling;

    impl OffsetMapping for Doubling {
        fn original_to_transformed(&self, offset: usize) -> usize {
            offset * 2
        }

        fn transformed_to_original(&self, offset: usize) -> usize {
            offset / 2
        }
    }

    #[test]
    fn identity_maps_offsets_unchanged() {
        let mapping = IdentityOffsetMapping;
        for offset in 0..8 {
            assert_eq!(mapping.original_to_transformed(offset), offset);
            assert_eq!(mapping.transformed_to_original(offset), offset);
        }
    }

    #[test]
    fn none_transformation_displays_text_as_is() {
        let transformed = NoneVisualTransformation.filter("abc123");
        assert_eq!(transformed.text, "abc123");
        assert_eq!(transformed.offset_mapping.original_to_transformed(4), 4);
        assert_eq!(transformed.offset_mapping.transformed_to_original(6), 6);
    }

    #[test]
    fn range_mapping_preserves_direction() {
        let mapping = Doubling;

        let forward = mapping.range_to_transformed(TextRange::new(1, 3));
        assert_eq!(forward, TextRange::new(2, 6));
        assert!(!forward.reversed());

        let backward = mapping.range_to_transformed(TextRange::new(3, 1));
        assert_eq!(backward, TextRange::new(6, 2));
        assert!(backward.reversed());

        let restored = mapping.range_to_original(TextRange::new(6, 2));
        assert_eq!(restored, TextRange::new(3, 1));
    }

    #[test]
    fn transformed_text_debug_elides_the_mapping() {
        let transformed = NoneVisualTransformation.filter("x");
        let rendered = format!("{transformed:?}");
        assert!(rendered.contains("\"x\""));
    }
}
