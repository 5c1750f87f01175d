//! CPF formatting and cursor mapping.
//!
//! CPF (Cadastro de Pessoas Físicas) is the Brazilian individual taxpayer
//! number: eleven digits displayed as `XXX.XXX.XXX-XX`. The mask formats
//! partial input as it is typed and keeps the caret in step with the
//! separators it inserts.

use cpfmask_core::{count_digits, filter_digits, OffsetMapping, TransformedText, VisualTransformation};

/// Number of digits in a complete CPF.
pub const CPF_DIGITS: usize = 11;

/// Length of a fully formatted CPF (`XXX.XXX.XXX-XX`).
pub const CPF_FORMATTED_LEN: usize = 14;

/// Formats a digit string with the CPF group separators.
///
/// Grouping switches on how many digits are present so partial input stays
/// readable while the user types: up to three digits pass through untouched,
/// then dots appear after the third and sixth digit, and the check-digit
/// hyphen after the ninth.
///
/// `digits` must contain only ASCII decimal digits; run the raw buffer
/// through [`filter_digits`](cpfmask_core::filter_digits) first. Digits past
/// the eleventh are carried in the last group unformatted rather than
/// dropped, so no input is ever lost.
///
/// # Examples
///
/// ```
/// use cpfmask::format_cpf;
///
/// assert_eq!(format_cpf(""), "");
/// assert_eq!(format_cpf("1234"), "123.4");
/// assert_eq!(format_cpf("12345678900"), "123.456.789-00");
/// ```
pub fn format_cpf(digits: &str) -> String {
    debug_assert!(
        digits.bytes().all(|b| b.is_ascii_digit()),
        "format_cpf expects a pre-filtered digit string, got {digits:?}"
    );
    match digits.len() {
        n if n > 9 => format!(
            "{}.{}.{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..]
        ),
        n if n > 6 => format!("{}.{}.{}", &digits[..3], &digits[3..6], &digits[6..]),
        n if n > 3 => format!("{}.{}", &digits[..3], &digits[3..]),
        _ => digits.to_owned(),
    }
}

/// Offset mapping between a raw CPF digit string and its formatted form.
///
/// Holds the `(digits, formatted)` snapshot of one edit; construct a fresh
/// mapping per edit and discard it once the caret has been placed.
#[derive(Clone, Debug)]
pub struct CpfOffsetMapping {
    original: String,
    formatted: String,
}

impl CpfOffsetMapping {
    /// Creates the mapping for one `(digits, formatted)` snapshot, where
    /// `formatted` is `format_cpf(&original)`.
    pub fn new(original: String, formatted: String) -> Self {
        Self {
            original,
            formatted,
        }
    }
}

impl OffsetMapping for CpfOffsetMapping {
    // Re-formats the digit prefix instead of walking separator positions:
    // the formatted prefix length IS the transformed offset, so separator
    // placement never needs special-casing.
    fn original_to_transformed(&self, offset: usize) -> usize {
        let offset = offset.min(self.original.len());
        format_cpf(&self.original[..offset])
            .len()
            .min(self.formatted.len())
    }

    fn transformed_to_original(&self, offset: usize) -> usize {
        let offset = offset.min(self.formatted.len());
        count_digits(&self.formatted[..offset]).min(self.original.len())
    }
}

/// Visual transformation applying the CPF mask to a text field.
///
/// Strips non-digits from the raw buffer, formats the result, and returns the
/// display text together with a [`CpfOffsetMapping`] for that exact snapshot.
///
/// ```
/// use cpfmask::CpfVisualTransformation;
/// use cpfmask_core::VisualTransformation;
///
/// let transformed = CpfVisualTransformation.filter("12345678900");
/// assert_eq!(transformed.text, "123.456.789-00");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpfVisualTransformation;

impl VisualTransformation for CpfVisualTransformation {
    fn filter(&self, text: &str) -> TransformedText {
        let digits = filter_digits(text);
        let formatted = format_cpf(&digits);
        log::trace!(
            "cpf mask: {} raw bytes -> {} digits -> {:?}",
            text.len(),
            digits.len(),
            formatted
        );
        let mapping = CpfOffsetMapping::new(digits.into_owned(), formatted.clone());
        TransformedText::new(formatted, Box::new(mapping))
    }
}
