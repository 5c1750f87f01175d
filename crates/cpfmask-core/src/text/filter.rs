//! Digit extraction for masked numeric input.

use std::borrow::Cow;

/// Strips every non-digit character from `text`.
///
/// Returns `Cow::Borrowed` when the input is already digit-only, which is the
/// common case on the per-keystroke path of a numeric field.
///
/// Only ASCII decimal digits are kept; any other character, including other
/// Unicode numerals, is removed.
///
/// # Examples
///
/// ```
/// use cpfmask_core::filter_digits;
///
/// assert_eq!(filter_digits("12345678900"), "12345678900");
/// assert_eq!(filter_digits("123.456.789-00"), "12345678900");
/// assert_eq!(filter_digits("abc"), "");
/// ```
pub fn filter_digits(text: &str) -> Cow<'_, str> {
    if text.bytes().all(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().filter(char::is_ascii_digit).collect())
}

/// Counts the ASCII decimal digits in `text`.
///
/// # Examples
///
/// ```
/// use cpfmask_core::count_digits;
///
/// assert_eq!(count_digits("123.456"), 6);
/// assert_eq!(count_digits(""), 0);
/// ```
#[inline]
pub fn count_digits(text: &str) -> usize {
    text.bytes().filter(u8::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_only_input_borrows() {
        assert!(matches!(filter_digits("0123456789"), Cow::Borrowed(_)));
        assert!(matches!(filter_digits(""), Cow::Borrowed(_)));
    }

    #[test]
    fn mixed_input_is_stripped() {
        assert_eq!(filter_digits("123.456.789-00"), "12345678900");
        assert_eq!(filter_digits("a1b2c3"), "123");
        assert_eq!(filter_digits(" 1 2 "), "12");
    }

    #[test]
    fn non_ascii_numerals_are_removed() {
        // U+0663 ARABIC-INDIC DIGIT THREE and a currency sign.
        assert_eq!(filter_digits("1٣2€3"), "123");
    }

    #[test]
    fn counts_digits_in_mixed_text() {
        assert_eq!(count_digits("123.456.789-00"), 11);
        assert_eq!(count_digits("no digits"), 0);
        assert_eq!(count_digits("7"), 1);
    }
}
