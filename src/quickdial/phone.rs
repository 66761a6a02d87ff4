//! Phone number normalization.
//!
//! Contacts keep their number exactly as typed. Everything that needs a
//! canonical form (quick-dial keys, the dial action) derives it here.

/// Length of the quick-dial key.
pub const SUFFIX_LEN: usize = 3;

/// Keeps only the ASCII digits of `raw`, in order.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Last [`SUFFIX_LEN`] characters of `digits`, or all of it when shorter.
/// Not padded.
pub fn suffix(digits: &str) -> String {
    let count = digits.chars().count();
    digits.chars().skip(count.saturating_sub(SUFFIX_LEN)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_and_prefix() {
        assert_eq!(normalize("+1234567890"), "1234567890");
        assert_eq!(normalize("+1 (650) 253-0000"), "16502530000");
        assert_eq!(normalize("ext. 12 a b"), "12");
    }

    #[test]
    fn normalize_empty_and_digitless() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("call me"), "");
    }

    #[test]
    fn normalize_ignores_non_ascii_digits() {
        // Arabic-Indic digits are not dialable here
        assert_eq!(normalize("٣٤5"), "5");
    }

    #[test]
    fn suffix_takes_last_three() {
        assert_eq!(suffix("1234567890"), "890");
        assert_eq!(suffix("123"), "123");
    }

    #[test]
    fn suffix_of_short_input_is_whole_input() {
        assert_eq!(suffix("12"), "12");
        assert_eq!(suffix("7"), "7");
        assert_eq!(suffix(""), "");
    }

    #[test]
    fn suffix_never_exceeds_three() {
        let inputs = [
            "",
            "1",
            "+1 234",
            "+44 (0) 20 7946 0958",
            "no digits",
            "0000000000000000000",
        ];
        for raw in inputs {
            assert!(suffix(&normalize(raw)).len() <= SUFFIX_LEN, "input {raw:?}");
        }
    }
}
