//! UTF-16 code-unit offset conversion.
//!
//! Editable text surfaces (browser textareas, DOM selection APIs) report
//! selection offsets in UTF-16 code units. The kernel stores text as UTF-8,
//! so every slicing operation converts through this module. Conversions
//! clamp out-of-range input and never split a Unicode scalar value: an
//! offset that lands inside a surrogate pair resolves to the start of the
//! following scalar.

/// Total length of `text` in UTF-16 code units.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Byte index corresponding to a UTF-16 code-unit offset.
///
/// Offsets past the end clamp to `text.len()`.
pub fn utf16_to_byte(text: &str, offset: usize) -> usize {
    let mut units = 0;
    for (index, ch) in text.char_indices() {
        if units >= offset {
            return index;
        }
        units += ch.len_utf16();
    }
    text.len()
}

/// UTF-16 code-unit offset corresponding to a byte index.
///
/// A byte index inside a multi-byte scalar resolves to the offset of that
/// scalar's first code unit; indices past the end clamp to the total length.
pub fn byte_to_utf16(text: &str, byte: usize) -> usize {
    let mut units = 0;
    for (index, ch) in text.char_indices() {
        if index >= byte {
            return units;
        }
        units += ch.len_utf16();
    }
    units
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_offsets_are_identity() {
        let text = "hello world";
        assert_eq!(utf16_len(text), 11);
        assert_eq!(utf16_to_byte(text, 0), 0);
        assert_eq!(utf16_to_byte(text, 5), 5);
        assert_eq!(byte_to_utf16(text, 5), 5);
    }

    #[test]
    fn test_bmp_characters() {
        // '你' and '好' are 3 UTF-8 bytes but 1 UTF-16 code unit each.
        let text = "你好";
        assert_eq!(utf16_len(text), 2);
        assert_eq!(utf16_to_byte(text, 1), 3);
        assert_eq!(byte_to_utf16(text, 3), 1);
    }

    #[test]
    fn test_astral_plane_characters() {
        // '😀' is 4 UTF-8 bytes and 2 UTF-16 code units (a surrogate pair).
        let text = "a😀b";
        assert_eq!(utf16_len(text), 4);
        assert_eq!(utf16_to_byte(text, 1), 1);
        assert_eq!(utf16_to_byte(text, 3), 5);
        assert_eq!(byte_to_utf16(text, 5), 3);
    }

    #[test]
    fn test_offset_inside_surrogate_pair_does_not_split() {
        let text = "😀";
        // Offset 1 lands between the high and low surrogate; resolve to the
        // start of the following scalar rather than splitting the char.
        assert_eq!(utf16_to_byte(text, 1), 4);
    }

    #[test]
    fn test_out_of_range_offsets_clamp() {
        let text = "ab";
        assert_eq!(utf16_to_byte(text, 100), 2);
        assert_eq!(byte_to_utf16(text, 100), 2);
        assert_eq!(utf16_to_byte("", 3), 0);
    }
}
