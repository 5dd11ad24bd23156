use mdedit_core::{Selection, offset, wrap, wrap_symmetric};
use pretty_assertions::assert_eq;

/// Slice a buffer by a UTF-16 code-unit selection.
fn slice(buffer: &str, selection: Selection) -> &str {
    let start = offset::utf16_to_byte(buffer, selection.start);
    let end = offset::utf16_to_byte(buffer, selection.end);
    &buffer[start..end]
}

#[test]
fn test_wrap_reselects_original_substring() {
    let cases: &[(&str, usize, usize, &str, &str)] = &[
        ("hello world", 0, 5, "**", "**"),
        ("hello world", 6, 11, "*", "*"),
        ("hello world", 3, 3, "`", "`"),
        ("", 0, 0, "~~", "~~"),
        ("multi\nline\ntext", 2, 13, "[", "](x)"),
        ("a😀b😀c", 1, 5, "**", "**"),
    ];

    for &(buffer, start, end, before, after) in cases {
        let selection = Selection::new(start, end);
        let original = slice(buffer, selection).to_string();

        let edit = wrap(buffer, selection, before, after);
        let new_selection = edit.selection.expect("wrap always restores a selection");
        assert_eq!(
            slice(&edit.text, new_selection),
            original,
            "wrap({buffer:?}, {start}..{end}, {before:?}, {after:?})"
        );
    }
}

#[test]
fn test_wrap_bold_first_word() {
    let edit = wrap_symmetric("hello world", Selection::new(0, 5), "**");
    assert_eq!(edit.text, "**hello** world");
    assert_eq!(edit.selection, Some(Selection::new(2, 7)));
}

#[test]
fn test_wrap_inserts_around_selection_boundaries() {
    // Insertion happens at pre-insertion offsets: `after` lands where the
    // selection used to end, not where `before` pushed it to.
    let edit = wrap("abcdef", Selection::new(2, 4), "<<", ">>");
    assert_eq!(edit.text, "ab<<cd>>ef");
}

#[test]
fn test_wrap_whole_buffer() {
    let edit = wrap("body", Selection::new(0, 4), "\n```bash\n", "\n```\n");
    assert_eq!(edit.text, "\n```bash\nbody\n```\n");
    // "\n```bash\n" is 9 code units.
    assert_eq!(edit.selection, Some(Selection::new(9, 13)));
}

#[test]
fn test_wrap_zero_width_selection_lands_between_markers() {
    let edit = wrap_symmetric("ab", Selection::caret(1), "**");
    assert_eq!(edit.text, "a****b");
    assert_eq!(edit.selection, Some(Selection::new(3, 3)));
}

#[test]
fn test_wrap_with_empty_after() {
    // The table shortcut inserts its skeleton as wrap(table, "").
    let edit = wrap("x", Selection::caret(0), "| a |\n", "");
    assert_eq!(edit.text, "| a |\nx");
    assert_eq!(edit.selection, Some(Selection::new(6, 6)));
}

#[test]
fn test_wrap_astral_selection_offsets() {
    // '😀' occupies two UTF-16 code units.
    let edit = wrap_symmetric("a😀b", Selection::new(1, 3), "**");
    assert_eq!(edit.text, "a**😀**b");
    assert_eq!(edit.selection, Some(Selection::new(3, 5)));
    assert_eq!(slice(&edit.text, Selection::new(3, 5)), "😀");
}
