use mdedit_core::{Selection, prefix_lines};
use pretty_assertions::assert_eq;

#[test]
fn test_caret_in_middle_line_prefixes_only_that_line() {
    let edit = prefix_lines("a\nb\nc", Selection::new(2, 2), "- ");
    assert_eq!(edit.text, "a\n- b\nc");
}

#[test]
fn test_prefix_never_restores_selection() {
    let edit = prefix_lines("a\nb\nc", Selection::new(0, 5), "# ");
    assert_eq!(edit.selection, None);
}

#[test]
fn test_selection_spanning_two_lines() {
    // Selection (1, 6) covers the end of "one" through the middle of "two".
    let edit = prefix_lines("one\ntwo\nthree", Selection::new(1, 6), "> ");
    assert_eq!(edit.text, "> one\n> two\nthree");
}

#[test]
fn test_whole_buffer_selection_touches_all_lines() {
    let edit = prefix_lines("x\ny\nz", Selection::new(0, 5), "- [ ] ");
    assert_eq!(edit.text, "- [ ] x\n- [ ] y\n- [ ] z");
}

#[test]
fn test_caret_on_line_boundary() {
    // A caret at the end of "a" (offset 1, on the separating newline's left
    // edge) touches "a"; a caret at the start of "b" (offset 2) touches "b".
    assert_eq!(prefix_lines("a\nb", Selection::new(1, 1), "> ").text, "> a\nb");
    assert_eq!(prefix_lines("a\nb", Selection::new(2, 2), "> ").text, "a\n> b");
}

#[test]
fn test_empty_buffer() {
    let edit = prefix_lines("", Selection::new(0, 0), "- ");
    assert_eq!(edit.text, "- ");
}

#[test]
fn test_trailing_newline_yields_touchable_empty_line() {
    let edit = prefix_lines("a\n", Selection::new(2, 2), "- ");
    assert_eq!(edit.text, "a\n- ");
}

#[test]
fn test_rule_prefix_inserts_line_above() {
    // The horizontal-rule shortcut is a prefix ending in '\n', so the rule
    // lands on its own line above the touched one.
    let edit = prefix_lines("a\nb\nc", Selection::new(2, 2), "---\n");
    assert_eq!(edit.text, "a\n---\nb\nc");
}

#[test]
fn test_out_of_range_selection_is_clamped() {
    let edit = prefix_lines("a\nb", Selection::new(50, 60), "- ");
    // Clamped to the buffer end: only the last line is touched.
    assert_eq!(edit.text, "a\n- b");
}

#[test]
fn test_heading_prefix_stacks_on_repeat() {
    // Prefixing is purely additive; applying a heading twice stacks markers.
    let first = prefix_lines("title", Selection::new(0, 0), "# ");
    let second = prefix_lines(&first.text, Selection::new(0, 0), "# ");
    assert_eq!(second.text, "# # title");
}
