//! Transform API example
//!
//! Demonstrates the pure transform functions without a session.

use mdedit_core::{Selection, prefix_lines, table_skeleton, wrap, wrap_symmetric};

fn main() {
    println!("=== Transform basics ===\n");

    // Wrap: bold the first word.
    let buffer = "hello world";
    let edit = wrap_symmetric(buffer, Selection::new(0, 5), "**");
    println!("1. wrap_symmetric(\"**\")");
    println!("   before: {buffer:?}");
    println!("   after:  {:?}", edit.text);
    println!("   reselect: {:?}\n", edit.selection);

    // Wrap with distinct markers: a link.
    let edit = wrap("see docs", Selection::new(4, 8), "[", "](https://docs.rs)");
    println!("2. wrap(\"[\", \"](url)\")");
    println!("   after:  {:?}\n", edit.text);

    // Line prefix: quote everything the selection touches.
    let buffer = "first\nsecond\nthird";
    let edit = prefix_lines(buffer, Selection::new(3, 9), "> ");
    println!("3. prefix_lines(\"> \") over a two-line selection");
    println!("   before: {buffer:?}");
    println!("   after:  {:?}", edit.text);
    println!("   reselect: {:?} (line prefixes never restore a selection)\n", edit.selection);

    // Table skeleton.
    println!("4. table_skeleton(3, 2)");
    print!("{}", table_skeleton(3, 2));
}
