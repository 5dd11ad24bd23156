//! Markdown snippet building blocks.
//!
//! The fixed marker strings used by the shortcut table, plus the small
//! builders for parameterized snippets (links, images, table skeletons).
//! This module intentionally stays data-driven and dependency-free: it
//! knows nothing about selections or dispatch.

/// Bold marker (`**`), applied on both sides of the selection.
pub const BOLD_MARKER: &str = "**";
/// Italic marker (`*`).
pub const ITALIC_MARKER: &str = "*";
/// Inline-code marker (`` ` ``).
pub const CODE_MARKER: &str = "`";
/// Strikethrough marker (`~~`).
pub const STRIKETHROUGH_MARKER: &str = "~~";
/// Heading prefixes for levels 1 to 3.
pub const HEADING_PREFIXES: [&str; 3] = ["# ", "## ", "### "];
/// Bullet list prefix.
pub const BULLET_PREFIX: &str = "- ";
/// Block-quote prefix.
pub const QUOTE_PREFIX: &str = "> ";
/// Task list prefix.
pub const TASK_PREFIX: &str = "- [ ] ";
/// Horizontal rule, inserted as a prefix so the rule lands on its own line.
pub const RULE_PREFIX: &str = "---\n";
/// Opening fence of a bash code block, padded with newlines.
pub const CODE_BLOCK_OPEN: &str = "\n```bash\n";
/// Closing fence of a code block.
pub const CODE_BLOCK_CLOSE: &str = "\n```\n";

/// Wrap pair for a Markdown link: `[` + selection + `](url)`.
pub fn link_wrap(url: &str) -> (String, String) {
    ("[".to_string(), format!("]({url})"))
}

/// Wrap pair for a Markdown image shortcut: `![](` + selection + `)` + url.
///
/// Note the URL trails the *closing* paren, so the selected text (not the
/// URL) ends up inside the parens. This reproduces the shipped shortcut
/// behavior verbatim; do not "fix" it without changing the dispatch table
/// contract.
pub fn image_wrap(url: &str) -> (String, String) {
    ("![](".to_string(), format!("){url}"))
}

/// Build a GitHub-flavored-Markdown table skeleton.
///
/// One header row with `Header N` cells, one divider row of `----` cells,
/// and `rows` data rows of `Data` placeholders. Every row is
/// newline-terminated. Callers are expected to have validated the
/// dimensions; zero columns or rows simply produce degenerate (but
/// well-formed) output.
pub fn table_skeleton(columns: usize, rows: usize) -> String {
    let mut out = String::new();

    out.push('|');
    for column in 1..=columns {
        out.push_str(&format!(" Header {column} |"));
    }
    out.push('\n');

    out.push('|');
    for _ in 0..columns {
        out.push_str(" ---- |");
    }
    out.push('\n');

    for _ in 0..rows {
        out.push('|');
        for _ in 0..columns {
            out.push_str(" Data |");
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_skeleton_two_by_one() {
        let table = table_skeleton(2, 1);
        assert_eq!(
            table,
            "| Header 1 | Header 2 |\n| ---- | ---- |\n| Data | Data |\n"
        );
    }

    #[test]
    fn test_table_skeleton_row_count() {
        let table = table_skeleton(3, 4);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2 + 4);
        assert!(lines.iter().all(|l| l.matches('|').count() == 4));
        assert!(table.ends_with('\n'));
    }

    #[test]
    fn test_link_wrap_places_url_inside_parens() {
        let (before, after) = link_wrap("https://example.com");
        assert_eq!(before, "[");
        assert_eq!(after, "](https://example.com)");
    }

    #[test]
    fn test_image_wrap_places_url_after_closing_paren() {
        let (before, after) = image_wrap("https://example.com/x.png");
        assert_eq!(before, "![](");
        assert_eq!(after, ")https://example.com/x.png");
    }
}
