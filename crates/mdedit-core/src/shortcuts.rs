//! The fixed shortcut table.
//!
//! Maps a key chord (the platform primary modifier, Ctrl or Cmd, an
//! optional Shift, and a case-insensitive key character) to one editor
//! action. The table is a pure function of the chord: static, process-wide,
//! and read-only.

use crate::markdown;

/// A keyboard chord with the primary modifier held.
///
/// Chords without the primary modifier never reach the dispatch table, so
/// only the Shift state and the key character are carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    /// The key character as reported by the surface. Matching is
    /// case-insensitive.
    pub key: char,
    /// Whether Shift was held in addition to the primary modifier.
    pub shift: bool,
}

impl KeyChord {
    /// Chord with the primary modifier only.
    pub fn primary(key: char) -> Self {
        Self { key, shift: false }
    }

    /// Chord with the primary modifier plus Shift.
    pub fn primary_shift(key: char) -> Self {
        Self { key, shift: true }
    }
}

/// An action the shortcut table can resolve to.
///
/// Wrap and prefix actions carry their marker strings directly; the
/// prompted variants defer parameter collection to the session so a
/// cancelled prompt can abort before any state is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Wrap the selection in a fixed `before`/`after` pair.
    Wrap {
        /// Text inserted at the selection start.
        before: &'static str,
        /// Text inserted at the pre-insertion selection end.
        after: &'static str,
    },
    /// Prefix every line touched by the selection.
    PrefixLines {
        /// The line prefix.
        prefix: &'static str,
    },
    /// Prompt for a URL, then wrap the selection as a link.
    InsertLink,
    /// Prompt for an image URL, then wrap the selection as an image.
    InsertImage,
    /// Prompt for column and row counts, then insert a table skeleton.
    InsertTable,
    /// Restore the previous buffer snapshot.
    Undo,
    /// Restore the most recently undone snapshot.
    Redo,
}

/// Resolve a chord against the fixed table.
///
/// Returns `None` for unbound chords; callers must then leave the key event
/// unconsumed so default surface behavior proceeds.
pub fn resolve(chord: KeyChord) -> Option<EditorAction> {
    let key = chord.key.to_ascii_lowercase();
    let action = match (key, chord.shift) {
        ('b', false) => EditorAction::Wrap {
            before: markdown::BOLD_MARKER,
            after: markdown::BOLD_MARKER,
        },
        ('i', false) => EditorAction::Wrap {
            before: markdown::ITALIC_MARKER,
            after: markdown::ITALIC_MARKER,
        },
        ('k', false) => EditorAction::Wrap {
            before: markdown::CODE_MARKER,
            after: markdown::CODE_MARKER,
        },
        ('1', false) => EditorAction::PrefixLines {
            prefix: markdown::HEADING_PREFIXES[0],
        },
        ('2', false) => EditorAction::PrefixLines {
            prefix: markdown::HEADING_PREFIXES[1],
        },
        ('3', false) => EditorAction::PrefixLines {
            prefix: markdown::HEADING_PREFIXES[2],
        },
        ('p', false) => EditorAction::PrefixLines {
            prefix: markdown::BULLET_PREFIX,
        },
        ('q', false) => EditorAction::PrefixLines {
            prefix: markdown::QUOTE_PREFIX,
        },
        ('l', false) => EditorAction::InsertLink,
        ('z', false) => EditorAction::Undo,
        ('y', false) => EditorAction::Redo,
        ('c', true) => EditorAction::Wrap {
            before: markdown::CODE_BLOCK_OPEN,
            after: markdown::CODE_BLOCK_CLOSE,
        },
        ('s', true) => EditorAction::Wrap {
            before: markdown::STRIKETHROUGH_MARKER,
            after: markdown::STRIKETHROUGH_MARKER,
        },
        ('t', true) => EditorAction::PrefixLines {
            prefix: markdown::TASK_PREFIX,
        },
        ('h', true) => EditorAction::PrefixLines {
            prefix: markdown::RULE_PREFIX,
        },
        ('i', true) => EditorAction::InsertImage,
        ('g', true) => EditorAction::InsertTable,
        _ => return None,
    };
    Some(action)
}
