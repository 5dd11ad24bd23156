//! Session state snapshots and change notifications.
//!
//! The session exposes its state to hosts in a structured, immutable
//! manner: value-type snapshots for queries, and [`StateChange`] records
//! delivered to subscribed callbacks after every buffer replacement. Hosts
//! drive preview re-rendering and chrome updates (undo/redo button state,
//! modified markers) from these.

/// Document state snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentState {
    /// Total line count (`'\n'`-separated; N newlines means N+1 lines).
    pub line_count: usize,
    /// Total character count (Unicode scalar values).
    pub char_count: usize,
    /// Total length in UTF-16 code units (the surface offset convention).
    pub utf16_len: usize,
    /// Total byte count (UTF-8).
    pub byte_count: usize,
    /// Whether the buffer has changed since the last export/save mark.
    pub is_modified: bool,
    /// Document version, incremented on every buffer replacement.
    pub version: u64,
}

/// Undo/redo stack state snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub struct UndoRedoState {
    /// Whether an undo would succeed.
    pub can_undo: bool,
    /// Whether a redo would succeed.
    pub can_redo: bool,
    /// Undo stack depth.
    pub undo_depth: usize,
    /// Redo stack depth.
    pub redo_depth: usize,
}

/// What kind of state change a notification describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub enum StateChangeType {
    /// The buffer was replaced by a transform.
    DocumentModified,
    /// The buffer was replaced by undo or redo.
    DocumentRestored,
    /// The deferred post-render selection was applied to the surface.
    SelectionRestored,
}

/// A state change record delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(serde::Serialize, serde::Deserialize))]
pub struct StateChange {
    /// Change kind.
    pub change_type: StateChangeType,
    /// Document version before the change.
    pub old_version: u64,
    /// Document version after the change.
    pub new_version: u64,
}

/// Subscriber callback type.
///
/// The session is single-threaded by construction, so callbacks need not be
/// `Send`.
pub type StateChangeCallback = Box<dyn FnMut(&StateChange)>;
