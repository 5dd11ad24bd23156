//! The editor session: shortcut dispatch wired to one surface, one history,
//! and one prompt provider.
//!
//! # Overview
//!
//! [`EditorSession`] is the primary entry point of the kernel. Hosts feed it
//! key chords; the session resolves them through the shortcut table,
//! collects and validates prompt parameters, captures the pre-edit buffer
//! into history, computes the transform, and applies the result to the
//! surface. A cancelled or invalid prompt aborts the whole action before
//! anything is touched, history included.
//!
//! # Deferred selection restore
//!
//! Wrap transforms re-select the original substring after the edit. The
//! surface typically re-renders in response to `set_text`, so applying the
//! selection immediately would be overwritten. The session instead parks
//! the new selection and applies it in
//! [`commit_pending_selection`](EditorSession::commit_pending_selection),
//! which the host calls after its next render. The commit step always
//! observes the post-mutation surface.
//!
//! # Example
//!
//! ```rust
//! use mdedit_core::{
//!     DispatchOutcome, EditorSession, KeyChord, ParameterPrompts, PromptKind, Selection,
//!     TextSurface,
//! };
//!
//! struct Area {
//!     text: String,
//!     selection: Selection,
//! }
//!
//! impl TextSurface for Area {
//!     fn text(&self) -> String {
//!         self.text.clone()
//!     }
//!     fn selection(&self) -> Selection {
//!         self.selection
//!     }
//!     fn set_text(&mut self, text: &str) {
//!         self.text = text.to_string();
//!     }
//!     fn set_selection(&mut self, selection: Selection) {
//!         self.selection = selection;
//!     }
//!     fn focus(&mut self) {}
//! }
//!
//! struct NoPrompts;
//!
//! impl ParameterPrompts for NoPrompts {
//!     fn request(&mut self, _kind: PromptKind) -> Option<String> {
//!         None
//!     }
//! }
//!
//! let area = Area {
//!     text: "hello world".to_string(),
//!     selection: Selection::new(0, 5),
//! };
//! let mut session = EditorSession::new(area, NoPrompts);
//!
//! assert_eq!(session.handle_key(KeyChord::primary('b')), DispatchOutcome::Handled);
//! assert_eq!(session.surface().text(), "**hello** world");
//!
//! // The host renders, then commits the deferred selection.
//! session.commit_pending_selection();
//! assert_eq!(session.surface().selection(), Selection::new(2, 7));
//! ```

use crate::export::{ExportArtifact, LineEnding, export_markdown};
use crate::history::EditHistory;
use crate::markdown;
use crate::offset::utf16_len;
use crate::shortcuts::{self, EditorAction, KeyChord};
use crate::state::{
    DocumentState, StateChange, StateChangeCallback, StateChangeType, UndoRedoState,
};
use crate::transform::{self, Selection};

/// The editable text surface the session drives.
///
/// Offsets are UTF-16 code units; the convention must match the surface's
/// own exactly, since all transform arithmetic depends on it.
pub trait TextSurface {
    /// Current full text.
    fn text(&self) -> String;
    /// Current selection (may be reported inverted; the transforms normalize).
    fn selection(&self) -> Selection;
    /// Replace the full text.
    fn set_text(&mut self, text: &str);
    /// Programmatically set the selection.
    fn set_selection(&mut self, selection: Selection);
    /// Give the surface input focus.
    fn focus(&mut self);
}

/// What a prompt is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Link target URL.
    LinkUrl,
    /// Image source URL.
    ImageUrl,
    /// Table column count.
    TableColumns,
    /// Table row count.
    TableRows,
}

/// Synchronous single-value parameter request.
///
/// `None` means the prompt was dismissed. The session additionally treats
/// empty strings and (for dimensions) non-numeric or non-positive values as
/// cancellation, so implementations can return raw user input.
pub trait ParameterPrompts {
    /// Request one value of the given kind.
    fn request(&mut self, kind: PromptKind) -> Option<String>;
}

/// Whether a key chord was consumed.
///
/// `Ignored` chords must be left to the surface's default behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The chord resolved to an action (even if a prompt then cancelled it).
    Handled,
    /// The chord is not in the shortcut table.
    Ignored,
}

/// One editing session: a surface, a prompt provider, and the history and
/// version state that tie them together.
pub struct EditorSession<S, P> {
    surface: S,
    prompts: P,
    history: EditHistory,
    pending_selection: Option<Selection>,
    line_ending: LineEnding,
    version: u64,
    saved_version: u64,
    subscribers: Vec<StateChangeCallback>,
}

impl<S: TextSurface, P: ParameterPrompts> EditorSession<S, P> {
    /// Create a session over a surface and a prompt provider.
    ///
    /// CRLF input is normalized to the kernel's internal LF convention; the
    /// detected ending is remembered and re-applied on export.
    pub fn new(surface: S, prompts: P) -> Self {
        let mut session = Self {
            surface,
            prompts,
            history: EditHistory::default(),
            pending_selection: None,
            line_ending: LineEnding::Lf,
            version: 0,
            saved_version: 0,
            subscribers: Vec::new(),
        };

        let text = session.surface.text();
        session.line_ending = LineEnding::detect_in_text(&text);
        if session.line_ending == LineEnding::Crlf {
            // Load-time normalization is not an edit: no capture, no version bump.
            session.surface.set_text(&LineEnding::normalize_to_lf(&text));
        }
        session
    }

    /// Resolve and execute a key chord.
    ///
    /// Every action except undo/redo captures the pre-edit buffer first.
    /// Prompted actions validate their parameters before anything is
    /// touched: cancellation leaves the buffer, both history stacks, and
    /// the document version byte-for-byte unchanged.
    pub fn handle_key(&mut self, chord: KeyChord) -> DispatchOutcome {
        let Some(action) = shortcuts::resolve(chord) else {
            return DispatchOutcome::Ignored;
        };
        tracing::trace!(
            target: "mdedit.dispatch",
            key = %chord.key,
            shift = chord.shift,
            ?action,
            "chord resolved"
        );

        match action {
            EditorAction::Wrap { before, after } => self.apply_wrap(before, after),
            EditorAction::PrefixLines { prefix } => self.apply_prefix(prefix),
            EditorAction::InsertLink => {
                if let Some(url) = self.request_url(PromptKind::LinkUrl) {
                    let (before, after) = markdown::link_wrap(&url);
                    self.apply_wrap(&before, &after);
                }
            }
            EditorAction::InsertImage => {
                if let Some(url) = self.request_url(PromptKind::ImageUrl) {
                    let (before, after) = markdown::image_wrap(&url);
                    self.apply_wrap(&before, &after);
                }
            }
            EditorAction::InsertTable => {
                if let Some((columns, rows)) = self.request_table_dimensions() {
                    let table = markdown::table_skeleton(columns, rows);
                    self.apply_wrap(&table, "");
                }
            }
            EditorAction::Undo => self.undo(),
            EditorAction::Redo => self.redo(),
        }

        DispatchOutcome::Handled
    }

    /// Apply the parked post-edit selection and focus the surface.
    ///
    /// Hosts call this once after each render. A call with nothing parked
    /// is a no-op.
    pub fn commit_pending_selection(&mut self) {
        let Some(selection) = self.pending_selection.take() else {
            return;
        };
        self.surface.focus();
        self.surface.set_selection(selection);
        self.notify(StateChangeType::SelectionRestored, self.version, self.version);
    }

    /// Build the export artifact from the current buffer.
    pub fn export(&self) -> ExportArtifact {
        export_markdown(&self.surface.text(), self.line_ending)
    }

    /// Mark the current version as saved/exported for modified-state tracking.
    pub fn mark_saved(&mut self) {
        self.saved_version = self.version;
    }

    /// Subscribe to state change notifications.
    pub fn subscribe(&mut self, callback: impl FnMut(&StateChange) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Document state snapshot.
    pub fn document_state(&self) -> DocumentState {
        let text = self.surface.text();
        DocumentState {
            line_count: text.split('\n').count(),
            char_count: text.chars().count(),
            utf16_len: utf16_len(&text),
            byte_count: text.len(),
            is_modified: self.version != self.saved_version,
            version: self.version,
        }
    }

    /// Undo/redo stack state snapshot.
    pub fn undo_redo_state(&self) -> UndoRedoState {
        UndoRedoState {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
            undo_depth: self.history.undo_depth(),
            redo_depth: self.history.redo_depth(),
        }
    }

    /// The surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The surface, mutably. Host-side edits made here (typing, cursor
    /// movement) are surface-level changes: they do not pass through
    /// history.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The prompt provider.
    pub fn prompts(&self) -> &P {
        &self.prompts
    }

    /// The prompt provider, mutably (hosts that stage prompt values ahead
    /// of dispatch need this).
    pub fn prompts_mut(&mut self) -> &mut P {
        &mut self.prompts
    }

    /// The history, read-only.
    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    fn apply_wrap(&mut self, before: &str, after: &str) {
        let buffer = self.surface.text();
        let selection = self.surface.selection();

        self.history.capture_before_edit(&buffer);
        let edit = transform::wrap(&buffer, selection, before, after);
        self.replace_buffer(&edit.text, StateChangeType::DocumentModified);
        self.pending_selection = edit.selection;
    }

    fn apply_prefix(&mut self, prefix: &str) {
        let buffer = self.surface.text();
        let selection = self.surface.selection();

        self.history.capture_before_edit(&buffer);
        let edit = transform::prefix_lines(&buffer, selection, prefix);
        self.replace_buffer(&edit.text, StateChangeType::DocumentModified);
    }

    fn undo(&mut self) {
        let current = self.surface.text();
        match self.history.undo(&current) {
            Some(previous) => {
                self.replace_buffer(&previous, StateChangeType::DocumentRestored);
            }
            None => {
                tracing::trace!(target: "mdedit.dispatch", op = "undo", "nothing to undo");
            }
        }
    }

    fn redo(&mut self) {
        let current = self.surface.text();
        match self.history.redo(&current) {
            Some(next) => {
                self.replace_buffer(&next, StateChangeType::DocumentRestored);
            }
            None => {
                tracing::trace!(target: "mdedit.dispatch", op = "redo", "nothing to redo");
            }
        }
    }

    /// Replace the buffer wholesale, bump the version, notify subscribers.
    ///
    /// Any previously parked selection is stale against the new buffer and
    /// is dropped; [`apply_wrap`](Self::apply_wrap) re-parks afterwards.
    fn replace_buffer(&mut self, text: &str, change_type: StateChangeType) {
        self.pending_selection = None;
        self.surface.set_text(text);
        let old_version = self.version;
        self.version += 1;
        self.notify(change_type, old_version, self.version);
    }

    fn notify(&mut self, change_type: StateChangeType, old_version: u64, new_version: u64) {
        let change = StateChange {
            change_type,
            old_version,
            new_version,
        };
        for callback in &mut self.subscribers {
            callback(&change);
        }
    }

    /// A URL parameter: `None` or empty means cancelled.
    fn request_url(&mut self, kind: PromptKind) -> Option<String> {
        let url = self.prompts.request(kind)?;
        if url.is_empty() {
            tracing::debug!(target: "mdedit.dispatch", ?kind, "prompt cancelled");
            return None;
        }
        Some(url)
    }

    /// One table dimension: positive integers only, anything else cancels.
    fn request_dimension(&mut self, kind: PromptKind) -> Option<usize> {
        let raw = self.prompts.request(kind)?;
        let value = raw.trim().parse::<usize>().ok()?;
        if value == 0 {
            return None;
        }
        Some(value)
    }

    /// Both table dimensions; either failing cancels the whole action.
    fn request_table_dimensions(&mut self) -> Option<(usize, usize)> {
        let columns = self.request_dimension(PromptKind::TableColumns)?;
        let rows = self.request_dimension(PromptKind::TableRows)?;
        Some((columns, rows))
    }
}
