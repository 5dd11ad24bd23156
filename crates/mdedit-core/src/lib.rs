#![warn(missing_docs)]
//! mdedit-core - Headless Markdown Editing Kernel
//!
//! # Overview
//!
//! `mdedit-core` is the engine of a Markdown authoring surface: it applies
//! structural text transforms (wrapping a selection, prefixing lines)
//! resolved from a fixed shortcut table, and maintains a linear snapshot
//! undo/redo history. It does not render Markdown and does not own a text
//! widget. The host supplies an editable text surface (a browser textarea,
//! a TUI text area) and a renderer, and the kernel drives them through
//! narrow seams.
//!
//! # Core Features
//!
//! - **Selection-aware transforms**: pure `(buffer, selection) -> edit`
//!   functions; wrap transforms re-select the original substring exactly
//! - **Snapshot History**: bounded pre-image undo stack, redo invalidation
//!   on new edits
//! - **Shortcut Dispatch**: static chord table, case-insensitive keys
//! - **Prompt Gating**: cancelled parameters abort with zero side effects
//! - **UTF-16 Offsets**: all arithmetic in the surface's own offset
//!   convention
//! - **State Tracking**: version numbers and change notifications
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Editor Session (dispatch + notifications)  │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Shortcut Table                             │  ← Chord resolution
//! ├─────────────────────────────────────────────┤
//! │  Transforms & Markdown Builders             │  ← Edit computation
//! ├─────────────────────────────────────────────┤
//! │  History (snapshot stacks)                  │  ← Undo/redo
//! ├─────────────────────────────────────────────┤
//! │  UTF-16 Offset Conversion                   │  ← Slicing arithmetic
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ## Using transforms directly
//!
//! ```rust
//! use mdedit_core::{Selection, prefix_lines, wrap_symmetric};
//!
//! let edit = wrap_symmetric("hello world", Selection::new(0, 5), "**");
//! assert_eq!(edit.text, "**hello** world");
//! assert_eq!(edit.selection, Some(Selection::new(2, 7)));
//!
//! let edit = prefix_lines("a\nb\nc", Selection::caret(2), "- ");
//! assert_eq!(edit.text, "a\n- b\nc");
//! ```
//!
//! ## Using the history
//!
//! ```rust
//! use mdedit_core::EditHistory;
//!
//! let mut history = EditHistory::default();
//! history.capture_before_edit("draft");
//! assert_eq!(history.undo("draft, edited").as_deref(), Some("draft"));
//! assert_eq!(history.redo("draft").as_deref(), Some("draft, edited"));
//! ```
//!
//! For a full session wired to a surface and prompts, see [`session`].
//!
//! # Module Description
//!
//! - [`offset`] - UTF-16 code-unit offset conversion
//! - [`history`] - snapshot undo/redo stacks
//! - [`transform`] - wrap and line-prefix transforms
//! - [`markdown`] - marker constants and snippet builders
//! - [`shortcuts`] - the fixed chord table
//! - [`session`] - the orchestrating editor session
//! - [`state`] - state snapshots and change notifications
//! - [`export`] - line endings and the export artifact

pub mod export;
pub mod history;
pub mod markdown;
pub mod offset;
pub mod session;
pub mod shortcuts;
pub mod state;
pub mod transform;

pub use export::{
    EXPORT_FILE_NAME, EXPORT_MIME_TYPE, ExportArtifact, LineEnding, export_markdown,
};
pub use history::{DEFAULT_MAX_UNDO, EditHistory};
pub use markdown::{image_wrap, link_wrap, table_skeleton};
pub use session::{
    DispatchOutcome, EditorSession, ParameterPrompts, PromptKind, TextSurface,
};
pub use shortcuts::{EditorAction, KeyChord};
pub use state::{
    DocumentState, StateChange, StateChangeCallback, StateChangeType, UndoRedoState,
};
pub use transform::{Edit, Selection, prefix_lines, wrap, wrap_symmetric};
