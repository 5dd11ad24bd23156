//! Scripted session example
//!
//! Drives an [`EditorSession`] over an in-memory surface with pre-staged
//! prompt answers, the way a host event loop would.

use std::collections::VecDeque;

use mdedit_core::{
    EditorSession, KeyChord, ParameterPrompts, PromptKind, Selection, TextSurface,
};

struct MemorySurface {
    text: String,
    selection: Selection,
}

impl TextSurface for MemorySurface {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    fn focus(&mut self) {}
}

struct QueuedPrompts(VecDeque<String>);

impl ParameterPrompts for QueuedPrompts {
    fn request(&mut self, kind: PromptKind) -> Option<String> {
        let value = self.0.pop_front();
        println!("   prompt {kind:?} -> {value:?}");
        value
    }
}

fn main() {
    let surface = MemorySurface {
        text: "ship the editor".to_string(),
        selection: Selection::new(0, 4),
    };
    let prompts = QueuedPrompts(VecDeque::from(["https://example.com".to_string()]));
    let mut session = EditorSession::new(surface, prompts);

    session.subscribe(|change| {
        println!(
            "   change: {:?} v{} -> v{}",
            change.change_type, change.old_version, change.new_version
        );
    });

    println!("=== Scripted shortcut session ===\n");
    println!("initial: {:?}\n", session.surface().text());

    println!("1. Ctrl+B (bold)");
    session.handle_key(KeyChord::primary('b'));
    session.commit_pending_selection();
    println!("   buffer: {:?}", session.surface().text());
    println!("   selection: {:?}\n", session.surface().selection());

    println!("2. Ctrl+Z (undo)");
    session.handle_key(KeyChord::primary('z'));
    println!("   buffer: {:?}\n", session.surface().text());

    println!("3. Ctrl+L (link, URL staged)");
    session.handle_key(KeyChord::primary('l'));
    session.commit_pending_selection();
    println!("   buffer: {:?}\n", session.surface().text());

    println!("4. Ctrl+Shift+G (table, no staged answers -> silent cancel)");
    session.handle_key(KeyChord::primary_shift('g'));
    println!("   buffer: {:?}\n", session.surface().text());

    let artifact = session.export();
    println!(
        "5. export -> {} ({}, {} bytes)",
        artifact.file_name,
        artifact.mime_type,
        artifact.contents.len()
    );
}
