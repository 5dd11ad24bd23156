//! Terminal Markdown editor demo
//!
//! A single-file host for `mdedit-core`: it implements the kernel's seams
//! (text surface, parameter prompts) over a crossterm/ratatui terminal and
//! wires the shortcut table to real key events.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p tui-mdedit -- [file_path]
//! ```
//!
//! # Keys
//!
//! - Ctrl+B/I/K: bold / italic / inline code
//! - Ctrl+1/2/3: heading level 1-3
//! - Ctrl+P / Ctrl+Q: bullet list / quote
//! - Ctrl+L: link (prompts for URL)
//! - Ctrl+Z / Ctrl+Y: undo / redo
//! - Ctrl+Shift+C/S/T/H: bash block / strikethrough / task / rule
//! - Ctrl+Shift+I: image (prompts for URL)
//! - Ctrl+Shift+G: table (prompts for columns and rows)
//! - Ctrl+R: toggle preview pane
//! - Ctrl+E: export to README.md
//! - Ctrl+X: quit
//! - Arrows (+Shift to select), Home/End, Backspace, Enter: plain editing

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::io::stdout;
use std::rc::Rc;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mdedit_core::{
    DispatchOutcome, EditorAction, EditorSession, KeyChord, ParameterPrompts, PromptKind,
    Selection, TextSurface, offset, shortcuts,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// In-memory text area implementing the kernel's surface seam.
///
/// Offsets are UTF-16 code units throughout, matching the kernel. The
/// selection is stored as anchor/head so Shift+arrow extension keeps its
/// direction; the kernel only ever sees the normalized range.
struct TextArea {
    text: String,
    anchor: usize,
    head: usize,
}

impl TextArea {
    fn new(text: String) -> Self {
        Self {
            text,
            anchor: 0,
            head: 0,
        }
    }

    fn caret(&self) -> usize {
        self.head
    }

    fn clamp_all(&mut self) {
        let limit = offset::utf16_len(&self.text);
        self.anchor = self.anchor.min(limit);
        self.head = self.head.min(limit);
    }

    /// Replace the selected range (or insert at the caret) with `s`.
    ///
    /// This is a surface-level edit: typing does not pass through the
    /// kernel's history, exactly like typing into a plain textarea.
    fn insert_str(&mut self, s: &str) {
        let sel = self.selection();
        let start = offset::utf16_to_byte(&self.text, sel.start);
        let end = offset::utf16_to_byte(&self.text, sel.end);
        self.text.replace_range(start..end, s);
        let caret = sel.start + offset::utf16_len(s);
        self.anchor = caret;
        self.head = caret;
    }

    fn backspace(&mut self) {
        let sel = self.selection();
        if !sel.is_empty() {
            self.insert_str("");
            return;
        }
        if sel.start == 0 {
            return;
        }
        let end = offset::utf16_to_byte(&self.text, sel.start);
        let Some(ch) = self.text[..end].chars().next_back() else {
            return;
        };
        let start = end - ch.len_utf8();
        self.text.replace_range(start..end, "");
        let caret = sel.start - ch.len_utf16();
        self.anchor = caret;
        self.head = caret;
    }

    fn move_horizontal(&mut self, delta: isize, extend: bool) {
        let byte = offset::utf16_to_byte(&self.text, self.head);
        let moved = if delta < 0 {
            self.text[..byte]
                .chars()
                .next_back()
                .map(|ch| self.head - ch.len_utf16())
        } else {
            self.text[byte..]
                .chars()
                .next()
                .map(|ch| self.head + ch.len_utf16())
        };
        if let Some(target) = moved {
            self.head = target;
            if !extend {
                self.anchor = self.head;
            }
        } else if !extend {
            self.anchor = self.head;
        }
    }

    fn move_vertical(&mut self, delta: isize, extend: bool) {
        let (line, column) = self.line_column(self.head);
        let target_line = if delta < 0 {
            line.saturating_sub(delta.unsigned_abs())
        } else {
            line + delta as usize
        };
        self.head = self.offset_at(target_line, column);
        if !extend {
            self.anchor = self.head;
        }
    }

    fn move_to_line_edge(&mut self, end: bool, extend: bool) {
        let (line, _) = self.line_column(self.head);
        let column = if end { usize::MAX } else { 0 };
        self.head = self.offset_at(line, column);
        if !extend {
            self.anchor = self.head;
        }
    }

    /// (line, column) of a UTF-16 offset.
    fn line_column(&self, target: usize) -> (usize, usize) {
        let mut line_start = 0usize;
        for (index, line) in self.text.split('\n').enumerate() {
            let line_end = line_start + offset::utf16_len(line);
            if target <= line_end {
                return (index, target - line_start);
            }
            line_start = line_end + 1;
        }
        (0, 0)
    }

    /// UTF-16 offset of (line, column), clamping both.
    fn offset_at(&self, target_line: usize, column: usize) -> usize {
        let mut line_start = 0usize;
        let mut last = (0usize, 0usize);
        for (index, line) in self.text.split('\n').enumerate() {
            let len = offset::utf16_len(line);
            if index == target_line {
                return line_start + column.min(len);
            }
            last = (line_start, len);
            line_start += len + 1;
        }
        // Past the last line: clamp to it.
        last.0 + column.min(last.1)
    }
}

impl TextSurface for TextArea {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn selection(&self) -> Selection {
        Selection::new(self.anchor, self.head)
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.clamp_all();
    }

    fn set_selection(&mut self, selection: Selection) {
        self.anchor = selection.start;
        self.head = selection.end;
        self.clamp_all();
    }

    fn focus(&mut self) {}
}

/// Prompt values staged by the modal input line before dispatch.
#[derive(Clone, Default)]
struct StagedPrompts {
    queue: Rc<RefCell<VecDeque<String>>>,
}

impl ParameterPrompts for StagedPrompts {
    fn request(&mut self, _kind: PromptKind) -> Option<String> {
        self.queue.borrow_mut().pop_front()
    }
}

/// Modal prompt collection state.
struct PromptFlow {
    chord: KeyChord,
    labels: Vec<&'static str>,
    collected: Vec<String>,
    input: String,
}

impl PromptFlow {
    fn for_action(chord: KeyChord, action: EditorAction) -> Option<Self> {
        let labels: Vec<&'static str> = match action {
            EditorAction::InsertLink => vec!["Link URL"],
            EditorAction::InsertImage => vec!["Image URL"],
            EditorAction::InsertTable => vec!["Table columns", "Table rows"],
            _ => return None,
        };
        Some(Self {
            chord,
            labels,
            collected: Vec::new(),
            input: String::new(),
        })
    }

    fn current_label(&self) -> &'static str {
        self.labels[self.collected.len()]
    }

    /// Accept the current input line. Returns `true` once all values are in.
    fn accept(&mut self) -> bool {
        self.collected.push(std::mem::take(&mut self.input));
        self.collected.len() == self.labels.len()
    }
}

struct App {
    session: EditorSession<TextArea, StagedPrompts>,
    staged: StagedPrompts,
    prompt: Option<PromptFlow>,
    show_preview: bool,
    status: String,
    quit: bool,
}

impl App {
    fn new(initial: String) -> Self {
        let staged = StagedPrompts::default();
        let session = EditorSession::new(TextArea::new(initial), staged.clone());
        Self {
            session,
            staged,
            prompt: None,
            show_preview: true,
            status: "Ctrl+R preview | Ctrl+E export | Ctrl+X quit".to_string(),
            quit: false,
        }
    }

    fn handle_chord(&mut self, chord: KeyChord) {
        // Prompted actions collect their parameters through the modal line
        // first; everything else dispatches immediately.
        if let Some(action) = shortcuts::resolve(chord)
            && let Some(flow) = PromptFlow::for_action(chord, action)
        {
            self.prompt = Some(flow);
            return;
        }
        if self.session.handle_key(chord) == DispatchOutcome::Ignored {
            self.status = format!("unbound chord: {}", chord.key);
        }
    }

    fn finish_prompt(&mut self, flow: PromptFlow) {
        self.staged.queue.borrow_mut().extend(flow.collected);
        self.session.handle_key(flow.chord);
        // Anything left in the queue means the kernel aborted mid-way
        // (invalid dimension); drop the leftovers.
        self.staged.queue.borrow_mut().clear();
    }

    fn export(&mut self) {
        let artifact = self.session.export();
        match fs::write(&artifact.file_name, &artifact.contents) {
            Ok(()) => {
                self.session.mark_saved();
                self.status = format!(
                    "exported {} ({}, {} bytes)",
                    artifact.file_name,
                    artifact.mime_type,
                    artifact.contents.len()
                );
            }
            Err(err) => {
                self.status = format!("export failed: {err}");
            }
        }
    }
}

fn main() -> Result<()> {
    let initial = match std::env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => String::new(),
    };

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run(&mut terminal, App::new(initial));

    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        // The deferred wrap selection is committed only after a render, so
        // the commit always observes the post-mutation surface.
        app.session.commit_pending_selection();

        if app.quit {
            return Ok(());
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if let Some(mut flow) = app.prompt.take() {
            match key.code {
                KeyCode::Esc => {}
                KeyCode::Enter => {
                    if flow.accept() {
                        app.finish_prompt(flow);
                    } else {
                        app.prompt = Some(flow);
                    }
                }
                KeyCode::Backspace => {
                    flow.input.pop();
                    app.prompt = Some(flow);
                }
                KeyCode::Char(c) => {
                    flow.input.push(c);
                    app.prompt = Some(flow);
                }
                _ => {
                    app.prompt = Some(flow);
                }
            }
            continue;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
                'x' => app.quit = true,
                'e' => app.export(),
                'r' => app.show_preview = !app.show_preview,
                _ => {
                    let chord = if shift {
                        KeyChord::primary_shift(c)
                    } else {
                        KeyChord::primary(c)
                    };
                    app.handle_chord(chord);
                }
            },
            KeyCode::Char(c) => app.session.surface_mut().insert_str(&c.to_string()),
            KeyCode::Enter => app.session.surface_mut().insert_str("\n"),
            KeyCode::Backspace => app.session.surface_mut().backspace(),
            KeyCode::Left => app.session.surface_mut().move_horizontal(-1, shift),
            KeyCode::Right => app.session.surface_mut().move_horizontal(1, shift),
            KeyCode::Up => app.session.surface_mut().move_vertical(-1, shift),
            KeyCode::Down => app.session.surface_mut().move_vertical(1, shift),
            KeyCode::Home => app.session.surface_mut().move_to_line_edge(false, shift),
            KeyCode::End => app.session.surface_mut().move_to_line_edge(true, shift),
            _ => {}
        }
    }
}

fn draw(frame: &mut Frame, app: &App) {
    let [main, status_row, prompt_row] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    if app.show_preview {
        let [editor, preview] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(main);
        draw_editor(frame, app, editor);
        draw_preview(frame, app, preview);
    } else {
        draw_editor(frame, app, main);
    }

    draw_status(frame, app, status_row);
    draw_prompt(frame, app, prompt_row);
}

fn draw_editor(frame: &mut Frame, app: &App, area: Rect) {
    let surface = app.session.surface();
    let selection = surface.selection();
    let caret = surface.caret();

    let mut lines: Vec<Line> = Vec::new();
    let mut line_start = 0usize;
    let mut caret_row = 0usize;
    for (row, raw) in surface.text.split('\n').enumerate() {
        let line_end = line_start + offset::utf16_len(raw);
        if caret >= line_start && caret <= line_end {
            caret_row = row;
        }
        lines.push(styled_editor_line(raw, line_start, selection, caret));
        line_start = line_end + 1;
    }

    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = caret_row.saturating_sub(inner_height.saturating_sub(1).max(1));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Editor"))
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

/// Style one editor line: the selected range reversed, the caret shown as a
/// reversed cell when the selection is empty.
fn styled_editor_line<'a>(
    raw: &'a str,
    line_start: usize,
    selection: Selection,
    caret: usize,
) -> Line<'a> {
    let line_len = offset::utf16_len(raw);
    let line_end = line_start + line_len;
    let reversed = Style::default().add_modifier(Modifier::REVERSED);

    if selection.is_empty() {
        if caret < line_start || caret > line_end {
            return Line::from(raw);
        }
        let rel = caret - line_start;
        let split = offset::utf16_to_byte(raw, rel);
        let (before, rest) = raw.split_at(split);
        let mut chars = rest.chars();
        return match chars.next() {
            Some(ch) => Line::from(vec![
                Span::raw(before),
                Span::styled(ch.to_string(), reversed),
                Span::raw(chars.as_str()),
            ]),
            // Caret sits past the end of the line: show a phantom cell.
            None => Line::from(vec![Span::raw(before), Span::styled(" ", reversed)]),
        };
    }

    let sel_start = selection.start.clamp(line_start, line_end) - line_start;
    let sel_end = selection.end.clamp(line_start, line_end) - line_start;
    if sel_start == sel_end {
        return Line::from(raw);
    }
    let start_byte = offset::utf16_to_byte(raw, sel_start);
    let end_byte = offset::utf16_to_byte(raw, sel_end);
    Line::from(vec![
        Span::raw(&raw[..start_byte]),
        Span::styled(&raw[start_byte..end_byte], reversed),
        Span::raw(&raw[end_byte..]),
    ])
}

/// The host's best-effort renderer: line-based Markdown styling, never
/// failing on malformed input.
fn draw_preview(frame: &mut Frame, app: &App, area: Rect) {
    let text = app.session.surface().text();
    let lines: Vec<Line> = text.split('\n').map(preview_line).collect();
    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Preview"));
    frame.render_widget(paragraph, area);
}

fn preview_line(raw: &str) -> Line<'_> {
    let style = if raw.starts_with('#') {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if raw.starts_with("> ") {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    } else if raw.starts_with("- ") || raw.starts_with("* ") {
        Style::default().fg(Color::Green)
    } else if raw.starts_with("```") {
        Style::default().fg(Color::Yellow)
    } else if raw.starts_with("---") {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    Line::from(Span::styled(raw, style))
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let doc = app.session.document_state();
    let history = app.session.undo_redo_state();
    let modified = if doc.is_modified { "*" } else { "" };
    let line = Line::from(vec![
        Span::styled(
            format!(" README.md{modified} "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "{} lines | v{} | undo {} / redo {} | {}",
            doc.line_count, doc.version, history.undo_depth, history.redo_depth, app.status
        )),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_prompt(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.prompt {
        Some(flow) => Line::from(vec![
            Span::styled(
                format!(" {}: ", flow.current_label()),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(flow.input.clone()),
            Span::styled("▌", Style::default().fg(Color::Yellow)),
        ]),
        None => Line::from(Span::styled(
            " Ctrl+B bold  Ctrl+I italic  Ctrl+L link  Ctrl+Shift+G table  Ctrl+Z undo",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
