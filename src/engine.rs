//! The per-byte input dispatcher and session state.

use crate::buffer::LineBuffer;
use crate::complete::common_prefix_len;
use crate::escape::{EscapeAction, EscapeState};
use crate::history::History;
use crate::key;
use crate::render;
use crate::tokens;
use crate::traits::{Host, Terminal};
use crate::types::{HistoryDirection, NewlineMode, Signal};

/// Prompt used unless the builder overrides it (green `=> `).
pub const DEFAULT_PROMPT: &str = "\x1b[32m=>\x1b[0m ";
/// Visible width of [`DEFAULT_PROMPT`] (color escapes take no columns).
pub const DEFAULT_PROMPT_LEN: usize = 3;

const TOKEN_OVERFLOW_MSG: &[u8] = b"ERROR: too many tokens";

/// An interactive line editing session.
///
/// `C` is the edit buffer size in bytes (lines hold at most `C - 1`), `H`
/// the history ring size, `N` the token limit per line. Feed input one byte
/// at a time through [`advance`](Session::advance); the session edits in
/// place, echoes through its [`Terminal`], and calls back into the [`Host`]
/// on submission, completion, and interrupt.
///
/// The session is single-threaded and not reentrant: exactly one byte is
/// processed to completion per call, and concurrent calls on one session
/// must be serialized by the caller. Nothing here blocks or allocates.
#[derive(Debug)]
pub struct Session<T, const C: usize = 256, const H: usize = 1024, const N: usize = 16> {
    term: T,
    line: LineBuffer<C>,
    history: History<H>,
    escape: EscapeState,
    /// First byte of a two-byte line ending, waiting for its partner.
    pending_newline: Option<u8>,
    newline: NewlineMode,
    prompt: &'static str,
    prompt_len: usize,
}

/// Configures and creates a [`Session`]. Obtained from
/// [`Session::builder`].
#[derive(Debug)]
pub struct SessionBuilder<T, const C: usize = 256, const H: usize = 1024, const N: usize = 16> {
    term: T,
    newline: NewlineMode,
    prompt: &'static str,
    prompt_len: usize,
}

impl<T: Terminal, const C: usize, const H: usize, const N: usize> SessionBuilder<T, C, H, N> {
    /// Set the prompt text and its visible width (escape codes in the text
    /// take no columns, so the width cannot be derived from the text).
    pub fn prompt(mut self, text: &'static str, visible_len: usize) -> Self {
        self.prompt = text;
        self.prompt_len = visible_len;
        self
    }

    /// Set the terminal's line-ending convention.
    pub fn newline(mut self, mode: NewlineMode) -> Self {
        self.newline = mode;
        self
    }

    pub fn build(self) -> Session<T, C, H, N> {
        const {
            assert!(C >= 2, "line buffer must hold at least one byte plus terminator");
            assert!(H >= C, "history ring must be at least as large as the line buffer");
        }
        Session {
            term: self.term,
            line: LineBuffer::new(),
            history: History::new(),
            escape: EscapeState::Idle,
            pending_newline: None,
            newline: self.newline,
            prompt: self.prompt,
            prompt_len: self.prompt_len,
        }
    }
}

/// Point-in-time view of session state, for hosts and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Current line length in bytes.
    pub len: usize,
    /// Cursor position in bytes from the start of the line.
    pub cursor: usize,
    /// Whether an escape sequence is mid-decode.
    pub escape_active: bool,
    /// History browse depth (0 when not browsing).
    pub replay_depth: usize,
}

impl<T: Terminal, const C: usize, const H: usize, const N: usize> Session<T, C, H, N> {
    /// Start configuring a session around `term`.
    pub fn builder(term: T) -> SessionBuilder<T, C, H, N> {
        SessionBuilder {
            term,
            newline: NewlineMode::default(),
            prompt: DEFAULT_PROMPT,
            prompt_len: DEFAULT_PROMPT_LEN,
        }
    }

    /// A session with the default prompt and newline convention.
    pub fn new(term: T) -> Self {
        Self::builder(term).build()
    }

    /// The line currently being composed.
    pub fn line(&self) -> &[u8] {
        self.line.as_bytes()
    }

    /// Cursor position within [`line`](Session::line).
    pub fn cursor(&self) -> usize {
        self.line.cursor()
    }

    /// The injected terminal, e.g. for host output between commands.
    pub fn terminal(&self) -> &T {
        &self.term
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.term
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            len: self.line.len(),
            cursor: self.line.cursor(),
            escape_active: self.escape.is_active(),
            replay_depth: self.history.replay_depth(),
        }
    }

    /// Print the prompt. Call once after the output channel is up; after
    /// that the session reprints it on every submission.
    pub fn show_prompt(&mut self) {
        self.term.write(self.prompt.as_bytes());
    }

    /// Discard the line being composed, typically after an interrupt. The
    /// caller reprints the prompt when it wants one.
    pub fn clear_line(&mut self) {
        self.line.clear();
        self.history.reset_replay();
        self.escape = EscapeState::Idle;
        self.pending_newline = None;
    }

    /// Process one input byte to completion.
    ///
    /// Returns [`Signal::Interrupt`] or [`Signal::Eof`] when the matching
    /// control byte was received, so the caller's read loop can react;
    /// every other byte reports [`Signal::Continue`].
    pub fn advance<E: Host>(&mut self, host: &mut E, byte: u8) -> Signal {
        if self.escape.is_active() {
            self.handle_escape(byte);
            return Signal::Continue;
        }

        // A half-received two-byte line ending only survives into the very
        // next byte.
        let pending = self.pending_newline.take();

        match byte {
            key::CR | key::LF => {
                if self.line_terminated(pending, byte) {
                    self.submit(host);
                }
            }
            key::TAB => self.complete_line(host),
            key::ESC => self.escape = EscapeState::Start,
            key::CTRL_U => {
                while self.line.cursor() > 0 {
                    self.backspace();
                }
                self.print_line(0, self.line.cursor());
            }
            key::CTRL_K => {
                self.term.write(render::CLEAR_TO_END);
                self.line.kill_to_end();
            }
            key::CTRL_E => self.cursor_to_end(),
            key::CTRL_A => {
                self.reset_cursor();
                self.line.set_cursor(0);
            }
            key::CTRL_F => self.cursor_by(1),
            key::CTRL_B => self.cursor_by(-1),
            key::CTRL_P => self.history_navigate(HistoryDirection::Older),
            key::CTRL_N => self.history_navigate(HistoryDirection::Newer),
            key::CTRL_H | key::DEL => {
                self.backspace();
                self.print_line(self.line.cursor(), self.line.cursor());
            }
            key::CTRL_R => {
                self.newline_echo();
                self.show_prompt();
                self.reset_cursor();
                self.print_line(0, self.line.cursor());
            }
            key::CTRL_C => {
                host.interrupt();
                return Signal::Interrupt;
            }
            key::CTRL_D => return Signal::Eof,
            _ => {
                // No leading separator on an empty line, no control bytes.
                let reject =
                    (byte == tokens::SEPARATOR && self.line.is_empty()) || key::is_control(byte);
                if !reject && self.line.insert(&[byte]) > 0 {
                    self.print_line(self.line.cursor() - 1, self.line.cursor());
                }
            }
        }
        Signal::Continue
    }

    /// Whether `byte` completes the configured line ending. Arms the
    /// pending state for the first byte of a two-byte convention.
    fn line_terminated(&mut self, pending: Option<u8>, byte: u8) -> bool {
        match self.newline {
            NewlineMode::Lf => byte == key::LF,
            NewlineMode::Cr => byte == key::CR,
            NewlineMode::CrLf => {
                if byte == key::CR {
                    self.pending_newline = Some(key::CR);
                    false
                } else {
                    pending == Some(key::CR)
                }
            }
            NewlineMode::LfCr => {
                if byte == key::LF {
                    self.pending_newline = Some(key::LF);
                    false
                } else {
                    pending == Some(key::LF)
                }
            }
            NewlineMode::CrOrLf => {
                if pending.is_some_and(|p| p != byte) {
                    // Second half of an adjacent pair; already submitted.
                    false
                } else {
                    self.pending_newline = Some(byte);
                    true
                }
            }
        }
    }

    /// Line submission: echo the newline, save to history, tokenize, hand
    /// the tokens to the executor, restore the buffer, reprint the prompt,
    /// and reset for the next line.
    fn submit<E: Host>(&mut self, host: &mut E) {
        self.newline_echo();

        if !self.line.is_empty() {
            self.history.save(self.line.as_bytes());
        }

        let len = self.line.len();
        let overflowed;
        {
            let split = tokens::split::<N>(self.line.raw_mut(), len);
            overflowed = split.overflowed();
            if !overflowed && !split.is_empty() {
                let args = split.args();
                host.execute(&args);
            }
            // Guard drop restores the separators before the buffer is
            // visible to anything else.
        }
        if overflowed {
            self.term.write(TOKEN_OVERFLOW_MSG);
            self.newline_echo();
        }

        self.show_prompt();
        self.line.clear();
        self.history.reset_replay();
        self.escape = EscapeState::Idle;
    }

    /// Tab completion per the reconciliation rules: one candidate completes
    /// fully plus a separator, several complete to their common prefix and
    /// are listed, none is a no-op.
    fn complete_line<E: Host>(&mut self, host: &mut E) {
        let cursor = self.line.cursor();

        let mut split = tokens::split::<N>(self.line.raw_mut(), cursor);
        if split.overflowed() {
            return;
        }
        // Cursor on a separator (or column 0): the word being completed has
        // not started yet, so its prefix is empty.
        if (cursor == 0 || split.ends_on_separator()) && !split.push_empty() {
            return;
        }
        let typed_len = split.last_len();
        let args = split.args();
        let cands = host.complete(&args);
        let count = cands.len();
        drop(args);
        drop(split);

        if count == 0 {
            return;
        }

        let full_len = if count == 1 {
            cands[0].len()
        } else {
            common_prefix_len(cands)
        };

        if count > 1 {
            self.newline_echo();
            for cand in cands {
                self.term.write(cand);
                self.term.write(&[tokens::SEPARATOR]);
            }
            self.newline_echo();
            self.show_prompt();
        }

        if full_len > 0 {
            if full_len > typed_len {
                self.line.insert(&cands[0][typed_len..full_len]);
            }
            if count == 1 {
                self.line.insert(&[tokens::SEPARATOR]);
            }
        }
        self.reset_cursor();
        self.print_line(0, self.line.cursor());
    }

    fn handle_escape(&mut self, byte: u8) {
        let (next, action) = self.escape.step(byte);
        self.escape = next;
        let Some(action) = action else { return };
        match action {
            EscapeAction::HistoryOlder => self.history_navigate(HistoryDirection::Older),
            EscapeAction::HistoryNewer => self.history_navigate(HistoryDirection::Newer),
            EscapeAction::CursorForward => self.cursor_by(1),
            EscapeAction::CursorBack => self.cursor_by(-1),
            EscapeAction::Home => {
                self.reset_cursor();
                self.line.set_cursor(0);
            }
            EscapeAction::End => self.cursor_to_end(),
            EscapeAction::DeleteAtCursor => {
                if self.line.cursor() < self.line.len() {
                    self.cursor_by(1);
                    self.backspace();
                    self.print_line(self.line.cursor(), self.line.cursor());
                }
            }
        }
    }

    /// Replace the line with the history record in `dir` and redraw. A
    /// store with nothing to offer leaves the line untouched.
    fn history_navigate(&mut self, dir: HistoryDirection) {
        if let Some(n) = self.history.restore(self.line.raw_mut(), dir) {
            self.line.set_len(n);
            self.reset_cursor();
            self.print_line(0, self.line.cursor());
        }
    }

    /// Move the logical cursor by `offset` (clamped) and the terminal
    /// cursor by the delta actually applied.
    fn cursor_by(&mut self, offset: isize) {
        let applied = self.line.move_cursor(offset);
        render::move_cursor(&mut self.term, applied);
    }

    fn cursor_to_end(&mut self) {
        let applied = self.line.move_cursor(self.line.len() as isize);
        render::move_cursor(&mut self.term, applied);
    }

    /// Erase one byte before the cursor, both on screen and in the buffer.
    /// Callers follow up with a tail redraw.
    fn backspace(&mut self) {
        if self.line.delete_before_cursor() {
            self.term.write(b"\x1b[D \x1b[D");
        }
    }

    /// Redraw from byte offset `from` to the end of the line, then park the
    /// terminal cursor at column `cursor_to` of the editable region.
    fn print_line(&mut self, from: usize, cursor_to: usize) {
        self.term.write(render::CLEAR_TO_END);
        self.term.write(self.line.tail(from));
        self.reset_cursor();
        render::move_cursor(&mut self.term, cursor_to as isize);
    }

    fn reset_cursor(&mut self) {
        render::reset_cursor(&mut self.term, C, self.prompt_len);
    }

    fn newline_echo(&mut self) {
        self.term.write(self.newline.echo());
    }
}
