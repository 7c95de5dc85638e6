//! Incremental decoder for the ANSI escape sequences the engine accepts.
//!
//! A pure state machine: the session feeds it one byte at a time and applies
//! whatever action falls out. Unrecognized input at any point abandons the
//! sequence with no action and no visible effect.

/// Decoder state. `Idle` means no sequence is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum EscapeState {
    #[default]
    Idle,
    /// ESC received, expecting `[`.
    Start,
    /// `ESC [` received, expecting the final or intermediate byte.
    Bracket,
    /// `ESC [ 7` received, expecting `~` (home).
    HomePending,
    /// `ESC [ 8` received, expecting `~` (end).
    EndPending,
    /// `ESC [ 3` received, expecting `~` (delete).
    DeletePending,
}

/// Editing action produced by a completed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EscapeAction {
    HistoryOlder,
    HistoryNewer,
    CursorForward,
    CursorBack,
    Home,
    End,
    DeleteAtCursor,
}

impl EscapeState {
    pub(crate) fn is_active(self) -> bool {
        self != EscapeState::Idle
    }

    /// Advance the decoder by one byte.
    pub(crate) fn step(self, byte: u8) -> (Self, Option<EscapeAction>) {
        use EscapeAction::*;
        use EscapeState::*;
        match (self, byte) {
            (Start, b'[') => (Bracket, None),
            (Bracket, b'A') => (Idle, Some(HistoryOlder)),
            (Bracket, b'B') => (Idle, Some(HistoryNewer)),
            (Bracket, b'C') => (Idle, Some(CursorForward)),
            (Bracket, b'D') => (Idle, Some(CursorBack)),
            (Bracket, b'7') => (HomePending, None),
            (Bracket, b'8') => (EndPending, None),
            (Bracket, b'3') => (DeletePending, None),
            (HomePending, b'~') => (Idle, Some(Home)),
            (EndPending, b'~') => (Idle, Some(End)),
            (DeletePending, b'~') => (Idle, Some(DeleteAtCursor)),
            // Anything else aborts the sequence, silently.
            _ => (Idle, None),
        }
    }
}
