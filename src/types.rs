/// The result of feeding one byte into a [`Session`](crate::Session).
///
/// Editing keys are handled internally and report [`Signal::Continue`]; the
/// two sentinel control bytes are passed back to the caller's read loop so it
/// can decide what to do (print a message, stop reading, etc.). Neither
/// sentinel terminates the session itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Signal {
    /// The byte was consumed; keep feeding input.
    Continue,
    /// The interrupt byte (Ctrl-C) was received. The host's
    /// [`interrupt`](crate::Host::interrupt) hook has already run.
    Interrupt,
    /// The end-of-input byte (Ctrl-D) was received.
    Eof,
}

/// The line-termination convention of the connected terminal.
///
/// Selects both which incoming byte (or byte pair) submits the line and the
/// byte form echoed for a visual newline. Double-byte conventions are tracked
/// with a one-byte pending state inside the session; a pair split across two
/// reads still submits exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewlineMode {
    /// LF submits, CR is ignored. Echoes `\n`.
    #[default]
    Lf,
    /// CR submits, LF is ignored. Echoes `\r`.
    Cr,
    /// CR followed by LF submits. Echoes `\r\n`.
    CrLf,
    /// LF followed by CR submits. Echoes `\n\r`.
    LfCr,
    /// Either byte alone submits; the second byte of an adjacent CR+LF or
    /// LF+CR pair is swallowed so the pair submits once. Echoes `\r\n`.
    /// The right choice for raw-mode terminals, where Enter sends a bare CR
    /// but output still needs both bytes.
    CrOrLf,
}

impl NewlineMode {
    /// The byte sequence echoed to the terminal for one visual newline.
    pub fn echo(self) -> &'static [u8] {
        match self {
            NewlineMode::Lf => b"\n",
            NewlineMode::Cr => b"\r",
            NewlineMode::CrLf => b"\r\n",
            NewlineMode::LfCr => b"\n\r",
            NewlineMode::CrOrLf => b"\r\n",
        }
    }
}

/// Direction of a history recall request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    /// Step back towards the oldest record (up arrow, Ctrl-P).
    Older,
    /// Step forward towards the line being composed (down arrow, Ctrl-N).
    Newer,
}
