//! Control byte values recognized by the dispatcher.
//!
//! The engine consumes raw bytes, so keys are plain `u8` constants rather
//! than an event type. Hosts feeding pre-decoded key events should map them
//! back to these bytes (arrow keys map to the ANSI sequences the decoder in
//! this crate understands: `ESC [ A` and friends).

/// Ctrl-A: move cursor to the start of the line.
pub const CTRL_A: u8 = 0x01;
/// Ctrl-B: move cursor one position back.
pub const CTRL_B: u8 = 0x02;
/// Ctrl-C: interrupt; reported to the caller as [`Signal::Interrupt`](crate::Signal).
pub const CTRL_C: u8 = 0x03;
/// Ctrl-D: end of input; reported to the caller as [`Signal::Eof`](crate::Signal).
pub const CTRL_D: u8 = 0x04;
/// Ctrl-E: move cursor to the end of the line.
pub const CTRL_E: u8 = 0x05;
/// Ctrl-F: move cursor one position forward.
pub const CTRL_F: u8 = 0x06;
/// Ctrl-H: backspace.
pub const CTRL_H: u8 = 0x08;
/// Horizontal tab: trigger completion.
pub const TAB: u8 = 0x09;
/// Line feed.
pub const LF: u8 = 0x0a;
/// Ctrl-K: kill from cursor to end of line.
pub const CTRL_K: u8 = 0x0b;
/// Carriage return.
pub const CR: u8 = 0x0d;
/// Ctrl-N: recall the next (newer) history line.
pub const CTRL_N: u8 = 0x0e;
/// Ctrl-P: recall the previous (older) history line.
pub const CTRL_P: u8 = 0x10;
/// Ctrl-R: reprint the prompt and the current line.
pub const CTRL_R: u8 = 0x12;
/// Ctrl-U: kill from start of line to cursor.
pub const CTRL_U: u8 = 0x15;
/// Escape: starts an ANSI escape sequence.
pub const ESC: u8 = 0x1b;
/// Delete: treated as backspace (most terminals send it for the
/// backspace key).
pub const DEL: u8 = 0x7f;

/// Whether `byte` is a control byte rather than insertable text.
///
/// Bytes 0x80..=0xFF are treated as text; the engine is byte-oriented and
/// leaves their interpretation to the host.
pub fn is_control(byte: u8) -> bool {
    byte < 0x20 || byte == DEL
}
