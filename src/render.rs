//! Escape-sequence emission.
//!
//! Stateless formatting helpers over a [`Terminal`]; the session decides
//! when to call them. Sequences are built in small stack buffers via
//! `core::fmt::Write`, keeping the crate allocation-free.

use core::fmt::Write as _;

use heapless::String;

use crate::traits::Terminal;

/// Clear from the terminal cursor to the end of the line.
pub(crate) const CLEAR_TO_END: &[u8] = b"\x1b[K";

/// Move the terminal cursor `offset` columns relative to where it stands:
/// `ESC [ <n> C` forward, `ESC [ <n> D` back. Zero emits nothing.
pub(crate) fn move_cursor<T: Terminal>(term: &mut T, offset: isize) {
    if offset == 0 {
        return;
    }
    let mut seq: String<16> = String::new();
    let n = offset.unsigned_abs();
    let dir = if offset > 0 { 'C' } else { 'D' };
    if write!(seq, "\x1b[{n}{dir}").is_ok() {
        term.write(seq.as_bytes());
    }
}

/// Reposition the terminal cursor to column 0 of the editable region: a
/// fixed-width move far enough left to cover any cursor position, then
/// forward past the prompt. `line_size` is the full edit buffer size.
pub(crate) fn reset_cursor<T: Terminal>(term: &mut T, line_size: usize, prompt_len: usize) {
    let mut seq: String<32> = String::new();
    let back = line_size + prompt_len + 2;
    if write!(seq, "\x1b[{back}D\x1b[{prompt_len}C").is_ok() {
        term.write(seq.as_bytes());
    }
}
