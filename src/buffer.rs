//! The fixed-capacity edit buffer.
//!
//! Pure state: all terminal output for edits is sequenced by the session so
//! that multi-step operations (escape handling, kill-line) can batch their
//! redraws. The buffer only upholds the byte-level invariants.

/// A mutable command line of at most `C - 1` bytes.
///
/// Invariant: `cursor <= len <= C - 1`, and the byte at index `len` is always
/// `0` so the live region is NUL-terminated like the wire format history
/// records use.
#[derive(Debug, Clone)]
pub struct LineBuffer<const C: usize> {
    buf: [u8; C],
    len: usize,
    cursor: usize,
}

impl<const C: usize> Default for LineBuffer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const C: usize> LineBuffer<C> {
    /// An empty line with the cursor at column 0.
    pub fn new() -> Self {
        Self {
            buf: [0; C],
            len: 0,
            cursor: 0,
        }
    }

    /// Maximum number of content bytes (`C - 1`; one byte is reserved for
    /// the terminator).
    pub fn capacity(&self) -> usize {
        C - 1
    }

    /// The live content, terminator excluded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Content from byte offset `from` (clamped) to the end of the line.
    pub fn tail(&self, from: usize) -> &[u8] {
        &self.buf[from.min(self.len)..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Logical insertion point, in bytes from the start of the line.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert `text` at the cursor, shifting the tail right. Input that does
    /// not fit is silently truncated. Returns the number of bytes actually
    /// inserted; cursor and length advance by that amount.
    pub fn insert(&mut self, text: &[u8]) -> usize {
        let take = text.len().min(self.capacity() - self.len);
        if take == 0 {
            return 0;
        }
        self.buf
            .copy_within(self.cursor..self.len, self.cursor + take);
        self.buf[self.cursor..self.cursor + take].copy_from_slice(&text[..take]);
        self.cursor += take;
        self.len += take;
        self.buf[self.len] = 0;
        take
    }

    /// Remove the byte before the cursor (backspace), shifting the tail
    /// left. Returns false when the cursor is at column 0.
    pub fn delete_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.buf.copy_within(self.cursor..self.len, self.cursor - 1);
        self.cursor -= 1;
        self.len -= 1;
        self.buf[self.len] = 0;
        true
    }

    /// Move the cursor by `offset`, clamped to `[0, len]`. Returns the delta
    /// actually applied (the caller emits the matching cursor-move sequence
    /// for exactly that amount).
    pub fn move_cursor(&mut self, offset: isize) -> isize {
        let target = self
            .cursor
            .saturating_add_signed(offset)
            .min(self.len);
        let applied = target as isize - self.cursor as isize;
        self.cursor = target;
        applied
    }

    /// Place the cursor at an absolute position, clamped to `[0, len]`.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.len);
    }

    /// Truncate the line at the cursor (kill to end of line).
    pub fn kill_to_end(&mut self) {
        self.len = self.cursor;
        self.buf[self.len] = 0;
    }

    /// Reset to an empty line, cursor at column 0.
    pub fn clear(&mut self) {
        self.buf[..=self.len].fill(0);
        self.len = 0;
        self.cursor = 0;
    }

    /// Raw storage, for operations that fill the line wholesale (history
    /// recall, tokenizer substitution). Callers must follow up with
    /// [`set_len`](Self::set_len) if they changed the content length.
    pub(crate) fn raw_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    /// Adopt externally written content of length `len` (clamped to
    /// capacity), re-terminate, and park the cursor at the end.
    pub(crate) fn set_len(&mut self, len: usize) {
        self.len = len.min(self.capacity());
        self.cursor = self.len;
        self.buf[self.len] = 0;
    }
}
