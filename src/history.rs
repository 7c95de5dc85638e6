//! The command history ring.
//!
//! Submitted lines are packed into a fixed `[u8; H]` ring as length-prefixed
//! records: `[len: 1 byte][payload]`, with a zero length byte marking the end
//! of the record chain. `begin` addresses the oldest record's length byte,
//! `end` the terminating sentinel. When a new line does not fit, the oldest
//! records are evicted until it does. Overhead is one byte per saved line, so
//! the number of recallable lines depends on their lengths, not a fixed slot
//! count.

use crate::types::HistoryDirection;

/// Ring-buffer history store of capacity `H` bytes.
///
/// `H` must be at least the line capacity of the owning session, or lines
/// that fit the edit buffer would be unsaveable. The one-byte length prefix
/// additionally caps records at 255 bytes.
#[derive(Debug, Clone)]
pub struct History<const H: usize> {
    buf: [u8; H],
    begin: usize,
    end: usize,
    /// Replay cursor: how many records back from the newest the browse
    /// position currently is. 0 means "not browsing".
    cur: usize,
}

impl<const H: usize> Default for History<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const H: usize> History<H> {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            buf: [0; H],
            begin: 0,
            end: 0,
            cur: 0,
        }
    }

    /// True when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.buf[self.begin] == 0
    }

    /// Number of stored records (walks the record chain).
    pub fn record_count(&self) -> usize {
        let mut cnt = 0;
        let mut idx = self.begin;
        while self.buf[idx] != 0 {
            idx = self.next_record(idx);
            cnt += 1;
        }
        cnt
    }

    /// How many records back from the newest the replay cursor stands.
    pub fn replay_depth(&self) -> usize {
        self.cur
    }

    /// Forget the browse position (called whenever a line is submitted or a
    /// new record is saved).
    pub fn reset_replay(&mut self) {
        self.cur = 0;
    }

    /// Append `line` as the newest record, evicting the oldest records while
    /// the ring lacks room. Lines that can never fit (`len > H - 2` or
    /// longer than the length prefix can encode) are dropped whole, with no
    /// eviction side effects. Empty lines are never recorded; a zero length
    /// byte is the chain terminator, not a record.
    pub fn save(&mut self, line: &[u8]) {
        let len = line.len();
        if len == 0 || len > H.saturating_sub(2) || len > u8::MAX as usize {
            return;
        }

        while !self.has_room(len) {
            self.evict_oldest();
        }

        // First record after the store was (or became) empty: begin and end
        // coincide, so this length byte doubles as the chain head.
        if self.buf[self.begin] == 0 {
            self.buf[self.begin] = len as u8;
        }

        self.copy_in(self.wrap(self.end + 1), line);
        self.buf[self.end] = len as u8;
        self.end = self.wrap(self.end + len + 1);
        self.buf[self.end] = 0;
        self.cur = 0;
    }

    /// Move the replay cursor one step and copy the record it lands on into
    /// `out`, returning the record length.
    ///
    /// `Older` steps towards the oldest record; once the replay cursor
    /// stands on the oldest, further `Older` requests return `None` and the
    /// cursor stays put. `Newer` steps back towards the line being composed;
    /// at depth 0 it reports `Some(0)`, meaning "restore an empty line".
    /// `None` otherwise is the defensive no-record path (browsing an empty
    /// store, or a record that does not fit `out`); the caller leaves the
    /// edit buffer untouched.
    pub fn restore(&mut self, out: &mut [u8], dir: HistoryDirection) -> Option<usize> {
        let cnt = self.record_count();
        match dir {
            HistoryDirection::Older => {
                if cnt < self.cur {
                    return None;
                }
                let idx = self.seek(cnt as isize - self.cur as isize - 1);
                if self.buf[idx] == 0 {
                    return None;
                }
                let len = self.buf[idx] as usize;
                if len > out.len() {
                    return None;
                }
                self.cur += 1;
                self.copy_out(idx, out, len);
                Some(len)
            }
            HistoryDirection::Newer => {
                if self.cur == 0 {
                    // Newer than the newest record: the uncommitted line,
                    // restored as empty.
                    return Some(0);
                }
                self.cur -= 1;
                let idx = self.seek(cnt as isize - self.cur as isize);
                let len = self.buf[idx] as usize;
                if len > out.len() {
                    return None;
                }
                self.copy_out(idx, out, len);
                Some(len)
            }
        }
    }

    /// Index arithmetic goes through here so every wraparound is explicit.
    fn wrap(&self, idx: usize) -> usize {
        idx % H
    }

    /// Length byte index of the record following the one at `idx`.
    fn next_record(&self, idx: usize) -> usize {
        self.wrap(idx + self.buf[idx] as usize + 1)
    }

    /// Walk `steps` records forward from `begin`, stopping early at the
    /// sentinel. A negative or zero `steps` stays at `begin`.
    fn seek(&self, steps: isize) -> usize {
        let mut idx = self.begin;
        let mut j = 0isize;
        while self.buf[idx] != 0 && j != steps {
            idx = self.next_record(idx);
            j += 1;
        }
        idx
    }

    /// Whether `len + 1` encoded bytes fit between `end` and `begin`.
    fn has_room(&self, len: usize) -> bool {
        if self.buf[self.begin] == 0 {
            return true;
        }
        let free = if self.end >= self.begin {
            H - self.end + self.begin
        } else {
            self.begin - self.end
        };
        // One byte for the length prefix, one for the sentinel.
        free > len + 1
    }

    fn evict_oldest(&mut self) {
        self.begin = self.next_record(self.begin);
    }

    /// Copy `src` into the ring starting at `at`, splitting across the wrap
    /// boundary when needed.
    fn copy_in(&mut self, at: usize, src: &[u8]) {
        let first = src.len().min(H - at);
        self.buf[at..at + first].copy_from_slice(&src[..first]);
        self.buf[..src.len() - first].copy_from_slice(&src[first..]);
    }

    /// Copy the `len`-byte payload of the record at `idx` into `out`.
    fn copy_out(&self, idx: usize, out: &mut [u8], len: usize) {
        let start = self.wrap(idx + 1);
        let first = len.min(H - start);
        out[..first].copy_from_slice(&self.buf[start..start + first]);
        out[first..len].copy_from_slice(&self.buf[..len - first]);
    }
}
