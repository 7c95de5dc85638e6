//! Destructive in-place tokenization of the edit buffer.
//!
//! Separator runs are overwritten with NUL bytes while the split is alive,
//! giving each token a terminated run without copying anything. The
//! substitution is reversed when the [`TokenSplit`] guard drops, on every
//! exit path, so callers cannot forget to restore the line before the next
//! redraw.

use heapless::Vec;

/// The token separator byte.
pub const SEPARATOR: u8 = b' ';

/// Split the first `limit` bytes of `line` into at most `N` tokens.
///
/// Separators inside the region are replaced with `0` in place; the returned
/// guard restores them when dropped. If the region holds more than `N`
/// tokens the split stops early and the guard reports
/// [`overflowed`](TokenSplit::overflowed); the buffer is still restored on
/// drop.
pub fn split<const N: usize>(line: &mut [u8], limit: usize) -> TokenSplit<'_, N> {
    let limit = limit.min(line.len());
    let mut spans: Vec<(usize, usize), N> = Vec::new();
    let mut overflowed = false;
    let mut ind = 0;

    loop {
        while ind < limit && line[ind] == SEPARATOR {
            line[ind] = 0;
            ind += 1;
        }
        if ind >= limit {
            break;
        }
        let start = ind;
        while ind < limit && line[ind] != SEPARATOR {
            ind += 1;
        }
        if spans.push((start, ind - start)).is_err() {
            overflowed = true;
            break;
        }
    }

    TokenSplit {
        line,
        limit,
        spans,
        overflowed,
    }
}

/// A live tokenization of a buffer region. See [`split`].
pub struct TokenSplit<'a, const N: usize> {
    line: &'a mut [u8],
    limit: usize,
    spans: Vec<(usize, usize), N>,
    overflowed: bool,
}

impl<const N: usize> TokenSplit<'_, N> {
    /// True when the region held more than `N` tokens and the split was
    /// abandoned.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    pub fn token_count(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The bytes of token `i`.
    pub fn get(&self, i: usize) -> &[u8] {
        let (start, len) = self.spans[i];
        &self.line[start..start + len]
    }

    /// Length of the final token, 0 when there are none.
    pub fn last_len(&self) -> usize {
        self.spans.last().map_or(0, |&(_, len)| len)
    }

    /// Whether the split region ends on a (substituted) separator, i.e. the
    /// cursor sits just past a completed word.
    pub fn ends_on_separator(&self) -> bool {
        self.limit > 0 && self.line[self.limit - 1] == 0
    }

    /// Append a synthetic empty token (the prefix of a word not yet begun),
    /// used by completion when the cursor sits on a separator. Fails when
    /// the token list is already full.
    pub fn push_empty(&mut self) -> bool {
        self.spans.push((self.limit, 0)).is_ok()
    }

    /// Collect the token byte slices for handing to a host callback.
    pub fn args(&self) -> Vec<&[u8], N> {
        self.spans
            .iter()
            .map(|&(start, len)| &self.line[start..start + len])
            .collect()
    }
}

impl<const N: usize> Drop for TokenSplit<'_, N> {
    fn drop(&mut self) {
        // The line never contains NUL bytes of its own (control bytes are
        // rejected on insert), so every 0 in the region is a substituted
        // separator.
        for b in &mut self.line[..self.limit] {
            if *b == 0 {
                *b = SEPARATOR;
            }
        }
    }
}
