//! Candidate reconciliation helpers for tab completion.
//!
//! The session drives the completion flow (tokenize, ask the host, insert,
//! list); the prefix arithmetic lives here.

/// Length of the longest prefix shared by every candidate: the first index
/// at which any pair disagrees, bounded by the shortest candidate. Zero for
/// an empty candidate set.
pub fn common_prefix_len(candidates: &[&[u8]]) -> usize {
    let Some(&first) = candidates.first() else {
        return 0;
    };
    let shortest = candidates.iter().map(|c| c.len()).min().unwrap_or(0);
    for i in 0..shortest {
        if candidates.iter().any(|c| c[i] != first[i]) {
            return i;
        }
    }
    shortest
}
