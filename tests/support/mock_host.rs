use readline_mini::Host;

/// Host that records every callback and serves canned completion
/// candidates.
#[derive(Default, Debug)]
pub struct MockHost {
    /// One entry per `execute` call: the owned argument vectors.
    pub executed: Vec<Vec<Vec<u8>>>,
    /// One entry per `complete` call: the tokens the engine offered.
    pub completion_requests: Vec<Vec<Vec<u8>>>,
    /// Candidates every `complete` call returns.
    pub candidates: Vec<&'static [u8]>,
    pub interrupts: usize,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candidates(candidates: &[&'static [u8]]) -> Self {
        Self {
            candidates: candidates.to_vec(),
            ..Self::default()
        }
    }

    /// Arguments of the only `execute` call, decoded for assertions.
    pub fn single_execution(&self) -> Vec<String> {
        assert_eq!(self.executed.len(), 1, "expected exactly one execution");
        self.executed[0]
            .iter()
            .map(|a| String::from_utf8_lossy(a).into_owned())
            .collect()
    }
}

impl Host for MockHost {
    fn execute(&mut self, args: &[&[u8]]) {
        self.executed
            .push(args.iter().map(|a| a.to_vec()).collect());
    }

    fn complete(&mut self, args: &[&[u8]]) -> &[&[u8]] {
        self.completion_requests
            .push(args.iter().map(|a| a.to_vec()).collect());
        &self.candidates
    }

    fn interrupt(&mut self) {
        self.interrupts += 1;
    }
}
