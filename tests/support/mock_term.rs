use readline_mini::Terminal;

/// Terminal that captures everything the session writes.
#[derive(Default, Debug)]
pub struct MockTerm {
    pub out: Vec<u8>,
}

impl MockTerm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured output so far, lossily decoded for assertions.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }

    /// Drain the capture, so a test can assert on one step in isolation.
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.out)
    }
}

impl Terminal for MockTerm {
    fn write(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }
}
