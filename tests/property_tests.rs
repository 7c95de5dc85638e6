use proptest::prelude::*;
use readline_mini::{History, HistoryDirection, Session, tokens};

mod support;
use support::mock_host::MockHost;
use support::mock_term::MockTerm;

type TestSession = Session<MockTerm, 32, 64, 4>;

fn session() -> TestSession {
    Session::builder(MockTerm::new()).prompt("=> ", 3).build()
}

// Raw byte stream mixing text, editing controls, and escape fragments.
fn input_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            // Printable text
            0x20u8..0x7f,
            // The bound control bytes
            prop_oneof![
                Just(0x01u8),
                Just(0x02),
                Just(0x05),
                Just(0x06),
                Just(0x08),
                Just(0x09),
                Just(0x0a),
                Just(0x0b),
                Just(0x0d),
                Just(0x0e),
                Just(0x10),
                Just(0x12),
                Just(0x15),
                Just(0x7f),
            ],
            // Escape introducer and sequence bodies
            prop_oneof![
                Just(0x1bu8),
                Just(b'['),
                Just(b'A'),
                Just(b'B'),
                Just(b'C'),
                Just(b'D'),
                Just(b'3'),
                Just(b'7'),
                Just(b'8'),
                Just(b'~'),
            ],
            // Anything at all
            any::<u8>(),
        ],
        0..200,
    )
}

fn line_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0x21u8..0x7f, 1..20)
}

proptest! {
    // No byte stream may break the buffer invariants or panic.
    #[test]
    fn arbitrary_input_keeps_invariants(input in input_strategy()) {
        let mut session = session();
        let mut host = MockHost::new();
        for b in input {
            let _ = session.advance(&mut host, b);
            let snap = session.snapshot();
            prop_assert!(snap.cursor <= snap.len);
            prop_assert!(snap.len <= 31);
            prop_assert_eq!(session.line().len(), snap.len);
        }
    }

    // The line never accumulates control bytes, whatever was fed.
    #[test]
    fn line_holds_no_control_bytes(input in input_strategy()) {
        let mut session = session();
        let mut host = MockHost::new();
        for b in input {
            let _ = session.advance(&mut host, b);
        }
        for &b in session.line() {
            prop_assert!(b >= 0x20 && b != 0x7f);
        }
    }

    // Splitting is always undone exactly by the guard drop.
    #[test]
    fn split_restores_the_buffer(
        mut line in prop::collection::vec(
            prop_oneof![Just(b' '), 0x21u8..0x7f],
            0..40,
        ),
        limit in 0usize..48,
    ) {
        let before = line.clone();
        {
            let _split = tokens::split::<4>(&mut line, limit);
        }
        prop_assert_eq!(line, before);
    }

    // Whatever was saved last is what Older hands back first.
    #[test]
    fn history_returns_the_newest_first(
        lines in prop::collection::vec(line_strategy(), 1..10),
    ) {
        let mut hist: History<64> = History::new();
        let mut last_saved = None;
        for line in &lines {
            if line.len() <= 62 {
                hist.save(line);
                last_saved = Some(line.clone());
            }
        }
        let mut out = [0u8; 64];
        let got = hist
            .restore(&mut out, HistoryDirection::Older)
            .map(|n| out[..n].to_vec());
        prop_assert_eq!(got, last_saved);
    }

    // Browsing never corrupts the store: going down and back up returns
    // the same records.
    #[test]
    fn history_browse_is_repeatable(
        lines in prop::collection::vec(line_strategy(), 1..8),
        walks in prop::collection::vec(any::<bool>(), 0..20),
    ) {
        let mut hist: History<128> = History::new();
        for line in &lines {
            hist.save(line);
        }
        let count = hist.record_count();

        let mut out = [0u8; 64];
        for older in walks {
            let dir = if older { HistoryDirection::Older } else { HistoryDirection::Newer };
            let _ = hist.restore(&mut out, dir);
            prop_assert!(hist.replay_depth() <= count);
        }
        prop_assert_eq!(hist.record_count(), count);

        hist.reset_replay();
        let got = hist
            .restore(&mut out, HistoryDirection::Older)
            .map(|n| out[..n].to_vec());
        prop_assert_eq!(got.as_deref(), lines.last().map(|l| l.as_slice()));
    }

    // A submitted line reaches the host re-joined from the same words.
    #[test]
    fn submitted_words_round_trip(
        words in prop::collection::vec(
            prop::collection::vec(0x21u8..0x7f, 1..5),
            1..4,
        ),
    ) {
        let mut session = session();
        let mut host = MockHost::new();
        let mut typed = 0usize;
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                let _ = session.advance(&mut host, b' ');
                typed += 1;
            }
            for &b in word {
                let _ = session.advance(&mut host, b);
                typed += 1;
            }
        }
        let _ = session.advance(&mut host, b'\n');

        // Lines that fit untruncated come back word for word.
        if typed <= 31 {
            prop_assert_eq!(host.executed.len(), 1);
            prop_assert_eq!(&host.executed[0], &words);
        }
    }
}
