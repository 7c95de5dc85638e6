use readline_mini::{Session, common_prefix_len};

mod support;
use support::mock_host::MockHost;
use support::mock_term::MockTerm;

type TestSession = Session<MockTerm, 64, 128, 8>;

const TAB: u8 = 0x09;

fn session() -> TestSession {
    Session::builder(MockTerm::new()).prompt("=> ", 3).build()
}

fn feed(session: &mut TestSession, host: &mut MockHost, bytes: &[u8]) {
    for &b in bytes {
        let _ = session.advance(host, b);
    }
}

#[test]
fn prefix_of_nothing_is_zero() {
    assert_eq!(common_prefix_len(&[]), 0);
}

#[test]
fn prefix_of_one_is_its_length() {
    assert_eq!(common_prefix_len(&[b"help"]), 4);
}

#[test]
fn prefix_stops_at_first_disagreement() {
    assert_eq!(common_prefix_len(&[b"help", b"hello"]), 3);
    assert_eq!(common_prefix_len(&[b"version", b"verbose"]), 3);
    assert_eq!(common_prefix_len(&[b"abc", b"xyz"]), 0);
}

#[test]
fn prefix_is_bounded_by_the_shortest() {
    assert_eq!(common_prefix_len(&[b"he", b"help", b"hello"]), 2);
    assert_eq!(common_prefix_len(&[b"", b"help"]), 0);
}

#[test]
fn single_candidate_completes_fully_with_separator() {
    let mut session = session();
    let mut host = MockHost::with_candidates(&[b"version"]);

    feed(&mut session, &mut host, b"ver");
    let _ = session.advance(&mut host, TAB);

    assert_eq!(session.line(), b"version ");
    assert_eq!(session.cursor(), 8);
    // The host saw the partial word.
    assert_eq!(host.completion_requests, vec![vec![b"ver".to_vec()]]);
}

#[test]
fn multiple_candidates_complete_to_common_prefix() {
    let mut session = session();
    let mut host = MockHost::with_candidates(&[b"help", b"hello"]);

    feed(&mut session, &mut host, b"he");
    let _ = session.advance(&mut host, TAB);

    // Extended to "hel", no separator appended.
    assert_eq!(session.line(), b"hel");
    // Both candidates were listed for the user.
    let out = session.terminal().text();
    assert!(out.contains("help"));
    assert!(out.contains("hello"));
}

#[test]
fn no_candidates_leaves_the_line_alone() {
    let mut session = session();
    let mut host = MockHost::new();

    feed(&mut session, &mut host, b"xyz");
    session.terminal_mut().take();
    let _ = session.advance(&mut host, TAB);

    assert_eq!(session.line(), b"xyz");
}

#[test]
fn completion_on_empty_line_offers_empty_prefix() {
    let mut session = session();
    let mut host = MockHost::with_candidates(&[b"help", b"clear"]);

    let _ = session.advance(&mut host, TAB);

    // The host was asked with a single empty token.
    assert_eq!(host.completion_requests, vec![vec![Vec::<u8>::new()]]);
    // No shared prefix, so the line stays empty and both are listed.
    assert_eq!(session.line(), b"");
    assert!(session.terminal().text().contains("clear"));
}

#[test]
fn completion_after_separator_starts_a_new_word() {
    let mut session = session();
    let mut host = MockHost::with_candidates(&[b"on", b"off"]);

    feed(&mut session, &mut host, b"set ");
    let _ = session.advance(&mut host, TAB);

    // Two tokens offered: the command and the empty word under the cursor.
    assert_eq!(
        host.completion_requests,
        vec![vec![b"set".to_vec(), Vec::new()]]
    );
    // "on"/"off" share "o".
    assert_eq!(session.line(), b"set o");
}

#[test]
fn completion_uses_only_bytes_left_of_the_cursor() {
    let mut session = session();
    let mut host = MockHost::with_candidates(&[b"version"]);

    feed(&mut session, &mut host, b"ver tail");
    // Move the cursor back to just after "ver".
    for _ in 0..5 {
        let _ = session.advance(&mut host, 0x02); // Ctrl-B
    }
    let _ = session.advance(&mut host, TAB);

    assert_eq!(host.completion_requests, vec![vec![b"ver".to_vec()]]);
    // The completion is inserted at the cursor; the tail survives.
    assert_eq!(session.line(), b"version  tail");
}

#[test]
fn completion_restores_separators_in_the_line() {
    let mut session = session();
    let mut host = MockHost::with_candidates(&[b"cc"]);

    feed(&mut session, &mut host, b"aa bb cc");
    let _ = session.advance(&mut host, TAB);

    // The spaces zeroed during tokenization came back.
    assert_eq!(session.line(), b"aa bb cc ");
}

#[test]
fn completion_with_too_many_tokens_is_abandoned() {
    let mut session = session();
    let mut host = MockHost::with_candidates(&[b"ok"]);

    feed(&mut session, &mut host, b"a b c d e f g h i");
    let _ = session.advance(&mut host, TAB);

    assert!(host.completion_requests.is_empty());
    assert_eq!(session.line(), b"a b c d e f g h i");
}

#[test]
fn exact_match_still_appends_separator() {
    let mut session = session();
    let mut host = MockHost::with_candidates(&[b"help"]);

    feed(&mut session, &mut host, b"help");
    let _ = session.advance(&mut host, TAB);

    assert_eq!(session.line(), b"help ");
}
