//! Interactive shell example driving the engine from a raw-mode terminal.
//!
//! Run with: cargo run --example shell
//!
//! Type `help` for the command list; Tab completes command names; the
//! arrow keys browse history. Ctrl-D exits.

use std::io::{self, Write as _};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use readline_mini::{Host, NewlineMode, Session, Signal, Terminal, num::parse_int};

const COMMANDS: &[&[u8]] = &[b"help", b"version", b"clear", b"echo", b"repeat"];

/// Terminal backend writing straight to stdout.
struct Stdout;

impl Terminal for Stdout {
    fn write(&mut self, bytes: &[u8]) {
        let mut out = io::stdout();
        let _ = out.write_all(bytes);
        let _ = out.flush();
    }
}

/// The shell itself: a fixed command table with name completion.
struct Shell {
    /// Scratch space for completion candidates, reused per request.
    matches: Vec<&'static [u8]>,
}

impl Shell {
    fn new() -> Self {
        Self {
            matches: Vec::new(),
        }
    }

    fn print(&self, text: &str) {
        Stdout.write(text.as_bytes());
    }
}

impl Host for Shell {
    fn execute(&mut self, args: &[&[u8]]) {
        match args[0] {
            b"help" => self.print(
                "commands:\r\n\
                 \thelp           - this list\r\n\
                 \tversion        - print the engine version\r\n\
                 \tclear          - clear the screen\r\n\
                 \techo <words>   - print the words back\r\n\
                 \trepeat <n> <w> - print a word n times\r\n",
            ),
            b"version" => self.print(concat!("readline_mini ", env!("CARGO_PKG_VERSION"), "\r\n")),
            b"clear" => self.print("\x1b[2J\x1b[H"),
            b"echo" => {
                for arg in &args[1..] {
                    Stdout.write(arg);
                    Stdout.write(b" ");
                }
                self.print("\r\n");
            }
            b"repeat" => {
                let n = args.get(1).map_or(1, |a| parse_int(a, 1, 0));
                let word = args.get(2).copied().unwrap_or(b"?");
                for _ in 0..n.max(0) {
                    Stdout.write(word);
                    Stdout.write(b"\r\n");
                }
            }
            other => {
                Stdout.write(b"unknown command: ");
                Stdout.write(other);
                self.print("\r\n");
            }
        }
    }

    fn complete(&mut self, args: &[&[u8]]) -> &[&[u8]] {
        self.matches.clear();
        // Only the command name is completable.
        if args.len() == 1 {
            let prefix = args[0];
            self.matches
                .extend(COMMANDS.iter().copied().filter(|c| c.starts_with(prefix)));
        }
        &self.matches
    }

    fn interrupt(&mut self) {
        self.print("^C\r\n");
    }
}

/// Map a crossterm key event onto the byte(s) a terminal would have sent.
fn key_bytes(key: KeyEvent) -> Option<&'static [u8]> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('a') => Some(b"\x01"),
            KeyCode::Char('b') => Some(b"\x02"),
            KeyCode::Char('c') => Some(b"\x03"),
            KeyCode::Char('d') => Some(b"\x04"),
            KeyCode::Char('e') => Some(b"\x05"),
            KeyCode::Char('f') => Some(b"\x06"),
            KeyCode::Char('k') => Some(b"\x0b"),
            KeyCode::Char('n') => Some(b"\x0e"),
            KeyCode::Char('p') => Some(b"\x10"),
            KeyCode::Char('r') => Some(b"\x12"),
            KeyCode::Char('u') => Some(b"\x15"),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Enter => Some(b"\r"),
        KeyCode::Tab => Some(b"\t"),
        KeyCode::Backspace => Some(b"\x7f"),
        KeyCode::Up => Some(b"\x1b[A"),
        KeyCode::Down => Some(b"\x1b[B"),
        KeyCode::Right => Some(b"\x1b[C"),
        KeyCode::Left => Some(b"\x1b[D"),
        KeyCode::Delete => Some(b"\x1b[3~"),
        KeyCode::Home => Some(b"\x1b[7~"),
        KeyCode::End => Some(b"\x1b[8~"),
        _ => None,
    }
}

fn main() -> io::Result<()> {
    let mut session: Session<Stdout> = Session::builder(Stdout)
        .newline(NewlineMode::CrOrLf)
        .build();
    let mut shell = Shell::new();

    enable_raw_mode()?;
    session.terminal_mut().write(b"type help for commands, Ctrl-D to exit\r\n");
    session.show_prompt();

    // One ASCII buffer per char keystroke; everything else maps statically.
    let mut scratch = [0u8; 4];
    'outer: loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };

        let bytes: &[u8] = if let Some(mapped) = key_bytes(key) {
            mapped
        } else if let KeyCode::Char(c) = key.code {
            if !c.is_ascii() {
                continue;
            }
            scratch[0] = c as u8;
            &scratch[..1]
        } else {
            continue;
        };

        for &b in bytes {
            match session.advance(&mut shell, b) {
                Signal::Continue => {}
                Signal::Interrupt => {
                    session.clear_line();
                    session.show_prompt();
                }
                Signal::Eof => break 'outer,
            }
        }
    }

    disable_raw_mode()?;
    println!();
    Ok(())
}
