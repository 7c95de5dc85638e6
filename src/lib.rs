//! A minimal, zero-allocation line editing engine for byte-oriented command
//! shells.
//!
//! Feed the [`Session`] one input byte at a time (from a UART interrupt,
//! a raw-mode stdin, anything) and it does the rest: in-place editing with
//! cursor movement, a ring-buffer command history, tab completion, and
//! tokenization for dispatch. Output goes through a caller-supplied
//! [`Terminal`]; command execution, completion candidates, and the interrupt
//! hook come from a caller-supplied [`Host`].
//!
//! The crate is `no_std` and never allocates: every buffer is sized at
//! compile time through const generics.
//!
//! # Example
//! ```no_run
//! use readline_mini::{Host, Session, Signal, Terminal};
//!
//! struct Uart;
//! impl Terminal for Uart {
//!     fn write(&mut self, bytes: &[u8]) {
//!         // push bytes out of the serial port
//!         # let _ = bytes;
//!     }
//! }
//!
//! struct Shell;
//! impl Host for Shell {
//!     fn execute(&mut self, args: &[&[u8]]) {
//!         // dispatch args[0] against the command table
//!         # let _ = args;
//!     }
//! }
//!
//! let mut session: Session<Uart> = Session::new(Uart);
//! let mut shell = Shell;
//! session.show_prompt();
//! loop {
//!     let byte = 0; // read one byte from the UART
//!     if session.advance(&mut shell, byte) == Signal::Eof {
//!         break;
//!     }
//! }
//! ```

#![no_std]

pub mod buffer;
pub mod complete;
mod engine;
mod escape;
pub mod history;
pub mod key;
pub mod num;
mod render;
pub mod tokens;
pub mod traits;
pub mod types;

pub use crate::buffer::LineBuffer;
pub use crate::complete::common_prefix_len;
pub use crate::engine::{DEFAULT_PROMPT, DEFAULT_PROMPT_LEN, Session, SessionBuilder, Snapshot};
pub use crate::history::History;
pub use crate::traits::{Host, Terminal};
pub use crate::types::{HistoryDirection, NewlineMode, Signal};
