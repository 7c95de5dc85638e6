//! Capability seams between the engine and its host.
//!
//! The engine performs no IO of its own: everything it shows on screen goes
//! through a [`Terminal`] injected at session construction, and everything it
//! asks of the application goes through a [`Host`] passed to each
//! [`advance`](crate::Session::advance) call.

/// Ordered, synchronous byte output to the terminal.
///
/// The only contract is that bytes appear in the order submitted. The session
/// owns its terminal; interleaving writes from elsewhere mid-edit will garble
/// the display but cannot corrupt the engine.
pub trait Terminal {
    /// Write `bytes` verbatim (text and escape sequences alike).
    fn write(&mut self, bytes: &[u8]);
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn write(&mut self, bytes: &[u8]) {
        (**self).write(bytes);
    }
}

/// The application side of the session: command execution, completion, and
/// the interrupt hook.
///
/// All methods default to no-ops so a minimal host only implements
/// [`execute`](Host::execute).
pub trait Host {
    /// Called once per submitted, non-empty, successfully tokenized line.
    ///
    /// `args` alias the edit buffer and are only valid for the duration of
    /// the call; copy anything that must outlive it.
    fn execute(&mut self, args: &[&[u8]]);

    /// Called when completion is requested (TAB). `args` are the tokens up
    /// to the cursor; the last one is the (possibly empty) prefix being
    /// completed. Return candidate strings: none for "no match", one for an
    /// unambiguous completion, several for a prefix completion plus listing.
    ///
    /// The returned slice typically borrows storage owned by the host; it
    /// only needs to stay valid until `advance` returns.
    fn complete(&mut self, args: &[&[u8]]) -> &[&[u8]] {
        let _ = args;
        &[]
    }

    /// Called when the interrupt byte (Ctrl-C) is received, before the
    /// session reports [`Signal::Interrupt`](crate::Signal) to the caller.
    fn interrupt(&mut self) {}
}
