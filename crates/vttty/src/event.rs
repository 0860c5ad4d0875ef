//! The event loop's output: a closed set of library events, independent
//! of whatever event type the application itself uses.

use vtinput::TerminalInputEventOwned;

/// One event produced by an [`crate::EventLoop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A parsed keyboard, mouse, paste, or focus event, or an in-band
    /// resize (DEC mode 2048) reported directly by the parser.
    Input(TerminalInputEventOwned),
    /// The kernel-reported terminal size changed, detected via `SIGWINCH`.
    WinSize { cols: u16, rows: u16 },
    /// A capability was confirmed during `query_terminal`.
    Cap(CapEvent),
    /// `query_terminal`'s DA1 synchronization signal fired.
    ProbeComplete,
}

/// A single capability confirmed by the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapEvent {
    SyncOutput,
    UnicodeCore,
    ColorSchemeUpdates,
    KittyKeyboard,
    Rgb,
    SgrPixelMouse,
}

/// The closed interface the reader thread pushes events through.
///
/// The application never implements this itself; [`crate::EventLoop`]
/// hands out a channel-backed sink internally. It exists as a trait so
/// the reader thread's code does not need to know it is a channel.
pub(crate) trait EventSink: Send {
    fn push(&self, event: Event);
}

impl EventSink for crossbeam_channel::Sender<Event> {
    fn push(&self, event: Event) {
        // The loop has already been stopped if this fails; dropping the
        // event is correct since there is no longer a consumer.
        let _ = self.send(event);
    }
}
