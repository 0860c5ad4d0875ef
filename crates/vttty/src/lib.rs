//! Raw-mode TTY lifecycle, `SIGWINCH` handling, and the threaded event
//! loop that turns tty bytes into library events (§4.4, §4.5, §5).

#![warn(clippy::pedantic)]

mod event;
mod features;
mod loop_;
pub mod panic_guard;
mod query;
mod raw_mode;
pub mod signal;

pub use event::{CapEvent, Event};
pub use features::Features;
pub use loop_::{EventLoop, EventLoopConfig};
pub use query::probe_sequence;
pub use raw_mode::RawTty;

/// Errors surfaced by tty and event-loop operations (§7).
#[derive(Debug, thiserror::Error)]
pub enum TtyError {
    #[error("tty I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("signal handler table is full (max 8 registered signals)")]
    SignalTableFull,
    #[error("the tty communication channel was severed")]
    CommunicationSevered,
}
