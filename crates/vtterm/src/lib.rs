//! A scrollback-capable VT screen model and a PTY-hosted embedded VT
//! emulator widget (§3, §4.5).
//!
//! The parser here is intentionally independent of `vtinput`'s: that one
//! turns real-terminal bytes into keyboard/mouse input events, while this
//! one reads a *child process's* output and recovers display-affecting
//! commands from it.

#![warn(clippy::pedantic)]

mod emulator;
mod parser;
mod screen;
mod sgr;

pub use emulator::{Emulator, EmulatorError, TermEvent};
pub use screen::{EraseMode, VtScreen};
