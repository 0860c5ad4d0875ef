//! Scoped terminal-mode acquisition: alternate screen, mouse tracking,
//! bracketed paste, focus reporting, and Kitty keyboard enhancement.
//!
//! Every mode enabled here is disabled again by [`EventLoop::leave_screen`]
//! on every exit path (§5: "every scoped acquisition ... is released on
//! all exit paths including panics").

use std::io::Write;

use vtansi::Encode;
use vtcmd::cursor::{HideCursor, ShowCursor};
use vtcmd::mode::{
    DisableBracketedPaste, DisableFocusReporting, EnableBracketedPaste, EnableFocusReporting,
};
use vtcmd::screen::{EnterAlternateScreen, LeaveAlternateScreen};

const MOUSE_SGR_ENABLE: &[u8] = b"\x1b[?1000;1002;1006h";
const MOUSE_SGR_DISABLE: &[u8] = b"\x1b[?1000;1002;1006l";

// Push/pop the Kitty keyboard protocol's progressive enhancement flags;
// 31 = 0b11111, every flag the protocol currently defines.
const KITTY_KEYBOARD_PUSH: &[u8] = b"\x1b[>31u";
const KITTY_KEYBOARD_POP: &[u8] = b"\x1b[<u";

/// Which optional terminal modes a session wants enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Features {
    pub mouse: bool,
    pub bracketed_paste: bool,
    pub focus_events: bool,
    pub kitty_keyboard: bool,
}

fn write_command<T: Encode>(out: &mut impl Write, mut command: T) -> std::io::Result<()> {
    let mut buf = [0u8; 256];
    let len = command
        .encode(&mut buf)
        .map_err(|_| std::io::Error::new(std::io::ErrorKind::InvalidData, "command too long"))?;
    out.write_all(&buf[..len])
}

pub(crate) fn enter(out: &mut impl Write, features: Features) -> std::io::Result<()> {
    write_command(out, EnterAlternateScreen)?;
    write_command(out, HideCursor)?;
    if features.mouse {
        out.write_all(MOUSE_SGR_ENABLE)?;
    }
    if features.bracketed_paste {
        write_command(out, EnableBracketedPaste)?;
    }
    if features.focus_events {
        write_command(out, EnableFocusReporting)?;
    }
    if features.kitty_keyboard {
        out.write_all(KITTY_KEYBOARD_PUSH)?;
    }
    out.flush()
}

pub(crate) fn leave(out: &mut impl Write, features: Features) -> std::io::Result<()> {
    if features.kitty_keyboard {
        out.write_all(KITTY_KEYBOARD_POP)?;
    }
    if features.focus_events {
        write_command(out, DisableFocusReporting)?;
    }
    if features.bracketed_paste {
        write_command(out, DisableBracketedPaste)?;
    }
    if features.mouse {
        out.write_all(MOUSE_SGR_DISABLE)?;
    }
    write_command(out, ShowCursor)?;
    write_command(out, LeaveAlternateScreen)?;
    out.flush()
}
