//! Raw-mode lifecycle for a single TTY file descriptor.

use std::io;
use std::os::fd::{AsRawFd, RawFd};

/// The terminal attributes captured before entering raw mode, kept around
/// so they can be restored byte-for-byte.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SavedTermios(libc::termios);

/// Put `fd` into raw mode (`cfmakeraw`), returning the prior attributes.
///
/// `fd` must refer to a terminal device.
pub(crate) fn enter_raw_mode(fd: RawFd) -> io::Result<SavedTermios> {
    // SAFETY: `fd` is a valid, open file descriptor for the duration of
    // this call; `termios` is zero-initialized before `tcgetattr` fills it.
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(fd, &mut termios) != 0 {
            return Err(io::Error::last_os_error());
        }
        let original = termios;

        libc::cfmakeraw(&mut termios);
        if libc::tcsetattr(fd, libc::TCSANOW, &termios) != 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(SavedTermios(original))
    }
}

/// Restore attributes captured by [`enter_raw_mode`] on `fd`.
///
/// Best-effort: used from both normal teardown and the panic handler, so
/// errors are swallowed rather than propagated.
pub(crate) fn restore_termios(fd: RawFd, saved: &SavedTermios) {
    // SAFETY: `fd` is expected to still be open; a failed restore here is
    // not actionable (we are already tearing down or panicking).
    unsafe {
        libc::tcsetattr(fd, libc::TCSANOW, &saved.0);
    }
}

/// An open, raw-mode terminal device.
///
/// Opens its own handle on `/dev/tty` rather than taking over stdin, so
/// the guard is valid even when stdin has been redirected.
pub struct RawTty {
    file: std::fs::File,
    saved: SavedTermios,
}

impl RawTty {
    /// Open `/dev/tty` and switch it into raw mode.
    pub fn open() -> io::Result<Self> {
        let file = std::fs::OpenOptions::new().read(true).write(true).open("/dev/tty")?;
        let saved = enter_raw_mode(file.as_raw_fd())?;
        Ok(Self { file, saved })
    }

    #[must_use]
    pub fn as_raw_fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }

    #[must_use]
    pub(crate) fn file(&self) -> &std::fs::File {
        &self.file
    }

    #[must_use]
    pub(crate) fn saved(&self) -> SavedTermios {
        self.saved
    }

    /// Query the kernel for the current window size via `TIOCGWINSZ`.
    pub fn winsize(&self) -> io::Result<(u16, u16)> {
        // SAFETY: `ws` is fully initialized by the ioctl on success; the fd
        // is valid for the lifetime of `self`.
        unsafe {
            let mut ws: libc::winsize = std::mem::zeroed();
            if libc::ioctl(self.as_raw_fd(), libc::TIOCGWINSZ, &mut ws) != 0 {
                return Err(io::Error::last_os_error());
            }
            Ok((ws.ws_col, ws.ws_row))
        }
    }
}

impl Drop for RawTty {
    fn drop(&mut self) {
        restore_termios(self.as_raw_fd(), &self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winsize_reports_nonzero_when_run_under_a_pty() {
        // Under CI/non-interactive sandboxes /dev/tty may not exist; this
        // is a smoke test only, not a hard assertion.
        if let Ok(tty) = RawTty::open() {
            let _ = tty.winsize();
        }
    }
}
