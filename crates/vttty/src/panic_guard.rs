//! Process-wide "last TTY" reference for panic-safe terminal restoration.
//!
//! Only one real terminal session is normally active in a process at a
//! time, so rather than relying on every `Drop` impl running (which a
//! panic does not guarantee under `panic = "abort"`, and which races with
//! other panicking threads), the terminal registers itself here on open
//! and the installed panic hook restores it before the default hook runs.

use std::os::fd::RawFd;
use std::panic;
use std::sync::{Mutex, Once};

use crate::raw_mode::{self, SavedTermios};

struct Registered {
    fd: RawFd,
    saved: SavedTermios,
}

static LAST_TTY: Mutex<Option<Registered>> = Mutex::new(None);
static HOOK_INSTALLED: Once = Once::new();

/// Register `tty` as the terminal to restore if the process panics.
///
/// Idempotent: installs the panic hook once per process, then records
/// `tty`'s descriptor and saved attributes, overwriting any previous
/// registration.
pub(crate) fn install(tty: &crate::raw_mode::RawTty) {
    ensure_hook_installed();
    let mut guard = LAST_TTY.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    *guard = Some(Registered { fd: tty.as_raw_fd(), saved: tty.saved() });
}

/// Remove the registration installed by [`install`]. Called from the
/// terminal's normal (non-panicking) teardown path.
pub(crate) fn clear(tty: &crate::raw_mode::RawTty) {
    let mut guard = LAST_TTY.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    if matches!(&*guard, Some(r) if r.fd == tty.as_raw_fd()) {
        *guard = None;
    }
}

fn ensure_hook_installed() {
    HOOK_INSTALLED.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore_last_tty();
            previous(info);
        }));
    });
}

fn restore_last_tty() {
    let guard = LAST_TTY.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    if let Some(registered) = guard.as_ref() {
        raw_mode::restore_termios(registered.fd, &registered.saved);
    }
}
