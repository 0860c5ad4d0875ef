//! Self-pipe signal registration, bounded to a small fixed table.
//!
//! Signal handlers must not allocate, so registration itself (which does
//! allocate, inside `signal-hook`) happens once up front; the handler's
//! only job from then on is the async-signal-safe `write(2)` into the
//! pipe that `signal-hook` already performs for us.

use std::os::fd::AsRawFd;
use std::os::unix::net::UnixStream;
use std::sync::Mutex;

use crate::TtyError;

const TABLE_CAPACITY: usize = 8;

struct Slot {
    signal: i32,
    sig_id: signal_hook::SigId,
}

static TABLE: Mutex<Vec<Slot>> = Mutex::new(Vec::new());

/// A self-pipe's read end, registered to receive a byte each time `signal`
/// fires.
pub struct SignalPipe {
    signal: i32,
    read: UnixStream,
}

impl SignalPipe {
    #[must_use]
    pub fn signal(&self) -> i32 {
        self.signal
    }

    #[must_use]
    pub fn as_raw_fd(&self) -> std::os::fd::RawFd {
        self.read.as_raw_fd()
    }

    /// Drain any pending notification bytes. Returns the number of bytes
    /// drained; a storm of repeated signals coalesces into whatever the
    /// kernel's pipe buffer held at the time of the read.
    pub fn drain(&mut self) -> std::io::Result<usize> {
        use std::io::Read;
        let mut buf = [0u8; 64];
        let mut total = 0;
        loop {
            match self.read.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => total += n,
                Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => break,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(total)
    }
}

impl Drop for SignalPipe {
    fn drop(&mut self) {
        let mut table = TABLE.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(pos) = table.iter().position(|s| s.signal == self.signal) {
            let slot = table.remove(pos);
            signal_hook::low_level::unregister(slot.sig_id);
        }
    }
}

/// Register a self-pipe for `signal`.
///
/// # Errors
///
/// Returns [`TtyError::SignalTableFull`] if eight signals are already
/// registered, or [`TtyError::Io`] if the underlying `sigaction` call or
/// pipe setup fails.
pub fn register(signal: i32) -> Result<SignalPipe, TtyError> {
    let mut table = TABLE.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    if table.len() >= TABLE_CAPACITY {
        return Err(TtyError::SignalTableFull);
    }

    let (read, write) = UnixStream::pair().map_err(TtyError::Io)?;
    read.set_nonblocking(true).map_err(TtyError::Io)?;

    let sig_id = signal_hook::low_level::pipe::register(signal, write).map_err(TtyError::Io)?;
    table.push(Slot { signal, sig_id });

    Ok(SignalPipe { signal, read })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_drop_frees_the_slot() {
        let before = TABLE.lock().unwrap().len();
        {
            let _pipe = register(signal_hook::consts::SIGWINCH).expect("register");
            assert_eq!(TABLE.lock().unwrap().len(), before + 1);
        }
        assert_eq!(TABLE.lock().unwrap().len(), before);
    }
}
