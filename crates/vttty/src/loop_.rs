//! The threaded event loop: a dedicated reader thread, a bounded event
//! queue, and `SIGWINCH` coordination.

use std::io::{Read, Write};
use std::os::fd::AsRawFd;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use vtinput::TerminalInputParser;
use vtscreen::CapabilityRecord;

use crate::event::{Event, EventSink};
use crate::query::{self, Observation};
use crate::raw_mode::RawTty;
use crate::signal::{self, SignalPipe};
use crate::{panic_guard, TtyError};

/// Tunables for [`EventLoop::spawn`].
#[derive(Debug, Clone)]
pub struct EventLoopConfig {
    queue_capacity: usize,
    probe_timeout: Duration,
}

impl Default for EventLoopConfig {
    fn default() -> Self {
        Self { queue_capacity: 512, probe_timeout: Duration::from_millis(200) }
    }
}

impl EventLoopConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    #[must_use]
    pub fn probe_timeout(&self) -> Duration {
        self.probe_timeout
    }
}

/// A running TTY event loop: owns the raw-mode terminal and the thread
/// reading it.
pub struct EventLoop {
    tty: Arc<RawTty>,
    receiver: crossbeam_channel::Receiver<Event>,
    caps: Arc<Mutex<CapabilityRecord>>,
    shutdown: Arc<AtomicBool>,
    reader: Option<std::thread::JoinHandle<()>>,
}

impl EventLoop {
    /// Open `/dev/tty`, enter raw mode, register the `SIGWINCH` self-pipe,
    /// and start the reader thread.
    ///
    /// # Errors
    ///
    /// Returns [`TtyError::Io`] if the tty cannot be opened or put into
    /// raw mode, or [`TtyError::SignalTableFull`] if eight signals are
    /// already registered elsewhere in the process.
    pub fn spawn(config: &EventLoopConfig) -> Result<Self, TtyError> {
        let tty = Arc::new(RawTty::open().map_err(TtyError::Io)?);
        panic_guard::install(&tty);

        let (tx, rx) = crossbeam_channel::bounded(config.queue_capacity);
        let shutdown = Arc::new(AtomicBool::new(false));
        let caps = Arc::new(Mutex::new(CapabilityRecord::default()));

        let sigwinch = signal::register(libc::SIGWINCH)?;

        let reader_tty = Arc::clone(&tty);
        let reader_shutdown = Arc::clone(&shutdown);
        let reader_caps = Arc::clone(&caps);
        let reader = std::thread::Builder::new()
            .name("vttty-reader".into())
            .spawn(move || reader_loop(&reader_tty, sigwinch, &tx, &reader_shutdown, &reader_caps))
            .map_err(TtyError::Io)?;

        Ok(Self { tty, receiver: rx, caps, shutdown, reader: Some(reader) })
    }

    /// Write `query_terminal`'s probe sequence to the tty.
    ///
    /// Responses arrive asynchronously as [`Event::Cap`] and
    /// [`Event::ProbeComplete`] through [`EventLoop::recv`].
    pub fn query_terminal(&self) -> Result<(), TtyError> {
        (&*self.tty.file()).write_all(&query::probe_sequence()).map_err(TtyError::Io)
    }

    /// Enter the alternate screen and enable the requested optional modes.
    pub fn enter_screen(&self, features: crate::Features) -> Result<(), TtyError> {
        crate::features::enter(&mut &*self.tty.file(), features).map_err(TtyError::Io)
    }

    /// Disable the requested optional modes and leave the alternate screen.
    pub fn leave_screen(&self, features: crate::Features) -> Result<(), TtyError> {
        crate::features::leave(&mut &*self.tty.file(), features).map_err(TtyError::Io)
    }

    /// A snapshot of capabilities confirmed so far.
    #[must_use]
    pub fn capabilities(&self) -> CapabilityRecord {
        *self.caps.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Query the kernel for the current window size.
    pub fn winsize(&self) -> Result<(u16, u16), TtyError> {
        self.tty.winsize().map_err(TtyError::Io)
    }

    /// Block until the next event, or a fatal read error severs the loop.
    pub fn recv(&self) -> Result<Event, TtyError> {
        self.receiver.recv().map_err(|_| TtyError::CommunicationSevered)
    }

    /// Block until the next event or `timeout` elapses.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<Event>, TtyError> {
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(crossbeam_channel::RecvTimeoutError::Timeout) => Ok(None),
            Err(crossbeam_channel::RecvTimeoutError::Disconnected) => Err(TtyError::CommunicationSevered),
        }
    }

    /// Non-blocking poll for a buffered event.
    pub fn try_recv(&self) -> Result<Option<Event>, TtyError> {
        match self.receiver.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(crossbeam_channel::TryRecvError::Empty) => Ok(None),
            Err(crossbeam_channel::TryRecvError::Disconnected) => Err(TtyError::CommunicationSevered),
        }
    }

    /// Signal the reader thread to stop, unblock its read with an EOT
    /// sentinel, and join it.
    pub fn stop(mut self) {
        self.stop_inner();
    }

    fn stop_inner(&mut self) {
        self.shutdown.store(true, Ordering::Release);
        let _ = (&*self.tty.file()).write_all(&[0x04]);
        if let Some(handle) = self.reader.take() {
            let _ = handle.join();
        }
        panic_guard::clear(&self.tty);
    }
}

impl Drop for EventLoop {
    fn drop(&mut self) {
        self.stop_inner();
    }
}

fn reader_loop(
    tty: &RawTty,
    mut sigwinch: SignalPipe,
    sink: &dyn EventSink,
    shutdown: &AtomicBool,
    caps: &Mutex<CapabilityRecord>,
) {
    let mut parser = TerminalInputParser::new();
    let mut buf = [0u8; 4096];
    let tty_fd = tty.as_raw_fd();
    let sig_fd = sigwinch.as_raw_fd();

    loop {
        if shutdown.load(Ordering::Acquire) {
            return;
        }

        let mut fds = [
            libc::pollfd { fd: tty_fd, events: libc::POLLIN, revents: 0 },
            libc::pollfd { fd: sig_fd, events: libc::POLLIN, revents: 0 },
        ];
        // SAFETY: `fds` is a valid array of the length passed, and stays
        // alive for the duration of the call.
        let ready = unsafe { libc::poll(fds.as_mut_ptr(), fds.len() as libc::nfds_t, -1) };
        if ready < 0 {
            let err = std::io::Error::last_os_error();
            if err.kind() == std::io::ErrorKind::Interrupted {
                continue;
            }
            tracing::warn!(%err, "tty poll failed, severing reader thread");
            return;
        }

        if shutdown.load(Ordering::Acquire) {
            return;
        }

        if fds[1].revents & libc::POLLIN != 0 {
            let _ = sigwinch.drain();
            match tty.winsize() {
                Ok((cols, rows)) => sink.push(Event::WinSize { cols, rows }),
                Err(err) => tracing::warn!(%err, "TIOCGWINSZ failed after SIGWINCH"),
            }
        }

        if fds[0].revents & libc::POLLIN != 0 {
            match (&*tty.file()).read(&mut buf) {
                Ok(0) => return,
                Ok(n) => {
                    if shutdown.load(Ordering::Acquire) {
                        return;
                    }
                    let mut caps_guard = caps.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
                    parser.feed_with(&buf[..n], &mut |event| {
                        match query::observe(&mut caps_guard, &event) {
                            Observation::ProbeComplete => sink.push(Event::ProbeComplete),
                            Observation::Cap(cap) => sink.push(Event::Cap(cap)),
                            Observation::Unhandled => sink.push(Event::Input(event.to_owned())),
                        }
                    });
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(err) => {
                    tracing::warn!(%err, "tty read failed, severing reader thread");
                    return;
                }
            }
        }
    }
}
