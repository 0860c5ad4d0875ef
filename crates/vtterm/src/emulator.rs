//! The embedded VT emulator widget: a spawned child process hosted on a
//! PTY, fed through [`crate::parser::Parser`] into a [`VtScreen`].

use std::io::{Read, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use portable_pty::{native_pty_system, CommandBuilder, MasterPty, PtySize};
use vtwidth::graphemes;

use crate::parser::{self, Csi, Param, Parser};
use crate::screen::{EraseMode, VtScreen};
use crate::sgr;

/// Errors surfaced while setting up or driving a PTY-hosted VT emulator.
#[derive(Debug, thiserror::Error)]
pub enum EmulatorError {
    #[error("failed to open a pty: {0}")]
    PtyOpen(String),
    #[error("failed to spawn child process: {0}")]
    ChildSpawn(String),
    #[error("ioctl failed: {0}")]
    Ioctl(String),
}

/// Widget-level events the embedded terminal can't express as a screen
/// mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermEvent {
    Bell,
    TitleChanged(String),
    WorkingDirectoryChanged(String),
    Exited(Option<i32>),
}

/// A spawned child process hosted on a PTY, with its own parser, screen,
/// and reader thread.
pub struct Emulator {
    screen: Arc<Mutex<VtScreen>>,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    child_killer: Mutex<Box<dyn portable_pty::ChildKiller + Send + Sync>>,
    reader_thread: Option<std::thread::JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
    master: Box<dyn MasterPty + Send>,
}

impl Emulator {
    /// Open a PTY, fork `argv[0]` with `argv[1..]` as an interactive child,
    /// and start the reader thread that feeds its output into the screen.
    ///
    /// # Errors
    ///
    /// Returns [`EmulatorError::PtyOpen`] if the PTY can't be allocated, or
    /// [`EmulatorError::ChildSpawn`] if the child can't be forked.
    pub fn spawn(
        argv: &[String],
        env: &[(String, String)],
        initial_cwd: Option<&Path>,
        cols: u16,
        rows: u16,
        scrollback: usize,
        events: crossbeam_channel::Sender<TermEvent>,
    ) -> Result<Self, EmulatorError> {
        let pty_system = native_pty_system();
        let pair = pty_system
            .openpty(PtySize { rows, cols, pixel_width: 0, pixel_height: 0 })
            .map_err(|err| EmulatorError::PtyOpen(err.to_string()))?;

        let (program, rest) = argv.split_first().ok_or_else(|| EmulatorError::ChildSpawn("empty argv".into()))?;
        let mut cmd = CommandBuilder::new(program);
        for arg in rest {
            cmd.arg(arg);
        }
        for (key, value) in env {
            cmd.env(key, value);
        }
        if let Some(cwd) = initial_cwd {
            cmd.cwd(cwd);
        }

        let child = pair.slave.spawn_command(cmd).map_err(|err| EmulatorError::ChildSpawn(err.to_string()))?;
        let child_killer = child.clone_killer();
        // The slave fd belongs to the child now; dropping our handle lets
        // the kernel close it when the child exits, which is what makes
        // the master's read eventually see EOF.
        drop(pair.slave);

        let writer = pair.master.take_writer().map_err(|err| EmulatorError::PtyOpen(err.to_string()))?;
        let reader = pair.master.try_clone_reader().map_err(|err| EmulatorError::PtyOpen(err.to_string()))?;

        let screen = Arc::new(Mutex::new(VtScreen::new(cols, rows, scrollback)));
        let writer = Arc::new(Mutex::new(writer));
        let shutdown = Arc::new(AtomicBool::new(false));

        let reader_screen = Arc::clone(&screen);
        let reader_writer = Arc::clone(&writer);
        let reader_shutdown = Arc::clone(&shutdown);
        let reader_thread = std::thread::Builder::new()
            .name("vtterm-reader".into())
            .spawn(move || reader_loop(reader, &reader_screen, &reader_writer, &events, child, &reader_shutdown))
            .map_err(|err| EmulatorError::ChildSpawn(err.to_string()))?;

        Ok(Self {
            screen,
            writer,
            child_killer: Mutex::new(child_killer),
            reader_thread: Some(reader_thread),
            shutdown,
            master: pair.master,
        })
    }

    /// Resize the PTY and both of the emulator's grids.
    ///
    /// # Errors
    ///
    /// Returns [`EmulatorError::Ioctl`] if the kernel rejects the resize.
    pub fn resize(&self, cols: u16, rows: u16) -> Result<(), EmulatorError> {
        self.master
            .resize(PtySize { rows, cols, pixel_width: 0, pixel_height: 0 })
            .map_err(|err| EmulatorError::Ioctl(err.to_string()))?;
        self.screen.lock().unwrap_or_else(std::sync::PoisonError::into_inner).resize(cols, rows);
        Ok(())
    }

    /// Write bytes to the child's stdin (e.g. forwarded keystrokes).
    pub fn write_input(&self, bytes: &[u8]) -> std::io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        writer.write_all(bytes)?;
        writer.flush()
    }

    /// Copy dirty cells into `window`. Skips the frame entirely if the
    /// screen is contended, rather than blocking the caller's render loop.
    pub fn render_into(&self, window: &mut vtscreen::Window<'_>) {
        if let Ok(mut screen) = self.screen.try_lock() {
            screen.render_into(window);
        }
    }

    #[must_use]
    pub fn cursor(&self) -> vtscreen::Cursor {
        self.screen.lock().unwrap_or_else(std::sync::PoisonError::into_inner).cursor()
    }
}

impl Drop for Emulator {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Release);
        let _ = self.child_killer.lock().unwrap_or_else(std::sync::PoisonError::into_inner).kill();
        // Best-effort: the child's death closing the slave is what
        // actually unblocks the reader's read in practice, but an EOT
        // costs nothing if the kernel hasn't delivered that EOF yet.
        let _ = self.write_input(&[0x04]);
        if let Some(handle) = self.reader_thread.take() {
            let _ = handle.join();
        }
    }
}

fn reader_loop(
    mut reader: Box<dyn Read + Send>,
    screen: &Mutex<VtScreen>,
    writer: &Mutex<Box<dyn Write + Send>>,
    events: &crossbeam_channel::Sender<TermEvent>,
    mut child: Box<dyn portable_pty::Child + Send + Sync>,
    shutdown: &AtomicBool,
) {
    let mut parser = Parser::new();
    let mut buf = [0u8; 4096];

    loop {
        if shutdown.load(Ordering::Acquire) {
            break;
        }
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                if shutdown.load(Ordering::Acquire) {
                    break;
                }
                let mut screen_guard = screen.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
                parser.feed_with(&buf[..n], &mut |event| dispatch(&mut screen_guard, writer, events, event));
            }
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
            Err(err) => {
                tracing::debug!(%err, "pty read failed, ending reader thread");
                break;
            }
        }
    }

    let exit_code = child.wait().ok().map(|status| status.exit_code() as i32);
    let _ = events.send(TermEvent::Exited(exit_code));
}

fn dispatch(
    screen: &mut VtScreen,
    writer: &Mutex<Box<dyn Write + Send>>,
    events: &crossbeam_channel::Sender<TermEvent>,
    event: parser::Event<'_>,
) {
    match event {
        parser::Event::Print(text) => {
            for grapheme in graphemes(text) {
                screen.print(grapheme);
            }
        }
        parser::Event::C0(byte) => dispatch_c0(screen, events, byte),
        parser::Event::Esc(esc) => dispatch_esc(screen, esc),
        parser::Event::Csi(csi) => dispatch_csi(screen, writer, &csi),
        parser::Event::Osc(bytes) => dispatch_osc(events, bytes),
        parser::Event::Apc(bytes) => {
            tracing::debug!(len = bytes.len(), "ignoring APC sequence");
        }
        parser::Event::Ss2(byte) | parser::Event::Ss3(byte) => {
            tracing::debug!(byte, "ignoring single-shift byte in output stream");
        }
    }
}

fn dispatch_c0(screen: &mut VtScreen, events: &crossbeam_channel::Sender<TermEvent>, byte: u8) {
    match byte {
        0x07 => {
            let _ = events.send(TermEvent::Bell);
        }
        0x08 => screen.backspace(),
        0x09 => screen.ht(),
        0x0a | 0x0b | 0x0c => screen.line_feed(),
        0x0d => screen.carriage_return(),
        _ => tracing::debug!(byte, "ignoring unhandled C0 control"),
    }
}

fn dispatch_esc(screen: &mut VtScreen, esc: parser::Esc) {
    match (esc.intermediate, esc.final_byte) {
        (None, b'D') => screen.line_feed(),
        (None, b'M') => screen.reverse_index(),
        (None, b'c') => *screen = VtScreen::new(screen.cols(), screen.rows(), 0),
        _ => tracing::debug!(?esc, "ignoring unhandled escape sequence"),
    }
}

fn param(params: &[Param], index: usize) -> Option<u32> {
    params.get(index).and_then(|p| p.value)
}

/// A count parameter where both absence and `0` mean "1", matching the
/// usual ECMA-48 convention for cursor-motion and erase counts.
fn count(params: &[Param], index: usize) -> u16 {
    match param(params, index) {
        None | Some(0) => 1,
        Some(n) => n.min(u32::from(u16::MAX)) as u16,
    }
}

fn erase_mode(params: &[Param]) -> EraseMode {
    match param(params, 0).unwrap_or(0) {
        0 => EraseMode::ToEnd,
        1 => EraseMode::ToStart,
        3 => EraseMode::AllAndScrollback,
        _ => EraseMode::All,
    }
}

fn dispatch_csi(screen: &mut VtScreen, writer: &Mutex<Box<dyn Write + Send>>, csi: &Csi<'_>) {
    match (csi.private, csi.intermediate, csi.final_byte) {
        (None, None, b'A') => screen.cuu(count(csi.params, 0)),
        (None, None, b'B') => screen.cud(count(csi.params, 0)),
        (None, None, b'C') => screen.cuf(count(csi.params, 0)),
        (None, None, b'a') => screen.hpr(count(csi.params, 0)),
        (None, None, b'D') => screen.cub(count(csi.params, 0)),
        (None, None, b'E') => screen.cnl(count(csi.params, 0)),
        (None, None, b'F') => screen.cpl(count(csi.params, 0)),
        (None, None, b'G') => screen.cha(count(csi.params, 0) - 1),
        (None, None, b'H' | b'f') => {
            let row = count(csi.params, 0) - 1;
            let col = count(csi.params, 1) - 1;
            screen.cup(row, col);
        }
        (None, None, b'J') => screen.ed(erase_mode(csi.params)),
        (None, None, b'K') => screen.el(erase_mode(csi.params)),
        (None, None, b'L') => screen.il(count(csi.params, 0)),
        (None, None, b'M') => screen.dl(count(csi.params, 0)),
        (None, None, b'P') => screen.dch(count(csi.params, 0)),
        (None, None, b'S') => screen.su(count(csi.params, 0)),
        (None, None, b'T') => screen.sd(count(csi.params, 0)),
        (None, None, b'X') => screen.ech(count(csi.params, 0)),
        (None, None, b'Z') => screen.cbt(count(csi.params, 0)),
        (None, None, b'b') => screen.rep(count(csi.params, 0)),
        (None, None, b'd') => screen.vpa(count(csi.params, 0) - 1),
        (None, None, b'e') => screen.vpr(count(csi.params, 0)),
        (None, None, b'g') => screen.tab_clear(u16::try_from(param(csi.params, 0).unwrap_or(0)).unwrap_or(0)),
        (None, None, b'm') => {
            let mut style = screen.style();
            sgr::apply(&mut style, csi);
            screen.set_style(style);
        }
        (None, None, b'n') => dispatch_dsr(screen, writer, csi),
        (None, Some(b' '), b'q') => dispatch_decscusr(screen, csi),
        (None, None, b'r') => {
            let top = param(csi.params, 0).map_or(0, |n| n.saturating_sub(1) as u16);
            let bottom = param(csi.params, 1).map_or(screen.rows() - 1, |n| n.saturating_sub(1) as u16);
            screen.decstbm(top, bottom);
        }
        (Some(b'?'), None, b'h') => set_dec_modes(screen, csi, true),
        (Some(b'?'), None, b'l') => set_dec_modes(screen, csi, false),
        (Some(b'?'), Some(b'$'), b'p') => dispatch_decrqm(screen, writer, csi),
        (None, None, b'c') => respond(writer, b"\x1b[?62;22c"),
        (Some(b'>'), None, b'c') => respond(writer, b"\x1b[>1;10;0c"),
        (Some(b'>'), None, b'q') => respond(writer, b"\x1bP>|vtterm\x1b\\"),
        _ => tracing::debug!(?csi, "ignoring unhandled CSI sequence"),
    }
}

fn dispatch_dsr(screen: &mut VtScreen, writer: &Mutex<Box<dyn Write + Send>>, csi: &Csi<'_>) {
    match param(csi.params, 0) {
        Some(5) => respond(writer, b"\x1b[0n"),
        Some(6) => {
            let cursor = screen.cursor();
            respond(writer, format!("\x1b[{};{}R", cursor.row + 1, cursor.col + 1).as_bytes());
        }
        _ => {}
    }
}

fn dispatch_decrqm(screen: &VtScreen, writer: &Mutex<Box<dyn Write + Send>>, csi: &Csi<'_>) {
    let Some(mode) = param(csi.params, 0) else { return };
    let state: u32 = match mode {
        2026 => {
            if screen.sync_output() {
                1
            } else {
                0
            }
        }
        _ => 0,
    };
    respond(writer, format!("\x1b[?{mode};{state}$y").as_bytes());
}

fn dispatch_decscusr(screen: &mut VtScreen, csi: &Csi<'_>) {
    let shape = match param(csi.params, 0).unwrap_or(1) {
        0 | 1 | 2 => vtscreen::CursorShape::Block,
        3 | 4 => vtscreen::CursorShape::Underline,
        5 | 6 => vtscreen::CursorShape::Bar,
        _ => vtscreen::CursorShape::Block,
    };
    screen.set_cursor_shape(shape);
}

fn set_dec_modes(screen: &mut VtScreen, csi: &Csi<'_>, on: bool) {
    for p in csi.params {
        match p.value {
            Some(6) => screen.set_origin_mode(on),
            Some(7) => screen.set_autowrap(on),
            Some(25) => screen.set_cursor_visible(on),
            Some(1049) => screen.set_alternate(on),
            Some(2026) => screen.set_sync_output(on),
            Some(mode) => tracing::debug!(mode, on, "ignoring unsupported DEC private mode"),
            None => {}
        }
    }
}

fn respond(writer: &Mutex<Box<dyn Write + Send>>, bytes: &[u8]) {
    let mut guard = writer.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    let _ = guard.write_all(bytes);
    let _ = guard.flush();
}

fn dispatch_osc(events: &crossbeam_channel::Sender<TermEvent>, bytes: &[u8]) {
    let text = String::from_utf8_lossy(bytes);
    let Some((code, payload)) = text.split_once(';') else { return };
    match code {
        "0" | "2" => {
            let _ = events.send(TermEvent::TitleChanged(payload.to_string()));
        }
        "7" => {
            let _ = events.send(TermEvent::WorkingDirectoryChanged(decode_pwd_url(payload)));
        }
        _ => tracing::debug!(code, "ignoring unhandled OSC sequence"),
    }
}

/// OSC 7 carries a `file://host/path` URL; strip the scheme and host and
/// percent-decode the path.
fn decode_pwd_url(payload: &str) -> String {
    let path = payload.strip_prefix("file://").map_or(payload, |rest| match rest.find('/') {
        Some(idx) => &rest[idx..],
        None => rest,
    });
    percent_decode(path)
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let Ok(hex) = std::str::from_utf8(&bytes[i + 1..i + 3]) {
                if let Ok(value) = u8::from_str_radix(hex, 16) {
                    out.push(value);
                    i += 3;
                    continue;
                }
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn decodes_plain_pwd_path() {
        assert_eq!(decode_pwd_url("file://host/home/user/src"), "/home/user/src");
    }

    #[test]
    fn decodes_percent_escapes_in_pwd_path() {
        assert_eq!(decode_pwd_url("file://host/home/user/my%20project"), "/home/user/my project");
    }

    #[test]
    fn cup_end_to_end_through_the_parser_and_dispatcher() {
        let mut screen = VtScreen::new(80, 24, 0);
        let mut parser = Parser::new();
        let (tx, _rx) = crossbeam_channel::unbounded();
        let writer: Mutex<Box<dyn Write + Send>> = Mutex::new(Box::new(Vec::new()));
        parser.feed_with(b"\x1b[5;10H", &mut |event| dispatch(&mut screen, &writer, &tx, event));
        assert_eq!((screen.cursor().row, screen.cursor().col), (4, 9));
    }

    #[test]
    fn title_change_via_osc_0() {
        let mut screen = VtScreen::new(80, 24, 0);
        let mut parser = Parser::new();
        let (tx, rx) = crossbeam_channel::unbounded();
        let writer: Mutex<Box<dyn Write + Send>> = Mutex::new(Box::new(Vec::new()));
        parser.feed_with(b"\x1b]0;my title\x07", &mut |event| dispatch(&mut screen, &writer, &tx, event));
        assert_eq!(rx.try_recv().unwrap(), TermEvent::TitleChanged("my title".to_string()));
    }

    #[test]
    fn bell_emits_event() {
        let mut screen = VtScreen::new(80, 24, 0);
        let mut parser = Parser::new();
        let (tx, rx) = crossbeam_channel::unbounded();
        let writer: Mutex<Box<dyn Write + Send>> = Mutex::new(Box::new(Vec::new()));
        parser.feed_with(b"\x07", &mut |event| dispatch(&mut screen, &writer, &tx, event));
        assert_eq!(rx.try_recv().unwrap(), TermEvent::Bell);
    }

    #[derive(Clone, Default)]
    struct RecordingWriter(Arc<Mutex<Vec<u8>>>);

    impl Write for RecordingWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap_or_else(std::sync::PoisonError::into_inner).extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn da1_query_writes_a_response() {
        let mut screen = VtScreen::new(80, 24, 0);
        let mut parser = Parser::new();
        let (tx, _rx) = crossbeam_channel::unbounded();
        let recorded = RecordingWriter::default();
        let writer: Mutex<Box<dyn Write + Send>> = Mutex::new(Box::new(recorded.clone()));
        parser.feed_with(b"\x1b[c", &mut |event| dispatch(&mut screen, &writer, &tx, event));
        assert!(!recorded.0.lock().unwrap().is_empty());
    }
}
