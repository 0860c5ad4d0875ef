//! A self-contained VT/ANSI byte-stream parser for the embedded VT emulator.
//!
//! This is deliberately independent of `vtinput`'s parser: that pipeline
//! turns bytes arriving from a real terminal into *input* events (an arrow
//! key press, a mouse click). This one reads a child process's *output* and
//! has to recover display-affecting commands — cursor motion, SGR, scroll —
//! from the same family of escape sequences, which is a different job with
//! a different event shape.

use smallvec::SmallVec;

/// One CSI parameter together with how it was separated from the one
/// before it. ECMA-48 sub-parameters (`:`) and ordinary parameters (`;`)
/// parse identically byte-for-byte except for this distinction, and a few
/// SGR codes (`4:3` curly underline vs. `4;3` underline-then-italic) are
/// only decodable if it survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub value: Option<u32>,
    /// Preceded by `:` rather than `;`: a sub-parameter of the previous one.
    pub sub: bool,
}

pub type Params = SmallVec<[Param; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Csi<'a> {
    pub private: Option<u8>,
    pub intermediate: Option<u8>,
    pub params: &'a [Param],
    pub final_byte: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Esc {
    pub intermediate: Option<u8>,
    pub final_byte: u8,
}

/// One parsed unit of a VT byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// A run of printable text, already validated UTF-8.
    Print(&'a str),
    C0(u8),
    Esc(Esc),
    Csi(Csi<'a>),
    /// `ESC ]` ... terminated by BEL or ST; contents exclude the terminator.
    Osc(&'a [u8]),
    /// `ESC _` ... terminated by ST; contents exclude the terminator.
    Apc(&'a [u8]),
    Ss2(u8),
    Ss3(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Ground,
    Escape,
    EscapeIntermediate,
    Csi,
    Osc,
    OscEsc,
    Apc,
    ApcEsc,
    SkipUntilSt,
    SkipUntilStEsc,
    Ss2,
    Ss3,
}

/// A byte-at-a-time VT parser. Feed it raw PTY output; it calls back once
/// per recognized unit.
pub struct Parser {
    state: State,
    print_buf: Vec<u8>,
    csi_private: Option<u8>,
    csi_intermediate: Option<u8>,
    csi_params: Params,
    csi_current: Option<u32>,
    csi_seen_param_byte: bool,
    csi_pending_sub: bool,
    esc_intermediate: Option<u8>,
    osc_buf: Vec<u8>,
    apc_buf: Vec<u8>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::Ground,
            print_buf: Vec::new(),
            csi_private: None,
            csi_intermediate: None,
            csi_params: Params::new(),
            csi_current: None,
            csi_seen_param_byte: false,
            csi_pending_sub: false,
            esc_intermediate: None,
            osc_buf: Vec::new(),
            apc_buf: Vec::new(),
        }
    }

    /// Feed a chunk of bytes, invoking `cb` once per recognized event.
    pub fn feed_with<F: FnMut(Event<'_>)>(&mut self, input: &[u8], cb: &mut F) {
        for &byte in input {
            self.step(byte, cb);
        }
    }

    fn reset_csi(&mut self) {
        self.csi_private = None;
        self.csi_intermediate = None;
        self.csi_params.clear();
        self.csi_current = None;
        self.csi_seen_param_byte = false;
        self.csi_pending_sub = false;
    }

    fn push_csi_param(&mut self, next_is_sub: bool) {
        self.csi_params.push(Param { value: self.csi_current.take(), sub: self.csi_pending_sub });
        self.csi_pending_sub = next_is_sub;
    }

    fn flush_print<F: FnMut(Event<'_>)>(&mut self, cb: &mut F) {
        if self.print_buf.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.print_buf);
        cb(Event::Print(&text));
        self.print_buf.clear();
    }

    fn step<F: FnMut(Event<'_>)>(&mut self, byte: u8, cb: &mut F) {
        match self.state {
            State::Ground => self.step_ground(byte, cb),
            State::Escape => self.step_escape(byte, cb),
            State::EscapeIntermediate => self.step_escape_intermediate(byte, cb),
            State::Csi => self.step_csi(byte, cb),
            State::Osc => self.step_osc(byte, cb),
            State::OscEsc => self.step_osc_esc(byte, cb),
            State::Apc => self.step_apc(byte, cb),
            State::ApcEsc => self.step_apc_esc(byte, cb),
            State::SkipUntilSt => {
                if byte == 0x1b {
                    self.state = State::SkipUntilStEsc;
                }
            }
            State::SkipUntilStEsc => {
                if byte == b'\\' {
                    self.state = State::Ground;
                } else if byte != 0x1b {
                    self.state = State::SkipUntilSt;
                }
            }
            State::Ss2 => {
                cb(Event::Ss2(byte));
                self.state = State::Ground;
            }
            State::Ss3 => {
                cb(Event::Ss3(byte));
                self.state = State::Ground;
            }
        }
    }

    fn step_ground<F: FnMut(Event<'_>)>(&mut self, byte: u8, cb: &mut F) {
        match byte {
            0x1b => {
                self.flush_print(cb);
                self.state = State::Escape;
            }
            0x00..=0x1a | 0x1c..=0x1f => {
                self.flush_print(cb);
                cb(Event::C0(byte));
            }
            _ => self.print_buf.push(byte),
        }
    }

    fn step_escape<F: FnMut(Event<'_>)>(&mut self, byte: u8, cb: &mut F) {
        match byte {
            b'N' => self.state = State::Ss2,
            b'O' => self.state = State::Ss3,
            // DCS, SOS, PM: consumed up to ST but never emitted, we have no
            // use for them and SPEC_FULL's own state table discards them.
            0x50 | 0x58 | 0x5e => self.state = State::SkipUntilSt,
            b'[' => {
                self.reset_csi();
                self.state = State::Csi;
            }
            b']' => {
                self.osc_buf.clear();
                self.state = State::Osc;
            }
            b'_' => {
                self.apc_buf.clear();
                self.state = State::Apc;
            }
            0x20..=0x2f => {
                self.esc_intermediate = Some(byte);
                self.state = State::EscapeIntermediate;
            }
            _ => {
                cb(Event::Esc(Esc { intermediate: None, final_byte: byte }));
                self.state = State::Ground;
            }
        }
    }

    fn step_escape_intermediate<F: FnMut(Event<'_>)>(&mut self, byte: u8, cb: &mut F) {
        if (0x20..=0x2f).contains(&byte) {
            self.esc_intermediate = Some(byte);
        } else {
            cb(Event::Esc(Esc { intermediate: self.esc_intermediate, final_byte: byte }));
            self.esc_intermediate = None;
            self.state = State::Ground;
        }
    }

    fn step_csi<F: FnMut(Event<'_>)>(&mut self, byte: u8, cb: &mut F) {
        match byte {
            b'0'..=b'9' => {
                self.csi_seen_param_byte = true;
                let digit = u32::from(byte - b'0');
                self.csi_current = Some(self.csi_current.unwrap_or(0).saturating_mul(10).saturating_add(digit));
            }
            b';' => {
                self.csi_seen_param_byte = true;
                self.push_csi_param(false);
            }
            b':' => {
                self.csi_seen_param_byte = true;
                self.push_csi_param(true);
            }
            0x3c..=0x3f => self.csi_private = Some(byte),
            0x20..=0x2f => self.csi_intermediate = Some(byte),
            0x40..=0x7e => {
                if self.csi_seen_param_byte || self.csi_current.is_some() {
                    self.push_csi_param(false);
                }
                let event = Csi {
                    private: self.csi_private,
                    intermediate: self.csi_intermediate,
                    params: &self.csi_params,
                    final_byte: byte,
                };
                cb(Event::Csi(event));
                self.reset_csi();
                self.state = State::Ground;
            }
            _ => {}
        }
    }

    fn step_osc<F: FnMut(Event<'_>)>(&mut self, byte: u8, cb: &mut F) {
        match byte {
            0x07 => {
                cb(Event::Osc(&self.osc_buf));
                self.osc_buf.clear();
                self.state = State::Ground;
            }
            0x1b => self.state = State::OscEsc,
            _ => self.osc_buf.push(byte),
        }
    }

    fn step_osc_esc<F: FnMut(Event<'_>)>(&mut self, byte: u8, cb: &mut F) {
        if byte == b'\\' {
            cb(Event::Osc(&self.osc_buf));
            self.osc_buf.clear();
            self.state = State::Ground;
        } else {
            cb(Event::Osc(&self.osc_buf));
            self.osc_buf.clear();
            self.state = State::Ground;
            self.step(byte, cb);
        }
    }

    fn step_apc<F: FnMut(Event<'_>)>(&mut self, byte: u8, cb: &mut F) {
        match byte {
            0x1b => self.state = State::ApcEsc,
            _ => self.apc_buf.push(byte),
        }
    }

    fn step_apc_esc<F: FnMut(Event<'_>)>(&mut self, byte: u8, cb: &mut F) {
        if byte == b'\\' {
            cb(Event::Apc(&self.apc_buf));
            self.apc_buf.clear();
            self.state = State::Ground;
        } else {
            cb(Event::Apc(&self.apc_buf));
            self.apc_buf.clear();
            self.state = State::Ground;
            self.step(byte, cb);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn events(input: &[u8]) -> Vec<String> {
        let mut parser = Parser::new();
        let mut out = Vec::new();
        parser.feed_with(input, &mut |event| out.push(format!("{event:?}")));
        out
    }

    #[test]
    fn prints_plain_text() {
        assert_eq!(events(b"hello"), vec![r#"Print("hello")"#]);
    }

    #[test]
    fn splits_print_runs_around_c0() {
        let evs = events(b"ab\ncd");
        assert_eq!(evs, vec![r#"Print("ab")"#, "C0(10)", r#"Print("cd")"#]);
    }

    #[test]
    fn parses_cup_params() {
        let mut parser = Parser::new();
        let mut seen = None;
        parser.feed_with(b"\x1b[5;10H", &mut |event| {
            if let Event::Csi(csi) = event {
                seen = Some((
                    csi.params.iter().map(|p| p.value).collect::<Vec<_>>(),
                    csi.final_byte,
                ));
            }
        });
        assert_eq!(seen, Some((vec![Some(5), Some(10)], b'H')));
    }

    #[test]
    fn parses_private_marker_and_empty_params() {
        let mut parser = Parser::new();
        let mut seen = None;
        parser.feed_with(b"\x1b[?25h", &mut |event| {
            if let Event::Csi(csi) = event {
                seen = Some((csi.private, csi.params.iter().map(|p| p.value).collect::<Vec<_>>(), csi.final_byte));
            }
        });
        assert_eq!(seen, Some((Some(b'?'), vec![Some(25)], b'h')));
    }

    #[test]
    fn distinguishes_colon_subparam_from_semicolon() {
        let mut parser = Parser::new();
        let mut seen = Vec::new();
        parser.feed_with(b"\x1b[4:3m", &mut |event| {
            if let Event::Csi(csi) = event {
                seen = csi.params.to_vec();
            }
        });
        assert_eq!(seen, vec![Param { value: Some(4), sub: false }, Param { value: Some(3), sub: true }]);

        let mut parser = Parser::new();
        let mut seen = Vec::new();
        parser.feed_with(b"\x1b[4;3m", &mut |event| {
            if let Event::Csi(csi) = event {
                seen = csi.params.to_vec();
            }
        });
        assert_eq!(seen, vec![Param { value: Some(4), sub: false }, Param { value: Some(3), sub: false }]);
    }

    #[test]
    fn parses_rgb_sgr_with_colon_and_empty_colorspace() {
        let mut parser = Parser::new();
        let mut seen = Vec::new();
        parser.feed_with(b"\x1b[38:2::10:20:30m", &mut |event| {
            if let Event::Csi(csi) = event {
                seen = csi.params.iter().map(|p| p.value).collect();
            }
        });
        assert_eq!(seen, vec![Some(38), Some(2), None, Some(10), Some(20), Some(30)]);
    }

    #[test]
    fn osc_terminated_by_bel() {
        let mut parser = Parser::new();
        let mut seen = None;
        parser.feed_with(b"\x1b]0;title\x07", &mut |event| {
            if let Event::Osc(bytes) = event {
                seen = Some(bytes.to_vec());
            }
        });
        assert_eq!(seen, Some(b"0;title".to_vec()));
    }

    #[test]
    fn osc_terminated_by_st() {
        let mut parser = Parser::new();
        let mut seen = None;
        parser.feed_with(b"\x1b]7;file:///tmp\x1b\\", &mut |event| {
            if let Event::Osc(bytes) = event {
                seen = Some(bytes.to_vec());
            }
        });
        assert_eq!(seen, Some(b"7;file:///tmp".to_vec()));
    }

    #[test]
    fn dcs_is_discarded_up_to_st() {
        let evs = events(b"\x1bP1$qm\x1b\\ok");
        assert_eq!(evs, vec![r#"Print("ok")"#]);
    }

    #[test]
    fn ss2_and_ss3_single_byte_events() {
        let mut parser = Parser::new();
        let mut out = Vec::new();
        parser.feed_with(b"\x1bNx\x1bOy", &mut |event| out.push(format!("{event:?}")));
        assert_eq!(out, vec!["Ss2(120)", "Ss3(121)"]);
    }

    #[test]
    fn feeding_byte_by_byte_matches_feeding_whole() {
        let whole = events(b"\x1b[1;31mhi\x1b[0m");
        let mut parser = Parser::new();
        let mut piecewise = Vec::new();
        for &byte in b"\x1b[1;31mhi\x1b[0m" {
            parser.feed_with(&[byte], &mut |event| piecewise.push(format!("{event:?}")));
        }
        assert_eq!(whole, piecewise);
    }
}
