//! Cell style: colors, boolean attributes, and underline variant, plus the
//! SGR transition encoder the renderer's diff engine drives.

use std::io::{self, Write};

use crate::color::Color;

/// Underline variant, per the `4:N` SGR sub-parameter extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Underline {
    #[default]
    Off,
    Single,
    Double,
    Curly,
    Dotted,
    Dashed,
}

impl Underline {
    const fn sub_param(self) -> Option<u8> {
        match self {
            Self::Off => None,
            Self::Single => Some(1),
            Self::Double => Some(2),
            Self::Curly => Some(3),
            Self::Dotted => Some(4),
            Self::Dashed => Some(5),
        }
    }
}

bitflags::bitflags! {
    /// Boolean SGR attributes that aren't colors or the underline variant.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attrs: u16 {
        const BOLD          = 0b0000_0001;
        const DIM           = 0b0000_0010;
        const ITALIC        = 0b0000_0100;
        const BLINK         = 0b0000_1000;
        const REVERSE       = 0b0001_0000;
        const INVISIBLE     = 0b0010_0000;
        const STRIKETHROUGH = 0b0100_0000;
    }
}

/// The full set of SGR-representable attributes for a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub underline_color: Color,
    pub attrs: Attrs,
    pub underline: Underline,
}

impl Style {
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.attrs = Attrs::from_bits_truncate(self.attrs.bits() | Attrs::BOLD.bits());
        self
    }

    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    #[must_use]
    pub const fn underline(mut self, underline: Underline) -> Self {
        self.underline = underline;
        self
    }

    /// Write the SGR sequence that transitions the terminal's current
    /// attribute state (`from`) to `self`, to `out`.
    ///
    /// Only the attributes that actually changed are emitted, except when
    /// downgrading a boolean attribute can't be expressed incrementally
    /// (turning off every attribute at once), in which case a full
    /// `CSI 0 m` reset is emitted and the whole target style re-applied on
    /// top of it. Writes nothing if `from == self`.
    pub fn write_transition<W: Write + ?Sized>(&self, from: &Style, out: &mut W) -> io::Result<()> {
        if self == from {
            return Ok(());
        }

        let mut params: Vec<String> = Vec::with_capacity(8);

        // If every attribute the old style had set is gone in the new
        // style, a full reset is cheaper and more robust than chasing
        // each "cancel" code individually.
        if self.is_default() && !from.is_default() {
            params.push("0".to_string());
            write_sgr(out, &params)
        } else {
            self.diff_attrs(from, &mut params);
            self.diff_color(from.fg, self.fg, true, &mut params);
            self.diff_color(from.bg, self.bg, false, &mut params);
            self.diff_underline_color(from.underline_color, self.underline_color, &mut params);
            if params.is_empty() {
                Ok(())
            } else {
                write_sgr(out, &params)
            }
        }
    }

    fn diff_attrs(&self, from: &Style, params: &mut Vec<String>) {
        macro_rules! attr_diff {
            ($flag:expr, $on:literal, $off:literal) => {
                let was = from.attrs.contains($flag);
                let now = self.attrs.contains($flag);
                if was != now {
                    params.push((if now { $on } else { $off }).to_string());
                }
            };
        }
        attr_diff!(Attrs::BOLD, "1", "22");
        attr_diff!(Attrs::DIM, "2", "22");
        attr_diff!(Attrs::ITALIC, "3", "23");
        attr_diff!(Attrs::BLINK, "5", "25");
        attr_diff!(Attrs::REVERSE, "7", "27");
        attr_diff!(Attrs::INVISIBLE, "8", "28");
        attr_diff!(Attrs::STRIKETHROUGH, "9", "29");

        if from.underline != self.underline {
            match self.underline.sub_param() {
                None => params.push("24".to_string()),
                Some(1) => params.push("4".to_string()),
                Some(n) => params.push(format!("4:{n}")),
            }
        }
    }

    fn diff_color(&self, old: Color, new: Color, foreground: bool, params: &mut Vec<String>) {
        if old == new {
            return;
        }
        let default = if foreground { "39" } else { "49" };
        match new {
            Color::Default => params.push(default.to_string()),
            Color::Indexed(n) if n < 8 => {
                let base = if foreground { 30 } else { 40 };
                params.push((base + u16::from(n)).to_string());
            }
            Color::Indexed(n) if n < 16 => {
                let base = if foreground { 90 } else { 100 };
                params.push((base + u16::from(n - 8)).to_string());
            }
            Color::Indexed(n) => {
                let selector = if foreground { 38 } else { 48 };
                params.push(format!("{selector}:5:{n}"));
            }
            Color::Rgb(r, g, b) => {
                let selector = if foreground { 38 } else { 48 };
                params.push(format!("{selector}:2::{r}:{g}:{b}"));
            }
        }
    }

    fn diff_underline_color(&self, old: Color, new: Color, params: &mut Vec<String>) {
        if old == new {
            return;
        }
        match new {
            Color::Default => params.push("59".to_string()),
            Color::Indexed(n) => params.push(format!("58:5:{n}")),
            Color::Rgb(r, g, b) => params.push(format!("58:2::{r}:{g}:{b}")),
        }
    }
}

fn write_sgr<W: Write + ?Sized>(out: &mut W, params: &[String]) -> io::Result<()> {
    write!(out, "\x1b[{}m", params.join(";"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn emit(to: Style, from: Style) -> String {
        let mut buf = Vec::new();
        to.write_transition(&from, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn identical_styles_emit_nothing() {
        let s = Style::default().bold();
        assert_eq!(emit(s, s), "");
    }

    #[test]
    fn turning_on_bold_emits_1() {
        assert_eq!(emit(Style::default().bold(), Style::default()), "\x1b[1m");
    }

    #[test]
    fn returning_to_default_emits_full_reset() {
        let bold_red = Style::default().bold().fg(Color::ansi(1));
        assert_eq!(emit(Style::default(), bold_red), "\x1b[0m");
    }

    #[test]
    fn rgb_fg_uses_38_2_selector() {
        let s = Style::default().fg(Color::Rgb(10, 20, 30));
        assert_eq!(emit(s, Style::default()), "\x1b[38:2::10:20:30m");
    }

    #[test]
    fn indexed_high_color_uses_extended_selector() {
        let s = Style::default().bg(Color::Indexed(200));
        assert_eq!(emit(s, Style::default()), "\x1b[48:5:200m");
    }

    #[test]
    fn basic_16_colors_use_compact_codes() {
        let s = Style::default().fg(Color::ansi(3));
        assert_eq!(emit(s, Style::default()), "\x1b[33m");
    }

    #[test]
    fn roundtrip_through_two_transitions_is_idempotent() {
        let a = Style::default();
        let b = Style::default().bold().underline(Underline::Curly).fg(Color::Rgb(1, 2, 3));
        let mut buf = Vec::new();
        b.write_transition(&a, &mut buf).unwrap();
        // Applying the same transition twice in a row from the same
        // baseline should be idempotent in its effect (not necessarily
        // byte-identical on the second call, since the second call's
        // `from` already equals `to`).
        let mut buf2 = Vec::new();
        b.write_transition(&b, &mut buf2).unwrap();
        assert!(buf2.is_empty());
        assert!(!buf.is_empty());
    }
}
