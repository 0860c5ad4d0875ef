//! Decoding `CSI ... m` (Select Graphic Rendition) parameters into
//! [`Style`] mutations.
//!
//! This is the inverse of [`vtcell::Style::write_transition`]: that method
//! is the single source of truth for which SGR codes this codebase emits,
//! so decoding follows it code-for-code (compact 16-color codes, the
//! `38:5:N` / `38:2::R:G:B` extended color selectors, and `4:N` underline
//! variants).

use vtcell::{Attrs, Color, Style, Underline};

use crate::parser::{Csi, Param};

/// Apply one `m`-terminated CSI's parameters to `style` in place.
///
/// Unrecognized codes are skipped; this never fails, matching the VT
/// emulator's "unknown sequence: log and ignore" failure policy.
pub fn apply(style: &mut Style, csi: &Csi<'_>) {
    if csi.params.is_empty() {
        *style = Style::default();
        return;
    }

    let mut i = 0;
    while i < csi.params.len() {
        let code = csi.params[i].value.unwrap_or(0);
        match code {
            0 => *style = Style::default(),
            1 => style.attrs.insert(Attrs::BOLD),
            2 => style.attrs.insert(Attrs::DIM),
            3 => style.attrs.insert(Attrs::ITALIC),
            4 => {
                style.underline = underline_variant(next_sub(csi.params, i));
                if matches!(csi.params.get(i + 1), Some(Param { sub: true, .. })) {
                    i += 1;
                }
            }
            5 => style.attrs.insert(Attrs::BLINK),
            7 => style.attrs.insert(Attrs::REVERSE),
            8 => style.attrs.insert(Attrs::INVISIBLE),
            9 => style.attrs.insert(Attrs::STRIKETHROUGH),
            22 => style.attrs.remove(Attrs::BOLD | Attrs::DIM),
            23 => style.attrs.remove(Attrs::ITALIC),
            24 => style.underline = Underline::Off,
            25 => style.attrs.remove(Attrs::BLINK),
            27 => style.attrs.remove(Attrs::REVERSE),
            28 => style.attrs.remove(Attrs::INVISIBLE),
            29 => style.attrs.remove(Attrs::STRIKETHROUGH),
            30..=37 => style.fg = Color::ansi((code - 30) as u8),
            38 => {
                if let Some((color, consumed)) = decode_extended_color(csi.params, i) {
                    style.fg = color;
                    i += consumed;
                }
            }
            39 => style.fg = Color::Default,
            40..=47 => style.bg = Color::ansi((code - 40) as u8),
            48 => {
                if let Some((color, consumed)) = decode_extended_color(csi.params, i) {
                    style.bg = color;
                    i += consumed;
                }
            }
            49 => style.bg = Color::Default,
            58 => {
                if let Some((color, consumed)) = decode_extended_color(csi.params, i) {
                    style.underline_color = color;
                    i += consumed;
                }
            }
            59 => style.underline_color = Color::Default,
            90..=97 => style.fg = Color::ansi((code - 90 + 8) as u8),
            100..=107 => style.bg = Color::ansi((code - 100 + 8) as u8),
            _ => {}
        }
        i += 1;
    }
}

fn next_sub(params: &[Param], i: usize) -> Option<u32> {
    match params.get(i + 1) {
        Some(Param { value, sub: true }) => *value,
        _ => None,
    }
}

fn underline_variant(sub: Option<u32>) -> Underline {
    match sub {
        Some(1) | None => Underline::Single,
        Some(2) => Underline::Double,
        Some(3) => Underline::Curly,
        Some(4) => Underline::Dotted,
        Some(5) => Underline::Dashed,
        Some(0) | Some(_) => Underline::Off,
    }
}

/// Decode a `38`/`48`/`58` extended color selector starting at `params[i]`
/// (the selector code itself). Returns the color and how many extra
/// params beyond the selector were consumed, or `None` if the arguments
/// run off the end.
///
/// Handles both the legacy semicolon form (`38;5;N`, `38;2;R;G;B`) and the
/// ECMA-48 colon form (`38:2::R:G:B`, with an optional empty colorspace-id
/// slot before the RGB triplet).
fn decode_extended_color(params: &[Param], i: usize) -> Option<(Color, usize)> {
    let mode_param = params.get(i + 1)?;
    match mode_param.value {
        Some(5) => {
            let n = params.get(i + 2)?.value?;
            Some((Color::Indexed(u8::try_from(n).unwrap_or(255)), 2))
        }
        Some(2) => {
            let colon_form = mode_param.sub || matches!(params.get(i + 2), Some(Param { sub: true, .. }));
            let rgb_start = if colon_form && matches!(params.get(i + 2), Some(Param { value: None, sub: true })) {
                i + 3
            } else {
                i + 2
            };
            let r = params.get(rgb_start)?.value?;
            let g = params.get(rgb_start + 1)?.value?;
            let b = params.get(rgb_start + 2)?.value?;
            let consumed = rgb_start + 3 - i - 1;
            Some((
                Color::Rgb(
                    u8::try_from(r).unwrap_or(255),
                    u8::try_from(g).unwrap_or(255),
                    u8::try_from(b).unwrap_or(255),
                ),
                consumed,
            ))
        }
        _ => None,
    }
}
