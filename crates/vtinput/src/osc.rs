//! OSC (Operating System Command) response parsing.
//!
//! Handles the capability-query and state-report responses a well-behaved
//! terminal sends back after a program queries it: OSC 10/11/12 (fg/bg/
//! cursor color), OSC 4 (indexed palette color), and OSC 52 (clipboard).
//! The OSC body is split on its leading `Ps;` number and dispatched from
//! there; anything else falls through to the caller as unrecognized.

use crate::event::{ColorTarget, TerminalInputEvent};

/// Parse an assembled OSC body (the bytes between `OSC` and its
/// terminator, not including either) into a response event.
///
/// Returns `None` for OSC numbers this crate doesn't interpret, or for a
/// payload shape that doesn't match what's expected for a recognized
/// number.
pub(crate) fn parse_osc(data: &[u8]) -> Option<TerminalInputEvent<'_>> {
    let (number, rest) = split_number(data)?;
    match number {
        10 => Some(TerminalInputEvent::ColorReport { which: ColorTarget::Foreground, color: rest }),
        11 => Some(TerminalInputEvent::ColorReport { which: ColorTarget::Background, color: rest }),
        12 => Some(TerminalInputEvent::ColorReport { which: ColorTarget::Cursor, color: rest }),
        4 => {
            let (index, color) = split_number(rest)?;
            Some(TerminalInputEvent::ColorScheme { index: i16::try_from(index).ok()?, color })
        }
        52 => {
            let (selection, base64) = split_token(rest)?;
            // `Pc` may name several buffers (e.g. `cp`); report the first,
            // the terminal's default when the program didn't pick one.
            let selection = *selection.first()?;
            Some(TerminalInputEvent::Clipboard { selection, base64 })
        }
        _ => None,
    }
}

/// Split `Ps;rest` into the leading decimal number and the remaining
/// bytes. Returns `None` if there's no leading digit.
fn split_number(data: &[u8]) -> Option<(u32, &[u8])> {
    let digits_end = data.iter().position(|b| !b.is_ascii_digit()).unwrap_or(data.len());
    if digits_end == 0 {
        return None;
    }
    let number: u32 = std::str::from_utf8(&data[..digits_end]).ok()?.parse().ok()?;
    let rest = if digits_end < data.len() && data[digits_end] == b';' {
        &data[digits_end + 1..]
    } else {
        &data[digits_end..]
    };
    Some((number, rest))
}

/// Split `token;rest` at the first `;`, returning both halves without it.
fn split_token(data: &[u8]) -> Option<(&[u8], &[u8])> {
    let sep = data.iter().position(|&b| b == b';')?;
    Some((&data[..sep], &data[sep + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_foreground_color_report() {
        let event = parse_osc(b"10;rgb:ffff/ffff/ffff").unwrap();
        assert_eq!(
            event,
            TerminalInputEvent::ColorReport {
                which: ColorTarget::Foreground,
                color: b"rgb:ffff/ffff/ffff",
            }
        );
    }

    #[test]
    fn parses_background_color_report() {
        let event = parse_osc(b"11;rgb:2828/2c2c/3434").unwrap();
        assert_eq!(
            event,
            TerminalInputEvent::ColorReport {
                which: ColorTarget::Background,
                color: b"rgb:2828/2c2c/3434",
            }
        );
    }

    #[test]
    fn parses_palette_color_report() {
        let event = parse_osc(b"4;5;rgb:1234/5678/9abc").unwrap();
        assert_eq!(
            event,
            TerminalInputEvent::ColorScheme { index: 5, color: b"rgb:1234/5678/9abc" }
        );
    }

    #[test]
    fn parses_clipboard_report() {
        let event = parse_osc(b"52;c;aGVsbG8=").unwrap();
        assert_eq!(event, TerminalInputEvent::Clipboard { selection: b'c', base64: b"aGVsbG8=" });
    }

    #[test]
    fn unrecognized_number_returns_none() {
        assert_eq!(parse_osc(b"0;some title"), None);
    }

    #[test]
    fn non_numeric_prefix_returns_none() {
        assert_eq!(parse_osc(b"rgb:ffff/ffff/ffff"), None);
    }
}
