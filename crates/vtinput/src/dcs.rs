//! DCS (Device Control String) response parsing.
//!
//! The only DCS response this crate currently interprets is `XTGETTCAP`:
//! `DCS 1 + r <hex-name>=<hex-value> ST` on a supported capability, or
//! `DCS 0 + r ST` when the terminal doesn't recognize it.

use vt_push_parser::event::DCSOwned;

use crate::event::TerminalInputEvent;

/// Parse a finished DCS sequence (header plus assembled data) into a
/// response event. Returns `None` for DCS shapes this crate doesn't
/// interpret.
pub(crate) fn parse_dcs<'a>(header: &DCSOwned, data: &'a [u8]) -> Option<TerminalInputEvent<'a>> {
    if header.private.is_some() || header.final_byte != b'r' || !header.intermediates.has(b'+') {
        return None;
    }
    let supported = header.params.try_parse::<u8>(0)? == 1;
    Some(TerminalInputEvent::TermcapResponse { supported, data })
}

// `parse_dcs` is exercised end-to-end in `parser.rs`'s tests, which feed
// full `XTGETTCAP` response byte sequences through `TerminalInputParser`
// rather than hand-building a `DCS` header here.
