//! Terminal capability probing (`query_terminal`).
//!
//! Emits a fixed battery of queries — `DECRQM` mode reports and a Kitty
//! keyboard flags query — and folds the responses into a
//! [`vtscreen::CapabilityRecord`] as they arrive. The DA1 response
//! (`PrimaryDeviceAttributes`) is the synchronization signal: its arrival
//! means every earlier query has already been answered or ignored by the
//! terminal, since terminals answer queries in the order they receive
//! them.

use vtinput::TerminalInputEvent;
use vtscreen::CapabilityRecord;

use crate::event::CapEvent;

/// DEC private mode numbers probed via `DECRQM` (`CSI ? Pd $ p`).
const MODE_SYNC_OUTPUT: u16 = 2026;
const MODE_UNICODE_CORE: u16 = 2027;
const MODE_COLOR_SCHEME_UPDATES: u16 = 2031;
const MODE_IN_BAND_RESIZE: u16 = 2048;
const MODE_SGR_PIXEL_MOUSE: u16 = 1016;

/// Hex-encoded `RGB` capname, queried via `XTGETTCAP`
/// (`DCS + q <hex-name> ST`) to confirm truecolor support.
const XTGETTCAP_RGB: &[u8] = b"\x1bP+q524742\x1b\\";

/// Minimal Kitty graphics protocol query (`APC G i=1,a=q ST`). The
/// terminal's answer is itself APC-framed; this crate's VT event stream
/// has no variant for APC responses, so the query is sent but its
/// response cannot be decoded here (see `DESIGN.md`).
const KITTY_GRAPHICS_QUERY: &[u8] = b"\x1b_Gi=1,a=q\x1b\\";

/// What folding one event into the capability record did.
pub(crate) enum Observation {
    /// Not a capability-probe response; forward it to the application as
    /// an ordinary input event.
    Unhandled,
    /// A capability was newly confirmed.
    Cap(CapEvent),
    /// The DA1 synchronization response arrived.
    ProbeComplete,
}

/// Build the byte sequence `query_terminal` writes to the tty.
#[must_use]
pub fn probe_sequence() -> Vec<u8> {
    let mut buf = Vec::with_capacity(64);
    for mode in [
        MODE_SYNC_OUTPUT,
        MODE_UNICODE_CORE,
        MODE_COLOR_SCHEME_UPDATES,
        MODE_IN_BAND_RESIZE,
        MODE_SGR_PIXEL_MOUSE,
    ] {
        buf.extend_from_slice(format!("\x1b[?{mode}$p").as_bytes());
    }
    // Kitty keyboard protocol flags query.
    buf.extend_from_slice(b"\x1b[?u");
    // Truecolor support, via XTGETTCAP.
    buf.extend_from_slice(XTGETTCAP_RGB);
    // Kitty graphics protocol support.
    buf.extend_from_slice(KITTY_GRAPHICS_QUERY);
    // Primary device attributes; its response ends the probe.
    buf.extend_from_slice(b"\x1b[c");
    buf
}

/// Fold one parsed input event into `caps`, reporting what happened.
pub(crate) fn observe(caps: &mut CapabilityRecord, event: &TerminalInputEvent<'_>) -> Observation {
    match event {
        TerminalInputEvent::PrimaryDeviceAttributes => {
            caps.mark_probe_complete();
            Observation::ProbeComplete
        }
        #[cfg(unix)]
        TerminalInputEvent::KeyboardEnhancementFlags(_) => {
            let was_set = caps.kitty_keyboard();
            caps.observe_kitty_keyboard();
            if was_set { Observation::Unhandled } else { Observation::Cap(CapEvent::KittyKeyboard) }
        }
        TerminalInputEvent::TermcapResponse { supported: true, .. } if !caps.rgb() => {
            caps.observe_rgb();
            Observation::Cap(CapEvent::Rgb)
        }
        TerminalInputEvent::LowLevel(vt_event) => observe_low_level(caps, vt_event),
        _ => Observation::Unhandled,
    }
}

fn observe_low_level(caps: &mut CapabilityRecord, vt_event: &vtinput::VTEvent<'_>) -> Observation {
    let vtinput::VTEvent::Csi(csi) = vt_event else {
        return Observation::Unhandled;
    };
    // DECRPM mode report: `CSI ? Pd ; Ps $ y`.
    if csi.private != Some(b'?') || csi.final_byte != b'y' || !csi.intermediates.has(b'$') {
        return Observation::Unhandled;
    }
    let Some(mode) = csi.params.try_parse::<u16>(0) else {
        return Observation::Unhandled;
    };
    let Some(state) = csi.params.try_parse::<u8>(1) else {
        return Observation::Unhandled;
    };
    // States 1 (set) and 3 (permanently set) both count as supported.
    if state != 1 && state != 3 {
        return Observation::Unhandled;
    }
    match mode {
        MODE_SYNC_OUTPUT if !caps.sync_output() => {
            caps.observe_sync_output();
            Observation::Cap(CapEvent::SyncOutput)
        }
        MODE_UNICODE_CORE if caps.unicode() != vtscreen::UnicodeSupport::UnicodeCore => {
            caps.observe_unicode_core();
            Observation::Cap(CapEvent::UnicodeCore)
        }
        MODE_COLOR_SCHEME_UPDATES if !caps.color_scheme_updates() => {
            caps.observe_color_scheme_updates();
            Observation::Cap(CapEvent::ColorSchemeUpdates)
        }
        MODE_SGR_PIXEL_MOUSE if !caps.sgr_pixel_mouse() => {
            caps.observe_sgr_pixel_mouse();
            Observation::Cap(CapEvent::SgrPixelMouse)
        }
        _ => Observation::Unhandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_sequence_ends_with_da1() {
        let seq = probe_sequence();
        assert!(seq.ends_with(b"\x1b[c"));
    }

    #[test]
    fn da1_response_completes_the_probe() {
        let mut caps = CapabilityRecord::default();
        assert!(matches!(
            observe(&mut caps, &TerminalInputEvent::PrimaryDeviceAttributes),
            Observation::ProbeComplete
        ));
        assert!(caps.probe_complete());
    }

    #[test]
    fn probe_sequence_includes_xtgettcap_and_kitty_graphics_queries() {
        let seq = probe_sequence();
        assert!(seq.windows(XTGETTCAP_RGB.len()).any(|w| w == XTGETTCAP_RGB));
        assert!(
            seq.windows(KITTY_GRAPHICS_QUERY.len())
                .any(|w| w == KITTY_GRAPHICS_QUERY)
        );
    }

    #[test]
    fn xtgettcap_success_response_confirms_rgb() {
        let mut caps = CapabilityRecord::default();
        let event = TerminalInputEvent::TermcapResponse { supported: true, data: b"524742=31" };
        assert!(matches!(observe(&mut caps, &event), Observation::Cap(CapEvent::Rgb)));
        assert!(caps.rgb());
    }

    #[test]
    fn xtgettcap_failure_response_does_not_confirm_rgb() {
        let mut caps = CapabilityRecord::default();
        let event = TerminalInputEvent::TermcapResponse { supported: false, data: b"" };
        assert!(matches!(observe(&mut caps, &event), Observation::Unhandled));
        assert!(!caps.rgb());
    }

    #[test]
    fn sgr_pixel_mouse_decrpm_response_confirms_capability() {
        let mut caps = CapabilityRecord::default();
        let mut parser = vtinput::TerminalInputParser::new();
        let mut observed = None;
        parser.feed_with(b"\x1b[?1016;1$y", &mut |event| {
            observed = Some(observe(&mut caps, &event));
        });
        assert!(matches!(observed, Some(Observation::Cap(CapEvent::SgrPixelMouse))));
        assert!(caps.sgr_pixel_mouse());
    }
}
