//! Capability record: what the terminal has confirmed it supports.
//!
//! The record is write-once-per-flag: [`CapabilityRecord::observe_*`]
//! methods only ever turn flags on. This mirrors the concurrency model in
//! which the reader thread is the sole writer and only ever folds in
//! *more* confirmed support as capability responses arrive (§5: "the
//! capability record never regresses").

/// Which width table the renderer should consult, driven by whether the
/// terminal has confirmed Unicode Core support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnicodeSupport {
    #[default]
    Legacy,
    UnicodeCore,
}

impl From<UnicodeSupport> for vtwidth::WidthMethod {
    fn from(u: UnicodeSupport) -> Self {
        match u {
            UnicodeSupport::Legacy => vtwidth::WidthMethod::Wcwidth,
            UnicodeSupport::UnicodeCore => vtwidth::WidthMethod::Unicode,
        }
    }
}

/// Terminal capabilities discovered by `query_terminal` (§4.3).
///
/// Starts fully conservative; each `observe_*` call monotonically adds
/// support, never removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilityRecord {
    rgb: bool,
    kitty_keyboard: bool,
    kitty_graphics: bool,
    sgr_pixel_mouse: bool,
    color_scheme_updates: bool,
    sync_output: bool,
    unicode: UnicodeSupport,
    probe_complete: bool,
}

impl CapabilityRecord {
    #[must_use]
    pub fn rgb(&self) -> bool {
        self.rgb
    }

    #[must_use]
    pub fn kitty_keyboard(&self) -> bool {
        self.kitty_keyboard
    }

    #[must_use]
    pub fn kitty_graphics(&self) -> bool {
        self.kitty_graphics
    }

    #[must_use]
    pub fn sgr_pixel_mouse(&self) -> bool {
        self.sgr_pixel_mouse
    }

    #[must_use]
    pub fn color_scheme_updates(&self) -> bool {
        self.color_scheme_updates
    }

    /// Whether the terminal has confirmed DEC private mode 2026
    /// (synchronized output), gating the renderer's begin/end markers.
    #[must_use]
    pub fn sync_output(&self) -> bool {
        self.sync_output
    }

    #[must_use]
    pub fn unicode(&self) -> UnicodeSupport {
        self.unicode
    }

    #[must_use]
    pub fn width_method(&self) -> vtwidth::WidthMethod {
        self.unicode.into()
    }

    /// Whether `query_terminal`'s DA1 synchronization signal has fired.
    #[must_use]
    pub fn probe_complete(&self) -> bool {
        self.probe_complete
    }

    pub fn observe_rgb(&mut self) {
        if !self.rgb {
            tracing::info!("terminal confirmed truecolor support");
        }
        self.rgb = true;
    }

    pub fn observe_kitty_keyboard(&mut self) {
        if !self.kitty_keyboard {
            tracing::info!("terminal confirmed kitty keyboard protocol support");
        }
        self.kitty_keyboard = true;
    }

    pub fn observe_kitty_graphics(&mut self) {
        if !self.kitty_graphics {
            tracing::info!("terminal confirmed kitty graphics protocol support");
        }
        self.kitty_graphics = true;
    }

    pub fn observe_sgr_pixel_mouse(&mut self) {
        self.sgr_pixel_mouse = true;
    }

    pub fn observe_color_scheme_updates(&mut self) {
        self.color_scheme_updates = true;
    }

    pub fn observe_sync_output(&mut self) {
        self.sync_output = true;
    }

    pub fn observe_unicode_core(&mut self) {
        self.unicode = UnicodeSupport::UnicodeCore;
    }

    /// Mark the probe complete. Called once the DA1 response has been
    /// observed, or the caller's timeout has expired.
    pub fn mark_probe_complete(&mut self) {
        self.probe_complete = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_fully_conservative() {
        let caps = CapabilityRecord::default();
        assert!(!caps.rgb());
        assert!(!caps.kitty_keyboard());
        assert_eq!(caps.unicode(), UnicodeSupport::Legacy);
        assert_eq!(caps.width_method(), vtwidth::WidthMethod::Wcwidth);
    }

    #[test]
    fn flags_never_regress() {
        let mut caps = CapabilityRecord::default();
        caps.observe_rgb();
        assert!(caps.rgb());
        // There is no "un-observe"; simulate a second, redundant response.
        caps.observe_rgb();
        assert!(caps.rgb());
    }

    #[test]
    fn unicode_core_flips_width_method() {
        let mut caps = CapabilityRecord::default();
        caps.observe_unicode_core();
        assert_eq!(caps.width_method(), vtwidth::WidthMethod::Unicode);
    }
}
