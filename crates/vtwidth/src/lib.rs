//! Grapheme cluster iteration and terminal display width.
//!
//! The renderer and VT screens need two related but distinct things from a
//! string of text: where the user-perceived character boundaries are
//! (grapheme clusters), and how many terminal columns each one occupies.
//! Both questions are answered here so the rest of the workspace never
//! touches `unicode-segmentation`/`unicode-width` directly.

#![warn(clippy::pedantic)]

use unicode_segmentation::UnicodeSegmentation;

/// Which width table to consult when sizing a grapheme cluster.
///
/// Mirrors the capability record's `width_method`: terminals that have
/// confirmed support for the Unicode Core extension get accurate
/// East-Asian-aware widths; everything else falls back to the
/// conservative wcwidth approximation most terminals actually implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidthMethod {
    /// POSIX `wcwidth`-style approximation (the safe default).
    #[default]
    Wcwidth,
    /// Full Unicode East-Asian-width-aware table.
    Unicode,
}

/// Iterate the extended grapheme clusters of `s` in order.
#[must_use]
pub fn graphemes(s: &str) -> impl Iterator<Item = &str> {
    s.graphemes(true)
}

/// Compute the terminal column width of a single grapheme cluster.
///
/// Returns 0 for combining marks and other zero-width clusters, 1 for
/// ordinary clusters, and 2 for wide clusters (CJK ideographs, emoji with
/// default emoji presentation, etc).
#[must_use]
pub fn grapheme_width(grapheme: &str, method: WidthMethod) -> u16 {
    // A grapheme cluster's display width is the width of its base
    // codepoint; combining marks fused onto it by the segmenter don't
    // add columns.
    let Some(base) = grapheme.chars().next() else {
        return 0;
    };
    char_width(base, method)
}

/// Compute the terminal column width of a single codepoint.
#[must_use]
pub fn char_width(c: char, method: WidthMethod) -> u16 {
    match method {
        WidthMethod::Unicode => unicode_width::UnicodeWidthChar::width(c)
            .map(|w| w.clamp(0, 2) as u16)
            .unwrap_or(0),
        WidthMethod::Wcwidth => wcwidth_approx(c),
    }
}

/// Compute the total display width of a string under `method`.
#[must_use]
pub fn str_width(s: &str, method: WidthMethod) -> u16 {
    graphemes(s)
        .map(|g| grapheme_width(g, method))
        .fold(0u16, |acc, w| acc.saturating_add(w))
}

/// A conservative, dependency-free approximation of the historical
/// `wcwidth(3)` table: zero for C0/C1 controls and combining marks, two
/// for the common wide ranges (CJK, fullwidth forms, most emoji blocks),
/// one otherwise.
///
/// This intentionally undershoots `unicode-width`'s East-Asian-aware
/// table — it is meant to match what a plain terminal without Unicode
/// Core support actually renders, not the Unicode-correct answer.
#[must_use]
pub fn wcwidth_approx(c: char) -> u16 {
    let cp = c as u32;
    if cp == 0 {
        return 0;
    }
    if cp < 0x20 || (0x7f..0xa0).contains(&cp) {
        // Controls have no width of their own; the parser never builds a
        // grapheme cluster out of them, but guard anyway.
        return 0;
    }
    if is_combining(cp) {
        return 0;
    }
    if is_wide(cp) {
        2
    } else {
        1
    }
}

fn is_combining(cp: u32) -> bool {
    matches!(cp,
        0x0300..=0x036f   // Combining Diacritical Marks
        | 0x1ab0..=0x1aff // Combining Diacritical Marks Extended
        | 0x1dc0..=0x1dff // Combining Diacritical Marks Supplement
        | 0x20d0..=0x20ff // Combining Diacritical Marks for Symbols
        | 0xfe20..=0xfe2f // Combining Half Marks
        | 0x200b         // zero width space
        | 0x200c..=0x200d // ZWNJ / ZWJ
        | 0xfeff         // BOM / zero width no-break space
    )
}

fn is_wide(cp: u32) -> bool {
    matches!(cp,
        0x1100..=0x115f   // Hangul Jamo
        | 0x2e80..=0x303e // CJK Radicals, Kangxi, CJK symbols/punctuation
        | 0x3041..=0x33ff // Hiragana .. CJK Compatibility
        | 0x3400..=0x4dbf // CJK Unified Ideographs Extension A
        | 0x4e00..=0x9fff // CJK Unified Ideographs
        | 0xa000..=0xa4cf // Yi Syllables/Radicals
        | 0xac00..=0xd7a3 // Hangul Syllables
        | 0xf900..=0xfaff // CJK Compatibility Ideographs
        | 0xfe30..=0xfe4f // CJK Compatibility Forms
        | 0xff00..=0xff60 // Fullwidth Forms
        | 0xffe0..=0xffe6
        | 0x1f300..=0x1f64f // Misc Symbols and Pictographs, Emoticons
        | 0x1f900..=0x1f9ff // Supplemental Symbols and Pictographs
        | 0x20000..=0x3fffd // CJK Extension B and beyond, plane 2/3
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_narrow() {
        assert_eq!(char_width('a', WidthMethod::Wcwidth), 1);
        assert_eq!(char_width('a', WidthMethod::Unicode), 1);
    }

    #[test]
    fn cjk_is_wide_under_both_methods() {
        assert_eq!(char_width('界', WidthMethod::Wcwidth), 2);
        assert_eq!(char_width('界', WidthMethod::Unicode), 2);
    }

    #[test]
    fn combining_mark_is_zero_width() {
        assert_eq!(char_width('\u{0301}', WidthMethod::Wcwidth), 0);
    }

    #[test]
    fn grapheme_cluster_width_follows_base_codepoint() {
        // "e" + combining acute accent forms one grapheme cluster of width 1.
        let cluster = "e\u{0301}";
        assert_eq!(graphemes(cluster).count(), 1);
        assert_eq!(str_width(cluster, WidthMethod::Unicode), 1);
    }

    #[test]
    fn str_width_sums_cluster_widths() {
        assert_eq!(str_width("ab", WidthMethod::Wcwidth), 2);
        assert_eq!(str_width("你好", WidthMethod::Wcwidth), 4);
    }

    #[test]
    fn control_bytes_have_no_width() {
        assert_eq!(char_width('\u{0}', WidthMethod::Wcwidth), 0);
        assert_eq!(char_width('\u{1b}', WidthMethod::Wcwidth), 0);
    }
}
