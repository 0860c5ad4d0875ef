//! OSC 8 hyperlink attributes attached to a cell.

use std::io::{self, Write};
use std::sync::Arc;

/// A hyperlink target shared by every cell that is part of the same link
/// run. Cheaply cloneable so cells can each hold a reference without
/// duplicating the URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hyperlink {
    pub uri: Arc<str>,
    pub id: Option<Arc<str>>,
}

impl Hyperlink {
    #[must_use]
    pub fn new(uri: impl Into<Arc<str>>) -> Self {
        Self { uri: uri.into(), id: None }
    }

    #[must_use]
    pub fn with_id(uri: impl Into<Arc<str>>, id: impl Into<Arc<str>>) -> Self {
        Self { uri: uri.into(), id: Some(id.into()) }
    }

    /// Write the `OSC 8` open sequence for this link.
    pub fn write_open<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        match &self.id {
            Some(id) => write!(out, "\x1b]8;id={id};{}\x1b\\", self.uri),
            None => write!(out, "\x1b]8;;{}\x1b\\", self.uri),
        }
    }

    /// Write the `OSC 8` close sequence (an empty-URI `OSC 8`).
    pub fn write_close<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
        write!(out, "\x1b]8;;\x1b\\")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_without_id() {
        let link = Hyperlink::new("https://example.com");
        let mut buf = Vec::new();
        link.write_open(&mut buf).unwrap();
        assert_eq!(buf, b"\x1b]8;;https://example.com\x1b\\");
    }

    #[test]
    fn open_with_id() {
        let link = Hyperlink::with_id("https://example.com", "ref1");
        let mut buf = Vec::new();
        link.write_open(&mut buf).unwrap();
        assert_eq!(buf, b"\x1b]8;id=ref1;https://example.com\x1b\\");
    }

    #[test]
    fn close_is_empty_osc8() {
        let mut buf = Vec::new();
        Hyperlink::write_close(&mut buf).unwrap();
        assert_eq!(buf, b"\x1b]8;;\x1b\\");
    }
}
