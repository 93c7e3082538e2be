// SPDX-License-Identifier: GPL-3.0-only
use serde_json::ser::{CharEscape, Formatter};
use std::io;

/// Compact JSON that escapes only `"` and `\`
///
/// Control characters and everything else inside strings are written as-is,
/// which is what existing consumers of the record output expect.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFormatter;

impl Formatter for RecordFormatter {
    fn write_char_escape<W>(&mut self, writer: &mut W, char_escape: CharEscape) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let raw: &[u8] = match char_escape {
            CharEscape::Quote => b"\\\"",
            CharEscape::ReverseSolidus => b"\\\\",
            CharEscape::Solidus => b"/",
            CharEscape::Backspace => b"\x08",
            CharEscape::FormFeed => b"\x0c",
            CharEscape::LineFeed => b"\n",
            CharEscape::CarriageReturn => b"\r",
            CharEscape::Tab => b"\t",
            CharEscape::AsciiControl(byte) => return writer.write_all(&[byte]),
        };
        writer.write_all(raw)
    }
}
