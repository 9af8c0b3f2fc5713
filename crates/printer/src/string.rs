//! String escaping: two passes, counting bytes that need escaping
//! before writing so the fast (no-escapes) path can `memcpy` the
//! content verbatim between the enclosing quotes.

fn escape_len(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .map(|&b| match b {
            b'"' | b'\\' | 0x08 | 0x0C | b'\n' | b'\r' | b'\t' => 1,
            b if b < 0x20 => 5,
            _ => 0,
        })
        .sum()
}

pub(crate) fn needs_escaping(bytes: &[u8]) -> bool {
    escape_len(bytes) > 0
}

/// Write `bytes` escaped, quotes included, into `out` — the caller
/// pre-sizes `out` via [`escape_len`] plus the literal content.
pub(crate) fn write_escaped(bytes: &[u8], out: &mut Vec<u8>) {
    out.push(b'"');
    for &b in bytes {
        match b {
            b'"' => out.extend_from_slice(b"\\\""),
            b'\\' => out.extend_from_slice(b"\\\\"),
            0x08 => out.extend_from_slice(b"\\b"),
            0x0C => out.extend_from_slice(b"\\f"),
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b'\t' => out.extend_from_slice(b"\\t"),
            b if b < 0x20 => out.extend_from_slice(format!("\\u{b:04x}").as_bytes()),
            b => out.push(b),
        }
    }
    out.push(b'"');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_path_has_no_escapes() {
        assert!(!needs_escaping(b"hello"));
        let mut out = Vec::new();
        write_escaped(b"hello", &mut out);
        assert_eq!(out, b"\"hello\"");
    }

    #[test]
    fn escapes_quote_and_backslash() {
        let mut out = Vec::new();
        write_escaped(b"a\"b\\c", &mut out);
        assert_eq!(out, br#""a\"b\\c""#);
    }

    #[test]
    fn escapes_control_byte_as_unicode() {
        let mut out = Vec::new();
        write_escaped(&[0x01], &mut out);
        assert_eq!(out, b"\"\\u0001\"");
    }
}
