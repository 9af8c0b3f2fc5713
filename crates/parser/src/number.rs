//! Number scanning. The reference library scans a loose character class
//! and hands the slice to the platform's `strtod`, trusting the C
//! library to reject anything that isn't a legal number and to stop at
//! the first byte it can't consume. Rust's `f64::from_str` plays the
//! same role here: it is strict about JSON-shaped numbers (no bare
//! `.5`, no trailing `.`), which is a strict superset safety net over
//! what this scan already restricts to, and — unlike `strtod` — is
//! locale-independent, so there is no decimal-point normalization step
//! to perform at this boundary (see the design notes on this).

use crate::cursor::Cursor;
use crate::error::{Error, ErrorKind};

fn is_number_byte(b: u8) -> bool {
    b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E')
}

/// Scan the contiguous numeric slice at the cursor and parse it.
/// Returns the parsed value; the cursor is left just past the last byte
/// consumed.
pub(crate) fn scan(cursor: &mut Cursor<'_>) -> Result<f64, Error> {
    let start = cursor.offset();
    cursor.skip_while(is_number_byte);
    let slice = cursor.slice_from(start);
    if slice.is_empty() {
        return Err(Error::at(ErrorKind::Syntax, start));
    }
    let text = std::str::from_utf8(slice).map_err(|_| Error::at(ErrorKind::Syntax, start))?;
    text.parse::<f64>().map_err(|_| Error::at(ErrorKind::Syntax, start))
}
