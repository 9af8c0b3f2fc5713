use std::fmt;

/// Where parsing stopped. Mirrors the position a failed parse leaves
/// behind for the caller to inspect, rather than unwinding with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The active allocator hooks returned no memory.
    Allocation,
    /// A read would have gone past the end of the input.
    Bounds,
    /// The byte at the current offset cannot start or continue a legal
    /// production: bad literal, malformed escape, lone surrogate, bad
    /// number, missing separator or closer, or (in strict mode) trailing
    /// garbage after the top-level value.
    Syntax,
    /// Nesting exceeded the configured depth limit.
    Depth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub cursor: Cursor,
}

impl Error {
    pub(crate) fn at(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, cursor: Cursor { offset } }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            ErrorKind::Allocation => "allocator returned no memory",
            ErrorKind::Bounds => "unexpected end of input",
            ErrorKind::Syntax => "unexpected byte",
            ErrorKind::Depth => "nesting exceeds the configured depth limit",
        };
        write!(f, "{what} at offset {}", self.cursor.offset)
    }
}

impl std::error::Error for Error {}
