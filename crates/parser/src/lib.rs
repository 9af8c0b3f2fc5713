//! # Parser
//!
//! Recursive-descent reader: byte range in, tree out. Bounded nesting
//! depth, UTF-16 surrogate-aware string decoding, a loose number scan
//! delegated to `f64::from_str`, and precise byte-offset error
//! reporting via [`Error::cursor`].

mod cursor;
mod error;
mod number;
mod parser;
mod string;

pub use error::{Cursor, Error, ErrorKind};

use std::sync::Arc;

use alloc_policy::Hooks;
use tree::NodeRef;

use crate::cursor::Cursor as InputCursor;
use crate::parser::State;

const BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Per-call parse configuration. Grounded on the teacher's builder
/// pattern for `GreenNodeBuilder`: chained setters over a public
/// constructor rather than a struct with public fields.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    depth_limit: usize,
    strict_terminated: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { depth_limit: tree::DEFAULT_DEPTH_LIMIT, strict_terminated: false }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth_limit(mut self, limit: usize) -> Self {
        self.depth_limit = limit;
        self
    }

    /// Require that nothing but whitespace follows the top-level value.
    pub fn strict_terminated(mut self, strict: bool) -> Self {
        self.strict_terminated = strict;
        self
    }
}

/// Parse `input` with default options using the process-wide allocator
/// hooks currently installed.
pub fn parse(input: &[u8]) -> Result<NodeRef, Error> {
    parse_with(input, &ParseOptions::default(), alloc_policy::active())
}

/// Parse `input` under explicit options and allocator hooks, snapshot
/// at call time so a later [`alloc_policy::install`] cannot affect an
/// in-flight parse.
pub fn parse_with(input: &[u8], options: &ParseOptions, hooks: Arc<dyn Hooks>) -> Result<NodeRef, Error> {
    let mut cursor = InputCursor::new(input);
    if cursor.starts_with(BOM) {
        cursor.advance_by(BOM.len());
    }

    let mut state = State { cursor, depth: 0, depth_limit: options.depth_limit, hooks };
    parser::skip_whitespace(&mut state);

    let root = parser::value(&mut state)?;

    parser::skip_whitespace(&mut state);
    if options.strict_terminated && !state.cursor.is_eof() {
        tree::delete(root);
        return Err(Error::at(error::ErrorKind::Syntax, state.cursor.offset()));
    }

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn parses_nested_object_and_array() {
        let root = parse(br#"{"a":1,"b":[true,null,"x"]}"#).unwrap();
        assert_eq!(tree::array_size(root), 2);
        let a = tree::object_get(root, b"a", false).unwrap();
        assert_eq!(a.as_f64(), Some(1.0));
        let b = tree::object_get(root, b"b", false).unwrap();
        assert_eq!(tree::array_size(b), 3);
        tree::delete(root);
    }

    #[test]
    fn consumes_leading_bom() {
        let mut input = BOM.to_vec();
        input.extend_from_slice(b"null");
        let root = parse(&input).unwrap();
        assert_eq!(root.as_bool(), None);
        tree::delete(root);
    }

    #[rstest]
    #[case(b"true")]
    #[case(b"false")]
    #[case(b"null")]
    #[case(b"0")]
    #[case(b"\"s\"")]
    fn parses_bare_scalars(#[case] input: &[u8]) {
        let root = parse(input).unwrap();
        tree::delete(root);
    }

    #[test]
    fn trailing_comma_is_rejected_in_strict_mode() {
        let err = parse_with(br#"{"k":"v" ,}"#, &ParseOptions::new().strict_terminated(true), alloc_policy::active()).unwrap_err();
        assert_eq!(err.kind, error::ErrorKind::Syntax);
        assert_eq!(err.cursor.offset, 10);
    }

    #[test]
    fn depth_limit_rejects_over_nested_arrays() {
        let mut input = vec![b'['; 1025];
        input.extend(std::iter::repeat_n(b']', 1025));
        let err = parse_with(&input, &ParseOptions::new().depth_limit(1024), alloc_policy::active()).unwrap_err();
        assert_eq!(err.kind, error::ErrorKind::Depth);
        assert_eq!(err.cursor.offset, 1024);
    }

    #[test]
    fn depth_limit_at_exactly_the_cap_succeeds() {
        let mut input = vec![b'['; 1024];
        input.extend(std::iter::repeat_n(b']', 1024));
        let root = parse_with(&input, &ParseOptions::new().depth_limit(1024), alloc_policy::active()).unwrap();
        tree::delete(root);
    }

    #[test]
    fn astral_surrogate_pair_decodes_to_four_utf8_bytes() {
        let root = parse(b"\"\\uD834\\uDD1E\"").unwrap();
        assert_eq!(root.as_bytes().unwrap(), [0xF0, 0x9D, 0x84, 0x9E]);
        tree::delete(root);
    }

    #[test]
    fn number_round_trips_bit_exactly() {
        let root = parse(b"1.0e300").unwrap();
        assert_eq!(root.as_f64(), Some(1.0e300));
        tree::delete(root);
    }

    #[test]
    fn bad_element_deep_in_an_array_fails_cleanly() {
        let err = parse(br#"[1,2,nope,3]"#).unwrap_err();
        assert_eq!(err.kind, error::ErrorKind::Syntax);
    }

    #[test]
    fn missing_colon_in_object_fails_cleanly() {
        let err = parse(br#"{"a" 1}"#).unwrap_err();
        assert_eq!(err.kind, error::ErrorKind::Syntax);
    }

    #[test]
    fn unterminated_nested_array_fails_cleanly() {
        let err = parse(br#"{"a":[1,2"#).unwrap_err();
        assert_eq!(err.kind, error::ErrorKind::Bounds);
    }
}
