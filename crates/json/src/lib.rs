//! # json
//!
//! The public facade: parse, print, minify, and the full tree
//! construction/mutation/query surface, wired behind one crate the
//! way the teacher workspace's own top-level crate wires its lexer,
//! parser, and syntax layers behind a single entry point.
//!
//! Parsing and printing are traced at one span per call (see
//! [`tracing`]); the allocator can be swapped process-wide via
//! [`install_allocator`]. A failed [`parse`] additionally records its
//! offset and a snapshot of the input near the failure in a
//! thread-local slot, retrievable via [`last_error`] — the safe,
//! owned-copy equivalent of the reference library's "pointer into the
//! last-failing input".

pub use tree::{
    ApiContractError, DEFAULT_DEPTH_LIMIT, NodeFlags, NodeKind, NodeRef, NumberValue, StringPayload, append_child, append_child_reference,
    append_object_item, append_object_item_reference, array, array_reference, array_size, boolean, create_reference, delete, delete_from_array,
    delete_from_object, detach, detach_by_index, detach_by_key, duplicate, equals, insert_at_index, invalid, nth_child, null, number_node, object,
    object_get, object_reference, raw_owned, raw_reference, replace, replace_by_index, replace_by_key, set_number_value, set_string_value,
    string_owned, string_reference,
};
pub use tree::Error as TreeError;

pub use parser::{Error as ParseError, ErrorKind as ParseErrorKind, ParseOptions};
pub use printer::{Error as PrintError, PrintOptions};

use std::cell::RefCell;
use std::fmt;
use std::sync::Arc;

use alloc_policy::Hooks;

const ERROR_SNIPPET_LEN: usize = 32;

/// A snapshot of the most recent failed [`parse`] call on this thread.
/// Owned rather than a raw pointer into the caller's buffer: the
/// reference library hands back a pointer into input that must outlive
/// the inspection, which Rust has no sound way to express across an
/// arbitrary later call, so this copies the bytes near the failure
/// instead.
#[derive(Debug, Clone)]
pub struct LastError {
    pub offset: usize,
    pub kind: ParseErrorKind,
    pub near: Vec<u8>,
}

thread_local! {
    static LAST_ERROR: RefCell<Option<LastError>> = const { RefCell::new(None) };
}

fn record_error(input: &[u8], error: ParseError) {
    let start = error.cursor.offset.min(input.len());
    let end = (start + ERROR_SNIPPET_LEN).min(input.len());
    LAST_ERROR.with(|cell| {
        *cell.borrow_mut() = Some(LastError { offset: error.cursor.offset, kind: error.kind, near: input[start..end].to_vec() });
    });
}

fn clear_error() {
    LAST_ERROR.with(|cell| *cell.borrow_mut() = None);
}

/// The last parse failure recorded on this thread, if any, since the
/// last successful parse.
pub fn last_error() -> Option<LastError> {
    LAST_ERROR.with(|cell| cell.borrow().clone())
}

/// Parse `input` with default options using the process-wide allocator.
#[tracing::instrument(skip(input), fields(len = input.len()))]
pub fn parse(input: &[u8]) -> Result<NodeRef, ParseError> {
    parse_with(input, ParseOptions::default())
}

/// Parse `input` under explicit options.
#[tracing::instrument(skip(input, options), fields(len = input.len()))]
pub fn parse_with(input: &[u8], options: ParseOptions) -> Result<NodeRef, ParseError> {
    match parser::parse_with(input, &options, alloc_policy::active()) {
        Ok(root) => {
            clear_error();
            tracing::trace!("parse succeeded");
            Ok(root)
        }
        Err(error) => {
            tracing::debug!(offset = error.cursor.offset, kind = ?error.kind, "parse failed");
            record_error(input, error);
            Err(error)
        }
    }
}

/// Serialize `root` with default (unformatted) options.
#[tracing::instrument(skip(root))]
pub fn print(root: NodeRef) -> Result<Vec<u8>, PrintError> {
    printer::print(root, PrintOptions::default())
}

/// Serialize `root` under explicit options.
#[tracing::instrument(skip(root, options))]
pub fn print_with(root: NodeRef, options: PrintOptions) -> Result<Vec<u8>, PrintError> {
    printer::print(root, options)
}

/// Serialize into a caller-supplied fixed capacity; overflow fails.
pub fn print_fixed(root: NodeRef, options: PrintOptions, capacity: usize) -> Result<Vec<u8>, PrintError> {
    printer::print_fixed(root, options, capacity, alloc_policy::active())
}

/// Strip whitespace and comments from `input`.
pub fn minify(input: &[u8]) -> Vec<u8> {
    minify::minify(input)
}

/// Replace the process-wide allocator hooks.
pub fn install_allocator(hooks: Arc<dyn Hooks>) {
    tracing::trace!("installing custom allocator hooks");
    alloc_policy::install(hooks);
}

/// A root node paired with a `Display` impl that defers to the
/// unformatted printer — convenient where a node needs to flow through
/// `{}`/`to_string()` without the caller reaching for [`print`]
/// directly.
pub struct Document(pub NodeRef);

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = print(self.0).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&bytes))
    }
}
