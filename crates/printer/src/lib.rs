//! # Serializer
//!
//! Tree to text. A growable output buffer with the reference growth
//! discipline (see [`alloc_policy::RawBuffer::ensure`]), round-trip
//! accurate number formatting, and optional pretty-printing.

mod buffer;
mod error;
mod number;
mod string;
mod value;

pub use error::Error;

use std::sync::Arc;

use alloc_policy::Hooks;
use tree::NodeRef;

use crate::buffer::PrintBuffer;

const MANAGED_INITIAL_CAPACITY: usize = 256;

/// Per-call print configuration, following the same chained-setter
/// shape as [`parser::ParseOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintOptions {
    pretty: bool,
}

impl PrintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent nested objects with tabs and a trailing newline per
    /// entry; arrays gain a space after each comma. Unformatted output
    /// inserts no whitespace anywhere.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Managed mode: the serializer picks an initial capacity, grows as
/// needed, and returns a right-sized buffer.
pub fn print(root: NodeRef, options: PrintOptions) -> Result<Vec<u8>, Error> {
    print_with(root, options, MANAGED_INITIAL_CAPACITY, alloc_policy::active())
}

/// Hinted mode: the caller supplies an initial capacity; growth is
/// still permitted beyond it.
pub fn print_with(root: NodeRef, options: PrintOptions, capacity_hint: usize, hooks: Arc<dyn Hooks>) -> Result<Vec<u8>, Error> {
    let mut buf = PrintBuffer::with_capacity(capacity_hint, hooks)?;
    value::value(&mut buf, root, options.pretty, 0)?;
    Ok(buf.finish())
}

/// Fixed mode: the caller supplies a capacity that must not be
/// exceeded; overflow fails and nothing beyond the truncation point is
/// guaranteed meaningful.
pub fn print_fixed(root: NodeRef, options: PrintOptions, capacity: usize, hooks: Arc<dyn Hooks>) -> Result<Vec<u8>, Error> {
    let mut buf = PrintBuffer::fixed_capacity(capacity, hooks)?;
    value::value(&mut buf, root, options.pretty, 0)?;
    Ok(buf.finish())
}
