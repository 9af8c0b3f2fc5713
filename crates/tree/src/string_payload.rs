use std::slice;
use std::sync::Arc;

use alloc_policy::{Hooks, OwnedBytes};

/// A string or key payload, following the reference design notes'
/// preferred representation: an owned/borrowed *variant* rather than a
/// flag, so the deletion rules are compile-checked by a `match` instead
/// of an `if node.flags.is_reference() { .. }` check scattered everywhere.
///
/// `Borrowed` has no lifetime parameter: the tree is a mutable,
/// explicitly-freed raw-pointer graph (see [`crate::NodeRef`]), and
/// threading a lifetime through it would only be checked at the type
/// level, not enforced by the borrow checker once the pointer crosses a
/// `NodeRef`. This mirrors the reference C library's own contract:
/// referencing freed or out-of-scope memory is the caller's mistake to
/// avoid, exactly as it would be there.
pub enum StringPayload {
    Owned(OwnedBytes),
    Borrowed { ptr: *const u8, len: usize },
}

impl StringPayload {
    pub fn owned_from_slice(bytes: &[u8], hooks: Arc<dyn Hooks>) -> Option<Self> {
        OwnedBytes::from_slice(bytes, hooks).map(StringPayload::Owned)
    }

    /// Borrow a caller-owned byte slice. Safety: the caller must ensure
    /// `bytes` outlives every use of the resulting payload.
    pub fn borrowed(bytes: &[u8]) -> Self {
        StringPayload::Borrowed { ptr: bytes.as_ptr(), len: bytes.len() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            StringPayload::Owned(owned) => owned.as_slice(),
            StringPayload::Borrowed { ptr, len } => unsafe { slice::from_raw_parts(*ptr, *len) },
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, StringPayload::Owned(_))
    }
}
