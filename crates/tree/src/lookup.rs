//! Traversal and lookup: array indexing, object key lookup, array size.
//! All O(n) sibling walks, matching the reference library exactly —
//! there is no auxiliary index.

use crate::node::NodeRef;

pub fn array_size(parent: NodeRef) -> usize {
    let mut count = 0;
    let mut child = parent.first_child();
    while let Some(c) = child {
        count += 1;
        child = c.next_sibling();
    }
    count
}

pub fn nth_child(parent: NodeRef, index: usize) -> Option<NodeRef> {
    let mut child = parent.first_child();
    let mut remaining = index;
    while let Some(c) = child {
        if remaining == 0 {
            return Some(c);
        }
        remaining -= 1;
        child = c.next_sibling();
    }
    None
}

fn ascii_eq_case_insensitive(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.to_ascii_lowercase() == y.to_ascii_lowercase())
}

/// Look up a child by key. `case_insensitive` performs ASCII-only
/// `tolower`-based comparison — not locale- or Unicode-case-folding
/// aware, matching the reference implementation precisely (see the open
/// question in the design notes).
pub fn object_get(parent: NodeRef, key: &[u8], case_insensitive: bool) -> Option<NodeRef> {
    let mut child = parent.first_child();
    while let Some(c) = child {
        if let Some(candidate) = c.key_bytes() {
            let matches = if case_insensitive { ascii_eq_case_insensitive(&candidate, key) } else { candidate == key };
            if matches {
                return Some(c);
            }
        }
        child = c.next_sibling();
    }
    None
}
