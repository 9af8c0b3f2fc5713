//! Structural equality. Numbers compare with a relative-epsilon test;
//! strings and raw payloads compare bytewise; arrays require equal
//! length and order; objects compare by lookup in both directions,
//! which is O(n²) but — per the contract this implements — accepted.

use crate::lookup::object_get;
use crate::node::NodeRef;

/// `|a - b| <= epsilon * max(|a|, |b|)`, using `f64::EPSILON`.
fn numbers_approx_equal(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs());
    (a - b).abs() <= f64::EPSILON * scale
}

pub fn equals(a: NodeRef, b: NodeRef, case_insensitive_keys: bool) -> bool {
    if a.kind() != b.kind() {
        return false;
    }
    match a.kind() {
        crate::kind::NodeKind::Invalid | crate::kind::NodeKind::Null | crate::kind::NodeKind::True | crate::kind::NodeKind::False => true,
        crate::kind::NodeKind::Number => numbers_approx_equal(a.as_f64().unwrap(), b.as_f64().unwrap()),
        crate::kind::NodeKind::String | crate::kind::NodeKind::Raw => a.as_bytes() == b.as_bytes(),
        crate::kind::NodeKind::Array => arrays_equal(a, b, case_insensitive_keys),
        crate::kind::NodeKind::Object => objects_equal(a, b, case_insensitive_keys),
    }
}

fn arrays_equal(a: NodeRef, b: NodeRef, case_insensitive_keys: bool) -> bool {
    let mut x = a.first_child();
    let mut y = b.first_child();
    loop {
        match (x, y) {
            (None, None) => return true,
            (Some(xn), Some(yn)) => {
                if !equals(xn, yn, case_insensitive_keys) {
                    return false;
                }
                x = xn.next_sibling();
                y = yn.next_sibling();
            }
            _ => return false,
        }
    }
}

fn objects_equal(a: NodeRef, b: NodeRef, case_insensitive_keys: bool) -> bool {
    if crate::lookup::array_size(a) != crate::lookup::array_size(b) {
        return false;
    }
    lookup_each_in(a, b, case_insensitive_keys) && lookup_each_in(b, a, case_insensitive_keys)
}

/// For every child of `from`, look its key up in `to` and require an
/// equal value. One direction alone would miss a key present only in
/// `to` when `from` has a same-sized but different key set: duplicate
/// keys are permitted on parse and make that reachable, so both
/// directions are required.
fn lookup_each_in(from: NodeRef, to: NodeRef, case_insensitive_keys: bool) -> bool {
    let mut child = from.first_child();
    while let Some(c) = child {
        let Some(key) = c.key_bytes() else { return false };
        let Some(other) = object_get(to, &key, case_insensitive_keys) else {
            return false;
        };
        if !equals(c, other, case_insensitive_keys) {
            return false;
        }
        child = c.next_sibling();
    }
    true
}
