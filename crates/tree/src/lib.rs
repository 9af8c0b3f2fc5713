//! # Tree model
//!
//! The node type, its sibling/child links, ownership tags, and every
//! construction/mutation/inspection primitive over it. This crate has
//! no opinion on JSON syntax — `parser` and `printer` build on top of
//! it — only on what a well-formed tree looks like and how it may be
//! changed without breaking the sibling-list invariant.

mod compare;
mod ctor;
mod duplicate;
mod error;
mod flags;
mod kind;
mod lookup;
mod mutate;
mod node;
mod number;
mod string_payload;

pub use compare::equals;
pub use ctor::{
    array, array_reference, boolean, create_reference, invalid, null, number as number_node, object, object_reference, raw_owned, raw_reference,
    string_owned, string_reference,
};
pub use duplicate::duplicate;
pub use error::{ApiContractError, Error};
pub use flags::NodeFlags;
pub use kind::NodeKind;
pub use lookup::{array_size, nth_child, object_get};
pub use mutate::{
    append_child, append_child_reference, append_object_item, append_object_item_reference, delete, delete_from_array, delete_from_object, detach,
    detach_by_index, detach_by_key, insert_at_index, replace, replace_by_index, replace_by_key, set_number_value, set_string_value,
};
pub use node::NodeRef;
pub use number::NumberValue;
pub use string_payload::StringPayload;

/// Compile-time cap on nesting depth during parse and duplicate,
/// preventing stack exhaustion on adversarial input. Overridable per
/// call via the parser's and `duplicate`'s options rather than a
/// process-wide setting, matching the teacher's preference for
/// constructor options over environment/global configuration.
pub const DEFAULT_DEPTH_LIMIT: usize = 1000;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc_policy::SystemHooks;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn hooks() -> Arc<dyn alloc_policy::Hooks> {
        Arc::new(SystemHooks)
    }

    /// Walk a container's children front-to-back and confirm every
    /// sibling-list invariant from §3/§8 holds.
    fn assert_sibling_invariant(parent: NodeRef) {
        let Some(head) = parent.first_child() else { return };
        let tail = head.prev().expect("head.prev is always set");
        assert_eq!(tail.next_sibling(), None, "tail.next must be null");

        let mut node = head;
        loop {
            if let Some(p) = node.prev() {
                if p != node {
                    assert_eq!(p.next_sibling(), Some(node), "prev.next must point back to node");
                }
            }
            match node.next_sibling() {
                Some(next) => {
                    assert_eq!(next.prev(), Some(node), "next.prev must point back to node");
                    node = next;
                }
                None => break,
            }
        }
        assert_eq!(node, tail, "walking next from head must reach the tail");
    }

    #[test]
    fn append_three_children_preserves_invariant() {
        let array = array(hooks()).unwrap();
        for i in 0..3 {
            let item = number_node(i as f64, hooks()).unwrap();
            append_child(array, item).unwrap();
        }
        assert_eq!(array_size(array), 3);
        assert_sibling_invariant(array);
        delete(array);
    }

    #[test]
    fn detach_middle_preserves_invariant() {
        let arr = array(hooks()).unwrap();
        let items: Vec<_> = (0..4).map(|i| number_node(i as f64, hooks()).unwrap()).collect();
        for item in &items {
            append_child(arr, *item).unwrap();
        }
        let removed = detach(arr, items[1]);
        assert_eq!(removed.as_f64(), Some(1.0));
        assert_eq!(array_size(arr), 3);
        assert_sibling_invariant(arr);
        delete(removed);
        delete(arr);
    }

    #[test]
    fn detach_head_and_tail_preserve_invariant() {
        let arr = array(hooks()).unwrap();
        let items: Vec<_> = (0..3).map(|i| number_node(i as f64, hooks()).unwrap()).collect();
        for item in &items {
            append_child(arr, *item).unwrap();
        }
        let head = detach_by_index(arr, 0).unwrap();
        delete(head);
        assert_sibling_invariant(arr);
        let tail = detach_by_index(arr, array_size(arr) - 1).unwrap();
        delete(tail);
        assert_sibling_invariant(arr);
        delete(arr);
    }

    #[test]
    fn insert_at_index_splices_correctly() {
        let arr = array(hooks()).unwrap();
        append_child(arr, number_node(0.0, hooks()).unwrap()).unwrap();
        append_child(arr, number_node(2.0, hooks()).unwrap()).unwrap();
        let middle = number_node(1.0, hooks()).unwrap();
        insert_at_index(arr, 1, middle).unwrap();
        assert_sibling_invariant(arr);
        let values: Vec<_> = {
            let mut v = vec![];
            let mut child = arr.first_child();
            while let Some(c) = child {
                v.push(c.as_f64().unwrap());
                child = c.next_sibling();
            }
            v
        };
        assert_eq!(values, vec![0.0, 1.0, 2.0]);
        delete(arr);
    }

    #[test]
    fn self_insertion_is_refused() {
        let arr = array(hooks()).unwrap();
        assert!(matches!(append_child(arr, arr), Err(Error::ApiContract(ApiContractError::SelfInsertion))));
        delete(arr);
    }

    #[test]
    fn reference_delete_does_not_free_children() {
        let source = array(hooks()).unwrap();
        let child = string_owned(b"kept", hooks()).unwrap();
        append_child(source, child).unwrap();

        let reference = array_reference(source, hooks()).unwrap();
        delete(reference);

        // The original tree is untouched: its child is still readable.
        assert_eq!(array_size(source), 1);
        assert_eq!(source.first_child().unwrap().as_str().as_deref(), Some("kept"));
        delete(source);
    }

    #[test]
    fn deep_duplicate_is_independent_and_owns_payload() {
        let obj = object(hooks()).unwrap();
        let value = string_owned(b"v", hooks()).unwrap();
        append_object_item(obj, b"k", value, false, hooks()).unwrap();

        let copy = duplicate(obj, true, DEFAULT_DEPTH_LIMIT, hooks()).unwrap();
        assert!(equals(obj, copy, false));
        assert!(!copy.first_child().unwrap().is_reference());

        delete(obj);
        // Copy remains fully readable after the source is gone.
        assert_eq!(copy.first_child().unwrap().as_str().as_deref(), Some("v"));
        delete(copy);
    }

    #[test]
    fn shallow_duplicate_has_no_children() {
        let arr = array(hooks()).unwrap();
        append_child(arr, null(hooks()).unwrap()).unwrap();
        let copy = duplicate(arr, false, DEFAULT_DEPTH_LIMIT, hooks()).unwrap();
        assert_eq!(array_size(copy), 0);
        delete(arr);
        delete(copy);
    }

    #[test]
    fn compare_numbers_uses_relative_epsilon() {
        let a = number_node(1.0, hooks()).unwrap();
        let b = number_node(1.0 + f64::EPSILON / 2.0, hooks()).unwrap();
        assert!(equals(a, b, false));
        delete(a);
        delete(b);
    }

    #[test]
    fn object_compare_is_order_independent_by_key() {
        let a = object(hooks()).unwrap();
        append_object_item(a, b"x", boolean(true, hooks()).unwrap(), false, hooks()).unwrap();
        append_object_item(a, b"y", boolean(false, hooks()).unwrap(), false, hooks()).unwrap();

        let b2 = object(hooks()).unwrap();
        append_object_item(b2, b"y", boolean(false, hooks()).unwrap(), false, hooks()).unwrap();
        append_object_item(b2, b"x", boolean(true, hooks()).unwrap(), false, hooks()).unwrap();

        assert!(equals(a, b2, false));
        delete(a);
        delete(b2);
    }

    #[test]
    fn object_compare_rejects_a_key_present_only_on_one_side_despite_equal_size() {
        // Same size, and a one-directional lookup from `a` would be
        // satisfied twice over by `b`'s duplicate "x" key, masking the
        // fact that `b` has no "y" and an extra "x" instead.
        let a = object(hooks()).unwrap();
        append_object_item(a, b"x", number_node(1.0, hooks()).unwrap(), false, hooks()).unwrap();
        append_object_item(a, b"y", number_node(1.0, hooks()).unwrap(), false, hooks()).unwrap();

        let b2 = object(hooks()).unwrap();
        append_object_item(b2, b"x", number_node(1.0, hooks()).unwrap(), false, hooks()).unwrap();
        append_object_item(b2, b"x", number_node(1.0, hooks()).unwrap(), false, hooks()).unwrap();

        assert!(!equals(a, b2, false));
        delete(a);
        delete(b2);
    }

    #[test]
    fn replace_identity_is_a_no_op() {
        let arr = array(hooks()).unwrap();
        let item = null(hooks()).unwrap();
        append_child(arr, item).unwrap();
        assert!(replace(arr, item, item, hooks()).is_ok());
        delete(arr);
    }
}
