//! Sibling-list mutation: append, detach, delete, insert-at-index,
//! replace. Every primitive here preserves the invariant from §3: for a
//! parent's children, `head.prev` is the tail, and for every interior
//! node `N`, `N.prev.next == N` and `N.next.prev == N`.

use std::sync::Arc;

use alloc_policy::Hooks;

use crate::ctor;
use crate::error::{ApiContractError, Error};
use crate::kind::NodeKind;
use crate::node::NodeRef;
use crate::string_payload::StringPayload;

fn require_container(parent: NodeRef) -> Result<(), Error> {
    if parent.kind().is_container() {
        Ok(())
    } else {
        Err(Error::ApiContract(ApiContractError::NotAContainer))
    }
}

/// Append `item` as the parent's last child (arrays, or objects with no
/// key). O(1) via the tail-in-head trick.
pub fn append_child(parent: NodeRef, item: NodeRef) -> Result<(), Error> {
    require_container(parent)?;
    if parent == item {
        return Err(Error::ApiContract(ApiContractError::SelfInsertion));
    }
    match parent.first_child() {
        None => {
            item.set_prev(Some(item));
            item.set_next(None);
            parent.set_child(Some(item));
        }
        Some(head) => {
            let tail = head.prev().expect("head.prev must always point at the tail");
            tail.set_next(Some(item));
            item.set_prev(Some(tail));
            item.set_next(None);
            head.set_prev(Some(item));
        }
    }
    Ok(())
}

/// Append `item` to an object under `key`. `const_key` borrows `key`
/// instead of copying it (`StringIsConst`).
pub fn append_object_item(parent: NodeRef, key: &[u8], item: NodeRef, const_key: bool, hooks: Arc<dyn Hooks>) -> Result<(), Error> {
    require_container(parent)?;
    let payload = if const_key {
        StringPayload::borrowed(key)
    } else {
        StringPayload::owned_from_slice(key, hooks).ok_or(Error::Allocation)?
    };
    item.set_key_payload(Some(payload));
    append_child(parent, item)
}

/// Append a reference to `item` (not `item` itself) so `item`'s lifetime
/// stays with the caller.
pub fn append_child_reference(parent: NodeRef, item: NodeRef, hooks: Arc<dyn Hooks>) -> Result<(), Error> {
    let reference = ctor::create_reference(item, hooks).ok_or(Error::Allocation)?;
    append_child(parent, reference)
}

pub fn append_object_item_reference(parent: NodeRef, key: &[u8], item: NodeRef, const_key: bool, hooks: Arc<dyn Hooks>) -> Result<(), Error> {
    let reference = ctor::create_reference(item, hooks.clone()).ok_or(Error::Allocation)?;
    append_object_item(parent, key, reference, const_key, hooks)
}

/// Splice `item` in before the child currently at `index`; `index ==
/// size` appends.
pub fn insert_at_index(parent: NodeRef, index: usize, item: NodeRef) -> Result<(), Error> {
    require_container(parent)?;
    if parent == item {
        return Err(Error::ApiContract(ApiContractError::SelfInsertion));
    }
    let Some(at) = crate::lookup::nth_child(parent, index) else {
        return append_child(parent, item);
    };
    let is_head = parent.first_child() == Some(at);
    if is_head {
        // `at` is the head, so `at.prev()` holds the tail-in-head pointer;
        // the new head inherits it.
        item.set_prev(at.prev());
        parent.set_child(Some(item));
    } else {
        let prev = at.prev().expect("non-head node always has a prev");
        prev.set_next(Some(item));
        item.set_prev(Some(prev));
    }
    item.set_next(Some(at));
    at.set_prev(Some(item));
    Ok(())
}

/// Remove `item` from `parent`'s children, repairing the sibling list.
/// The returned node has null sibling links. Caller must guarantee
/// `item` is actually a child of `parent` (same contract as the
/// reference library: unchecked, O(1)).
pub fn detach(parent: NodeRef, item: NodeRef) -> NodeRef {
    let is_head = parent.first_child() == Some(item);
    let prev = item.prev();
    let next = item.next_sibling();

    if is_head {
        parent.set_child(next);
        if let Some(new_head) = next {
            new_head.set_prev(prev);
        }
    } else {
        let real_prev = prev.expect("non-head node always has a prev");
        real_prev.set_next(next);
        match next {
            Some(n) => n.set_prev(Some(real_prev)),
            None => {
                if let Some(head) = parent.first_child() {
                    head.set_prev(Some(real_prev));
                }
            }
        }
    }

    item.set_prev(None);
    item.set_next(None);
    item
}

pub fn detach_by_index(parent: NodeRef, index: usize) -> Option<NodeRef> {
    let item = crate::lookup::nth_child(parent, index)?;
    Some(detach(parent, item))
}

pub fn detach_by_key(parent: NodeRef, key: &[u8], case_insensitive: bool) -> Option<NodeRef> {
    let item = crate::lookup::object_get(parent, key, case_insensitive)?;
    Some(detach(parent, item))
}

/// Detach + recursive free. The single deletion entry point: walks
/// siblings iteratively via an explicit worklist (never the node's own
/// recursion stack) and recurses into children only when the node owns
/// them.
pub fn delete(node: NodeRef) {
    let mut worklist = vec![node];
    while let Some(n) = worklist.pop() {
        if !n.is_reference() && n.kind().is_container() {
            let mut child = n.first_child();
            while let Some(c) = child {
                let next = c.next_sibling();
                worklist.push(c);
                child = next;
            }
        }
        unsafe { crate::node::dealloc_node(n) };
    }
}

pub fn delete_from_array(parent: NodeRef, index: usize) -> Option<()> {
    let item = detach_by_index(parent, index)?;
    delete(item);
    Some(())
}

pub fn delete_from_object(parent: NodeRef, key: &[u8], case_insensitive: bool) -> Option<()> {
    let item = detach_by_key(parent, key, case_insensitive)?;
    delete(item);
    Some(())
}

/// Substitute `old` (already a child of `parent`) with `new`, freeing
/// `old`. Identity replacement (`old == new`) is a no-op success. When
/// `parent` is an object, `new` takes over `old`'s key (copied from
/// `key_override` if given, else `old`'s own key).
pub fn replace(parent: NodeRef, old: NodeRef, new: NodeRef, hooks: Arc<dyn Hooks>) -> Result<(), Error> {
    if old == new {
        return Ok(());
    }
    require_container(parent)?;
    if parent.kind() == NodeKind::Object {
        if let Some(key) = old.key_bytes() {
            let payload = StringPayload::owned_from_slice(&key, hooks).ok_or(Error::Allocation)?;
            new.set_key_payload(Some(payload));
        }
    }
    let prev = old.prev();
    let next = old.next_sibling();
    let is_head = parent.first_child() == Some(old);

    new.set_prev(prev);
    new.set_next(next);
    if is_head {
        parent.set_child(Some(new));
        if let Some(n) = next {
            n.set_prev(Some(new));
        } else {
            // was the only child: new.prev must point at itself.
            new.set_prev(Some(new));
        }
    } else {
        if let Some(p) = prev {
            p.set_next(Some(new));
        }
        match next {
            Some(n) => n.set_prev(Some(new)),
            None => {
                if let Some(head) = parent.first_child() {
                    head.set_prev(Some(new));
                }
            }
        }
    }

    old.set_prev(None);
    old.set_next(None);
    delete(old);
    Ok(())
}

pub fn replace_by_index(parent: NodeRef, index: usize, new: NodeRef, hooks: Arc<dyn Hooks>) -> Result<(), Error> {
    let old = crate::lookup::nth_child(parent, index).ok_or(Error::ApiContract(ApiContractError::IndexOutOfRange))?;
    replace(parent, old, new, hooks)
}

pub fn replace_by_key(parent: NodeRef, key: &[u8], new: NodeRef, case_insensitive: bool, hooks: Arc<dyn Hooks>) -> Result<(), Error> {
    let old = crate::lookup::object_get(parent, key, case_insensitive).ok_or(Error::ApiContract(ApiContractError::IndexOutOfRange))?;
    replace(parent, old, new, hooks)
}

/// Overwrite a String/Raw node's payload in place. Rejects reference
/// nodes: there is no owned buffer to replace, and silently reassigning
/// the borrow would violate the caller's lifetime contract on the
/// original reference.
pub fn set_string_value(node: NodeRef, bytes: &[u8], hooks: Arc<dyn Hooks>) -> Result<(), Error> {
    if node.is_reference() {
        return Err(Error::ApiContract(ApiContractError::ValueIsReference));
    }
    let payload = StringPayload::owned_from_slice(bytes, hooks).ok_or(Error::Allocation)?;
    node.set_string_payload(Some(payload));
    Ok(())
}

pub fn set_number_value(node: NodeRef, value: f64) {
    node.set_number(crate::number::NumberValue::from_f64(value));
}
