//! Deep/shallow duplication, depth-bounded to prevent stack exhaustion
//! on adversarially nested input — the same bound the parser applies.

use std::sync::Arc;

use alloc_policy::Hooks;

use crate::error::Error;
use crate::kind::NodeKind;
use crate::mutate;
use crate::node::{NodeRef, alloc_node};
use crate::string_payload::StringPayload;

/// Deep- or shallow-copy `source`. A deep copy always owns its payload
/// and children (the reference flag is cleared on every copy, even if
/// `source` itself was a reference); a shallow copy duplicates only the
/// node itself, with an empty child list for containers.
pub fn duplicate(source: NodeRef, deep: bool, depth_limit: usize, hooks: Arc<dyn Hooks>) -> Result<NodeRef, Error> {
    duplicate_at_depth(source, deep, 0, depth_limit, hooks)
}

fn duplicate_at_depth(source: NodeRef, deep: bool, depth: usize, depth_limit: usize, hooks: Arc<dyn Hooks>) -> Result<NodeRef, Error> {
    if depth > depth_limit {
        return Err(Error::Depth);
    }

    let string = match source.string_payload().as_ref() {
        Some(payload) => Some(StringPayload::owned_from_slice(payload.as_bytes(), hooks.clone()).ok_or(Error::Allocation)?),
        None => None,
    };
    let copy = alloc_node(hooks.clone(), source.kind(), crate::flags::NodeFlags::NONE, source_number(source), string, None)
        .ok_or(Error::Allocation)?;

    if deep && source.kind().is_container() {
        let mut child = source.first_child();
        while let Some(c) = child {
            let child_copy = match duplicate_at_depth(c, deep, depth + 1, depth_limit, hooks.clone()) {
                Ok(child_copy) => child_copy,
                Err(err) => {
                    mutate::delete(copy);
                    return Err(err);
                }
            };
            if let Some(key) = c.key_bytes() {
                let key_payload = match StringPayload::owned_from_slice(&key, hooks.clone()) {
                    Some(payload) => payload,
                    None => {
                        mutate::delete(child_copy);
                        mutate::delete(copy);
                        return Err(Error::Allocation);
                    }
                };
                child_copy.set_key_payload(Some(key_payload));
            }
            mutate::append_child(copy, child_copy).expect("freshly duplicated parent/child cannot alias");
            child = c.next_sibling();
        }
    }

    Ok(copy)
}

fn source_number(source: NodeRef) -> crate::number::NumberValue {
    if source.kind() == NodeKind::Number {
        crate::number::NumberValue::from_f64(source.as_f64().unwrap_or(0.0))
    } else {
        crate::number::NumberValue::from_f64(0.0)
    }
}
