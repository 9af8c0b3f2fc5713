//! Constructors: one per [`NodeKind`], matching §4.2 of the contract this
//! crate implements. Each returns `None` only if the active allocator
//! hooks fail (see `alloc_policy::Hooks`); construction itself is
//! infallible otherwise.

use std::sync::Arc;

use alloc_policy::Hooks;

use crate::flags::NodeFlags;
use crate::kind::NodeKind;
use crate::node::{NodeRef, alloc_node};
use crate::number::NumberValue;
use crate::string_payload::StringPayload;

fn simple(hooks: Arc<dyn Hooks>, kind: NodeKind) -> Option<NodeRef> {
    alloc_node(hooks, kind, NodeFlags::NONE, NumberValue::from_f64(0.0), None, None)
}

pub fn null(hooks: Arc<dyn Hooks>) -> Option<NodeRef> {
    simple(hooks, NodeKind::Null)
}

pub fn invalid(hooks: Arc<dyn Hooks>) -> Option<NodeRef> {
    simple(hooks, NodeKind::Invalid)
}

pub fn boolean(value: bool, hooks: Arc<dyn Hooks>) -> Option<NodeRef> {
    simple(hooks, if value { NodeKind::True } else { NodeKind::False })
}

pub fn number(value: f64, hooks: Arc<dyn Hooks>) -> Option<NodeRef> {
    alloc_node(hooks, NodeKind::Number, NodeFlags::NONE, NumberValue::from_f64(value), None, None)
}

pub fn string_owned(bytes: &[u8], hooks: Arc<dyn Hooks>) -> Option<NodeRef> {
    let payload = StringPayload::owned_from_slice(bytes, hooks.clone())?;
    alloc_node(hooks, NodeKind::String, NodeFlags::NONE, NumberValue::from_f64(0.0), Some(payload), None)
}

/// Borrow `bytes` rather than copying it; the caller must keep it alive
/// for the node's lifetime.
pub fn string_reference(bytes: &[u8], hooks: Arc<dyn Hooks>) -> Option<NodeRef> {
    let payload = StringPayload::borrowed(bytes);
    alloc_node(hooks, NodeKind::String, NodeFlags::IS_REFERENCE, NumberValue::from_f64(0.0), Some(payload), None)
}

pub fn raw_owned(bytes: &[u8], hooks: Arc<dyn Hooks>) -> Option<NodeRef> {
    let payload = StringPayload::owned_from_slice(bytes, hooks.clone())?;
    alloc_node(hooks, NodeKind::Raw, NodeFlags::NONE, NumberValue::from_f64(0.0), Some(payload), None)
}

pub fn raw_reference(bytes: &[u8], hooks: Arc<dyn Hooks>) -> Option<NodeRef> {
    let payload = StringPayload::borrowed(bytes);
    alloc_node(hooks, NodeKind::Raw, NodeFlags::IS_REFERENCE, NumberValue::from_f64(0.0), Some(payload), None)
}

pub fn array(hooks: Arc<dyn Hooks>) -> Option<NodeRef> {
    simple(hooks, NodeKind::Array)
}

pub fn object(hooks: Arc<dyn Hooks>) -> Option<NodeRef> {
    simple(hooks, NodeKind::Object)
}

/// Shallow reference to an existing container or scalar: shares `source`'s
/// number/string payload and (for containers) its child-list pointer,
/// flagged `IsReference` so deletion never descends into borrowed data.
/// Backs both the `*Reference` constructors and `append_reference_*`.
pub fn create_reference(source: NodeRef, hooks: Arc<dyn Hooks>) -> Option<NodeRef> {
    let string = source.string_payload().as_ref().map(|p| StringPayload::borrowed(p.as_bytes()));
    let reference = alloc_node(
        hooks,
        source.kind(),
        source.flags().union(NodeFlags::IS_REFERENCE),
        NumberValue::from_f64(source.as_f64().unwrap_or(0.0)),
        string,
        None,
    )?;
    if source.kind().is_container() {
        reference.set_child(source.first_child());
    }
    Some(reference)
}

pub fn array_reference(source: NodeRef, hooks: Arc<dyn Hooks>) -> Option<NodeRef> {
    create_reference(source, hooks)
}

pub fn object_reference(source: NodeRef, hooks: Arc<dyn Hooks>) -> Option<NodeRef> {
    create_reference(source, hooks)
}
