//! # The node type and its sibling-list plumbing
//!
//! A node is a heap block allocated through the active [`Hooks`], holding
//! its own kind, flags, payload, and links to its parent's sibling list.
//! There is deliberately no parent pointer (see the reference design
//! notes): every mutation primitive that needs the parent — detach,
//! insert, replace — takes it as an explicit argument, exactly as the
//! library this crate reimplements does.
//!
//! Nodes are freed one at a time through [`crate::delete`], never
//! through `Drop` — this is not an oversight. The tree is a mutable
//! graph of raw pointers (`NodeRef` is `Copy`), so there is no single
//! Rust-checked owner to hang a destructor off of; the caller is
//! responsible for calling `delete` on any root it owns, exactly as a
//! caller of the reference C library is responsible for calling its
//! delete entry point. Forgetting to do so leaks memory rather than
//! corrupting it.

use std::alloc::Layout;
use std::cell::{Cell, RefCell};
use std::ptr::{self, NonNull};
use std::sync::Arc;

use alloc_policy::Hooks;

use crate::flags::NodeFlags;
use crate::kind::NodeKind;
use crate::number::NumberValue;
use crate::string_payload::StringPayload;

pub(crate) struct NodeData {
    kind: Cell<NodeKind>,
    flags: Cell<NodeFlags>,
    number: Cell<NumberValue>,
    string: RefCell<Option<StringPayload>>,
    key: RefCell<Option<StringPayload>>,
    child: Cell<Option<NodeRef>>,
    prev: Cell<Option<NodeRef>>,
    next: Cell<Option<NodeRef>>,
    hooks: Arc<dyn Hooks>,
}

/// A handle to a node. `Copy` because the tree itself is a graph of raw
/// pointers, not a Rust-owned value tree; see the module doc comment.
#[derive(Clone, Copy)]
pub struct NodeRef(NonNull<NodeData>);

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for NodeRef {}

impl NodeRef {
    fn data(&self) -> &NodeData {
        // Safety: callers never retain a `NodeRef` past the node's
        // `delete`; see the module doc comment for the accepted
        // faithful-to-original tradeoff this implies.
        unsafe { self.0.as_ref() }
    }

    pub(crate) fn hooks(&self) -> Arc<dyn Hooks> {
        self.data().hooks.clone()
    }

    pub fn kind(&self) -> NodeKind {
        self.data().kind.get()
    }

    pub(crate) fn set_kind(&self, kind: NodeKind) {
        self.data().kind.set(kind);
    }

    pub fn flags(&self) -> NodeFlags {
        self.data().flags.get()
    }

    pub(crate) fn set_flags(&self, flags: NodeFlags) {
        self.data().flags.set(flags);
    }

    pub fn is_reference(&self) -> bool {
        self.flags().is_reference()
    }

    pub fn string_is_const(&self) -> bool {
        matches!(self.data().key.borrow().as_ref(), Some(StringPayload::Borrowed { .. }))
    }

    pub fn as_f64(&self) -> Option<f64> {
        (self.kind() == NodeKind::Number).then(|| self.data().number.get().as_f64())
    }

    pub fn as_i32(&self) -> Option<i32> {
        (self.kind() == NodeKind::Number).then(|| self.data().number.get().as_i32())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.kind() {
            NodeKind::True => Some(true),
            NodeKind::False => Some(false),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<Vec<u8>> {
        match self.kind() {
            NodeKind::String | NodeKind::Raw => Some(self.data().string.borrow().as_ref()?.as_bytes().to_vec()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<String> {
        self.as_bytes().and_then(|b| String::from_utf8(b).ok())
    }

    pub fn key_bytes(&self) -> Option<Vec<u8>> {
        Some(self.data().key.borrow().as_ref()?.as_bytes().to_vec())
    }

    pub fn key_str(&self) -> Option<String> {
        self.key_bytes().and_then(|b| String::from_utf8(b).ok())
    }

    pub(crate) fn set_number(&self, value: NumberValue) {
        self.data().number.set(value);
    }

    pub(crate) fn string_payload(&self) -> std::cell::Ref<'_, Option<StringPayload>> {
        self.data().string.borrow()
    }

    pub(crate) fn set_string_payload(&self, payload: Option<StringPayload>) {
        *self.data().string.borrow_mut() = payload;
    }

    pub(crate) fn set_key_payload(&self, payload: Option<StringPayload>) {
        *self.data().key.borrow_mut() = payload;
    }

    pub fn first_child(&self) -> Option<NodeRef> {
        self.data().child.get()
    }

    pub(crate) fn set_child(&self, child: Option<NodeRef>) {
        self.data().child.set(child);
    }

    pub(crate) fn prev(&self) -> Option<NodeRef> {
        self.data().prev.get()
    }

    pub(crate) fn set_prev(&self, prev: Option<NodeRef>) {
        self.data().prev.set(prev);
    }

    pub fn next_sibling(&self) -> Option<NodeRef> {
        self.data().next.get()
    }

    pub(crate) fn set_next(&self, next: Option<NodeRef>) {
        self.data().next.set(next);
    }

    /// The last child, recovered in O(1) via the tail-in-head trick.
    pub fn last_child(&self) -> Option<NodeRef> {
        self.first_child().and_then(|head| head.prev())
    }

    pub fn is_array(&self) -> bool {
        self.kind() == NodeKind::Array
    }

    pub fn is_object(&self) -> bool {
        self.kind() == NodeKind::Object
    }
}

/// Allocate a node's backing storage through `hooks` and write `data`
/// into it. Internal: callers go through the typed constructors in
/// `ctor.rs`.
pub(crate) fn alloc_node(
    hooks: Arc<dyn Hooks>,
    kind: NodeKind,
    flags: NodeFlags,
    number: NumberValue,
    string: Option<StringPayload>,
    key: Option<StringPayload>,
) -> Option<NodeRef> {
    let layout = Layout::new::<NodeData>();
    let raw = hooks.allocate_aligned(layout.size(), layout.align())?;
    let typed: NonNull<NodeData> = raw.cast();
    unsafe {
        typed.as_ptr().write(NodeData {
            kind: Cell::new(kind),
            flags: Cell::new(flags),
            number: Cell::new(number),
            string: RefCell::new(string),
            key: RefCell::new(key),
            child: Cell::new(None),
            prev: Cell::new(None),
            next: Cell::new(None),
            hooks,
        });
    }
    Some(NodeRef(typed))
}

/// Free a single node's own storage. Does not touch children or
/// payload ownership decisions — callers (see `mutate::delete`) decide
/// what else needs freeing before calling this.
pub(crate) unsafe fn dealloc_node(node: NodeRef) {
    let layout = Layout::new::<NodeData>();
    let hooks = node.hooks();
    unsafe {
        ptr::drop_in_place(node.0.as_ptr());
        hooks.free_aligned(node.0.cast(), layout.size(), layout.align());
    }
}
