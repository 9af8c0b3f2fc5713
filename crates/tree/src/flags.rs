/// Ownership flags orthogonal to [`crate::NodeKind`].
///
/// Hand-rolled rather than a `bitflags` dependency: two bits, never
/// serialized, and the set is closed — a dependency would buy nothing a
/// `const fn` pair doesn't already give.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeFlags(u8);

impl NodeFlags {
    /// The node does not own its payload/children; deletion stops here
    /// without freeing payload or descending.
    pub const IS_REFERENCE: NodeFlags = NodeFlags(1 << 0);

    pub const NONE: NodeFlags = NodeFlags(0);

    // `StringIsConst` from the reference design is not stored as a bit
    // here: a node's key is already a `StringPayload::Owned`/`Borrowed`
    // variant (see `string_payload.rs`), and that variant *is* the
    // const-ness. A second bit tracking the same fact would just be a
    // second source of truth; `NodeRef::string_is_const` answers the same
    // question by inspecting the key variant instead.

    pub const fn contains(self, other: NodeFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: NodeFlags) -> NodeFlags {
        NodeFlags(self.0 | other.0)
    }

    pub fn set(&mut self, other: NodeFlags, value: bool) {
        if value {
            self.0 |= other.0;
        } else {
            self.0 &= !other.0;
        }
    }

    pub fn is_reference(self) -> bool {
        self.contains(Self::IS_REFERENCE)
    }
}

impl std::ops::BitOr for NodeFlags {
    type Output = NodeFlags;
    fn bitor(self, rhs: NodeFlags) -> NodeFlags {
        self.union(rhs)
    }
}
