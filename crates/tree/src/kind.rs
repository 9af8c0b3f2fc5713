/// The primary discriminator of a [`crate::Node`].
///
/// `Raw` is a serializer-only kind: its string payload is emitted
/// verbatim by the printer, bypassing escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NodeKind {
    Invalid = 0,
    False = 1,
    True = 2,
    Null = 3,
    Number = 4,
    String = 5,
    Array = 6,
    Object = 7,
    Raw = 8,
}

impl NodeKind {
    pub fn is_container(self) -> bool {
        matches!(self, NodeKind::Array | NodeKind::Object)
    }

    pub fn is_bool(self) -> bool {
        matches!(self, NodeKind::True | NodeKind::False)
    }
}
