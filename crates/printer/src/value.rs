//! Recursive value dispatch over the output buffer. `depth` drives
//! indentation; only the object printer increments it — array nesting
//! doesn't indent an extra level of its own, exactly like the braces
//! it's nested under.

use tree::{NodeKind, NodeRef};

use crate::buffer::PrintBuffer;
use crate::error::Error;
use crate::{number, string};

pub(crate) fn value(buf: &mut PrintBuffer, node: NodeRef, pretty: bool, depth: usize) -> Result<(), Error> {
    match node.kind() {
        NodeKind::Null | NodeKind::Invalid => buf.push_bytes(b"null"),
        NodeKind::True => buf.push_bytes(b"true"),
        NodeKind::False => buf.push_bytes(b"false"),
        NodeKind::Number => {
            let text = number::format(node.as_f64().unwrap(), node.as_i32().unwrap());
            buf.push_bytes(text.as_bytes())
        }
        NodeKind::Raw => buf.push_bytes(&node.as_bytes().unwrap_or_default()),
        NodeKind::String => print_string(buf, &node.as_bytes().unwrap_or_default()),
        NodeKind::Array => array(buf, node, pretty, depth),
        NodeKind::Object => object(buf, node, pretty, depth),
    }
}

fn print_string(buf: &mut PrintBuffer, bytes: &[u8]) -> Result<(), Error> {
    if !string::needs_escaping(bytes) {
        buf.push_byte(b'"')?;
        buf.push_bytes(bytes)?;
        return buf.push_byte(b'"');
    }
    let mut escaped = Vec::with_capacity(bytes.len() + 2);
    string::write_escaped(bytes, &mut escaped);
    buf.push_bytes(&escaped)
}

fn array(buf: &mut PrintBuffer, node: NodeRef, pretty: bool, depth: usize) -> Result<(), Error> {
    buf.push_byte(b'[')?;
    let mut child = node.first_child();
    while let Some(c) = child {
        value(buf, c, pretty, depth)?;
        child = c.next_sibling();
        if child.is_some() {
            buf.push_byte(b',')?;
            if pretty {
                buf.push_byte(b' ')?;
            }
        }
    }
    buf.push_byte(b']')
}

fn object(buf: &mut PrintBuffer, node: NodeRef, pretty: bool, depth: usize) -> Result<(), Error> {
    buf.push_byte(b'{')?;
    if pretty {
        buf.push_byte(b'\n')?;
    }
    let inner_depth = depth + 1;
    let mut child = node.first_child();
    while let Some(c) = child {
        if pretty {
            buf.push_tabs(inner_depth)?;
        }
        print_string(buf, &c.key_bytes().unwrap_or_default())?;
        buf.push_byte(b':')?;
        if pretty {
            buf.push_byte(b'\t')?;
        }
        value(buf, c, pretty, inner_depth)?;
        child = c.next_sibling();
        if child.is_some() {
            buf.push_byte(b',')?;
        }
        if pretty {
            buf.push_byte(b'\n')?;
        }
    }
    if pretty {
        buf.push_tabs(depth)?;
    }
    buf.push_byte(b'}')
}
