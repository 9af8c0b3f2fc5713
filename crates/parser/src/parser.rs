//! Recursive-descent value dispatch. One function per production; each
//! assumes the cursor sits exactly at the first byte of its production
//! and leaves it just past the last byte consumed.

use std::sync::Arc;

use alloc_policy::Hooks;
use tree::NodeRef;

use crate::cursor::Cursor;
use crate::error::{Error, ErrorKind};
use crate::{number, string};

pub(crate) struct State<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) depth: usize,
    pub(crate) depth_limit: usize,
    pub(crate) hooks: Arc<dyn Hooks>,
}

fn is_whitespace(b: u8) -> bool {
    b <= 0x20
}

pub(crate) fn skip_whitespace(state: &mut State<'_>) {
    state.cursor.skip_while(is_whitespace);
}

fn alloc_fail(offset: usize) -> Error {
    Error::at(ErrorKind::Allocation, offset)
}

fn expect_literal(state: &mut State<'_>, literal: &[u8]) -> Result<(), Error> {
    let offset = state.cursor.offset();
    for (i, expected) in literal.iter().enumerate() {
        if state.cursor.peek_at(i) != Some(*expected) {
            return Err(Error::at(ErrorKind::Syntax, offset));
        }
    }
    state.cursor.advance_by(literal.len());
    Ok(())
}

pub(crate) fn value(state: &mut State<'_>) -> Result<NodeRef, Error> {
    let offset = state.cursor.offset();
    match state.cursor.peek() {
        Some(b'n') => {
            expect_literal(state, b"null")?;
            tree::null(state.hooks.clone()).ok_or_else(|| alloc_fail(offset))
        }
        Some(b'f') => {
            expect_literal(state, b"false")?;
            tree::boolean(false, state.hooks.clone()).ok_or_else(|| alloc_fail(offset))
        }
        Some(b't') => {
            expect_literal(state, b"true")?;
            tree::boolean(true, state.hooks.clone()).ok_or_else(|| alloc_fail(offset))
        }
        Some(b'"') => {
            let bytes = string::parse(&mut state.cursor)?;
            tree::string_owned(&bytes, state.hooks.clone()).ok_or_else(|| alloc_fail(offset))
        }
        Some(b'-') | Some(b'0'..=b'9') => {
            let parsed = number::scan(&mut state.cursor)?;
            tree::number_node(parsed, state.hooks.clone()).ok_or_else(|| alloc_fail(offset))
        }
        Some(b'[') => array(state),
        Some(b'{') => object(state),
        Some(_) => Err(Error::at(ErrorKind::Syntax, offset)),
        None => Err(Error::at(ErrorKind::Bounds, offset)),
    }
}

fn enter_container(state: &mut State<'_>, open_offset: usize) -> Result<(), Error> {
    state.depth += 1;
    if state.depth > state.depth_limit {
        return Err(Error::at(ErrorKind::Depth, open_offset));
    }
    Ok(())
}

fn array(state: &mut State<'_>) -> Result<NodeRef, Error> {
    let open_offset = state.cursor.offset();
    state.cursor.bump();
    enter_container(state, open_offset)?;

    let node = tree::array(state.hooks.clone()).ok_or_else(|| alloc_fail(open_offset))?;

    skip_whitespace(state);
    if state.cursor.peek() == Some(b']') {
        state.cursor.bump();
        state.depth -= 1;
        return Ok(node);
    }

    loop {
        skip_whitespace(state);
        let item = match value(state) {
            Ok(item) => item,
            Err(err) => {
                tree::delete(node);
                return Err(err);
            }
        };
        tree::append_child(node, item).expect("freshly allocated array can never be self or non-container");
        skip_whitespace(state);
        match state.cursor.peek() {
            Some(b',') => {
                state.cursor.bump();
            }
            Some(b']') => {
                state.cursor.bump();
                state.depth -= 1;
                return Ok(node);
            }
            Some(_) => {
                tree::delete(node);
                return Err(Error::at(ErrorKind::Syntax, state.cursor.offset()));
            }
            None => {
                tree::delete(node);
                return Err(Error::at(ErrorKind::Bounds, state.cursor.offset()));
            }
        }
    }
}

fn object(state: &mut State<'_>) -> Result<NodeRef, Error> {
    let open_offset = state.cursor.offset();
    state.cursor.bump();
    enter_container(state, open_offset)?;

    let node = tree::object(state.hooks.clone()).ok_or_else(|| alloc_fail(open_offset))?;

    skip_whitespace(state);
    if state.cursor.peek() == Some(b'}') {
        state.cursor.bump();
        state.depth -= 1;
        return Ok(node);
    }

    loop {
        skip_whitespace(state);
        if state.cursor.peek() != Some(b'"') {
            tree::delete(node);
            return Err(Error::at(ErrorKind::Syntax, state.cursor.offset()));
        }
        let key = match string::parse(&mut state.cursor) {
            Ok(key) => key,
            Err(err) => {
                tree::delete(node);
                return Err(err);
            }
        };
        skip_whitespace(state);
        if state.cursor.peek() != Some(b':') {
            tree::delete(node);
            return Err(Error::at(ErrorKind::Syntax, state.cursor.offset()));
        }
        state.cursor.bump();
        skip_whitespace(state);
        let item = match value(state) {
            Ok(item) => item,
            Err(err) => {
                tree::delete(node);
                return Err(err);
            }
        };
        let key_offset = state.cursor.offset();
        if let Err(_e) = tree::append_object_item(node, &key, item, false, state.hooks.clone()) {
            tree::delete(item);
            tree::delete(node);
            return Err(alloc_fail(key_offset));
        }
        skip_whitespace(state);
        match state.cursor.peek() {
            Some(b',') => {
                state.cursor.bump();
            }
            Some(b'}') => {
                state.cursor.bump();
                state.depth -= 1;
                return Ok(node);
            }
            Some(_) => {
                tree::delete(node);
                return Err(Error::at(ErrorKind::Syntax, state.cursor.offset()));
            }
            None => {
                tree::delete(node);
                return Err(Error::at(ErrorKind::Bounds, state.cursor.offset()));
            }
        }
    }
}
