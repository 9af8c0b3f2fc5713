//! The growable output buffer: an [`alloc_policy::RawBuffer`] plus the
//! write offset the buffer itself doesn't track.

use std::sync::Arc;

use alloc_policy::{Hooks, RawBuffer};

use crate::error::Error;

pub(crate) struct PrintBuffer {
    raw: RawBuffer,
    offset: usize,
}

impl PrintBuffer {
    pub(crate) fn with_capacity(capacity: usize, hooks: Arc<dyn Hooks>) -> Result<Self, Error> {
        Ok(Self { raw: RawBuffer::with_capacity(capacity, hooks)?, offset: 0 })
    }

    pub(crate) fn fixed_capacity(capacity: usize, hooks: Arc<dyn Hooks>) -> Result<Self, Error> {
        Ok(Self { raw: RawBuffer::fixed_capacity(capacity, hooks)?, offset: 0 })
    }

    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn push_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.raw.ensure(self.offset, bytes.len())?;
        self.raw.as_mut_slice()[self.offset..self.offset + bytes.len()].copy_from_slice(bytes);
        self.offset += bytes.len();
        Ok(())
    }

    pub(crate) fn push_byte(&mut self, byte: u8) -> Result<(), Error> {
        self.push_bytes(&[byte])
    }

    pub(crate) fn push_tabs(&mut self, count: usize) -> Result<(), Error> {
        self.raw.ensure(self.offset, count)?;
        self.raw.as_mut_slice()[self.offset..self.offset + count].fill(b'\t');
        self.offset += count;
        Ok(())
    }

    /// Release slack and hand the caller the exact written range.
    pub(crate) fn finish(self) -> Vec<u8> {
        let offset = self.offset;
        self.raw.into_vec(offset)
    }
}
