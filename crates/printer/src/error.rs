use std::fmt;

use alloc_policy::BufferError;

/// The serializer's slice of the coarse error taxonomy: every failure
/// mode here ultimately traces back to the output buffer (allocation
/// failure, fixed-capacity overflow, or the 31-bit growth ceiling).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error(BufferError);

impl From<BufferError> for Error {
    fn from(inner: BufferError) -> Self {
        Error(inner)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for Error {}
