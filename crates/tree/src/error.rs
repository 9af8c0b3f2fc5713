use std::fmt;

/// The tree model's slice of the coarse error taxonomy (see the parser
/// and printer crates for their own slices). Grounded on the teacher's
/// hand-rolled `syntax::Error` enum: a flat `enum` with a `Display` impl
/// written by hand rather than a `thiserror` derive, because the set of
/// variants is small, fixed, and each message is a single literal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The active allocator hooks returned no memory.
    Allocation,
    /// Nesting exceeded the configured depth limit during duplication.
    Depth,
    /// A precondition of the call was violated: a null/absent argument,
    /// a negative or out-of-range index, or a self-insertion attempt.
    ApiContract(ApiContractError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiContractError {
    SelfInsertion,
    IndexOutOfRange,
    NotAContainer,
    ValueIsReference,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Allocation => write!(f, "allocator returned no memory"),
            Error::Depth => write!(f, "nesting exceeds the configured depth limit"),
            Error::ApiContract(inner) => write!(f, "{inner}"),
        }
    }
}

impl fmt::Display for ApiContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiContractError::SelfInsertion => write!(f, "a node cannot be inserted into itself"),
            ApiContractError::IndexOutOfRange => write!(f, "index out of range"),
            ApiContractError::NotAContainer => write!(f, "node is not an array or object"),
            ApiContractError::ValueIsReference => write!(f, "cannot set a value in place on a reference node"),
        }
    }
}

impl std::error::Error for Error {}
impl std::error::Error for ApiContractError {}
