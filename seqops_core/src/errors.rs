use derive_more::Display;
use std::error::Error;

/// The one error this crate raises on its own: element read/write on a
/// zero-length sequence. All other index arithmetic clamps instead of failing.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum AccessError {
    #[display("cannot access an element of an empty sequence")]
    EmptySequence,
}

impl Error for AccessError {}
