pub mod convert;
pub mod errors;
pub mod index;
pub mod reflect;
pub mod sequence;
mod slice;
