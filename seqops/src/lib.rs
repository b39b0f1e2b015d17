pub use seqops_core::convert::{from_array_like, map_transform, ArrayLike};
pub use seqops_core::errors::AccessError;
pub use seqops_core::index::normalize;
pub use seqops_core::reflect::{from_property, invoke_each, set_property, wrap, Reflector};
pub use seqops_core::sequence::{Sequence, SequenceKind};
