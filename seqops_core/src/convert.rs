use crate::sequence::Sequence;

/// Classification of an opaque value: nothing at all, a single bare element,
/// or an ordered batch of elements. Classifying is pure; it never touches the
/// value beyond moving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayLike<T> {
    Null,
    One(T),
    Many(Vec<T>),
}

impl<T> From<Option<T>> for ArrayLike<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => Self::One(value),
            None => Self::Null,
        }
    }
}

impl<T> From<Vec<T>> for ArrayLike<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::Many(vec)
    }
}

/// `Null` becomes an empty sequence, `Many` flattens in order, and a bare
/// `One` value becomes a one-element sequence. Never an error.
pub fn from_array_like<T>(item: impl Into<ArrayLike<T>>) -> Sequence<T> {
    match item.into() {
        ArrayLike::Null => Sequence::new(),
        ArrayLike::One(value) => Sequence::from_vec(vec![value]),
        ArrayLike::Many(values) => Sequence::from_vec(values),
    }
}

/// Ordered, length-preserving map into a new sequence. This is the primitive
/// the property-extraction and method-dispatch helpers build on.
pub fn map_transform<T, R>(seq: &Sequence<T>, f: impl FnMut(&T) -> R) -> Sequence<R> {
    seq.iter().map(f).collect()
}
