use std::collections::VecDeque;
use std::sync::Arc;

/// Storage strategy tag. `copy` and `slice` preserve it, so code relying on a
/// kind's guarantees (e.g. snapshot iteration of `Shared`) is never silently
/// handed a downgraded container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    /// Plain growable storage.
    Array,
    /// Clone-on-write storage; copies share the allocation until one side writes.
    Shared,
    /// Deque storage, cheap at both ends.
    Linked,
}

#[derive(Debug)]
pub enum Sequence<T> {
    Array(Vec<T>),
    Shared(Arc<Vec<T>>),
    Linked(VecDeque<T>),
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self::Array(Vec::new())
    }

    pub fn with_kind(kind: SequenceKind) -> Self {
        match kind {
            SequenceKind::Array => Self::Array(Vec::new()),
            SequenceKind::Shared => Self::Shared(Arc::new(Vec::new())),
            SequenceKind::Linked => Self::Linked(VecDeque::new()),
        }
    }

    pub fn from_vec(vec: Vec<T>) -> Self {
        Self::Array(vec)
    }

    /// Drains any finite source into a fresh `Array`-kind sequence,
    /// preserving order. An empty source yields an empty sequence.
    pub fn from_iterable(src: impl IntoIterator<Item = T>) -> Self {
        Self::Array(src.into_iter().collect())
    }

    pub fn collect_with_kind(kind: SequenceKind, src: impl IntoIterator<Item = T>) -> Self {
        match kind {
            SequenceKind::Array => Self::Array(src.into_iter().collect()),
            SequenceKind::Shared => Self::Shared(Arc::new(src.into_iter().collect())),
            SequenceKind::Linked => Self::Linked(src.into_iter().collect()),
        }
    }

    pub fn kind(&self) -> SequenceKind {
        match self {
            Self::Array(_) => SequenceKind::Array,
            Self::Shared(_) => SequenceKind::Shared,
            Self::Linked(_) => SequenceKind::Linked,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Array(v) => v.len(),
            Self::Shared(v) => v.len(),
            Self::Linked(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        match self {
            Self::Array(v) => Box::new(v.iter()),
            Self::Shared(v) => Box::new(v.iter()),
            Self::Linked(v) => Box::new(v.iter()),
        }
    }

    /// Positional read; callers pass an already-normalized position.
    pub fn at(&self, pos: usize) -> Option<&T> {
        match self {
            Self::Array(v) => v.get(pos),
            Self::Shared(v) => v.get(pos),
            Self::Linked(v) => v.get(pos),
        }
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == value)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Clone> Sequence<T> {
    pub fn push(&mut self, value: T) {
        match self {
            Self::Array(v) => v.push(value),
            Self::Shared(v) => Arc::make_mut(v).push(value),
            Self::Linked(v) => v.push_back(value),
        }
    }

    pub fn iter_mut(&mut self) -> Box<dyn Iterator<Item = &mut T> + '_> {
        match self {
            Self::Array(v) => Box::new(v.iter_mut()),
            Self::Shared(v) => Box::new(Arc::make_mut(v).iter_mut()),
            Self::Linked(v) => Box::new(v.iter_mut()),
        }
    }

    // pos must be a valid element position
    pub(crate) fn set_at(&mut self, pos: usize, value: T) {
        match self {
            Self::Array(v) => v[pos] = value,
            Self::Shared(v) => Arc::make_mut(v)[pos] = value,
            Self::Linked(v) => v[pos] = value,
        }
    }

    // pos must be in [0, len]; len appends
    pub(crate) fn insert_at(&mut self, pos: usize, value: T) {
        match self {
            Self::Array(v) => v.insert(pos, value),
            Self::Shared(v) => Arc::make_mut(v).insert(pos, value),
            Self::Linked(v) => v.insert(pos, value),
        }
    }

    /// Kind-preserving duplicate. Mutating the result never touches `self`:
    /// `Shared` copies hand out the same allocation and rely on
    /// clone-on-write, the other kinds copy their elements up front.
    pub fn copy(&self) -> Self {
        match self {
            Self::Array(v) => Self::Array(v.clone()),
            Self::Shared(v) => Self::Shared(Arc::clone(v)),
            Self::Linked(v) => Self::Linked(v.clone()),
        }
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iterable(iter)
    }
}

// element-wise and kind-insensitive, so a Linked and an Array with the same
// elements compare equal
impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Box<dyn Iterator<Item = &'a T> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub enum IntoIter<T> {
    Array(std::vec::IntoIter<T>),
    Linked(std::collections::vec_deque::IntoIter<T>),
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self {
            Self::Array(it) => it.next(),
            Self::Linked(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Array(it) => it.size_hint(),
            Self::Linked(it) => it.size_hint(),
        }
    }
}

impl<T: Clone> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::Array(v) => IntoIter::Array(v.into_iter()),
            // a sole owner takes the buffer, otherwise readers keep theirs
            Self::Shared(v) => {
                IntoIter::Array(Arc::try_unwrap(v).unwrap_or_else(|arc| (*arc).clone()).into_iter())
            }
            Self::Linked(v) => IntoIter::Linked(v.into_iter()),
        }
    }
}
