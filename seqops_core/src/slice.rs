use crate::errors::AccessError;
use crate::index::normalize;
use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Reads the element at a signed index. Out-of-range indices clamp onto
    /// the nearest real element (reads never address one-past-end); only an
    /// empty sequence is an error.
    pub fn get(&self, index: i64) -> Result<&T, AccessError> {
        let last = self.len().checked_sub(1).ok_or(AccessError::EmptySequence)?;
        let pos = normalize(self.len(), index).min(last);
        self.at(pos).ok_or(AccessError::EmptySequence)
    }

    fn end_raw(&self) -> i64 {
        i64::try_from(self.len()).unwrap_or(i64::MAX)
    }
}

impl<T: Clone> Sequence<T> {
    /// Overwrites the element at a signed index, clamping exactly like
    /// [`get`](Sequence::get). A plain set never appends.
    pub fn set(&mut self, index: i64, value: T) -> Result<(), AccessError> {
        let last = self.len().checked_sub(1).ok_or(AccessError::EmptySequence)?;
        let pos = normalize(self.len(), index).min(last);
        self.set_at(pos, value);
        Ok(())
    }

    /// Inserts before the normalized position, shifting the tail right.
    /// Here the full `[0, len]` range is meaningful: `len` appends.
    pub fn insert(&mut self, index: i64, value: T) {
        let pos = normalize(self.len(), index);
        self.insert_at(pos, value);
    }

    /// The half-open region `[start, end)`, both endpoints normalized
    /// independently against the current length. A normalized `start >= end`
    /// yields an empty sequence, never an error. The result is an independent
    /// copy of the same kind (copy-on-read, no aliasing of `self`).
    pub fn slice(&self, start: i64, end: i64) -> Sequence<T> {
        let len = self.len();
        let start = normalize(len, start);
        let end = normalize(len, end);
        if start >= end {
            return Sequence::with_kind(self.kind());
        }
        Sequence::collect_with_kind(self.kind(), self.iter().skip(start).take(end - start).cloned())
    }

    /// `slice` through the end of the sequence.
    pub fn slice_from(&self, start: i64) -> Sequence<T> {
        self.slice(start, self.end_raw())
    }

    /// `slice` from the front of the sequence.
    pub fn slice_to(&self, end: i64) -> Sequence<T> {
        self.slice(0, end)
    }
}
