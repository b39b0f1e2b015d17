/// Maps a signed, possibly out-of-range index to a position in `[0, len]`.
///
/// Negative indices count from the back (`-1` is the last element). Anything
/// past either end clamps instead of erroring. The upper clamp bound is `len`
/// itself, not `len - 1`, so the result can serve directly as an exclusive
/// slice end or an insertion point.
pub fn normalize(len: usize, index: i64) -> usize {
    if index < 0 {
        // more negative than -len clamps to the front
        let from_back = usize::try_from(index.unsigned_abs()).unwrap_or(usize::MAX);
        len.saturating_sub(from_back)
    } else {
        let pos = usize::try_from(index).unwrap_or(usize::MAX);
        pos.min(len)
    }
}
