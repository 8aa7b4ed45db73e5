/// Resolves a `RangeBounds` against `len` into a half-open `(start, end)` pair.
///
/// Bounds are not validated here; callers assert `start <= end <= len`.
#[inline(always)]
pub(crate) fn normalize_range(
    range: &impl core::ops::RangeBounds<usize>,
    len: usize,
) -> (usize, usize) {
    let start = match range.start_bound() {
        core::ops::Bound::Included(&i) => i,
        core::ops::Bound::Excluded(&i) => i + 1,
        core::ops::Bound::Unbounded => 0,
    };

    let end = match range.end_bound() {
        core::ops::Bound::Included(&i) => i + 1,
        core::ops::Bound::Excluded(&i) => i,
        core::ops::Bound::Unbounded => len,
    };
    (start, end)
}
