use core::{mem, ptr, slice};

use crate::errors::OutOfRange;
use crate::raw::{HeapBuf, Segment};

/// An ordered, random-access sequence that stores up to `N` elements inline
/// and spills to an owned heap buffer beyond that.
///
/// While the element count stays at or below `N` the container performs no
/// heap allocation at all. The first append or insert that would exceed `N`
/// moves every element into a fresh overflow buffer sized by the growth
/// policy (`3/2` of the element count, with `N` as the floor, recomputed from
/// the size at every transition). A removal that brings the count back within
/// `N` copies the survivors inline again and releases the buffer, so heap
/// storage only ever exists while `len > N`.
///
/// Capacity is canonical: a transition buffer is always sized by the policy,
/// never by copying another container's capacity or by incremental doubling.
///
/// # Examples
///
/// ```
/// use hybridvec::HybridVec;
///
/// let mut vec: HybridVec<i32, 4> = HybridVec::new();
/// assert_eq!(vec.capacity(), 4);
///
/// // The first four elements live inside the value itself.
/// vec.extend([0, 1, 2, 3]);
/// assert!(vec.is_inline());
///
/// // The fifth spills to an overflow buffer of 3 * 5 / 2 = 7 slots.
/// vec.push(4);
/// assert!(!vec.is_inline());
/// assert_eq!(vec.capacity(), 7);
/// assert_eq!(vec, [0, 1, 2, 3, 4]);
///
/// // Dropping back to the inline capacity releases the buffer again.
/// vec.pop();
/// assert!(vec.is_inline());
/// assert_eq!(vec.capacity(), 4);
/// ```
///
/// # Pointer validity
///
/// Raw views obtained from [`as_ptr`](HybridVec::as_ptr) /
/// [`as_slice`](HybridVec::as_slice) are invalidated by any operation that
/// reallocates, transitions between inline and heap storage, or shifts
/// elements. Borrowed iterators are covered by the borrow checker; raw
/// pointers are not.
pub struct HybridVec<T, const N: usize> {
    pub(crate) seg: Segment<T, N>,
    pub(crate) len: usize,
}

// Single-owner value type; no interior sharing.
unsafe impl<T, const N: usize> Send for HybridVec<T, N> where T: Send {}
unsafe impl<T, const N: usize> Sync for HybridVec<T, N> where T: Sync {}

impl<T, const N: usize> Drop for HybridVec<T, N> {
    fn drop(&mut self) {
        if self.len > 0 {
            // SAFETY: the first `len` slots of the active segment are live.
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.as_mut_ptr(), self.len));
            }
        }
        // Dropping the segment releases the overflow buffer, if any.
    }
}

/// Creates a [`HybridVec`] containing the arguments.
///
/// The syntax follows [`vec!`](https://doc.rust-lang.org/std/macro.vec.html);
/// the inline capacity must be known from context. If the elements exceed the
/// inline capacity the container starts out in heap storage.
///
/// # Examples
///
/// ```
/// # use hybridvec::{hybridvec, HybridVec};
/// let vec: HybridVec<String, 8> = hybridvec![];
/// let vec: HybridVec<u8, 8> = hybridvec![0; 5]; // element must be Clone
/// let vec: HybridVec<_, 8> = hybridvec![1, 2, 3];
/// ```
#[macro_export]
macro_rules! hybridvec {
    [] => { $crate::HybridVec::new() };
    [$elem:expr; $n:expr] => { $crate::HybridVec::from_elem($elem, $n) };
    [$($item:expr),+ $(,)?] => { $crate::HybridVec::from_buf([ $($item),+ ]) };
}

impl<T, const N: usize> HybridVec<T, N> {
    /// Constructs a new, empty `HybridVec` in inline mode.
    ///
    /// No heap memory is touched; the inline block is part of the value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::HybridVec;
    /// let vec: HybridVec<i32, 8> = HybridVec::new();
    /// assert!(vec.is_empty());
    /// assert_eq!(vec.capacity(), 8);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            seg: Segment::inline(),
            len: 0,
        }
    }

    /// Capacity required for `len` elements: the inline capacity while the
    /// count fits, `3/2` of the count past it. Always recomputed from the
    /// size; there is no incremental growth step.
    #[inline(always)]
    const fn grown_capacity(len: usize) -> usize {
        if len <= N { N } else { len + len / 2 }
    }

    /// Creates a `HybridVec` from an array.
    ///
    /// If the array is longer than the inline capacity the container starts
    /// in heap storage, sized by the growth policy.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::HybridVec;
    /// let vec: HybridVec<i32, 4> = HybridVec::from_buf([1, 2, 3]);
    /// assert!(vec.is_inline());
    ///
    /// let vec: HybridVec<i32, 4> = HybridVec::from_buf([1, 2, 3, 4, 5]);
    /// assert!(!vec.is_inline());
    /// assert_eq!(vec.capacity(), 7);
    /// ```
    pub fn from_buf<const P: usize>(arr: [T; P]) -> Self {
        let mut vec = if P <= N {
            Self::new()
        } else {
            Self {
                seg: Segment::Heap(HeapBuf::with_capacity(Self::grown_capacity(P))),
                len: 0,
            }
        };
        // SAFETY: the segment holds at least P slots; the array is forgotten
        // after its elements are moved out bitwise.
        unsafe {
            ptr::copy_nonoverlapping(arr.as_ptr(), vec.as_mut_ptr(), P);
            vec.len = P;
        }
        mem::forget(arr);
        vec
    }

    /// Returns the number of elements in the vector.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the active segment.
    ///
    /// This is `N` in inline mode and the overflow buffer's exact size in
    /// heap mode.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.seg.capacity()
    }

    /// Returns `true` while the elements live in the inline segment.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{hybridvec, HybridVec};
    /// let mut vec: HybridVec<_, 2> = hybridvec![1, 2];
    /// assert!(vec.is_inline());
    ///
    /// vec.push(3);
    /// assert!(!vec.is_inline());
    /// ```
    #[inline(always)]
    pub const fn is_inline(&self) -> bool {
        self.seg.is_inline()
    }

    /// Returns a raw pointer to the active segment.
    ///
    /// The pointer is invalidated by any mutating operation.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.seg.as_ptr()
    }

    /// Returns a raw mutable pointer to the active segment.
    ///
    /// The pointer is invalidated by any mutating operation.
    #[inline(always)]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.seg.as_mut_ptr()
    }

    /// Extracts a slice over the live elements of the active segment.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Extracts a mutable slice over the live elements of the active segment.
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Checked element access.
    ///
    /// Returns [`OutOfRange`] when `index >= len`; never panics.
    ///
    /// For the unchecked counterpart use the slice view's
    /// [`get_unchecked`](slice::get_unchecked).
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{hybridvec, HybridVec};
    /// let vec: HybridVec<_, 4> = hybridvec![10, 20, 30];
    /// assert_eq!(vec.at(1), Ok(&20));
    /// assert!(vec.at(3).is_err());
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        if index < self.len {
            // SAFETY: index is in bounds.
            Ok(unsafe { &*self.as_ptr().add(index) })
        } else {
            Err(OutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Checked mutable element access.
    ///
    /// Returns [`OutOfRange`] when `index >= len`; never panics.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        if index < self.len {
            // SAFETY: index is in bounds.
            Ok(unsafe { &mut *self.as_mut_ptr().add(index) })
        } else {
            Err(OutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Appends an element to the back of the vector.
    ///
    /// While a slot is free in the active segment this is a plain write. Once
    /// the segment is full, a fresh overflow buffer sized by the growth
    /// policy is allocated, all elements are moved into it in order, and the
    /// previous buffer (if any) is released. The transition never appends in
    /// place.
    ///
    /// # Time complexity
    ///
    /// Amortized O(1); O(len) when a transition occurs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{hybridvec, HybridVec};
    /// let mut vec: HybridVec<_, 4> = hybridvec![1, 2];
    /// vec.push(3);
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) {
        let len = self.len;
        if len < self.capacity() {
            // SAFETY: slot `len` is within the active segment.
            unsafe { ptr::write(self.as_mut_ptr().add(len), value) };
            self.len = len + 1;
        } else {
            self.spill_push(value);
        }
    }

    #[cold]
    fn spill_push(&mut self, value: T) {
        let len = self.len;
        let new_len = len + 1;
        let mut buf = HeapBuf::with_capacity(Self::grown_capacity(new_len));
        // SAFETY: the fresh buffer holds at least `new_len` slots. Elements
        // are moved bitwise; the old segment releases memory only, so no
        // destructor runs twice.
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr(), buf.as_mut_ptr(), len);
            ptr::write(buf.as_mut_ptr().add(len), value);
        }
        self.seg = Segment::Heap(buf);
        self.len = new_len;
    }

    /// Removes the last element and returns it, or `None` if the vector is
    /// empty.
    ///
    /// When a heap-mode pop brings the count down to exactly the inline
    /// capacity, the survivors are copied back inline and the overflow
    /// buffer is released.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{hybridvec, HybridVec};
    /// let mut vec: HybridVec<_, 2> = hybridvec![1, 2, 3];
    /// assert!(!vec.is_inline());
    ///
    /// assert_eq!(vec.pop(), Some(3));
    /// assert!(vec.is_inline());
    ///
    /// vec.clear();
    /// assert_eq!(vec.pop(), None);
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` held the last live element; it is moved out here.
        let value = unsafe { ptr::read(self.as_ptr().add(self.len)) };
        if !self.seg.is_inline() && self.len == N {
            // SAFETY: heap mode with exactly N survivors and no gap.
            unsafe { self.shrink_removing(self.len, 0) };
        }
        Some(value)
    }

    /// Inserts an element at `index`, shifting everything after it one slot
    /// to the right.
    ///
    /// The in-capacity shift copies back-to-front so no element is
    /// overwritten before it has been read. A full segment transitions the
    /// same way [`push`](HybridVec::push) does, writing prefix, new element
    /// and suffix into the fresh buffer.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{hybridvec, HybridVec};
    /// let mut vec: HybridVec<_, 4> = hybridvec![1, 2, 3];
    /// vec.insert(2, 99);
    /// assert_eq!(vec, [1, 2, 99, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, element: T) {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        if len < self.capacity() {
            // SAFETY: one slot of headroom; the overlapping copy moves the
            // tail rightward starting from its back.
            unsafe {
                let base = self.as_mut_ptr().add(index);
                ptr::copy(base, base.add(1), len - index);
                ptr::write(base, element);
            }
            self.len = len + 1;
        } else {
            self.spill_insert(index, element);
        }
    }

    #[cold]
    fn spill_insert(&mut self, index: usize, element: T) {
        let len = self.len;
        let new_len = len + 1;
        let mut buf = HeapBuf::with_capacity(Self::grown_capacity(new_len));
        // SAFETY: prefix, new element and suffix land in disjoint slots of
        // the fresh buffer; the old segment releases memory only.
        unsafe {
            let src = self.as_ptr();
            let dst = buf.as_mut_ptr();
            ptr::copy_nonoverlapping(src, dst, index);
            ptr::write(dst.add(index), element);
            ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), len - index);
        }
        self.seg = Segment::Heap(buf);
        self.len = new_len;
    }

    /// Inserts every element of a known-length sequence at `index`, keeping
    /// the order of both the new and the existing elements.
    ///
    /// An empty sequence is a no-op: nothing is shifted and no transition
    /// occurs. Like [`insert`](HybridVec::insert), an overflowing insert
    /// moves everything into a fresh buffer sized by the growth policy.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`, or if the iterator does not yield exactly
    /// the length it reported.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{hybridvec, HybridVec};
    /// let mut vec: HybridVec<_, 8> = hybridvec![1, 5];
    /// vec.insert_many(1, [2, 3, 4]);
    /// assert_eq!(vec, [1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_many<I>(&mut self, index: usize, iterable: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        let iter = iterable.into_iter();
        let count = iter.len();
        if count == 0 {
            return;
        }
        let new_len = len + count;
        if new_len <= self.capacity() {
            // SAFETY: `count` slots of headroom; the tail is shifted with a
            // backward-safe overlapping copy before the gap is filled. While
            // the gap is open, `len` covers only the intact prefix so a
            // panicking iterator cannot cause a double drop.
            unsafe {
                let base = self.as_mut_ptr().add(index);
                ptr::copy(base, base.add(count), len - index);
                self.len = index;
                let mut written = 0;
                for value in iter {
                    assert!(written < count, "iterator yielded more than its length");
                    ptr::write(base.add(written), value);
                    written += 1;
                }
                assert!(written == count, "iterator yielded fewer than its length");
                self.len = new_len;
            }
        } else {
            let mut buf = HeapBuf::with_capacity(Self::grown_capacity(new_len));
            // SAFETY: prefix, new elements and suffix land in disjoint slots
            // of the fresh buffer. The container is not updated until every
            // slot is written, so a panicking iterator leaks the new buffer
            // but leaves the old state intact.
            unsafe {
                let src = self.as_ptr();
                let dst = buf.as_mut_ptr();
                ptr::copy_nonoverlapping(src, dst, index);
                let mut written = 0;
                for value in iter {
                    assert!(written < count, "iterator yielded more than its length");
                    ptr::write(dst.add(index + written), value);
                    written += 1;
                }
                assert!(written == count, "iterator yielded fewer than its length");
                ptr::copy_nonoverlapping(src.add(index), dst.add(index + count), len - index);
            }
            self.seg = Segment::Heap(buf);
            self.len = new_len;
        }
    }

    /// Removes and returns the element at `index`, shifting everything after
    /// it one slot to the left.
    ///
    /// When a heap-mode removal brings the count back within the inline
    /// capacity, prefix and suffix are copied straight into the inline
    /// segment, closing the gap in the same pass, and the overflow buffer is
    /// released.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{hybridvec, HybridVec};
    /// let mut vec: HybridVec<_, 8> = hybridvec![1, 2, 3, 4];
    /// assert_eq!(vec.remove(1), 2);
    /// assert_eq!(vec, [1, 3, 4]);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "removal index (is {index}) should be < len (is {len})"
        );
        // SAFETY: `index` is in bounds; the slot is read out exactly once
        // before the gap is closed either in place or via the transition.
        unsafe {
            let base = self.as_mut_ptr().add(index);
            let value = ptr::read(base);
            if !self.seg.is_inline() && len - 1 <= N {
                self.shrink_removing(index, 1);
            } else {
                ptr::copy(base.add(1), base, len - index - 1);
                self.len = len - 1;
            }
            value
        }
    }

    /// Moves the survivors of a heap-mode removal into a fresh inline
    /// segment, skipping `gap_len` slots at `gap_start`, and releases the
    /// overflow buffer. `self.len` still counts the gap on entry.
    ///
    /// # Safety
    ///
    /// Heap mode, `gap_start + gap_len <= self.len`, the gap's slots already
    /// moved out or dropped, and `self.len - gap_len <= N`.
    pub(crate) unsafe fn shrink_removing(&mut self, gap_start: usize, gap_len: usize) {
        let new_len = self.len - gap_len;
        debug_assert!(!self.seg.is_inline() && new_len <= N);
        let mut inline = Segment::inline();
        let src = self.seg.as_ptr();
        let dst = inline.as_mut_ptr();
        // SAFETY: prefix and suffix are live in the heap buffer and fit
        // inline; copying skips the gap so it closes in one pass.
        unsafe {
            ptr::copy_nonoverlapping(src, dst, gap_start);
            ptr::copy_nonoverlapping(
                src.add(gap_start + gap_len),
                dst.add(gap_start),
                new_len - gap_start,
            );
        }
        self.seg = inline;
        self.len = new_len;
    }

    /// Clears the vector, dropping every element, releasing any overflow
    /// buffer and returning to inline mode with capacity `N`.
    ///
    /// Idempotent on an empty container.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{hybridvec, HybridVec};
    /// let mut vec: HybridVec<_, 4> = hybridvec![1, 2, 3, 4, 5];
    /// assert!(!vec.is_inline());
    ///
    /// vec.clear();
    /// assert!(vec.is_empty());
    /// assert!(vec.is_inline());
    /// assert_eq!(vec.capacity(), 4);
    /// ```
    pub fn clear(&mut self) {
        let elems: *mut [T] = self.as_mut_slice();
        // Zero the length first so a panicking destructor cannot cause a
        // second drop through the container.
        self.len = 0;
        // SAFETY: the slice covered exactly the live elements.
        unsafe { ptr::drop_in_place(elems) };
        if !self.seg.is_inline() {
            self.seg = Segment::inline();
        }
    }
}

impl<T: Clone, const N: usize> HybridVec<T, N> {
    /// Creates a `HybridVec` with `n` clones of `elem`.
    ///
    /// Elements are appended one at a time, so growth transitions happen
    /// exactly as if the caller had called [`push`](HybridVec::push)
    /// repeatedly.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::HybridVec;
    /// let vec: HybridVec<i32, 4> = HybridVec::from_elem(7, 3);
    /// assert_eq!(vec, [7, 7, 7]);
    /// assert!(vec.is_inline());
    /// ```
    pub fn from_elem(elem: T, n: usize) -> Self {
        let mut vec = Self::new();
        if n == 0 {
            return vec;
        }
        for _ in 0..n - 1 {
            vec.push(elem.clone());
        }
        // The last slot takes the original, saving one clone.
        vec.push(elem);
        vec
    }

    /// Clones and appends every element of a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{hybridvec, HybridVec};
    /// let mut vec: HybridVec<_, 8> = hybridvec![1];
    /// vec.extend_from_slice(&[2, 3, 4]);
    /// assert_eq!(vec, [1, 2, 3, 4]);
    /// ```
    pub fn extend_from_slice(&mut self, other: &[T]) {
        for value in other {
            self.push(value.clone());
        }
    }
}

impl<T: Clone, const N: usize> Clone for HybridVec<T, N> {
    /// Deep copy preserving the source's storage mode.
    ///
    /// A heap-mode clone allocates `growth(len)` slots, the canonical
    /// capacity for its size, regardless of the source's current capacity.
    fn clone(&self) -> Self {
        let mut out = if self.is_inline() {
            Self::new()
        } else {
            Self {
                seg: Segment::Heap(HeapBuf::with_capacity(Self::grown_capacity(self.len))),
                len: 0,
            }
        };
        for value in self.as_slice() {
            // SAFETY: capacity covers `self.len`; `out.len` tracks each
            // write so a panicking clone drops only the finished prefix.
            unsafe {
                ptr::write(out.as_mut_ptr().add(out.len), value.clone());
                out.len += 1;
            }
        }
        out
    }

    /// Copy assignment: replaces the contents with a deep copy of `source`,
    /// releasing the previously owned overflow buffer first.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        if !source.is_inline() {
            self.seg = Segment::Heap(HeapBuf::with_capacity(Self::grown_capacity(source.len)));
        }
        for value in source.as_slice() {
            // SAFETY: capacity covers `source.len`; `self.len` tracks each
            // write so a panicking clone drops only the finished prefix.
            unsafe {
                ptr::write(self.as_mut_ptr().add(self.len), value.clone());
                self.len += 1;
            }
        }
    }
}

impl<T, const N: usize> Default for HybridVec<T, N> {
    /// Equivalent to [`HybridVec::new`].
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> core::ops::Deref for HybridVec<T, N> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> core::ops::DerefMut for HybridVec<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: core::fmt::Debug, const N: usize> core::fmt::Debug for HybridVec<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T, const N: usize> AsRef<[T]> for HybridVec<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> AsMut<[T]> for HybridVec<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> alloc::borrow::Borrow<[T]> for HybridVec<T, N> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> alloc::borrow::BorrowMut<[T]> for HybridVec<T, N> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: core::hash::Hash, const N: usize> core::hash::Hash for HybridVec<T, N> {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        core::hash::Hash::hash(self.as_slice(), state);
    }
}

impl<T, I: slice::SliceIndex<[T]>, const N: usize> core::ops::Index<I> for HybridVec<T, N> {
    type Output = <I as slice::SliceIndex<[T]>>::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        core::ops::Index::index(self.as_slice(), index)
    }
}

impl<T, I: slice::SliceIndex<[T]>, const N: usize> core::ops::IndexMut<I> for HybridVec<T, N> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        core::ops::IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a HybridVec<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut HybridVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

/// Equality compares the element sequences through the slice view; storage
/// mode never participates. An inline container and one that grew and shrank
/// back compare equal whenever their elements do.
impl<T, U, const N: usize> PartialEq<HybridVec<U, N>> for HybridVec<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &HybridVec<U, N>) -> bool {
        PartialEq::eq(self.as_slice(), other.as_slice())
    }
}

impl<T: Eq, const N: usize> Eq for HybridVec<T, N> {}

impl<T: PartialOrd, const N: usize> PartialOrd for HybridVec<T, N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        PartialOrd::partial_cmp(self.as_slice(), other.as_slice())
    }
}

impl<T: Ord, const N: usize> Ord for HybridVec<T, N> {
    #[inline]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        Ord::cmp(self.as_slice(), other.as_slice())
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for HybridVec<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        PartialEq::eq(self.as_slice(), other)
    }
}

impl<T, U, const N: usize> PartialEq<&[U]> for HybridVec<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        PartialEq::eq(self.as_slice(), *other)
    }
}

impl<T, U, const N: usize, const P: usize> PartialEq<[U; P]> for HybridVec<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; P]) -> bool {
        PartialEq::eq(self.as_slice(), other.as_slice())
    }
}

impl<T, U, const N: usize, const P: usize> PartialEq<&[U; P]> for HybridVec<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U; P]) -> bool {
        PartialEq::eq(self.as_slice(), other.as_slice())
    }
}

impl<T, const N: usize, const P: usize> From<[T; P]> for HybridVec<T, N> {
    #[inline]
    fn from(value: [T; P]) -> Self {
        Self::from_buf(value)
    }
}

impl<T: Clone, const N: usize> From<&[T]> for HybridVec<T, N> {
    fn from(value: &[T]) -> Self {
        let mut vec = Self::new();
        vec.extend_from_slice(value);
        vec
    }
}

/// Builds the container by appending each produced element in turn, so
/// growth transitions occur incrementally. No length probing is performed.
impl<T, const N: usize> FromIterator<T> for HybridVec<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        for item in iter {
            vec.push(item);
        }
        vec
    }
}

impl<T, const N: usize> Extend<T> for HybridVec<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: 'a + Clone, const N: usize> Extend<&'a T> for HybridVec<T, N> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item.clone());
        }
    }
}
