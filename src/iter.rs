//! Owning iterators over [`HybridVec`]: [`IntoIter`] and the ranged-erase
//! iterator [`Drain`].

use core::fmt;
use core::iter::FusedIterator;
use core::mem;
use core::ptr;
use core::slice;

use crate::hybrid_vec::HybridVec;
use crate::utils::normalize_range;

/// An iterator that consumes a [`HybridVec`] and yields its items by value.
///
/// # Examples
///
/// ```
/// # use hybridvec::{hybridvec, HybridVec};
/// let vec: HybridVec<&'static str, 3> = hybridvec!["1", "2", "3"];
/// let mut iter = vec.into_iter();
///
/// assert_eq!(iter.next(), Some("1"));
///
/// let rest: Vec<&'static str> = iter.collect();
/// assert_eq!(rest, ["2", "3"]);
/// ```
pub struct IntoIter<T, const N: usize> {
    // `vec.len` is zeroed on construction; the live range is tracked by the
    // index pair so dropping `vec` only releases the segment.
    vec: HybridVec<T, N>,
    front: usize,
    back: usize,
}

impl<T, const N: usize> IntoIterator for HybridVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    #[inline]
    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len;
        self.len = 0;
        IntoIter {
            vec: self,
            front: 0,
            back,
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.front += 1;
            // SAFETY: slot `front - 1` is live and moved out exactly once.
            unsafe { Some(ptr::read(self.vec.as_ptr().add(self.front - 1))) }
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let v = self.back - self.front;
        (v, Some(v))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: slot `back` is live and moved out exactly once.
            unsafe { Some(ptr::read(self.vec.as_ptr().add(self.back))) }
        } else {
            None
        }
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {
    #[inline]
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        if self.front < self.back {
            // SAFETY: `[front, back)` are the elements not yet yielded.
            unsafe {
                ptr::drop_in_place(slice::from_raw_parts_mut(
                    self.vec.as_mut_ptr().add(self.front),
                    self.back - self.front,
                ));
            }
        }
        // `vec` drops afterwards with len 0, releasing the segment.
    }
}

impl<T, const N: usize> IntoIter<T, N> {
    /// Returns the remaining items as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` are live.
        unsafe { slice::from_raw_parts(self.vec.as_ptr().add(self.front), self.back - self.front) }
    }

    /// Returns the remaining items as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: `[front, back)` are live.
        unsafe {
            slice::from_raw_parts_mut(
                self.vec.as_mut_ptr().add(self.front),
                self.back - self.front,
            )
        }
    }
}

impl<T: Clone, const N: usize> Clone for IntoIter<T, N> {
    fn clone(&self) -> Self {
        let vec: HybridVec<T, N> = self.as_slice().iter().cloned().collect();
        vec.into_iter()
    }
}

impl<T, const N: usize> Default for IntoIter<T, N> {
    fn default() -> Self {
        HybridVec::new().into_iter()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

unsafe impl<T, const N: usize> Send for IntoIter<T, N> where T: Send {}
unsafe impl<T, const N: usize> Sync for IntoIter<T, N> where T: Sync {}

/// An iterator that removes a range of items from a [`HybridVec`] and yields
/// them by value.
///
/// See [`HybridVec::drain`].
pub struct Drain<'a, T: 'a, const N: usize> {
    tail_start: usize,
    tail_len: usize,
    iter: slice::Iter<'a, T>,
    vec: ptr::NonNull<HybridVec<T, N>>,
}

impl<T, const N: usize> HybridVec<T, N> {
    /// Removes the subslice indicated by the given range from the vector,
    /// returning a double-ended iterator over the removed subslice.
    ///
    /// If the iterator is dropped before being fully consumed, it drops the
    /// remaining removed elements. When the drop leaves a heap-mode vector
    /// with at most `N` elements, the survivors move back inline and the
    /// overflow buffer is released, exactly as with
    /// [`remove`](HybridVec::remove). An empty range removes nothing and
    /// performs no transition.
    ///
    /// # Panics
    ///
    /// Panics if the range has `start_bound > end_bound`, or if the range is
    /// bounded on either end and past the length of the vector.
    ///
    /// # Leaking
    ///
    /// If the returned iterator goes out of scope without being dropped (due
    /// to [`core::mem::forget`], for example), the vector may have lost and
    /// leaked elements arbitrarily, including elements outside the range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hybridvec::{hybridvec, HybridVec};
    /// let mut v: HybridVec<_, 2> = hybridvec![1, 2, 3, 4];
    /// assert!(!v.is_inline());
    ///
    /// let u: Vec<_> = v.drain(1..3).collect();
    /// assert_eq!(u, [2, 3]);
    /// assert_eq!(v, [1, 4]);
    /// assert!(v.is_inline());
    ///
    /// // A full range clears the vector, like `clear()` does
    /// v.drain(..);
    /// assert_eq!(v, []);
    /// ```
    pub fn drain<R: core::ops::RangeBounds<usize>>(&mut self, range: R) -> Drain<'_, T, N> {
        let len = self.len;
        let (start, end) = normalize_range(&range, len);
        assert!(start <= end, "drain range start (is {start}) should be <= end (is {end})");
        assert!(end <= len, "drain range end (is {end}) should be <= len (is {len})");

        // SAFETY: the length is truncated to the intact prefix so a leaked
        // iterator can never expose the gap; the drop impl restores the tail.
        unsafe {
            self.len = start;
            let range_slice = slice::from_raw_parts(self.as_ptr().add(start), end - start);
            Drain {
                tail_start: end,
                tail_len: len - end,
                iter: range_slice.iter(),
                vec: ptr::NonNull::new_unchecked(self as *mut _),
            }
        }
    }
}

impl<T, const N: usize> Drain<'_, T, N> {
    /// Returns the remaining items as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.iter.as_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for Drain<'_, T, N> {
    fn as_ref(&self) -> &[T] {
        self.iter.as_slice()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Drain<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.iter.as_slice()).finish()
    }
}

impl<T, const N: usize> Iterator for Drain<'_, T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter
            .next()
            .map(|reference| unsafe { ptr::read(reference) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T, const N: usize> DoubleEndedIterator for Drain<'_, T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter
            .next_back()
            .map(|reference| unsafe { ptr::read(reference) })
    }
}

impl<T, const N: usize> ExactSizeIterator for Drain<'_, T, N> {
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T, const N: usize> FusedIterator for Drain<'_, T, N> {}

impl<'a, T: 'a, const N: usize> Drop for Drain<'a, T, N> {
    fn drop(&mut self) {
        /// Moves the un-`Drain`ed tail back and finishes the removal,
        /// shrinking a heap-mode vector back inline when it now fits.
        struct DropGuard<'r, 'a, T, const N: usize>(&'r mut Drain<'a, T, N>);

        impl<'r, 'a, T, const N: usize> Drop for DropGuard<'r, 'a, T, N> {
            fn drop(&mut self) {
                // SAFETY: the Drain borrows the vector exclusively; the tail
                // slots are still live in the original segment.
                unsafe {
                    let source_vec = self.0.vec.as_mut();
                    if self.0.tail_len > 0 {
                        // memmove back untouched tail, update to new length
                        let start = source_vec.len;
                        let tail = self.0.tail_start;
                        if tail != start {
                            let src = source_vec.as_ptr().add(tail);
                            let dst = source_vec.as_mut_ptr().add(start);
                            ptr::copy(src, dst, self.0.tail_len);
                        }
                        source_vec.len = start + self.0.tail_len;
                    }
                    if !source_vec.is_inline() && source_vec.len <= N {
                        source_vec.shrink_removing(source_vec.len, 0);
                    }
                }
            }
        }

        let iter = mem::take(&mut self.iter);
        let drop_len = iter.len();

        let mut vec = self.vec;

        if size_of::<T>() == 0 {
            // ZSTs have no identity; dropping the right count through the
            // segment pointer replaces moving values out of `iter`.
            // (`offset_from_unsigned` below would be invalid for them.)
            unsafe {
                let vec = vec.as_mut();
                let start = vec.len;
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                    vec.as_mut_ptr().add(start),
                    drop_len,
                ));
                vec.len = start + self.tail_len;
                if !vec.is_inline() && vec.len <= N {
                    vec.shrink_removing(vec.len, 0);
                }
            }
            return;
        }

        // ensure elements are moved back into their appropriate places, even
        // when drop_in_place panics
        let _guard = DropGuard(self);

        if drop_len == 0 {
            return;
        }

        let drop_ptr = iter.as_slice().as_ptr();

        unsafe {
            // drop_ptr comes from a slice::Iter which only gives us a &[T],
            // but drop_in_place needs a pointer with mutable provenance.
            // Reconstruct it from the vector without creating a &mut to the
            // front, which could invalidate raw pointers held elsewhere.
            let vec_ptr = vec.as_mut().as_mut_ptr();
            let drop_offset = drop_ptr.offset_from_unsigned(vec_ptr);
            let to_drop = ptr::slice_from_raw_parts_mut(vec_ptr.add(drop_offset), drop_len);
            ptr::drop_in_place(to_drop);
        }
    }
}

unsafe impl<T: Send, const N: usize> Send for Drain<'_, T, N> {}
unsafe impl<T: Sync, const N: usize> Sync for Drain<'_, T, N> {}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use core::cell::Cell;

    use crate::{HybridVec, hybridvec};

    struct Tracked(Rc<Cell<usize>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn into_iter_yields_in_order() {
        let vec: HybridVec<i32, 2> = hybridvec![1, 2, 3, 4];
        let collected: Vec<i32> = vec.into_iter().collect();
        assert_eq!(collected, [1, 2, 3, 4]);
    }

    #[test]
    fn into_iter_double_ended() {
        let vec: HybridVec<i32, 4> = hybridvec![1, 2, 3];
        let mut iter = vec.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.as_slice(), &[2]);
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn into_iter_drops_unconsumed() {
        let drops = Rc::new(Cell::new(0));
        let mut vec: HybridVec<Tracked, 2> = HybridVec::new();
        for _ in 0..5 {
            vec.push(Tracked(Rc::clone(&drops)));
        }

        let mut iter = vec.into_iter();
        drop(iter.next());
        assert_eq!(drops.get(), 1);
        drop(iter);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn drain_middle_inline() {
        let mut vec: HybridVec<i32, 8> = hybridvec![1, 2, 3, 4, 5];
        let removed: Vec<i32> = vec.drain(1..4).collect();
        assert_eq!(removed, [2, 3, 4]);
        assert_eq!(vec, [1, 5]);
    }

    #[test]
    fn drain_shrinks_back_inline() {
        let mut vec: HybridVec<i32, 2> = hybridvec![1, 2, 3, 4];
        assert!(!vec.is_inline());

        let removed: Vec<i32> = vec.drain(1..3).collect();
        assert_eq!(removed, [2, 3]);
        assert_eq!(vec, [1, 4]);
        assert!(vec.is_inline());
        assert_eq!(vec.capacity(), 2);
    }

    #[test]
    fn drain_stays_on_heap_above_boundary() {
        let mut vec: HybridVec<i32, 2> = hybridvec![1, 2, 3, 4, 5];
        let cap = vec.capacity();

        vec.drain(0..2);
        assert_eq!(vec, [3, 4, 5]);
        assert!(!vec.is_inline());
        assert_eq!(vec.capacity(), cap);
    }

    #[test]
    fn drain_empty_range_is_noop() {
        let mut vec: HybridVec<i32, 2> = hybridvec![1, 2, 3];
        let cap = vec.capacity();

        assert_eq!(vec.drain(1..1).next(), None);
        assert_eq!(vec, [1, 2, 3]);
        assert!(!vec.is_inline());
        assert_eq!(vec.capacity(), cap);
    }

    #[test]
    fn drain_full_range_clears() {
        let mut vec: HybridVec<i32, 2> = hybridvec![1, 2, 3];
        vec.drain(..);
        assert!(vec.is_empty());
        assert!(vec.is_inline());
    }

    #[test]
    fn drain_drops_unconsumed_and_restores_tail() {
        let drops = Rc::new(Cell::new(0));
        let mut vec: HybridVec<Tracked, 8> = HybridVec::new();
        for _ in 0..6 {
            vec.push(Tracked(Rc::clone(&drops)));
        }

        {
            let mut drain = vec.drain(1..4);
            drop(drain.next());
            assert_eq!(drops.get(), 1);
            // the other two removed elements drop here
        }
        assert_eq!(drops.get(), 3);
        assert_eq!(vec.len(), 3);
    }

    #[test]
    fn drain_back_to_front() {
        let mut vec: HybridVec<String, 4> = hybridvec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut drain = vec.drain(..);
        assert_eq!(drain.next_back().as_deref(), Some("c"));
        assert_eq!(drain.next().as_deref(), Some("a"));
        drop(drain);
        assert!(vec.is_empty());
    }

    #[test]
    fn drain_zero_sized_elements() {
        let mut vec: HybridVec<(), 2> = HybridVec::new();
        for _ in 0..5 {
            vec.push(());
        }
        assert!(!vec.is_inline());

        let removed = vec.drain(1..4).count();
        assert_eq!(removed, 3);
        assert_eq!(vec.len(), 2);
        assert!(vec.is_inline());
    }

    #[test]
    #[should_panic(expected = "drain range end")]
    fn drain_past_len_panics() {
        let mut vec: HybridVec<i32, 4> = hybridvec![1, 2];
        vec.drain(0..3);
    }
}
