//! # Fixed Size Array
//!
//! Pre-sized, index-addressable sequence whose storage is reserved once and
//! never resized.

use crate::error::{ArrayError, ArrayResult, InsertResult};
use std::cmp::Ordering;
use std::ops::{Index, IndexMut};

/// Ordering used by [`FixedSizeArray::sort`] and the sorted path of
/// [`FixedSizeArray::find`].
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// A fixed-capacity array of live elements packed into `[0, count)`.
///
/// Storage for exactly `capacity` elements is reserved at construction.
/// After that, no operation allocates: a full array rejects `add` with
/// [`ArrayError::CapacityExceeded`] instead of growing.
///
/// Two removal disciplines are available:
/// - [`remove`](Self::remove) shifts later elements left, preserving order (O(n)).
/// - [`swap_with_last`](Self::swap_with_last) + [`remove_last`](Self::remove_last),
///   or [`swap_remove`](Self::swap_remove), trade order for O(1).
///
/// Every checked operation reports misuse through [`ArrayError`]. The
/// `array[index]` operators are the one exception: they panic on an index
/// outside `[0, count)`, like slice indexing. Use [`get`](Self::get) where
/// the index is not already known to be live.
///
/// # Thread Safety
///
/// This array is NOT thread-safe. One owner mutates it per frame tick.
///
/// # Example
///
/// ```rust
/// use tessera_core::FixedSizeArray;
///
/// let mut active: FixedSizeArray<u32> = FixedSizeArray::new(4)?;
/// active.add(7)?;
/// active.add(9)?;
///
/// // O(1), order not preserved
/// let gone = active.swap_remove(0)?;
/// assert_eq!(gone, 7);
/// assert_eq!(active.as_slice(), &[9]);
/// # Ok::<(), tessera_core::ArrayError>(())
/// ```
pub struct FixedSizeArray<T> {
    /// Live elements. Reserved to `capacity` once, never pushed past it.
    contents: Vec<T>,
    /// Total capacity.
    capacity: usize,
    /// Whether the live elements are known to be in comparator order.
    sorted: bool,
    /// Ordering for sort and sorted lookup.
    comparator: Option<Comparator<T>>,
}

impl<T> FixedSizeArray<T> {
    /// Creates a new array with the specified capacity.
    ///
    /// All memory is reserved upfront.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::ZeroCapacity`] if `capacity` is zero and
    /// [`ArrayError::AllocationFailed`] if the storage cannot be reserved.
    pub fn new(capacity: usize) -> ArrayResult<Self> {
        if capacity == 0 {
            return Err(ArrayError::ZeroCapacity);
        }

        let mut contents = Vec::new();
        contents.try_reserve_exact(capacity).map_err(|err| {
            tracing::debug!("fixed size array reservation failed: capacity {}: {}", capacity, err);
            ArrayError::AllocationFailed { capacity }
        })?;

        tracing::debug!("fixed size array reserved: capacity {}", capacity);

        Ok(Self {
            contents,
            capacity,
            sorted: true,
            comparator: None,
        })
    }

    /// Creates a new array that orders its elements with `comparator`.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_comparator(capacity: usize, comparator: Comparator<T>) -> ArrayResult<Self> {
        let mut array = Self::new(capacity)?;
        array.set_comparator(comparator);
        Ok(array)
    }

    /// Returns the fixed capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of live elements.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.contents.len()
    }

    /// Returns the number of free slots.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity - self.contents.len()
    }

    /// Returns true if there are no live elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Returns true if every slot is live.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.contents.len() == self.capacity
    }

    /// Appends an element at index `count`.
    ///
    /// This is a **O(1)** operation with **zero heap allocations**.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityExceeded`] if the array is full. The
    /// array is unchanged and the rejected element is dropped; use
    /// [`try_add`](Self::try_add) to get it back.
    pub fn add(&mut self, element: T) -> ArrayResult<()> {
        self.try_add(element).map_err(|(err, _)| err)
    }

    /// Appends an element at index `count`, handing it back if the array is full.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityExceeded`] together with the untouched
    /// element if the array is full. The array is unchanged.
    pub fn try_add(&mut self, element: T) -> InsertResult<T> {
        if self.is_full() {
            tracing::trace!("add rejected: array full (capacity {})", self.capacity);
            return Err((
                ArrayError::CapacityExceeded {
                    capacity: self.capacity,
                },
                element,
            ));
        }

        self.contents.push(element);
        self.sorted = false;
        Ok(())
    }

    /// Gets a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] unless `index < count`.
    #[inline]
    pub fn get(&self, index: usize) -> ArrayResult<&T> {
        let count = self.contents.len();
        self.contents
            .get(index)
            .ok_or(ArrayError::IndexOutOfRange { index, count })
    }

    /// Gets a mutable reference to the element at `index`.
    ///
    /// The array is marked unsorted since the element may change its key.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] unless `index < count`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> ArrayResult<&mut T> {
        let count = self.contents.len();
        let slot = self
            .contents
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfRange { index, count })?;
        self.sorted = false;
        Ok(slot)
    }

    /// Returns the last live element, if any.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.contents.last()
    }

    /// Overwrites the element at `index`, returning the previous one.
    ///
    /// The live count does not change.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] unless `index < count`.
    pub fn set(&mut self, index: usize, element: T) -> ArrayResult<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, element))
    }

    /// Removes the element at `index`, shifting every later element left by one.
    ///
    /// Relative order of the remaining elements is preserved. This is
    /// **O(n)** in the number of elements after `index`, with zero allocations.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] unless `index < count`,
    /// which includes every index on an empty array.
    pub fn remove(&mut self, index: usize) -> ArrayResult<T> {
        self.check_index(index)?;
        Ok(self.contents.remove(index))
    }

    /// Removes and returns the last live element.
    ///
    /// This is a **O(1)** operation.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::EmptyContainer`] if there are no live elements.
    pub fn remove_last(&mut self) -> ArrayResult<T> {
        self.contents.pop().ok_or(ArrayError::EmptyContainer)
    }

    /// Exchanges the element at `index` with the last live element.
    ///
    /// Pure rearrangement: the live count does not change.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] unless `index < count`.
    pub fn swap_with_last(&mut self, index: usize) -> ArrayResult<()> {
        self.check_index(index)?;

        let last = self.contents.len() - 1;
        if index != last {
            self.contents.swap(index, last);
            self.sorted = false;
        }
        Ok(())
    }

    /// Removes the element at `index` by moving the last live element into its slot.
    ///
    /// This is a **O(1)** operation. Order is not preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] unless `index < count`.
    pub fn swap_remove(&mut self, index: usize) -> ArrayResult<T> {
        self.check_index(index)?;

        if index + 1 != self.contents.len() {
            self.sorted = false;
        }
        Ok(self.contents.swap_remove(index))
    }

    /// Drops every live element and resets the count to zero.
    ///
    /// The reserved storage is kept.
    pub fn clear(&mut self) {
        self.contents.clear();
        self.sorted = true;
    }

    /// Returns a read-only view over the live elements `[0, count)`.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.contents
    }

    /// Returns a mutable view over the live elements `[0, count)`.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.sorted = false;
        &mut self.contents
    }

    /// Iterates over the live elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.contents.iter()
    }

    /// Iterates mutably over the live elements in index order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.sorted = false;
        self.contents.iter_mut()
    }

    /// Installs the ordering used by [`sort`](Self::sort) and [`find`](Self::find).
    ///
    /// The array is marked unsorted until the next sort.
    pub fn set_comparator(&mut self, comparator: Comparator<T>) {
        self.comparator = Some(comparator);
        self.sorted = false;
    }

    /// Returns true if the live elements are known to be in comparator order.
    #[inline]
    #[must_use]
    pub const fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Sorts the live elements with the installed comparator.
    ///
    /// Does nothing without a comparator. An array already known to be
    /// sorted is skipped unless `force_resort` is set, for when elements
    /// changed their keys through shared references.
    ///
    /// The sort is in place and unstable; it never allocates.
    pub fn sort(&mut self, force_resort: bool) {
        let Some(comparator) = self.comparator else {
            return;
        };
        if self.sorted && !force_resort {
            return;
        }

        self.contents.sort_unstable_by(comparator);
        self.sorted = true;
    }

    fn check_index(&self, index: usize) -> ArrayResult<()> {
        let count = self.contents.len();
        if index < count {
            Ok(())
        } else {
            Err(ArrayError::IndexOutOfRange { index, count })
        }
    }
}

impl<T: PartialEq> FixedSizeArray<T> {
    /// Finds the index of a live element equal to `item`.
    ///
    /// When a comparator is installed, the array is sorted and
    /// `ignore_comparator` is false, this is a binary search over the
    /// comparator-equal run. Otherwise it is a linear scan.
    #[must_use]
    pub fn find(&self, item: &T, ignore_comparator: bool) -> Option<usize> {
        match self.comparator {
            Some(comparator) if self.sorted && !ignore_comparator => {
                let start = self
                    .contents
                    .partition_point(|probe| comparator(probe, item) == Ordering::Less);
                self.contents[start..]
                    .iter()
                    .take_while(|&probe| comparator(probe, item) == Ordering::Equal)
                    .position(|probe| probe == item)
                    .map(|offset| start + offset)
            }
            _ => self.contents.iter().position(|probe| probe == item),
        }
    }

    /// Removes the first live element equal to `item`, preserving order.
    ///
    /// Returns the removed element, or None if no live element matched.
    pub fn remove_item(&mut self, item: &T, ignore_comparator: bool) -> Option<T> {
        let index = self.find(item, ignore_comparator)?;
        Some(self.contents.remove(index))
    }

    /// Returns true if a live element equals `item`.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.find(item, false).is_some()
    }
}

impl<T: Clone> Clone for FixedSizeArray<T> {
    fn clone(&self) -> Self {
        // Vec::clone only reserves `len`; keep the full reservation.
        let mut contents = Vec::with_capacity(self.capacity);
        contents.extend_from_slice(&self.contents);

        Self {
            contents,
            capacity: self.capacity,
            sorted: self.sorted,
            comparator: self.comparator,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for FixedSizeArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedSizeArray")
            .field("count", &self.contents.len())
            .field("capacity", &self.capacity)
            .field("sorted", &self.sorted)
            .field("contents", &self.contents)
            .finish()
    }
}

impl<T> Index<usize> for FixedSizeArray<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= count`.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.contents[index]
    }
}

impl<T> IndexMut<usize> for FixedSizeArray<T> {
    /// # Panics
    ///
    /// Panics if `index >= count`.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.sorted = false;
        &mut self.contents[index]
    }
}

impl<'a, T> IntoIterator for &'a FixedSizeArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut FixedSizeArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let array: FixedSizeArray<u32> = FixedSizeArray::new(10).unwrap();
        assert_eq!(array.count(), 0);
        assert_eq!(array.capacity(), 10);
        assert!(array.is_empty());
        assert!(array.as_slice().is_empty());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result: ArrayResult<FixedSizeArray<u32>> = FixedSizeArray::new(0);
        assert_eq!(result.unwrap_err(), ArrayError::ZeroCapacity);
    }

    #[test]
    fn test_unreservable_capacity_reported() {
        // More bytes than any allocation may span
        let capacity = usize::MAX / 4;
        let result: ArrayResult<FixedSizeArray<u64>> = FixedSizeArray::new(capacity);
        assert_eq!(
            result.unwrap_err(),
            ArrayError::AllocationFailed { capacity }
        );

        let result = FixedSizeArray::with_comparator(capacity, |a: &u64, b: &u64| a.cmp(b));
        assert!(matches!(result, Err(ArrayError::AllocationFailed { .. })));
    }

    #[test]
    fn test_try_add_returns_rejected_element() {
        let mut array = FixedSizeArray::new(1).unwrap();
        array.try_add(String::from("kept")).unwrap();

        let (err, rejected) = array.try_add(String::from("bounced")).unwrap_err();
        assert_eq!(err, ArrayError::CapacityExceeded { capacity: 1 });
        assert_eq!(rejected, "bounced");
        assert_eq!(array.as_slice(), &[String::from("kept")]);
    }

    #[test]
    fn test_add_until_full() {
        let mut array = FixedSizeArray::new(2).unwrap();
        array.add(1).unwrap();
        array.add(2).unwrap();
        assert!(array.is_full());

        assert_eq!(
            array.add(3),
            Err(ArrayError::CapacityExceeded { capacity: 2 })
        );
        assert_eq!(array.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_storage_never_reallocates() {
        let mut array = FixedSizeArray::new(16).unwrap();
        let base = array.as_slice().as_ptr();

        for cycle in 0..4 {
            for i in 0..16 {
                array.add(cycle * 16 + i).unwrap();
            }
            assert_eq!(array.as_slice().as_ptr(), base);
            array.clear();
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let mut array = FixedSizeArray::new(4).unwrap();
        array.add('a').unwrap();

        assert_eq!(array.get(0), Ok(&'a'));
        assert_eq!(
            array.get(1),
            Err(ArrayError::IndexOutOfRange { index: 1, count: 1 })
        );
    }

    #[test]
    fn test_set_returns_previous() {
        let mut array = FixedSizeArray::new(4).unwrap();
        array.add(1).unwrap();

        assert_eq!(array.set(0, 5), Ok(1));
        assert_eq!(array.count(), 1);
        assert_eq!(array[0], 5);
        assert!(array.set(1, 9).is_err());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut array = FixedSizeArray::new(5).unwrap();
        for i in 0..5 {
            array.add(i).unwrap();
        }

        assert_eq!(array.remove(1), Ok(1));
        assert_eq!(array.as_slice(), &[0, 2, 3, 4]);

        // Last index behaves exactly like remove_last
        assert_eq!(array.remove(3), Ok(4));
        assert_eq!(array.as_slice(), &[0, 2, 3]);
    }

    #[test]
    fn test_remove_on_empty() {
        let mut array: FixedSizeArray<u8> = FixedSizeArray::new(3).unwrap();
        assert_eq!(
            array.remove(0),
            Err(ArrayError::IndexOutOfRange { index: 0, count: 0 })
        );
    }

    #[test]
    fn test_remove_last_lifo() {
        let mut array = FixedSizeArray::new(10).unwrap();
        array.add("a").unwrap();
        array.add("b").unwrap();

        assert_eq!(array.remove_last(), Ok("b"));
        assert_eq!(array.count(), 1);
        assert_eq!(array.remove_last(), Ok("a"));
        assert_eq!(array.count(), 0);
        assert_eq!(array.remove_last(), Err(ArrayError::EmptyContainer));
        assert!(array.get(0).is_err());
    }

    #[test]
    fn test_swap_with_last() {
        let mut array = FixedSizeArray::new(4).unwrap();
        for i in [10, 20, 30] {
            array.add(i).unwrap();
        }

        array.swap_with_last(0).unwrap();
        assert_eq!(array.as_slice(), &[30, 20, 10]);
        assert_eq!(array.count(), 3);

        assert!(array.swap_with_last(3).is_err());
        assert_eq!(array.as_slice(), &[30, 20, 10]);
    }

    #[test]
    fn test_swap_remove() {
        let mut array = FixedSizeArray::new(4).unwrap();
        for i in [1, 2, 3, 4] {
            array.add(i).unwrap();
        }

        assert_eq!(array.swap_remove(0), Ok(1));
        assert_eq!(array.as_slice(), &[4, 2, 3]);
    }

    #[test]
    fn test_clear_drops_elements() {
        use std::rc::Rc;

        let tracker = Rc::new(());
        let mut array = FixedSizeArray::new(3).unwrap();
        array.add(Rc::clone(&tracker)).unwrap();
        array.add(Rc::clone(&tracker)).unwrap();
        assert_eq!(Rc::strong_count(&tracker), 3);

        array.clear();
        assert_eq!(Rc::strong_count(&tracker), 1);
        assert_eq!(array.count(), 0);
        assert!(array.get(0).is_err());
    }

    #[test]
    fn test_sort_with_comparator() {
        let mut array = FixedSizeArray::with_comparator(8, |a: &i32, b: &i32| b.cmp(a)).unwrap();
        for i in [3, 9, 1, 7] {
            array.add(i).unwrap();
        }
        assert!(!array.is_sorted());

        array.sort(false);
        assert!(array.is_sorted());
        assert_eq!(array.as_slice(), &[9, 7, 3, 1]);
    }

    #[test]
    fn test_sort_without_comparator_is_noop() {
        let mut array = FixedSizeArray::new(4).unwrap();
        array.add(2).unwrap();
        array.add(1).unwrap();

        array.sort(true);
        assert_eq!(array.as_slice(), &[2, 1]);
    }

    #[test]
    fn test_find_sorted_and_linear() {
        #[derive(Debug, PartialEq)]
        struct Sprite {
            layer: u8,
            id: u32,
        }

        let by_layer: Comparator<Sprite> = |a, b| a.layer.cmp(&b.layer);
        let mut array = FixedSizeArray::with_comparator(8, by_layer).unwrap();
        array.add(Sprite { layer: 2, id: 1 }).unwrap();
        array.add(Sprite { layer: 1, id: 2 }).unwrap();
        array.add(Sprite { layer: 2, id: 3 }).unwrap();
        array.add(Sprite { layer: 0, id: 4 }).unwrap();
        array.sort(false);

        // Same layer as id 1, different identity
        let probe = Sprite { layer: 2, id: 3 };
        let sorted_hit = array.find(&probe, false).unwrap();
        assert_eq!(array[sorted_hit], probe);
        assert_eq!(array.find(&probe, true), Some(sorted_hit));

        assert_eq!(array.find(&Sprite { layer: 2, id: 99 }, false), None);
        assert_eq!(array.find(&Sprite { layer: 5, id: 1 }, false), None);
    }

    #[test]
    fn test_remove_item() {
        let mut array = FixedSizeArray::new(4).unwrap();
        for i in [5, 6, 7] {
            array.add(i).unwrap();
        }

        assert_eq!(array.remove_item(&6, false), Some(6));
        assert_eq!(array.as_slice(), &[5, 7]);
        assert_eq!(array.remove_item(&6, false), None);
        assert!(!array.contains(&6));
    }

    #[test]
    fn test_clone_keeps_reservation() {
        let mut array = FixedSizeArray::new(4).unwrap();
        array.add(1).unwrap();

        let mut copy = array.clone();
        for i in 2..=4 {
            copy.add(i).unwrap();
        }
        assert!(copy.is_full());
        assert_eq!(array.count(), 1);
    }
}
