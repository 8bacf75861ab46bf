use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr::{self, NonNull};
use std::slice;

use log::trace;

use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

const MIN_GROWTH: usize = 4;
const GROWTH_FACTOR: usize = 2;

/// An owning array that is sized once, at runtime. Similar to a [`Box<[T]>`](Box<T>).
///
/// Each Array exclusively owns its buffer. Cloning produces an independent deep copy, while
/// [`Array::take`] transfers the buffer in `O(1)` and leaves an empty Array behind. The size of an
/// Array never changes after construction, except for becoming `0` when its contents are taken.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `take` | `O(1)` |
/// | `reset` | `O(n)` |
/// | `clone` | `O(n)` |
/// | `eq` | `O(n)`* |
///
/// \* Arrays of different sizes are never equal and are compared in `O(1)`.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Returns the size of the Array.
    ///
    /// # Examples
    /// ```
    /// # use owned_array::collections::contiguous::Array;
    /// let arr = Array::from([1, 2, 3]);
    /// assert_eq!(arr.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the Array contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Creates a new Array with size 0. No allocation is made.
    ///
    /// # Examples
    /// ```
    /// # use owned_array::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use owned_array::collections::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let arr: Array<MaybeUninit<u8>> = Array::new_uninit(5);
    /// assert_eq!(arr.size(), 5);
    /// ```
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        Self::try_new_uninit(size).throw()
    }

    /// A fallible version of [`Array::new_uninit`].
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the memory layout size would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use owned_array::collections::contiguous::Array;
    /// assert!(Array::<u32>::try_new_uninit(usize::MAX).is_err());
    /// assert_eq!(Array::<u32>::try_new_uninit(4).map(|arr| arr.size()), Ok(4));
    /// ```
    pub fn try_new_uninit(size: usize) -> Result<Array<MaybeUninit<T>>, CapacityOverflow> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size)?;
        let ptr = Array::<MaybeUninit<T>>::make_ptr(layout);

        Ok(Array {
            ptr,
            size,
            _phantom: PhantomData,
        })
    }

    /// Creates a new Array of size `count`, calling `f` once to produce each element, in order.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_with<F: FnMut() -> T>(mut f: F, count: usize) -> Array<T> {
        let mut arr = Self::new_uninit(count);

        for slot in arr.iter_mut() {
            slot.write(f());
        }

        // SAFETY: Every slot was written above.
        unsafe { arr.assume_init() }
    }

    /// Creates an Array from an iterator which reports its exact length up front. Elements are
    /// moved in, in iteration order.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or if the iterator yields fewer items
    /// than it reported. Any extra items are left in the iterator and dropped with it.
    ///
    /// # Examples
    /// ```
    /// # use owned_array::collections::contiguous::Array;
    /// let arr = Array::from_exact_iter((1..4).map(|i| i * 10));
    /// assert_eq!(arr, [10, 20, 30]);
    /// ```
    pub fn from_exact_iter<I>(iter: I) -> Array<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut iter = iter.into_iter();
        let size = iter.len();
        let mut arr = Self::new_uninit(size);
        let mut written = 0;

        for slot in arr.iter_mut() {
            let Some(item) = iter.next() else {
                break;
            };
            slot.write(item);
            written += 1;
        }

        if written < size {
            for slot in arr.iter_mut().take(written) {
                // SAFETY: The first `written` slots were initialized above and are dropped once.
                unsafe { slot.assume_init_drop() };
            }
            panic!("Iterator reported a length of {size} but only yielded {written} items!");
        }

        // SAFETY: All `size` slots were written.
        unsafe { arr.assume_init() }
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= size`.
    ///
    /// # Examples
    /// ```
    /// # use owned_array::collections::contiguous::Array;
    /// let arr = Array::from(['a', 'b']);
    /// assert_eq!(arr.get(1), Ok(&'b'));
    /// assert!(arr.get(2).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let len = self.size;
        self.as_slice().get(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= size`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.size;
        self.as_mut_slice().get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Extracts a slice containing the entire Array.
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has a
        // length no greater than isize::MAX. Array's safe API doesn't provide access to raw
        // pointers, so the borrow checker prevents mutation throughout 'a.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }

    /// Extracts a mutable slice containing the entire Array.
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: As with as_slice, and self is borrowed mutably so no other access can occur
        // throughout 'a.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }

    /// Transfers ownership of the buffer into a new Array, leaving `self` empty (size 0, no
    /// allocation). No elements are copied or moved.
    ///
    /// # Examples
    /// ```
    /// # use owned_array::collections::contiguous::Array;
    /// let mut a = Array::repeat_item(1, 3);
    /// let b = a.take();
    /// assert_eq!(b.size(), 3);
    /// assert_eq!(a.size(), 0);
    /// ```
    pub fn take(&mut self) -> Array<T> {
        trace!("Array: moved buffer of {} elements", self.size);
        mem::take(self)
    }

    /// Releases the buffer held by `self` and takes ownership of the buffer held by `other`,
    /// leaving `other` empty.
    pub fn assign_move(&mut self, other: &mut Array<T>) {
        *self = other.take();
    }

    /// Decomposes an `Array<T>` into its raw components, a [`NonNull<T>`] pointer to the contained
    /// data and a [`usize`] representing the size.
    ///
    /// After calling this function, the caller is responsible for the allocated data. The parts
    /// can be used to reconstruct an Array with [`Array::from_parts`], allowing it to be used again
    /// and dropped normally.
    pub const fn into_parts(self) -> (NonNull<T>, usize) {
        let ret = (self.ptr, self.size);
        mem::forget(self);
        ret
    }

    /// Creates an `Array<T>` from its raw components, a [`NonNull<T>`] pointer to the contained
    /// data and a [`usize`] representing the size.
    ///
    /// # Safety
    /// Nothing is checked during construction. For the produced value to be valid:
    /// - `ptr` needs to be allocated within the global allocator with `Layout::array::<T>(size)`,
    ///   or be dangling if that layout has a size of zero.
    /// - `ptr` needs to refer to `size` properly initialized values of `T`.
    /// - No other Array may own `ptr`.
    ///
    /// # Examples
    /// ```
    /// # use owned_array::collections::contiguous::Array;
    /// let arr = Array::from([1_u8, 2, 3]);
    /// let (ptr, size) = arr.into_parts();
    /// assert_eq!(unsafe { Array::from_parts(ptr, size) }, [1, 2, 3]);
    /// ```
    pub const unsafe fn from_parts(ptr: NonNull<T>, size: usize) -> Array<T> {
        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    pub(crate) fn make_layout(size: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow)
    }

    /// The layout that the current buffer was allocated with.
    pub(crate) const fn current_layout(&self) -> Layout {
        // SAFETY: Every Array is constructed with a size that passed make_layout, so the layout is
        // known to be valid.
        unsafe { Layout::from_size_align_unchecked(self.size * size_of::<T>(), align_of::<T>()) }
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() },
            )
            .unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T: Clone> Array<T> {
    /// Creates a new `Array<T>` with `count` clones of `item`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use owned_array::collections::contiguous::Array;
    /// let arr = Array::repeat_item(5, 3);
    /// assert_eq!(arr.size(), 3);
    /// assert_eq!(&*arr, &[5, 5, 5]);
    /// ```
    pub fn repeat_item(item: T, count: usize) -> Array<T> {
        Self::repeat_with(|| item.clone(), count)
    }

    /// Overwrites every element with a clone of `value`.
    ///
    /// # Examples
    /// ```
    /// # use owned_array::collections::contiguous::Array;
    /// let mut arr = Array::from([1, 2, 3]);
    /// arr.reset(9);
    /// assert_eq!(arr, [9, 9, 9]);
    /// ```
    pub fn reset(&mut self, value: T) {
        trace!("Array: reset {} elements", self.size);
        self.as_mut_slice().fill(value);
    }

    /// Releases the buffer held by `self` and replaces it with a deep copy of `other`.
    pub fn assign_copy(&mut self, other: &Array<T>) {
        self.clone_from(other);
    }
}

impl<T: Default> Array<T> {
    /// Creates a new `Array<T>` by repeating the default value of `T` `count` times.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_default(count: usize) -> Array<T> {
        Self::repeat_with(T::default, count)
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that the Array is properly initialized. Failing to do so
    /// is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use owned_array::collections::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let mut arr = Array::new_uninit(5);
    /// for i in 0..5 {
    ///     arr[i] = MaybeUninit::new(i);
    /// }
    /// assert_eq!(&*unsafe { arr.assume_init() }, &[0, 1, 2, 3, 4]);
    /// ```
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = self.into_parts();
        // SAFETY: MaybeUninit<T> has the same layout as T and the caller guarantees that every
        // value is initialized.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }

    /// Reallocate the Array to have size equal to `new_size`, with new locations uninitialized.
    /// Values beyond `new_size` are discarded without being dropped.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub(crate) fn realloc(&mut self, new_size: usize) {
        if size_of::<T>() == 0 {
            // Zero-sized types are never allocated, the dangling pointer stays valid.
            self.size = new_size;
            return;
        }

        if self.size == new_size {
            return;
        }

        let new_layout = Self::make_layout(new_size).throw();

        let new_ptr = match (self.size, new_size) {
            (0, _) => Self::make_ptr(new_layout),
            (_, 0) => {
                // SAFETY: The buffer is non-empty and T isn't zero-sized, so ptr was allocated
                // with the current layout.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), self.current_layout()) };
                NonNull::dangling()
            }
            (_, _) => {
                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // layout size is > 0 and <= isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(
                        self.ptr.as_ptr().cast(),
                        self.current_layout(),
                        new_layout.size(),
                    )
                    .cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            }
        };

        self.ptr = new_ptr;
        self.size = new_size;
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: All values are initialized and are dropped exactly once, here.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };

        let layout = self.current_layout();
        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    /// # Panics
    /// Panics with [`IndexOutOfBounds`] if `index >= size`.
    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).throw()
    }
}

impl<T> IndexMut<usize> for Array<T> {
    /// # Panics
    /// Panics with [`IndexOutOfBounds`] if `index >= size`.
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).throw()
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for Array<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// SAFETY: Arrays, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
// This means that Array<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        trace!("Array: deep copy of {} elements", self.size);
        Array::from_exact_iter(self.iter().cloned())
    }

    fn clone_from(&mut self, source: &Self) {
        if self.size == source.size {
            trace!("Array: deep copy of {} elements", self.size);
            self.as_mut_slice().clone_from_slice(source);
        } else {
            *self = source.clone();
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    /// Creates an Array by moving every value out of a fixed-size array, in order.
    ///
    /// # Examples
    /// ```
    /// # use owned_array::collections::contiguous::Array;
    /// let arr = Array::from(["one", "two", "three"]);
    /// assert_eq!(arr.size(), 3);
    /// assert_eq!(arr[2], "three");
    /// ```
    fn from(value: [T; N]) -> Self {
        Array::from_exact_iter(value)
    }
}

impl<T: Clone> From<&[T]> for Array<T> {
    fn from(value: &[T]) -> Self {
        Array::from_exact_iter(value.iter().cloned())
    }
}

impl<T> FromIterator<T> for Array<T> {
    /// Collects an iterator of unknown length, growing a working buffer as needed and shrinking it
    /// to fit once the iterator is exhausted.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut arr = Array::<T>::new_uninit(iter.size_hint().0);
        let mut len = 0;

        for item in iter {
            if len == arr.size {
                arr.realloc(cmp::max(MIN_GROWTH, len.saturating_mul(GROWTH_FACTOR)));
            }
            arr[len].write(item);
            len += 1;
        }

        arr.realloc(len);

        // SAFETY: Exactly the first len values were written and the Array now has size len.
        unsafe { arr.assume_init() }
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: PartialEq> PartialEq<[T]> for Array<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Array<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &self.as_slice())
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Display> Display for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, item) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
