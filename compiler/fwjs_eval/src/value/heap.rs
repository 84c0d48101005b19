//! Reference-counted handle for heap-allocated values.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Shared, immutable heap allocation.
///
/// Cloning a `Heap` shares the allocation. Equality on values that carry a
/// `Heap` is identity (`Heap::ptr_eq`), never structural.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T> Heap<T> {
    /// Only `Value` factory methods allocate.
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Heap<T>, b: &Heap<T>) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
