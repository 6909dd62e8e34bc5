use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use core::fmt;
use core::iter::FusedIterator;
use crate::Node;

/// A borrowing traversal of a [`List`](crate::List), head first.
///
/// Created by [`List::iter`](crate::List::iter). The traversal is lazy and
/// may be cloned to restart from the current position.

pub struct Iter<'a, T, A: Allocator = Global>(Option<&'a Node<T, A>>);

impl<'a, T, A: Allocator> Iter<'a, T, A> {
  #[inline(always)]
  pub(crate) fn new(head: Option<&'a Node<T, A>>) -> Self {
    Self(head)
  }
}

impl<'a, T, A: Allocator> Iterator for Iter<'a, T, A> {
  type Item = &'a T;

  #[inline(always)]
  fn next(&mut self) -> Option<Self::Item> {
    self.0.map(|x| {
      self.0 = x.next.as_deref();
      &x.value
    })
  }
}

impl<'a, T, A: Allocator> FusedIterator for Iter<'a, T, A> { }

// NB: Not derived. A derive would demand `T: Clone` and `A: Clone`.

impl<'a, T, A: Allocator> Clone for Iter<'a, T, A> {
  fn clone(&self) -> Self {
    Self(self.0)
  }
}

impl<'a, T: fmt::Debug, A: Allocator> fmt::Debug for Iter<'a, T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.clone()).finish()
  }
}
