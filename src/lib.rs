#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

extern crate alloc;

use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global;
use allocator_api2::boxed::Box;
use core::alloc::Layout;
use core::fmt;

/// The error returned by the fallible insertion methods when the list's
/// allocator cannot provide memory for a new node.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocError;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

mod iter;

pub use iter::Iter;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A singly-linked list whose nodes are allocated with `A`.
///
/// An empty list owns no nodes. Every node exclusively owns its successor, so
/// the chain from the head is always finite and acyclic.
///
/// The list performs no internal synchronization. To share one between
/// threads, put it behind a lock such as `std::sync::Mutex`.

pub struct List<T, A: Allocator + Clone = Global> {
  head: Link<T, A>,
  allocator: A,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

struct Node<T, A: Allocator> {
  value: T,
  next: Link<T, A>,
}

type Link<T, A> = Option<Box<Node<T, A>, A>>;

enum Error {
  ParentAllocatorFailed(Layout),
}

enum Panicked { }

trait Fail: Sized {
  fn fail<T>(_: Error) -> Result<T, Self>;
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn unwrap<T>(x: Result<T, Panicked>) -> T {
  match x { Ok(x) => x, Err(e) => match e { } }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Fail                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Fail for Panicked {
  #[inline(never)]
  #[cold]
  fn fail<T>(e: Error) -> Result<T, Self> {
    match e {
      Error::ParentAllocatorFailed(layout) => {
        log::warn!("singly: node allocation failed (size {}, align {})", layout.size(), layout.align());
        alloc::alloc::handle_alloc_error(layout)
      }
    }
  }
}

impl Fail for AllocError {
  #[inline(never)]
  #[cold]
  fn fail<T>(e: Error) -> Result<T, Self> {
    match e {
      Error::ParentAllocatorFailed(layout) => {
        log::warn!("singly: node allocation failed (size {}, align {})", layout.size(), layout.align());
        Err(AllocError)
      }
    }
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// AllocError                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl fmt::Display for AllocError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("memory allocation failed")
  }
}

impl core::error::Error for AllocError { }

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

fn node<T, A, E>(allocator: &A, value: T) -> Result<Box<Node<T, A>, A>, E>
where
  A: Allocator + Clone,
  E: Fail,
{
  match Box::try_new_in(Node { value, next: None }, allocator.clone()) {
    Ok(b) => Ok(b),
    Err(_) => E::fail(Error::ParentAllocatorFailed(Layout::new::<Node<T, A>>())),
  }
}

fn append<T, A, E>(list: &mut List<T, A>, value: T) -> Result<(), E>
where
  A: Allocator + Clone,
  E: Fail,
{
  // Allocate before walking so that a failure leaves the list untouched.
  let n = node(&list.allocator, value)?;

  let mut link = &mut list.head;

  while let Some(x) = link {
    link = &mut x.next;
  }

  *link = Some(n);
  Ok(())
}

fn prepend<T, A, E>(list: &mut List<T, A>, value: T) -> Result<(), E>
where
  A: Allocator + Clone,
  E: Fail,
{
  let mut n = node(&list.allocator, value)?;
  n.next = list.head.take();
  list.head = Some(n);
  Ok(())
}

impl<T> List<T> {
  /// Creates an empty list backed by the global allocator.
  ///
  /// No memory is allocated until the first insertion.

  #[inline(always)]
  pub const fn new() -> Self {
    Self { head: None, allocator: Global }
  }
}

impl<T, A: Allocator + Clone> List<T, A> {
  /// Creates an empty list whose nodes will be allocated with `allocator`.
  ///
  /// Every node holds its own clone of `allocator`, so a non-zero-sized
  /// allocator such as `&Bump` costs that much extra space per node.

  #[inline(always)]
  pub const fn new_in(allocator: A) -> Self {
    Self { head: None, allocator }
  }

  /// A reference to the allocator backing the list.

  pub fn allocator(&self) -> &A {
    &self.allocator
  }

  /// Inserts `value` as the new last element.
  ///
  /// This walks the whole list to find the tail.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn append(&mut self, value: T) {
    unwrap(append(self, value))
  }

  /// Inserts `value` as the new last element.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory, in which case the
  /// list is unchanged.

  pub fn try_append(&mut self, value: T) -> Result<(), AllocError> {
    append(self, value)
  }

  /// Inserts `value` as the new first element.
  ///
  /// # Panics
  ///
  /// Panics on failure to allocate memory.

  pub fn prepend(&mut self, value: T) {
    unwrap(prepend(self, value))
  }

  /// Inserts `value` as the new first element.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate memory, in which case the
  /// list is unchanged.

  pub fn try_prepend(&mut self, value: T) -> Result<(), AllocError> {
    prepend(self, value)
  }

  /// The number of elements in the list. Counting walks every node.

  pub fn len(&self) -> usize {
    self.iter().count()
  }

  /// Whether the list has no elements.

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// Whether any element of the list equals `value`.

  pub fn contains(&self, value: &T) -> bool
  where
    T: PartialEq
  {
    self.iter().any(|x| x == value)
  }

  /// Removes the first element, in head-to-tail order, that equals `value`.
  ///
  /// Returns whether an element was removed. Deleting from an empty list or
  /// deleting a value that is not present leaves the list unchanged.

  pub fn delete(&mut self, value: &T) -> bool
  where
    T: PartialEq
  {
    let mut link = &mut self.head;
    let mut i = 0;

    loop {
      match link {
        None => {
          log::trace!("singly: delete found no match in {} nodes", i);
          return false;
        }
        Some(x) if x.value == *value => {
          let next = x.next.take();
          *link = next;
          log::trace!("singly: delete unlinked node {}", i);
          return true;
        }
        Some(x) => {
          link = &mut x.next;
          i = i + 1;
        }
      }
    }
  }

  /// A lazy traversal of the elements in head-to-tail order.
  ///
  /// The traversal borrows the list; call `iter` again to start over.

  #[inline(always)]
  pub fn iter(&self) -> Iter<'_, T, A> {
    Iter::new(self.head.as_deref())
  }
}

impl<T, A: Allocator + Clone> Drop for List<T, A> {
  fn drop(&mut self) {
    // Unlink one node at a time. Dropping the head box directly would recurse
    // once per node.
    let mut link = self.head.take();

    while let Some(mut x) = link {
      link = x.next.take();
    }
  }
}

impl<T> Default for List<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<'a, T, A: Allocator + Clone> IntoIterator for &'a List<T, A> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T, A>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<T: fmt::Debug, A: Allocator + Clone> fmt::Debug for List<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

/// Writes each element on its own line, head first.

impl<T: fmt::Display, A: Allocator + Clone> fmt::Display for List<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for x in self.iter() {
      writeln!(f, "{}", x)?;
    }
    Ok(())
  }
}
