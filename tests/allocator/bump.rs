use allocator_api2::alloc::AllocError;
use allocator_api2::alloc::Allocator;
use bumpalo::Bump;
use core::alloc::Layout;
use core::ptr::NonNull;
use expect_test::expect;
use singly::List;

/// Hands out memory from a bump arena. Freeing is a no-op; the arena releases
/// everything when it is dropped.

#[derive(Clone, Copy)]
struct Arena<'a>(&'a Bump);

unsafe impl<'a> Allocator for Arena<'a> {
  fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
    match self.0.try_alloc_layout(layout) {
      Ok(p) => Ok(NonNull::slice_from_raw_parts(p, layout.size())),
      Err(_) => Err(AllocError),
    }
  }

  unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
    let _ = ptr;
    let _ = layout;
  }
}

#[test]
fn test_bump() {
  let bump = Bump::new();

  let mut list = List::new_in(Arena(&bump));

  list.append("hello!");
  list.append("world!");
  list.prepend("shelley says: ");

  assert!(list.contains(&"hello!"));
  assert!(! list.contains(&"shelley"));
  assert!(list.delete(&"world!"));

  expect![[r#"["shelley says: ", "hello!"]"#]].assert_eq(&format!("{:?}", list));

  drop(list);

  assert!(bump.allocated_bytes() > 0);
}

#[test]
fn test_bump_many() {
  let bump = Bump::new();

  let mut list = List::new_in(Arena(&bump));

  for i in 0 .. 10_000_u64 { list.prepend(i); }

  assert!(list.len() == 10_000);
  assert!(list.iter().copied().eq((0 .. 10_000).rev()));
}
