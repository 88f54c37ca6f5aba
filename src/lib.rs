#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;

use alloc::rc::Rc;
use core::error;
use core::fmt;

/// The error returned by taking the [`car`](List::car) of the empty list.
///
/// This is the only failure intrinsic to the list. Every other operation is
/// total, including [`cdr`](List::cdr) of the empty list.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyListAccess;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

mod cxr;

mod debug;

mod iter;

pub use iter::Iter;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// A handle to an immutable, singly-linked list of cons cells.
///
/// A handle either references a cell or is the empty list. Cloning a handle
/// is O(1) and shares every cell; a cell lives exactly as long as some handle
/// or some other cell references it.
///
/// # Mutation
///
/// The list skeleton never changes after construction, but the elements are
/// stored in place inside shared cells. [`car`](Self::car) returns a
/// reference to that storage, not a copy, so an element type with interior
/// mutability (`Cell`, `RefCell`, ...) can be updated in place, and the update
/// is observed through *every* handle that shares the cell.
///
/// ```
/// use core::cell::Cell;
/// use conslist::List;
///
/// let shared = List::nil().prepend(Cell::new(1));
/// let a = shared.prepend(Cell::new(2));
/// let b = shared.prepend(Cell::new(3));
///
/// a.cadr().unwrap().set(99);
///
/// assert!(b.cadr().unwrap().get() == 99);
/// ```
///
/// # Threads
///
/// Cells are reference counted with [`Rc`], so a `List` is neither `Send`
/// nor `Sync`.

pub struct List<T> {
  head: Option<Rc<Node<T>>>,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

struct Node<T> {
  value: T,
  next: List<T>,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIMITIVES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// Allocates a new cell holding `value` in front of `tail`.
///
/// Equivalent to [`tail.prepend(value)`](List::prepend).

#[inline(always)]
pub fn cons<T>(value: T, tail: &List<T>) -> List<T> {
  tail.prepend(value)
}

/// The first element of `list`.
///
/// # Errors
///
/// Returns [`EmptyListAccess`] if `list` is empty.

#[inline(always)]
pub fn car<T>(list: &List<T>) -> Result<&T, EmptyListAccess> {
  list.car()
}

/// A new handle to everything after the first element of `list`.

#[inline(always)]
pub fn cdr<T>(list: &List<T>) -> List<T> {
  list.cdr()
}

/// Whether `list` is the empty list.

#[inline(always)]
pub fn is_empty<T>(list: &List<T>) -> bool {
  list.is_empty()
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// EmptyListAccess                                                            //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl fmt::Display for EmptyListAccess {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("car of the empty list")
  }
}

impl error::Error for EmptyListAccess { }

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> List<T> {
  /// The empty list.

  #[inline(always)]
  pub const fn nil() -> Self {
    Self { head: None }
  }

  /// The empty list. Same as [`nil`](Self::nil).

  #[inline(always)]
  pub const fn new() -> Self {
    Self::nil()
  }

  /// Allocates a new cell holding `value` whose tail is this list.
  ///
  /// `self` is left untouched and remains usable. The returned list shares
  /// every cell of `self`.

  #[inline(always)]
  pub fn prepend(&self, value: T) -> Self {
    let node = Node { value, next: self.clone() };
    Self { head: Some(Rc::new(node)) }
  }

  /// Like [`prepend`](Self::prepend), but produces the element from `f` at
  /// the point where the cell is allocated.

  #[inline(always)]
  pub fn cons_with<F>(tail: &Self, f: F) -> Self
  where
    F: FnOnce() -> T
  {
    tail.prepend(f())
  }

  /// A reference to the first element.
  ///
  /// The reference points into the shared cell. See the
  /// [type-level documentation](Self#mutation) for how that interacts with
  /// in-place mutation.
  ///
  /// # Errors
  ///
  /// Returns [`EmptyListAccess`] if the list is empty.

  #[inline(always)]
  pub fn car(&self) -> Result<&T, EmptyListAccess> {
    match &self.head {
      Some(node) => Ok(&node.value),
      None => Err(EmptyListAccess),
    }
  }

  /// A new handle to everything after the first element.
  ///
  /// The `cdr` of the empty list is the empty list.

  #[inline(always)]
  pub fn cdr(&self) -> Self {
    self.tail().clone()
  }

  /// Borrows everything after the first element without creating a new
  /// handle.
  ///
  /// The tail of the empty list is the empty list itself.

  #[inline(always)]
  pub fn tail(&self) -> &Self {
    match &self.head {
      Some(node) => &node.next,
      None => self,
    }
  }

  /// Whether this is the empty list.

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// The number of elements. This walks the whole list.

  pub fn len(&self) -> usize {
    self.iter().count()
  }

  /// The element at position `n`, counting from zero.

  pub fn nth(&self, n: usize) -> Option<&T> {
    self.nthcdr(n).car().ok()
  }

  /// The list left after taking the `cdr` `n` times.
  ///
  /// Walking past the end yields the empty list.

  pub fn nthcdr(&self, n: usize) -> &Self {
    let mut list = self;
    let mut i = 0;

    while i < n && ! list.is_empty() {
      list = list.tail();
      i = i + 1;
    }

    list
  }
}

impl<T> Clone for List<T> {
  #[inline(always)]
  fn clone(&self) -> Self {
    Self { head: self.head.clone() }
  }
}

impl<T> Default for List<T> {
  #[inline(always)]
  fn default() -> Self {
    Self::nil()
  }
}

/// Handles are equal when they reference the same cell, or are both empty.
/// Elements are never compared.

impl<T> PartialEq for List<T> {
  #[inline(always)]
  fn eq(&self, other: &Self) -> bool {
    match (&self.head, &other.head) {
      (Some(x), Some(y)) => Rc::ptr_eq(x, y),
      (None, None) => true,
      _ => false,
    }
  }
}

impl<T> Eq for List<T> { }

impl<T> Drop for List<T> {
  fn drop(&mut self) {
    // STACK SPACE:
    //
    // The default drop glue would recurse once per cell. Instead, each cell
    // we hold the last reference to is unlinked from its successor before it
    // is dropped, so the loop runs in constant stack. The walk stops at the
    // first cell that is still shared.
    //
    // Dropping an element may itself drop a list, which runs this loop for
    // that list. Recursion depth is therefore bounded by element nesting,
    // not by length.

    let mut next = self.head.take();
    let mut released = 0_usize;

    while let Some(node) = next {
      match Rc::try_unwrap(node) {
        Ok(Node { value, next: mut rest }) => {
          next = rest.head.take();
          released = released + 1;
          drop::<T>(value);
        }
        Err(_) => break,
      }
    }

    if released != 0 {
      tracing::trace!(released, "released cons cells");
    }
  }
}
