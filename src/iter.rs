use alloc::vec::Vec;
use core::iter::FusedIterator;
use crate::List;

/// Builds a list from its elements, in order.
///
/// ```
/// use conslist::list;
///
/// let x = list![1, 2, 3];
///
/// assert!(x.caddr() == Ok(&3));
/// assert!(x.cdddr().is_empty());
/// ```

#[macro_export]
macro_rules! list {
  () => {
    $crate::List::nil()
  };
  ($($x:expr),+ $(,)?) => {
    <$crate::List<_> as ::core::iter::FromIterator<_>>::from_iter([$($x),+])
  };
}

/// A borrowing iterator over the elements of a [`List`].
///
/// Created by [`List::iter`].

pub struct Iter<'a, T>(&'a List<T>);

impl<T> List<T> {
  /// Iterates over the elements by walking the list with `car` and `cdr`.

  #[inline(always)]
  pub fn iter(&self) -> Iter<'_, T> {
    Iter(self)
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  #[inline(always)]
  fn next(&mut self) -> Option<Self::Item> {
    let x = self.0.car().ok()?;
    self.0 = self.0.tail();
    Some(x)
  }
}

impl<'a, T> FusedIterator for Iter<'a, T> { }

impl<'a, T> Clone for Iter<'a, T> {
  fn clone(&self) -> Self {
    Iter(self.0)
  }
}

impl<'a, T> IntoIterator for &'a List<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  #[inline(always)]
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<T> FromIterator<T> for List<T> {
  fn from_iter<I>(iter: I) -> Self
  where
    I: IntoIterator<Item = T>
  {
    // Cells can only be added at the front, so the elements are buffered and
    // consed on in reverse.

    let items = iter.into_iter().collect::<Vec<T>>();
    let mut list = List::nil();

    for x in items.into_iter().rev() {
      list = list.prepend(x);
    }

    list
  }
}
