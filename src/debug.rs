//! Textual output for lists.
//!
//! Nothing in here touches the cell representation. Both formats walk the
//! list through its public surface: `car` for the element, `tail` for the
//! rest, stopping once the list `is_empty`.

use core::fmt;
use crate::List;

// `[1, 2, 3]`

impl<T: fmt::Debug> fmt::Debug for List<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut out = f.debug_list();
    let mut list = self;

    while let Ok(x) = list.car() {
      let _: &mut fmt::DebugList<'_, '_> = out.entry(x);
      list = list.tail();
    }

    out.finish()
  }
}

// `(1 2 3)`

impl<T: fmt::Display> fmt::Display for List<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("(")?;

    let mut list = self;

    while let Ok(x) = list.car() {
      fmt::Display::fmt(x, f)?;
      list = list.tail();

      if ! list.is_empty() {
        f.write_str(" ")?;
      }
    }

    f.write_str(")")
  }
}
