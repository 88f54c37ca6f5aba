//! The `caar` ... `cddddr` family.
//!
//! Each accessor is spelled as the letters between `c` and `r`, and applies
//! `car` (`a`) and `cdr` (`d`) from right to left. Only the bodies are
//! generated; the signatures are written out below so that each accessor
//! lands on the list type whose nesting its path needs. Every `a` that is not
//! the leftmost operation takes the `car` of a list of lists.

use crate::EmptyListAccess;
use crate::List;

macro_rules! cxr {
  (@walk $x:expr ;) => {
    $x
  };
  (@walk $x:expr ; a $($op:ident)*) => {
    cxr!(@walk $x ; $($op)*).car()?
  };
  (@walk $x:expr ; d $($op:ident)*) => {
    cxr!(@walk $x ; $($op)*).tail()
  };
  () => {};
  (
    $(#[$meta:meta])*
    fn $name:ident -> Result<$ret:ty, EmptyListAccess> = $($op:ident)+ ;
    $($rest:tt)*
  ) => {
    $(#[$meta])*
    #[inline(always)]
    pub fn $name(&self) -> Result<$ret, EmptyListAccess> {
      Ok(cxr!(@walk self ; $($op)+))
    }

    cxr! { $($rest)* }
  };
  (
    $(#[$meta:meta])*
    fn $name:ident -> $ret:ty = $($op:ident)+ ;
    $($rest:tt)*
  ) => {
    $(#[$meta])*
    #[inline(always)]
    pub fn $name(&self) -> $ret {
      cxr!(@walk self ; $($op)+)
    }

    cxr! { $($rest)* }
  };
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Flat paths                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> List<T> {
  cxr! {
    /// `(car (cdr list))`, the second element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyListAccess`] if the list has fewer than two elements.
    fn cadr -> Result<&T, EmptyListAccess> = a d;

    /// `(car (cdr (cdr list)))`, the third element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyListAccess`] if the list has fewer than three elements.
    fn caddr -> Result<&T, EmptyListAccess> = a d d;

    /// `(car (cdr (cdr (cdr list))))`, the fourth element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyListAccess`] if the list has fewer than four elements.
    fn cadddr -> Result<&T, EmptyListAccess> = a d d d;

    /// `(cdr (cdr list))`
    fn cddr -> &List<T> = d d;

    /// `(cdr (cdr (cdr list)))`
    fn cdddr -> &List<T> = d d d;

    /// `(cdr (cdr (cdr (cdr list))))`
    fn cddddr -> &List<T> = d d d d;
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Lists of lists                                                             //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> List<List<T>> {
  cxr! {
    /// `(car (car list))`
    fn caar -> Result<&T, EmptyListAccess> = a a;

    /// `(cdr (car list))`
    fn cdar -> Result<&List<T>, EmptyListAccess> = d a;

    /// `(car (car (cdr list)))`
    fn caadr -> Result<&T, EmptyListAccess> = a a d;

    /// `(car (cdr (car list)))`
    fn cadar -> Result<&T, EmptyListAccess> = a d a;

    /// `(cdr (car (cdr list)))`
    fn cdadr -> Result<&List<T>, EmptyListAccess> = d a d;

    /// `(cdr (cdr (car list)))`
    fn cddar -> Result<&List<T>, EmptyListAccess> = d d a;

    /// `(car (car (cdr (cdr list))))`
    fn caaddr -> Result<&T, EmptyListAccess> = a a d d;

    /// `(car (cdr (car (cdr list))))`
    fn cadadr -> Result<&T, EmptyListAccess> = a d a d;

    /// `(car (cdr (cdr (car list))))`
    fn caddar -> Result<&T, EmptyListAccess> = a d d a;

    /// `(cdr (car (cdr (cdr list))))`
    fn cdaddr -> Result<&List<T>, EmptyListAccess> = d a d d;

    /// `(cdr (cdr (car (cdr list))))`
    fn cddadr -> Result<&List<T>, EmptyListAccess> = d d a d;

    /// `(cdr (cdr (cdr (car list))))`
    fn cdddar -> Result<&List<T>, EmptyListAccess> = d d d a;
  }
}

impl<T> List<List<List<T>>> {
  cxr! {
    /// `(car (car (car list)))`
    fn caaar -> Result<&T, EmptyListAccess> = a a a;

    /// `(cdr (car (car list)))`
    fn cdaar -> Result<&List<T>, EmptyListAccess> = d a a;

    /// `(car (car (car (cdr list))))`
    fn caaadr -> Result<&T, EmptyListAccess> = a a a d;

    /// `(car (car (cdr (car list))))`
    fn caadar -> Result<&T, EmptyListAccess> = a a d a;

    /// `(car (cdr (car (car list))))`
    fn cadaar -> Result<&T, EmptyListAccess> = a d a a;

    /// `(cdr (car (car (cdr list))))`
    fn cdaadr -> Result<&List<T>, EmptyListAccess> = d a a d;

    /// `(cdr (car (cdr (car list))))`
    fn cdadar -> Result<&List<T>, EmptyListAccess> = d a d a;

    /// `(cdr (cdr (car (car list))))`
    fn cddaar -> Result<&List<T>, EmptyListAccess> = d d a a;
  }
}

impl<T> List<List<List<List<T>>>> {
  cxr! {
    /// `(car (car (car (car list))))`
    fn caaaar -> Result<&T, EmptyListAccess> = a a a a;

    /// `(cdr (car (car (car list))))`
    fn cdaaar -> Result<&List<T>, EmptyListAccess> = d a a a;
  }
}
