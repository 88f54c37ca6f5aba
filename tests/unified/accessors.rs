use expect_test::expect;
use conslist::EmptyListAccess;
use conslist::List;
use conslist::list;

fn nested() -> List<List<u64>> {
  list![list![1, 2, 3, 4], list![5, 6, 7, 8], list![9, 10, 11, 12]]
}

fn deep() -> List<List<List<List<u64>>>> {
  list![list![list![list![1, 2], list![3]], list![list![4]]], list![list![list![5]]]]
}

#[test]
fn test_flat() {
  let x = list![1, 2, 3, 4, 5];
  assert!(x.cadr() == Ok(&2));
  assert!(x.caddr() == Ok(&3));
  assert!(x.cadddr() == Ok(&4));
  expect!["(3 4 5)"].assert_eq(&format!("{}", x.cddr()));
  expect!["(4 5)"].assert_eq(&format!("{}", x.cdddr()));
  expect!["(5)"].assert_eq(&format!("{}", x.cddddr()));
}

#[test]
fn test_flat_paths_share_cells() {
  let x = list![1, 2, 3, 4, 5];
  assert!(x.cddr() == x.tail().tail());
  assert!(x.cdddr() == x.cddr().tail());
  assert!(x.cddddr() == x.nthcdr(4));
}

#[test]
fn test_lists_of_lists() {
  let x = nested();
  assert!(x.caar() == Ok(&1));
  assert!(x.caadr() == Ok(&5));
  assert!(x.cadar() == Ok(&2));
  assert!(x.caaddr() == Ok(&9));
  assert!(x.cadadr() == Ok(&6));
  assert!(x.caddar() == Ok(&3));
  expect!["(2 3 4)"].assert_eq(&format!("{}", x.cdar().unwrap()));
  expect!["(6 7 8)"].assert_eq(&format!("{}", x.cdadr().unwrap()));
  expect!["(3 4)"].assert_eq(&format!("{}", x.cddar().unwrap()));
  expect!["(10 11 12)"].assert_eq(&format!("{}", x.cdaddr().unwrap()));
  expect!["(7 8)"].assert_eq(&format!("{}", x.cddadr().unwrap()));
  expect!["(4)"].assert_eq(&format!("{}", x.cdddar().unwrap()));
}

#[test]
fn test_lists_of_lists_of_lists() {
  let x = deep();
  assert!(x.caaaar() == Ok(&1));
  expect!["(2)"].assert_eq(&format!("{}", x.cdaaar().unwrap()));

  let y = x.car().unwrap();
  expect!["(1 2)"].assert_eq(&format!("{}", y.caar().unwrap()));
  assert!(y.caaar() == Ok(&1));
  assert!(y.caadar() == Ok(&3));
  assert!(y.cadaar() == Ok(&2));
  assert!(y.caaadr() == Ok(&4));
  expect!["(2)"].assert_eq(&format!("{}", y.cdaar().unwrap()));
  expect!["()"].assert_eq(&format!("{}", y.cdaadr().unwrap()));
  expect!["()"].assert_eq(&format!("{}", y.cdadar().unwrap()));
  expect!["()"].assert_eq(&format!("{}", y.cddaar().unwrap()));
}

#[test]
fn test_paths_through_the_empty_list() {
  let x = list![list![1_u64], list![]];
  assert!(x.caadr() == Err(EmptyListAccess));
  assert!(x.cadar() == Err(EmptyListAccess));
  assert!(x.cdadr().map(List::is_empty) == Ok(true));
  assert!(x.caaddr() == Err(EmptyListAccess));
  assert!(x.cddar().map(List::is_empty) == Ok(true));

  let nil = List::<List<List<List<u64>>>>::nil();
  assert!(nil.caaaar() == Err(EmptyListAccess));
  assert!(nil.cdaaar() == Err(EmptyListAccess));
  assert!(nil.cddddr().is_empty());
}

#[test]
fn test_accessors_compose_with_primitives() {
  let x = nested();
  assert!(x.cdar() == x.car().map(List::tail));
  assert!(x.caadr() == x.cadr().and_then(List::car));
  assert!(x.cddadr() == x.cadr().map(List::cddr));
}
