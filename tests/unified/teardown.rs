use std::cell::Cell;
use conslist::List;
use crate::Tracked;
use crate::tracked_list;

const LONG: usize = 1_000_000;

#[test]
fn test_drop_releases_every_cell() {
  let drops = Cell::new(0);
  let x = tracked_list(&drops, 100);
  assert!(drops.get() == 0);
  drop(x);
  assert!(drops.get() == 100);
}

#[test]
fn test_drop_long_list() {
  let drops = Cell::new(0);
  let x = tracked_list(&drops, LONG);
  assert!(x.len() == LONG);
  drop(x);
  assert!(drops.get() == LONG);
}

#[test]
fn test_drop_long_list_stops_at_shared_cell() {
  let drops = Cell::new(0);
  let shared = tracked_list(&drops, LONG);
  let mut x = shared.clone();
  for _ in 0 .. LONG {
    x = x.prepend(Tracked(&drops));
  }

  drop(x);
  assert!(drops.get() == LONG);
  assert!(shared.len() == LONG);

  drop(shared);
  assert!(drops.get() == 2 * LONG);
}

#[test]
fn test_drop_long_list_of_lists() {
  let x = (0 .. LONG).map(|i| List::nil().prepend(i)).collect::<List<List<usize>>>();
  assert!(x.len() == LONG);
  assert!(x.caar() == Ok(&0));
  drop(x);
}

#[test]
fn test_drop_long_collected_list() {
  let x = (0 .. LONG as u64).collect::<List<u64>>();
  assert!(x.nth(LONG - 1) == Some(&(LONG as u64 - 1)));
  drop(x);
}
