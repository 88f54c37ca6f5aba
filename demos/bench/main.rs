//! Build-and-drop timings for `conslist` against arena and leaked-box lists.

use std::hint;
use std::time::Instant;
use conslist::List;

#[derive(Clone, Copy)]
enum ArenaList<'a, T> {
  Nil,
  Cons(&'a ArenaNode<'a, T>),
}

#[derive(Clone, Copy)]
struct ArenaNode<'a, T> {
  car: T,
  cdr: ArenaList<'a, T>,
}

fn warmup() {
  let mut s = 1u64;
  for i in 0 .. 500_000_000 { s = s.wrapping_mul(i); }
  let _: u64 = hint::black_box(s);
}

fn timeit<F: FnOnce()>(f: F) -> f64 {
  let start = Instant::now();
  f();
  let stop = Instant::now();
  stop.saturating_duration_since(start).as_nanos() as f64
}

fn run_bench<F: FnOnce(usize, usize)>(iters: usize, len: usize, name: &str, f: F) {
  let iters = hint::black_box(iters);
  let len = hint::black_box(len);
  let duration = timeit(|| f(iters, len));
  let duration = duration / ((iters * len) as f64);
  print!("{:25} {:.3} ns\n", name, duration);
}

#[inline(never)]
fn bench_conslist(iters: usize, len: usize) {
  #[inline(never)]
  fn make_list(len: usize) -> List<u64> {
    let mut r = List::nil();
    for i in (0 .. len).rev() {
      r = r.prepend(i as u64);
    }
    r
  }

  for _ in 0 .. iters {
    let _: List<u64> = hint::black_box(make_list(len));
  }
}

#[inline(never)]
fn bench_conslist_shared(iters: usize, len: usize) {
  #[inline(never)]
  fn make_list(tail: &List<u64>, len: usize) -> List<u64> {
    let mut r = tail.clone();
    for i in (0 .. len).rev() {
      r = r.prepend(i as u64);
    }
    r
  }

  let tail = (0 .. len as u64).collect::<List<u64>>();

  for _ in 0 .. iters {
    let _: List<u64> = hint::black_box(make_list(&tail, len));
  }
}

#[inline(never)]
fn bench_bumpalo(iters: usize, len: usize) {
  #[inline(never)]
  fn make_list<'a>(arena: &'a bumpalo::Bump, len: usize) -> ArenaList<'a, u64> {
    let mut r = ArenaList::Nil;
    for i in (0 .. len).rev() {
      r = ArenaList::Cons(arena.alloc(ArenaNode { car: i as u64, cdr: r }));
    }
    r
  }

  let mut arena = bumpalo::Bump::new();

  for _ in 0 .. iters {
    let _: ArenaList<'_, u64> = hint::black_box(make_list(&arena, len));
    arena.reset();
  }
}

#[inline(never)]
fn bench_box_leak(iters: usize, len: usize) {
  #[inline(never)]
  fn make_list<'a>(len: usize) -> ArenaList<'a, u64> {
    let mut r = ArenaList::Nil;
    for i in (0 .. len).rev() {
      r = ArenaList::Cons(Box::leak(Box::new(ArenaNode { car: i as u64, cdr: r })));
    }
    r
  }

  for _ in 0 .. iters {
    let _: ArenaList<'_, u64> = hint::black_box(make_list(len));
  }
}

#[inline(never)]
fn sum(list: &List<u64>) -> u64 {
  list.iter().sum()
}

#[inline(never)]
fn sum_arena(list: ArenaList<'_, u64>) -> u64 {
  let mut list = list;
  let mut s = 0;
  while let ArenaList::Cons(node) = list {
    s = s + node.car;
    list = node.cdr;
  }
  s
}

fn main() {
  warmup();

  run_bench(1_000, 5_000, "conslist", bench_conslist);
  run_bench(1_000, 5_000, "conslist-shared-tail", bench_conslist_shared);
  run_bench(1_000, 5_000, "bumpalo", bench_bumpalo);
  run_bench(100, 5_000, "box-leak", bench_box_leak);

  let arena = bumpalo::Bump::new();
  let mut y = ArenaList::Nil;
  for i in (0 .. 100).rev() {
    y = ArenaList::Cons(arena.alloc(ArenaNode { car: i, cdr: y }));
  }

  println!("{}", sum(&(0 .. 100).collect::<List<u64>>()));
  println!("{}", sum_arena(y));
}
