//! Compares `HybridVec` against `Vec` and `SmallVec` on workloads that stay
//! inline, workloads that cross the spill boundary, and large heap workloads.

use core::hint;
use std::sync::OnceLock;

use criterion::{Bencher, Criterion, criterion_group, criterion_main};
use hybridvec::HybridVec;
use rand::Rng;
use smallvec::SmallVec;

const INLINE_CAP: usize = 16;
const LARGE_SIZE: usize = 40000;

/// A function used to generate a random amount of data.
///
/// Random bounds keep the compiler from specializing the loops below to an
/// exact, known element count, which would not match real usage.
#[inline(never)]
fn gen_one(start: usize, end: usize) -> usize {
    let mut rng = rand::rng();
    rng.random_range(start..end)
}

/// Element count for the inline-only workloads, randomized once per run.
static SMALL_BOUND: OnceLock<usize> = OnceLock::new();

/// Element count just past the spill boundary, randomized once per run.
static SPILL_BOUND: OnceLock<usize> = OnceLock::new();

/// Element count for the large workloads, randomized once per run.
static LARGE_BOUND: OnceLock<usize> = OnceLock::new();

/// Generate an array of random content of a specified length.
#[inline(never)]
fn gen_rand(len: usize, start: u64, end: u64) -> Box<[u64]> {
    let mut rng = rand::rng();
    let mut vec: Vec<u64> = Vec::with_capacity(len);
    for _ in 0..len {
        vec.push(rng.random_range(start..end));
    }
    vec.into_boxed_slice()
}

/// The common surface the compared containers are driven through.
trait VecLike {
    fn new_empty() -> Self;
    fn push(&mut self, value: u64);
    fn pop(&mut self) -> Option<u64>;
    fn insert(&mut self, index: usize, value: u64);
    fn remove(&mut self, index: usize) -> u64;
    fn get_mut(&mut self, index: usize) -> &mut u64;
    fn clear(&mut self);
}

macro_rules! impl_vec_like {
    ($name:ty) => {
        impl VecLike for $name {
            #[inline(always)]
            fn new_empty() -> Self {
                Self::new()
            }
            #[inline(always)]
            fn push(&mut self, value: u64) {
                <$name>::push(self, value)
            }
            #[inline(always)]
            fn pop(&mut self) -> Option<u64> {
                <$name>::pop(self)
            }
            #[inline(always)]
            fn insert(&mut self, index: usize, value: u64) {
                <$name>::insert(self, index, value)
            }
            #[inline(always)]
            fn remove(&mut self, index: usize) -> u64 {
                <$name>::remove(self, index)
            }
            #[inline(always)]
            fn get_mut(&mut self, index: usize) -> &mut u64 {
                &mut self[index]
            }
            #[inline(always)]
            fn clear(&mut self) {
                <$name>::clear(self)
            }
        }
    };
}

impl_vec_like!(Vec<u64>);
impl_vec_like!(HybridVec<u64, INLINE_CAP>);
impl_vec_like!(SmallVec<[u64; INLINE_CAP]>);

macro_rules! gen_bench_group {
    ($c:ident => $fn_name:ident) => {{
        let mut group = $c.benchmark_group(stringify!($fn_name));
        group.bench_function("Vec", |b| $fn_name::<Vec<u64>>(b));
        group.bench_function("HybridVec", |b| $fn_name::<HybridVec<u64, INLINE_CAP>>(b));
        group.bench_function("SmallVec", |b| $fn_name::<SmallVec<[u64; INLINE_CAP]>>(b));
    }};
}

fn bench_vec(c: &mut Criterion) {
    SMALL_BOUND.get_or_init(|| gen_one(14, 16));
    SPILL_BOUND.get_or_init(|| gen_one(INLINE_CAP + 1, INLINE_CAP + 4));
    LARGE_BOUND.get_or_init(|| gen_one(36000, 36003));
    gen_bench_group!(c => new_empty);
    gen_bench_group!(c => push_small);
    gen_bench_group!(c => push_spill);
    gen_bench_group!(c => push_large);
    gen_bench_group!(c => boundary_cycle);
    gen_bench_group!(c => insert_small);
    gen_bench_group!(c => remove_small);
    gen_bench_group!(c => index_small);
}

/// Creation of an empty container; none of the three allocates.
#[inline(never)]
fn new_empty<T: VecLike>(b: &mut Bencher) {
    b.iter(|| hint::black_box(T::new_empty()));
}

/// 14-15 pushes: everything stays within the inline capacity, only `Vec`
/// allocates.
#[inline(never)]
fn push_small<T: VecLike>(b: &mut Bencher) {
    let data = gen_rand(*SMALL_BOUND.get().unwrap(), 0, 9999);
    let index = gen_one(0, *SMALL_BOUND.get().unwrap());

    b.iter(|| {
        let mut vec = T::new_empty();
        let mut counter = 0u64;
        for item in &data {
            vec.push(*item);
        }
        counter += *vec.get_mut(index);
        hint::black_box(counter)
    });
}

/// 17-19 pushes: every container crosses its inline boundary exactly once.
#[inline(never)]
fn push_spill<T: VecLike>(b: &mut Bencher) {
    let data = gen_rand(*SPILL_BOUND.get().unwrap(), 0, 9999);
    let index = gen_one(0, *SPILL_BOUND.get().unwrap());

    b.iter(|| {
        let mut vec = T::new_empty();
        let mut counter = 0u64;
        for item in &data {
            vec.push(*item);
        }
        counter += *vec.get_mut(index);
        hint::black_box(counter)
    });
}

/// 36000-36002 pushes from empty: all containers grow repeatedly.
#[inline(never)]
fn push_large<T: VecLike>(b: &mut Bencher) {
    let data = gen_rand(*LARGE_BOUND.get().unwrap(), 0, 9999);
    let index = gen_rand(10, 0, *LARGE_BOUND.get().unwrap() as _);

    b.iter(|| {
        let mut vec = T::new_empty();
        let mut counter = 0u64;
        for item in &data {
            vec.push(*item);
        }
        for item in &index {
            counter += *vec.get_mut(*item as usize);
        }
        hint::black_box(counter)
    });
}

/// Push/pop oscillation across the inline boundary; this is the worst case
/// for the eager shrink-back policy.
#[inline(never)]
fn boundary_cycle<T: VecLike>(b: &mut Bencher) {
    let data = gen_rand(INLINE_CAP + 2, 0, 9999);

    b.iter(|| {
        let mut vec = T::new_empty();
        let mut counter = 0u64;
        for item in &data {
            vec.push(*item);
        }
        for _ in 0..4 {
            counter += vec.pop().unwrap();
            counter += vec.pop().unwrap();
            vec.push(counter);
            vec.push(counter ^ 1);
        }
        vec.clear();
        hint::black_box(counter)
    });
}

/// A handful of mid-sequence inserts within the inline capacity.
#[inline(never)]
fn insert_small<T: VecLike>(b: &mut Bencher) {
    let data = gen_rand(12, 0, 9999);
    let num = *SMALL_BOUND.get().unwrap();
    let index = gen_one(0, 16);

    b.iter(|| {
        let mut vec = T::new_empty();
        let mut counter = 0u64;
        for item in &data {
            vec.push(*item);
        }
        vec.insert({ num + 4 } % 12, 6);
        vec.insert({ num + 7 } % 13, 7);
        vec.insert({ num + 9 } % 14, 8);
        vec.insert({ num + 14 } % 15, 11);
        counter += *vec.get_mut(index);
        hint::black_box(counter)
    });
}

/// A handful of mid-sequence removals within the inline capacity.
#[inline(never)]
fn remove_small<T: VecLike>(b: &mut Bencher) {
    let data = gen_rand(16, 0, 9999);
    let num = *SMALL_BOUND.get().unwrap();
    let index = gen_one(0, 12);

    b.iter(|| {
        let mut vec = T::new_empty();
        let mut counter = 0u64;
        for item in &data {
            vec.push(*item);
        }
        vec.remove({ num + 14 } % 15);
        vec.remove({ num + 9 } % 14);
        vec.remove({ num + 7 } % 13);
        vec.remove({ num + 4 } % 12);
        counter += *vec.get_mut(index);
        hint::black_box(counter)
    });
}

/// Random mutable indexing within the inline capacity.
#[inline(never)]
fn index_small<T: VecLike>(b: &mut Bencher) {
    let data = gen_rand(16, 0, 9999);
    let mut vec = T::new_empty();
    for item in &data {
        vec.push(*item);
    }

    let index = gen_one(0, 16);
    let range = gen_rand(10, 0, 16);

    b.iter(|| {
        let mut counter = 0u64;
        for item in &range {
            *vec.get_mut(*item as usize) += *item;
        }
        counter += *vec.get_mut(index);
        hint::black_box(counter)
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(500)
        .warm_up_time(core::time::Duration::from_secs(3))
        .measurement_time(core::time::Duration::from_secs(12))
        .confidence_level(0.96)
        .noise_threshold(0.04);
    targets = bench_vec,
}
criterion_main!(benches);
