//! The five sorting routines under measurement, plus the method registry.
//!
//! Every routine takes a slice and returns a freshly allocated sorted
//! vector; the input is never mutated, so one generated array can be
//! inspected after the call and no algorithm can observe another's work.
//! None of them may panic for well-formed input; a wrong result surfaces
//! as an `error` status in the runner, never as a panic.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Common signature for registered methods.
///
/// Only the randomized quicksort consumes the RNG; the other methods take
/// it to keep the registry a plain function-pointer table.
pub type SortFn = fn(&[u32], &mut ChaCha8Rng) -> Vec<u32>;

/// Registry name of the insertion sort, used by the runner's skip policy.
pub const INSERTION_METHOD: &str = "insercion";

/// The fixed method registry, in registration order.
///
/// `estandar` is the standard library's stable sort: it doubles as the
/// correctness oracle and as the baseline measurement.
pub const METHODS: &[(&str, SortFn)] = &[
    ("estandar", sort_estandar),
    ("mezcla", sort_mezcla),
    ("rapido_pivote", sort_rapido_pivote),
    ("monticulo", sort_monticulo),
    ("insercion", sort_insercion),
];

/// Names of the registered methods, in registration order.
pub fn method_names() -> Vec<&'static str> {
    METHODS.iter().map(|&(name, _)| name).collect()
}

fn sort_estandar(v: &[u32], _rng: &mut ChaCha8Rng) -> Vec<u32> {
    std_sort(v)
}

fn sort_mezcla(v: &[u32], _rng: &mut ChaCha8Rng) -> Vec<u32> {
    merge_sort(v)
}

fn sort_rapido_pivote(v: &[u32], rng: &mut ChaCha8Rng) -> Vec<u32> {
    quicksort_random(v, rng)
}

fn sort_monticulo(v: &[u32], _rng: &mut ChaCha8Rng) -> Vec<u32> {
    heap_sort(v)
}

fn sort_insercion(v: &[u32], _rng: &mut ChaCha8Rng) -> Vec<u32> {
    insertion_sort(v)
}

/// Reference sort: the standard library's stable sort on a copy.
pub fn std_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut a = input.to_vec();
    a.sort();
    a
}

/// Classic shift-based insertion sort. Stable, O(n²).
pub fn insertion_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut a = input.to_vec();
    for i in 1..a.len() {
        let key = a[i].clone();
        let mut j = i;
        while j > 0 && a[j - 1] > key {
            a[j] = a[j - 1].clone();
            j -= 1;
        }
        a[j] = key;
    }
    a
}

/// Top-down merge sort. Stable: the merge prefers the left run on ties, so
/// equal elements keep their original relative order.
pub fn merge_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    if input.len() <= 1 {
        return input.to_vec();
    }

    let mid = input.len() / 2;
    let left = merge_sort(&input[..mid]);
    let right = merge_sort(&input[mid..]);

    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    let mut j = 0;
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            out.push(left[i].clone());
            i += 1;
        } else {
            out.push(right[j].clone());
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

/// Iterative quicksort with a uniformly random pivot per partition.
///
/// Uses an explicit work stack and the Lomuto partition scheme, with the
/// pivot swapped into the last position before partitioning. After each
/// partition the larger subrange is pushed first so the smaller one is
/// processed next, which bounds the stack depth to O(log n) in expectation.
pub fn quicksort_random<T: Ord + Clone, R: Rng + ?Sized>(input: &[T], rng: &mut R) -> Vec<T> {
    let mut a = input.to_vec();
    let n = a.len();
    if n <= 1 {
        return a;
    }

    let mut stack: Vec<(usize, usize)> = vec![(0, n - 1)];
    while let Some((lo, hi)) = stack.pop() {
        if lo >= hi {
            continue;
        }

        let pivot_idx = rng.gen_range(lo..=hi);
        a.swap(pivot_idx, hi);

        // Lomuto: a[lo..i] <= pivot, a[i..j] > pivot.
        let mut i = lo;
        for j in lo..hi {
            if a[j] <= a[hi] {
                a.swap(i, j);
                i += 1;
            }
        }
        a.swap(i, hi);

        let left_len = i - lo;
        let right_len = hi - i;
        if left_len > right_len {
            if i > lo + 1 {
                stack.push((lo, i - 1));
            }
            if i + 1 < hi {
                stack.push((i + 1, hi));
            }
        } else {
            if i + 1 < hi {
                stack.push((i + 1, hi));
            }
            if i > lo + 1 {
                stack.push((lo, i - 1));
            }
        }
    }
    a
}

/// Heap sort via a min-heap: heapify bottom-up, then repeatedly swap the
/// root to the shrinking end and append the popped minimum to the output,
/// producing ascending order directly.
pub fn heap_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut a = input.to_vec();
    let n = a.len();
    if n == 0 {
        return a;
    }

    if n >= 2 {
        for start in (0..=(n - 2) / 2).rev() {
            sift_down(&mut a, start, n - 1);
        }
    }

    let mut out = Vec::with_capacity(n);
    let mut end = n - 1;
    loop {
        a.swap(0, end);
        out.push(a[end].clone());
        if end == 0 {
            break;
        }
        end -= 1;
        sift_down(&mut a, 0, end);
    }
    out
}

/// Restore the min-heap property for the subtree rooted at `start`, within
/// `heap[..=end]`.
fn sift_down<T: Ord>(heap: &mut [T], start: usize, end: usize) {
    let mut root = start;
    loop {
        let mut child = 2 * root + 1;
        if child > end {
            break;
        }
        if child + 1 <= end && heap[child + 1] < heap[child] {
            child += 1;
        }
        if heap[root] <= heap[child] {
            break;
        }
        heap.swap(root, child);
        root = child;
    }
}
