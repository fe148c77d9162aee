//! The persistent-vector backend contract.
//!
//! The harness drives its backend only through this trait; the backend's
//! internals (tree layout, node balancing, reference counting) are out of
//! scope. [`FlexVector`](crate::vector::FlexVector) is the default
//! implementation.

/// A persistent (immutable, structurally-shared) sequence of `i64`.
///
/// Every constructor returns a *new* value sharing structure with its
/// inputs; no operation is ever observed to mutate an existing value.
/// The harness's correctness depends on this: after `bank[dst]` is
/// replaced, every other slot must still hold its prior snapshot.
///
/// Sizes and indices are 64-bit throughout. Concatenation must be
/// well-defined for any pair of sizes, including sums past 32-bit range —
/// size-counter overflow during concatenation is the historical defect
/// class this harness was built to reach.
///
/// # Panics
///
/// Implementations are free to panic (or abort) on out-of-range indices
/// and on internal invariant violations. Callers validate operands first;
/// a panic that slips through anyway is the defect signal the harness
/// exists to produce, and is deliberately not caught.
pub trait PersistentSeq: Clone {
    /// The empty sequence.
    ///
    /// `branch_hint` is the requested structural fan-out (log2 of the
    /// branching factor). Backends with a compile-time-fixed fan-out
    /// may ignore it.
    fn empty(branch_hint: u32) -> Self;

    /// Number of elements.
    fn len(&self) -> u64;

    /// Whether the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `index`, or `None` if out of range.
    fn get(&self, index: u64) -> Option<i64>;

    /// A new sequence with `value` appended.
    fn push_back(&self, value: i64) -> Self;

    /// A new sequence with `f` applied to the element at `index`.
    ///
    /// `index` must be `< len()`.
    fn update<F: Fn(i64) -> i64>(&self, index: u64, f: F) -> Self;

    /// A new sequence holding the first `count` elements.
    ///
    /// `count` must be `<= len()`.
    fn take(&self, count: u64) -> Self;

    /// A new sequence with the first `count` elements discarded.
    ///
    /// `count` must be `<= len()`.
    fn drop_front(&self, count: u64) -> Self;

    /// The concatenation `self ++ other`.
    fn concat(&self, other: &Self) -> Self;
}
