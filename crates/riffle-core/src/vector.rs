//! Default backend: [`imbl::Vector`], an RRB-tree persistent vector.
//!
//! The adapter is thin: `imbl`'s API is already persistent-by-clone
//! (clones are O(1) and share structure), so each trait operation clones
//! the handle and lets the tree share nodes underneath. Element indices
//! convert `u64 -> usize`; lengths convert back the other way, which is
//! lossless since `imbl` lengths are `usize`.

use crate::seq::PersistentSeq;

/// The default persistent vector driven by the harness.
///
/// `imbl`'s branching factor is fixed at compile time, so the
/// `branch_hint` passed to [`PersistentSeq::empty`] is advisory and
/// ignored here. Backends built around a runtime fan-out parameter can
/// honor it.
pub type FlexVector = imbl::Vector<i64>;

impl PersistentSeq for FlexVector {
    fn empty(_branch_hint: u32) -> Self {
        imbl::Vector::new()
    }

    fn len(&self) -> u64 {
        imbl::Vector::len(self) as u64
    }

    fn get(&self, index: u64) -> Option<i64> {
        let index = usize::try_from(index).ok()?;
        imbl::Vector::get(self, index).copied()
    }

    fn push_back(&self, value: i64) -> Self {
        let mut next = self.clone();
        // UFCS: plain method syntax would resolve back to this trait
        // method through &-autoref, not the inherent &mut one.
        imbl::Vector::push_back(&mut next, value);
        next
    }

    fn update<F: Fn(i64) -> i64>(&self, index: u64, f: F) -> Self {
        let index = usize::try_from(index).expect("index validated against len");
        imbl::Vector::update(self, index, f(self[index]))
    }

    fn take(&self, count: u64) -> Self {
        let count = usize::try_from(count).expect("count validated against len");
        imbl::Vector::take(self, count)
    }

    fn drop_front(&self, count: u64) -> Self {
        let count = usize::try_from(count).expect("count validated against len");
        self.skip(count)
    }

    fn concat(&self, other: &Self) -> Self {
        let mut next = self.clone();
        next.append(other.clone());
        next
    }
}
