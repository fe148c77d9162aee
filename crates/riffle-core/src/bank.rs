//! The variable bank: a fixed-size array of persistent-vector slots.
//!
//! Slots are owned values with no back-references — assignment is pure
//! replacement, so no arena or reference-counting scheme is needed
//! beyond whatever the backend uses internally. Because the backend is
//! persistent, replacing `bank[dst]` never disturbs the snapshot any
//! other slot still holds.

use crate::error::ApplyError;
use crate::id::VarId;
use crate::op::{bump, Op, PUSH_VALUE};
use crate::seq::PersistentSeq;

/// A fixed-size ordered bank of persistent-vector variables.
///
/// Created with every slot holding the backend's empty value. The slot
/// count is fixed for the bank's lifetime; the bank lives for exactly
/// one run.
///
/// # Examples
///
/// ```
/// use riffle_core::{Bank, FlexVector, Op, VarId};
///
/// let mut bank: Bank<FlexVector> = Bank::new(8, 3);
/// bank.apply(&Op::PushBack { src: VarId(0), dst: VarId(1) }).unwrap();
/// assert_eq!(bank.len_of(VarId(1)).unwrap(), 1);
/// assert_eq!(bank.len_of(VarId(0)).unwrap(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Bank<S> {
    slots: Vec<S>,
}

impl<S: PersistentSeq> Bank<S> {
    /// Create a bank of `slot_count` empty vectors.
    ///
    /// `branch_hint` is forwarded to [`PersistentSeq::empty`] for
    /// backends with a runtime fan-out parameter.
    pub fn new(slot_count: u8, branch_hint: u32) -> Self {
        let slots = (0..slot_count).map(|_| S::empty(branch_hint)).collect();
        Self { slots }
    }

    /// Number of slots in the bank.
    pub fn slot_count(&self) -> u8 {
        self.slots.len() as u8
    }

    /// Whether `var` names a slot in this bank.
    pub fn contains(&self, var: VarId) -> bool {
        var.index() < self.slots.len()
    }

    /// The vector held in `var`.
    pub fn get(&self, var: VarId) -> Result<&S, ApplyError> {
        self.slots.get(var.index()).ok_or(ApplyError::VarOutOfRange {
            var,
            slot_count: self.slot_count(),
        })
    }

    /// The current length of the vector held in `var`.
    pub fn len_of(&self, var: VarId) -> Result<u64, ApplyError> {
        Ok(self.get(var)?.len())
    }

    /// Current lengths of all slots, in slot order.
    pub fn lens(&self) -> Vec<u64> {
        self.slots.iter().map(S::len).collect()
    }

    /// Apply one operation, replacing the destination slot.
    ///
    /// Operands are validated against the bank's *current* state before
    /// the backend is touched; a rejected operand leaves the bank
    /// unchanged. A backend panic on validated operands is the fatal
    /// tier and propagates.
    pub fn apply(&mut self, op: &Op) -> Result<(), ApplyError> {
        let src = self.get(op.src())?;
        let result = match *op {
            Op::PushBack { .. } => src.push_back(PUSH_VALUE),
            Op::Update { index, .. } => {
                let index = u64::from(index);
                if index >= src.len() {
                    return Err(ApplyError::IndexOutOfRange {
                        var: op.src(),
                        index,
                        len: src.len(),
                    });
                }
                src.update(index, bump)
            }
            Op::Take { count, .. } => {
                let count = u64::from(count);
                if count > src.len() {
                    return Err(ApplyError::CountOutOfRange {
                        var: op.src(),
                        count,
                        len: src.len(),
                    });
                }
                src.take(count)
            }
            Op::Drop { count, .. } => {
                let count = u64::from(count);
                if count > src.len() {
                    return Err(ApplyError::CountOutOfRange {
                        var: op.src(),
                        count,
                        len: src.len(),
                    });
                }
                src.drop_front(count)
            }
            Op::Concat { src2, .. } => src.concat(self.get(src2)?),
        };

        let dst = op.dst();
        if !self.contains(dst) {
            return Err(ApplyError::VarOutOfRange {
                var: dst,
                slot_count: self.slot_count(),
            });
        }
        self.slots[dst.index()] = result;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::FlexVector;

    fn bank() -> Bank<FlexVector> {
        Bank::new(8, 3)
    }

    fn push(bank: &mut Bank<FlexVector>, src: u8, dst: u8) {
        bank.apply(&Op::PushBack { src: VarId(src), dst: VarId(dst) })
            .unwrap();
    }

    #[test]
    fn starts_empty() {
        let b = bank();
        assert_eq!(b.slot_count(), 8);
        assert_eq!(b.lens(), vec![0; 8]);
    }

    #[test]
    fn push_back_grows_dst_from_src() {
        let mut b = bank();
        push(&mut b, 0, 0);
        push(&mut b, 0, 0);
        push(&mut b, 0, 3);
        assert_eq!(b.len_of(VarId(0)).unwrap(), 2);
        assert_eq!(b.len_of(VarId(3)).unwrap(), 3);
    }

    #[test]
    fn src_slot_keeps_its_snapshot() {
        let mut b = bank();
        push(&mut b, 0, 0);
        push(&mut b, 0, 1);
        // Growing slot 1 further must not disturb slot 0.
        push(&mut b, 1, 1);
        push(&mut b, 1, 1);
        assert_eq!(b.len_of(VarId(0)).unwrap(), 1);
        assert_eq!(b.len_of(VarId(1)).unwrap(), 4);
    }

    #[test]
    fn update_increments_one_element() {
        let mut b = bank();
        push(&mut b, 0, 0);
        push(&mut b, 0, 0);
        b.apply(&Op::Update { src: VarId(0), dst: VarId(1), index: 1 })
            .unwrap();
        let updated = b.get(VarId(1)).unwrap();
        assert_eq!(PersistentSeq::get(updated, 0), Some(PUSH_VALUE));
        assert_eq!(PersistentSeq::get(updated, 1), Some(PUSH_VALUE + 1));
        // Source unchanged.
        let source = b.get(VarId(0)).unwrap();
        assert_eq!(PersistentSeq::get(source, 1), Some(PUSH_VALUE));
    }

    #[test]
    fn update_rejects_index_at_len() {
        let mut b = bank();
        push(&mut b, 0, 0);
        let err = b
            .apply(&Op::Update { src: VarId(0), dst: VarId(0), index: 1 })
            .unwrap_err();
        assert_eq!(
            err,
            ApplyError::IndexOutOfRange { var: VarId(0), index: 1, len: 1 }
        );
    }

    #[test]
    fn update_rejects_on_empty_vector() {
        let mut b = bank();
        let err = b
            .apply(&Op::Update { src: VarId(0), dst: VarId(0), index: 0 })
            .unwrap_err();
        assert!(matches!(err, ApplyError::IndexOutOfRange { len: 0, .. }));
    }

    #[test]
    fn take_and_drop_accept_count_equal_to_len() {
        let mut b = bank();
        push(&mut b, 0, 0);
        push(&mut b, 0, 0);
        b.apply(&Op::Take { src: VarId(0), dst: VarId(1), count: 2 })
            .unwrap();
        b.apply(&Op::Drop { src: VarId(0), dst: VarId(2), count: 2 })
            .unwrap();
        assert_eq!(b.len_of(VarId(1)).unwrap(), 2);
        assert_eq!(b.len_of(VarId(2)).unwrap(), 0);
    }

    #[test]
    fn take_rejects_count_past_len() {
        let mut b = bank();
        push(&mut b, 0, 0);
        let err = b
            .apply(&Op::Take { src: VarId(0), dst: VarId(0), count: 2 })
            .unwrap_err();
        assert_eq!(
            err,
            ApplyError::CountOutOfRange { var: VarId(0), count: 2, len: 1 }
        );
    }

    #[test]
    fn split_then_concat_recombines() {
        let mut b = bank();
        for _ in 0..5 {
            push(&mut b, 0, 0);
        }
        b.apply(&Op::Take { src: VarId(0), dst: VarId(1), count: 2 })
            .unwrap();
        b.apply(&Op::Drop { src: VarId(0), dst: VarId(2), count: 2 })
            .unwrap();
        b.apply(&Op::Concat { src: VarId(1), dst: VarId(3), src2: VarId(2) })
            .unwrap();
        assert_eq!(b.get(VarId(3)).unwrap(), b.get(VarId(0)).unwrap());
    }

    #[test]
    fn self_concat_doubles() {
        let mut b = bank();
        push(&mut b, 0, 0);
        push(&mut b, 0, 0);
        for _ in 0..4 {
            b.apply(&Op::Concat { src: VarId(0), dst: VarId(0), src2: VarId(0) })
                .unwrap();
        }
        assert_eq!(b.len_of(VarId(0)).unwrap(), 32);
    }

    #[test]
    fn rejects_out_of_range_slots() {
        let mut b = bank();
        let err = b
            .apply(&Op::PushBack { src: VarId(8), dst: VarId(0) })
            .unwrap_err();
        assert_eq!(err, ApplyError::VarOutOfRange { var: VarId(8), slot_count: 8 });

        let err = b
            .apply(&Op::PushBack { src: VarId(0), dst: VarId(200) })
            .unwrap_err();
        assert_eq!(err, ApplyError::VarOutOfRange { var: VarId(200), slot_count: 8 });
    }

    #[test]
    fn rejected_op_leaves_bank_unchanged() {
        let mut b = bank();
        push(&mut b, 0, 0);
        let before = b.lens();
        let _ = b.apply(&Op::Take { src: VarId(0), dst: VarId(1), count: 9 });
        assert_eq!(b.lens(), before);
    }

    #[test]
    fn src_equals_dst_is_fine() {
        let mut b = bank();
        push(&mut b, 2, 2);
        push(&mut b, 2, 2);
        assert_eq!(b.len_of(VarId(2)).unwrap(), 2);
    }
}
