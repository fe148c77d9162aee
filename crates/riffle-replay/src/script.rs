//! Programmatic operation scripts and their wire encoding.
//!
//! A [`Script`] is the writer side of the harness: build operations in
//! code, [`encode`](Script::encode) them into exactly the bytes the
//! driver decodes, and feed them back through [`Driver::run`]. This is
//! how the growth and determinism suites construct inputs, and how new
//! corpus entries are minted from a reproduction.
//!
//! Encoding does not validate: a script may encode operations whose
//! operands are out of range for the bank state they will meet, in
//! which case the replay stops at that operation — the same normal
//! termination any fuzzer-mutated input gets.
//!
//! [`Driver::run`]: crate::driver::Driver::run

use riffle_core::{Op, VarId};

/// An ordered sequence of operations with a byte encoding.
///
/// # Examples
///
/// ```
/// use riffle_replay::{replay, Script};
///
/// let mut script = Script::new();
/// script.push_back(0, 0).push_back(0, 0).take(0, 1, 1);
/// let report = replay(&script.encode());
/// assert_eq!(report.ops_applied, 3);
/// assert_eq!(report.slot_lens[0], 2);
/// assert_eq!(report.slot_lens[1], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Script {
    ops: Vec<Op>,
}

impl Script {
    /// An empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// The operations in order.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the script has no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Append an already-built operation.
    pub fn push(&mut self, op: Op) -> &mut Self {
        self.ops.push(op);
        self
    }

    /// Append `dst = src.push_back(42)`.
    pub fn push_back(&mut self, src: u8, dst: u8) -> &mut Self {
        self.push(Op::PushBack { src: VarId(src), dst: VarId(dst) })
    }

    /// Append `dst = src.update(index, |x| x + 1)`.
    pub fn update(&mut self, src: u8, dst: u8, index: u8) -> &mut Self {
        self.push(Op::Update { src: VarId(src), dst: VarId(dst), index })
    }

    /// Append `dst = src.take(count)`.
    pub fn take(&mut self, src: u8, dst: u8, count: u8) -> &mut Self {
        self.push(Op::Take { src: VarId(src), dst: VarId(dst), count })
    }

    /// Append `dst = src.drop_front(count)`.
    pub fn drop_front(&mut self, src: u8, dst: u8, count: u8) -> &mut Self {
        self.push(Op::Drop { src: VarId(src), dst: VarId(dst), count })
    }

    /// Append `dst = src.concat(&src2)`.
    pub fn concat(&mut self, src: u8, dst: u8, src2: u8) -> &mut Self {
        self.push(Op::Concat { src: VarId(src), dst: VarId(dst), src2: VarId(src2) })
    }

    /// Encode the script into driver input bytes.
    ///
    /// Each operation becomes `[src][dst][tag]` followed by its operand
    /// byte, if any.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.ops.len() * 4);
        for op in &self.ops {
            buf.push(op.src().0);
            buf.push(op.dst().0);
            buf.push(op.tag().to_byte());
            match *op {
                Op::PushBack { .. } => {}
                Op::Update { index, .. } => buf.push(index),
                Op::Take { count, .. } | Op::Drop { count, .. } => buf.push(count),
                Op::Concat { src2, .. } => buf.push(src2.0),
            }
        }
        buf
    }
}
