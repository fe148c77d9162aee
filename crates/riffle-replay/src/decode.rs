//! Context-sensitive operation decoding.
//!
//! Operand validity depends on the *current* lengths of the vectors in
//! the bank — lengths that are a function of the operations already
//! applied this run, not of the byte stream alone. Decoding therefore
//! interleaves read-then-validate steps against the live bank; a
//! decoder oblivious to the bank could not validate operands at all.

use std::fmt;

use riffle_core::{Bank, Op, OpTag, PersistentSeq, VarId};

use crate::cursor::ByteCursor;

/// Why a run stopped.
///
/// Every variant is the *normal* termination tier: runs never fail, they
/// just stop decoding. Fatal conditions (backend invariant violations)
/// panic instead of producing a `StopReason`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The stream could not supply a needed byte.
    InputExhausted,
    /// A decoded slot index was outside the bank.
    VarRejected,
    /// A decoded element index or split count was out of range for the
    /// referenced vector's current length.
    OperandRejected,
    /// The tag byte was none of the five recognized operations.
    UnknownTag,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputExhausted => write!(f, "input exhausted"),
            Self::VarRejected => write!(f, "slot index out of range"),
            Self::OperandRejected => write!(f, "operand out of range"),
            Self::UnknownTag => write!(f, "unknown operation tag"),
        }
    }
}

/// Read one byte that must name a slot in `bank`.
fn read_var<S: PersistentSeq>(
    cursor: &mut ByteCursor<'_>,
    bank: &Bank<S>,
) -> Result<VarId, StopReason> {
    let var = VarId(cursor.read_u8().ok_or(StopReason::InputExhausted)?);
    if bank.contains(var) {
        Ok(var)
    } else {
        Err(StopReason::VarRejected)
    }
}

/// Read one byte that must be a valid element index for `len`.
fn read_index(cursor: &mut ByteCursor<'_>, len: u64) -> Result<u8, StopReason> {
    let idx = cursor.read_u8().ok_or(StopReason::InputExhausted)?;
    if u64::from(idx) < len {
        Ok(idx)
    } else {
        Err(StopReason::OperandRejected)
    }
}

/// Read one byte that must be a valid split count for `len`.
fn read_count(cursor: &mut ByteCursor<'_>, len: u64) -> Result<u8, StopReason> {
    let count = cursor.read_u8().ok_or(StopReason::InputExhausted)?;
    if u64::from(count) <= len {
        Ok(count)
    } else {
        Err(StopReason::OperandRejected)
    }
}

/// Decode the next operation from the stream, validated against `bank`.
///
/// Consumes between one byte (exhaustion partway through the header
/// still consumes what was read) and four bytes (a full operation with
/// operand). Never rewinds: a byte rejected by its predicate stays
/// consumed.
pub fn next_op<S: PersistentSeq>(
    cursor: &mut ByteCursor<'_>,
    bank: &Bank<S>,
) -> Result<Op, StopReason> {
    let src = read_var(cursor, bank)?;
    let dst = read_var(cursor, bank)?;
    let tag_byte = cursor.read_u8().ok_or(StopReason::InputExhausted)?;
    let tag = OpTag::from_byte(tag_byte).ok_or(StopReason::UnknownTag)?;

    // Operand ranges depend on the referenced vector's length right now,
    // after every previously applied operation.
    let src_len = bank.len_of(src).map_err(|_| StopReason::VarRejected)?;

    let op = match tag {
        OpTag::PushBack => Op::PushBack { src, dst },
        OpTag::Update => Op::Update { src, dst, index: read_index(cursor, src_len)? },
        OpTag::Take => Op::Take { src, dst, count: read_count(cursor, src_len)? },
        OpTag::Drop => Op::Drop { src, dst, count: read_count(cursor, src_len)? },
        OpTag::Concat => Op::Concat { src, dst, src2: read_var(cursor, bank)? },
    };
    Ok(op)
}
