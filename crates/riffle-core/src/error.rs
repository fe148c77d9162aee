//! Error types for bank operations.

use std::error::Error;
use std::fmt;

use crate::id::VarId;

/// Errors detected while applying an [`Op`](crate::op::Op) to a
/// [`Bank`](crate::bank::Bank).
///
/// These are the recoverable tier: a rejected operand means the
/// operation (and, during replay, the whole run) stops normally.
/// Invariant violations *inside* the vector backend are the fatal tier
/// and surface as panics, never as `ApplyError`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplyError {
    /// A slot index is outside the bank.
    VarOutOfRange {
        /// The rejected slot index.
        var: VarId,
        /// Number of slots in the bank.
        slot_count: u8,
    },
    /// An `Update` element index is outside the source vector.
    IndexOutOfRange {
        /// The slot whose vector was indexed.
        var: VarId,
        /// The rejected element index.
        index: u64,
        /// Length of the vector at apply time.
        len: u64,
    },
    /// A `Take`/`Drop` split count exceeds the source vector's length.
    CountOutOfRange {
        /// The slot whose vector was split.
        var: VarId,
        /// The rejected split count.
        count: u64,
        /// Length of the vector at apply time.
        len: u64,
    },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VarOutOfRange { var, slot_count } => {
                write!(f, "slot var{var} outside bank of {slot_count} slots")
            }
            Self::IndexOutOfRange { var, index, len } => {
                write!(f, "index {index} outside var{var} of length {len}")
            }
            Self::CountOutOfRange { var, count, len } => {
                write!(f, "split count {count} exceeds var{var} length {len}")
            }
        }
    }
}

impl Error for ApplyError {}
