//! Strongly-typed slot identifiers.

use std::fmt;

/// Identifies a slot in the variable bank.
///
/// Slot indices are decoded from single bytes of the input stream, so
/// banks are limited to 255 slots. `VarId(n)` names the n-th slot;
/// whether it is in range for a given bank depends on that bank's
/// configured slot count and is checked at apply time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(pub u8);

impl VarId {
    /// The slot index as a `usize`, for direct indexing.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for VarId {
    fn from(v: u8) -> Self {
        Self(v)
    }
}
