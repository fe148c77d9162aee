//! The operation record decoded from the input stream.
//!
//! An [`Op`] is ephemeral: decoded, applied to the bank, and discarded.
//! Its `Display` rendering is the trace line format — one Rust-flavored
//! statement per operation, so a captured trace reads as a reproduction
//! program.

use std::fmt;

use crate::id::VarId;

/// The value appended by every `PushBack`.
///
/// A fixed sentinel, matching the historical corpus: element values are
/// irrelevant to the structural defects under test, only sizes and
/// indices matter, so every push appends the same constant.
pub const PUSH_VALUE: i64 = 42;

/// The per-run element transform applied by `Update`.
///
/// Deliberately trivial (increment); the point of `Update` is to force
/// path copying at a given index, not to compute anything.
pub fn bump(x: i64) -> i64 {
    x + 1
}

// ── Operation tag ───────────────────────────────────────────────

/// Wire discriminant for an operation, one byte on the stream.
///
/// The five valid values are stable: they are what the embedded
/// regression corpus was recorded against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpTag {
    /// Append the sentinel value to the source vector.
    PushBack = 0,
    /// Apply [`bump`] at a decoded element index.
    Update = 1,
    /// Keep the first `count` elements.
    Take = 2,
    /// Discard the first `count` elements.
    Drop = 3,
    /// Concatenate the source with a second source vector.
    Concat = 4,
}

impl OpTag {
    /// Decode a tag byte. Returns `None` for the 251 unused values,
    /// which the driver treats as end of usable input.
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            0 => Some(Self::PushBack),
            1 => Some(Self::Update),
            2 => Some(Self::Take),
            3 => Some(Self::Drop),
            4 => Some(Self::Concat),
            _ => None,
        }
    }

    /// The wire byte for this tag.
    pub fn to_byte(self) -> u8 {
        self as u8
    }
}

// ── Operation record ────────────────────────────────────────────

/// A single decoded operation against the variable bank.
///
/// Every variant reads from `src` and writes the result into `dst`
/// (which may be the same slot). Operand widths match the wire format:
/// element indices and split counts are single bytes.
///
/// # Examples
///
/// ```
/// use riffle_core::{Op, VarId};
///
/// let op = Op::PushBack { src: VarId(0), dst: VarId(2) };
/// assert_eq!(op.to_string(), "var2 = var0.push_back(42);");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// `dst = src.push_back(PUSH_VALUE)`.
    PushBack {
        /// Source slot.
        src: VarId,
        /// Destination slot.
        dst: VarId,
    },
    /// `dst = src.update(index, bump)`. `index` must be `< len(src)`.
    Update {
        /// Source slot.
        src: VarId,
        /// Destination slot.
        dst: VarId,
        /// Element index into the source vector.
        index: u8,
    },
    /// `dst = src.take(count)`. `count` must be `<= len(src)`.
    Take {
        /// Source slot.
        src: VarId,
        /// Destination slot.
        dst: VarId,
        /// Number of leading elements to keep.
        count: u8,
    },
    /// `dst = src.drop_front(count)`. `count` must be `<= len(src)`.
    Drop {
        /// Source slot.
        src: VarId,
        /// Destination slot.
        dst: VarId,
        /// Number of leading elements to discard.
        count: u8,
    },
    /// `dst = src.concat(&src2)`.
    Concat {
        /// First source slot.
        src: VarId,
        /// Destination slot.
        dst: VarId,
        /// Second source slot.
        src2: VarId,
    },
}

impl Op {
    /// The slot this operation reads from.
    pub fn src(&self) -> VarId {
        match *self {
            Self::PushBack { src, .. }
            | Self::Update { src, .. }
            | Self::Take { src, .. }
            | Self::Drop { src, .. }
            | Self::Concat { src, .. } => src,
        }
    }

    /// The slot this operation writes to.
    pub fn dst(&self) -> VarId {
        match *self {
            Self::PushBack { dst, .. }
            | Self::Update { dst, .. }
            | Self::Take { dst, .. }
            | Self::Drop { dst, .. }
            | Self::Concat { dst, .. } => dst,
        }
    }

    /// The wire tag for this operation.
    pub fn tag(&self) -> OpTag {
        match self {
            Self::PushBack { .. } => OpTag::PushBack,
            Self::Update { .. } => OpTag::Update,
            Self::Take { .. } => OpTag::Take,
            Self::Drop { .. } => OpTag::Drop,
            Self::Concat { .. } => OpTag::Concat,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::PushBack { src, dst } => {
                write!(f, "var{dst} = var{src}.push_back({PUSH_VALUE});")
            }
            Self::Update { src, dst, index } => {
                write!(f, "var{dst} = var{src}.update({index}, |x| x + 1);")
            }
            Self::Take { src, dst, count } => {
                write!(f, "var{dst} = var{src}.take({count});")
            }
            Self::Drop { src, dst, count } => {
                write!(f, "var{dst} = var{src}.drop_front({count});")
            }
            Self::Concat { src, dst, src2 } => {
                write!(f, "var{dst} = var{src}.concat(&var{src2});")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_roundtrip_valid_values() {
        for b in 0..=4u8 {
            let tag = OpTag::from_byte(b).unwrap();
            assert_eq!(tag.to_byte(), b);
        }
    }

    #[test]
    fn tag_rejects_unused_values() {
        for b in 5..=255u8 {
            assert_eq!(OpTag::from_byte(b), None);
        }
    }

    #[test]
    fn display_matches_trace_format() {
        let cases: [(Op, &str); 5] = [
            (
                Op::PushBack { src: VarId(0), dst: VarId(1) },
                "var1 = var0.push_back(42);",
            ),
            (
                Op::Update { src: VarId(2), dst: VarId(2), index: 7 },
                "var2 = var2.update(7, |x| x + 1);",
            ),
            (
                Op::Take { src: VarId(3), dst: VarId(0), count: 5 },
                "var0 = var3.take(5);",
            ),
            (
                Op::Drop { src: VarId(1), dst: VarId(4), count: 0 },
                "var4 = var1.drop_front(0);",
            ),
            (
                Op::Concat { src: VarId(0), dst: VarId(1), src2: VarId(0) },
                "var1 = var0.concat(&var0);",
            ),
        ];
        for (op, expected) in cases {
            assert_eq!(op.to_string(), expected);
        }
    }

    #[test]
    fn src_dst_accessors() {
        let op = Op::Concat { src: VarId(3), dst: VarId(5), src2: VarId(7) };
        assert_eq!(op.src(), VarId(3));
        assert_eq!(op.dst(), VarId(5));
        assert_eq!(op.tag(), OpTag::Concat);
    }
}
