//! Byte-stream operation replay for the Riffle harness.
//!
//! Turns an opaque byte buffer into a deterministic sequence of typed
//! operations against a bank of persistent vectors, validating every
//! operand against the bank's *current* state before use. This is the
//! model-based fuzz driver shape: the input grammar is context-sensitive
//! with respect to the evolving bank, so decoding and validation are
//! interleaved rather than split into parse-then-execute phases.
//!
//! # Architecture
//!
//! - [`Driver`] decodes and applies operations, producing a [`RunReport`]
//! - [`ByteCursor`] is the monotonic, consume-once reader over the input
//! - [`Script`] encodes operations back into driver input (the inverse
//!   of decoding, for building corpus entries and tests)
//! - [`corpus`] embeds the named historical crash reproductions
//!
//! # Wire format
//!
//! ```text
//! [src u8] [dst u8] [tag u8] [operand u8]*
//! ```
//!
//! One operand byte for update/take/drop (element index or split count),
//! one for concat (second source slot), none for push_back. There is no
//! header and no framing: any byte slice is a valid input, and running
//! out of bytes mid-operation is the normal way a run ends.
//!
//! # Failure tiers
//!
//! Exhausted input and rejected operands terminate a run *normally* — a
//! [`RunReport`] is only ever a clean (status 0) outcome. Invariant
//! violations inside the vector backend are deliberately not caught;
//! producing such an abort is the harness's purpose.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod corpus;
pub mod cursor;
pub mod decode;
pub mod driver;
pub mod script;

pub use config::{ConfigError, ReplayConfig};
pub use corpus::{scenario, scenarios, Scenario};
pub use cursor::ByteCursor;
pub use decode::StopReason;
pub use driver::{replay, Driver, RunReport};
pub use script::Script;

/// Number of bytes in an operation header (`src`, `dst`, tag).
///
/// Inputs shorter than this can never apply an operation.
pub const HEADER_BYTES: usize = 3;
