//! Riffle: a fuzz-input replay harness for persistent vectors.
//!
//! Riffle turns an opaque byte buffer into a program over a fixed bank
//! of persistent-vector variables and runs it. Bytes that decode into
//! valid operations are applied; the first byte sequence that does not
//! ends the run cleanly. The only failure worth reporting is the one a
//! backend signals itself, by panicking out of the run.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Riffle sub-crates. For most users, adding `riffle` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use riffle::prelude::*;
//!
//! // Build an input in code, replay it, inspect the outcome.
//! let mut script = Script::new();
//! script.push_back(0, 0).push_back(0, 0).concat(0, 1, 0);
//! let report = replay(&script.encode());
//!
//! assert_eq!(report.status(), 0);
//! assert_eq!(report.ops_applied, 3);
//! assert_eq!(report.slot_lens[1], 4);
//!
//! // Arbitrary bytes terminate cleanly too.
//! let report = replay(&[9, 0, 0, 0, 0]);
//! assert_eq!(report.stop, StopReason::VarRejected);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `riffle-core` | Operations, the variable bank, the backend trait |
//! | [`replay_harness`] | `riffle-replay` | Decoding, the driver, scripts, the regression corpus |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Operations, the variable bank, and the backend trait (`riffle-core`).
///
/// Implement [`types::PersistentSeq`] here to put a new vector
/// implementation under the harness.
pub use riffle_core as types;

/// Byte decoding, the replay driver, scripts, and the regression
/// corpus (`riffle-replay`).
pub use riffle_replay as replay_harness;

pub use riffle_replay::replay;

/// Common imports for typical Riffle usage.
///
/// ```rust
/// use riffle::prelude::*;
/// ```
pub mod prelude {
    pub use riffle_core::{Bank, FlexVector, Op, OpTag, PersistentSeq, VarId, PUSH_VALUE};
    pub use riffle_replay::{
        replay, scenario, scenarios, Driver, ReplayConfig, RunReport, Scenario, Script,
        StopReason,
    };
}
