//! Core types for the Riffle persistent-vector replay harness.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Riffle workspace:
//! slot identifiers, the operation record, the [`PersistentSeq`] backend
//! trait, the default [`FlexVector`] backend, and the variable bank.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod id;
pub mod op;
pub mod seq;
pub mod vector;

pub use bank::Bank;
pub use error::ApplyError;
pub use id::VarId;
pub use op::{Op, OpTag, PUSH_VALUE};
pub use seq::PersistentSeq;
pub use vector::FlexVector;
