//! Benchmark inputs for the Riffle replay harness.
//!
//! Provides deterministic input generators shared by the benches:
//!
//! - [`push_fill`]: a push-only script of a given length
//! - [`mixed_workload`]: a seeded script mixing every operation kind,
//!   generated so that each operand is valid when it is applied
//! - [`doubling_growth`]: self-concatenation up to a target magnitude

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use riffle_replay::Script;

/// A script of `ops` push_back operations rotating through the bank.
pub fn push_fill(ops: usize) -> Script {
    let mut script = Script::new();
    for i in 0..ops {
        let slot = (i % 8) as u8;
        script.push_back(slot, slot);
    }
    script
}

/// A seeded script of `ops` operations mixing all five kinds.
///
/// Operands are drawn against a running length model, so a replay
/// applies every operation: the benches measure backend work, not how
/// quickly the driver rejects.
pub fn mixed_workload(seed: u64, ops: usize) -> Script {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut script = Script::new();
    let mut lens = [0u64; 8];

    for _ in 0..ops {
        let src = rng.random_range(0..8u8);
        let dst = rng.random_range(0..8u8);
        let src_len = lens[src as usize];
        match rng.random_range(0..5u8) {
            1 if src_len > 0 && src_len <= 256 => {
                let index = rng.random_range(0..src_len.min(256)) as u8;
                script.update(src, dst, index);
                lens[dst as usize] = src_len;
            }
            2 if src_len <= 255 => {
                let count = rng.random_range(0..=src_len) as u8;
                script.take(src, dst, count);
                lens[dst as usize] = u64::from(count);
            }
            3 if src_len <= 255 => {
                let count = rng.random_range(0..=src_len) as u8;
                script.drop_front(src, dst, count);
                lens[dst as usize] = src_len - u64::from(count);
            }
            4 => {
                let src2 = rng.random_range(0..8u8);
                script.concat(src, dst, src2);
                lens[dst as usize] = src_len + lens[src2 as usize];
            }
            _ => {
                script.push_back(src, dst);
                lens[dst as usize] = src_len + 1;
            }
        }
    }
    script
}

/// Seed one slot with `seed_len` elements, then double it `doublings`
/// times by self-concatenation.
pub fn doubling_growth(seed_len: usize, doublings: usize) -> Script {
    let mut script = Script::new();
    for _ in 0..seed_len {
        script.push_back(0, 0);
    }
    for _ in 0..doublings {
        script.concat(0, 0, 0);
    }
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use riffle_replay::{replay, StopReason};

    #[test]
    fn mixed_workload_applies_every_op() {
        let script = mixed_workload(7, 500);
        let report = replay(&script.encode());
        assert_eq!(report.ops_applied, 500);
        assert_eq!(report.stop, StopReason::InputExhausted);
    }

    #[test]
    fn mixed_workload_is_seed_deterministic() {
        assert_eq!(mixed_workload(3, 100).encode(), mixed_workload(3, 100).encode());
    }

    #[test]
    fn doubling_growth_reaches_expected_size() {
        let report = replay(&doubling_growth(4, 10).encode());
        assert_eq!(report.slot_lens[0], 4 << 10);
    }
}
