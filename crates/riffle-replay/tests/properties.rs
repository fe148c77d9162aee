//! Property coverage for the replay driver.
//!
//! The driver must terminate cleanly on *any* byte input — that is the
//! whole recoverable tier — and its report must stay internally
//! consistent with the input that produced it.

use proptest::prelude::*;
use riffle_replay::{replay, Driver, ReplayConfig, Script, StopReason, HEADER_BYTES};

proptest! {
    #[test]
    fn any_input_terminates_cleanly(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let report = replay(&data);
        prop_assert_eq!(report.status(), 0);
        prop_assert!(report.bytes_consumed <= data.len());
        // Each applied operation consumes at least its 3-byte header.
        prop_assert!(report.ops_applied * HEADER_BYTES as u64 <= data.len() as u64);
        prop_assert_eq!(report.slot_lens.len(), 8);
    }

    #[test]
    fn replay_is_a_pure_function_of_its_input(
        data in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        prop_assert_eq!(replay(&data), replay(&data));
    }

    #[test]
    fn sub_header_inputs_apply_nothing(data in prop::collection::vec(any::<u8>(), 0..3)) {
        let report = replay(&data);
        prop_assert_eq!(report.ops_applied, 0);
        prop_assert!(report.slot_lens.iter().all(|&len| len == 0));
    }

    #[test]
    fn trace_grows_one_line_per_op(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let config = ReplayConfig { trace_enabled: true, ..Default::default() };
        let driver = Driver::new(config).unwrap();
        let report = driver.run(&data);
        prop_assert_eq!(report.trace.len() as u64, 8 + report.ops_applied);
    }

    #[test]
    fn in_range_push_scripts_apply_fully(
        pairs in prop::collection::vec((0u8..8, 0u8..8), 1..64),
    ) {
        // Push-only scripts have no data-dependent operands, so every
        // operation must decode and apply.
        let mut script = Script::new();
        for &(src, dst) in &pairs {
            script.push_back(src, dst);
        }
        let report = replay(&script.encode());
        prop_assert_eq!(report.ops_applied, pairs.len() as u64);
        prop_assert_eq!(report.stop, StopReason::InputExhausted);
    }
}

/// Model-based check: replay a random but *always-valid* script and
/// compare the final slot lengths against plain u64 size arithmetic.
mod model {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// Generate a script whose every operand is valid for the bank
    /// state it will meet, tracking predicted slot lengths as we go.
    fn valid_script(seed: u64, ops: usize) -> (Script, Vec<u64>) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut script = Script::new();
        let mut lens = vec![0u64; 8];

        for _ in 0..ops {
            let src = rng.random_range(0..8u8);
            let dst = rng.random_range(0..8u8);
            let src_len = lens[src as usize];
            match rng.random_range(0..5u8) {
                0 => {
                    script.push_back(src, dst);
                    lens[dst as usize] = src_len + 1;
                }
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
                // Operand would not fit the wire format; push instead.
                _ => {
                    script.push_back(src, dst);
                    lens[dst as usize] = src_len + 1;
                }
            }
        }
        (script, lens)
    }

    #[test]
    fn predicted_sizes_match_replayed_sizes() {
        for seed in 0..16u64 {
            let (script, predicted) = valid_script(seed, 400);
            let report = replay(&script.encode());
            assert_eq!(
                report.ops_applied,
                script.len() as u64,
                "seed {seed}: a generated operand was rejected"
            );
            assert_eq!(report.slot_lens, predicted, "seed {seed}");
        }
    }
}
