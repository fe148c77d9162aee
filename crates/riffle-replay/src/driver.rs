//! The operation replay driver.
//!
//! One [`Driver::run`] call is one complete harness invocation: fresh
//! bank, fresh cursor, single pass over the input, [`RunReport`] out.
//! Nothing outlives the call.

use std::io::{self, Write};

use riffle_core::{Bank, FlexVector, PersistentSeq};

use crate::config::{ConfigError, ReplayConfig};
use crate::cursor::ByteCursor;
use crate::decode::{next_op, StopReason};

/// The outcome of one clean run.
///
/// A report is only produced for clean terminations — both failure
/// tiers that could prevent one behave differently. Recoverable
/// conditions (exhausted input, rejected operands) *are* clean
/// termination and land in [`stop`](Self::stop); fatal conditions
/// (backend invariant violations) panic through [`Driver::run`] and no
/// report exists. A run that yields a report therefore has status 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Operations decoded, validated, and applied.
    pub ops_applied: u64,
    /// Bytes consumed from the input, including the bytes of the final
    /// rejected or truncated operation.
    pub bytes_consumed: usize,
    /// Why decoding stopped.
    pub stop: StopReason,
    /// Final length of each bank slot, in slot order.
    pub slot_lens: Vec<u64>,
    /// Rendered trace lines, empty unless the config enabled tracing.
    /// The first `variable_count` lines declare the slots; each later
    /// line is one applied operation.
    pub trace: Vec<String>,
}

impl RunReport {
    /// The integer status of the run: always 0.
    ///
    /// Kept so corpus checks read like the historical reproductions
    /// (`assert_eq!(replay(input).status(), 0)`); a nonzero status is
    /// unrepresentable because faults abort instead of returning.
    pub fn status(&self) -> i32 {
        0
    }

    /// Write the trace, one line each, to `w`.
    pub fn write_trace(&self, w: &mut dyn Write) -> io::Result<()> {
        for line in &self.trace {
            writeln!(w, "{line}")?;
        }
        Ok(())
    }
}

/// Replays byte-stream operation scripts against a fresh bank per run.
///
/// # Examples
///
/// ```
/// use riffle_replay::{Driver, ReplayConfig, StopReason};
///
/// let config = ReplayConfig { trace_enabled: true, ..Default::default() };
/// let driver = Driver::new(config).unwrap();
///
/// // push_back var0 -> var0, then update index 0 of var0 -> var1.
/// let report = driver.run(&[0, 0, 0, 0, 1, 1, 0]);
/// assert_eq!(report.ops_applied, 2);
/// assert_eq!(report.stop, StopReason::InputExhausted);
/// assert_eq!(report.slot_lens[0], 1);
/// assert_eq!(report.trace[8], "var0 = var0.push_back(42);");
/// ```
#[derive(Clone, Debug)]
pub struct Driver {
    config: ReplayConfig,
}

impl Driver {
    /// Create a driver, validating the configuration.
    pub fn new(config: ReplayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &ReplayConfig {
        &self.config
    }

    /// Run `data` against the default [`FlexVector`] backend.
    pub fn run(&self, data: &[u8]) -> RunReport {
        self.run_with::<FlexVector>(data)
    }

    /// Run `data` against any [`PersistentSeq`] backend.
    ///
    /// Single pass: decode an operation (validated against the bank's
    /// current state), apply it, repeat until the stream cannot supply
    /// a valid operation. Backend panics propagate.
    pub fn run_with<S: PersistentSeq>(&self, data: &[u8]) -> RunReport {
        let mut bank: Bank<S> = Bank::new(self.config.variable_count, self.config.branching_bits);
        let mut cursor = ByteCursor::new(data);
        let mut trace = Vec::new();
        let mut ops_applied = 0u64;

        if self.config.trace_enabled {
            for slot in 0..self.config.variable_count {
                trace.push(format!("let mut var{slot}: Vector<i64> = Vector::new();"));
            }
        }

        let stop = loop {
            match next_op(&mut cursor, &bank) {
                Ok(op) => {
                    // Decode already validated every operand against the
                    // current bank, so apply cannot reject here.
                    match bank.apply(&op) {
                        Ok(()) => {
                            if self.config.trace_enabled {
                                trace.push(op.to_string());
                            }
                            ops_applied += 1;
                        }
                        Err(_) => break StopReason::OperandRejected,
                    }
                }
                Err(reason) => break reason,
            }
        };

        RunReport {
            ops_applied,
            bytes_consumed: cursor.position(),
            stop,
            slot_lens: bank.lens(),
            trace,
        }
    }
}

/// Replay `data` with the default configuration and backend.
///
/// The entry point used by the fuzz target and the regression corpus:
/// default config is statically valid, so this cannot fail — it either
/// returns a clean report or the backend aborts the process.
pub fn replay(data: &[u8]) -> RunReport {
    let driver = Driver { config: ReplayConfig::default() };
    driver.run(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HEADER_BYTES;

    #[test]
    fn empty_input_reports_clean() {
        let report = replay(&[]);
        assert_eq!(report.ops_applied, 0);
        assert_eq!(report.bytes_consumed, 0);
        assert_eq!(report.stop, StopReason::InputExhausted);
        assert_eq!(report.slot_lens, vec![0; 8]);
        assert_eq!(report.status(), 0);
    }

    #[test]
    fn inputs_below_header_size_apply_nothing() {
        for len in 0..HEADER_BYTES {
            let data = vec![0u8; len];
            let report = replay(&data);
            assert_eq!(report.ops_applied, 0, "input of {len} bytes");
            assert_eq!(report.stop, StopReason::InputExhausted);
        }
    }

    #[test]
    fn single_push_back() {
        let report = replay(&[0, 1, 0]);
        assert_eq!(report.ops_applied, 1);
        assert_eq!(report.bytes_consumed, 3);
        assert_eq!(report.slot_lens[1], 1);
        assert_eq!(report.slot_lens[0], 0);
    }

    #[test]
    fn later_operands_validated_against_evolved_state() {
        // Two pushes into var0, then an update at index 1 — valid only
        // because the pushes happened first.
        let data = [0, 0, 0, 0, 0, 0, 0, 0, 1, 1];
        let report = replay(&data);
        assert_eq!(report.ops_applied, 3);
        assert_eq!(report.slot_lens[0], 2);
    }

    #[test]
    fn out_of_range_slot_ends_run() {
        let report = replay(&[0, 0, 0, 9, 0, 0]);
        assert_eq!(report.ops_applied, 1);
        assert_eq!(report.stop, StopReason::VarRejected);
        // src byte of the second op was consumed, nothing after it.
        assert_eq!(report.bytes_consumed, 4);
    }

    #[test]
    fn unknown_tag_ends_run() {
        let report = replay(&[0, 0, 0, 0, 0, 200]);
        assert_eq!(report.ops_applied, 1);
        assert_eq!(report.stop, StopReason::UnknownTag);
    }

    #[test]
    fn trace_disabled_by_default() {
        let report = replay(&[0, 0, 0]);
        assert!(report.trace.is_empty());
    }

    #[test]
    fn trace_declares_slots_then_one_line_per_op() {
        let config = ReplayConfig {
            variable_count: 2,
            trace_enabled: true,
            ..Default::default()
        };
        let driver = Driver::new(config).unwrap();
        let report = driver.run(&[0, 1, 0, 1, 0, 0]);
        assert_eq!(report.ops_applied, 2);
        assert_eq!(
            report.trace,
            vec![
                "let mut var0: Vector<i64> = Vector::new();".to_string(),
                "let mut var1: Vector<i64> = Vector::new();".to_string(),
                "var1 = var0.push_back(42);".to_string(),
                "var0 = var1.push_back(42);".to_string(),
            ]
        );

        let mut rendered = Vec::new();
        report.write_trace(&mut rendered).unwrap();
        let text = String::from_utf8(rendered).unwrap();
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn variable_count_bounds_decodable_slots() {
        let config = ReplayConfig { variable_count: 1, ..Default::default() };
        let driver = Driver::new(config).unwrap();
        // Slot 1 does not exist in a 1-slot bank.
        let report = driver.run(&[0, 1, 0]);
        assert_eq!(report.ops_applied, 0);
        assert_eq!(report.stop, StopReason::VarRejected);
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let config = ReplayConfig { variable_count: 0, ..Default::default() };
        assert!(Driver::new(config).is_err());
    }

    #[test]
    fn identical_inputs_yield_identical_reports() {
        let data: Vec<u8> = (0..200u8).collect();
        let config = ReplayConfig { trace_enabled: true, ..Default::default() };
        let driver = Driver::new(config).unwrap();
        assert_eq!(driver.run(&data), driver.run(&data));
    }
}
