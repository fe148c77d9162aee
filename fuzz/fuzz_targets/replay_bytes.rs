//! Fuzz target for the replay driver.
//!
//! Feeds raw bytes straight into [`riffle::replay`]. The driver owns
//! the recoverable tier, so any input must come back as a clean report;
//! a crash here is the backend faulting on a structurally valid
//! operation sequence, which is exactly the signal being hunted.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let report = riffle::replay(data);

    // A returned report is by construction a clean run.
    assert_eq!(report.status(), 0);
    assert!(report.bytes_consumed <= data.len());
    assert_eq!(report.slot_lens.len(), 8);
});
