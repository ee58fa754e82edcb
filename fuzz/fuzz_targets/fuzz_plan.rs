//! Fuzz target for numbering plan loading.
//!
//! Malformed plans must be rejected with an error, never a panic. Plans
//! that load must be usable.

#![no_main]

use jp_phone::{NumberingPlan, PhoneNumberFormatter};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(plan) = NumberingPlan::from_json_str(data) {
        let formatter = PhoneNumberFormatter::new(&plan);
        for code in plan.area_codes() {
            let probe = format!("{}{}", code.code(), "2".repeat(12));
            let _ = formatter.format(probe.as_str());
        }
    }
});
