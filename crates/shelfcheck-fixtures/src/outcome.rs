//! Outcome-wrapping markers for known defects and flaky behavior
//!
//! The system under test has documented bugs (deleted resources still
//! retrievable, duplicate-ID creates accepted, and so on). Tests covering
//! them run the assertion block through [`expect_defect`]: a panic inside
//! the block means the defect is still present and the test passes; a
//! clean run means the defect was silently fixed, and the marker fails
//! loudly so it gets removed. [`flaky`] swallows both outcomes for the
//! handful of cases with suspected eventual-consistency behavior, while
//! still recording what happened.

use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::{info, warn};

/// Run a block that is expected to fail against the current system under
/// test
///
/// # Panics
/// Panics if the block unexpectedly passes - the tripwire for a silently
/// fixed defect.
#[allow(clippy::panic)]
pub fn expect_defect<F>(reason: &str, body: F)
where
    F: FnOnce(),
{
    match catch_unwind(AssertUnwindSafe(body)) {
        Err(cause) => {
            info!(
                reason,
                failure = %panic_message(cause.as_ref()),
                "known defect still present"
            );
        }
        Ok(()) => panic!(
            "expected failure but the block passed; the defect appears fixed, \
             remove this marker: {reason}"
        ),
    }
}

/// Run a block with a known non-deterministic outcome
///
/// Neither outcome fails the run; both are recorded for follow-up.
pub fn flaky<F>(reason: &str, body: F)
where
    F: FnOnce(),
{
    match catch_unwind(AssertUnwindSafe(body)) {
        Ok(()) => info!(reason, "flaky block passed this run"),
        Err(cause) => warn!(
            reason,
            failure = %panic_message(cause.as_ref()),
            "flaky block failed this run (not gating)"
        ),
    }
}

fn panic_message(cause: &(dyn std::any::Any + Send)) -> String {
    cause
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| cause.downcast_ref::<&str>().map(ToString::to_string))
        .unwrap_or_else(|| "<non-string panic payload>".to_string())
}
