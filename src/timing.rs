//! Timing constants for the owning loop.
//!
//! These use `std::time::Duration`, so they live here rather than in the
//! platform-agnostic common crate.

use std::time::Duration;

/// Interval of the recurring close check.
pub const CHECK_INTERVAL: Duration = Duration::from_millis(500);

/// Longest the loop blocks waiting for window events before it looks at
/// marshalled commands again (~50 checks per second).
pub const LOOP_SLICE: Duration = Duration::from_millis(20);
