//! Nagios plugin output and exit codes.
//!
//! The plugin only ever reports OK or CRITICAL; every failure path,
//! configuration or network or check, collapses to CRITICAL.

use anyhow::Result;

/// Exit code for success
pub const EXIT_OK: i32 = 0;

/// Exit code for critical failures (the only failure code this plugin uses)
pub const EXIT_CRITICAL: i32 = 2;

/// Print the status line for an outcome and return the exit code
pub fn report(outcome: Result<String>) -> i32 {
    match outcome {
        Ok(message) => {
            println!("OK - {}", message);
            EXIT_OK
        }
        Err(e) => {
            // {:#} flattens the anyhow context chain onto one line
            println!("CRITICAL - {:#}", e);
            EXIT_CRITICAL
        }
    }
}
