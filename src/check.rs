//! Evaluation of a fetched state record against the caller's thresholds.
//!
//! Checks run in fixed order: unknown/unavailable state, last-updated age,
//! last-changed age. The first failure wins.

use crate::state::HaState;
use anyhow::{bail, Result};
use chrono::{DateTime, Utc};

/// Which timestamp an age check looks at
#[derive(Debug, Clone, Copy)]
enum AgeCheck {
    Updated,
    Changed,
}

impl AgeCheck {
    fn field(self) -> &'static str {
        match self {
            AgeCheck::Updated => "last_updated",
            AgeCheck::Changed => "last_changed",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            AgeCheck::Updated => "update",
            AgeCheck::Changed => "change",
        }
    }
}

/// Evaluate the state record; returns the OK summary line or the first
/// failing check as an error.
pub fn evaluate(
    state: &HaState,
    now: DateTime<Utc>,
    max_updated_age: u64,
    max_changed_age: u64,
) -> Result<String> {
    let value = state.state.to_ascii_lowercase();
    if value == "unknown" {
        bail!("{} value UNKNOWN", state.entity_id);
    }
    if value == "unavailable" {
        bail!("{} value UNAVAILABLE", state.entity_id);
    }

    check_age(state, AgeCheck::Updated, &state.last_updated, max_updated_age, now)?;
    check_age(state, AgeCheck::Changed, &state.last_changed, max_changed_age, now)?;

    Ok(format!(
        "{} | state={} last_updated={} last_changed={}",
        state.entity_id, state.state, state.last_updated, state.last_changed
    ))
}

/// Fail when `timestamp` is older than `max_age` seconds. A zero `max_age`
/// disables the check. An unparseable timestamp under an enabled check is
/// reported explicitly rather than treated as an arbitrarily large age.
fn check_age(
    state: &HaState,
    check: AgeCheck,
    timestamp: &str,
    max_age: u64,
    now: DateTime<Utc>,
) -> Result<()> {
    if max_age == 0 {
        return Ok(());
    }

    let parsed = match DateTime::parse_from_rfc3339(timestamp) {
        Ok(t) => t.with_timezone(&Utc),
        Err(_) => bail!(
            "{} has invalid {} timestamp \"{}\"",
            state.entity_id,
            check.field(),
            timestamp
        ),
    };

    let age = now.signed_duration_since(parsed).num_seconds();
    if age > max_age as i64 {
        bail!(
            "{} last {} too long ago ({}s > {}s)",
            state.entity_id,
            check.noun(),
            age,
            max_age
        );
    }

    Ok(())
}
