//! Adjustment pass over one employee's period.
//!
//! For every record, in chronological order:
//! 1. a break shorter than the minimum is widened by moving the first segment earlier;
//! 2. available overtime is filled from the period pool by extending the last segment;
//! 3. excess overtime is removed from the last segment.

use crate::config::Policy;
use crate::models::daily_record::DailyRecord;

/// Excess overtime minutes of a period, waiting to be handed out.
/// One pool per employee per pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OvertimePool {
    remaining: i64,
}

impl OvertimePool {
    pub fn from_records(records: &[DailyRecord]) -> Self {
        Self {
            remaining: records.iter().filter_map(|r| r.excess_overtime).sum(),
        }
    }

    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    /// Take up to `want` minutes from the pool.
    fn take(&mut self, want: i64) -> i64 {
        let give = want.min(self.remaining);
        self.remaining -= give;
        give
    }
}

pub fn redistribute(records: &mut [DailyRecord], policy: &Policy) {
    let mut pool = OvertimePool::from_records(records);
    tracing::debug!(pool = pool.remaining(), records = records.len(), "redistribution started");

    for record in records.iter_mut() {
        normalize_break(record, policy);
        distribute_overtime(record, &mut pool);
        reclaim_excess(record);
    }

    tracing::debug!(pool = pool.remaining(), "redistribution finished");
}

fn normalize_break(record: &mut DailyRecord, policy: &Policy) {
    let current = record.break_minutes.unwrap_or(0);
    if current >= policy.min_break || record.punches.segment_count() < 2 {
        return;
    }

    let shortfall = policy.min_break - current;
    let shifted = record
        .punches
        .segments_mut()
        .and_then(|s| s.first_mut())
        .is_some_and(|first| first.shift(-shortfall));

    if shifted {
        record.break_minutes = Some(policy.normalized_break);
        record.adjusted = true;
        tracing::debug!(date = %record.date, shortfall, "break normalized");
    }
}

fn distribute_overtime(record: &mut DailyRecord, pool: &mut OvertimePool) {
    let Some(want) = record.available_overtime else {
        return;
    };
    if pool.remaining() <= 0 {
        return;
    }

    // peek first: a day whose last segment cannot move keeps the pool intact
    let give = want.min(pool.remaining());
    let extended = record
        .punches
        .segments_mut()
        .and_then(|s| s.last_mut())
        .is_some_and(|last| last.extend_end(give));

    if extended {
        pool.take(give);
        let left = want - give;
        record.available_overtime = (left > 0).then_some(left);
        record.adjusted = true;
        tracing::debug!(date = %record.date, give, left, "overtime distributed");
    }
}

fn reclaim_excess(record: &mut DailyRecord) {
    let Some(excess) = record.excess_overtime else {
        return;
    };

    let shrunk = record
        .punches
        .segments_mut()
        .and_then(|s| s.last_mut())
        .is_some_and(|last| last.extend_end(-excess));

    if shrunk {
        record.excess_overtime = None;
        record.adjusted = true;
        tracing::debug!(date = %record.date, excess, "excess overtime reclaimed");
    }
}
