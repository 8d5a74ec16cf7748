use crate::config::Policy;
use crate::models::daily_record::DailyRecord;

/// Fill the excess / available overtime columns of a record against the cap.
///
/// - excess: balance above the cap on a working day
/// - available: room left under the cap on a working day with a computable,
///   non-negative balance
pub fn derive_overtime(record: &mut DailyRecord, policy: &Policy) {
    let balance = record.balance_minutes();
    let expected = record.expected_minutes();
    let cap = policy.overtime_cap;

    record.excess_overtime = (expected > 0 && balance > cap).then(|| balance - cap);

    let computable = !record.balance.is_insufficient() && !record.punches.is_holiday_compensation();
    record.available_overtime =
        (expected > 0 && balance < cap && computable && balance >= 0).then(|| cap - balance);
}
