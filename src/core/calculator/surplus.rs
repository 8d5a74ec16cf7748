use crate::models::daily_record::Measure;

/// Balance = worked − expected. Blank worked time counts as zero.
pub fn calculate_balance(worked: Measure, expected: Option<i64>) -> Measure {
    match worked {
        Measure::Insufficient => Measure::Insufficient,
        Measure::Blank => Measure::Minutes(-expected.unwrap_or(0)),
        Measure::Minutes(w) => Measure::Minutes(w - expected.unwrap_or(0)),
    }
}
