use crate::models::daily_record::DailyRecord;

/// Both views of one employee's period.
#[derive(Debug, Default, Clone)]
pub struct Reconciliation {
    pub employee_id: i64,
    pub employee_name: String,
    pub pre_adjustment: Vec<DailyRecord>,
    pub adjusted: Vec<DailyRecord>,
}

impl Reconciliation {
    pub fn adjusted_count(&self) -> usize {
        self.adjusted.iter().filter(|r| r.adjusted).count()
    }
}
