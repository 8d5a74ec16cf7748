use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentReason {
    #[serde(default)]
    pub description: String,
}

/// One clock-in/clock-out record as delivered by the punch source.
///
/// `date_in` / `date_out` are epoch milliseconds; either may be missing when
/// the employee forgot to punch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPunch {
    pub employee: Employee,
    pub date: String, // ⇔ "YYYY-MM-DD"
    pub date_in: Option<i64>,
    pub date_out: Option<i64>,
    #[serde(default)]
    pub adjust: bool,
    #[serde(default)]
    pub adjustment_reason: Option<AdjustmentReason>,
}

impl RawPunch {
    pub fn employee_id(&self) -> i64 {
        self.employee.id
    }

    pub fn is_complete(&self) -> bool {
        self.date_in.is_some() && self.date_out.is_some()
    }

    /// Milliseconds between clock-in and clock-out, if both are present.
    pub fn duration_ms(&self) -> Option<i64> {
        match (self.date_in, self.date_out) {
            (Some(i), Some(o)) => Some(o - i),
            _ => None,
        }
    }

    /// True when the source marks this punch as a holiday compensation adjustment.
    pub fn is_holiday_compensation(&self, marker: &str) -> bool {
        self.adjust
            && self
                .adjustment_reason
                .as_ref()
                .is_some_and(|r| r.description == marker)
    }
}
