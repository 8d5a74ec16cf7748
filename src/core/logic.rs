use crate::config::Policy;
use crate::core::calculator::{gaps, grouping, overtime, record, redistribute};
use crate::errors::AppResult;
use crate::models::{daily_record::DailyRecord, raw_punch::RawPunch, reconciliation::Reconciliation};
use std::collections::HashSet;

pub struct Core;

impl Core {
    /// Pre-adjustment table: one record per employee/day, with break and
    /// overtime columns filled, in first-seen order.
    pub fn build_records(
        punches: &[RawPunch],
        holidays: &[String],
        policy: &Policy,
    ) -> AppResult<Vec<DailyRecord>> {
        let holidays: HashSet<String> = holidays.iter().map(|h| h.trim().to_string()).collect();

        grouping::group_punches(punches)
            .iter()
            .map(|group| {
                let mut rec = record::build_record(group, &holidays, policy)?;
                rec.break_minutes = gaps::analyze_break(&rec.punches_text(), policy);
                overtime::derive_overtime(&mut rec, policy);
                Ok(rec)
            })
            .collect()
    }

    /// Adjusted copy of one employee's records. The input must belong to a
    /// single employee; records are processed in chronological order.
    pub fn adjust(records: &[DailyRecord], policy: &Policy) -> Vec<DailyRecord> {
        let mut adjusted = records.to_vec();
        adjusted.sort_by_key(|r| r.date);
        redistribute::redistribute(&mut adjusted, policy);
        adjusted
    }

    /// Full pipeline. Every employee gets an independent redistribution pass.
    pub fn reconcile(
        punches: &[RawPunch],
        holidays: &[String],
        policy: &Policy,
    ) -> AppResult<Vec<Reconciliation>> {
        let records = Self::build_records(punches, holidays, policy)?;

        let mut out: Vec<Reconciliation> = Vec::new();
        for rec in records {
            match out.iter_mut().find(|r| r.employee_id == rec.employee_id) {
                Some(r) => r.pre_adjustment.push(rec),
                None => out.push(Reconciliation {
                    employee_id: rec.employee_id,
                    employee_name: rec.employee_name.clone(),
                    pre_adjustment: vec![rec],
                    adjusted: Vec::new(),
                }),
            }
        }

        for r in &mut out {
            r.pre_adjustment.sort_by_key(|rec| rec.date);
            r.adjusted = Self::adjust(&r.pre_adjustment, policy);
            tracing::info!(
                employee = r.employee_id,
                days = r.pre_adjustment.len(),
                adjusted = r.adjusted_count(),
                "employee reconciled"
            );
        }

        Ok(out)
    }
}
