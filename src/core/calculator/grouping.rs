//! Groups the flat punch list into one set per employee and day.

use crate::models::raw_punch::RawPunch;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub employee_id: i64,
    pub date: String,
}

/// All punches sharing employee and date, in arrival order. Never empty.
#[derive(Debug, Clone)]
pub struct DailyPunchGroup {
    pub key: GroupKey,
    pub punches: Vec<RawPunch>,
}

impl DailyPunchGroup {
    /// First punch received from the source for this day.
    pub fn first(&self) -> &RawPunch {
        &self.punches[0]
    }

    pub fn len(&self) -> usize {
        self.punches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.punches.is_empty()
    }
}

/// Groups are returned in first-seen order of their key.
pub fn group_punches(punches: &[RawPunch]) -> Vec<DailyPunchGroup> {
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<DailyPunchGroup> = Vec::new();

    for p in punches {
        let key = GroupKey {
            employee_id: p.employee_id(),
            date: p.date.clone(),
        };

        match index.get(&key) {
            Some(&i) => groups[i].punches.push(p.clone()),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(DailyPunchGroup {
                    key,
                    punches: vec![p.clone()],
                });
            }
        }
    }

    tracing::debug!(punches = punches.len(), groups = groups.len(), "punches grouped");
    groups
}
