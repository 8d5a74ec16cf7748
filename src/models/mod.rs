pub mod daily_record;
pub mod punches;
pub mod raw_punch;
pub mod reconciliation;
