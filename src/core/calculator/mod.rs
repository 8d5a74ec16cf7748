pub mod expected;
pub mod gaps;
pub mod grouping;
pub mod overtime;
pub mod record;
pub mod redistribute;
pub mod surplus;
