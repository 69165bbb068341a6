//! Validated clearance records and the value types they are built from.

pub mod clearance;
pub mod types;
