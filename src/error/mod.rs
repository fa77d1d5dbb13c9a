//! Error taxonomy for the planner core.

mod types;

pub use types::{FormatError, PlannerError, ReadError, Result};
