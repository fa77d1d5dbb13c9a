//! Snap resolver: turns a raw drag position into an aligned one.
//!
//! The cascade runs per axis: clamp, wall snap, neighbor edge snap, grid
//! snap, step rounding, then a final clamp. A stage only engages on an axis
//! when every stronger stage left that axis where the clamp put it.

mod config;
mod core;

pub use config::SnapConfig;
pub use self::core::{SnapOutcome, SnapResolver, SnapStage, compute_snapped_position, find_closest_snap};
