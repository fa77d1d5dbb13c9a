use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Snap thresholds and grid spacing, all in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnapConfig {
    /// Distance within which an item jumps flush to a wall.
    pub wall_threshold: f64,
    /// Distance within which an item aligns with a neighbor edge.
    pub edge_threshold: f64,
    /// Distance within which an item settles on a grid line.
    pub grid_threshold: f64,
    /// Grid spacing (one foot by default).
    pub grid_size: f64,
    /// Final rounding step applied to every axis.
    pub position_step: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            wall_threshold: 6.0,
            edge_threshold: 3.0,
            grid_threshold: 1.5,
            grid_size: 12.0,
            position_step: 1.0,
        }
    }
}

impl SnapConfig {
    /// Parse a JSON policy document; missing fields keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: SnapConfig =
            serde_json::from_str(raw).map_err(|err| PlannerError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("wallThreshold", self.wall_threshold),
            ("edgeThreshold", self.edge_threshold),
            ("gridThreshold", self.grid_threshold),
            ("gridSize", self.grid_size),
            ("positionStep", self.position_step),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(PlannerError::Config(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        if self.grid_size == 0.0 {
            return Err(PlannerError::Config("gridSize must be positive".to_string()));
        }
        if self.position_step == 0.0 {
            return Err(PlannerError::Config("positionStep must be positive".to_string()));
        }
        Ok(())
    }
}
