use std::sync::{Arc, Mutex};

use crate::logging::Logger;
use crate::metrics::EditorMetrics;
use crate::snap::SnapConfig;

pub const DEFAULT_UNDO_CAPACITY: usize = 100;

/// Configuration knobs for a [`LayoutEditor`](super::LayoutEditor).
#[derive(Clone)]
pub struct EditorConfig {
    /// Snap thresholds and grid used while dragging.
    pub snap: SnapConfig,
    /// Maximum number of undo snapshots retained.
    pub undo_capacity: usize,
    /// Optional structured logger used by the editor.
    pub logger: Option<Logger>,
    /// Metrics accumulator shared with the host.
    pub metrics: Option<Arc<Mutex<EditorMetrics>>>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            snap: SnapConfig::default(),
            undo_capacity: DEFAULT_UNDO_CAPACITY,
            logger: None,
            metrics: None,
        }
    }
}

impl EditorConfig {
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_snap(mut self, snap: SnapConfig) -> Self {
        self.snap = snap;
        self
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(EditorMetrics::new())));
        }
    }

    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    pub fn metrics_handle(&self) -> Option<Arc<Mutex<EditorMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}
