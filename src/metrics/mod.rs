use crate::logging::{LogEvent, LogFields, LogLevel};
use crate::snap::SnapStage;
use serde_json::json;
use std::time::Duration;

/// Editor activity counters. All counts saturate instead of wrapping.
#[derive(Debug, Default, Clone)]
pub struct EditorMetrics {
    drags_started: u64,
    drags_committed: u64,
    drags_abandoned: u64,
    moves: u64,
    wall_snaps: u64,
    edge_snaps: u64,
    grid_snaps: u64,
    undos: u64,
    items_added: u64,
    items_removed: u64,
    layouts_loaded: u64,
    layouts_rejected: u64,
}

impl EditorMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_drag_started(&mut self) {
        self.drags_started = self.drags_started.saturating_add(1);
    }

    pub fn record_drag_finished(&mut self, committed: bool) {
        if committed {
            self.drags_committed = self.drags_committed.saturating_add(1);
        } else {
            self.drags_abandoned = self.drags_abandoned.saturating_add(1);
        }
    }

    /// Count an applied move and the stage that snapped each axis.
    pub fn record_move(&mut self, x: SnapStage, y: SnapStage) {
        self.moves = self.moves.saturating_add(1);
        for stage in [x, y] {
            let counter = match stage {
                SnapStage::Wall => &mut self.wall_snaps,
                SnapStage::Edge => &mut self.edge_snaps,
                SnapStage::Grid => &mut self.grid_snaps,
                SnapStage::Free => continue,
            };
            *counter = counter.saturating_add(1);
        }
    }

    pub fn record_undo(&mut self) {
        self.undos = self.undos.saturating_add(1);
    }

    pub fn record_added(&mut self) {
        self.items_added = self.items_added.saturating_add(1);
    }

    pub fn record_removed(&mut self) {
        self.items_removed = self.items_removed.saturating_add(1);
    }

    pub fn record_load(&mut self, accepted: bool) {
        if accepted {
            self.layouts_loaded = self.layouts_loaded.saturating_add(1);
        } else {
            self.layouts_rejected = self.layouts_rejected.saturating_add(1);
        }
    }

    pub fn snapshot(&self, uptime: Duration) -> MetricSnapshot {
        MetricSnapshot {
            uptime_ms: uptime.as_millis() as u64,
            drags_started: self.drags_started,
            drags_committed: self.drags_committed,
            drags_abandoned: self.drags_abandoned,
            moves: self.moves,
            wall_snaps: self.wall_snaps,
            edge_snaps: self.edge_snaps,
            grid_snaps: self.grid_snaps,
            undos: self.undos,
            items_added: self.items_added,
            items_removed: self.items_removed,
            layouts_loaded: self.layouts_loaded,
            layouts_rejected: self.layouts_rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub uptime_ms: u64,
    pub drags_started: u64,
    pub drags_committed: u64,
    pub drags_abandoned: u64,
    pub moves: u64,
    pub wall_snaps: u64,
    pub edge_snaps: u64,
    pub grid_snaps: u64,
    pub undos: u64,
    pub items_added: u64,
    pub items_removed: u64,
    pub layouts_loaded: u64,
    pub layouts_rejected: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "editor_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("uptime_ms".to_string(), json!(self.uptime_ms));
        map.insert("drags_started".to_string(), json!(self.drags_started));
        map.insert("drags_committed".to_string(), json!(self.drags_committed));
        map.insert("drags_abandoned".to_string(), json!(self.drags_abandoned));
        map.insert("moves".to_string(), json!(self.moves));
        map.insert("wall_snaps".to_string(), json!(self.wall_snaps));
        map.insert("edge_snaps".to_string(), json!(self.edge_snaps));
        map.insert("grid_snaps".to_string(), json!(self.grid_snaps));
        map.insert("undos".to_string(), json!(self.undos));
        map.insert("items_added".to_string(), json!(self.items_added));
        map.insert("items_removed".to_string(), json!(self.items_removed));
        map.insert("layouts_loaded".to_string(), json!(self.layouts_loaded));
        map.insert("layouts_rejected".to_string(), json!(self.layouts_rejected));
        map
    }
}
