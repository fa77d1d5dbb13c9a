use std::collections::HashSet;
use std::io::Read;
use std::mem;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use serde_json::{Value, json};

use crate::codec::{self, Layout};
use crate::error::{PlannerError, Result};
use crate::geometry::{Footprint, Point, clamp_position};
use crate::logging::{
    CODEC_TARGET, DRAG_TARGET, EDITOR_TARGET, LogLevel, Logger, event_with_fields, json_kv,
};
use crate::metrics::{EditorMetrics, MetricSnapshot};
use crate::model::{Fixture, FurnitureItem, Room, RoomStructure};
use crate::projection::SceneProjection;
use crate::snap::SnapResolver;

use super::{DragSession, DragState, EditorConfig, EditorListener, TemplateCatalog, UndoHistory};

/// A template dragged from the catalog and released over the room.
#[derive(Debug, Clone, PartialEq)]
pub struct DropEvent {
    pub template_id: String,
    /// Release point in room coordinates.
    pub point: Point,
}

pub struct LayoutEditor {
    structure: RoomStructure,
    furniture: Vec<FurnitureItem>,
    catalog: TemplateCatalog,
    selected: Option<String>,
    drag: DragState,
    history: UndoHistory,
    resolver: SnapResolver,
    listeners: Vec<Box<dyn EditorListener>>,
    logger: Option<Logger>,
    metrics: Option<Arc<Mutex<EditorMetrics>>>,
    started_at: Instant,
}

impl LayoutEditor {
    /// Build an editor; `furniture` is normalized before it becomes live.
    pub fn new(
        structure: RoomStructure,
        furniture: Vec<FurnitureItem>,
        catalog: TemplateCatalog,
        config: EditorConfig,
    ) -> Self {
        let furniture = normalize(furniture, &structure.room);
        let editor = Self {
            structure,
            furniture,
            catalog,
            selected: None,
            drag: DragState::Idle,
            history: UndoHistory::with_capacity(config.undo_capacity),
            resolver: SnapResolver::new(config.snap),
            listeners: Vec::new(),
            logger: config.logger,
            metrics: config.metrics,
            started_at: Instant::now(),
        };
        editor.log(
            LogLevel::Info,
            EDITOR_TARGET,
            "editor_created",
            [
                json_kv("furniture", json!(editor.furniture.len())),
                json_kv("fixtures", json!(editor.structure.fixtures.len())),
                json_kv("templates", json!(editor.catalog.len())),
            ],
        );
        editor
    }

    pub fn room(&self) -> &Room {
        &self.structure.room
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.structure.fixtures
    }

    pub fn structure(&self) -> &RoomStructure {
        &self.structure
    }

    pub fn furniture(&self) -> &[FurnitureItem] {
        &self.furniture
    }

    pub fn item(&self, id: &str) -> Option<&FurnitureItem> {
        self.furniture.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.item(id).is_some()
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Catalog entries not currently placed in the room.
    pub fn unplaced_templates(&self) -> Vec<&FurnitureItem> {
        self.catalog.unplaced(&self.furniture)
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    pub fn add_listener<L>(&mut self, listener: L)
    where
        L: EditorListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// The selected id, or `None` when the stored id is not placed.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected
            .as_deref()
            .filter(|id| self.furniture.iter().any(|item| item.id == *id))
    }

    /// Store the requested selection verbatim; reads heal stale ids.
    pub fn select(&mut self, id: Option<&str>) {
        if self.selected.as_deref() == id {
            return;
        }
        self.selected = id.map(str::to_string);
        for listener in self.listeners.iter_mut() {
            listener.on_selected_furniture_change(self.selected.as_deref());
        }
    }

    // ------------------------------------------------------------------
    // Normalization gate
    // ------------------------------------------------------------------

    /// Replace the live collection. Each item is clamped into the room and
    /// later duplicates of an id are dropped before listeners fire.
    pub fn apply_furniture(&mut self, next: Vec<FurnitureItem>) {
        let incoming = next.len();
        self.furniture = normalize(next, &self.structure.room);
        let dropped = incoming - self.furniture.len();
        if dropped > 0 {
            self.log(
                LogLevel::Warn,
                EDITOR_TARGET,
                "duplicate_ids_dropped",
                [json_kv("dropped", json!(dropped))],
            );
        }

        for listener in self.listeners.iter_mut() {
            listener.on_furniture_change(&self.furniture);
        }
    }

    // ------------------------------------------------------------------
    // Drag sessions
    // ------------------------------------------------------------------

    /// Grab `id` at room-space `pointer`. A session already in progress is
    /// ended first.
    pub fn begin_drag(&mut self, id: &str, pointer: Point) -> Result<()> {
        if self.is_dragging() {
            self.end_drag();
        }

        let item = self
            .item(id)
            .ok_or_else(|| PlannerError::FurnitureNotFound(id.to_string()))?;
        let grab_offset = Point::new(pointer.x - item.position.x, pointer.y - item.position.y);

        self.drag = DragState::Dragging(DragSession::new(
            id.to_string(),
            grab_offset,
            self.furniture.clone(),
        ));
        self.select(Some(id));
        self.with_metrics(EditorMetrics::record_drag_started);
        self.log(
            LogLevel::Debug,
            DRAG_TARGET,
            "drag_started",
            [json_kv("item", json!(id))],
        );
        Ok(())
    }

    /// Follow the pointer. Returns `true` when the dragged item moved.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let (item_id, anchor) = match &self.drag {
            DragState::Dragging(session) => (session.item_id.clone(), session.anchor_for(pointer)),
            DragState::Idle => return false,
        };

        let Some(index) = self.furniture.iter().position(|item| item.id == item_id) else {
            return false;
        };

        let current = &self.furniture[index];
        let outcome = self.resolver.resolve(
            anchor.x,
            anchor.y,
            current,
            &self.furniture,
            &self.structure.fixtures,
            &self.structure.room,
        );
        let target = outcome.position;
        if target.x == current.position.x && target.y == current.position.y {
            return false;
        }

        let mut next = self.furniture.clone();
        next[index] = current.moved_to(target.x, target.y);
        if let DragState::Dragging(session) = &mut self.drag {
            session.moved = true;
        }
        self.apply_furniture(next);

        self.with_metrics(|metrics| metrics.record_move(outcome.x, outcome.y));
        self.log(
            LogLevel::Trace,
            DRAG_TARGET,
            "item_moved",
            [
                json_kv("item", json!(item_id)),
                json_kv("x", json!(target.x)),
                json_kv("y", json!(target.y)),
                json_kv("snap_x", json!(outcome.x.as_str())),
                json_kv("snap_y", json!(outcome.y.as_str())),
            ],
        );
        true
    }

    /// Finish the session. Returns `true` when an undo snapshot was pushed.
    pub fn end_drag(&mut self) -> bool {
        let DragState::Dragging(session) = mem::take(&mut self.drag) else {
            return false;
        };

        let committed = session.moved;
        if committed {
            let evicted = self.history.push(session.snapshot).is_some();
            self.log(
                LogLevel::Debug,
                DRAG_TARGET,
                "drag_committed",
                [
                    json_kv("item", json!(session.item_id)),
                    json_kv("undo_depth", json!(self.history.len())),
                    json_kv("evicted", json!(evicted)),
                ],
            );
        } else {
            self.log(
                LogLevel::Debug,
                DRAG_TARGET,
                "drag_ended_without_move",
                [json_kv("item", json!(session.item_id))],
            );
        }
        self.with_metrics(|metrics| metrics.record_drag_finished(committed));
        committed
    }

    /// Abandon the session without recording an undo snapshot. Used when the
    /// pointer is lost without a terminal event.
    pub fn cancel_drag(&mut self) {
        let DragState::Dragging(session) = mem::take(&mut self.drag) else {
            return;
        };
        self.with_metrics(|metrics| metrics.record_drag_finished(false));
        self.log(
            LogLevel::Debug,
            DRAG_TARGET,
            "drag_abandoned",
            [
                json_kv("item", json!(session.item_id)),
                json_kv("moved", json!(session.moved)),
            ],
        );
    }

    /// Restore the collection captured before the most recent moved drag.
    /// Ignored while a drag is in progress.
    pub fn undo(&mut self) -> bool {
        if self.is_dragging() {
            return false;
        }
        let Some(previous) = self.history.pop() else {
            return false;
        };

        self.apply_furniture(previous);
        self.select(None);
        self.with_metrics(EditorMetrics::record_undo);
        self.log(
            LogLevel::Debug,
            EDITOR_TARGET,
            "undo_applied",
            [json_kv("undo_depth", json!(self.history.len()))],
        );
        true
    }

    // ------------------------------------------------------------------
    // Placement
    // ------------------------------------------------------------------

    /// Place the catalog template `template_id`, centered on `drop` when
    /// given. Returns `Ok(false)` when the item is already placed.
    pub fn add_from_template(&mut self, template_id: &str, drop: Option<Point>) -> Result<bool> {
        let template = self
            .catalog
            .get(template_id)
            .ok_or_else(|| PlannerError::TemplateNotFound(template_id.to_string()))?;
        if self.contains(&template.id) {
            return Ok(false);
        }

        let mut item = template.clone();
        if let Some(point) = drop {
            item.position.x = point.x - item.dimensions.width / 2.0;
            item.position.y = point.y - item.dimensions.depth / 2.0;
        }

        let mut next = self.furniture.clone();
        next.push(item);
        self.apply_furniture(next);
        self.select(Some(template_id));
        self.with_metrics(EditorMetrics::record_added);
        self.log(
            LogLevel::Debug,
            EDITOR_TARGET,
            "furniture_added",
            [
                json_kv("item", json!(template_id)),
                json_kv("dropped", json!(drop.is_some())),
            ],
        );
        Ok(true)
    }

    pub fn place_dropped_template(&mut self, event: &DropEvent) -> Result<bool> {
        self.add_from_template(&event.template_id, Some(event.point))
    }

    /// Remove `id` from the room. Returns `false` when it was not placed.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.drag.session().is_some_and(|session| session.item_id == id) {
            self.cancel_drag();
        }

        let next = self
            .furniture
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        self.apply_furniture(next);
        if self.selected.as_deref() == Some(id) {
            self.select(None);
        }
        self.with_metrics(EditorMetrics::record_removed);
        self.log(
            LogLevel::Debug,
            EDITOR_TARGET,
            "furniture_removed",
            [json_kv("item", json!(id))],
        );
        true
    }

    /// Topmost placed item whose rotated bounding box contains `point`.
    pub fn hit_test(&self, point: Point) -> Option<&FurnitureItem> {
        self.furniture
            .iter()
            .rev()
            .find(|item| item.footprint_rect().contains_point(point))
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    pub fn save_layout(&self, name: &str) -> Layout {
        let layout = codec::serialize(name, &self.furniture);
        self.log(
            LogLevel::Info,
            CODEC_TARGET,
            "layout_saved",
            [
                json_kv("name", json!(layout.name)),
                json_kv("items", json!(layout.furniture.len())),
            ],
        );
        layout
    }

    /// Decode `raw` and make its furniture live. On failure the editor is
    /// left untouched.
    pub fn load_layout(&mut self, raw: &str) -> Result<Layout> {
        match codec::deserialize(raw) {
            Ok(layout) => Ok(self.accept_layout(layout)),
            Err(err) => Err(self.reject_layout(err.into())),
        }
    }

    pub fn load_from_reader(&mut self, reader: impl Read) -> Result<Layout> {
        match codec::read_layout(reader) {
            Ok(layout) => Ok(self.accept_layout(layout)),
            Err(err) => Err(self.reject_layout(err)),
        }
    }

    fn accept_layout(&mut self, layout: Layout) -> Layout {
        self.cancel_drag();
        let Layout {
            name,
            timestamp,
            furniture,
        } = layout;
        self.apply_furniture(furniture);
        let first = self.furniture.first().map(|item| item.id.clone());
        self.select(first.as_deref());

        self.with_metrics(|metrics| metrics.record_load(true));
        self.log(
            LogLevel::Info,
            CODEC_TARGET,
            "layout_loaded",
            [
                json_kv("name", json!(name)),
                json_kv("items", json!(self.furniture.len())),
            ],
        );
        Layout {
            name,
            timestamp,
            furniture: self.furniture.clone(),
        }
    }

    fn reject_layout(&self, err: PlannerError) -> PlannerError {
        self.with_metrics(|metrics| metrics.record_load(false));
        self.log(
            LogLevel::Warn,
            CODEC_TARGET,
            "layout_rejected",
            [json_kv("error", json!(err.to_string()))],
        );
        err
    }

    // ------------------------------------------------------------------
    // Projection and diagnostics
    // ------------------------------------------------------------------

    /// Read-only view for a 3D renderer.
    pub fn projection(&self) -> SceneProjection<'_> {
        SceneProjection::new(&self.structure.room, &self.structure.fixtures, &self.furniture)
    }

    pub fn metrics_snapshot(&self) -> Option<MetricSnapshot> {
        let metrics = self.metrics.as_ref()?;
        let guard = metrics.lock().ok()?;
        Some(guard.snapshot(self.started_at.elapsed()))
    }

    fn with_metrics(&self, record: impl FnOnce(&mut EditorMetrics)) {
        if let Some(metrics) = &self.metrics {
            if let Ok(mut guard) = metrics.lock() {
                record(&mut *guard);
            }
        }
    }

    fn log(
        &self,
        level: LogLevel,
        target: &str,
        message: &str,
        fields: impl IntoIterator<Item = (String, Value)>,
    ) {
        if let Some(logger) = &self.logger {
            if logger.enabled(level) {
                let _ = logger.log_event(event_with_fields(level, target, message, fields));
            }
        }
    }
}

fn normalize(items: Vec<FurnitureItem>, room: &Room) -> Vec<FurnitureItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.id.clone()))
        .map(|mut item| {
            let clamped = clamp_position(item.position.x, item.position.y, &item, room);
            item.position.x = clamped.x;
            item.position.y = clamped.y;
            item
        })
        .collect()
}
