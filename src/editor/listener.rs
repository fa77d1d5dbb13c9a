use crate::model::FurnitureItem;

/// Change notifications delivered to the host UI.
///
/// Listeners run synchronously inside the mutating call, after the editor
/// state has been updated.
pub trait EditorListener {
    /// Fired after every pass through the normalization gate.
    fn on_furniture_change(&mut self, _furniture: &[FurnitureItem]) {}

    /// Fired when the stored selection changes.
    fn on_selected_furniture_change(&mut self, _id: Option<&str>) {}
}
