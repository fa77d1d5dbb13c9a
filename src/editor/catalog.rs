//! Host supplied furniture templates.

use crate::model::FurnitureItem;

/// Ordered list of templates. A template's id becomes the placed item's id,
/// so each template can be placed at most once.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<FurnitureItem>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<FurnitureItem>) -> Self {
        Self { templates }
    }

    /// First template registered under `id`.
    pub fn get(&self, id: &str) -> Option<&FurnitureItem> {
        self.templates.iter().find(|template| template.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FurnitureItem> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Templates whose id is not present in `placed`, in catalog order.
    pub fn unplaced<'a>(&'a self, placed: &[FurnitureItem]) -> Vec<&'a FurnitureItem> {
        self.templates
            .iter()
            .filter(|template| !placed.iter().any(|item| item.id == template.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::presets::studio_furniture;

    #[test]
    fn unplaced_lists_missing_templates_in_order() {
        let catalog = TemplateCatalog::new(studio_furniture());
        let placed: Vec<_> = studio_furniture()
            .into_iter()
            .filter(|item| item.id != "chair" && item.id != "tv")
            .collect();
        let ids: Vec<_> = catalog.unplaced(&placed).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["tv", "chair"]);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = TemplateCatalog::new(studio_furniture());
        assert_eq!(catalog.get("desk-2").unwrap().name, "Desk #2");
        assert!(catalog.get("piano").is_none());
        assert_eq!(catalog.len(), 9);
    }
}
