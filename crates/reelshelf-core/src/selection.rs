//! Bulk selection state machine.
//!
//! Two modes: [`SelectionMode::Browse`] shows no selection UI, while
//! [`SelectionMode::Edit`] exposes per-poster checkboxes, a select-all box and
//! the bulk action toolbar. The selected set only ever holds ids that are
//! currently rendered.

use std::collections::BTreeSet;

use crate::models::ItemId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionMode {
    #[default]
    Browse,
    Edit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    mode: SelectionMode,
    selected: BTreeSet<ItemId>,
    rendered: Vec<ItemId>,
    select_all: bool,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == SelectionMode::Edit
    }

    /// Switch between Browse and Edit. Both directions start from an empty
    /// selection with select-all unchecked.
    pub fn toggle_edit_mode(&mut self) -> SelectionMode {
        self.mode = match self.mode {
            SelectionMode::Browse => SelectionMode::Edit,
            SelectionMode::Edit => SelectionMode::Browse,
        };
        self.select_none();
        self.mode
    }

    /// Check or uncheck one rendered poster. Ignored outside Edit mode and for
    /// ids that are not on screen.
    pub fn toggle_item(&mut self, id: ItemId, checked: bool) {
        if !self.is_editing() || !self.rendered.contains(&id) {
            return;
        }
        if checked {
            self.selected.insert(id);
        } else {
            self.selected.remove(&id);
        }
        self.recompute_select_all();
    }

    /// Set every rendered poster to `checked` in one step.
    pub fn set_select_all(&mut self, checked: bool) {
        if !self.is_editing() {
            return;
        }
        self.select_all = checked;
        if checked {
            self.selected = self.rendered.iter().copied().collect();
        } else {
            self.selected.clear();
        }
    }

    pub fn select_none(&mut self) {
        self.selected.clear();
        self.select_all = false;
    }

    /// Adopt the ids of a fresh render. A checked select-all box carries over
    /// to the new posters; otherwise ids that vanished are dropped.
    pub fn sync_rendered(&mut self, ids: &[ItemId]) {
        self.rendered = ids.to_vec();
        if self.select_all && self.is_editing() {
            self.selected = self.rendered.iter().copied().collect();
        } else {
            self.selected.retain(|id| ids.contains(id));
            self.recompute_select_all();
        }
    }

    fn recompute_select_all(&mut self) {
        self.select_all = !self.rendered.is_empty()
            && self.rendered.iter().all(|id| self.selected.contains(id));
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected.contains(&id)
    }

    pub fn select_all_checked(&self) -> bool {
        self.select_all
    }

    /// Selected ids in ascending order.
    pub fn selected_ids(&self) -> Vec<ItemId> {
        self.selected.iter().copied().collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Gate for the delete / apply / add-to-collection controls.
    pub fn actions_enabled(&self) -> bool {
        self.is_editing() && !self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing_with(ids: &[ItemId]) -> SelectionController {
        let mut sel = SelectionController::new();
        sel.sync_rendered(ids);
        sel.toggle_edit_mode();
        sel
    }

    #[test]
    fn test_entering_edit_mode_starts_disabled() {
        let sel = editing_with(&[1, 2, 3]);
        assert!(sel.is_editing());
        assert_eq!(sel.selected_count(), 0);
        assert!(!sel.select_all_checked());
        assert!(!sel.actions_enabled());
    }

    #[test]
    fn test_select_all_invariant_with_five_items() {
        let mut sel = editing_with(&[1, 2, 3, 4, 5]);
        sel.set_select_all(true);
        assert_eq!(sel.selected_count(), 5);
        assert!(sel.select_all_checked());

        sel.toggle_item(3, false);
        assert!(!sel.select_all_checked());
        assert!(sel.actions_enabled());

        sel.toggle_item(3, true);
        assert!(sel.select_all_checked());
    }

    #[test]
    fn test_checking_every_item_checks_select_all() {
        let mut sel = editing_with(&[1, 2]);
        sel.toggle_item(1, true);
        assert!(!sel.select_all_checked());
        sel.toggle_item(2, true);
        assert!(sel.select_all_checked());
    }

    #[test]
    fn test_actions_follow_selection() {
        let mut sel = editing_with(&[1, 2]);
        sel.toggle_item(2, true);
        assert!(sel.actions_enabled());
        sel.toggle_item(2, false);
        assert!(!sel.actions_enabled());
    }

    #[test]
    fn test_leaving_edit_mode_clears() {
        let mut sel = editing_with(&[1, 2]);
        sel.set_select_all(true);
        assert_eq!(sel.toggle_edit_mode(), SelectionMode::Browse);
        assert_eq!(sel.selected_count(), 0);
        assert!(!sel.select_all_checked());
        assert!(!sel.actions_enabled());
    }

    #[test]
    fn test_browse_mode_ignores_selection() {
        let mut sel = SelectionController::new();
        sel.sync_rendered(&[1, 2]);
        sel.toggle_item(1, true);
        sel.set_select_all(true);
        assert_eq!(sel.selected_count(), 0);
    }

    #[test]
    fn test_unrendered_ids_are_ignored_and_dropped() {
        let mut sel = editing_with(&[1, 2, 3]);
        sel.toggle_item(99, true);
        assert!(!sel.is_selected(99));

        sel.toggle_item(1, true);
        sel.toggle_item(3, true);
        sel.sync_rendered(&[1, 2]);
        assert_eq!(sel.selected_ids(), vec![1]);
    }

    #[test]
    fn test_select_all_survives_redraw() {
        let mut sel = editing_with(&[1, 2]);
        sel.set_select_all(true);
        sel.sync_rendered(&[10, 11, 12]);
        assert_eq!(sel.selected_ids(), vec![10, 11, 12]);
        assert!(sel.select_all_checked());
    }

    #[test]
    fn test_empty_render_unchecks_select_all() {
        let mut sel = editing_with(&[1]);
        sel.toggle_item(1, true);
        assert!(sel.select_all_checked());
        sel.toggle_item(1, false);
        sel.sync_rendered(&[]);
        assert!(!sel.select_all_checked());
    }
}
