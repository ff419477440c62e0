use serde::Serialize;

use super::item_type::WorkItemType;
use super::state::{ItemFormState, SelectorState};
use super::surface::{fields, FormSurface, SelectOption};

/// Placeholder option forced onto the story-parent selector for epics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisabledOption {
    pub id: String,
    pub label: String,
}

impl Default for DisabledOption {
    fn default() -> Self {
        Self {
            id: "disabledParentInput".to_string(),
            label: "Disabled".to_string(),
        }
    }
}

/// Values copied into the submitted fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommittedSelection {
    pub item_type: Option<WorkItemType>,
    pub parent_id: Option<String>,
    pub effort: Option<String>,
}

/// Drives the item creation form through its per-type modes.
///
/// The controller owns its surface; callers hand in `&mut surface` when
/// they want to keep it.
#[derive(Debug)]
pub struct ItemFormController<S> {
    surface: S,
    disabled_option: DisabledOption,
}

impl<S: FormSurface> ItemFormController<S> {
    pub fn new(surface: S) -> Self {
        Self::with_disabled_option(surface, DisabledOption::default())
    }

    pub fn with_disabled_option(surface: S, disabled_option: DisabledOption) -> Self {
        Self {
            surface,
            disabled_option,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Current value of the type selector
    pub fn selected_type(&self) -> Option<String> {
        self.surface.get_field(fields::TYPE)
    }

    /// Type selector changed: re-read it and apply the matching mode.
    pub fn on_type_changed(&mut self) -> Option<ItemFormState> {
        let selected = self.selected_type()?;
        self.apply_type_mode(&selected)
    }

    /// Put the form into the mode for `selected_type`.
    ///
    /// Unrecognized values leave every field untouched.
    pub fn apply_type_mode(&mut self, selected_type: &str) -> Option<ItemFormState> {
        let Some(item_type) = WorkItemType::parse(selected_type) else {
            tracing::debug!(selected_type, "ignoring unknown item type");
            return None;
        };

        let state = ItemFormState::for_type(item_type);
        tracing::debug!(item_type = %item_type, "applying item form mode");

        self.apply_effort(&state);
        self.apply_selector(fields::STORY_PARENT, state.story_parent);
        self.apply_selector(fields::EPIC_PARENT, state.epic_parent);

        if state.synthetic_option {
            self.insert_disabled_option();
        } else {
            self.surface.remove_option(&self.disabled_option.id);
        }

        Some(state)
    }

    /// Submit time: copy the live selector and effort into `parentId` and
    /// `effort`. Epics commit neither; both are left unset.
    pub fn commit_parent_selection(&mut self, selected_type: &str) -> Option<CommittedSelection> {
        let Some(item_type) = WorkItemType::parse(selected_type) else {
            tracing::debug!(selected_type, "not committing unknown item type");
            return None;
        };
        let state = ItemFormState::for_type(item_type);

        let parent_id = state
            .live_parent_field()
            .and_then(|field| self.surface.get_field(field));
        let effort = state
            .live_effort_field()
            .and_then(|field| self.surface.get_field(field));

        self.commit_value(fields::PARENT_ID, parent_id.as_deref());
        self.commit_value(fields::EFFORT, effort.as_deref());

        Some(CommittedSelection {
            item_type: Some(item_type),
            parent_id,
            effort,
        })
    }

    /// Commit using whatever the type selector currently holds.
    pub fn submit(&mut self) -> Option<CommittedSelection> {
        let selected = self.selected_type()?;
        self.commit_parent_selection(&selected)
    }

    fn apply_effort(&mut self, state: &ItemFormState) {
        self.surface
            .set_visible(fields::TASK_EFFORT, state.task_effort_visible);
        self.surface
            .set_disabled(fields::TASK_EFFORT, !state.task_effort_visible);
        self.surface
            .set_visible(fields::STORY_EFFORT, state.story_effort_visible);
        self.surface.set_disabled(
            fields::STORY_EFFORT,
            !state.story_effort_visible || state.effort_locked,
        );
        self.surface.set_value(state.stale_effort_field(), "");
        if state.effort_locked {
            self.surface.set_value(fields::STORY_EFFORT, "");
        }
    }

    fn apply_selector(&mut self, name: &str, selector: SelectorState) {
        self.surface.set_visible(name, selector.visible);
        self.surface.set_disabled(name, selector.disabled);
    }

    fn insert_disabled_option(&mut self) {
        if self.surface.has_option(&self.disabled_option.id) {
            return;
        }
        self.surface.add_option(
            fields::STORY_PARENT,
            SelectOption {
                id: self.disabled_option.id.clone(),
                label: self.disabled_option.label.clone(),
                selected: true,
            },
        );
    }

    fn commit_value(&mut self, name: &str, value: Option<&str>) {
        match value {
            Some(value) => self.surface.set_value(name, value),
            None => self.surface.unset_value(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::MemorySurface;

    fn controller() -> ItemFormController<MemorySurface> {
        ItemFormController::new(MemorySurface::creation_form())
    }

    #[test]
    fn epic_locks_story_parent_with_placeholder() {
        let mut form = controller();
        let state = form.apply_type_mode("EPIC").unwrap();
        assert_eq!(state.selected_type, WorkItemType::Epic);

        let surface = form.surface();
        let story_parent = surface.field(fields::STORY_PARENT).unwrap();
        assert!(story_parent.visible);
        assert!(story_parent.disabled);
        let placeholder = story_parent.options.last().unwrap();
        assert_eq!(placeholder.id, "disabledParentInput");
        assert_eq!(placeholder.label, "Disabled");
        assert!(placeholder.selected);

        let epic_parent = surface.field(fields::EPIC_PARENT).unwrap();
        assert!(!epic_parent.visible);
        assert!(epic_parent.disabled);
    }

    #[test]
    fn entering_epic_twice_keeps_one_placeholder() {
        let mut form = controller();
        form.apply_type_mode("EPIC");
        form.apply_type_mode("EPIC");
        assert_eq!(form.surface().option_count("disabledParentInput"), 1);
    }

    #[test]
    fn story_enables_epic_parent() {
        let mut form = controller();
        form.apply_type_mode("STORY");

        let surface = form.surface();
        assert!(!surface.field(fields::STORY_PARENT).unwrap().visible);
        let epic_parent = surface.field(fields::EPIC_PARENT).unwrap();
        assert!(epic_parent.visible && !epic_parent.disabled);
        assert!(surface.field(fields::STORY_EFFORT).unwrap().visible);
        assert!(!surface.field(fields::TASK_EFFORT).unwrap().visible);
    }

    #[test]
    fn switching_clears_stale_effort() {
        let mut surface = MemorySurface::creation_form();
        surface.set_value(fields::TASK_EFFORT, "3");
        let mut form = ItemFormController::new(&mut surface);
        form.apply_type_mode("STORY");
        drop(form);
        assert_eq!(surface.get_field(fields::TASK_EFFORT).as_deref(), Some(""));
    }

    #[test]
    fn unknown_type_is_a_no_op() {
        let mut form = controller();
        form.apply_type_mode("EPIC");
        let before = form.surface().clone();

        assert!(form.apply_type_mode("SUBTASK").is_none());
        assert!(form.commit_parent_selection("SUBTASK").is_none());
        assert_eq!(form.surface(), &before);
    }

    #[test]
    fn commit_copies_live_selector() {
        let mut surface = MemorySurface::creation_form();
        surface.set_value(fields::STORY_PARENT, "7");
        surface.set_value(fields::EPIC_PARENT, "2");
        surface.set_value(fields::TASK_EFFORT, "5");

        let mut form = ItemFormController::new(surface);
        let committed = form.commit_parent_selection("BUG").unwrap();
        assert_eq!(committed.parent_id.as_deref(), Some("7"));
        assert_eq!(committed.effort.as_deref(), Some("5"));
        assert_eq!(form.surface().get_field(fields::PARENT_ID).as_deref(), Some("7"));
        assert_eq!(form.surface().get_field(fields::EFFORT).as_deref(), Some("5"));

        let committed = form.commit_parent_selection("STORY").unwrap();
        assert_eq!(committed.parent_id.as_deref(), Some("2"));
    }

    #[test]
    fn commit_for_epic_leaves_parent_unset() {
        let mut surface = MemorySurface::creation_form();
        surface.set_value(fields::STORY_PARENT, "7");
        surface.set_value(fields::PARENT_ID, "7");

        let mut form = ItemFormController::new(surface);
        form.apply_type_mode("EPIC");
        let committed = form.commit_parent_selection("EPIC").unwrap();

        assert_eq!(committed.parent_id, None);
        assert_eq!(committed.effort, None);
        assert_eq!(form.surface().get_field(fields::PARENT_ID), None);
    }

    #[test]
    fn epic_shows_story_effort_but_locks_it() {
        let mut surface = MemorySurface::creation_form();
        surface.set_value(fields::STORY_EFFORT, "21");

        let mut form = ItemFormController::new(surface);
        form.apply_type_mode("EPIC");

        let effort = form.surface().field(fields::STORY_EFFORT).unwrap();
        assert!(effort.visible);
        assert!(effort.disabled);
        assert_eq!(effort.value.as_deref(), Some(""));

        let committed = form.commit_parent_selection("EPIC").unwrap();
        assert_eq!(committed.effort, None);
        assert_eq!(form.surface().get_field(fields::EFFORT), None);

        form.apply_type_mode("STORY");
        assert!(!form.surface().field(fields::STORY_EFFORT).unwrap().disabled);
    }

    #[test]
    fn on_type_changed_reads_selector() {
        let mut surface = MemorySurface::creation_form();
        surface.set_value(fields::TYPE, "STORY");
        let mut form = ItemFormController::new(surface);

        let state = form.on_type_changed().unwrap();
        assert_eq!(state.selected_type, WorkItemType::Story);
        let committed = form.submit().unwrap();
        assert_eq!(committed.item_type, Some(WorkItemType::Story));
    }

    #[test]
    fn custom_placeholder_label() {
        let option = DisabledOption {
            id: "noParent".to_string(),
            label: "N/A".to_string(),
        };
        let mut form =
            ItemFormController::with_disabled_option(MemorySurface::creation_form(), option);
        form.apply_type_mode("EPIC");
        assert!(form.surface().has_option("noParent"));
        form.apply_type_mode("TASK");
        assert!(!form.surface().has_option("noParent"));
    }
}
