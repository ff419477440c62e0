use serde::Serialize;

use super::item_type::WorkItemType;
use super::surface::fields;

/// Visibility and enablement of one selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectorState {
    pub visible: bool,
    pub disabled: bool,
}

impl SelectorState {
    const LIVE: SelectorState = SelectorState {
        visible: true,
        disabled: false,
    };
    const HIDDEN: SelectorState = SelectorState {
        visible: false,
        disabled: true,
    };
    const LOCKED: SelectorState = SelectorState {
        visible: true,
        disabled: true,
    };

    pub fn is_live(self) -> bool {
        self.visible && !self.disabled
    }
}

/// Target layout of the creation form for one item type.
///
/// | type       | effort shown            | parent shown | parent state         | synthetic option |
/// |------------|-------------------------|--------------|----------------------|------------------|
/// | BUG, TASK  | task effort             | story parent | enabled              | removed          |
/// | STORY      | story effort            | epic parent  | enabled              | removed          |
/// | EPIC       | story effort (disabled) | story parent | disabled, "Disabled" | inserted         |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemFormState {
    pub selected_type: WorkItemType,
    pub task_effort_visible: bool,
    pub story_effort_visible: bool,
    /// Effort is shown but not editable (epics carry no effort of their own)
    pub effort_locked: bool,
    pub story_parent: SelectorState,
    pub epic_parent: SelectorState,
    pub synthetic_option: bool,
}

impl ItemFormState {
    pub fn for_type(selected_type: WorkItemType) -> Self {
        match selected_type {
            WorkItemType::Bug | WorkItemType::Task => Self {
                selected_type,
                task_effort_visible: true,
                story_effort_visible: false,
                effort_locked: false,
                story_parent: SelectorState::LIVE,
                epic_parent: SelectorState::HIDDEN,
                synthetic_option: false,
            },
            WorkItemType::Story => Self {
                selected_type,
                task_effort_visible: false,
                story_effort_visible: true,
                effort_locked: false,
                story_parent: SelectorState::HIDDEN,
                epic_parent: SelectorState::LIVE,
                synthetic_option: false,
            },
            WorkItemType::Epic => Self {
                selected_type,
                task_effort_visible: false,
                story_effort_visible: true,
                effort_locked: true,
                story_parent: SelectorState::LOCKED,
                epic_parent: SelectorState::HIDDEN,
                synthetic_option: true,
            },
        }
    }

    /// Selector whose value becomes `parentId` on submit
    pub fn live_parent_field(&self) -> Option<&'static str> {
        if self.story_parent.is_live() {
            Some(fields::STORY_PARENT)
        } else if self.epic_parent.is_live() {
            Some(fields::EPIC_PARENT)
        } else {
            None
        }
    }

    /// Effort input whose value becomes `effort` on submit
    pub fn live_effort_field(&self) -> Option<&'static str> {
        if self.effort_locked {
            None
        } else if self.selected_type.is_leaf() {
            Some(fields::TASK_EFFORT)
        } else {
            Some(fields::STORY_EFFORT)
        }
    }

    /// Effort input that must be blanked when entering this mode
    pub fn stale_effort_field(&self) -> &'static str {
        if self.task_effort_visible {
            fields::STORY_EFFORT
        } else {
            fields::TASK_EFFORT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_effort_widget_per_type() {
        for t in WorkItemType::ALL {
            let state = ItemFormState::for_type(t);
            assert_ne!(state.task_effort_visible, state.story_effort_visible);
        }
    }

    #[test]
    fn parent_selectors_never_both_live() {
        for t in WorkItemType::ALL {
            let state = ItemFormState::for_type(t);
            assert!(!(state.story_parent.is_live() && state.epic_parent.is_live()));
            assert!(state.story_parent.visible != state.epic_parent.visible);
        }
    }

    #[test]
    fn table_rows() {
        let task = ItemFormState::for_type(WorkItemType::Task);
        assert_eq!(task, ItemFormState {
            selected_type: WorkItemType::Task,
            ..ItemFormState::for_type(WorkItemType::Bug)
        });
        assert_eq!(task.live_parent_field(), Some(fields::STORY_PARENT));
        assert_eq!(task.stale_effort_field(), fields::STORY_EFFORT);

        let story = ItemFormState::for_type(WorkItemType::Story);
        assert_eq!(story.live_parent_field(), Some(fields::EPIC_PARENT));
        assert_eq!(story.live_effort_field(), Some(fields::STORY_EFFORT));
        assert!(!story.effort_locked);
        assert_eq!(story.stale_effort_field(), fields::TASK_EFFORT);
        assert!(!story.synthetic_option);

        let epic = ItemFormState::for_type(WorkItemType::Epic);
        assert!(epic.story_parent.visible && epic.story_parent.disabled);
        assert!(!epic.epic_parent.visible && epic.epic_parent.disabled);
        assert_eq!(epic.live_parent_field(), None);
        assert!(epic.story_effort_visible && epic.effort_locked);
        assert_eq!(epic.live_effort_field(), None);
        assert!(epic.synthetic_option);
    }
}
