use std::collections::BTreeMap;

use serde::Serialize;

/// Field names used by the item creation form
pub mod fields {
    /// Type selector (`BUG`, `TASK`, `STORY`, `EPIC`)
    pub const TYPE: &str = "type";
    /// Effort input for bugs and tasks
    pub const TASK_EFFORT: &str = "taskEffort";
    /// Effort input for stories and epics
    pub const STORY_EFFORT: &str = "storyEffort";
    /// Parent selector listing stories
    pub const STORY_PARENT: &str = "storyParentId";
    /// Parent selector listing epics
    pub const EPIC_PARENT: &str = "epicParentId";
    /// Hidden field actually submitted as the parent
    pub const PARENT_ID: &str = "parentId";
    /// Hidden field actually submitted as the effort
    pub const EFFORT: &str = "effort";
}

/// An entry in a selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub id: String,
    pub label: String,
    pub selected: bool,
}

/// What the form controller may do to the rendered form.
///
/// `get_field` returns `None` when the field holds no value.
pub trait FormSurface {
    fn get_field(&self, name: &str) -> Option<String>;
    fn set_visible(&mut self, name: &str, visible: bool);
    fn set_disabled(&mut self, name: &str, disabled: bool);
    fn set_value(&mut self, name: &str, value: &str);

    /// Drop the value so the field reads as unset.
    fn unset_value(&mut self, name: &str);

    fn has_option(&self, option_id: &str) -> bool;
    fn add_option(&mut self, selector: &str, option: SelectOption);
    /// Remove every option with this id, wherever it is.
    fn remove_option(&mut self, option_id: &str);
}

impl<S: FormSurface + ?Sized> FormSurface for &mut S {
    fn get_field(&self, name: &str) -> Option<String> {
        (**self).get_field(name)
    }

    fn set_visible(&mut self, name: &str, visible: bool) {
        (**self).set_visible(name, visible);
    }

    fn set_disabled(&mut self, name: &str, disabled: bool) {
        (**self).set_disabled(name, disabled);
    }

    fn set_value(&mut self, name: &str, value: &str) {
        (**self).set_value(name, value);
    }

    fn unset_value(&mut self, name: &str) {
        (**self).unset_value(name);
    }

    fn has_option(&self, option_id: &str) -> bool {
        (**self).has_option(option_id)
    }

    fn add_option(&mut self, selector: &str, option: SelectOption) {
        (**self).add_option(selector, option);
    }

    fn remove_option(&mut self, option_id: &str) {
        (**self).remove_option(option_id);
    }
}

/// State of one field on an in-memory form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldState {
    pub value: Option<String>,
    pub visible: bool,
    pub disabled: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            value: None,
            visible: true,
            disabled: false,
            options: Vec::new(),
        }
    }
}

/// In-memory form, used by the CLI and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemorySurface {
    fields: BTreeMap<String, FieldState>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The creation form as the server first renders it: task mode, with
    /// the submitted fields hidden.
    pub fn creation_form() -> Self {
        let mut surface = Self::new();
        surface.insert(
            fields::TYPE,
            FieldState {
                value: Some("TASK".to_string()),
                ..FieldState::default()
            },
        );
        surface.insert(fields::TASK_EFFORT, FieldState::default());
        surface.insert(fields::STORY_EFFORT, hidden());
        surface.insert(fields::STORY_PARENT, FieldState::default());
        surface.insert(fields::EPIC_PARENT, hidden());
        surface.insert(fields::PARENT_ID, hidden());
        surface.insert(fields::EFFORT, hidden());
        surface
    }

    pub fn insert(&mut self, name: &str, state: FieldState) {
        self.fields.insert(name.to_string(), state);
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldState)> {
        self.fields.iter().map(|(name, state)| (name.as_str(), state))
    }

    /// Number of options with this id across all selectors
    pub fn option_count(&self, option_id: &str) -> usize {
        self.fields
            .values()
            .flat_map(|field| field.options.iter())
            .filter(|option| option.id == option_id)
            .count()
    }

    fn entry(&mut self, name: &str) -> &mut FieldState {
        self.fields.entry(name.to_string()).or_default()
    }
}

fn hidden() -> FieldState {
    FieldState {
        visible: false,
        ..FieldState::default()
    }
}

impl FormSurface for MemorySurface {
    fn get_field(&self, name: &str) -> Option<String> {
        self.fields.get(name).and_then(|field| field.value.clone())
    }

    fn set_visible(&mut self, name: &str, visible: bool) {
        self.entry(name).visible = visible;
    }

    fn set_disabled(&mut self, name: &str, disabled: bool) {
        self.entry(name).disabled = disabled;
    }

    fn set_value(&mut self, name: &str, value: &str) {
        self.entry(name).value = Some(value.to_string());
    }

    fn unset_value(&mut self, name: &str) {
        if let Some(field) = self.fields.get_mut(name) {
            field.value = None;
        }
    }

    fn has_option(&self, option_id: &str) -> bool {
        self.option_count(option_id) > 0
    }

    fn add_option(&mut self, selector: &str, option: SelectOption) {
        let field = self.entry(selector);
        if option.selected {
            for existing in &mut field.options {
                existing.selected = false;
            }
        }
        field.options.push(option);
    }

    fn remove_option(&mut self, option_id: &str) {
        for field in self.fields.values_mut() {
            field.options.retain(|option| option.id != option_id);
        }
    }
}
