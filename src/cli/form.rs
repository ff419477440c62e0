//! trackui form command implementation
//!
//! Runs the item form controller against the in-memory creation form so
//! the per-type layouts can be inspected from the terminal.

use crate::error::Result;
use crate::form::{
    fields, CommittedSelection, FieldState, FormSurface, ItemFormController, ItemFormState,
    MemorySurface,
};
use crate::output::{emit_success, HumanOutput};

use super::Context;

/// Options for `trackui form submit`
pub struct SubmitOptions {
    pub item_type: String,
    pub story_parent: Option<String>,
    pub epic_parent: Option<String>,
    pub task_effort: Option<String>,
    pub story_effort: Option<String>,
}

#[derive(serde::Serialize)]
struct PreviewStep {
    selected: String,
    applied: bool,
}

#[derive(serde::Serialize)]
struct PreviewReport {
    steps: Vec<PreviewStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<ItemFormState>,
    form: MemorySurface,
}

#[derive(serde::Serialize)]
struct SubmitReport {
    selected: String,
    committed: Option<CommittedSelection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<&'static str>,
}

fn controller(ctx: &Context) -> ItemFormController<MemorySurface> {
    ItemFormController::with_disabled_option(
        MemorySurface::creation_form(),
        ctx.config.form.disabled_option(),
    )
}

pub fn run_preview(ctx: &Context, types: &[String]) -> Result<()> {
    let mut form = controller(ctx);
    let mut steps = Vec::with_capacity(types.len());
    let mut mode = None;

    for selected in types {
        let applied = form.apply_type_mode(selected);
        steps.push(PreviewStep {
            selected: selected.clone(),
            applied: applied.is_some(),
        });
        if applied.is_some() {
            mode = applied;
        }
    }

    let surface = form.into_surface();

    let mut human = HumanOutput::new(match &mode {
        Some(state) => format!(
            "trackui form preview: {}",
            state.selected_type.display_name()
        ),
        None => "trackui form preview: no recognized type".to_string(),
    });
    for (name, field) in surface.fields() {
        human.push_summary(name, describe(field));
    }
    for step in steps.iter().filter(|step| !step.applied) {
        human.push_warning(format!("ignored unknown type '{}'", step.selected));
    }

    let report = PreviewReport {
        steps,
        mode,
        form: surface,
    };

    emit_success(ctx.output, "form preview", &report, Some(&human))
}

pub fn run_submit(ctx: &Context, options: SubmitOptions) -> Result<()> {
    let mut form = controller(ctx);
    form.apply_type_mode(&options.item_type);

    // user fills the form after choosing the type
    let mut surface = form.into_surface();
    surface.set_value(fields::TYPE, &options.item_type);
    let inputs = [
        (fields::STORY_PARENT, &options.story_parent),
        (fields::EPIC_PARENT, &options.epic_parent),
        (fields::TASK_EFFORT, &options.task_effort),
        (fields::STORY_EFFORT, &options.story_effort),
    ];
    let mut skipped = Vec::new();
    for (name, value) in inputs {
        if let Some(value) = value {
            if surface.field(name).map_or(false, |field| field.disabled) {
                tracing::debug!(field = name, "skipping input for disabled field");
                skipped.push(name);
                continue;
            }
            surface.set_value(name, value);
        }
    }

    let mut form =
        ItemFormController::with_disabled_option(surface, ctx.config.form.disabled_option());
    let committed = form.submit();

    let mut human = HumanOutput::new(format!("trackui form submit: {}", options.item_type));
    match &committed {
        Some(selection) => {
            human.push_summary(
                fields::PARENT_ID,
                selection.parent_id.clone().unwrap_or_else(|| "(unset)".to_string()),
            );
            human.push_summary(
                fields::EFFORT,
                selection.effort.clone().unwrap_or_else(|| "(unset)".to_string()),
            );
        }
        None => human.push_warning(format!(
            "unknown type '{}'; nothing committed",
            options.item_type
        )),
    }
    for name in &skipped {
        human.push_warning(format!(
            "ignored {name}: field is disabled for {}",
            options.item_type
        ));
    }

    let report = SubmitReport {
        selected: options.item_type,
        committed,
        skipped,
    };

    emit_success(ctx.output, "form submit", &report, Some(&human))
}

fn describe(field: &FieldState) -> String {
    let mut parts = vec![
        if field.visible { "visible" } else { "hidden" }.to_string(),
        if field.disabled { "disabled" } else { "enabled" }.to_string(),
    ];
    if let Some(value) = &field.value {
        parts.push(format!("value={value:?}"));
    }
    for option in &field.options {
        let marker = if option.selected { " (selected)" } else { "" };
        parts.push(format!("option {}{marker}", option.label));
    }
    parts.join(", ")
}
