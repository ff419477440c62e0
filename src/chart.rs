//! Burndown chart data contract
//!
//! The chart itself is drawn by an external renderer. This module builds
//! what it consumes: category labels plus two parallel series, ideal and
//! actual remaining effort. An empty ideal series (no sprint estimate yet)
//! is emitted as not visible while the actual series still renders.

use serde::{Deserialize, Serialize};

/// Burndown figures for one project or sprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnDownChartData {
    pub categories: Vec<String>,
    pub ideal_burn: Vec<f64>,
    pub actual_burn: Vec<i64>,
    /// Actual remaining effort is above the ideal line
    pub possible_delay: bool,
    /// Actual reached zero before the ideal line did
    pub earlier_finish: bool,
}

impl BurnDownChartData {
    pub fn new(categories: Vec<String>, ideal_burn: Vec<f64>, actual_burn: Vec<i64>) -> Self {
        let possible_delay = possible_delay(&ideal_burn, &actual_burn);
        let earlier_finish = earlier_finish(&ideal_burn, &actual_burn);
        Self {
            categories,
            ideal_burn,
            actual_burn,
            possible_delay,
            earlier_finish,
        }
    }
}

/// Straight line from `total_effort` down over `steps` steps, starting
/// with the total. Values are rounded to two decimals and never go below
/// zero. Zero steps means no estimate, so the line is empty.
pub fn ideal_burn(total_effort: f64, steps: usize) -> Vec<f64> {
    if steps == 0 {
        return Vec::new();
    }

    let per_step = total_effort / steps as f64;
    let mut burn = Vec::with_capacity(steps + 1);
    burn.push(total_effort);

    let mut remaining = total_effort;
    for _ in 0..steps {
        let next = round2(remaining - per_step).max(0.0);
        burn.push(next);
        remaining = next;
    }
    burn
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Latest actual point sits above the ideal line at the same step.
pub fn possible_delay(ideal: &[f64], actual: &[i64]) -> bool {
    let (Some(&latest), Some(&ideal_last)) = (actual.last(), ideal.last()) else {
        return false;
    };
    let ideal_now = ideal.get(actual.len() - 1).copied().unwrap_or(ideal_last);
    latest as f64 > ideal_now
}

/// Actual hit zero with ideal points still to come.
pub fn earlier_finish(ideal: &[f64], actual: &[i64]) -> bool {
    matches!(actual.last(), Some(0)) && actual.len() < ideal.len()
}

/// Renderer input: axis labels and the two line series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub title: String,
    /// Hint to attach to the title, when hints are switched on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_hint: Option<String>,
    pub subtitle: String,
    pub categories: Vec<String>,
    pub y_axis_title: String,
    pub value_suffix: String,
    pub series: Vec<SeriesSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSpec {
    pub name: String,
    pub visible: bool,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker_radius: Option<u32>,
    pub data: Vec<f64>,
}

impl ChartSpec {
    /// Whole-project chart across sprints.
    pub fn product_burndown(data: &BurnDownChartData, hints: bool) -> Self {
        Self::build(
            data,
            "Product Burndown",
            "All Sprints",
            ("rgba(255,0,22,0.25)", "rgba(133,200,98,0.75)"),
            hints.then(|| "productBurndown".to_string()),
        )
    }

    /// Day-by-day chart for one sprint.
    pub fn sprint_burndown(data: &BurnDownChartData) -> Self {
        Self::build(
            data,
            "Burndown Chart",
            "This Sprint",
            ("rgba(255,0,0,0.25)", "rgba(0,120,200,0.75)"),
            None,
        )
    }

    fn build(
        data: &BurnDownChartData,
        title: &str,
        subtitle: &str,
        (ideal_color, actual_color): (&str, &str),
        title_hint: Option<String>,
    ) -> Self {
        let ideal = SeriesSpec {
            name: "Ideal Remaining".to_string(),
            visible: !data.ideal_burn.is_empty(),
            color: ideal_color.to_string(),
            line_width: Some(1),
            marker_radius: None,
            data: data.ideal_burn.clone(),
        };
        let actual = SeriesSpec {
            name: "Actual Remaining".to_string(),
            visible: true,
            color: actual_color.to_string(),
            line_width: None,
            marker_radius: Some(6),
            data: data.actual_burn.iter().map(|&v| v as f64).collect(),
        };

        Self {
            title: title.to_string(),
            title_hint,
            subtitle: subtitle.to_string(),
            categories: data.categories.clone(),
            y_axis_title: "Effort".to_string(),
            value_suffix: " effort".to_string(),
            series: vec![ideal, actual],
        }
    }
}

/// Labels for a project chart: `Start`, `Sprint 1`, ... `Sprint n`.
pub fn sprint_categories(sprints: usize) -> Vec<String> {
    std::iter::once("Start".to_string())
        .chain((1..=sprints).map(|n| format!("Sprint {n}")))
        .collect()
}
