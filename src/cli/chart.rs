//! trackui chart command implementation

use crate::chart::{ideal_burn, sprint_categories, BurnDownChartData, ChartSpec};
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput};

use super::Context;

/// Options for `trackui chart`
pub struct ChartOptions {
    pub categories: Vec<String>,
    pub ideal: Vec<f64>,
    pub actual: Vec<i64>,
    pub total_and_steps: Option<(f64, usize)>,
    pub sprint: bool,
}

#[derive(serde::Serialize)]
struct ChartReport {
    data: BurnDownChartData,
    chart: ChartSpec,
}

pub fn run(ctx: &Context, options: ChartOptions) -> Result<()> {
    let ideal = match options.total_and_steps {
        Some((total, steps)) => ideal_burn(total, steps),
        None => options.ideal,
    };

    if ideal.iter().any(|v| *v < 0.0) || options.actual.iter().any(|v| *v < 0) {
        return Err(Error::InvalidArgument(
            "remaining effort cannot be negative".to_string(),
        ));
    }

    let points = ideal.len().max(options.actual.len());
    let categories = if options.categories.is_empty() {
        sprint_categories(points.saturating_sub(1))
    } else {
        options.categories
    };

    let data = BurnDownChartData::new(categories, ideal, options.actual);
    let chart = if options.sprint {
        ChartSpec::sprint_burndown(&data)
    } else {
        let hints = ctx
            .open_flags()?
            .is_flag_set(&ctx.config.prefs.hints_key);
        ChartSpec::product_burndown(&data, hints)
    };

    let mut human = HumanOutput::new(format!("trackui chart: {}", chart.title));
    human.push_summary("points", points.to_string());
    for series in &chart.series {
        let visibility = if series.visible { "" } else { " (hidden)" };
        human.push_summary(
            format!("{}{visibility}", series.name),
            series
                .data
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        );
    }
    if data.possible_delay {
        human.push_warning("actual remaining effort is above the ideal line");
    }
    if data.earlier_finish {
        human.push_detail("work finished ahead of the ideal line");
    }

    let report = ChartReport { data, chart };
    emit_success(ctx.output, "chart", &report, Some(&human))
}
