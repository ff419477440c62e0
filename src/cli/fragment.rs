//! trackui fragment command implementation

use crate::error::Result;
use crate::fragment::{FragmentRequest, ViewSource};
use crate::output::{emit_success, HumanOutput};

use super::Context;

#[derive(serde::Serialize)]
struct FragmentReport {
    request: FragmentRequest,
    path: String,
}

pub fn run(
    ctx: &Context,
    project: u64,
    item: u64,
    source: &str,
    sprint: Option<u64>,
) -> Result<()> {
    let source: ViewSource = source.parse()?;
    let request = FragmentRequest::new(project, item, source, sprint)?;
    let path = request.path();

    let mut human = HumanOutput::new(path.clone());
    human.push_summary("source", source.to_string());

    let report = FragmentReport { request, path };
    emit_success(ctx.output, "fragment", &report, Some(&human))
}
