//! Item view fragment requests
//!
//! Item details open in a modal whose body is fetched as a server-rendered
//! fragment. The fetch itself belongs to the host page; this module only
//! builds the request path, which tells the server which page asked so it
//! can render the right back-links.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// Page the item modal is opened from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewSource {
    ProjectPage,
    ProjectProgressPage,
    SprintHistoryPage,
    TaskBoardPage,
}

impl ViewSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewSource::ProjectPage => "projectPage",
            ViewSource::ProjectProgressPage => "projectProgressPage",
            ViewSource::SprintHistoryPage => "sprintHistoryPage",
            ViewSource::TaskBoardPage => "taskBoardPage",
        }
    }

    /// Sprint pages pass the sprint along so the modal links back to it.
    pub fn requires_sprint(self) -> bool {
        matches!(self, ViewSource::SprintHistoryPage | ViewSource::TaskBoardPage)
    }
}

impl fmt::Display for ViewSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "project" | "projectPage" => Ok(ViewSource::ProjectPage),
            "project-progress" | "projectProgressPage" => Ok(ViewSource::ProjectProgressPage),
            "sprint-history" | "sprintHistoryPage" => Ok(ViewSource::SprintHistoryPage),
            "task-board" | "taskBoardPage" => Ok(ViewSource::TaskBoardPage),
            _ => Err(Error::InvalidArgument(format!(
                "unknown view source '{s}' (expected project|project-progress|sprint-history|task-board)"
            ))),
        }
    }
}

/// Request for one item's view fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragmentRequest {
    pub project_id: u64,
    pub item_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<u64>,
    pub source: ViewSource,
}

impl FragmentRequest {
    /// Sprint pages must name a sprint; other pages ignore one.
    pub fn new(
        project_id: u64,
        item_id: u64,
        source: ViewSource,
        sprint_id: Option<u64>,
    ) -> Result<Self> {
        let sprint_id = if source.requires_sprint() {
            Some(sprint_id.ok_or_else(|| {
                Error::InvalidArgument(format!("{source} requires a sprint id"))
            })?)
        } else {
            if sprint_id.is_some() {
                tracing::debug!(%source, "ignoring sprint id for non-sprint page");
            }
            None
        };

        Ok(Self {
            project_id,
            item_id,
            sprint_id,
            source,
        })
    }

    /// `/user/project/{project}/item/{item}/?source={page}[&sprintIdModal={sprint}]`
    pub fn path(&self) -> String {
        let mut path = format!(
            "/user/project/{}/item/{}/?source={}",
            self.project_id, self.item_id, self.source
        );
        if let Some(sprint) = self.sprint_id {
            path.push_str(&format!("&sprintIdModal={sprint}"));
        }
        path
    }
}
