use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of work item the creation form is producing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkItemType {
    Epic,
    Story,
    Task,
    Bug,
}

impl WorkItemType {
    pub const ALL: [WorkItemType; 4] = [
        WorkItemType::Epic,
        WorkItemType::Story,
        WorkItemType::Task,
        WorkItemType::Bug,
    ];

    /// Parse the type selector's value. Matching is exact (`"BUG"`, not
    /// `"bug"`); anything else is `None`, which callers treat as a no-op.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "EPIC" => Some(WorkItemType::Epic),
            "STORY" => Some(WorkItemType::Story),
            "TASK" => Some(WorkItemType::Task),
            "BUG" => Some(WorkItemType::Bug),
            _ => None,
        }
    }

    /// Selector value, as rendered in the form markup
    pub fn as_str(self) -> &'static str {
        match self {
            WorkItemType::Epic => "EPIC",
            WorkItemType::Story => "STORY",
            WorkItemType::Task => "TASK",
            WorkItemType::Bug => "BUG",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            WorkItemType::Epic => "Epic",
            WorkItemType::Story => "Story",
            WorkItemType::Task => "Task",
            WorkItemType::Bug => "Bug",
        }
    }

    /// Bugs and tasks hang off stories and carry their own effort.
    pub fn is_leaf(self) -> bool {
        matches!(self, WorkItemType::Bug | WorkItemType::Task)
    }
}

impl fmt::Display for WorkItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_exact() {
        assert_eq!(WorkItemType::parse("BUG"), Some(WorkItemType::Bug));
        assert_eq!(WorkItemType::parse("EPIC"), Some(WorkItemType::Epic));
        assert_eq!(WorkItemType::parse("bug"), None);
        assert_eq!(WorkItemType::parse(" TASK"), None);
        assert_eq!(WorkItemType::parse("SUBTASK"), None);
        assert_eq!(WorkItemType::parse(""), None);
    }

    #[test]
    fn selector_values_roundtrip() {
        for t in WorkItemType::ALL {
            assert_eq!(WorkItemType::parse(t.as_str()), Some(t));
            assert_eq!(t.to_string(), t.as_str());
        }
    }

    #[test]
    fn leaf_types_and_names() {
        assert!(WorkItemType::Bug.is_leaf());
        assert!(WorkItemType::Task.is_leaf());
        assert!(!WorkItemType::Story.is_leaf());
        assert!(!WorkItemType::Epic.is_leaf());
        assert_eq!(WorkItemType::Task.display_name(), "Task");
    }

    #[test]
    fn serde_uses_selector_values() {
        let json = serde_json::to_string(&WorkItemType::Story).unwrap();
        assert_eq!(json, "\"STORY\"");
        let parsed: WorkItemType = serde_json::from_str("\"BUG\"").unwrap();
        assert_eq!(parsed, WorkItemType::Bug);
    }
}
