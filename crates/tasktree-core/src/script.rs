//! Script - JSON コマンド列を TaskStore に対して再生する
//!
//! ```json
//! { "version": 1,
//!   "commands": [
//!     { "op": "add_task", "title": "Task 1", "priority": 3 },
//!     { "op": "add_subtask", "parent": "Task 1", "title": "Subtask 1" },
//!     { "op": "incomplete_tasks" } ] }
//! ```
//!
//! "Not found" is reported as an outcome; only a malformed document is an error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Priority, Task};
use crate::error::ScriptError;
use crate::ports::TaskStore;

pub const SCRIPT_VERSION: u32 = 1;

fn default_version() -> u32 {
    SCRIPT_VERSION
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default = "default_version")]
    pub version: u32,
    pub commands: Vec<Command>,
}

/// One operation against the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    AddTask {
        title: String,
        #[serde(default)]
        priority: Priority,
    },
    AddSubtask {
        parent: String,
        title: String,
    },
    CompleteTask {
        title: String,
    },
    ChangePriority {
        title: String,
        priority: Priority,
    },
    DeleteTask {
        title: String,
    },
    FindTask {
        title: String,
    },
    IncompleteTasks,
}

/// Flat view of a task for reporting (subtasks are counted, not expanded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub title: String,
    pub priority: Priority,
    pub completed: bool,
    pub subtasks: usize,
}

impl From<&Task> for TaskSummary {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title().to_string(),
            priority: task.priority(),
            completed: task.is_completed(),
            subtasks: task.subtasks().len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", content = "value", rename_all = "snake_case")]
pub enum CommandOutcome {
    Created(TaskSummary),
    NotFound,
    Applied(bool),
    Found(TaskSummary),
    Listed(Vec<TaskSummary>),
}

impl Script {
    pub fn parse(input: &str) -> Result<Self, ScriptError> {
        let script: Script = serde_json::from_str(input)?;
        if script.version != SCRIPT_VERSION {
            return Err(ScriptError::UnsupportedVersion(script.version));
        }
        Ok(script)
    }

    /// Apply every command in order and collect one outcome per command.
    pub async fn run(&self, store: &dyn TaskStore) -> Vec<CommandOutcome> {
        let mut outcomes = Vec::with_capacity(self.commands.len());
        for command in &self.commands {
            let outcome = command.apply(store).await;
            debug!(?command, ?outcome, "command applied");
            outcomes.push(outcome);
        }
        outcomes
    }
}

impl Command {
    pub async fn apply(&self, store: &dyn TaskStore) -> CommandOutcome {
        match self {
            Command::AddTask { title, priority } => {
                let task = store.add_task(title.clone(), *priority).await;
                CommandOutcome::Created(TaskSummary::from(&task))
            }
            Command::AddSubtask { parent, title } => {
                match store.add_subtask(parent, title.clone()).await {
                    Some(task) => CommandOutcome::Created(TaskSummary::from(&task)),
                    None => CommandOutcome::NotFound,
                }
            }
            Command::CompleteTask { title } => {
                CommandOutcome::Applied(store.complete_task(title).await)
            }
            Command::ChangePriority { title, priority } => {
                CommandOutcome::Applied(store.change_priority(title, *priority).await)
            }
            Command::DeleteTask { title } => {
                CommandOutcome::Applied(store.delete_task(title).await)
            }
            Command::FindTask { title } => match store.find_task(title).await {
                Some(task) => CommandOutcome::Found(TaskSummary::from(&task)),
                None => CommandOutcome::NotFound,
            },
            Command::IncompleteTasks => CommandOutcome::Listed(
                store
                    .incomplete_tasks()
                    .await
                    .iter()
                    .map(TaskSummary::from)
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::InMemoryTaskStore;
    use rstest::rstest;

    fn summary(title: &str, priority: f64, completed: bool, subtasks: usize) -> TaskSummary {
        TaskSummary {
            title: title.to_string(),
            priority: Priority::new(priority),
            completed,
            subtasks,
        }
    }

    #[test]
    fn parse_applies_defaults() {
        let script = Script::parse(
            r#"{ "commands": [ { "op": "add_task", "title": "T" }, { "op": "incomplete_tasks" } ] }"#,
        )
        .unwrap();

        assert_eq!(script.version, SCRIPT_VERSION);
        assert_eq!(
            script.commands,
            vec![
                Command::AddTask {
                    title: "T".to_string(),
                    priority: Priority::default(),
                },
                Command::IncompleteTasks,
            ]
        );
    }

    #[rstest]
    #[case::not_json("not json")]
    #[case::unknown_op(r#"{ "commands": [ { "op": "explode" } ] }"#)]
    #[case::missing_field(r#"{ "commands": [ { "op": "delete_task" } ] }"#)]
    fn parse_rejects_malformed(#[case] input: &str) {
        assert!(matches!(Script::parse(input), Err(ScriptError::Parse(_))));
    }

    #[test]
    fn parse_error_keeps_serde_detail_in_source_only() {
        let err = Script::parse("not json").unwrap_err();
        assert_eq!(err.to_string(), "script parse error");

        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("expected"));
    }

    #[tokio::test]
    async fn fractional_priority_is_accepted() {
        let script = Script::parse(
            r#"{ "commands": [
                { "op": "add_task", "title": "A", "priority": 2.5 },
                { "op": "add_subtask", "parent": "A", "title": "B" },
                { "op": "change_priority", "title": "B", "priority": 0.75 },
                { "op": "find_task", "title": "A" }
            ] }"#,
        )
        .unwrap();

        let store = InMemoryTaskStore::new();
        let outcomes = script.run(&store).await;

        assert_eq!(
            outcomes,
            vec![
                CommandOutcome::Created(summary("A", 2.5, false, 0)),
                CommandOutcome::Created(summary("B", 2.5, false, 0)),
                CommandOutcome::Applied(true),
                CommandOutcome::Found(summary("A", 0.75, false, 1)),
            ]
        );
        assert_eq!(
            serde_json::to_value(&script.commands[0]).unwrap(),
            serde_json::json!({ "op": "add_task", "title": "A", "priority": 2.5 })
        );
    }

    #[test]
    fn parse_rejects_other_versions() {
        let result = Script::parse(r#"{ "version": 2, "commands": [] }"#);
        assert!(matches!(result, Err(ScriptError::UnsupportedVersion(2))));
    }

    #[tokio::test]
    async fn run_reports_outcomes_in_order() {
        let script = Script::parse(
            r#"{ "version": 1, "commands": [
                { "op": "add_task", "title": "Task 1", "priority": 3 },
                { "op": "add_task", "title": "Task 2", "priority": 1 },
                { "op": "add_subtask", "parent": "Task 1", "title": "Subtask 1" },
                { "op": "add_subtask", "parent": "Ghost", "title": "Orphan" },
                { "op": "add_subtask", "parent": "Subtask 1", "title": "Subtask 2" },
                { "op": "complete_task", "title": "Subtask 2" },
                { "op": "complete_task", "title": "Ghost" },
                { "op": "incomplete_tasks" },
                { "op": "change_priority", "title": "Subtask 1", "priority": 0 },
                { "op": "find_task", "title": "Task 1" },
                { "op": "delete_task", "title": "Subtask 2" },
                { "op": "find_task", "title": "Subtask 2" }
            ] }"#,
        )
        .unwrap();

        let store = InMemoryTaskStore::new();
        let outcomes = script.run(&store).await;

        assert_eq!(
            outcomes,
            vec![
                CommandOutcome::Created(summary("Task 1", 3.0, false, 0)),
                CommandOutcome::Created(summary("Task 2", 1.0, false, 0)),
                CommandOutcome::Created(summary("Subtask 1", 3.0, false, 0)),
                CommandOutcome::NotFound,
                CommandOutcome::Created(summary("Subtask 2", 3.0, false, 0)),
                CommandOutcome::Applied(true),
                CommandOutcome::Applied(false),
                CommandOutcome::Listed(vec![
                    summary("Task 2", 1.0, false, 0),
                    summary("Task 1", 3.0, false, 1),
                    summary("Subtask 1", 3.0, false, 1),
                ]),
                CommandOutcome::Applied(true),
                CommandOutcome::Found(summary("Task 1", 0.0, false, 1)),
                CommandOutcome::Applied(true),
                CommandOutcome::NotFound,
            ]
        );
    }

    #[test]
    fn outcome_serializes_with_result_tag() {
        let json = serde_json::to_value(CommandOutcome::Applied(true)).unwrap();
        assert_eq!(json, serde_json::json!({ "result": "applied", "value": true }));

        let json = serde_json::to_value(CommandOutcome::NotFound).unwrap();
        assert_eq!(json, serde_json::json!({ "result": "not_found" }));
    }
}
