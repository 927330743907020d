//! Task node: title + priority + completion flag + owned children.

use serde::{Deserialize, Serialize};

use super::Priority;

/// A node in the task forest.
///
/// Design:
/// - Children are exclusively owned (`Vec<Task>`); there are no back-pointers.
/// - `title` is not unique. Lookups are first-match-wins in pre-order.
/// - Completion and priority are not continuously kept in sync between parent
///   and child. Only `complete` and the tree's priority change touch relatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub(crate) title: String,
    pub(crate) priority: Priority,
    #[serde(default)]
    pub(crate) completed: bool,
    #[serde(default)]
    pub(crate) subtasks: Vec<Task>,
}

impl Task {
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Self {
            title: title.into(),
            priority,
            completed: false,
            subtasks: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn subtasks(&self) -> &[Task] {
        &self.subtasks
    }

    /// Pre-order search of this subtree (this node first, then each child's
    /// subtree in insertion order).
    pub fn find(&self, title: &str) -> Option<&Task> {
        if self.title == title {
            return Some(self);
        }
        self.subtasks.iter().find_map(|subtask| subtask.find(title))
    }

    /// Mark this node and every descendant as completed.
    pub fn complete(&mut self) {
        self.completed = true;
        for subtask in &mut self.subtasks {
            subtask.complete();
        }
    }

    /// Number of nodes strictly below this one.
    pub fn descendant_count(&self) -> usize {
        self.subtasks
            .iter()
            .map(|subtask| 1 + subtask.descendant_count())
            .sum()
    }
}
