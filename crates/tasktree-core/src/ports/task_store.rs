//! TaskStore port - 共有された TaskTree へのアクセス
//!
//! Borrowed handles cannot outlive a lock, so every method returns owned
//! snapshots (`Task` clones that include the subtree).

use async_trait::async_trait;

use crate::domain::{Priority, Task};
use crate::tree::TaskTree;

/// TaskStore exposes the `TaskTree` operations to shared callers.
///
/// # 設計原則
/// - 1 operation = 1 exclusive lock over the whole tree. A partially applied
///   priority propagation or delete is never observable.
/// - "Not found" is `None` / `false`, never an error.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn find_task(&self, title: &str) -> Option<Task>;

    async fn add_task(&self, title: String, priority: Priority) -> Task;

    async fn add_subtask(&self, parent_title: &str, subtask_title: String) -> Option<Task>;

    async fn complete_task(&self, title: &str) -> bool;

    /// Incomplete tasks sorted by ascending priority (see `TaskTree::get_incomplete_tasks`).
    async fn incomplete_tasks(&self) -> Vec<Task>;

    async fn change_priority(&self, title: &str, new_priority: Priority) -> bool;

    async fn delete_task(&self, title: &str) -> bool;

    /// Copy of the whole forest.
    async fn snapshot(&self) -> TaskTree;
}
