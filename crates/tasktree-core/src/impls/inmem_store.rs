//! InMemoryTaskStore - Mutex で守られた TaskTree
//!
//! # 学習ポイント
//! - Arc<Mutex<_>> による共有所有権と排他制御
//! - ロックの外に参照を出さない（clone した snapshot を返す）

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Priority, Task};
use crate::ports::TaskStore;
use crate::tree::TaskTree;

/// In-memory TaskStore. Cloning shares the same tree.
#[derive(Clone, Default)]
pub struct InMemoryTaskStore {
    tree: Arc<Mutex<TaskTree>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn find_task(&self, title: &str) -> Option<Task> {
        self.tree.lock().await.find_task(title).cloned()
    }

    async fn add_task(&self, title: String, priority: Priority) -> Task {
        self.tree.lock().await.add_task(title, priority).clone()
    }

    async fn add_subtask(&self, parent_title: &str, subtask_title: String) -> Option<Task> {
        self.tree
            .lock()
            .await
            .add_subtask(parent_title, subtask_title)
            .cloned()
    }

    async fn complete_task(&self, title: &str) -> bool {
        self.tree.lock().await.complete_task(title)
    }

    async fn incomplete_tasks(&self) -> Vec<Task> {
        let tree = self.tree.lock().await;
        tree.get_incomplete_tasks().into_iter().cloned().collect()
    }

    async fn change_priority(&self, title: &str, new_priority: Priority) -> bool {
        self.tree.lock().await.change_priority(title, new_priority)
    }

    async fn delete_task(&self, title: &str) -> bool {
        self.tree.lock().await.delete_task(title)
    }

    async fn snapshot(&self) -> TaskTree {
        self.tree.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_and_find_roundtrip() {
        let store = InMemoryTaskStore::new();
        store.add_task("Task".to_string(), Priority::new(3.0)).await;
        let subtask = store
            .add_subtask("Task", "Subtask".to_string())
            .await
            .unwrap();
        assert_eq!(subtask.priority(), Priority::new(3.0));

        let found = store.find_task("Task").await.unwrap();
        assert_eq!(found.subtasks().len(), 1);
        assert!(store.find_task("Nope").await.is_none());
    }

    #[tokio::test]
    async fn test_snapshot_is_detached() {
        let store = InMemoryTaskStore::new();
        store.add_task("Task".to_string(), Priority::new(1.0)).await;

        let before = store.snapshot().await;
        assert!(store.complete_task("Task").await);

        assert!(!before.roots()[0].is_completed());
        assert!(store.snapshot().await.roots()[0].is_completed());
    }

    #[tokio::test]
    async fn test_change_priority_and_delete() {
        let store = InMemoryTaskStore::new();
        store.add_task("Task".to_string(), Priority::new(3.0)).await;
        store.add_subtask("Task", "Subtask".to_string()).await;

        assert!(store.change_priority("Subtask", Priority::new(1.0)).await);
        assert_eq!(
            store.find_task("Task").await.unwrap().priority(),
            Priority::new(1.0)
        );

        assert!(store.delete_task("Subtask").await);
        assert!(!store.delete_task("Subtask").await);
        assert_eq!(store.snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_one_tree() {
        let store = InMemoryTaskStore::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .add_task(format!("Task {i}"), Priority::new(f64::from(i)))
                        .await;
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let incomplete = store.incomplete_tasks().await;
        assert_eq!(incomplete.len(), 8);
        assert_eq!(incomplete[0].title(), "Task 0");
        assert_eq!(incomplete[7].title(), "Task 7");
    }
}
