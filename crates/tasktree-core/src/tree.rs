//! TaskTree: a forest of tasks addressed by title.
//!
//! Traversal order (used by every lookup): roots in insertion order, each
//! root's subtree in pre-order. When titles are duplicated the first node in
//! this order wins.
//!
//! Design:
//! - Read-only walks are plain recursive functions over `&Task`.
//! - Mutations that need the owning collection (delete) or the ancestor chain
//!   (priority propagation) first resolve a `TaskPath`, then walk it mutably.

use tracing::{debug, trace};

use crate::domain::{Priority, Task, TaskPath};

/// Forest of task nodes. Owns the root list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskTree {
    roots: Vec<Task>,
}

impl TaskTree {
    pub fn new() -> Self {
        Self { roots: Vec::new() }
    }

    pub fn from_roots(roots: Vec<Task>) -> Self {
        Self { roots }
    }

    /// Top-level tasks, insertion-ordered.
    pub fn roots(&self) -> &[Task] {
        &self.roots
    }

    /// Total number of nodes at any depth.
    pub fn len(&self) -> usize {
        self.roots
            .iter()
            .map(|root| 1 + root.descendant_count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Pre-order iterator over the whole forest, yielding `(depth, task)`.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder::new(&self.roots)
    }

    pub fn find_task(&self, title: &str) -> Option<&Task> {
        let found = self.roots.iter().find_map(|root| root.find(title));
        if found.is_none() {
            trace!(title, "task not found");
        }
        found
    }

    pub fn find_task_mut(&mut self, title: &str) -> Option<&mut Task> {
        let path = self.path_of(title)?;
        self.get_mut(&path)
    }

    /// Path of the first task titled `title`, in the same order as `find_task`.
    pub fn path_of(&self, title: &str) -> Option<TaskPath> {
        let mut indices = Vec::new();
        if locate(&self.roots, title, &mut indices) {
            TaskPath::new(indices)
        } else {
            None
        }
    }

    pub fn get(&self, path: &TaskPath) -> Option<&Task> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.roots.get(*first)?;
        for &index in rest {
            node = node.subtasks.get(index)?;
        }
        Some(node)
    }

    fn get_mut(&mut self, path: &TaskPath) -> Option<&mut Task> {
        self.collection_mut(path.parent())?.get_mut(path.leaf())
    }

    /// Append a new incomplete root task. Titles are not checked for uniqueness.
    pub fn add_task(&mut self, title: impl Into<String>, priority: Priority) -> &Task {
        let task = Task::new(title, priority);
        debug!(title = %task.title, %priority, "add task");
        self.roots.push(task);
        self.roots.last().expect("root task must exist after push")
    }

    /// Append a child under the first task titled `parent_title`.
    ///
    /// The child copies the parent's priority as it is right now. Returns `None`
    /// (and creates nothing) when the parent does not exist.
    pub fn add_subtask(
        &mut self,
        parent_title: &str,
        subtask_title: impl Into<String>,
    ) -> Option<&Task> {
        let parent = self.find_task_mut(parent_title)?;
        let subtask = Task::new(subtask_title, parent.priority);
        debug!(
            parent = parent_title,
            title = %subtask.title,
            priority = %subtask.priority,
            "add subtask"
        );
        parent.subtasks.push(subtask);
        parent.subtasks.last()
    }

    /// Mark the first task titled `title` and its whole subtree as completed.
    /// Ancestors and siblings are left alone.
    pub fn complete_task(&mut self, title: &str) -> bool {
        match self.find_task_mut(title) {
            Some(task) => {
                task.complete();
                debug!(title, "complete task");
                true
            }
            None => false,
        }
    }

    /// Incomplete tasks at any depth, sorted by ascending priority.
    ///
    /// A completed node is neither collected nor descended into, so its
    /// subtree is skipped even if some descendant was later re-opened.
    /// The sort is stable: equal priorities keep forest traversal order.
    pub fn get_incomplete_tasks(&self) -> Vec<&Task> {
        let mut incomplete = Vec::new();
        for root in &self.roots {
            collect_incomplete(root, &mut incomplete);
        }
        incomplete.sort_by_key(|task| task.priority);
        incomplete
    }

    /// Set the first task titled `title` to exactly `new_priority`, and lower
    /// each of its ancestors to `min(ancestor, new_priority)`.
    ///
    /// Only the direct ancestor chain is touched. Ancestors are never raised.
    pub fn change_priority(&mut self, title: &str, new_priority: Priority) -> bool {
        let Some(path) = self.path_of(title) else {
            return false;
        };

        let mut siblings = &mut self.roots;
        for &index in path.parent() {
            let ancestor = &mut siblings[index];
            ancestor.priority = ancestor.priority.min(new_priority);
            siblings = &mut ancestor.subtasks;
        }
        siblings[path.leaf()].priority = new_priority;

        debug!(title, priority = %new_priority, %path, "change priority");
        true
    }

    /// Remove the first task titled `title` from its direct parent (or the root
    /// list). Its subtree goes with it.
    pub fn delete_task(&mut self, title: &str) -> bool {
        self.remove_task(title).is_some()
    }

    /// Same as `delete_task`, but hands back the detached subtree.
    pub fn remove_task(&mut self, title: &str) -> Option<Task> {
        let path = self.path_of(title)?;
        let siblings = self.collection_mut(path.parent())?;
        let removed = siblings.remove(path.leaf());
        debug!(
            title,
            %path,
            descendants = removed.descendant_count(),
            "delete task"
        );
        Some(removed)
    }

    /// Collection that owns the node at `parent ++ [i]`: the root list for an
    /// empty parent path, otherwise the parent's subtasks.
    fn collection_mut(&mut self, parent: &[usize]) -> Option<&mut Vec<Task>> {
        let mut siblings = &mut self.roots;
        for &index in parent {
            siblings = &mut siblings.get_mut(index)?.subtasks;
        }
        Some(siblings)
    }
}

/// Pre-order search that records the index path of the first match.
/// `path` is left holding the match on `true`; its contents are unspecified
/// on `false`.
fn locate(tasks: &[Task], title: &str, path: &mut Vec<usize>) -> bool {
    for (index, task) in tasks.iter().enumerate() {
        path.push(index);
        if task.title == title || locate(&task.subtasks, title, path) {
            return true;
        }
        path.pop();
    }
    false
}

fn collect_incomplete<'a>(task: &'a Task, out: &mut Vec<&'a Task>) {
    if task.completed {
        return;
    }
    out.push(task);
    for subtask in &task.subtasks {
        collect_incomplete(subtask, out);
    }
}

/// Stack-based pre-order walk over a forest.
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a Task)>,
}

impl<'a> PreOrder<'a> {
    fn new(roots: &'a [Task]) -> Self {
        Self {
            stack: roots.iter().rev().map(|root| (0, root)).collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a Task);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, task) = self.stack.pop()?;
        self.stack
            .extend(task.subtasks.iter().rev().map(|subtask| (depth + 1, subtask)));
        Some((depth, task))
    }
}
