//! TaskPath - root から対象ノードまでの index 列
//!
//! Back-pointer を持たずに「親のコレクション」を特定するために使う。
//! `[2, 0, 1]` は `roots[2].subtasks[0].subtasks[1]` を指す。

use std::fmt;

/// Non-empty sequence of child indices from a root to a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskPath(Vec<usize>);

impl TaskPath {
    /// Returns `None` for an empty index list.
    pub fn new(indices: Vec<usize>) -> Option<Self> {
        if indices.is_empty() {
            None
        } else {
            Some(Self(indices))
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Index of the node inside its owning collection.
    pub fn leaf(&self) -> usize {
        self.0[self.0.len() - 1]
    }

    /// Indices of the ancestors, root first. Empty for a root task.
    pub fn parent(&self) -> &[usize] {
        &self.0[..self.0.len() - 1]
    }

    /// 0 for a root task.
    pub fn depth(&self) -> usize {
        self.0.len() - 1
    }
}

impl fmt::Display for TaskPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}
