//! Plain-text outline of a forest.

use crate::tree::TaskTree;

const INDENT: &str = "    ";

/// One line per task in pre-order:
///
/// ```text
/// [ ] Task 1 (p3)
///     [x] Subtask 1 (p3)
/// ```
pub fn render_outline(tree: &TaskTree) -> String {
    let mut out = String::new();
    for (depth, task) in tree.iter() {
        let marker = if task.is_completed() { "[x]" } else { "[ ]" };
        out.push_str(&INDENT.repeat(depth));
        out.push_str(&format!(
            "{marker} {} (p{})\n",
            task.title(),
            task.priority()
        ));
    }
    out
}
