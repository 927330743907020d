//! Domain model (priority, task nodes, paths).

pub mod path;
pub mod priority;
pub mod task;

pub use path::TaskPath;
pub use priority::Priority;
pub use task::Task;
