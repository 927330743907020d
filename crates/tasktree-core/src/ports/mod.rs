//! Ports - 抽象化レイヤー
//!
//! 複数の呼び出し元から 1 つの forest を共有するときの入口。
//! 実装は `impls` に置く。

pub mod task_store;

pub use self::task_store::TaskStore;
