//! tasktree-core
//!
//! Core building blocks for the hierarchical task manager.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（Priority, Task, TaskPath）
//! - **tree**: TaskTree（forest 全体に対する find / complete / delete / re-prioritize）
//! - **ports**: 抽象化レイヤー（TaskStore）
//! - **impls**: 実装（InMemoryTaskStore）
//! - **script**: JSON コマンドスクリプトの再生
//! - **render**: アウトライン表示
//! - **error**: エラー型

pub mod domain;
pub mod error;
pub mod impls;
pub mod ports;
pub mod render;
pub mod script;
pub mod tree;

pub use domain::{Priority, Task, TaskPath};
pub use error::ScriptError;
pub use impls::InMemoryTaskStore;
pub use ports::TaskStore;
pub use tree::TaskTree;
