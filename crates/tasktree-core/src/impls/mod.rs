//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryTaskStore**: プロセス内で共有する TaskStore

pub mod inmem_store;

pub use self::inmem_store::InMemoryTaskStore;
