//! 执行器基础类型统一模块
//!
//! 模块结构：
//! - executor_stats.rs    - 执行器统计信息
//! - execution_result.rs  - 执行结果类型
//! - executor_base.rs     - 基础执行器实现

pub mod executor_stats;
pub mod execution_result;
pub mod executor_base;

pub use executor_stats::ExecutorStats;
pub use execution_result::{ExecutionResult, DBResult};
pub use executor_base::{BaseExecutor, Executor};
