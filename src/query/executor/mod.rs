//! 执行器模块
//!
//! - `base`：Executor trait、执行结果与统计信息
//! - `admin::tag`：标签语句执行器
//! - `schema_util`：Schema 结果格式化
//! - `memory_manager`：查询内存跟踪与检查守卫

pub mod admin;
pub mod base;
pub mod executor_enum;
pub mod factory;
pub mod memory_manager;
pub mod schema_util;

pub use base::{BaseExecutor, DBResult, ExecutionResult, Executor, ExecutorStats};
pub use executor_enum::TagExecutorEnum;
pub use factory::ExecutorFactory;
pub use memory_manager::{MemoryCheckGuard, MemoryConfig, MemoryTracker};
