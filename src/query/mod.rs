// Query module for the tag schema statements
//
// - context: 会话、线程池与查询上下文
// - permission: 派发前的授权
// - planner: 计划节点
// - executor: 执行器与结果转换

pub mod context;
pub mod executor;
pub mod permission;
pub mod planner;

pub use crate::core::error::{DBError, DBResult};
pub use executor::base::ExecutionResult;
