//! 基础执行器实现
//!
//! 提供 Executor trait 和各执行器共用的 BaseExecutor。

use async_trait::async_trait;

use super::execution_result::{DBResult, ExecutionResult};
use super::executor_stats::ExecutorStats;
use crate::query::context::QueryContext;

/// 统一的执行器 trait
///
/// 所有执行器必须实现的核心 trait，包含执行、生命周期和元数据功能。
#[async_trait]
pub trait Executor: Send {
    /// 执行语句，挂起直到远程调用结束且 continuation 完成
    async fn execute(&mut self) -> DBResult<ExecutionResult>;

    /// 打开执行器
    fn open(&mut self) -> DBResult<()>;

    /// 关闭执行器
    fn close(&mut self) -> DBResult<()>;

    /// 检查执行器是否已打开
    fn is_open(&self) -> bool;

    /// 获取执行器 ID
    fn id(&self) -> i64;

    /// 获取执行器名称
    fn name(&self) -> &str;

    /// 获取执行器描述
    fn description(&self) -> &str;

    /// 获取执行统计信息
    fn stats(&self) -> &ExecutorStats;

    /// 获取可变的执行统计信息
    fn stats_mut(&mut self) -> &mut ExecutorStats;

    /// 检查内存使用
    fn check_memory(&self) -> DBResult<()> {
        Ok(())
    }
}

/// 基础执行器
///
/// 保存执行器的标识、查询上下文、生命周期状态和统计信息。
#[derive(Clone, Debug)]
pub struct BaseExecutor {
    /// 执行器 ID
    pub id: i64,
    /// 执行器名称
    pub name: String,
    /// 执行器描述
    pub description: String,
    /// 查询上下文
    pub context: QueryContext,
    is_open: bool,
    stats: ExecutorStats,
}

impl BaseExecutor {
    pub fn new(id: i64, name: String, context: QueryContext) -> Self {
        Self {
            id,
            name,
            description: String::new(),
            context,
            is_open: false,
            stats: ExecutorStats::new(),
        }
    }

    /// 创建带描述的基础执行器
    pub fn with_description(id: i64, name: String, description: String, context: QueryContext) -> Self {
        Self {
            description,
            ..Self::new(id, name, context)
        }
    }

    pub fn context(&self) -> &QueryContext {
        &self.context
    }

    pub fn open(&mut self) -> DBResult<()> {
        self.is_open = true;
        Ok(())
    }

    pub fn close(&mut self) -> DBResult<()> {
        self.is_open = false;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// 获取执行统计信息（不可变引用）
    pub fn get_stats(&self) -> &ExecutorStats {
        &self.stats
    }

    /// 获取执行统计信息（可变引用）
    pub fn get_stats_mut(&mut self) -> &mut ExecutorStats {
        &mut self.stats
    }
}
