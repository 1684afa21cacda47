//! TagExecutor - 标签语句的通用执行流程
//!
//! 每条标签语句都走同一条异步链：
//! 解析图空间 → 授权 → 向元数据服务发起调用 → 在执行器线程池上调度 continuation
//! → 内存检查守卫 → 转换结果或归类失败。
//!
//! 各语句只需实现 `TagCommand`，给出远程调用和结果转换两部分。

use async_trait::async_trait;
use futures::future::BoxFuture;
use std::sync::Arc;
use std::time::Instant;

use crate::core::error::{DBError, MetaResult};
use crate::core::types::SpaceId;
use crate::meta::MetaClient;
use crate::query::context::QueryContext;
use crate::query::executor::base::{BaseExecutor, DBResult, ExecutionResult, Executor, ExecutorStats};
use crate::query::executor::memory_manager::{MemoryCheckGuard, MemoryTracker};
use crate::query::permission::OperationType;

/// 一条标签语句
///
/// `dispatch` 构造远程调用，`translate` 在 continuation 中把响应转换成执行结果。
/// continuation 可能运行在任意工作线程上，实现不得依赖调用线程。
pub trait TagCommand: Send + Sync + 'static {
    /// 远程调用成功时的响应类型
    type Response: Send + 'static;

    /// 执行器名称
    const NAME: &'static str;

    /// 执行器描述
    const DESCRIPTION: &'static str;

    /// 读语句还是写语句，决定授权方式
    fn kind(&self) -> OperationType;

    /// 语句针对的标签名，SHOW TAGS 没有
    fn tag_name(&self) -> Option<&str> {
        None
    }

    /// 目标图空间，默认取会话当前选择的图空间
    fn space_id(&self, context: &QueryContext) -> DBResult<SpaceId> {
        session_space(context)
    }

    fn dispatch(
        &self,
        client: Arc<dyn MetaClient>,
        space_id: SpaceId,
    ) -> BoxFuture<'static, MetaResult<Self::Response>>;

    fn translate(&self, resp: Self::Response, tracker: &MemoryTracker) -> DBResult<ExecutionResult>;

    /// 日志中使用的语句描述，例如 "Create tag `person'"
    fn describe(&self) -> String;
}

/// 会话当前选择的图空间
pub fn session_space(context: &QueryContext) -> DBResult<SpaceId> {
    context
        .session()
        .space()
        .map(|space| space.id)
        .ok_or_else(|| DBError::unexpected("Space was not chosen"))
}

/// 标签语句执行器
#[derive(Debug)]
pub struct TagExecutor<C: TagCommand> {
    base: BaseExecutor,
    command: Arc<C>,
}

impl<C: TagCommand> TagExecutor<C> {
    pub fn new(id: i64, context: QueryContext, command: C) -> Self {
        Self {
            base: BaseExecutor::with_description(
                id,
                C::NAME.to_string(),
                C::DESCRIPTION.to_string(),
                context,
            ),
            command: Arc::new(command),
        }
    }

    pub fn command(&self) -> &C {
        &self.command
    }

    pub fn context(&self) -> &QueryContext {
        self.base.context()
    }

    fn authorize(&self, space_id: SpaceId) -> DBResult<()> {
        let context = self.base.context();
        context
            .permission_checker()
            .check_permission(context.session(), self.command.kind(), space_id)
    }

    async fn run(&mut self) -> DBResult<ExecutionResult> {
        let space_id = self.command.space_id(self.base.context())?;
        self.authorize(space_id)?;

        let context = self.base.context();
        let client = Arc::clone(context.meta_client());
        // 结果的内存计入本语句，语句结束时归还给查询
        let tracker = Arc::new(MemoryTracker::child(context.memory_tracker()));
        let handle = context.runner().handle().clone();

        log::debug!("SpaceId: {}, dispatching {}", space_id, self.command.describe());
        let exec_start = Instant::now();
        let response = self.command.dispatch(client, space_id).await;

        let command = Arc::clone(&self.command);
        let guard_tracker = Arc::clone(&tracker);
        let continuation = handle.spawn(async move {
            let guard = MemoryCheckGuard::new(guard_tracker);
            let outcome = match response {
                Ok(resp) => command.translate(resp, guard.tracker()).inspect_err(|err| {
                    log::warn!("SpaceId: {}, {} failed: {}", space_id, command.describe(), err);
                }),
                Err(err) => {
                    log::warn!("SpaceId: {}, {} failed: {}", space_id, command.describe(), err);
                    Err(DBError::from_meta(space_id, command.tag_name(), err))
                }
            };
            guard.finish(outcome)
        });

        let outcome = match continuation.await {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!(
                    "SpaceId: {}, {} aborted: {}",
                    space_id,
                    self.command.describe(),
                    err
                );
                MemoryCheckGuard::new(Arc::clone(&tracker)).finish(Err(DBError::from_join_error(err)))
            }
        };

        let stats = self.base.get_stats_mut();
        stats.add_exec_time(exec_start.elapsed());
        stats.set_memory_peak(tracker.peak_usage());
        outcome
    }
}

#[async_trait]
impl<C: TagCommand> Executor for TagExecutor<C> {
    async fn execute(&mut self) -> DBResult<ExecutionResult> {
        let start = Instant::now();
        let outcome = self.run().await;
        if let Ok(result) = &outcome {
            self.base.get_stats_mut().add_row(result.count());
        }
        self.base.get_stats_mut().add_total_time(start.elapsed());
        outcome
    }

    fn open(&mut self) -> DBResult<()> {
        self.base.open()
    }

    fn close(&mut self) -> DBResult<()> {
        self.base.close()
    }

    fn is_open(&self) -> bool {
        self.base.is_open()
    }

    fn id(&self) -> i64 {
        self.base.id
    }

    fn name(&self) -> &str {
        &self.base.name
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn stats(&self) -> &ExecutorStats {
        self.base.get_stats()
    }

    fn stats_mut(&mut self) -> &mut ExecutorStats {
        self.base.get_stats_mut()
    }

    fn check_memory(&self) -> DBResult<()> {
        if self.base.context().memory_tracker().is_exceeded() {
            return Err(DBError::MemoryExceeded);
        }
        Ok(())
    }
}
