//! 执行器枚举
//!
//! 对六种标签语句执行器做静态分发，替代 `Box<dyn Executor>`。

use async_trait::async_trait;

use super::admin::tag::{
    AlterTagExecutor, CreateTagExecutor, DescTagExecutor, DropTagExecutor, ShowCreateTagExecutor,
    ShowTagsExecutor,
};
use super::base::{DBResult, ExecutionResult, Executor, ExecutorStats};

#[derive(Debug)]
pub enum TagExecutorEnum {
    CreateTag(CreateTagExecutor),
    DescTag(DescTagExecutor),
    DropTag(DropTagExecutor),
    ShowTags(ShowTagsExecutor),
    ShowCreateTag(ShowCreateTagExecutor),
    AlterTag(AlterTagExecutor),
}

macro_rules! dispatch {
    ($self:expr, $exec:ident => $body:expr) => {
        match $self {
            TagExecutorEnum::CreateTag($exec) => $body,
            TagExecutorEnum::DescTag($exec) => $body,
            TagExecutorEnum::DropTag($exec) => $body,
            TagExecutorEnum::ShowTags($exec) => $body,
            TagExecutorEnum::ShowCreateTag($exec) => $body,
            TagExecutorEnum::AlterTag($exec) => $body,
        }
    };
}

#[async_trait]
impl Executor for TagExecutorEnum {
    async fn execute(&mut self) -> DBResult<ExecutionResult> {
        dispatch!(self, e => e.execute().await)
    }

    fn open(&mut self) -> DBResult<()> {
        dispatch!(self, e => e.open())
    }

    fn close(&mut self) -> DBResult<()> {
        dispatch!(self, e => e.close())
    }

    fn is_open(&self) -> bool {
        dispatch!(self, e => e.is_open())
    }

    fn id(&self) -> i64 {
        dispatch!(self, e => e.id())
    }

    fn name(&self) -> &str {
        dispatch!(self, e => e.name())
    }

    fn description(&self) -> &str {
        dispatch!(self, e => e.description())
    }

    fn stats(&self) -> &ExecutorStats {
        dispatch!(self, e => e.stats())
    }

    fn stats_mut(&mut self) -> &mut ExecutorStats {
        dispatch!(self, e => e.stats_mut())
    }

    fn check_memory(&self) -> DBResult<()> {
        dispatch!(self, e => e.check_memory())
    }
}
