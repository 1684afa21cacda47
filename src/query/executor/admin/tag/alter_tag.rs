//! AlterTagExecutor - 修改标签执行器
//!
//! 修改项与属性原样交给元数据服务，由其保证原子性。
//! 目标图空间取自计划节点，而不是会话。

use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;

use super::tag_executor::{TagCommand, TagExecutor};
use crate::core::error::MetaResult;
use crate::core::types::SpaceId;
use crate::meta::MetaClient;
use crate::query::context::QueryContext;
use crate::query::executor::base::{DBResult, ExecutionResult};
use crate::query::executor::memory_manager::MemoryTracker;
use crate::query::permission::OperationType;
use crate::query::planner::AlterTag;

/// 修改标签执行器
pub type AlterTagExecutor = TagExecutor<AlterTag>;

impl TagCommand for AlterTag {
    type Response = bool;

    const NAME: &'static str = "AlterTagExecutor";
    const DESCRIPTION: &'static str = "Alters a tag";

    fn kind(&self) -> OperationType {
        OperationType::WriteSchema
    }

    fn tag_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn space_id(&self, _context: &QueryContext) -> DBResult<SpaceId> {
        Ok(self.space())
    }

    fn dispatch(
        &self,
        client: Arc<dyn MetaClient>,
        space_id: SpaceId,
    ) -> BoxFuture<'static, MetaResult<bool>> {
        let name = self.name.clone();
        let items = self.items.clone();
        let prop = self.prop.clone();
        async move { client.alter_tag_schema(space_id, name, items, prop).await }.boxed()
    }

    fn translate(&self, altered: bool, _tracker: &MemoryTracker) -> DBResult<ExecutionResult> {
        if !altered {
            log::debug!("Alter tag `{}' returned false, treated as success", self.name);
        }
        Ok(ExecutionResult::Success)
    }

    fn describe(&self) -> String {
        format!("Alter tag `{}'", self.name)
    }
}
