//! DropTagExecutor - 删除标签执行器

use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;

use super::tag_executor::{TagCommand, TagExecutor};
use crate::core::error::MetaResult;
use crate::core::types::SpaceId;
use crate::meta::MetaClient;
use crate::query::executor::base::{DBResult, ExecutionResult};
use crate::query::executor::memory_manager::MemoryTracker;
use crate::query::permission::OperationType;
use crate::query::planner::DropTag;

/// 删除标签执行器
pub type DropTagExecutor = TagExecutor<DropTag>;

impl TagCommand for DropTag {
    type Response = bool;

    const NAME: &'static str = "DropTagExecutor";
    const DESCRIPTION: &'static str = "Drops a tag";

    fn kind(&self) -> OperationType {
        OperationType::WriteSchema
    }

    fn tag_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn dispatch(
        &self,
        client: Arc<dyn MetaClient>,
        space_id: SpaceId,
    ) -> BoxFuture<'static, MetaResult<bool>> {
        let name = self.name.clone();
        let if_exists = self.if_exists;
        async move { client.drop_tag_schema(space_id, name, if_exists).await }.boxed()
    }

    // 元数据服务返回 false 同样视为成功
    fn translate(&self, dropped: bool, _tracker: &MemoryTracker) -> DBResult<ExecutionResult> {
        if !dropped {
            log::debug!("Drop tag `{}' returned false, treated as success", self.name);
        }
        Ok(ExecutionResult::Success)
    }

    fn describe(&self) -> String {
        format!("Drop tag `{}'", self.name)
    }
}
