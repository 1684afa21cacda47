//! CreateTagExecutor - 创建标签执行器
//!
//! 负责在当前图空间中创建新的标签。

use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;

use super::tag_executor::{TagCommand, TagExecutor};
use crate::core::error::MetaResult;
use crate::core::types::{SpaceId, TagId};
use crate::meta::MetaClient;
use crate::query::executor::base::{DBResult, ExecutionResult};
use crate::query::executor::memory_manager::MemoryTracker;
use crate::query::permission::OperationType;
use crate::query::planner::CreateTag;

/// 创建标签执行器
pub type CreateTagExecutor = TagExecutor<CreateTag>;

impl TagCommand for CreateTag {
    type Response = TagId;

    const NAME: &'static str = "CreateTagExecutor";
    const DESCRIPTION: &'static str = "Creates a new tag";

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
    ) -> BoxFuture<'static, MetaResult<TagId>> {
        let name = self.name.clone();
        let schema = self.schema.clone();
        let if_not_exists = self.if_not_exists;
        async move {
            client
                .create_tag_schema(space_id, name, schema, if_not_exists)
                .await
        }
        .boxed()
    }

    fn translate(&self, tag_id: TagId, _tracker: &MemoryTracker) -> DBResult<ExecutionResult> {
        log::debug!("Tag `{}' created with id {}", self.name, tag_id);
        Ok(ExecutionResult::Success)
    }

    fn describe(&self) -> String {
        format!("Create tag `{}'", self.name)
    }
}
