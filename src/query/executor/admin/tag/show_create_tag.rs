//! ShowCreateTagExecutor - 显示创建标签语句执行器

use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;

use super::tag_executor::{TagCommand, TagExecutor};
use crate::core::error::MetaResult;
use crate::core::result::{IteratorKind, ResultBuilder};
use crate::core::types::{SpaceId, TagSchema};
use crate::core::value::Value;
use crate::meta::MetaClient;
use crate::query::executor::base::{DBResult, ExecutionResult};
use crate::query::executor::memory_manager::MemoryTracker;
use crate::query::executor::schema_util;
use crate::query::permission::OperationType;
use crate::query::planner::ShowCreateTag;

/// 显示创建标签语句执行器
pub type ShowCreateTagExecutor = TagExecutor<ShowCreateTag>;

impl TagCommand for ShowCreateTag {
    type Response = TagSchema;

    const NAME: &'static str = "ShowCreateTagExecutor";
    const DESCRIPTION: &'static str = "Shows the statement that creates a tag";

    fn kind(&self) -> OperationType {
        OperationType::ReadSchema
    }

    fn tag_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn dispatch(
        &self,
        client: Arc<dyn MetaClient>,
        space_id: SpaceId,
    ) -> BoxFuture<'static, MetaResult<TagSchema>> {
        let name = self.name.clone();
        async move { client.get_tag_schema(space_id, name).await }.boxed()
    }

    fn translate(&self, schema: TagSchema, tracker: &MemoryTracker) -> DBResult<ExecutionResult> {
        let dataset = schema_util::to_show_create_schema(true, &self.name, &schema)?;
        tracker.alloc(dataset.estimated_size());
        Ok(ExecutionResult::Result(
            ResultBuilder::new()
                .value(Value::DataSet(dataset))
                .iter(IteratorKind::Default)
                .build(),
        ))
    }

    fn describe(&self) -> String {
        format!("Show create tag `{}'", self.name)
    }
}
