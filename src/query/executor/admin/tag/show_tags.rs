//! ShowTagsExecutor - 列出标签执行器
//!
//! 列出当前图空间中的全部标签名，按字典序去重输出。

use futures::future::{BoxFuture, FutureExt};
use std::collections::BTreeSet;
use std::sync::Arc;

use super::tag_executor::{TagCommand, TagExecutor};
use crate::core::error::MetaResult;
use crate::core::result::{IteratorKind, ResultBuilder};
use crate::core::types::{SpaceId, TagItem};
use crate::core::value::{DataSet, Value};
use crate::meta::MetaClient;
use crate::query::executor::base::{DBResult, ExecutionResult};
use crate::query::executor::memory_manager::MemoryTracker;
use crate::query::permission::OperationType;
use crate::query::planner::ShowTags;

/// 列出标签执行器
pub type ShowTagsExecutor = TagExecutor<ShowTags>;

impl TagCommand for ShowTags {
    type Response = Vec<TagItem>;

    const NAME: &'static str = "ShowTagsExecutor";
    const DESCRIPTION: &'static str = "Shows all tags";

    fn kind(&self) -> OperationType {
        OperationType::ReadSchema
    }

    fn dispatch(
        &self,
        client: Arc<dyn MetaClient>,
        space_id: SpaceId,
    ) -> BoxFuture<'static, MetaResult<Vec<TagItem>>> {
        async move { client.list_tag_schemas(space_id).await }.boxed()
    }

    fn translate(&self, items: Vec<TagItem>, tracker: &MemoryTracker) -> DBResult<ExecutionResult> {
        let names: BTreeSet<String> = items.into_iter().map(|item| item.tag_name).collect();

        let mut dataset = DataSet::with_columns(["Name"]);
        for name in names {
            dataset.push_row(vec![Value::String(name)]);
        }
        tracker.alloc(dataset.estimated_size());

        Ok(ExecutionResult::Result(
            ResultBuilder::new()
                .value(Value::DataSet(dataset))
                .iter(IteratorKind::Default)
                .build(),
        ))
    }

    fn describe(&self) -> String {
        "Show tags".to_string()
    }
}
