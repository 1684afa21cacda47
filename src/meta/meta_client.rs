use async_trait::async_trait;

use crate::core::error::MetaResult;
use crate::core::types::{AlterSchemaItem, SchemaProp, SpaceId, TagId, TagItem, TagSchema};

/// 元数据服务客户端
///
/// 所有操作都是异步、单次返回的；失败时返回带可读原因的 `MetaError`。
/// 客户端自身负责并发安全与超时策略。
#[async_trait]
pub trait MetaClient: Send + Sync {
    async fn create_tag_schema(
        &self,
        space_id: SpaceId,
        name: String,
        schema: TagSchema,
        if_not_exists: bool,
    ) -> MetaResult<TagId>;

    async fn get_tag_schema(&self, space_id: SpaceId, name: String) -> MetaResult<TagSchema>;

    /// 返回 `false` 表示在 if-exists 语义下没有可删除的标签
    async fn drop_tag_schema(
        &self,
        space_id: SpaceId,
        name: String,
        if_exists: bool,
    ) -> MetaResult<bool>;

    async fn list_tag_schemas(&self, space_id: SpaceId) -> MetaResult<Vec<TagItem>>;

    async fn alter_tag_schema(
        &self,
        space_id: SpaceId,
        name: String,
        items: Vec<AlterSchemaItem>,
        prop: SchemaProp,
    ) -> MetaResult<bool>;
}
