//! 进程内元数据服务
//!
//! 供嵌入式使用和测试；语义与远程元数据服务一致。

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI32, Ordering};

use super::MetaClient;
use crate::core::error::{MetaError, MetaResult};
use crate::core::types::{
    AlterSchemaItem, AlterSchemaOp, PropertyType, SchemaProp, SpaceId, TagId, TagItem, TagSchema,
};

#[derive(Debug, Clone)]
struct TagEntry {
    tag_id: TagId,
    version: i64,
    schema: TagSchema,
}

#[derive(Debug)]
pub struct MemoryMetaClient {
    spaces: RwLock<HashMap<SpaceId, BTreeMap<String, TagEntry>>>,
    next_tag_id: AtomicI32,
}

impl MemoryMetaClient {
    pub fn new() -> Self {
        Self {
            spaces: RwLock::new(HashMap::new()),
            next_tag_id: AtomicI32::new(1),
        }
    }

    /// 注册图空间，已存在时返回 `false`
    pub fn add_space(&self, space_id: SpaceId) -> bool {
        let mut spaces = self.spaces.write();
        if spaces.contains_key(&space_id) {
            return false;
        }
        spaces.insert(space_id, BTreeMap::new());
        true
    }

    fn space_not_found(space_id: SpaceId) -> MetaError {
        MetaError::space_not_found(format!("Space {} not found", space_id))
    }

    fn validate_ttl(schema: &TagSchema) -> MetaResult<()> {
        let Some(ttl_col) = schema.prop.ttl_col.as_deref() else {
            return Ok(());
        };
        if ttl_col.is_empty() {
            return Ok(());
        }
        match schema.column(ttl_col) {
            Some(col) => match col.property_type {
                PropertyType::Int64 | PropertyType::Timestamp => Ok(()),
                _ => Err(MetaError::invalid_param(format!(
                    "TTL column `{}' must be int64 or timestamp",
                    ttl_col
                ))),
            },
            None => Err(MetaError::invalid_param(format!(
                "TTL column `{}' not found",
                ttl_col
            ))),
        }
    }

    fn apply_item(schema: &mut TagSchema, item: &AlterSchemaItem) -> MetaResult<()> {
        for column in &item.columns {
            let position = schema.columns.iter().position(|c| c.name == column.name);
            match (item.op, position) {
                (AlterSchemaOp::Add, Some(_)) => {
                    return Err(MetaError::existed(format!(
                        "Column `{}' existed",
                        column.name
                    )));
                }
                (AlterSchemaOp::Add, None) => schema.columns.push(column.clone()),
                (AlterSchemaOp::Change, Some(pos)) => schema.columns[pos] = column.clone(),
                (AlterSchemaOp::Drop, Some(pos)) => {
                    if schema.prop.ttl_col.as_deref() == Some(column.name.as_str()) {
                        return Err(MetaError::invalid_param(format!(
                            "Column `{}' can't be dropped, a TTL attribute on it",
                            column.name
                        )));
                    }
                    schema.columns.remove(pos);
                }
                (AlterSchemaOp::Change | AlterSchemaOp::Drop, None) => {
                    return Err(MetaError::not_found(format!(
                        "Column `{}' not found",
                        column.name
                    )));
                }
            }
        }
        Ok(())
    }

    fn apply_prop(schema: &mut TagSchema, prop: &SchemaProp) {
        if let Some(duration) = prop.ttl_duration {
            schema.prop.ttl_duration = Some(duration);
        }
        if let Some(col) = &prop.ttl_col {
            schema.prop.ttl_col = if col.is_empty() { None } else { Some(col.clone()) };
        }
        if let Some(comment) = &prop.comment {
            schema.prop.comment = Some(comment.clone());
        }
    }
}

impl Default for MemoryMetaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetaClient for MemoryMetaClient {
    async fn create_tag_schema(
        &self,
        space_id: SpaceId,
        name: String,
        schema: TagSchema,
        if_not_exists: bool,
    ) -> MetaResult<TagId> {
        Self::validate_ttl(&schema)?;
        let mut spaces = self.spaces.write();
        let tags = spaces
            .get_mut(&space_id)
            .ok_or_else(|| Self::space_not_found(space_id))?;

        if let Some(existing) = tags.get(&name) {
            if if_not_exists {
                return Ok(existing.tag_id);
            }
            return Err(MetaError::existed("Existed!"));
        }

        let tag_id = self.next_tag_id.fetch_add(1, Ordering::Relaxed);
        tags.insert(
            name,
            TagEntry {
                tag_id,
                version: 0,
                schema,
            },
        );
        Ok(tag_id)
    }

    async fn get_tag_schema(&self, space_id: SpaceId, name: String) -> MetaResult<TagSchema> {
        let spaces = self.spaces.read();
        let tags = spaces
            .get(&space_id)
            .ok_or_else(|| Self::space_not_found(space_id))?;
        tags.get(&name)
            .map(|entry| entry.schema.clone())
            .ok_or_else(|| MetaError::not_found("Tag not existed!"))
    }

    async fn drop_tag_schema(
        &self,
        space_id: SpaceId,
        name: String,
        if_exists: bool,
    ) -> MetaResult<bool> {
        let mut spaces = self.spaces.write();
        let tags = spaces
            .get_mut(&space_id)
            .ok_or_else(|| Self::space_not_found(space_id))?;
        match tags.remove(&name) {
            Some(_) => Ok(true),
            None if if_exists => Ok(false),
            None => Err(MetaError::not_found("Tag not existed!")),
        }
    }

    async fn list_tag_schemas(&self, space_id: SpaceId) -> MetaResult<Vec<TagItem>> {
        let spaces = self.spaces.read();
        let tags = spaces
            .get(&space_id)
            .ok_or_else(|| Self::space_not_found(space_id))?;
        Ok(tags
            .iter()
            .map(|(name, entry)| TagItem {
                tag_id: entry.tag_id,
                tag_name: name.clone(),
                version: entry.version,
                schema: entry.schema.clone(),
            })
            .collect())
    }

    async fn alter_tag_schema(
        &self,
        space_id: SpaceId,
        name: String,
        items: Vec<AlterSchemaItem>,
        prop: SchemaProp,
    ) -> MetaResult<bool> {
        if items.is_empty() && prop.is_empty() {
            return Err(MetaError::invalid_param("No schema item or prop to alter"));
        }

        let mut spaces = self.spaces.write();
        let tags = spaces
            .get_mut(&space_id)
            .ok_or_else(|| Self::space_not_found(space_id))?;
        let entry = tags
            .get_mut(&name)
            .ok_or_else(|| MetaError::not_found("Tag not existed!"))?;

        // 先在副本上修改，全部校验通过后再提交
        let mut schema = entry.schema.clone();
        for item in &items {
            Self::apply_item(&mut schema, item)?;
        }
        Self::apply_prop(&mut schema, &prop);
        Self::validate_ttl(&schema)?;

        entry.schema = schema;
        entry.version += 1;
        Ok(true)
    }
}
