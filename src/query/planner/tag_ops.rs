//! 标签操作相关的计划节点
//!
//! 由规划器生成，执行器只读。

use crate::core::types::{AlterSchemaItem, SchemaProp, SpaceId, TagSchema};

/// 创建标签计划节点
#[derive(Debug, Clone)]
pub struct CreateTag {
    pub id: i64,
    pub name: String,
    pub schema: TagSchema,
    pub if_not_exists: bool,
}

impl CreateTag {
    pub fn new(id: i64, name: &str, schema: TagSchema, if_not_exists: bool) -> Self {
        Self {
            id,
            name: name.to_string(),
            schema,
            if_not_exists,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &TagSchema {
        &self.schema
    }

    pub fn if_not_exists(&self) -> bool {
        self.if_not_exists
    }
}

/// 描述标签计划节点
#[derive(Debug, Clone)]
pub struct DescTag {
    pub id: i64,
    pub name: String,
}

impl DescTag {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// 删除标签计划节点
#[derive(Debug, Clone)]
pub struct DropTag {
    pub id: i64,
    pub name: String,
    pub if_exists: bool,
}

impl DropTag {
    pub fn new(id: i64, name: &str, if_exists: bool) -> Self {
        Self {
            id,
            name: name.to_string(),
            if_exists,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn if_exists(&self) -> bool {
        self.if_exists
    }
}

/// 显示标签列表计划节点
#[derive(Debug, Clone)]
pub struct ShowTags {
    pub id: i64,
}

impl ShowTags {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

/// 显示创建标签计划节点
#[derive(Debug, Clone)]
pub struct ShowCreateTag {
    pub id: i64,
    pub name: String,
}

impl ShowCreateTag {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// 修改标签计划节点
///
/// 图空间在规划阶段已绑定，执行时从节点读取而不是从会话读取
#[derive(Debug, Clone)]
pub struct AlterTag {
    pub id: i64,
    pub space_id: SpaceId,
    pub name: String,
    pub items: Vec<AlterSchemaItem>,
    pub prop: SchemaProp,
}

impl AlterTag {
    pub fn new(
        id: i64,
        space_id: SpaceId,
        name: &str,
        items: Vec<AlterSchemaItem>,
        prop: SchemaProp,
    ) -> Self {
        Self {
            id,
            space_id,
            name: name.to_string(),
            items,
            prop,
        }
    }

    pub fn space(&self) -> SpaceId {
        self.space_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[AlterSchemaItem] {
        &self.items
    }

    pub fn prop(&self) -> &SchemaProp {
        &self.prop
    }
}

/// 标签语句计划节点
#[derive(Debug, Clone)]
pub enum TagNode {
    Create(CreateTag),
    Desc(DescTag),
    Drop(DropTag),
    Show(ShowTags),
    ShowCreate(ShowCreateTag),
    Alter(AlterTag),
}

impl TagNode {
    pub fn id(&self) -> i64 {
        match self {
            TagNode::Create(n) => n.id,
            TagNode::Desc(n) => n.id,
            TagNode::Drop(n) => n.id,
            TagNode::Show(n) => n.id,
            TagNode::ShowCreate(n) => n.id,
            TagNode::Alter(n) => n.id,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            TagNode::Create(_) => "CreateTag",
            TagNode::Desc(_) => "DescTag",
            TagNode::Drop(_) => "DropTag",
            TagNode::Show(_) => "ShowTags",
            TagNode::ShowCreate(_) => "ShowCreateTag",
            TagNode::Alter(_) => "AlterTag",
        }
    }
}

impl From<CreateTag> for TagNode {
    fn from(node: CreateTag) -> Self {
        TagNode::Create(node)
    }
}

impl From<DescTag> for TagNode {
    fn from(node: DescTag) -> Self {
        TagNode::Desc(node)
    }
}

impl From<DropTag> for TagNode {
    fn from(node: DropTag) -> Self {
        TagNode::Drop(node)
    }
}

impl From<ShowTags> for TagNode {
    fn from(node: ShowTags) -> Self {
        TagNode::Show(node)
    }
}

impl From<ShowCreateTag> for TagNode {
    fn from(node: ShowCreateTag) -> Self {
        TagNode::ShowCreate(node)
    }
}

impl From<AlterTag> for TagNode {
    fn from(node: AlterTag) -> Self {
        TagNode::Alter(node)
    }
}
