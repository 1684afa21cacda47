//! 标签基础类型

use super::property::ColumnDef;
use super::TagId;
use serde::{Deserialize, Serialize};

/// Schema 属性（TTL 与注释）
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaProp {
    pub ttl_duration: Option<i64>,
    pub ttl_col: Option<String>,
    pub comment: Option<String>,
}

impl SchemaProp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(mut self, duration: Option<i64>, col: Option<String>) -> Self {
        self.ttl_duration = duration;
        self.ttl_col = col;
        self
    }

    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    /// 没有任何属性需要修改
    pub fn is_empty(&self) -> bool {
        self.ttl_duration.is_none() && self.ttl_col.is_none() && self.comment.is_none()
    }
}

/// 标签 Schema
///
/// 元数据服务返回或接收的结构化 Schema，执行器只读不改。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagSchema {
    pub columns: Vec<ColumnDef>,
    pub prop: SchemaProp,
}

impl TagSchema {
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        Self {
            columns,
            prop: SchemaProp::default(),
        }
    }

    pub fn with_prop(mut self, prop: SchemaProp) -> Self {
        self.prop = prop;
        self
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// 列出标签时返回的条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagItem {
    pub tag_id: TagId,
    pub tag_name: String,
    pub version: i64,
    pub schema: TagSchema,
}

/// 标签修改操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlterSchemaOp {
    Add,
    Change,
    Drop,
}

/// 标签修改项
///
/// `Drop` 只使用列名，其他字段被忽略
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlterSchemaItem {
    pub op: AlterSchemaOp,
    pub columns: Vec<ColumnDef>,
}

impl AlterSchemaItem {
    pub fn add(columns: Vec<ColumnDef>) -> Self {
        Self {
            op: AlterSchemaOp::Add,
            columns,
        }
    }

    pub fn change(columns: Vec<ColumnDef>) -> Self {
        Self {
            op: AlterSchemaOp::Change,
            columns,
        }
    }

    pub fn drop_columns(columns: Vec<ColumnDef>) -> Self {
        Self {
            op: AlterSchemaOp::Drop,
            columns,
        }
    }
}
