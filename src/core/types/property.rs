//! 属性定义基础类型

use serde::{Deserialize, Serialize};
use std::fmt;

/// 属性类型
///
/// 标签列可以声明的全部类型，渲染时使用小写名称
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    String,
    FixedString(u16),
    Timestamp,
    Date,
    Time,
    DateTime,
    Duration,
    Geography,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::Bool => write!(f, "bool"),
            PropertyType::Int8 => write!(f, "int8"),
            PropertyType::Int16 => write!(f, "int16"),
            PropertyType::Int32 => write!(f, "int32"),
            PropertyType::Int64 => write!(f, "int64"),
            PropertyType::Float => write!(f, "float"),
            PropertyType::Double => write!(f, "double"),
            PropertyType::String => write!(f, "string"),
            PropertyType::FixedString(len) => write!(f, "fixed_string({})", len),
            PropertyType::Timestamp => write!(f, "timestamp"),
            PropertyType::Date => write!(f, "date"),
            PropertyType::Time => write!(f, "time"),
            PropertyType::DateTime => write!(f, "datetime"),
            PropertyType::Duration => write!(f, "duration"),
            PropertyType::Geography => write!(f, "geography"),
        }
    }
}

/// 列定义
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    pub property_type: PropertyType,
    pub nullable: bool,
    /// 声明时的默认值表达式文本
    pub default: Option<String>,
    pub comment: Option<String>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            property_type,
            nullable: true,
            default: None,
            comment: None,
        }
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn with_default(mut self, default: Option<String>) -> Self {
        self.default = default;
        self
    }

    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }
}
