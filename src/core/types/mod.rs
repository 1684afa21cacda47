// 核心类型系统模块
//
// 包含标签 Schema 相关的类型定义，包括属性类型、列定义、Schema 属性以及修改项

pub mod property;
pub mod tag;

/// 图空间 ID
pub type SpaceId = i64;

/// 标签 ID
pub type TagId = i32;

pub use property::{ColumnDef, PropertyType};
pub use tag::{AlterSchemaItem, AlterSchemaOp, SchemaProp, TagItem, TagSchema};
