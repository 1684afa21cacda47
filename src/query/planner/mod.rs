//! 计划节点
//!
//! 只包含 Schema 语句的计划节点；语句形态由规划器决定。

pub mod tag_ops;

pub use tag_ops::{AlterTag, CreateTag, DescTag, DropTag, ShowCreateTag, ShowTags, TagNode};
