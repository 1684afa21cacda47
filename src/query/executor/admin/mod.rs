//! 管理执行器模块
//!
//! 目前只包含标签 Schema 的管理语句。

pub mod tag;

pub use self::tag::{
    AlterTagExecutor, CreateTagExecutor, DescTagExecutor, DropTagExecutor, ShowCreateTagExecutor,
    ShowTagsExecutor, TagCommand, TagExecutor,
};
