//! 标签管理执行器
//!
//! 提供标签的创建、描述、删除、列出、显示创建语句和修改功能。

pub mod tag_executor;
pub mod create_tag;
pub mod alter_tag;
pub mod desc_tag;
pub mod drop_tag;
pub mod show_create_tag;
pub mod show_tags;

pub use tag_executor::{session_space, TagCommand, TagExecutor};
pub use create_tag::CreateTagExecutor;
pub use alter_tag::AlterTagExecutor;
pub use desc_tag::DescTagExecutor;
pub use drop_tag::DropTagExecutor;
pub use show_create_tag::ShowCreateTagExecutor;
pub use show_tags::ShowTagsExecutor;
