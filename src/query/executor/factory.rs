//! 执行器工厂模块
//!
//! 根据标签语句的计划节点创建对应的执行器实例，采用直接匹配模式。

use super::admin::tag::{
    AlterTagExecutor, CreateTagExecutor, DescTagExecutor, DropTagExecutor, ShowCreateTagExecutor,
    ShowTagsExecutor,
};
use super::executor_enum::TagExecutorEnum;
use crate::query::context::QueryContext;
use crate::query::planner::TagNode;

/// 执行器工厂
///
/// 无状态；每条语句对应一个新的执行器，执行器持有查询上下文的克隆。
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecutorFactory;

impl ExecutorFactory {
    pub fn new() -> Self {
        Self
    }

    /// 根据计划节点创建执行器
    pub fn build(node: TagNode, context: QueryContext) -> TagExecutorEnum {
        log::debug!("Building executor for {} (id={})", node.type_name(), node.id());
        match node {
            TagNode::Create(node) => {
                TagExecutorEnum::CreateTag(CreateTagExecutor::new(node.id, context, node))
            }
            TagNode::Desc(node) => {
                TagExecutorEnum::DescTag(DescTagExecutor::new(node.id, context, node))
            }
            TagNode::Drop(node) => {
                TagExecutorEnum::DropTag(DropTagExecutor::new(node.id, context, node))
            }
            TagNode::Show(node) => {
                TagExecutorEnum::ShowTags(ShowTagsExecutor::new(node.id, context, node))
            }
            TagNode::ShowCreate(node) => {
                TagExecutorEnum::ShowCreateTag(ShowCreateTagExecutor::new(node.id, context, node))
            }
            TagNode::Alter(node) => {
                TagExecutorEnum::AlterTag(AlterTagExecutor::new(node.id, context, node))
            }
        }
    }

    pub fn create_executor(&self, node: TagNode, context: QueryContext) -> TagExecutorEnum {
        Self::build(node, context)
    }
}
