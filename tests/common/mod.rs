//! 集成测试共享工具模块
//!
//! 提供测试基础设施和辅助函数，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;

use std::sync::Arc;

use graphdb_ddl::core::types::{ColumnDef, PropertyType, SchemaProp, SpaceId, TagSchema};
use graphdb_ddl::meta::MemoryMetaClient;
use graphdb_ddl::query::context::{ClientSession, QueryContext, RoleType, Runner, SpaceInfo};
use graphdb_ddl::query::executor::{Executor, ExecutorFactory, DBResult, ExecutionResult};
use graphdb_ddl::query::planner::TagNode;

pub const TEST_SPACE: SpaceId = 1;

/// 测试环境
///
/// 进程内元数据服务加一个已选择测试图空间的会话
pub struct TestEnv {
    pub meta: Arc<MemoryMetaClient>,
    pub session: Arc<ClientSession>,
    pub context: QueryContext,
}

impl TestEnv {
    /// 以 GOD 角色创建测试环境，必须在 tokio 运行时中调用
    pub fn new() -> Self {
        Self::with_role(RoleType::GOD)
    }

    pub fn with_role(role: RoleType) -> Self {
        let meta = Arc::new(MemoryMetaClient::new());
        meta.add_space(TEST_SPACE);

        let session = ClientSession::new(1, "tester");
        session.set_space(SpaceInfo::new(TEST_SPACE, "test_space"));
        session.set_role(TEST_SPACE, role);

        let runner = Runner::current().expect("tests run inside a tokio runtime");
        let context = QueryContext::new(meta.clone(), session.clone(), runner);
        Self {
            meta,
            session,
            context,
        }
    }

    /// 执行一条标签语句
    pub async fn run(&self, node: impl Into<TagNode>) -> DBResult<ExecutionResult> {
        let mut executor = ExecutorFactory::build(node.into(), self.context.clone());
        executor.execute().await
    }
}

/// person 标签：name string, age int64 NOT NULL DEFAULT 0
pub fn person_schema() -> TagSchema {
    TagSchema::new(vec![
        ColumnDef::new("name", PropertyType::String),
        ColumnDef::new("age", PropertyType::Int64)
            .with_nullable(false)
            .with_default(Some("0".to_string()))
            .with_comment(Some("years".to_string())),
    ])
    .with_prop(SchemaProp::new().with_comment(Some("people".to_string())))
}
