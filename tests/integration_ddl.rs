//! 数据定义语言(DDL)集成测试
//!
//! 测试范围:
//! - CREATE TAG - 创建标签
//! - DESCRIBE TAG - 描述标签
//! - SHOW TAGS / SHOW CREATE TAG - 列出标签与还原建表语句
//! - ALTER TAG - 修改标签
//! - DROP TAG - 删除标签

mod common;

use std::sync::Arc;

use common::{
    assertions::{assert_err_kind, assert_no_rows, assert_ok, col_names, first_column},
    person_schema, TestEnv, TEST_SPACE,
};

use graphdb_ddl::core::error::{ErrorCode, ErrorKind, ToPublicError};
use graphdb_ddl::core::types::{AlterSchemaItem, ColumnDef, PropertyType, SchemaProp, TagSchema};
use graphdb_ddl::core::value::Value;
use graphdb_ddl::query::context::RoleType;
use graphdb_ddl::query::executor::{Executor, ExecutorFactory, MemoryConfig, MemoryTracker};
use graphdb_ddl::query::planner::{
    AlterTag, CreateTag, DescTag, DropTag, ShowCreateTag, ShowTags,
};

// ==================== CREATE TAG ====================

#[tokio::test]
async fn test_create_tag_then_show() {
    let env = TestEnv::new();

    let result = assert_ok(env.run(CreateTag::new(1, "person", person_schema(), false)).await);
    assert_no_rows(&result);
    assert_ok(env.run(CreateTag::new(2, "city", TagSchema::default(), false)).await);

    let result = assert_ok(env.run(ShowTags::new(3)).await);
    assert_eq!(col_names(&result), vec!["Name".to_string()]);
    assert_eq!(
        first_column(&result),
        vec![Value::from("city"), Value::from("person")]
    );
}

#[tokio::test]
async fn test_create_existing_tag_is_rejected() {
    let env = TestEnv::new();
    assert_ok(env.run(CreateTag::new(1, "person", person_schema(), false)).await);

    let err = assert_err_kind(
        env.run(CreateTag::new(2, "person", person_schema(), false)).await,
        ErrorKind::RemoteRejected,
    );
    assert_eq!(err.message(), "Existed!");
    assert_eq!(err.to_error_code(), ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn test_create_if_not_exists_is_idempotent() {
    let env = TestEnv::new();
    assert_ok(env.run(CreateTag::new(1, "person", person_schema(), false)).await);
    let result = assert_ok(env.run(CreateTag::new(2, "person", TagSchema::default(), true)).await);
    assert_no_rows(&result);

    // 已有的 Schema 不变
    let result = assert_ok(env.run(DescTag::new(3, "person")).await);
    assert_eq!(result.count(), 2);
}

// ==================== DESCRIBE / SHOW CREATE ====================

#[tokio::test]
async fn test_desc_tag() {
    let env = TestEnv::new();
    assert_ok(env.run(CreateTag::new(1, "person", person_schema(), false)).await);

    let result = assert_ok(env.run(DescTag::new(2, "person")).await);
    assert_eq!(
        col_names(&result),
        vec!["Field", "Type", "Null", "Default", "Comment"]
    );
    assert_eq!(
        first_column(&result),
        vec![Value::from("name"), Value::from("age")]
    );
}

#[tokio::test]
async fn test_desc_missing_tag_is_rejected() {
    let env = TestEnv::new();
    let err = assert_err_kind(env.run(DescTag::new(1, "ghost")).await, ErrorKind::RemoteRejected);
    assert_eq!(err.message(), "Tag not existed!");
}

#[tokio::test]
async fn test_show_create_tag() {
    let env = TestEnv::new();
    assert_ok(env.run(CreateTag::new(1, "person", person_schema(), false)).await);

    let result = assert_ok(env.run(ShowCreateTag::new(2, "person")).await);
    assert_eq!(col_names(&result), vec!["Create Tag".to_string()]);
    assert_eq!(
        first_column(&result),
        vec![Value::from(
            "CREATE TAG `person` (\n `name` string NULL,\n `age` int64 NOT NULL DEFAULT 0 COMMENT \"years\"\n) ttl_duration = 0, ttl_col = \"\", comment = \"people\""
        )]
    );
}

// ==================== ALTER TAG ====================

#[tokio::test]
async fn test_alter_tag_add_column_and_ttl() {
    let env = TestEnv::new();
    assert_ok(env.run(CreateTag::new(1, "person", person_schema(), false)).await);

    let alter = AlterTag::new(
        2,
        TEST_SPACE,
        "person",
        vec![AlterSchemaItem::add(vec![ColumnDef::new(
            "created",
            PropertyType::Timestamp,
        )])],
        SchemaProp::new().with_ttl(Some(3600), Some("created".to_string())),
    );
    assert_no_rows(&assert_ok(env.run(alter).await));

    let result = assert_ok(env.run(DescTag::new(3, "person")).await);
    assert_eq!(
        first_column(&result),
        vec![Value::from("name"), Value::from("age"), Value::from("created")]
    );

    let result = assert_ok(env.run(ShowCreateTag::new(4, "person")).await);
    let text = first_column(&result)[0].to_string();
    assert!(text.contains("ttl_duration = 3600, ttl_col = \"created\""));
}

#[tokio::test]
async fn test_alter_is_atomic() {
    let env = TestEnv::new();
    assert_ok(env.run(CreateTag::new(1, "person", person_schema(), false)).await);

    let alter = AlterTag::new(
        2,
        TEST_SPACE,
        "person",
        vec![
            AlterSchemaItem::add(vec![ColumnDef::new("email", PropertyType::String)]),
            AlterSchemaItem::drop_columns(vec![ColumnDef::new("missing", PropertyType::String)]),
        ],
        SchemaProp::new(),
    );
    assert_err_kind(env.run(alter).await, ErrorKind::RemoteRejected);

    let result = assert_ok(env.run(DescTag::new(3, "person")).await);
    assert_eq!(result.count(), 2);
}

#[tokio::test]
async fn test_alter_in_unknown_space_is_rejected() {
    let env = TestEnv::new();
    let alter = AlterTag::new(
        1,
        99,
        "person",
        Vec::new(),
        SchemaProp::new().with_comment(Some("x".to_string())),
    );
    let err = assert_err_kind(env.run(alter).await, ErrorKind::RemoteRejected);
    assert_eq!(err.message(), "Space 99 not found");
}

// ==================== DROP TAG ====================

#[tokio::test]
async fn test_drop_tag() {
    let env = TestEnv::new();
    assert_ok(env.run(CreateTag::new(1, "person", person_schema(), false)).await);

    assert_no_rows(&assert_ok(env.run(DropTag::new(2, "person", false)).await));
    let result = assert_ok(env.run(ShowTags::new(3)).await);
    assert_eq!(result.count(), 0);

    assert_err_kind(env.run(DropTag::new(4, "person", false)).await, ErrorKind::RemoteRejected);
    assert_no_rows(&assert_ok(env.run(DropTag::new(5, "person", true)).await));
}

// ==================== 授权与内存 ====================

#[tokio::test]
async fn test_user_role_reads_but_cannot_write() {
    let env = TestEnv::with_role(RoleType::USER);

    let err = assert_err_kind(
        env.run(CreateTag::new(1, "person", person_schema(), false)).await,
        ErrorKind::PermissionDenied,
    );
    assert_eq!(err.to_error_code(), ErrorCode::PermissionDenied);

    let result = assert_ok(env.run(ShowTags::new(2)).await);
    assert_eq!(result.count(), 0);
}

#[tokio::test]
async fn test_memory_budget_breach_overrides_result() {
    let env = TestEnv::new();
    assert_ok(env.run(CreateTag::new(1, "person", person_schema(), false)).await);

    let context = env
        .context
        .clone()
        .with_memory_tracker(Arc::new(MemoryTracker::new(8)));
    let mut executor = ExecutorFactory::build(DescTag::new(2, "person").into(), context);
    let err = assert_err_kind(executor.execute().await, ErrorKind::ResourceExhausted);
    assert_eq!(err.to_string(), "Graph memory exceeded");
    assert_eq!(err.to_error_code(), ErrorCode::ResourceExhausted);
}

#[tokio::test]
async fn test_repeated_reads_do_not_exhaust_budget() {
    let env = TestEnv::new();
    assert_ok(env.run(CreateTag::new(1, "person", person_schema(), false)).await);

    let tracker = Arc::new(MemoryTracker::from_config(&MemoryConfig {
        max_query_memory: 4096,
    }));
    let context = env.context.clone().with_memory_tracker(Arc::clone(&tracker));
    for id in 0..200 {
        let mut executor = ExecutorFactory::build(ShowTags::new(id).into(), context.clone());
        let result = assert_ok(executor.execute().await);
        assert_eq!(first_column(&result), vec![Value::from("person")]);
    }
    assert_eq!(tracker.current_usage(), 0);

    let mut executor = ExecutorFactory::build(
        CreateTag::new(300, "city", TagSchema::default(), false).into(),
        context,
    );
    assert_no_rows(&assert_ok(executor.execute().await));
    assert!(!tracker.is_exceeded());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_statements_are_independent() {
    let env = Arc::new(TestEnv::new());
    let mut handles = Vec::new();
    for i in 0..8 {
        let env = Arc::clone(&env);
        handles.push(tokio::spawn(async move {
            let name = format!("tag_{}", i);
            env.run(CreateTag::new(i, &name, TagSchema::default(), false)).await
        }));
    }
    for handle in handles {
        assert_ok(handle.await.expect("statement task should finish"));
    }

    let result = assert_ok(env.run(ShowTags::new(100)).await);
    assert_eq!(result.count(), 8);
}

#[tokio::test]
async fn test_executor_stats_recorded() {
    let env = TestEnv::new();
    assert_ok(env.run(CreateTag::new(1, "person", person_schema(), false)).await);

    let mut executor = ExecutorFactory::build(ShowTags::new(2).into(), env.context.clone());
    assert_ok(executor.execute().await);
    assert_eq!(executor.stats().num_rows, 1);
    assert!(executor.stats().to_json().is_ok());
}
