//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use graphdb_ddl::core::error::{DBError, ErrorKind};
use graphdb_ddl::core::value::Value;
use graphdb_ddl::query::executor::ExecutionResult;

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言失败且错误种类匹配，返回错误
pub fn assert_err_kind<T: std::fmt::Debug>(result: Result<T, DBError>, kind: ErrorKind) -> DBError {
    let err = result.expect_err("操作应该失败");
    assert_eq!(err.kind(), kind, "错误种类不匹配: {:?}", err);
    err
}

/// 断言结果成功且不返回任何行
pub fn assert_no_rows(result: &ExecutionResult) {
    assert_eq!(result, &ExecutionResult::Success, "语句不应返回数据");
}

/// 取出结果数据集的列名
pub fn col_names(result: &ExecutionResult) -> Vec<String> {
    result
        .to_result()
        .map(|r| r.col_names().to_vec())
        .expect("结果应包含数据集")
}

/// 取出结果数据集的第一列
pub fn first_column(result: &ExecutionResult) -> Vec<Value> {
    result
        .to_result()
        .and_then(|r| r.dataset())
        .map(|ds| ds.rows.iter().map(|row| row[0].clone()).collect())
        .expect("结果应包含数据集")
}
