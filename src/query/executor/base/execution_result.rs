//! 执行结果类型

use crate::core::result::Result as CoreResult;

pub use crate::core::error::DBResult;

/// 执行结果类型
///
/// 语句成功后交给结果展示层的结果：要么没有数据，要么是一个带迭代方式标记的结果对象。
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionResult {
    /// 成功执行，无数据返回
    Success,
    /// 成功执行，返回内部 Result 对象
    Result(CoreResult),
}

impl ExecutionResult {
    /// 获取结果中的行数
    pub fn count(&self) -> usize {
        match self {
            ExecutionResult::Success => 0,
            ExecutionResult::Result(r) => r.row_count(),
        }
    }

    /// 从 CoreResult 创建 ExecutionResult
    pub fn from_result(result: CoreResult) -> Self {
        ExecutionResult::Result(result)
    }

    pub fn to_result(&self) -> Option<&CoreResult> {
        match self {
            ExecutionResult::Result(r) => Some(r),
            ExecutionResult::Success => None,
        }
    }
}
