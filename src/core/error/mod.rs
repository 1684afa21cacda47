//! 统一错误处理系统
//!
//! 语句执行的所有失败都归类到一个封闭的集合：
//! - `Rejected`：元数据服务显式返回失败，消息原样保留
//! - `MemoryExceeded`：超出内存预算，消息固定，不携带任何细节
//! - `Unexpected`：其他本地故障（转换、格式化、continuation 中的 panic），保留原消息
//!
//! `PermissionDenied` 只在派发远程调用之前的授权阶段产生。

use thiserror::Error;

pub mod codes;
pub mod meta;

pub use codes::{ErrorCode, PublicError, ToPublicError};
pub use meta::{MetaError, MetaErrorCode, MetaResult};

use crate::core::types::SpaceId;

/// 内存超限时的固定消息
pub const MEMORY_EXCEEDED_MESSAGE: &str = "Graph memory exceeded";

/// 错误种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    RemoteRejected,
    ResourceExhausted,
    Unexpected,
    PermissionDenied,
}

/// 统一的数据库错误类型
#[derive(Error, Debug, Clone)]
pub enum DBError {
    #[error("{source}")]
    Rejected {
        space_id: SpaceId,
        name: Option<String>,
        #[source]
        source: MetaError,
    },

    #[error("Graph memory exceeded")]
    MemoryExceeded,

    #[error("运行时错误: {0}")]
    Unexpected(String),

    #[error("权限错误: {0}")]
    PermissionDenied(String),
}

/// 统一的结果类型
pub type DBResult<T> = Result<T, DBError>;

impl DBError {
    /// 归类元数据服务返回的失败状态
    pub fn from_meta(space_id: SpaceId, name: Option<&str>, err: MetaError) -> Self {
        if err.is_memory_exceeded() {
            return DBError::MemoryExceeded;
        }
        DBError::Rejected {
            space_id,
            name: name.map(str::to_string),
            source: err,
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        DBError::Unexpected(message.into())
    }

    /// 归类 continuation 任务的异常结束（panic 或被取消）
    pub fn from_join_error(err: tokio::task::JoinError) -> Self {
        if err.is_panic() {
            let payload = err.into_panic();
            let message = if let Some(s) = payload.downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic".to_string()
            };
            DBError::Unexpected(message)
        } else {
            DBError::Unexpected("continuation task was cancelled".to_string())
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DBError::Rejected { .. } => ErrorKind::RemoteRejected,
            DBError::MemoryExceeded => ErrorKind::ResourceExhausted,
            DBError::Unexpected(_) => ErrorKind::Unexpected,
            DBError::PermissionDenied(_) => ErrorKind::PermissionDenied,
        }
    }

    /// 获取原始消息
    ///
    /// `Rejected` 返回元数据服务的原始消息；`MemoryExceeded` 返回固定消息
    pub fn message(&self) -> &str {
        match self {
            DBError::Rejected { source, .. } => &source.message,
            DBError::MemoryExceeded => MEMORY_EXCEEDED_MESSAGE,
            DBError::Unexpected(msg) => msg,
            DBError::PermissionDenied(msg) => msg,
        }
    }
}

// ==================== 对外错误转换实现 ====================

impl ToPublicError for DBError {
    fn to_public_error(&self) -> PublicError {
        PublicError::new(self.to_error_code(), self.to_public_message())
    }

    fn to_error_code(&self) -> ErrorCode {
        match self {
            DBError::Rejected { source, .. } => match source.code {
                MetaErrorCode::NotFound | MetaErrorCode::SpaceNotFound => {
                    ErrorCode::ResourceNotFound
                }
                MetaErrorCode::Existed => ErrorCode::ResourceAlreadyExists,
                MetaErrorCode::LeaderChanged | MetaErrorCode::RpcFailure => {
                    ErrorCode::ResourceUnavailable
                }
                _ => ErrorCode::ExecutionError,
            },
            DBError::MemoryExceeded => ErrorCode::ResourceExhausted,
            DBError::Unexpected(_) => ErrorCode::InternalError,
            DBError::PermissionDenied(_) => ErrorCode::PermissionDenied,
        }
    }

    fn to_public_message(&self) -> String {
        self.to_string()
    }
}
