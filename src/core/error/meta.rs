//! 元数据服务错误类型
//!
//! 元数据服务显式返回的失败状态，消息原样保留给调用方

use thiserror::Error;

/// 元数据服务结果类型
pub type MetaResult<T> = Result<T, MetaError>;

/// 元数据服务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaErrorCode {
    NotFound,
    Existed,
    SpaceNotFound,
    InvalidParam,
    LeaderChanged,
    RpcFailure,
    MemoryExceeded,
    Unknown,
}

/// 元数据服务返回的失败状态
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct MetaError {
    pub code: MetaErrorCode,
    pub message: String,
}

impl MetaError {
    pub fn new(code: MetaErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(MetaErrorCode::NotFound, message)
    }

    pub fn existed(message: impl Into<String>) -> Self {
        Self::new(MetaErrorCode::Existed, message)
    }

    pub fn space_not_found(message: impl Into<String>) -> Self {
        Self::new(MetaErrorCode::SpaceNotFound, message)
    }

    pub fn invalid_param(message: impl Into<String>) -> Self {
        Self::new(MetaErrorCode::InvalidParam, message)
    }

    pub fn memory_exceeded() -> Self {
        Self::new(MetaErrorCode::MemoryExceeded, "Meta client memory exceeded")
    }

    pub fn is_memory_exceeded(&self) -> bool {
        self.code == MetaErrorCode::MemoryExceeded
    }
}
