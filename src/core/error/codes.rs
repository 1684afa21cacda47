//! 对外错误码
//!
//! 语句失败返回给客户端时使用的错误码，数值与图数据库的错误码表一致。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    ExecutionError = 200,
    ResourceExhausted = 202,
    PermissionDenied = 400,
    ResourceNotFound = 500,
    ResourceAlreadyExists = 501,
    ResourceUnavailable = 502,
    InternalError = 900,
}

/// 对外错误信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicError {
    pub code: ErrorCode,
    pub message: String,
}

impl PublicError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// 内部错误到对外错误的转换 trait
pub trait ToPublicError {
    fn to_public_error(&self) -> PublicError;

    fn to_error_code(&self) -> ErrorCode;

    fn to_public_message(&self) -> String;
}
