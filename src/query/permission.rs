//! 权限检查
//!
//! Schema 语句在派发到元数据服务之前，先对当前会话的目标图空间做授权。

use serde::{Deserialize, Serialize};

use crate::core::error::{DBError, DBResult};
use crate::core::types::SpaceId;
use crate::query::context::{ClientSession, RoleType};

/// 授权配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enable_authorize: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enable_authorize: true,
        }
    }
}

/// 操作类型 - 对应不同的权限检查
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    /// DESCRIBE TAG, SHOW TAGS, SHOW CREATE TAG
    ReadSchema,
    /// CREATE TAG, ALTER TAG, DROP TAG
    WriteSchema,
}

/// 权限检查器
///
/// - God 角色拥有所有权限
/// - 读 Schema 需要在该图空间拥有任意角色
/// - 写 Schema 需要 ADMIN 或 DBA
#[derive(Debug, Clone, Default)]
pub struct PermissionChecker {
    auth_config: AuthConfig,
}

impl PermissionChecker {
    pub fn new(auth_config: AuthConfig) -> Self {
        Self { auth_config }
    }

    pub fn check_permission(
        &self,
        session: &ClientSession,
        operation: OperationType,
        space_id: SpaceId,
    ) -> DBResult<()> {
        if !self.auth_config.enable_authorize || session.is_god() {
            return Ok(());
        }

        let role = session.role_with_space(space_id);
        match (operation, role) {
            (OperationType::ReadSchema, Some(_)) => Ok(()),
            (OperationType::WriteSchema, Some(RoleType::ADMIN | RoleType::DBA)) => Ok(()),
            (OperationType::ReadSchema, None) => Err(DBError::PermissionDenied(format!(
                "No permission to read schema in space {}",
                space_id
            ))),
            (OperationType::WriteSchema, _) => Err(DBError::PermissionDenied(format!(
                "No permission to write schema in space {}",
                space_id
            ))),
        }
    }

    pub fn can_read_schema(&self, session: &ClientSession, space_id: SpaceId) -> DBResult<()> {
        self.check_permission(session, OperationType::ReadSchema, space_id)
    }

    pub fn can_write_schema(&self, session: &ClientSession, space_id: SpaceId) -> DBResult<()> {
        self.check_permission(session, OperationType::WriteSchema, space_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    fn checker() -> PermissionChecker {
        PermissionChecker::new(AuthConfig {
            enable_authorize: true,
        })
    }

    #[test]
    fn test_disabled_authorization_allows_everything() {
        let checker = PermissionChecker::new(AuthConfig {
            enable_authorize: false,
        });
        let session = ClientSession::new(1, "nobody");
        assert!(checker.can_write_schema(&session, 1).is_ok());
    }

    #[test]
    fn test_god_can_write_any_space() {
        let session = ClientSession::new(1, "root");
        session.set_role(0, RoleType::GOD);
        assert!(checker().can_write_schema(&session, 7).is_ok());
    }

    #[test]
    fn test_user_reads_but_cannot_write() {
        let session = ClientSession::new(1, "alice");
        session.set_role(1, RoleType::USER);
        assert!(checker().can_read_schema(&session, 1).is_ok());

        let err = checker()
            .can_write_schema(&session, 1)
            .expect_err("USER should not write schema");
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_dba_writes_schema() {
        let session = ClientSession::new(1, "bob");
        session.set_role(1, RoleType::DBA);
        assert!(checker().can_write_schema(&session, 1).is_ok());
        assert!(checker().can_read_schema(&session, 2).is_err());
    }
}
