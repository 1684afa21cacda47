use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use crate::core::types::SpaceId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceInfo {
    pub name: String,
    pub id: SpaceId,
}

impl SpaceInfo {
    pub fn new(id: SpaceId, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleType {
    GOD,
    ADMIN,
    DBA,
    USER,
    GUEST,
}

/// ClientSession saves the user, the space chosen by `USE` and the roles the
/// user holds per space. One user corresponds to one ClientSession.
#[derive(Debug)]
pub struct ClientSession {
    session_id: i64,
    user_name: String,
    space: Mutex<Option<SpaceInfo>>,
    roles: Mutex<HashMap<SpaceId, RoleType>>,
}

impl ClientSession {
    pub fn new(session_id: i64, user_name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            session_id,
            user_name: user_name.into(),
            space: Mutex::new(None),
            roles: Mutex::new(HashMap::new()),
        })
    }

    pub fn id(&self) -> i64 {
        self.session_id
    }

    pub fn user(&self) -> &str {
        &self.user_name
    }

    pub fn space(&self) -> Option<SpaceInfo> {
        self.space.lock().clone()
    }

    pub fn set_space(&self, space: SpaceInfo) {
        *self.space.lock() = Some(space);
    }

    pub fn role_with_space(&self, space: SpaceId) -> Option<RoleType> {
        self.roles.lock().get(&space).copied()
    }

    pub fn is_god(&self) -> bool {
        self.roles
            .lock()
            .values()
            .any(|role| matches!(role, RoleType::GOD))
    }

    pub fn set_role(&self, space: SpaceId, role: RoleType) {
        self.roles.lock().insert(space, role);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_space_management() {
        let session = ClientSession::new(123, "testuser");
        assert_eq!(session.id(), 123);
        assert_eq!(session.user(), "testuser");
        assert!(session.space().is_none());

        session.set_space(SpaceInfo::new(1, "test_space"));
        let space = session.space().expect("Space should exist");
        assert_eq!(space.name, "test_space");
        assert_eq!(space.id, 1);
    }

    #[test]
    fn test_session_roles() {
        let session = ClientSession::new(123, "testuser");

        session.set_role(1, RoleType::ADMIN);
        assert_eq!(session.role_with_space(1), Some(RoleType::ADMIN));
        assert!(session.role_with_space(2).is_none());
        assert!(!session.is_god());

        session.set_role(2, RoleType::GOD);
        assert!(session.is_god());
    }
}
