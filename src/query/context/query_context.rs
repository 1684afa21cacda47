//! 查询上下文
//!
//! 每条语句执行所需的全部外部句柄都显式放在这里，由调用方传给执行器。

use std::fmt;
use std::sync::Arc;

use super::runner::Runner;
use super::session::ClientSession;
use crate::meta::MetaClient;
use crate::query::executor::memory_manager::MemoryTracker;
use crate::query::permission::PermissionChecker;

/// 查询上下文
///
/// 克隆只复制句柄，所有克隆共享同一个元数据客户端、会话和内存跟踪器
#[derive(Clone)]
pub struct QueryContext {
    meta_client: Arc<dyn MetaClient>,
    session: Arc<ClientSession>,
    memory: Arc<MemoryTracker>,
    runner: Runner,
    permission: PermissionChecker,
}

impl QueryContext {
    pub fn new(meta_client: Arc<dyn MetaClient>, session: Arc<ClientSession>, runner: Runner) -> Self {
        Self {
            meta_client,
            session,
            memory: Arc::new(MemoryTracker::unlimited()),
            runner,
            permission: PermissionChecker::default(),
        }
    }

    pub fn with_memory_tracker(mut self, memory: Arc<MemoryTracker>) -> Self {
        self.memory = memory;
        self
    }

    pub fn with_permission_checker(mut self, permission: PermissionChecker) -> Self {
        self.permission = permission;
        self
    }

    pub fn meta_client(&self) -> &Arc<dyn MetaClient> {
        &self.meta_client
    }

    pub fn session(&self) -> &Arc<ClientSession> {
        &self.session
    }

    pub fn memory_tracker(&self) -> &Arc<MemoryTracker> {
        &self.memory
    }

    pub fn runner(&self) -> &Runner {
        &self.runner
    }

    pub fn permission_checker(&self) -> &PermissionChecker {
        &self.permission
    }
}

impl fmt::Debug for QueryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryContext")
            .field("session", &self.session.id())
            .field("memory", &self.memory)
            .field("runner", &self.runner)
            .field("permission", &self.permission)
            .finish()
    }
}
