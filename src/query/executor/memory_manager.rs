//! 内存管理模块
//!
//! 提供查询执行过程中的内存使用跟踪与检查守卫

use crate::core::error::{DBError, DBResult};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// 内存使用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// 单个查询最大内存使用（字节）
    pub max_query_memory: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            max_query_memory: 100 * 1024 * 1024, // 100MB 默认限制
        }
    }
}

/// 内存使用跟踪器
///
/// 每个查询一个，在执行器和 continuation 之间共享。
/// 语句通过 `child` 取得自己的跟踪器：分配同时计入父跟踪器，
/// 子跟踪器 drop 时把尚未释放的部分从父跟踪器中扣回。
#[derive(Debug)]
pub struct MemoryTracker {
    current_usage: AtomicUsize,
    peak_usage: AtomicUsize,
    limit: usize,
    parent: Option<Arc<MemoryTracker>>,
}

impl MemoryTracker {
    pub fn new(limit: usize) -> Self {
        Self {
            current_usage: AtomicUsize::new(0),
            peak_usage: AtomicUsize::new(0),
            limit,
            parent: None,
        }
    }

    pub fn from_config(config: &MemoryConfig) -> Self {
        Self::new(config.max_query_memory)
    }

    /// 不限制内存（测试或管理查询）
    pub fn unlimited() -> Self {
        Self::new(usize::MAX)
    }

    /// 创建作用于单条语句的子跟踪器，预算与父跟踪器相同
    pub fn child(parent: &Arc<MemoryTracker>) -> Self {
        Self {
            current_usage: AtomicUsize::new(0),
            peak_usage: AtomicUsize::new(0),
            limit: parent.limit,
            parent: Some(Arc::clone(parent)),
        }
    }

    /// 记录一次分配，不做限制检查
    pub fn alloc(&self, size: usize) {
        let current = self.current_usage.fetch_add(size, Ordering::AcqRel);
        self.peak_usage
            .fetch_max(current.saturating_add(size), Ordering::AcqRel);
        if let Some(parent) = &self.parent {
            parent.alloc(size);
        }
    }

    /// 分配内存，超出限制时回滚并返回错误
    pub fn try_alloc(&self, size: usize) -> DBResult<()> {
        let current = self.current_usage.fetch_add(size, Ordering::AcqRel);

        if current.saturating_add(size) > self.limit {
            self.current_usage.fetch_sub(size, Ordering::AcqRel);
            log::warn!(
                "Memory limit exceeded: current={}, requested={}, limit={}",
                current,
                size,
                self.limit
            );
            return Err(DBError::MemoryExceeded);
        }

        if let Some(parent) = &self.parent {
            if let Err(e) = parent.try_alloc(size) {
                self.current_usage.fetch_sub(size, Ordering::AcqRel);
                return Err(e);
            }
        }

        self.peak_usage
            .fetch_max(current + size, Ordering::AcqRel);
        Ok(())
    }

    /// 释放内存
    pub fn free(&self, size: usize) {
        let previous = self
            .current_usage
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                Some(current.saturating_sub(size))
            })
            .unwrap_or_else(|current| current);
        if let Some(parent) = &self.parent {
            parent.free(previous.min(size));
        }
    }

    pub fn current_usage(&self) -> usize {
        self.current_usage.load(Ordering::Acquire)
    }

    pub fn peak_usage(&self) -> usize {
        self.peak_usage.load(Ordering::Acquire)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// 当前使用量是否超出预算，父跟踪器超出同样算超出
    pub fn is_exceeded(&self) -> bool {
        self.current_usage() > self.limit
            || self.parent.as_ref().is_some_and(|parent| parent.is_exceeded())
    }
}

impl Drop for MemoryTracker {
    fn drop(&mut self) {
        if let Some(parent) = &self.parent {
            parent.free(self.current_usage.load(Ordering::Acquire));
        }
    }
}

/// 内存检查守卫
///
/// 在 continuation 开始时创建，`finish` 在返回任何可观察结果之前同步检查预算。
/// 超出预算时，无论远程调用成功与否，结果都被覆盖为 `MemoryExceeded`。
#[must_use = "the outcome must be passed through MemoryCheckGuard::finish"]
pub struct MemoryCheckGuard {
    tracker: Arc<MemoryTracker>,
}

impl MemoryCheckGuard {
    pub fn new(tracker: Arc<MemoryTracker>) -> Self {
        Self { tracker }
    }

    pub fn tracker(&self) -> &MemoryTracker {
        &self.tracker
    }

    /// 检查预算并给出最终结果
    pub fn finish<T>(self, outcome: DBResult<T>) -> DBResult<T> {
        if self.tracker.is_exceeded() {
            log::warn!(
                "Memory check failed after continuation: usage={}, limit={}",
                self.tracker.current_usage(),
                self.tracker.limit()
            );
            return Err(DBError::MemoryExceeded);
        }
        outcome
    }
}
