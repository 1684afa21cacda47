//! 执行器线程池
//!
//! 远程调用完成后的 continuation 调度到这里，不保证与发起调用的线程相同。

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::runtime::{Builder, Handle, Runtime};

use crate::core::error::{DBError, DBResult};

/// 执行器线程池配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// 工作线程数，0 表示使用 CPU 核数
    pub worker_threads: usize,
    pub thread_name: String,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            worker_threads: 0,
            thread_name: "graph-executor".to_string(),
        }
    }
}

/// 自建的运行时，drop 时在后台关闭，不阻塞当前线程
#[derive(Debug)]
struct OwnedRuntime(Option<Runtime>);

impl Drop for OwnedRuntime {
    fn drop(&mut self) {
        if let Some(runtime) = self.0.take() {
            runtime.shutdown_background();
            log::info!("Executor runtime shut down");
        }
    }
}

/// 引擎指定的执行上下文
///
/// 持有自建的多线程运行时，或者包装一个已有运行时的句柄。
/// 最后一个克隆可以在任意线程上 drop，包括异步任务内部。
#[derive(Debug, Clone)]
pub struct Runner {
    runtime: Option<Arc<OwnedRuntime>>,
    handle: Handle,
}

impl Runner {
    pub fn new(config: &ExecutorConfig) -> DBResult<Self> {
        let mut builder = Builder::new_multi_thread();
        builder.thread_name(config.thread_name.clone()).enable_all();
        if config.worker_threads > 0 {
            builder.worker_threads(config.worker_threads);
        }
        let runtime = builder
            .build()
            .map_err(|e| DBError::unexpected(format!("Failed to build executor runtime: {}", e)))?;
        log::info!(
            "Executor runtime started: thread_name={}, worker_threads={}",
            config.thread_name,
            config.worker_threads
        );
        let handle = runtime.handle().clone();
        Ok(Self {
            runtime: Some(Arc::new(OwnedRuntime(Some(runtime)))),
            handle,
        })
    }

    pub fn from_handle(handle: Handle) -> Self {
        Self {
            runtime: None,
            handle,
        }
    }

    /// 使用当前所在的运行时
    pub fn current() -> DBResult<Self> {
        Handle::try_current()
            .map(Self::from_handle)
            .map_err(|e| DBError::unexpected(format!("No executor runtime available: {}", e)))
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn owns_runtime(&self) -> bool {
        self.runtime.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_runs_on_named_workers() {
        let runner = Runner::new(&ExecutorConfig {
            worker_threads: 2,
            thread_name: "ddl-test-worker".to_string(),
        })
        .expect("runtime should build");
        assert!(runner.owns_runtime());

        let name = runner.handle().block_on(async {
            tokio::spawn(async { std::thread::current().name().map(str::to_string) })
                .await
                .expect("task should complete")
        });
        assert_eq!(name.as_deref(), Some("ddl-test-worker"));
    }

    #[tokio::test]
    async fn test_owned_runtime_dropped_inside_async_task() {
        let runner = Runner::new(&ExecutorConfig {
            worker_threads: 1,
            thread_name: "ddl-drop-worker".to_string(),
        })
        .expect("runtime should build");
        let value = runner
            .handle()
            .spawn(async { 7 })
            .await
            .expect("task should complete");
        assert_eq!(value, 7);

        tokio::spawn(async move { drop(runner) })
            .await
            .expect("dropping the last clone should not panic");
    }

    #[test]
    fn test_current_outside_runtime_fails() {
        assert!(Runner::current().is_err());
    }

    #[tokio::test]
    async fn test_current_inside_runtime() {
        let runner = Runner::current().expect("inside tokio runtime");
        assert!(!runner.owns_runtime());
    }
}
