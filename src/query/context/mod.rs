//! 查询执行上下文
//!
//! - `session`：客户端会话（当前图空间、角色）
//! - `runner`：continuation 调度所在的线程池
//! - `query_context`：汇总以上句柄，显式传给执行器

pub mod query_context;
pub mod runner;
pub mod session;

pub use query_context::QueryContext;
pub use runner::{ExecutorConfig, Runner};
pub use session::{ClientSession, RoleType, SpaceInfo};
