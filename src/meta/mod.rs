//! 元数据服务访问层
//!
//! 执行器通过 `MetaClient` 访问 Schema 的权威服务。

pub mod memory_meta_client;
pub mod meta_client;

pub use memory_meta_client::MemoryMetaClient;
pub use meta_client::MetaClient;
