//! GraphDB DDL - 标签 Schema 语句执行层
//!
//! 把 CREATE/DESCRIBE/DROP/SHOW/SHOW CREATE/ALTER TAG 的计划节点转换成对元数据服务的异步调用，
//! 在引擎线程池上完成结果转换，并把所有失败归类为统一的错误种类。

pub mod config;
pub mod core;
pub mod meta;
pub mod query;
pub mod utils;
