//! Value 模块 - 语句结果的值类型
//!
//! - 核心值类型 (`types.rs`)
//! - 数据集类型 (`dataset.rs`)

pub mod dataset;
pub mod types;

pub use dataset::*;
pub use types::*;
