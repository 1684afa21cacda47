use serde::{Deserialize, Serialize};
use std::fmt;

use super::dataset::DataSet;

/// Null类型定义
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NullType {
    Null,
    BadData,
}

/// 语句结果中的值
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Empty,
    Null(NullType),
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    DataSet(DataSet),
}

impl Value {
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_dataset(&self) -> Option<&DataSet> {
        match self {
            Value::DataSet(ds) => Some(ds),
            _ => None,
        }
    }

    /// 估算值占用的字节数（用于内存追踪）
    pub fn estimated_size(&self) -> usize {
        let inline = std::mem::size_of::<Value>();
        match self {
            Value::String(s) => inline + s.len(),
            Value::DataSet(ds) => inline + ds.estimated_size(),
            _ => inline,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => write!(f, "__EMPTY__"),
            Value::Null(_) => write!(f, "__NULL__"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "{}", s),
            Value::DataSet(ds) => write!(f, "DataSet({} rows)", ds.row_count()),
        }
    }
}
