use crate::core::value::{DataSet, Value};

/// 迭代器类型标记
///
/// 下游结果展示层据此选择遍历方式；DDL 语句只使用 `Default`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IteratorKind {
    /// 默认的非惰性前向迭代
    #[default]
    Default,
    Sequential,
    Prop,
}

/// Result 结构体
///
/// 一条语句成功时交给结果展示层的值，附带迭代方式标记
#[derive(Debug, Clone, PartialEq)]
pub struct Result {
    value: Value,
    iter_kind: IteratorKind,
}

impl Result {
    pub(crate) fn new(value: Value, iter_kind: IteratorKind) -> Self {
        Self { value, iter_kind }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    pub fn iter_kind(&self) -> IteratorKind {
        self.iter_kind
    }

    pub fn dataset(&self) -> Option<&DataSet> {
        self.value.as_dataset()
    }

    pub fn col_names(&self) -> &[String] {
        self.dataset().map(|ds| ds.col_names.as_slice()).unwrap_or(&[])
    }

    pub fn row_count(&self) -> usize {
        self.dataset().map(DataSet::row_count).unwrap_or(0)
    }
}
