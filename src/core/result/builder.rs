//! 结果构建器模块 - 用于构建Result对象

use super::result::{IteratorKind, Result};
use crate::core::value::{NullType, Value};

/// 结果构建器
///
/// 纯函数式组装，不会失败；格式错误的输入属于编程错误
#[derive(Debug, Default)]
pub struct ResultBuilder {
    value: Option<Value>,
    iter_kind: IteratorKind,
}

impl ResultBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置值
    pub fn value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    /// 设置迭代器类型
    pub fn iter(mut self, kind: IteratorKind) -> Self {
        self.iter_kind = kind;
        self
    }

    /// 构建结果
    pub fn build(self) -> Result {
        let value = self.value.unwrap_or(Value::Null(NullType::Null));
        Result::new(value, self.iter_kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::DataSet;

    #[test]
    fn test_build_dataset_result() {
        let mut ds = DataSet::with_columns(["Name"]);
        ds.push_row(vec![Value::from("person")]);

        let result = ResultBuilder::new()
            .value(Value::DataSet(ds))
            .iter(IteratorKind::Default)
            .build();

        assert_eq!(result.iter_kind(), IteratorKind::Default);
        assert_eq!(result.col_names(), ["Name".to_string()]);
        assert_eq!(result.row_count(), 1);
    }

    #[test]
    fn test_build_without_value_is_null() {
        let result = ResultBuilder::new().build();
        assert_eq!(result.value(), &Value::Null(NullType::Null));
        assert_eq!(result.row_count(), 0);
        assert!(result.col_names().is_empty());
    }
}
