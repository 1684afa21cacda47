//! 数据集类型模块
//!
//! 表格化结果：有序列名 + 有序行，每行宽度等于列数。

use serde::{Deserialize, Serialize};

use super::types::Value;

pub type Row = Vec<Value>;

/// 简单数据集表示
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DataSet {
    pub col_names: Vec<String>,
    pub rows: Vec<Row>,
}

impl DataSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建带列名的数据集
    ///
    /// 列名必须唯一，重复列名属于编程错误
    pub fn with_columns<S: Into<String>>(col_names: impl IntoIterator<Item = S>) -> Self {
        let col_names: Vec<String> = col_names.into_iter().map(Into::into).collect();
        debug_assert!(
            col_names
                .iter()
                .enumerate()
                .all(|(i, name)| !col_names[..i].contains(name)),
            "duplicate column names: {:?}",
            col_names
        );
        Self {
            col_names,
            rows: Vec::new(),
        }
    }

    /// 添加行
    pub fn push_row(&mut self, row: Row) {
        debug_assert_eq!(
            row.len(),
            self.col_names.len(),
            "row width does not match column count"
        );
        self.rows.push(row);
    }

    /// 获取行数
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 获取列数
    pub fn col_count(&self) -> usize {
        self.col_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 获取指定列的索引
    pub fn get_col_index(&self, col_name: &str) -> Option<usize> {
        self.col_names.iter().position(|name| name == col_name)
    }

    /// 获取指定列的所有值
    pub fn get_column(&self, col_name: &str) -> Option<Vec<Value>> {
        let index = self.get_col_index(col_name)?;
        Some(
            self.rows
                .iter()
                .filter_map(|row| row.get(index).cloned())
                .collect(),
        )
    }

    /// 估算数据集占用的字节数
    pub fn estimated_size(&self) -> usize {
        let names: usize = self.col_names.iter().map(|n| n.len()).sum();
        let cells: usize = self
            .rows
            .iter()
            .flat_map(|row| row.iter())
            .map(Value::estimated_size)
            .sum();
        names + cells
    }
}
