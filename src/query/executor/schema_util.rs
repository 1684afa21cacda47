//! Schema 格式化工具
//!
//! 把元数据服务返回的 Schema 转换成面向用户的结果行。纯函数，无副作用。

use crate::core::error::{DBError, DBResult};
use crate::core::types::{ColumnDef, PropertyType, TagSchema};
use crate::core::value::{DataSet, Value};

pub const DESC_COLUMNS: [&str; 5] = ["Field", "Type", "Null", "Default", "Comment"];

fn check_column(column: &ColumnDef) -> DBResult<()> {
    if let PropertyType::FixedString(0) = column.property_type {
        return Err(DBError::unexpected(format!(
            "Invalid fixed string length of column `{}'",
            column.name
        )));
    }
    if let Some(default) = &column.default {
        if default.trim().is_empty() {
            return Err(DBError::unexpected(format!(
                "Invalid default value of column `{}'",
                column.name
            )));
        }
    }
    Ok(())
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// 生成 DESCRIBE 的结果，每列一行，保持声明顺序
pub fn to_desc_schema(schema: &TagSchema) -> DBResult<DataSet> {
    let mut dataset = DataSet::with_columns(DESC_COLUMNS);
    for column in &schema.columns {
        check_column(column)?;
        dataset.push_row(vec![
            Value::String(column.name.clone()),
            Value::String(column.property_type.to_string()),
            Value::from(if column.nullable { "YES" } else { "NO" }),
            column
                .default
                .clone()
                .map(Value::String)
                .unwrap_or(Value::Empty),
            column
                .comment
                .clone()
                .map(Value::String)
                .unwrap_or(Value::Empty),
        ]);
    }
    Ok(dataset)
}

/// 把 Schema 还原成规范的 CREATE 语句，单列单行
pub fn to_show_create_schema(is_tag: bool, name: &str, schema: &TagSchema) -> DBResult<DataSet> {
    let (keyword, column_name) = if is_tag {
        ("TAG", "Create Tag")
    } else {
        ("EDGE", "Create Edge")
    };

    let mut lines = Vec::with_capacity(schema.columns.len());
    for column in &schema.columns {
        check_column(column)?;
        let mut line = format!(" `{}` {}", column.name, column.property_type);
        line.push_str(if column.nullable { " NULL" } else { " NOT NULL" });
        if let Some(default) = &column.default {
            line.push_str(&format!(" DEFAULT {}", default));
        }
        if let Some(comment) = &column.comment {
            line.push_str(&format!(" COMMENT \"{}\"", escape(comment)));
        }
        lines.push(line);
    }

    let prop = &schema.prop;
    let ttl_col = prop.ttl_col.as_deref().unwrap_or("");
    if !ttl_col.is_empty() && schema.column(ttl_col).is_none() {
        return Err(DBError::unexpected(format!(
            "TTL column `{}' not found in `{}'",
            ttl_col, name
        )));
    }

    let mut text = format!("CREATE {} `{}` (\n", keyword, name);
    if !lines.is_empty() {
        text.push_str(&lines.join(",\n"));
        text.push('\n');
    }
    text.push_str(&format!(
        ") ttl_duration = {}, ttl_col = \"{}\"",
        prop.ttl_duration.unwrap_or(0),
        ttl_col
    ));
    if let Some(comment) = &prop.comment {
        text.push_str(&format!(", comment = \"{}\"", escape(comment)));
    }

    let mut dataset = DataSet::with_columns([column_name]);
    dataset.push_row(vec![Value::String(text)]);
    Ok(dataset)
}
