pub mod error;
pub mod result;
pub mod types;
pub mod value;

// 错误和结果类型
pub use error::{DBError, DBResult, ErrorKind};

// Result 系统
pub use result::{IteratorKind, ResultBuilder};

// 核心数据类型
pub use types::{ColumnDef, PropertyType, SchemaProp, SpaceId, TagId, TagSchema};
pub use value::{DataSet, NullType, Row, Value};
