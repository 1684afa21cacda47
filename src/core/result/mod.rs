pub mod builder;
pub mod result;

pub use builder::ResultBuilder;
pub use result::{IteratorKind, Result};
