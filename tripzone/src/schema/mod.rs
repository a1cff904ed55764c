mod column_mapping;
mod column_resolver;
pub mod default;

pub use column_mapping::{ColumnMapping, ResolvedColumn};
pub use column_resolver::resolve;
