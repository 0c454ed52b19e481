pub mod add;
pub mod delete;
pub mod entry;
pub mod get;

pub use add::*;
pub use delete::*;
pub use entry::*;
pub use get::*;
