//! Command implementations for aide-cli

pub mod add_tool;
pub mod apply;
pub mod list;
pub mod set;

pub use add_tool::run_add_tool;
pub use apply::run_apply;
pub use list::{run_list, run_list_tools};
pub use set::run_set;
