//! CLI command handlers, one per file.

mod breakpoints;
mod from_map;
mod urls;
mod workspaces;

pub use breakpoints::run_breakpoints;
pub use from_map::run_from_map;
pub use urls::{run_urls, UrlsArgs};
pub use workspaces::run_workspaces;
