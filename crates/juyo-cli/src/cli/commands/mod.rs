//! CLI command handlers, one file per subcommand.

mod areas;
mod daily;
mod fetch;

pub use areas::run_areas;
pub use daily::run_daily;
pub use fetch::run_fetch;
