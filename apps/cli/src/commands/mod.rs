//! Subcommand implementations. Each writes its output to a caller-supplied
//! writer so it can be exercised without a terminal.

pub mod history;
pub mod play;
pub mod search;

pub use history::{history, recents, show, stats};
pub use play::play;
pub use search::search;
