//! CLI command implementations

mod classify;
mod list;

pub use classify::classify;
pub use list::list;
