//! Command implementations

pub mod console;
pub mod dispatch;
pub mod refresh;
