//! Command Handlers 实现

mod optimize_handlers;

pub use optimize_handlers::*;
