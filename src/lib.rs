pub mod commands;
pub mod core;
pub mod error;
pub mod util;
