pub mod board;
pub mod config;
pub mod context;
pub mod extgit;
pub mod manifest;
pub mod menu;
pub mod session;
pub mod tcl;
pub mod version;
pub mod vivado;
