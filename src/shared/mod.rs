pub mod config;
pub mod dirs;
pub mod env_var;
pub mod logging;
pub mod preferences;
pub mod reveal;
pub mod table;
