pub mod bench;
pub mod config;
pub mod core;
pub mod testdata;
pub mod user_config;
