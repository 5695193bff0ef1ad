// Library for the daemon binary and tests

pub mod command;
pub mod config;
pub mod control;
pub mod error;
pub mod metrics;
pub mod models;
pub mod routes;
pub mod sysinfo_repo;
pub mod version;
