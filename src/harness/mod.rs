pub mod config;
pub mod driver;
pub mod models;
pub mod policy;
pub mod session;
