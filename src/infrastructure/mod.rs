// src/infrastructure/mod.rs
pub mod config;
pub mod json_store;

pub use config::Config;
pub use json_store::JsonStore;
