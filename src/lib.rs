pub mod commands;
pub mod config;
pub mod database;
pub mod errors;
pub mod pages;
pub mod server;
pub mod services;
