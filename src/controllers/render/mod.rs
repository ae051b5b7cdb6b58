pub mod config;
pub mod request;
pub mod service;
mod worker;
