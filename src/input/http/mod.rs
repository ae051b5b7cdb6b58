pub mod params;
pub mod server;
